mod logging;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracker_core::model::PhaseCatalog;
use ui::{App, UiApp, build_app_context};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

struct DesktopApp {
    catalog: Arc<PhaseCatalog>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<PhaseCatalog> {
        Arc::clone(&self.catalog)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--catalog <path>] [--title <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --catalog  built-in five-phase curriculum");
    eprintln!("  --title    the catalog title");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRACKER_CATALOG, TRACKER_WINDOW_TITLE, RUST_LOG");
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    catalog_path: Option<PathBuf>,
    window_title: Option<String>,
}

impl Args {
    /// Returns `Ok(None)` when help was requested.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());
        let mut parsed = Self {
            catalog_path: non_empty("TRACKER_CATALOG").map(PathBuf::from),
            window_title: non_empty("TRACKER_WINDOW_TITLE"),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    parsed.catalog_path = Some(PathBuf::from(require_value(args, "--catalog")?));
                }
                "--title" => {
                    parsed.window_title = Some(require_value(args, "--title")?);
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(parsed))
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<PhaseCatalog, tracker_core::Error> {
    let catalog = match path {
        Some(path) => PhaseCatalog::load(path)?,
        None => PhaseCatalog::builtin()?,
    };
    tracing::info!(
        source = %path.map_or_else(|| "builtin".to_owned(), |p| p.display().to_string()),
        phases = catalog.len(),
        "catalog ready"
    );
    Ok(catalog)
}

fn run() -> Result<(), BoxError> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let Some(parsed) = parsed else {
        print_usage();
        return Ok(());
    };

    logging::init_logging()?;

    let catalog = Arc::new(load_catalog(parsed.catalog_path.as_ref())?);
    let title = parsed
        .window_title
        .unwrap_or_else(|| catalog.title().to_owned());

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { catalog });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
