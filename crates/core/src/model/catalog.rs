use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::{PhaseIndex, TopicKey};
use crate::model::phase::{ColorTag, Phase, PhaseIcon};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// Every catalog, built-in or loaded, has exactly this many phases.
pub const PHASE_COUNT: usize = 5;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog must contain exactly {PHASE_COUNT} phases, found {found}")]
    WrongPhaseCount { found: usize },

    #[error("phase {phase} has an empty title")]
    EmptyTitle { phase: usize },

    #[error("phase {phase} must list at least one topic")]
    NoTopics { phase: usize },

    #[error("phase {phase} topic {topic} is blank")]
    EmptyTopic { phase: usize, topic: usize },
}

//
// ─── DOCUMENT ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    tips: Vec<String>,
    #[serde(default)]
    phases: Vec<PhaseRecord>,
}

#[derive(Debug, Deserialize)]
struct PhaseRecord {
    title: String,
    period: String,
    color: ColorTag,
    icon: PhaseIcon,
    #[serde(default)]
    description: String,
    topics: Vec<String>,
    #[serde(default)]
    resources: Vec<String>,
    #[serde(default)]
    milestone: String,
}

impl PhaseRecord {
    fn validate(self, phase: usize) -> Result<Phase, CatalogError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CatalogError::EmptyTitle { phase });
        }
        if self.topics.is_empty() {
            return Err(CatalogError::NoTopics { phase });
        }

        let mut topics = Vec::with_capacity(self.topics.len());
        for (topic, raw) in self.topics.iter().enumerate() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(CatalogError::EmptyTopic { phase, topic });
            }
            topics.push(trimmed.to_owned());
        }

        Ok(Phase::new(
            title.to_owned(),
            self.period.trim().to_owned(),
            self.color,
            self.icon,
            self.description.trim().to_owned(),
            topics,
            trim_all(self.resources),
            self.milestone.trim().to_owned(),
        ))
    }
}

fn trim_all(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Ordered, immutable list of phases plus the page copy that frames them.
///
/// Topic and phase positions are the identities used for completion
/// tracking, so the catalog never changes after it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseCatalog {
    title: String,
    subtitle: String,
    tips: Vec<String>,
    phases: Vec<Phase>,
}

impl PhaseCatalog {
    /// The five-phase system design curriculum compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded table is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed TOML, `WrongPhaseCount`
    /// unless there are exactly [`PHASE_COUNT`] phases, and a validation
    /// variant when a phase has no title or no topics.
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = toml::from_str(raw)?;
        if doc.phases.len() != PHASE_COUNT {
            return Err(CatalogError::WrongPhaseCount {
                found: doc.phases.len(),
            });
        }

        let phases = doc
            .phases
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: doc.title.trim().to_owned(),
            subtitle: doc.subtitle.trim().to_owned(),
            tips: trim_all(doc.tips),
            phases,
        })
    }

    /// Load a catalog from a TOML file on disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// same errors as [`PhaseCatalog::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            phases = catalog.len(),
            "loaded phase catalog"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    #[must_use]
    pub fn phase(&self, index: PhaseIndex) -> Option<&Phase> {
        self.phases.get(index.value())
    }

    /// Look up a phase position, returning `None` when it is out of range.
    #[must_use]
    pub fn phase_index(&self, index: usize) -> Option<PhaseIndex> {
        (index < self.phases.len()).then(|| PhaseIndex::new(index))
    }

    #[must_use]
    pub fn topic_key(&self, phase: usize, topic: usize) -> Option<TopicKey> {
        let phase_index = self.phase_index(phase)?;
        let count = self.phases[phase].topics().len();
        (topic < count).then(|| TopicKey::new(phase_index, topic))
    }

    pub fn phase_indices(&self) -> impl Iterator<Item = PhaseIndex> + '_ {
        (0..self.phases.len()).map(PhaseIndex::new)
    }

    pub fn enumerate(&self) -> impl Iterator<Item = (PhaseIndex, &Phase)> + '_ {
        self.phases
            .iter()
            .enumerate()
            .map(|(index, phase)| (PhaseIndex::new(index), phase))
    }

    /// Keys for every topic of one phase, paired with the topic text.
    pub fn topics(&self, phase: PhaseIndex) -> impl Iterator<Item = (TopicKey, &str)> + '_ {
        self.phase(phase)
            .into_iter()
            .flat_map(move |p| {
                p.topics()
                    .iter()
                    .enumerate()
                    .map(move |(topic, text)| (TopicKey::new(phase, topic), text.as_str()))
            })
    }

    pub fn all_topic_keys(&self) -> impl Iterator<Item = TopicKey> + '_ {
        self.phase_indices()
            .flat_map(move |phase| self.topics(phase).map(|(key, _)| key))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_HEAD: &str = r#"
        title = "  Rust  "
        subtitle = "five phases"

        [[phases]]
        title = " Basics "
        period = "January"
        color = "green"
        icon = "code"
        topics = [" ownership ", "borrowing"]
        resources = ["The Book", "   "]
    "#;

    const FILLER_PHASE: &str = r#"
        [[phases]]
        title = "Filler"
        period = "Later"
        color = "blue"
        icon = "book"
        topics = ["practice"]
    "#;

    fn minimal() -> String {
        with_phases(PHASE_COUNT - 1)
    }

    fn with_phases(fillers: usize) -> String {
        let mut raw = MINIMAL_HEAD.to_owned();
        for _ in 0..fillers {
            raw.push_str(FILLER_PHASE);
        }
        raw
    }

    #[test]
    fn builtin_has_five_phases_of_six_topics() {
        let catalog = PhaseCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 5);
        for phase in catalog.phases() {
            assert_eq!(phase.topics().len(), 6, "{}", phase.title());
            assert_eq!(phase.resources().len(), 3, "{}", phase.title());
            assert!(!phase.milestone().is_empty());
        }
        assert_eq!(catalog.phases()[0].title(), "Foundation Building");
        assert_eq!(catalog.phases()[0].color(), ColorTag::Blue);
        assert_eq!(catalog.phases()[4].icon(), PhaseIcon::Calendar);
        assert_eq!(catalog.tips().len(), 5);
    }

    #[test]
    fn from_toml_trims_and_drops_blank_resources() {
        let catalog = PhaseCatalog::from_toml_str(&minimal()).unwrap();
        assert_eq!(catalog.title(), "Rust");
        let phase = &catalog.phases()[0];
        assert_eq!(phase.title(), "Basics");
        assert_eq!(phase.topics(), ["ownership", "borrowing"]);
        assert_eq!(phase.resources(), ["The Book"]);
        assert_eq!(phase.milestone(), "");
    }

    #[test]
    fn rejects_catalog_without_phases() {
        let err = PhaseCatalog::from_toml_str("title = \"empty\"").unwrap_err();
        assert!(matches!(err, CatalogError::WrongPhaseCount { found: 0 }));
    }

    #[test]
    fn rejects_catalog_with_too_few_or_too_many_phases() {
        let err = PhaseCatalog::from_toml_str(&with_phases(0)).unwrap_err();
        assert!(matches!(err, CatalogError::WrongPhaseCount { found: 1 }));

        let err = PhaseCatalog::from_toml_str(&with_phases(PHASE_COUNT)).unwrap_err();
        assert!(matches!(err, CatalogError::WrongPhaseCount { found: 6 }));

        let catalog = PhaseCatalog::from_toml_str(&minimal()).unwrap();
        assert_eq!(catalog.len(), PHASE_COUNT);
    }

    #[test]
    fn rejects_phase_without_topics() {
        let raw = minimal().replace(r#"topics = [" ownership ", "borrowing"]"#, "topics = []");
        let err = PhaseCatalog::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::NoTopics { phase: 0 }));
    }

    #[test]
    fn rejects_blank_topic() {
        let raw = minimal().replace("\"borrowing\"", "\"  \"");
        let err = PhaseCatalog::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTopic { phase: 0, topic: 1 }));
    }

    #[test]
    fn rejects_unknown_color() {
        let raw = minimal().replace("\"green\"", "\"teal\"");
        let err = PhaseCatalog::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = PhaseCatalog::load("/definitely/not/here/catalog.toml").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn indices_are_bounded_by_catalog_shape() {
        let catalog = PhaseCatalog::builtin().unwrap();
        assert!(catalog.phase_index(4).is_some());
        assert!(catalog.phase_index(5).is_none());
        assert!(catalog.topic_key(0, 5).is_some());
        assert!(catalog.topic_key(0, 6).is_none());
        assert!(catalog.topic_key(9, 0).is_none());
        assert_eq!(catalog.all_topic_keys().count(), 30);
    }

    #[test]
    fn topics_enumerate_in_display_order() {
        let catalog = PhaseCatalog::from_toml_str(&minimal()).unwrap();
        let phase = catalog.phase_index(0).unwrap();
        let topics = catalog.topics(phase).collect::<Vec<_>>();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[1].0.topic(), 1);
        assert_eq!(topics[1].1, "borrowing");
    }
}
