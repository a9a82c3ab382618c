use dioxus::prelude::*;
use tracker_core::model::PhaseIcon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Glyph {
    Phase(PhaseIcon),
    Done,
    Todo,
    Topics,
    Resources,
    Resource,
    Milestone,
}

impl Glyph {
    fn path(self) -> &'static str {
        match self {
            Glyph::Phase(PhaseIcon::Book) | Glyph::Resources => {
                "M4 19.5A2.5 2.5 0 0 1 6.5 17H20V3H6.5A2.5 2.5 0 0 0 4 5.5zM4 19.5A2.5 2.5 0 0 0 6.5 22H20v-5"
            }
            Glyph::Phase(PhaseIcon::Code) => "M16 18l6-6-6-6M8 6l-6 6 6 6",
            Glyph::Phase(PhaseIcon::Target) | Glyph::Topics => {
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20M12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4"
            }
            Glyph::Phase(PhaseIcon::Users) => {
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"
            }
            Glyph::Phase(PhaseIcon::Calendar) => "M3 4h18v18H3zM16 2v4M8 2v4M3 10h18",
            Glyph::Done => "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4L12 14.01l-3-3",
            Glyph::Todo => "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
            Glyph::Resource => "M5 12h14M12 5l7 7-7 7",
            Glyph::Milestone => "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20M12 6v6l4 2",
        }
    }
}

#[component]
pub(super) fn GlyphIcon(glyph: Glyph, class_name: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class_name}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: glyph.path() }
        }
    }
}
