use dioxus::prelude::*;

use crate::vm::{PhaseCardVm, TopicRowVm, TrackerVm};

use super::actions::TrackerIntent;
use super::icons::{Glyph, GlyphIcon};

/// Pure projection of a `TrackerVm`. Clicks are reported through `on_intent`.
#[component]
pub fn TrackerBoard(vm: TrackerVm, on_intent: Callback<TrackerIntent>) -> Element {
    rsx! {
        div { class: "page tracker-page",
            header { class: "tracker-header card",
                h1 { class: "tracker-title", "{vm.title}" }
                if !vm.subtitle.is_empty() {
                    p { class: "tracker-subtitle", "{vm.subtitle}" }
                }
                div { class: "overall",
                    div { class: "overall-row",
                        span { class: "overall-label", "Overall Progress" }
                        span { class: "overall-value", "{vm.overall_label}" }
                    }
                    div { class: "progress-track progress-track--large",
                        div { class: "progress-fill tone-blue", style: "{vm.overall_bar_style}" }
                    }
                }
            }

            div { class: "phase-list",
                for phase in vm.phases.iter() {
                    PhaseCard { key: "{phase.index}", phase: phase.clone(), on_intent }
                }
            }

            if !vm.tips.is_empty() {
                TipsPanel { tips: vm.tips.clone() }
            }
        }
    }
}

#[component]
fn PhaseCard(phase: PhaseCardVm, on_intent: Callback<TrackerIntent>) -> Element {
    let index = phase.index;
    let tone = phase.tone_class;

    rsx! {
        section { class: "phase card",
            button {
                class: if phase.expanded { "phase-header phase-header--open" } else { "phase-header" },
                r#type: "button",
                aria_expanded: "{phase.expanded}",
                onclick: move |_| on_intent.call(TrackerIntent::TogglePhase(index)),
                div { class: "phase-heading",
                    span { class: "phase-badge {tone}",
                        GlyphIcon { glyph: Glyph::Phase(phase.icon), class_name: "icon" }
                    }
                    div {
                        h2 { class: "phase-title", "{phase.title}" }
                        p { class: "phase-period", "{phase.period}" }
                        p { class: "phase-description", "{phase.description}" }
                    }
                }
                div { class: "phase-progress",
                    div { class: "phase-percent", "{phase.progress_label}" }
                    div { class: "phase-count", "{phase.completed_label}" }
                    div { class: "progress-track",
                        div { class: "progress-fill {tone}", style: "{phase.bar_style}" }
                    }
                }
            }
            if phase.expanded {
                PhaseDetails { phase: phase.clone(), on_intent }
            }
        }
    }
}

#[component]
fn PhaseDetails(phase: PhaseCardVm, on_intent: Callback<TrackerIntent>) -> Element {
    rsx! {
        div { class: "phase-details",
            div { class: "phase-column",
                h3 { class: "section-title",
                    GlyphIcon { glyph: Glyph::Topics, class_name: "icon icon--small" }
                    "Learning Topics"
                }
                div { class: "topic-list",
                    for topic in phase.topics.iter() {
                        TopicRow { key: "{topic.key}", topic: topic.clone(), on_intent }
                    }
                }
            }
            div { class: "phase-column",
                h3 { class: "section-title",
                    GlyphIcon { glyph: Glyph::Resources, class_name: "icon icon--small" }
                    "Resources"
                }
                ul { class: "resource-list",
                    for resource in phase.resources.iter() {
                        li { class: "resource",
                            GlyphIcon { glyph: Glyph::Resource, class_name: "icon icon--tiny" }
                            "{resource}"
                        }
                    }
                }
                if !phase.milestone.is_empty() {
                    div { class: "milestone",
                        h4 { class: "section-title",
                            GlyphIcon { glyph: Glyph::Milestone, class_name: "icon icon--small" }
                            "Phase Milestone"
                        }
                        p { "{phase.milestone}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TopicRow(topic: TopicRowVm, on_intent: Callback<TrackerIntent>) -> Element {
    let key = topic.key;
    let (glyph, icon_class, text_class) = if topic.completed {
        (Glyph::Done, "icon topic-icon topic-icon--done", "topic-text topic-text--done")
    } else {
        (Glyph::Todo, "icon topic-icon", "topic-text")
    };

    rsx! {
        button {
            class: "topic-row",
            r#type: "button",
            aria_pressed: "{topic.completed}",
            onclick: move |_| on_intent.call(TrackerIntent::ToggleTopic(key)),
            GlyphIcon { glyph, class_name: icon_class }
            span { class: text_class, "{topic.text}" }
        }
    }
}

#[component]
fn TipsPanel(tips: Vec<String>) -> Element {
    rsx! {
        aside { class: "tips card",
            h2 { "Success Tips" }
            ul {
                for tip in tips.iter() {
                    li { "• {tip}" }
                }
            }
        }
    }
}
