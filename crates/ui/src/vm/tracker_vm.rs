use tracker_core::Tracker;
use tracker_core::model::{ColorTag, PhaseIcon, PhaseIndex, TopicKey};

/// Everything the tracker page shows, already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerVm {
    pub title: String,
    pub subtitle: String,
    pub overall_label: String,
    pub overall_bar_style: String,
    pub phases: Vec<PhaseCardVm>,
    pub tips: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseCardVm {
    pub index: PhaseIndex,
    pub title: String,
    pub period: String,
    pub description: String,
    pub tone_class: &'static str,
    pub icon: PhaseIcon,
    pub progress_label: String,
    /// "done/total topics" for the header.
    pub completed_label: String,
    pub bar_style: String,
    pub expanded: bool,
    pub topics: Vec<TopicRowVm>,
    pub resources: Vec<String>,
    pub milestone: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRowVm {
    pub key: TopicKey,
    pub text: String,
    pub completed: bool,
}

#[must_use]
pub fn map_tracker_vm(tracker: &Tracker) -> TrackerVm {
    let catalog = tracker.catalog();
    let overall = tracker.overall_progress();

    let phases = catalog
        .enumerate()
        .map(|(index, phase)| {
            let progress = tracker.phase_progress(index);
            let topics = catalog
                .topics(index)
                .map(|(key, text)| TopicRowVm {
                    key,
                    text: text.to_owned(),
                    completed: tracker.is_complete(key),
                })
                .collect();

            PhaseCardVm {
                index,
                title: phase.title().to_owned(),
                period: phase.period().to_owned(),
                description: phase.description().to_owned(),
                tone_class: tone_class(phase.color()),
                icon: phase.icon(),
                progress_label: progress.to_string(),
                completed_label: format!(
                    "{}/{} topics",
                    tracker.completed_count(index),
                    phase.topics().len()
                ),
                bar_style: bar_style(progress.value()),
                expanded: tracker.is_expanded(index),
                topics,
                resources: phase.resources().to_vec(),
                milestone: phase.milestone().to_owned(),
            }
        })
        .collect();

    TrackerVm {
        title: catalog.title().to_owned(),
        subtitle: catalog.subtitle().to_owned(),
        overall_label: overall.to_string(),
        overall_bar_style: bar_style(overall.value()),
        phases,
        tips: catalog.tips().to_vec(),
    }
}

fn tone_class(color: ColorTag) -> &'static str {
    match color {
        ColorTag::Blue => "tone-blue",
        ColorTag::Green => "tone-green",
        ColorTag::Purple => "tone-purple",
        ColorTag::Orange => "tone-orange",
        ColorTag::Red => "tone-red",
    }
}

fn bar_style(percent: u8) -> String {
    format!("width: {percent}%")
}
