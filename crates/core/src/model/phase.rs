use serde::{Deserialize, Serialize};

/// Symbolic accent used to tint a phase's badge and progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
}

/// Decorative marker shown in a phase's badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseIcon {
    Book,
    Code,
    Target,
    Users,
    Calendar,
}

/// One curriculum stage.
///
/// Built by the catalog loader, which trims every string and guarantees at
/// least one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    title: String,
    period: String,
    color: ColorTag,
    icon: PhaseIcon,
    description: String,
    topics: Vec<String>,
    resources: Vec<String>,
    milestone: String,
}

impl Phase {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub(crate) fn new(
        title: String,
        period: String,
        color: ColorTag,
        icon: PhaseIcon,
        description: String,
        topics: Vec<String>,
        resources: Vec<String>,
        milestone: String,
    ) -> Self {
        Self {
            title,
            period,
            color,
            icon,
            description,
            topics,
            resources,
            milestone,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Human-readable month/year label.
    #[must_use]
    pub fn period(&self) -> &str {
        &self.period
    }

    #[must_use]
    pub fn color(&self) -> ColorTag {
        self.color
    }

    #[must_use]
    pub fn icon(&self) -> PhaseIcon {
        self.icon
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Topics in display order. The position is the topic's identity.
    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    #[must_use]
    pub fn milestone(&self) -> &str {
        &self.milestone
    }
}
