use serde::{Deserialize, Serialize};

/// Learning resources grouped by tier. Any tier may be absent; an absent
/// tier means "no resources at that tier", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beginner: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<Vec<String>>,
}

impl ResourceTiers {
    pub fn is_empty(&self) -> bool {
        self.beginner.is_none() && self.intermediate.is_none() && self.general.is_none()
    }
}

/// One remediation step from the external roadmap generator. Read-only
/// after construction; `priority` is a 1-based positional rank, ascending
/// urgency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub priority: u32,
    pub skill: String,
    #[serde(default)]
    pub estimated_time: String,
    #[serde(default)]
    pub milestones: Vec<String>,
    #[serde(default)]
    pub resources: ResourceTiers,
}

impl RoadmapItem {
    /// Rendering contract: an empty milestone list suppresses the milestone
    /// block entirely, so "present" means non-empty here.
    pub fn has_milestones(&self) -> bool {
        !self.milestones.is_empty()
    }
}

/// The roadmap generator's summary. `roadmap` order is exactly what was
/// received and must never be re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapSummary {
    #[serde(default)]
    pub total_skills_to_learn: u32,
    #[serde(default)]
    pub estimated_total_time: String,
    #[serde(default)]
    pub roadmap: Vec<RoadmapItem>,
    /// Set by the generator when there are no gaps ("No skill gaps!"); the
    /// count and time fields are omitted in that case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
