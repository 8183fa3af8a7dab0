//! Validating pass-through for the external roadmap generator's output.
//!
//! This is the boundary where raw roadmap data is adapted to the shape the
//! rendering layer consumes. Items arrive in ascending priority (ascending
//! urgency) and leave in exactly that order.

use tracing::warn;

use crate::models::roadmap::{RoadmapItem, RoadmapSummary};

/// Structures a raw roadmap summary for rendering. Inconsistencies are
/// logged and passed through, never rejected: the summary count and the
/// item list come from separate upstream computations and may legitimately
/// diverge when skills are deduplicated there.
pub fn format_roadmap(raw: RoadmapSummary) -> RoadmapSummary {
    let declared = raw.total_skills_to_learn as usize;
    if declared != raw.roadmap.len() {
        warn!(
            total_skills_to_learn = declared,
            items = raw.roadmap.len(),
            "roadmap skill count does not match item list"
        );
    }
    if !priorities_contiguous(&raw.roadmap) {
        warn!("roadmap priorities are not a contiguous 1-based sequence");
    }
    raw
}

fn priorities_contiguous(items: &[RoadmapItem]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(index, item)| item.priority as usize == index + 1)
}
