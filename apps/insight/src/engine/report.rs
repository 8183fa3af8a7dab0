//! Per-candidate view-model assembly.
//!
//! Combines the scale, severity, tip, and suggestion pieces into the flat
//! structures the dashboards render: one row per breakdown category plus
//! the banner band and the suggestion grid.

use serde::{Deserialize, Serialize};

use crate::engine::severity::{ScoreBand, Severity};
use crate::engine::{scale, suggestions, tips};
use crate::models::breakdown::{ScoreBreakdown, CANONICAL_ORDER};
use crate::models::suggestion::Suggestion;

/// One rendered line of the detailed breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub category: String,
    pub label: String,
    pub value: u32,
    pub max: u32,
    pub percentage: f64,
    pub severity: Severity,
    pub tip: String,
}

/// Everything the ATS panel needs for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32,
    pub band: ScoreBand,
    pub message: String,
    pub rows: Vec<BreakdownRow>,
    pub suggestions: Vec<Suggestion>,
}

/// Band and label for the career-readiness meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessSummary {
    pub score: f64,
    pub band: ScoreBand,
    pub message: String,
}

/// Builds the full ATS view-model for one candidate. Known categories come
/// first in canonical order; unknown keys still render (sorted, generic tip
/// text) so new backend categories show up instead of vanishing.
pub fn build_ats_report(breakdown: &ScoreBreakdown, ats_score: u32) -> AtsReport {
    let band = ScoreBand::classify(f64::from(ats_score));
    let mut rows = Vec::with_capacity(breakdown.len());

    for category in CANONICAL_ORDER {
        if let Some(value) = breakdown.get(category) {
            rows.push(row(category.key(), category.label().to_string(), value));
        }
    }
    for key in breakdown.unknown_keys() {
        if let Some(value) = breakdown.value_of(key) {
            rows.push(row(key, humanize(key), value));
        }
    }

    AtsReport {
        score: ats_score,
        band,
        message: band.ats_message().to_string(),
        rows,
        suggestions: suggestions::generate_suggestions(breakdown, ats_score),
    }
}

/// Interprets a 0–100 role-readiness score.
pub fn readiness_summary(score: f64) -> ReadinessSummary {
    let band = ScoreBand::classify(score);
    ReadinessSummary {
        score,
        band,
        message: band.readiness_message().to_string(),
    }
}

fn row(key: &str, label: String, value: u32) -> BreakdownRow {
    let max = scale::max_for(key);
    let percentage = scale::percentage(key, value);
    BreakdownRow {
        category: key.to_string(),
        label,
        value,
        max,
        percentage,
        severity: Severity::classify(percentage),
        tip: tips::tip_or_default(key, value, max).to_string(),
    }
}

/// "custom_section" -> "Custom Section", for keys without a curated label.
fn humanize(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
