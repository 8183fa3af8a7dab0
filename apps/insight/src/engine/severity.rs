//! Severity tiers and the threshold policies that assign them.
//!
//! Two separately tuned cut-point sets coexist: the tip table splits at
//! 80/50 while suggestion eligibility is a flat 70. They look like one
//! "how good is this category" judgment but are consumed independently;
//! merging them would change observable output, so each is its own policy.

use serde::{Deserialize, Serialize};

/// Severity of a single breakdown category, ordered least to most healthy.
/// Computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Display bands for a normalized percentage, checked in descending
    /// order so the ranges cannot overlap. `High` reads as "good" here, not
    /// urgent; both the fair (40–59) and poor (<40) bands read as `Low`.
    pub fn classify(percentage: f64) -> Severity {
        if percentage >= 80.0 {
            Severity::High
        } else if percentage >= 60.0 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// Four-band interpretation of an overall 0–100 score. Used for both the
/// ATS score banner and the career-readiness meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn classify(score: f64) -> ScoreBand {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Good
        } else if score >= 40.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    /// Banner text under the ATS score circle.
    pub fn ats_message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "🎉 Excellent! Your resume is ATS-friendly",
            ScoreBand::Good => "✅ Good! Minor improvements needed",
            ScoreBand::Fair => "⚠️ Fair - Needs improvement",
            ScoreBand::Poor => "❌ Poor - Significant changes needed",
        }
    }

    /// Label under the career-readiness meter.
    pub fn readiness_message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "🎉 You're ready!",
            ScoreBand::Good => "💪 Almost there!",
            ScoreBand::Fair => "📚 Keep learning!",
            ScoreBand::Poor => "🚀 Start your journey!",
        }
    }
}

/// Tier policy for the per-category tip table: high ≥80, medium ≥50, low
/// otherwise. Distinct from [`SuggestionEligibilityPolicy`] on purpose.
pub struct TipSeverityPolicy;

impl TipSeverityPolicy {
    pub const HIGH: f64 = 80.0;
    pub const MEDIUM: f64 = 50.0;

    pub fn classify(percentage: f64) -> Severity {
        if percentage >= Self::HIGH {
            Severity::High
        } else if percentage >= Self::MEDIUM {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// A category qualifies for an actionable improvement suggestion below 70%.
pub struct SuggestionEligibilityPolicy;

impl SuggestionEligibilityPolicy {
    pub const THRESHOLD: f64 = 70.0;

    pub fn qualifies(percentage: f64) -> bool {
        percentage < Self::THRESHOLD
    }
}
