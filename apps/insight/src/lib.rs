//! Insight — interpretation engine for candidate-evaluation results.
//!
//! ATS scores, job-match scores, skill gaps, and raw learning roadmaps are
//! computed by an external backend. This crate owns the layer between those
//! numbers and the screen: severity tiers per breakdown category, canned
//! improvement tips, a capped list of prioritized suggestions, and a
//! validated roadmap view-model.
//!
//! Everything here is pure and synchronous. Transport, resume parsing, and
//! the scoring algorithms live behind the response contracts in
//! [`models::response`] and are never called from this crate.

pub mod engine;
pub mod errors;
pub mod models;

pub use engine::report::{
    build_ats_report, readiness_summary, AtsReport, BreakdownRow, ReadinessSummary,
};
pub use engine::roadmap::format_roadmap;
pub use engine::severity::{ScoreBand, Severity, SuggestionEligibilityPolicy, TipSeverityPolicy};
pub use engine::suggestions::generate_suggestions;
pub use engine::tips::{tip_for, tip_or_default};
pub use errors::EngineError;
pub use models::breakdown::{Category, ScoreBreakdown};
pub use models::roadmap::{ResourceTiers, RoadmapItem, RoadmapSummary};
pub use models::suggestion::{Impact, Priority, Suggestion};
