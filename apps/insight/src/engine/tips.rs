//! Canned per-category tip text for the detailed breakdown view.
//!
//! Fixed table: six curated categories, three tiers each. The table is
//! compiled in and never mutated at runtime.

use crate::engine::scale;
use crate::engine::severity::{Severity, TipSeverityPolicy};
use crate::errors::EngineError;
use crate::models::breakdown::Category;

struct TipSet {
    high: &'static str,
    medium: &'static str,
    low: &'static str,
}

impl TipSet {
    fn for_tier(&self, tier: Severity) -> &'static str {
        match tier {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            // Critical never comes out of the tip policy; read it as low.
            Severity::Low | Severity::Critical => self.low,
        }
    }
}

const fn tip_set(category: Category) -> TipSet {
    match category {
        Category::ContactInformation => TipSet {
            high: "✅ Great! Your contact info is complete and ATS-friendly.",
            medium: "⚠️ Add missing contact details (email, phone, or name).",
            low: "❌ Critical: Add proper contact information at the top of your resume.",
        },
        Category::SkillsSection => TipSet {
            high: "✅ Excellent skill keywords! Well-optimized for ATS.",
            medium: "⚠️ Add 5-10 more relevant technical skills.",
            low: "❌ Add a dedicated Skills section with 10+ relevant keywords.",
        },
        Category::ExperienceSection => TipSet {
            high: "✅ Strong work experience section!",
            medium: "⚠️ Add more experience entries or detail.",
            low: "❌ Add work experience with dates and achievements.",
        },
        Category::EducationSection => TipSet {
            high: "✅ Education section is complete.",
            medium: "⚠️ Ensure degree, institution, and year are included.",
            low: "❌ Add your education details (degree and institution).",
        },
        Category::KeywordOptimization => TipSet {
            high: "✅ Great use of action verbs and keywords!",
            medium: "⚠️ Use more action verbs (developed, managed, led, etc.).",
            low: "❌ Add action verbs and achievements with metrics.",
        },
        Category::FormatStructure => TipSet {
            high: "✅ Well-structured and formatted resume!",
            medium: "⚠️ Improve formatting and section organization.",
            low: "❌ Restructure with clear sections and better formatting.",
        },
    }
}

const GENERIC_TIPS: TipSet = TipSet {
    high: "✅ This section looks solid.",
    medium: "⚠️ This section could use more detail.",
    low: "❌ This section needs attention.",
};

/// Curated tip for a category score. Errors for categories outside the six
/// with tip text; render paths should use [`tip_or_default`] instead so a
/// drifting backend schema never blanks a row.
pub fn tip_for(category: &str, value: u32, max: u32) -> Result<&'static str, EngineError> {
    let known = Category::parse(category)
        .ok_or_else(|| EngineError::UnknownCategory(category.to_string()))?;
    let pct = scale::normalize_with_max(category, value, max)?;
    Ok(tip_set(known).for_tier(TipSeverityPolicy::classify(pct)))
}

/// Best-effort tip: unknown categories (and a zero maximum) fall back to
/// generic text at the right tier instead of erroring.
pub fn tip_or_default(category: &str, value: u32, max: u32) -> &'static str {
    tip_for(category, value, max).unwrap_or_else(|_| {
        let pct = scale::normalize_with_max(category, value, max).unwrap_or(0.0);
        GENERIC_TIPS.for_tier(TipSeverityPolicy::classify(pct))
    })
}
