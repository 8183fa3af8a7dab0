//! Improvement suggestions for the insights grid.
//!
//! The scan runs over the canonical category order, appends the generic
//! low-total suggestion, falls back to a single maintenance card, and then
//! truncates to six. Emission order is the contract here: the list is
//! stably truncated, never re-sorted by priority.

use crate::engine::scale;
use crate::engine::severity::SuggestionEligibilityPolicy;
use crate::models::breakdown::{Category, ScoreBreakdown, CANONICAL_ORDER};
use crate::models::suggestion::{Impact, Priority, Suggestion};

/// Hard cap on rendered suggestion cards.
pub const MAX_SUGGESTIONS: usize = 6;

/// Total score below which the generic tailoring suggestion is appended.
pub const TAILORING_THRESHOLD: u32 = 60;

struct Template {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    impact: Impact,
    priority: Priority,
}

impl Template {
    fn build(&self) -> Suggestion {
        Suggestion {
            icon: self.icon.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            impact: self.impact,
            priority: self.priority,
        }
    }
}

/// Curated template per category. `education_section` has none: a weak
/// education score gets its detail tip but no card in the grid.
fn template(category: Category) -> Option<Template> {
    match category {
        Category::SkillsSection => Some(Template {
            icon: "💡",
            title: "Add More Skills",
            description: "Include 10-15 relevant technical skills. Use exact keywords from job descriptions.",
            impact: Impact::High,
            priority: Priority::High,
        }),
        Category::KeywordOptimization => Some(Template {
            icon: "📝",
            title: "Use Action Verbs",
            description: "Start bullet points with strong action verbs like \"Developed\", \"Led\", \"Implemented\", \"Achieved\".",
            impact: Impact::High,
            priority: Priority::High,
        }),
        Category::ExperienceSection => Some(Template {
            icon: "💼",
            title: "Expand Experience",
            description: "Add 2-3 more experience entries with quantifiable achievements and dates.",
            impact: Impact::Medium,
            priority: Priority::Medium,
        }),
        Category::FormatStructure => Some(Template {
            icon: "📄",
            title: "Improve Formatting",
            description: "Use clear section headings, consistent fonts, and bullet points. Aim for 400-600 words.",
            impact: Impact::Medium,
            priority: Priority::Medium,
        }),
        Category::ContactInformation => Some(Template {
            icon: "📧",
            title: "Complete Contact Info",
            description: "Add your full name, professional email, and phone number at the top.",
            impact: Impact::Critical,
            priority: Priority::Critical,
        }),
        Category::EducationSection => None,
    }
}

const TAILORING: Template = Template {
    icon: "🎯",
    title: "Tailor to Job Description",
    description: "Customize your resume for each job by matching keywords from the job posting.",
    impact: Impact::VeryHigh,
    priority: Priority::High,
};

const MAINTENANCE: Template = Template {
    icon: "🎉",
    title: "Great Job!",
    description: "Your resume is well-optimized. Keep updating it with new skills and achievements.",
    impact: Impact::Maintenance,
    priority: Priority::Low,
};

/// Generates the suggestion list for one evaluation. Pure; always returns
/// between one and [`MAX_SUGGESTIONS`] entries.
pub fn generate_suggestions(breakdown: &ScoreBreakdown, total_score: u32) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for category in CANONICAL_ORDER {
        let Some(value) = breakdown.get(category) else {
            continue;
        };
        let pct = scale::percentage(category.key(), value);
        if !SuggestionEligibilityPolicy::qualifies(pct) {
            continue;
        }
        if let Some(template) = template(category) {
            suggestions.push(template.build());
        }
    }

    if total_score < TAILORING_THRESHOLD {
        suggestions.push(TAILORING.build());
    }

    if suggestions.is_empty() {
        suggestions.push(MAINTENANCE.build());
    }

    // Stable truncate, not a priority sort: cards keep scan order even when
    // a critical one lands past the cap.
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
