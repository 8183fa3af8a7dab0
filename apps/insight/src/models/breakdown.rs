use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The six breakdown categories the ATS scorer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ContactInformation,
    SkillsSection,
    ExperienceSection,
    EducationSection,
    KeywordOptimization,
    FormatStructure,
}

/// Canonical scan order for every pass over a breakdown. Iterating the raw
/// map instead would make suggestion output depend on hash order.
pub const CANONICAL_ORDER: [Category; 6] = [
    Category::ContactInformation,
    Category::SkillsSection,
    Category::ExperienceSection,
    Category::EducationSection,
    Category::KeywordOptimization,
    Category::FormatStructure,
];

impl Category {
    /// The key used by the backend in `ats_breakdown`.
    pub fn key(&self) -> &'static str {
        match self {
            Category::ContactInformation => "contact_information",
            Category::SkillsSection => "skills_section",
            Category::ExperienceSection => "experience_section",
            Category::EducationSection => "education_section",
            Category::KeywordOptimization => "keyword_optimization",
            Category::FormatStructure => "format_structure",
        }
    }

    pub fn parse(key: &str) -> Option<Category> {
        match key {
            "contact_information" => Some(Category::ContactInformation),
            "skills_section" => Some(Category::SkillsSection),
            "experience_section" => Some(Category::ExperienceSection),
            "education_section" => Some(Category::EducationSection),
            "keyword_optimization" => Some(Category::KeywordOptimization),
            "format_structure" => Some(Category::FormatStructure),
            _ => None,
        }
    }

    /// Maximum attainable score for this category.
    pub fn max_score(&self) -> u32 {
        match self {
            Category::ContactInformation => 15,
            Category::SkillsSection => 25,
            Category::ExperienceSection => 20,
            Category::EducationSection => 15,
            Category::KeywordOptimization => 15,
            Category::FormatStructure => 10,
        }
    }

    /// Display label, e.g. "Keyword Optimization".
    pub fn label(&self) -> &'static str {
        match self {
            Category::ContactInformation => "Contact Information",
            Category::SkillsSection => "Skills Section",
            Category::ExperienceSection => "Experience Section",
            Category::EducationSection => "Education Section",
            Category::KeywordOptimization => "Keyword Optimization",
            Category::FormatStructure => "Format Structure",
        }
    }
}

/// Per-category ATS scores as received from the backend. Immutable once
/// deserialized. Unknown keys are kept rather than rejected: the breakdown
/// shape is a versioned contract and may grow ahead of this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBreakdown(HashMap<String, u32>);

impl ScoreBreakdown {
    pub fn new(scores: HashMap<String, u32>) -> Self {
        ScoreBreakdown(scores)
    }

    pub fn get(&self, category: Category) -> Option<u32> {
        self.0.get(category.key()).copied()
    }

    pub fn value_of(&self, key: &str) -> Option<u32> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys outside the six known categories, sorted for deterministic
    /// iteration.
    pub fn unknown_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .0
            .keys()
            .map(String::as_str)
            .filter(|k| Category::parse(k).is_none())
            .collect();
        keys.sort_unstable();
        keys
    }
}

impl FromIterator<(String, u32)> for ScoreBreakdown {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        ScoreBreakdown(iter.into_iter().collect())
    }
}
