use serde::{Deserialize, Serialize};

/// Rendered weight of a suggestion card. Serialized exactly as the insight
/// grid displays it ("Impact: Very High").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
    Critical,
    #[serde(rename = "Very High")]
    VeryHigh,
    Maintenance,
}

/// Card styling class; drives the border color in the insights grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// One improvement card. Created per evaluation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_very_high_serializes_with_space() {
        assert_eq!(
            serde_json::to_value(Impact::VeryHigh).unwrap(),
            serde_json::json!("Very High")
        );
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Priority::Critical).unwrap(),
            serde_json::json!("critical")
        );
    }
}
