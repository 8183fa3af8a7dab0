//! Per-category maximum-score table and percentage normalizer.

use crate::errors::EngineError;
use crate::models::breakdown::Category;

/// Fallback maximum for category keys outside the fixed table. The backend
/// may ship new breakdown categories before this crate learns about them;
/// those still need a denominator to render a bar.
pub const DEFAULT_MAX: u32 = 10;

/// Maximum attainable score for a breakdown category. Total: never fails.
pub fn max_for(category: &str) -> u32 {
    Category::parse(category)
        .map(|c| c.max_score())
        .unwrap_or(DEFAULT_MAX)
}

/// `100 * value / max_for(category)`. Errors only if the maximum is zero,
/// which the fixed table never produces; the guard keeps a future bad table
/// entry from panicking in a render path.
pub fn normalize(category: &str, value: u32) -> Result<f64, EngineError> {
    normalize_with_max(category, value, max_for(category))
}

/// Same as [`normalize`] but against a caller-supplied maximum, for callers
/// that carry `(value, max)` pairs through the rendering layer.
pub fn normalize_with_max(category: &str, value: u32, max: u32) -> Result<f64, EngineError> {
    if max == 0 {
        return Err(EngineError::ZeroScale(category.to_string()));
    }
    Ok(100.0 * f64::from(value) / f64::from(max))
}

/// Best-effort percentage: degrades to 0.0 instead of erroring, so no
/// malformed input can abort rendering.
pub fn percentage(category: &str, value: u32) -> f64 {
    normalize(category, value).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::breakdown::CANONICAL_ORDER;

    #[test]
    fn test_known_maxima() {
        assert_eq!(max_for("contact_information"), 15);
        assert_eq!(max_for("skills_section"), 25);
        assert_eq!(max_for("experience_section"), 20);
        assert_eq!(max_for("education_section"), 15);
        assert_eq!(max_for("keyword_optimization"), 15);
        assert_eq!(max_for("format_structure"), 10);
    }

    #[test]
    fn test_unknown_category_defaults_to_ten() {
        assert_eq!(max_for("certifications"), 10);
        assert_eq!(max_for(""), 10);
    }

    #[test]
    fn test_full_score_normalizes_to_hundred() {
        for category in CANONICAL_ORDER {
            let pct = normalize(category.key(), category.max_score()).unwrap();
            assert_eq!(pct, 100.0, "category {}", category.key());
        }
    }

    #[test]
    fn test_normalize_stays_in_range() {
        for category in CANONICAL_ORDER {
            for value in 0..=category.max_score() {
                let pct = normalize(category.key(), value).unwrap();
                assert!((0.0..=100.0).contains(&pct), "{} at {value}", category.key());
            }
        }
    }

    #[test]
    fn test_zero_max_guarded() {
        let err = normalize_with_max("skills_section", 5, 0).unwrap_err();
        assert_eq!(err, EngineError::ZeroScale("skills_section".to_string()));
    }

    #[test]
    fn test_percentage_degrades_to_zero_on_zero_max() {
        assert_eq!(
            normalize_with_max("skills_section", 5, 0).unwrap_or(0.0),
            0.0
        );
    }

    #[test]
    fn test_partial_value() {
        assert_eq!(normalize("skills_section", 5).unwrap(), 20.0);
        let pct = percentage("keyword_optimization", 5);
        assert!((pct - 33.333).abs() < 0.001, "pct was {pct}");
    }
}
