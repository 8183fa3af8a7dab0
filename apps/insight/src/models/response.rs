//! Response contracts of the external evaluation backend.
//!
//! Two shapes: the bulk screening response (recruiter flow, many candidates)
//! and the single-candidate analysis response (student flow). Both are
//! treated as a versioned contract: every collection and every field the
//! backend may omit deserializes with a default so schema drift degrades
//! instead of failing the whole response.

use serde::{Deserialize, Serialize};

use crate::models::breakdown::ScoreBreakdown;
use crate::models::roadmap::RoadmapSummary;

/// Weighted term from the match explainer. `importance` is 0–1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributingTerm {
    pub term: String,
    #[serde(default)]
    pub importance: f64,
}

/// Narrative attached to a match score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchExplanation {
    #[serde(default)]
    pub overall_assessment: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub top_contributing_terms: Vec<ContributingTerm>,
}

/// Gap analysis against a free-text job description (bulk flow).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGaps {
    #[serde(default)]
    pub gap_percentage: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

/// One screened candidate in the bulk response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateReport {
    pub candidate_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub match_score: f64,
    #[serde(default)]
    pub ats_score: u32,
    #[serde(default)]
    pub ats_breakdown: ScoreBreakdown,
    #[serde(default)]
    pub explanation: MatchExplanation,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub skill_gaps: SkillGaps,
    #[serde(default)]
    pub roadmap: RoadmapSummary,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkScreeningResponse {
    #[serde(default)]
    pub total_candidates: u32,
    #[serde(default)]
    pub candidates: Vec<CandidateReport>,
}

/// Contact and skills block of the single-candidate response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Role-based gap analysis (single-candidate flow). Everything is optional:
/// the backend omits the block entirely when no target role was selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleSkillGaps {
    #[serde(default)]
    pub readiness_score: Option<f64>,
    #[serde(default)]
    pub missing_required: Option<Vec<String>>,
    #[serde(default)]
    pub missing_preferred: Option<Vec<String>>,
    #[serde(default)]
    pub matched_required: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleAnalysisResponse {
    pub ats_score: u32,
    #[serde(default)]
    pub ats_breakdown: ScoreBreakdown,
    #[serde(default)]
    pub candidate_data: CandidateData,
    #[serde(default)]
    pub skill_gaps: RoleSkillGaps,
    #[serde(default)]
    pub roadmap: RoadmapSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::breakdown::Category;
    use serde_json::json;

    #[test]
    fn test_bulk_response_deserializes() {
        let response: BulkScreeningResponse = serde_json::from_value(json!({
            "total_candidates": 1,
            "candidates": [{
                "candidate_name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "N/A",
                "match_score": 72.5,
                "ats_score": 81,
                "ats_breakdown": {
                    "contact_information": 15,
                    "skills_section": 18,
                    "experience_section": 20,
                    "education_section": 15,
                    "keyword_optimization": 5,
                    "format_structure": 8
                },
                "explanation": {
                    "overall_assessment": "Excellent match",
                    "recommendation": "Highly recommended for interview",
                    "explanation": "The candidate demonstrates strong relevant experience.",
                    "top_contributing_terms": [{"term": "python", "importance": 0.82}]
                },
                "skills": ["Python", "SQL"],
                "skill_gaps": {
                    "gap_percentage": 25.0,
                    "matched_skills": ["python", "sql"],
                    "missing_skills": ["docker"]
                },
                "roadmap": {
                    "total_skills_to_learn": 1,
                    "estimated_total_time": "6 weeks",
                    "roadmap": [{"priority": 1, "skill": "docker", "estimated_time": "3-4 weeks"}]
                },
                "experience": ["Engineer at Analytical Engines"],
                "education": ["BSc Mathematics"]
            }]
        }))
        .unwrap();

        assert_eq!(response.total_candidates, 1);
        let candidate = &response.candidates[0];
        assert_eq!(candidate.ats_breakdown.get(Category::SkillsSection), Some(18));
        assert_eq!(candidate.explanation.top_contributing_terms[0].term, "python");
        assert_eq!(candidate.roadmap.roadmap[0].skill, "docker");
    }

    #[test]
    fn test_bulk_candidate_tolerates_missing_blocks() {
        let candidate: CandidateReport =
            serde_json::from_value(json!({"candidate_name": "Grace Hopper"})).unwrap();
        assert!(candidate.ats_breakdown.is_empty());
        assert!(candidate.skill_gaps.missing_skills.is_empty());
        assert!(candidate.roadmap.roadmap.is_empty());
    }

    #[test]
    fn test_single_response_without_target_role() {
        let response: SingleAnalysisResponse = serde_json::from_value(json!({
            "ats_score": 55,
            "ats_breakdown": {"skills_section": 10},
            "candidate_data": {"name": "Unknown", "email": "N/A", "phone": "N/A", "skills": []},
            "skill_gaps": {},
            "roadmap": {}
        }))
        .unwrap();
        assert_eq!(response.skill_gaps.readiness_score, None);
        assert!(response.skill_gaps.missing_required.is_none());
    }

    #[test]
    fn test_single_response_with_role_gaps() {
        let response: SingleAnalysisResponse = serde_json::from_value(json!({
            "ats_score": 70,
            "skill_gaps": {
                "readiness_score": 60.0,
                "missing_required": ["docker", "kubernetes"],
                "missing_preferred": ["terraform"],
                "matched_required": ["git", "linux"]
            }
        }))
        .unwrap();
        assert_eq!(response.skill_gaps.readiness_score, Some(60.0));
        assert_eq!(
            response.skill_gaps.missing_required.as_deref(),
            Some(["docker".to_string(), "kubernetes".to_string()].as_slice())
        );
    }
}
