//! Mock Scoring Service — turns a submitted interview into a result payload.
//!
//! Default: `MockInterviewScorer` (fixed-shape result, randomized scores).
//! The randomness sits behind [`Jitter`] so tests can pin every roll.
//!
//! `AppState` holds an `Arc<dyn InterviewScorer>`, chosen at startup.

pub mod canned;
pub mod jitter;

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::result::{InterviewResult, SkillStatus};
use crate::models::session::SubmitRequest;

pub use jitter::{FixedJitter, Jitter, RandomJitter};

/// Roles scored against the higher technical baseline.
const ENGINEERING_ROLES: [&str; 2] = ["software-engineer", "devops-engineer"];
const ENGINEERING_TECHNICAL_BASE: u32 = 78;
const DEFAULT_TECHNICAL_BASE: u32 = 70;
const SOFT_SKILLS_BASE: u32 = 72;
/// Exclusive upper bound of the bonus rolled onto technical and soft scores.
const SCORE_JITTER: u32 = 10;
const PROBLEM_SOLVING_BASE: u32 = 79;
const PROBLEM_SOLVING_JITTER: u32 = 6;
const MAX_LENGTH_BONUS: u32 = 10;
const MAX_SCORE: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The interview scorer trait. Implement this to swap scoring backends
/// without touching the handler.
#[async_trait]
pub trait InterviewScorer: Send + Sync {
    async fn score(&self, submission: &SubmitRequest) -> Result<InterviewResult, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// MockInterviewScorer
// ────────────────────────────────────────────────────────────────────────────

/// Stand-in for a real evaluation model.
///
/// Scores:
/// 1. technical = min(100, base(role) + roll(10)), soft = min(100, 72 + roll(10))
/// 2. length bonus = min(answers, 10)
/// 3. overall = min(100, round(0.6·technical + 0.4·soft) + bonus/2)
/// 4. reported technical = min(100, technical + bonus)
#[derive(Clone)]
pub struct MockInterviewScorer {
    jitter: Arc<dyn Jitter>,
}

impl MockInterviewScorer {
    pub fn new(jitter: Arc<dyn Jitter>) -> Self {
        Self { jitter }
    }

    pub fn random() -> Self {
        Self::new(Arc::new(RandomJitter))
    }

    pub fn compute(&self, submission: &SubmitRequest) -> InterviewResult {
        let role = submission.role_id();
        let technical_base = if ENGINEERING_ROLES.contains(&role) {
            ENGINEERING_TECHNICAL_BASE
        } else {
            DEFAULT_TECHNICAL_BASE
        };

        let answers_count = submission.answers_count();
        let length_bonus = (answers_count as u32).min(MAX_LENGTH_BONUS);

        let technical = (technical_base + self.jitter.roll(SCORE_JITTER)).min(MAX_SCORE);
        let soft = (SOFT_SKILLS_BASE + self.jitter.roll(SCORE_JITTER)).min(MAX_SCORE);
        let overall = (weighted_overall(technical, soft) + length_bonus / 2).min(MAX_SCORE);
        let problem_solving = PROBLEM_SOLVING_BASE + self.jitter.roll(PROBLEM_SOLVING_JITTER);

        InterviewResult {
            session_id: submission.session_id.clone(),
            role: submission.role.clone(),
            answers_count,
            technical_score: (technical + length_bonus).min(MAX_SCORE),
            soft_skills_score: soft,
            overall_score: overall,
            interview_duration: canned::INTERVIEW_DURATION.to_string(),
            stress_timeline: canned::stress_timeline(),
            skill_breakdown: vec![
                canned::skill("Communication", 85, SkillStatus::Excellent),
                canned::skill("Technical Knowledge", technical, SkillStatus::for_score(technical)),
                canned::skill("Problem Solving", problem_solving, SkillStatus::Good),
                canned::skill("Confidence", soft, SkillStatus::for_score(soft)),
                canned::skill("Eye Contact", 68, SkillStatus::NeedsImprovement),
                canned::skill("Speech Pace", 76, SkillStatus::Good),
            ],
            feedback: canned::feedback(),
        }
    }
}

#[async_trait]
impl InterviewScorer for MockInterviewScorer {
    async fn score(&self, submission: &SubmitRequest) -> Result<InterviewResult, AppError> {
        let result = self.compute(submission);
        tracing::debug!(
            role = submission.role_id(),
            answers = result.answers_count,
            overall = result.overall_score,
            "scored interview submission"
        );
        Ok(result)
    }
}

/// round(0.6·technical + 0.4·soft), half rounded up, in integer arithmetic.
fn weighted_overall(technical: u32, soft: u32) -> u32 {
    (technical * 6 + soft * 4 + 5) / 10
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scorer(roll: u32) -> MockInterviewScorer {
        MockInterviewScorer::new(Arc::new(FixedJitter(roll)))
    }

    fn submission(body: serde_json::Value) -> SubmitRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_weighted_overall_matches_float_rounding() {
        for technical in 0..=100 {
            for soft in 0..=100 {
                let expected = (technical as f64 * 0.6 + soft as f64 * 0.4).round() as u32;
                assert_eq!(weighted_overall(technical, soft), expected, "{technical}/{soft}");
            }
        }
    }

    #[test]
    fn test_software_engineer_three_answers() {
        let result = scorer(4).compute(&submission(json!({
            "sessionId": "abc",
            "role": "software-engineer",
            "answers": ["a", "b", "c"]
        })));

        // technical 78+4=82, soft 72+4=76, overall round(49.2+30.4)=80 (+1)
        assert_eq!(result.technical_score, 85);
        assert_eq!(result.soft_skills_score, 76);
        assert_eq!(result.overall_score, 81);
        assert_eq!(result.answers_count, 3);
        assert_eq!(result.session_id, json!("abc"));
        assert_eq!(result.skill_breakdown.len(), 6);
        assert_eq!(result.stress_timeline.len(), 8);
        assert_eq!(result.skill_breakdown[1].score, 82);
        assert_eq!(result.skill_breakdown[1].status, SkillStatus::Good);
        assert_eq!(result.skill_breakdown[2].score, 83);
    }

    #[test]
    fn test_non_engineering_role_uses_lower_base() {
        let result = scorer(0).compute(&submission(json!({"role": "product-manager", "answers": []})));
        assert_eq!(result.technical_score, 70);
        assert_eq!(result.soft_skills_score, 72);
        assert_eq!(result.overall_score, 71);
        assert_eq!(result.skill_breakdown[1].status, SkillStatus::Fair);
    }

    #[test]
    fn test_devops_is_engineering() {
        let result = scorer(0).compute(&submission(json!({"role": "devops-engineer"})));
        assert_eq!(result.technical_score, 78);
    }

    #[test]
    fn test_missing_answers_scores_as_zero() {
        let result = scorer(9).compute(&SubmitRequest::default());
        assert_eq!(result.answers_count, 0);
        assert_eq!(result.technical_score, 79);
        assert!(result.role.is_null());
    }

    #[test]
    fn test_length_bonus_caps_at_ten() {
        let answers: Vec<String> = (0..25).map(|i| format!("answer {i}")).collect();
        let result = scorer(0).compute(&submission(json!({
            "role": "ui-ux-designer",
            "answers": answers
        })));
        assert_eq!(result.answers_count, 25);
        // 70 + 10, overall round(42+28.8)=71 + 5
        assert_eq!(result.technical_score, 80);
        assert_eq!(result.overall_score, 76);
    }

    #[test]
    fn test_scores_never_exceed_100() {
        let answers: Vec<u32> = (0..12).collect();
        let result = scorer(9).compute(&submission(json!({
            "role": "software-engineer",
            "answers": answers
        })));
        assert!(result.technical_score <= 100);
        assert!(result.overall_score <= 100);
        assert!(result.soft_skills_score <= 100);
    }

    #[tokio::test]
    async fn test_random_scores_stay_in_range() {
        let scorer = MockInterviewScorer::random();
        for count in 0..15 {
            let answers: Vec<String> = (0..count).map(|i| i.to_string()).collect();
            let req = submission(json!({"role": "software-engineer", "answers": answers}));
            let result = scorer.score(&req).await.unwrap();
            for score in [
                result.technical_score,
                result.soft_skills_score,
                result.overall_score,
            ] {
                assert!(score <= 100, "score {score} out of range");
            }
            assert!((78..88).contains(&result.skill_breakdown[1].score));
            assert!((79..85).contains(&result.skill_breakdown[2].score));
        }
    }
}
