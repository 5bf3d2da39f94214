use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillStatus {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl SkillStatus {
    /// Status used for scores that vary per run: good from 80 up, fair below.
    pub fn for_score(score: u32) -> Self {
        if score >= 80 {
            SkillStatus::Good
        } else {
            SkillStatus::Fair
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    pub skill: String,
    pub score: u32,
    pub status: SkillStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub time: String,
    pub stress: u32,
    pub confidence: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Strength,
    Improvement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

/// Scoring payload returned by POST /api/session/submit and shown on the
/// results dashboard. All scores are within 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResult {
    #[serde(default)]
    pub session_id: Value,
    #[serde(default)]
    pub role: Value,
    #[serde(default)]
    pub answers_count: usize,
    pub technical_score: u32,
    pub soft_skills_score: u32,
    pub overall_score: u32,
    pub interview_duration: String,
    pub stress_timeline: Vec<TimelinePoint>,
    pub skill_breakdown: Vec<SkillScore>,
    pub feedback: Vec<FeedbackEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(SkillStatus::NeedsImprovement).unwrap(),
            json!("needs-improvement")
        );
        assert_eq!(serde_json::to_value(FeedbackKind::Strength).unwrap(), json!("strength"));
    }

    #[test]
    fn test_status_threshold_is_80() {
        assert_eq!(SkillStatus::for_score(80), SkillStatus::Good);
        assert_eq!(SkillStatus::for_score(79), SkillStatus::Fair);
    }

    #[test]
    fn test_feedback_kind_serializes_as_type() {
        let entry = FeedbackEntry {
            kind: FeedbackKind::Improvement,
            title: "t".to_string(),
            description: "d".to_string(),
            icon: "AlertCircle".to_string(),
            color: "text-warning".to_string(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "improvement");
        assert!(value.get("kind").is_none());
    }
}
