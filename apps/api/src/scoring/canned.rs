//! Fixed values shared by every scored interview and by the demonstration
//! result shown when a submission never reached the server.

use serde_json::Value;

use crate::models::result::{
    FeedbackEntry, FeedbackKind, InterviewResult, SkillScore, SkillStatus, TimelinePoint,
};

pub const INTERVIEW_DURATION: &str = "23:45";

const TIMELINE: [(&str, u32, u32); 8] = [
    ("0:30", 45, 65),
    ("2:15", 38, 72),
    ("5:20", 52, 61),
    ("8:45", 35, 78),
    ("12:30", 41, 69),
    ("15:15", 29, 82),
    ("18:40", 33, 79),
    ("21:25", 27, 84),
];

const FEEDBACK: [(FeedbackKind, &str, &str, &str, &str); 4] = [
    (
        FeedbackKind::Strength,
        "Excellent Technical Responses",
        "You provided detailed, accurate answers to technical questions with good examples.",
        "CheckCircle",
        "text-success",
    ),
    (
        FeedbackKind::Improvement,
        "Eye Contact Consistency",
        "Try to maintain more consistent eye contact with the camera throughout your responses.",
        "AlertCircle",
        "text-warning",
    ),
    (
        FeedbackKind::Improvement,
        "Speech Pace Control",
        "You spoke quickly during stressful moments. Practice breathing techniques to maintain steady pace.",
        "Volume2",
        "text-warning",
    ),
    (
        FeedbackKind::Strength,
        "Strong Problem-Solving Approach",
        "Your systematic approach to breaking down complex problems was impressive.",
        "CheckCircle",
        "text-success",
    ),
];

pub fn stress_timeline() -> Vec<TimelinePoint> {
    TIMELINE
        .iter()
        .map(|&(time, stress, confidence)| TimelinePoint {
            time: time.to_string(),
            stress,
            confidence,
        })
        .collect()
}

pub fn feedback() -> Vec<FeedbackEntry> {
    FEEDBACK
        .iter()
        .map(|&(kind, title, description, icon, color)| FeedbackEntry {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        })
        .collect()
}

pub(crate) fn skill(name: &str, score: u32, status: SkillStatus) -> SkillScore {
    SkillScore {
        skill: name.to_string(),
        score,
        status,
    }
}

/// Result shown on the dashboard when no scored result is available.
pub fn demo_result() -> InterviewResult {
    InterviewResult {
        session_id: Value::Null,
        role: Value::Null,
        answers_count: 0,
        technical_score: 82,
        soft_skills_score: 74,
        overall_score: 78,
        interview_duration: INTERVIEW_DURATION.to_string(),
        stress_timeline: stress_timeline(),
        skill_breakdown: vec![
            skill("Communication", 85, SkillStatus::Excellent),
            skill("Technical Knowledge", 82, SkillStatus::Good),
            skill("Problem Solving", 79, SkillStatus::Good),
            skill("Confidence", 71, SkillStatus::Fair),
            skill("Eye Contact", 68, SkillStatus::NeedsImprovement),
            skill("Speech Pace", 76, SkillStatus::Good),
        ],
        feedback: feedback(),
    }
}
