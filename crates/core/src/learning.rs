use serde::Serialize;

use crate::risk::RiskLevel;

/// Lesson catalog. Ids are stable; the frontend keys lesson content off them.
const LESSONS: &[(u32, &str)] = &[
    (1, "Understanding Credit Utilization"),
    (2, "Managing Payment Deadlines"),
    (3, "Interest Rates Explained"),
    (4, "Good Debt vs Bad Debt"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonRecommendation {
    pub id: u32,
    pub title: String,
    pub reason: String,
}

fn lesson(id: u32, reason: &str) -> LessonRecommendation {
    let title = LESSONS
        .iter()
        .find(|(lesson_id, _)| *lesson_id == id)
        .map(|(_, title)| *title)
        .unwrap_or("");

    LessonRecommendation {
        id,
        title: title.to_string(),
        reason: reason.to_string(),
    }
}

/// Picks the lessons a user should see for their utilization and risk
/// profile. Always returns at least one recommendation.
pub fn recommend_lessons(utilization: f64, risk_level: RiskLevel) -> Vec<LessonRecommendation> {
    let mut recommended = Vec::new();

    if utilization > 30.0 {
        recommended.push(lesson(1, "High Utilization Alert"));
    }

    if matches!(risk_level, RiskLevel::Medium | RiskLevel::High) {
        recommended.push(lesson(2, "Risk Management"));
    }

    if recommended.is_empty() {
        recommended.push(lesson(4, "General Financial Literacy"));
    }

    recommended
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_profile_gets_the_default_lesson() {
        let lessons = recommend_lessons(10.0, RiskLevel::Low);
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].id, 4);
        assert_eq!(lessons[0].reason, "General Financial Literacy");
    }

    #[test]
    fn high_utilization_triggers_the_utilization_lesson() {
        let lessons = recommend_lessons(55.0, RiskLevel::Low);
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].id, 1);
        assert_eq!(lessons[0].title, "Understanding Credit Utilization");
    }

    #[test]
    fn risky_profile_gets_both_lessons() {
        let lessons = recommend_lessons(75.0, RiskLevel::High);
        let ids: Vec<u32> = lessons.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn medium_risk_alone_gets_deadline_lesson() {
        let lessons = recommend_lessons(10.0, RiskLevel::Medium);
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].id, 2);
        assert_eq!(lessons[0].reason, "Risk Management");
    }
}
