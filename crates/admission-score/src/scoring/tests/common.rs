use rust_decimal::Decimal;

use crate::scoring::{AchievementRecord, ScoreBreakdown, ScoreEngine, ScoreOutcome};

pub(super) fn candidate_record() -> AchievementRecord {
    AchievementRecord {
        graduation_type: "CANDIDATE".to_string(),
        achievement_1_1: None,
        achievement_1_2: Some(vec![5, 4, 3, 0, 5]),
        achievement_2_1: Some(vec![5, 5, 5, 5]),
        achievement_2_2: Some(vec![4, 4, 4, 4, 4]),
        achievement_3_1: Some(vec![3, 4, 5, 2, 1]),
        achievement_3_2: None,
        arts_physical_achievement: Some(vec![5, 5, 4, 4, 3, 0]),
        absent_days: Some(vec![1, 0, 0]),
        attendance_days: Some(vec![0, 1, 0, 0, 2, 0, 0, 0, 0]),
        volunteer_time: Some(vec![7, 6, 4]),
        liberal_system: Some("자유학년제".to_string()),
        free_semester: None,
        ged_avg_score: None,
    }
}

pub(super) fn graduate_record() -> AchievementRecord {
    AchievementRecord {
        graduation_type: "GRADUATE".to_string(),
        achievement_1_1: None,
        achievement_1_2: Some(vec![5, 5]),
        achievement_2_1: None,
        achievement_2_2: Some(vec![4, 5, 0]),
        achievement_3_1: Some(vec![5, 5, 5]),
        achievement_3_2: Some(vec![3, 3, 3, 3]),
        arts_physical_achievement: Some(vec![3, 4, 5, 3, 4, 5, 3, 4, 5]),
        absent_days: Some(vec![3, 0, 0]),
        attendance_days: Some(vec![0, 0, 0, 1, 0, 1, 0, 2, 2]),
        volunteer_time: Some(vec![7, 3, 5]),
        liberal_system: Some("자유학기제".to_string()),
        free_semester: Some("1-1".to_string()),
        ged_avg_score: None,
    }
}

pub(super) fn ged_record(average: Option<Decimal>) -> AchievementRecord {
    AchievementRecord {
        graduation_type: "GED".to_string(),
        ged_avg_score: average,
        ..AchievementRecord::default()
    }
}

pub(super) fn breakdown_for(record: &AchievementRecord) -> ScoreBreakdown {
    match ScoreEngine::new().calculate(record).expect("record scores") {
        ScoreOutcome::Transcript(breakdown) => *breakdown,
        other => panic!("expected transcript breakdown, got {other:?}"),
    }
}

pub(super) fn assert_score(actual: Decimal, expected: &str) {
    assert_eq!(actual.to_string(), expected, "score {actual} != {expected}");
}
