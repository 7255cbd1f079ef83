//! Property-based tests for the document-evaluation engine.
//!
//! Arbitrary valid transcripts must score inside every component's range,
//! at scale 3, reproducibly; any out-of-range grade must abort the run.

use admission_score::scoring::{
    AchievementRecord, ScoreBreakdown, ScoreEngine, ScoreError, ScoreOutcome, Semester,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn semester_grades() -> impl Strategy<Value = Option<Vec<i32>>> {
    proptest::option::of(proptest::collection::vec(0..=5i32, 0..8))
}

fn arts_grades() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(prop::sample::select(vec![0, 3, 4, 5]), 1..10)
}

fn transcript_record() -> impl Strategy<Value = AchievementRecord> {
    (
        prop::sample::select(vec!["CANDIDATE", "GRADUATE"]),
        prop::array::uniform6(semester_grades()),
        arts_grades(),
        prop::array::uniform3(0..15i32),
        prop::array::uniform9(0..12i32),
        prop::array::uniform3(0..20i32),
    )
        .prop_map(
            |(graduation_type, semesters, arts, absent, attendance, volunteer)| {
                let [s11, s12, s21, s22, s31, s32] = semesters;
                AchievementRecord {
                    graduation_type: graduation_type.to_string(),
                    achievement_1_1: s11,
                    achievement_1_2: s12,
                    achievement_2_1: s21,
                    achievement_2_2: s22,
                    achievement_3_1: s31,
                    achievement_3_2: s32,
                    arts_physical_achievement: Some(arts),
                    absent_days: Some(absent.to_vec()),
                    attendance_days: Some(attendance.to_vec()),
                    volunteer_time: Some(volunteer.to_vec()),
                    liberal_system: Some("자유학년제".to_string()),
                    free_semester: None,
                    ged_avg_score: None,
                }
            },
        )
}

fn breakdown(record: &AchievementRecord) -> ScoreBreakdown {
    match ScoreEngine::new().calculate(record) {
        Ok(ScoreOutcome::Transcript(breakdown)) => *breakdown,
        other => panic!("expected transcript breakdown, got {other:?}"),
    }
}

fn within(value: Decimal, max: u32) -> bool {
    value >= Decimal::ZERO && value <= Decimal::from(max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn components_stay_within_their_ranges(record in transcript_record()) {
        let breakdown = breakdown(&record);

        prop_assert!(within(breakdown.general_subjects_score, 180));
        prop_assert!(within(breakdown.arts_physical_subjects_score, 60));
        prop_assert!(within(breakdown.attendance_score, 30));
        prop_assert!(breakdown.volunteer_score >= Decimal::from(6));
        prop_assert!(within(breakdown.volunteer_score, 30));
        prop_assert!(within(breakdown.total_subjects_score, 240));
        prop_assert!(within(breakdown.total_non_subjects_score, 60));
        prop_assert!(within(breakdown.total_score, 300));
        for semester in Semester::SCORED {
            let score = breakdown.semester_scores.get(semester).unwrap_or_default();
            prop_assert!(within(score, 72), "{} scored {}", semester, score);
        }
    }

    #[test]
    fn every_output_carries_three_digits(record in transcript_record()) {
        let breakdown = breakdown(&record);

        for value in [
            breakdown.semester_scores.score_1_2,
            breakdown.semester_scores.score_2_1,
            breakdown.semester_scores.score_2_2,
            breakdown.semester_scores.score_3_1,
            breakdown.semester_scores.score_3_2,
            breakdown.general_subjects_score,
            breakdown.arts_physical_subjects_score,
            breakdown.total_subjects_score,
            breakdown.attendance_score,
            breakdown.volunteer_score,
            breakdown.total_non_subjects_score,
            breakdown.total_score,
        ] {
            prop_assert_eq!(value.scale(), 3);
        }
    }

    #[test]
    fn totals_are_sums_of_components(record in transcript_record()) {
        let breakdown = breakdown(&record);

        prop_assert_eq!(
            breakdown.total_subjects_score,
            breakdown.general_subjects_score + breakdown.arts_physical_subjects_score
        );
        prop_assert_eq!(
            breakdown.total_non_subjects_score,
            breakdown.attendance_score + breakdown.volunteer_score
        );
        prop_assert_eq!(
            breakdown.total_score,
            breakdown.total_subjects_score + breakdown.total_non_subjects_score
        );
    }

    #[test]
    fn scoring_is_deterministic(record in transcript_record()) {
        prop_assert_eq!(breakdown(&record), breakdown(&record));
    }

    #[test]
    fn out_of_range_grade_aborts(
        record in transcript_record(),
        bad in prop_oneof![6..100i32, -100..0i32],
        position in 0..5usize,
    ) {
        let mut record = record;
        let grades = record.achievement_3_1.get_or_insert_with(Vec::new);
        let index = position.min(grades.len());
        grades.insert(index, bad);

        let result = ScoreEngine::new().calculate(&record);

        let is_invalid_level = matches!(
            result,
            Err(ScoreError::InvalidAchievementLevel { value, .. }) if value == bad
        );
        prop_assert!(is_invalid_level);
    }
}
