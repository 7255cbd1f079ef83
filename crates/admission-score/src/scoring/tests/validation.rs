use super::common::*;
use crate::scoring::validation::{AttendanceField, GradeScope};
use crate::scoring::{
    validate_record, LiberalCurriculum, ScoreEngine, ScoreError, Semester, ValidatedRecord,
};

fn curriculum_of(record: &crate::scoring::AchievementRecord) -> LiberalCurriculum {
    match validate_record(record).expect("record validates") {
        ValidatedRecord::Transcript(input) => input.curriculum,
        other => panic!("expected transcript, got {other:?}"),
    }
}

#[test]
fn subject_grade_outside_range_names_semester() {
    for bad in [6, -1] {
        let mut record = candidate_record();
        record.achievement_2_2 = Some(vec![4, bad]);

        assert_eq!(
            validate_record(&record),
            Err(ScoreError::InvalidAchievementLevel {
                scope: GradeScope::GeneralSubject(Semester::Y2S2),
                value: bad,
            })
        );
    }
}

#[test]
fn unscored_first_semester_is_still_validated() {
    let mut record = graduate_record();
    record.achievement_1_1 = Some(vec![6]);

    assert_eq!(
        validate_record(&record),
        Err(ScoreError::InvalidAchievementLevel {
            scope: GradeScope::GeneralSubject(Semester::Y1S1),
            value: 6,
        })
    );
}

#[test]
fn unknown_graduation_type_is_rejected() {
    let mut record = candidate_record();
    record.graduation_type = "STUDENT".to_string();

    let error = validate_record(&record).unwrap_err();

    assert_eq!(
        error,
        ScoreError::UnsupportedGraduationType("STUDENT".to_string())
    );
    assert_eq!(error.code(), "UNSUPPORTED_GRADUATION_TYPE");
}

#[test]
fn liberal_curriculum_tag_is_required() {
    for tag in [None, Some("  ".to_string())] {
        let mut record = candidate_record();
        record.liberal_system = tag;

        assert_eq!(
            validate_record(&record),
            Err(ScoreError::MissingLiberalCurriculumTag)
        );
    }

    let mut record = candidate_record();
    record.liberal_system = Some("open-year".to_string());
    assert_eq!(
        validate_record(&record),
        Err(ScoreError::UnsupportedLiberalCurriculumTag("open-year".to_string()))
    );
}

#[test]
fn free_semester_policy_needs_a_semester_code() {
    let mut record = graduate_record();
    record.free_semester = None;
    assert_eq!(
        validate_record(&record),
        Err(ScoreError::MissingFreeSemester)
    );

    record.free_semester = Some("4-1".to_string());
    assert_eq!(
        validate_record(&record),
        Err(ScoreError::InvalidFreeSemesterCode("4-1".to_string()))
    );

    record.free_semester = Some(String::new());
    assert_eq!(
        curriculum_of(&record),
        LiberalCurriculum::FreeSemester { semester: None }
    );

    record.free_semester = Some("2-1".to_string());
    assert_eq!(
        curriculum_of(&record),
        LiberalCurriculum::FreeSemester {
            semester: Some(Semester::Y2S1)
        }
    );
}

#[test]
fn ascii_curriculum_aliases_are_accepted() {
    let mut record = candidate_record();
    record.liberal_system = Some("FREE_YEAR".to_string());
    assert_eq!(curriculum_of(&record), LiberalCurriculum::FreeYear);

    record.liberal_system = Some("FREE_SEMESTER".to_string());
    record.free_semester = Some("1-2".to_string());
    assert_eq!(
        curriculum_of(&record),
        LiberalCurriculum::FreeSemester {
            semester: Some(Semester::Y1S2)
        }
    );
}

#[test]
fn attendance_lists_must_have_exact_shape() {
    let mut record = candidate_record();
    record.absent_days = Some(vec![1, 0]);
    assert_eq!(
        validate_record(&record),
        Err(ScoreError::InvalidAttendanceShape {
            field: AttendanceField::AbsentDays,
            expected: 3,
            found: 2,
        })
    );

    let mut record = candidate_record();
    record.attendance_days = None;
    assert_eq!(
        validate_record(&record),
        Err(ScoreError::InvalidAttendanceShape {
            field: AttendanceField::AttendanceDays,
            expected: 9,
            found: 0,
        })
    );
}

#[test]
fn negative_attendance_is_reported_before_shape() {
    let mut record = candidate_record();
    record.absent_days = Some(vec![-1, 0]);

    assert_eq!(
        validate_record(&record),
        Err(ScoreError::NegativeAttendanceValue {
            field: AttendanceField::AbsentDays,
            value: -1,
        })
    );
}

#[test]
fn missing_arts_grades_are_rejected() {
    let mut record = candidate_record();
    record.arts_physical_achievement = Some(Vec::new());

    assert_eq!(
        validate_record(&record),
        Err(ScoreError::MissingArtsPhysicalGrades)
    );
}

#[test]
fn first_violation_wins() {
    let mut record = candidate_record();
    record.achievement_3_1 = Some(vec![9]);
    record.arts_physical_achievement = None;
    record.volunteer_time = Some(vec![-3, 0, 0]);

    let error = ScoreEngine::new().calculate(&record).unwrap_err();

    assert_eq!(error.code(), "INVALID_ACHIEVEMENT_LEVEL");

    record.achievement_3_1 = Some(vec![5]);
    let error = ScoreEngine::new().calculate(&record).unwrap_err();
    assert_eq!(error, ScoreError::MissingArtsPhysicalGrades);
}

#[test]
fn graduation_type_is_parsed_case_insensitively() {
    let mut record = candidate_record();
    record.graduation_type = " candidate ".to_string();

    assert!(validate_record(&record).is_ok());
}
