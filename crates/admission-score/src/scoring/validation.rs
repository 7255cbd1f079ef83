use std::fmt;

use rust_decimal::Decimal;

use super::domain::{
    AchievementRecord, GraduationType, LiberalCurriculum, Semester, SemesterGrades,
    TranscriptInput, TranscriptTrack, ValidatedRecord,
};

pub const ABSENT_DAY_SLOTS: usize = 3;
pub const ATTENDANCE_DAY_SLOTS: usize = 9;
pub const VOLUNTEER_YEAR_SLOTS: usize = 3;

pub const FREE_SEMESTER_POLICY: &str = "자유학기제";
pub const FREE_YEAR_POLICY: &str = "자유학년제";

const MAX_SUBJECT_LEVEL: i32 = 5;
const MIN_ARTS_PHYSICAL_LEVEL: i32 = 3;
const MAX_SECOND_STAGE_SCORE: Decimal = Decimal::ONE_HUNDRED;
const MAX_DOCUMENT_SCORE: Decimal = Decimal::from_parts(300, 0, 0, false, 0);

/// Input-validation failures. None of these are transient; each aborts the
/// whole calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("invalid achievement level {value} in {scope}")]
    InvalidAchievementLevel { scope: GradeScope, value: i32 },
    #[error("arts/physical-education achievement levels are required")]
    MissingArtsPhysicalGrades,
    #[error("{field} must hold exactly {expected} values (found {found})")]
    InvalidAttendanceShape {
        field: AttendanceField,
        expected: usize,
        found: usize,
    },
    #[error("{field} cannot be negative (found {value})")]
    NegativeAttendanceValue { field: AttendanceField, value: i32 },
    #[error("volunteer time must hold exactly {expected} yearly totals (found {found})")]
    InvalidVolunteerShape { expected: usize, found: usize },
    #[error("volunteer hours cannot be negative (found {value})")]
    NegativeVolunteerHours { value: i32 },
    #[error("unsupported graduation type '{0}'")]
    UnsupportedGraduationType(String),
    #[error("liberal curriculum tag is required")]
    MissingLiberalCurriculumTag,
    #[error("unsupported liberal curriculum tag '{0}'")]
    UnsupportedLiberalCurriculumTag(String),
    #[error("the semester the free-semester policy applied to is required")]
    MissingFreeSemester,
    #[error("'{0}' is not a valid free semester")]
    InvalidFreeSemesterCode(String),
    #[error("GED average score is required")]
    MissingGedAverageScore,
    #[error("GED average score must be within 0-100 (found {0})")]
    GedAverageScoreOutOfRange(Decimal),
    #[error("{component} score must be within 0-100 (found {value})")]
    SecondStageScoreOutOfRange {
        component: SecondStageComponent,
        value: Decimal,
    },
    #[error("document evaluation score must be within 0-300 (found {0})")]
    DocumentScoreOutOfRange(Decimal),
}

impl ScoreError {
    /// Stable identifier for callers that map errors onto their own messages.
    pub const fn code(&self) -> &'static str {
        match self {
            ScoreError::InvalidAchievementLevel { .. } => "INVALID_ACHIEVEMENT_LEVEL",
            ScoreError::MissingArtsPhysicalGrades => "MISSING_ARTS_PHYSICAL_GRADES",
            ScoreError::InvalidAttendanceShape { .. } => "INVALID_ATTENDANCE_SHAPE",
            ScoreError::NegativeAttendanceValue { .. } => "NEGATIVE_ATTENDANCE_VALUE",
            ScoreError::InvalidVolunteerShape { .. } => "INVALID_VOLUNTEER_SHAPE",
            ScoreError::NegativeVolunteerHours { .. } => "NEGATIVE_VOLUNTEER_HOURS",
            ScoreError::UnsupportedGraduationType(_) => "UNSUPPORTED_GRADUATION_TYPE",
            ScoreError::MissingLiberalCurriculumTag => "MISSING_LIBERAL_CURRICULUM_TAG",
            ScoreError::UnsupportedLiberalCurriculumTag(_) => "UNSUPPORTED_LIBERAL_CURRICULUM_TAG",
            ScoreError::MissingFreeSemester => "MISSING_FREE_SEMESTER",
            ScoreError::InvalidFreeSemesterCode(_) => "INVALID_FREE_SEMESTER_CODE",
            ScoreError::MissingGedAverageScore => "MISSING_GED_AVERAGE_SCORE",
            ScoreError::GedAverageScoreOutOfRange(_) => "GED_AVERAGE_SCORE_OUT_OF_RANGE",
            ScoreError::SecondStageScoreOutOfRange { .. } => "SECOND_STAGE_SCORE_OUT_OF_RANGE",
            ScoreError::DocumentScoreOutOfRange(_) => "DOCUMENT_SCORE_OUT_OF_RANGE",
        }
    }
}

/// Where an offending grade was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeScope {
    GeneralSubject(Semester),
    ArtsPhysical,
}

impl fmt::Display for GradeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeScope::GeneralSubject(semester) => write!(f, "general subjects {semester}"),
            GradeScope::ArtsPhysical => f.write_str("arts/physical education"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceField {
    AbsentDays,
    AttendanceDays,
}

impl fmt::Display for AttendanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceField::AbsentDays => f.write_str("absent days"),
            AttendanceField::AttendanceDays => f.write_str("attendance days"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondStageComponent {
    Competency,
    Interview,
}

impl fmt::Display for SecondStageComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecondStageComponent::Competency => f.write_str("competency evaluation"),
            SecondStageComponent::Interview => f.write_str("interview"),
        }
    }
}

/// Validate a raw record, failing on the first violation.
///
/// Order: graduation type, curriculum tags, subject grades (1-1 through 3-2),
/// arts/PE grades, absences, attendance marks, volunteer hours. GED records
/// only need a valid average.
pub fn validate_record(record: &AchievementRecord) -> Result<ValidatedRecord, ScoreError> {
    let track = match record.graduation_type.parse::<GraduationType>()? {
        GraduationType::Ged => {
            let average = check_ged_average(record.ged_avg_score)?;
            return Ok(ValidatedRecord::Ged { average });
        }
        GraduationType::Candidate => TranscriptTrack::Candidate,
        GraduationType::Graduate => TranscriptTrack::Graduate,
    };

    let curriculum = check_liberal_curriculum(
        record.liberal_system.as_deref(),
        record.free_semester.as_deref(),
    )?;

    let semesters = SemesterGrades::from_record(record);
    for (semester, grades) in semesters.iter() {
        check_subject_grades(semester, grades)?;
    }

    let arts_physical = check_arts_physical_grades(record.arts_physical_achievement.as_deref())?;
    let absent_days = check_attendance_counts::<ABSENT_DAY_SLOTS>(
        AttendanceField::AbsentDays,
        record.absent_days.as_deref(),
    )?;
    let attendance_days = check_attendance_counts::<ATTENDANCE_DAY_SLOTS>(
        AttendanceField::AttendanceDays,
        record.attendance_days.as_deref(),
    )?;
    let volunteer_hours = check_volunteer_hours(record.volunteer_time.as_deref())?;

    Ok(ValidatedRecord::Transcript(TranscriptInput {
        track,
        curriculum,
        semesters,
        arts_physical: arts_physical.to_vec(),
        absent_days,
        attendance_days,
        volunteer_hours,
    }))
}

pub fn check_subject_grades(semester: Semester, grades: &[i32]) -> Result<(), ScoreError> {
    match grades
        .iter()
        .find(|grade| !(0..=MAX_SUBJECT_LEVEL).contains(*grade))
    {
        Some(&value) => Err(ScoreError::InvalidAchievementLevel {
            scope: GradeScope::GeneralSubject(semester),
            value,
        }),
        None => Ok(()),
    }
}

/// Arts/PE levels are 0 (not taken) or 3-5.
pub fn check_arts_physical_grades(grades: Option<&[i32]>) -> Result<&[i32], ScoreError> {
    let grades = match grades {
        Some(grades) if !grades.is_empty() => grades,
        _ => return Err(ScoreError::MissingArtsPhysicalGrades),
    };

    match grades
        .iter()
        .find(|grade| **grade != 0 && !(MIN_ARTS_PHYSICAL_LEVEL..=MAX_SUBJECT_LEVEL).contains(*grade))
    {
        Some(&value) => Err(ScoreError::InvalidAchievementLevel {
            scope: GradeScope::ArtsPhysical,
            value,
        }),
        None => Ok(grades),
    }
}

pub fn check_attendance_counts<const N: usize>(
    field: AttendanceField,
    counts: Option<&[i32]>,
) -> Result<[i32; N], ScoreError> {
    let counts = counts.unwrap_or_default();
    if let Some(&value) = counts.iter().find(|count| **count < 0) {
        return Err(ScoreError::NegativeAttendanceValue { field, value });
    }

    <[i32; N]>::try_from(counts).map_err(|_| ScoreError::InvalidAttendanceShape {
        field,
        expected: N,
        found: counts.len(),
    })
}

pub fn check_volunteer_hours(
    hours: Option<&[i32]>,
) -> Result<[i32; VOLUNTEER_YEAR_SLOTS], ScoreError> {
    let hours = hours.unwrap_or_default();
    if let Some(&value) = hours.iter().find(|hour| **hour < 0) {
        return Err(ScoreError::NegativeVolunteerHours { value });
    }

    <[i32; VOLUNTEER_YEAR_SLOTS]>::try_from(hours).map_err(|_| ScoreError::InvalidVolunteerShape {
        expected: VOLUNTEER_YEAR_SLOTS,
        found: hours.len(),
    })
}

/// An empty free-semester code is accepted and means the free semester fell
/// outside the submitted transcript.
pub fn check_liberal_curriculum(
    tag: Option<&str>,
    free_semester: Option<&str>,
) -> Result<LiberalCurriculum, ScoreError> {
    let tag = match tag.map(str::trim) {
        Some(tag) if !tag.is_empty() => tag,
        _ => return Err(ScoreError::MissingLiberalCurriculumTag),
    };

    match tag {
        FREE_SEMESTER_POLICY | "FREE_SEMESTER" => {
            let code = free_semester.ok_or(ScoreError::MissingFreeSemester)?;
            if code.is_empty() {
                return Ok(LiberalCurriculum::FreeSemester { semester: None });
            }
            Semester::from_code(code)
                .map(|semester| LiberalCurriculum::FreeSemester {
                    semester: Some(semester),
                })
                .ok_or_else(|| ScoreError::InvalidFreeSemesterCode(code.to_string()))
        }
        FREE_YEAR_POLICY | "FREE_YEAR" => Ok(LiberalCurriculum::FreeYear),
        other => Err(ScoreError::UnsupportedLiberalCurriculumTag(other.to_string())),
    }
}

pub fn check_ged_average(average: Option<Decimal>) -> Result<Decimal, ScoreError> {
    let average = average.ok_or(ScoreError::MissingGedAverageScore)?;
    if average < Decimal::ZERO || average > Decimal::ONE_HUNDRED {
        return Err(ScoreError::GedAverageScoreOutOfRange(average));
    }
    Ok(average)
}

pub fn check_second_stage_score(
    component: SecondStageComponent,
    value: Decimal,
) -> Result<Decimal, ScoreError> {
    if value < Decimal::ZERO || value > MAX_SECOND_STAGE_SCORE {
        return Err(ScoreError::SecondStageScoreOutOfRange { component, value });
    }
    Ok(value)
}

pub fn check_document_score(value: Decimal) -> Result<Decimal, ScoreError> {
    if value < Decimal::ZERO || value > MAX_DOCUMENT_SCORE {
        return Err(ScoreError::DocumentScoreOutOfRange(value));
    }
    Ok(value)
}
