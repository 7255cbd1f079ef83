use rust_decimal::Decimal;

use super::decimal::to_score;
use super::validation::{
    check_attendance_counts, AttendanceField, ScoreError, ABSENT_DAY_SLOTS, ATTENDANCE_DAY_SLOTS,
};

const MAX_ATTENDANCE_SCORE: i64 = 30;
const DEDUCTION_PER_ABSENCE: i64 = 3;
/// Tardies, early leaves and class absences that add up to one absence.
const MARKS_PER_ABSENCE: i64 = 3;
const ABSENCE_CUTOFF: i64 = 10;

/// Attendance score out of 30: three points off per absence, where every
/// three attendance marks count as one absence. Ten or more absences score 0.
pub fn score_attendance(
    absent_days: Option<&[i32]>,
    attendance_days: Option<&[i32]>,
) -> Result<Decimal, ScoreError> {
    let absent =
        check_attendance_counts::<ABSENT_DAY_SLOTS>(AttendanceField::AbsentDays, absent_days)?;
    let marks = check_attendance_counts::<ATTENDANCE_DAY_SLOTS>(
        AttendanceField::AttendanceDays,
        attendance_days,
    )?;

    let total_absence = sum(&absent);
    if total_absence >= ABSENCE_CUTOFF {
        return Ok(to_score(Decimal::ZERO));
    }

    let marks_as_absence = sum(&marks) / MARKS_PER_ABSENCE;
    let score = MAX_ATTENDANCE_SCORE - DEDUCTION_PER_ABSENCE * (total_absence + marks_as_absence);

    Ok(to_score(Decimal::from(score.max(0))))
}

/// Absence days as reported on the application: absences plus every three
/// attendance marks. Independent of the score; `None` when either list is
/// missing.
pub fn absence_days_count(
    absent_days: Option<&[i32]>,
    attendance_days: Option<&[i32]>,
) -> Option<i64> {
    let absent = absent_days?;
    let marks = attendance_days?;
    Some(sum(absent) + sum(marks) / MARKS_PER_ABSENCE)
}

fn sum(values: &[i32]) -> i64 {
    values.iter().map(|value| i64::from(*value)).sum()
}
