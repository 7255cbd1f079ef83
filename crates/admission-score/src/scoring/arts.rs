use rust_decimal::Decimal;

use super::decimal::{divide_half_up, to_score, zero_score, SCORE_SCALE};
use super::validation::{check_arts_physical_grades, ScoreError};

const MAX_ARTS_PHYSICAL_SCORE: u32 = 60;
const MAX_LEVEL: u32 = 5;

/// Arts/PE score out of 60.
///
/// The average over taken subjects is rounded to 3 digits before it is scaled
/// to 60.
pub fn score_arts_physical(grades: Option<&[i32]>) -> Result<Decimal, ScoreError> {
    let grades = check_arts_physical_grades(grades)?;

    let taken = grades.iter().filter(|grade| **grade != 0).count();
    if taken == 0 {
        return Ok(zero_score());
    }

    let sum: i64 = grades.iter().map(|grade| i64::from(*grade)).sum();
    let max_points = Decimal::from(taken) * Decimal::from(MAX_LEVEL);
    let average = divide_half_up(Decimal::from(sum), max_points, SCORE_SCALE);

    Ok(to_score(Decimal::from(MAX_ARTS_PHYSICAL_SCORE) * average))
}
