use rust_decimal::Decimal;

use super::decimal::to_score;
use super::validation::{check_volunteer_hours, ScoreError};

/// (minimum yearly hours, points) from the highest tier down.
const VOLUNTEER_TIERS: [(i32, u32); 4] = [(7, 10), (6, 8), (5, 6), (4, 4)];
/// Awarded below the lowest tier, including a year with no hours at all.
const BASE_POINTS: u32 = 2;

/// Volunteer score out of 30, one tier lookup per school year.
pub fn score_volunteer(hours: Option<&[i32]>) -> Result<Decimal, ScoreError> {
    let hours = check_volunteer_hours(hours)?;
    let points: u32 = hours.iter().map(|hour| tier_points(*hour)).sum();
    Ok(to_score(Decimal::from(points)))
}

pub fn tier_points(hours: i32) -> u32 {
    VOLUNTEER_TIERS
        .iter()
        .find(|(minimum, _)| hours >= *minimum)
        .map(|(_, points)| *points)
        .unwrap_or(BASE_POINTS)
}
