use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits carried by every published score.
pub const SCORE_SCALE: u32 = 3;

/// Fractional digits kept for the per-semester grade average.
pub const AVERAGE_SCALE: u32 = 5;

/// Round half-up to `scale` digits and pin the scale, so `48` becomes `48.000`.
pub fn round_half_up(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}

pub fn to_score(value: Decimal) -> Decimal {
    round_half_up(value, SCORE_SCALE)
}

pub fn zero_score() -> Decimal {
    to_score(Decimal::ZERO)
}

/// Divide and round half-up to `scale` digits. `divisor` must be non-zero.
pub fn divide_half_up(dividend: Decimal, divisor: Decimal, scale: u32) -> Decimal {
    round_half_up(dividend / divisor, scale)
}
