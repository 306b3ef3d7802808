use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // libraries/sqrt_price_math.rs

    #[msg("Arithmetic result exceeds the representable width")]
    Overflow,
    #[msg("Denominator should be greater than 0")]
    DivisionByZero,

    // libraries/epoch_math.rs

    // Input predates the UNIX epoch, or a derived boundary leaves the i64 range
    #[msg("Invalid timestamp")]
    InvalidTimestamp,
    #[msg("Anchor hour should be less than 24 and guess offsets should be positive")]
    InvalidEpochSchedule,

    // libraries/tick_math.rs

    // Also raised by states/oracle.rs for a mean tick outside the range
    #[msg("Tick should be within [MIN_TICK, MAX_TICK]")]
    TickOutOfRange,

    // states/oracle.rs

    #[msg("Observations should be taken at different timestamps")]
    ZeroTwapInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_out_of_range_message_names_the_bounds() {
        assert_eq!(
            ErrorCode::TickOutOfRange.to_string(),
            "Tick should be within [MIN_TICK, MAX_TICK]"
        );
    }
}
