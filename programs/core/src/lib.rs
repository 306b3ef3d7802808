//! Pure math behind the GudGuess price-prediction game
//!
//! * Q64.96 price codec: `price_x96_from_sqrt_price_x96` and `sqrt_price_x96_from_price_x96`
//! * Weekly epoch calendar: `get_weekly_close_from_timestamp` and
//!   `get_start_end_of_weekly_guess_period`
//! * TWAP helpers over cumulative-tick observations
//!
//! Every function is pure and returns an Anchor `Result`, so an on-chain program can
//! propagate failures with `?`.
pub mod error;
pub mod libraries;
pub mod states;

pub use error::ErrorCode;
pub use libraries::big_num::{U256, U512};
pub use libraries::epoch_math::{
    get_guess_window, get_guess_window_for_close, get_start_end_of_weekly_guess_period,
    get_weekly_close, get_weekly_close_for_guess, get_weekly_close_from_timestamp, GuessWindow,
};
pub use libraries::sqrt_price_math::{
    price_x96_from_ratio, price_x96_from_sqrt_price_x96, sqrt_price_x96_from_price_x96,
};
pub use states::epoch_schedule::{EpochSchedule, Weekday};
pub use states::oracle::Observation;
