/// Oracle observations provide time-weighted average prices
///
/// A pool accumulates `tick * seconds elapsed` into `tick_cumulative` on every
/// observation. The arithmetic mean tick over an interval is the difference of two
/// cumulatives divided by the seconds between them, and maps to a sqrt price via
/// `tick_math`.
///
/// Reading observations out of a pool is left to the caller.
///
use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::libraries::big_num::U256;
use crate::libraries::{sqrt_price_math, tick_math};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Observation {
    /// The block timestamp of the observation
    pub block_timestamp: u32,

    /// The tick multiplied by seconds elapsed for the life of the pool as of the observation timestamp
    pub tick_cumulative: i64,
}

impl Observation {
    /// Arithmetic mean tick between this observation and a later one, rounded
    /// toward negative infinity
    ///
    /// Block timestamps are allowed to wrap around `u32::MAX`.
    ///
    /// # Arguments
    ///
    /// * `later` - An observation taken after `self`
    ///
    pub fn arithmetic_mean_tick(&self, later: &Observation) -> Result<i32> {
        let seconds_elapsed = later.block_timestamp.wrapping_sub(self.block_timestamp);
        require!(seconds_elapsed != 0, ErrorCode::ZeroTwapInterval);

        let tick_cumulative_delta = later
            .tick_cumulative
            .checked_sub(self.tick_cumulative)
            .ok_or(ErrorCode::Overflow)?;
        let mean_tick = tick_cumulative_delta.div_euclid(seconds_elapsed as i64);

        let mean_tick = i32::try_from(mean_tick).map_err(|_| ErrorCode::TickOutOfRange)?;
        require!(
            (tick_math::MIN_TICK..=tick_math::MAX_TICK).contains(&mean_tick),
            ErrorCode::TickOutOfRange
        );
        Ok(mean_tick)
    }

    /// Time-weighted sqrt price between this observation and a later one, as a Q64.96
    pub fn twap_sqrt_price_x96(&self, later: &Observation) -> Result<U256> {
        tick_math::get_sqrt_ratio_at_tick(self.arithmetic_mean_tick(later)?)
    }

    /// Time-weighted price between this observation and a later one, as a Q64.96
    pub fn twap_price_x96(&self, later: &Observation) -> Result<U256> {
        sqrt_price_math::price_x96_from_sqrt_price_x96(self.twap_sqrt_price_x96(later)?)
    }
}
