///! Weekly epoch boundaries and guess windows
///!
///! Every epoch boundary is an `anchor_weekday` `anchor_hour`:00 UTC instant. The weekly
///! close of a timestamp is the last second before the first boundary strictly after it.
///! A guess window ends `guess_close_offset` seconds before a weekly close and spans
///! `guess_window_length` seconds, so it depends only on the epoch and not on where the
///! timestamp sits inside it.
///!
use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::UnixTimestamp;

use crate::error::ErrorCode;
use crate::states::epoch_schedule::{EpochSchedule, SECONDS_PER_WEEK};

/// Interval during which guesses for one weekly close are accepted
///
/// Membership is `start < t <= end`, so back-to-back windows never share an instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessWindow {
    pub start: UnixTimestamp,
    pub end: UnixTimestamp,
}

impl GuessWindow {
    pub fn contains(&self, timestamp: UnixTimestamp) -> bool {
        self.start < timestamp && timestamp <= self.end
    }

    pub fn length(&self) -> i64 {
        self.end - self.start
    }
}

/// Returns the last second of the epoch containing `timestamp`
///
/// # Arguments
///
/// * `schedule` - Anchor weekday and hour of epoch boundaries
/// * `timestamp` - Seconds since the UNIX epoch, must not be negative
///
pub fn get_weekly_close(schedule: &EpochSchedule, timestamp: UnixTimestamp) -> Result<UnixTimestamp> {
    require!(timestamp >= 0, ErrorCode::InvalidTimestamp);
    schedule.validate()?;

    // Seconds since the latest boundary at or before `timestamp`
    let elapsed = (timestamp - schedule.anchor_offset()).rem_euclid(SECONDS_PER_WEEK);
    let next_boundary = (timestamp - elapsed)
        .checked_add(SECONDS_PER_WEEK)
        .ok_or(ErrorCode::InvalidTimestamp)?;

    Ok(next_boundary - 1)
}

/// Returns the guess window of the epoch containing `timestamp`
///
/// # Arguments
///
/// * `schedule` - Epoch anchor and guess window offsets
/// * `timestamp` - Seconds since the UNIX epoch, must not be negative
///
pub fn get_guess_window(schedule: &EpochSchedule, timestamp: UnixTimestamp) -> Result<GuessWindow> {
    let weekly_close = get_weekly_close(schedule, timestamp)?;
    get_guess_window_for_close(schedule, weekly_close)
}

/// Returns the guess window predicting `weekly_close`
///
/// Fails with `InvalidTimestamp` if the window would start before the UNIX epoch.
///
/// # Arguments
///
/// * `schedule` - Guess window offsets
/// * `weekly_close` - A weekly close, as returned by `get_weekly_close`
///
pub fn get_guess_window_for_close(
    schedule: &EpochSchedule,
    weekly_close: UnixTimestamp,
) -> Result<GuessWindow> {
    schedule.validate()?;

    let end = weekly_close
        .checked_sub(schedule.guess_close_offset)
        .ok_or(ErrorCode::InvalidTimestamp)?;
    let start = end
        .checked_sub(schedule.guess_window_length)
        .ok_or(ErrorCode::InvalidTimestamp)?;
    require!(start >= 0, ErrorCode::InvalidTimestamp);

    Ok(GuessWindow { start, end })
}

/// Returns the weekly close that a guess submitted at `submitted_at` predicts
///
/// The earliest weekly close whose window contains the submission. `None` if the
/// submission falls between two windows, which only happens when windows are shorter
/// than a week.
///
/// # Arguments
///
/// * `schedule` - Epoch anchor and guess window offsets
/// * `submitted_at` - Submission time, seconds since the UNIX epoch
///
pub fn get_weekly_close_for_guess(
    schedule: &EpochSchedule,
    submitted_at: UnixTimestamp,
) -> Result<Option<UnixTimestamp>> {
    require!(submitted_at >= 0, ErrorCode::InvalidTimestamp);
    schedule.validate()?;

    // First close at or after submitted_at + offset, i.e. the first window ending at or after submitted_at
    let earliest_close = submitted_at
        .checked_add(schedule.guess_close_offset)
        .ok_or(ErrorCode::InvalidTimestamp)?;
    let weekly_close = get_weekly_close(schedule, earliest_close)?;
    let window = get_guess_window_for_close(schedule, weekly_close)?;

    Ok(if window.contains(submitted_at) {
        Some(weekly_close)
    } else {
        None
    })
}

/// Weekly close of `timestamp` under the default schedule
pub fn get_weekly_close_from_timestamp(timestamp: UnixTimestamp) -> Result<UnixTimestamp> {
    get_weekly_close(&EpochSchedule::default(), timestamp)
}

/// Guess window of the epoch containing `timestamp` under the default schedule
pub fn get_start_end_of_weekly_guess_period(timestamp: UnixTimestamp) -> Result<GuessWindow> {
    get_guess_window(&EpochSchedule::default(), timestamp)
}
