/// The epoch schedule pins weekly pricing epochs to a fixed UTC weekday and hour,
/// and places each epoch's guess window relative to its weekly close.
///
/// The default schedule closes epochs at Monday 00:00 UTC, stops accepting guesses
/// three days before the close, and keeps each guess window open for one week.
///
use anchor_lang::prelude::*;

use crate::error::ErrorCode;

pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_WEEK: i64 = 604_800;

/// 1970-01-01 was a Thursday
const UNIX_EPOCH_DAYS_FROM_MONDAY: i64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn days_from_monday(self) -> i64 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpochSchedule {
    /// UTC weekday on which every epoch boundary falls
    pub anchor_weekday: Weekday,

    /// UTC hour of the epoch boundary, in [0, 24)
    pub anchor_hour: u8,

    /// Seconds between the end of a guess window and the weekly close it predicts
    pub guess_close_offset: i64,

    /// Length of a guess window in seconds
    pub guess_window_length: i64,
}

impl Default for EpochSchedule {
    fn default() -> Self {
        EpochSchedule {
            anchor_weekday: Weekday::Monday,
            anchor_hour: 0,
            guess_close_offset: 3 * SECONDS_PER_DAY,
            guess_window_length: SECONDS_PER_WEEK,
        }
    }
}

impl EpochSchedule {
    pub fn validate(&self) -> Result<()> {
        if self.anchor_hour >= 24
            || self.guess_close_offset < 0
            || self.guess_window_length <= 0
        {
            msg!(
                "invalid epoch schedule: hour {}, close offset {}, window length {}",
                self.anchor_hour,
                self.guess_close_offset,
                self.guess_window_length
            );
            return Err(ErrorCode::InvalidEpochSchedule.into());
        }
        Ok(())
    }

    /// Seconds from the UNIX epoch to the first epoch boundary, in [0, SECONDS_PER_WEEK)
    pub fn anchor_offset(&self) -> i64 {
        let days = (self.anchor_weekday.days_from_monday() + 7 - UNIX_EPOCH_DAYS_FROM_MONDAY) % 7;
        days * SECONDS_PER_DAY + self.anchor_hour as i64 * SECONDS_PER_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_is_valid() {
        assert!(EpochSchedule::default().validate().is_ok());
    }

    #[test]
    fn monday_midnight_is_four_days_after_unix_epoch() {
        // 1970-01-05T00:00:00Z
        assert_eq!(EpochSchedule::default().anchor_offset(), 345_600);
    }

    #[test]
    fn thursday_anchor_has_no_day_offset() {
        let schedule = EpochSchedule {
            anchor_weekday: Weekday::Thursday,
            anchor_hour: 9,
            ..EpochSchedule::default()
        };
        assert_eq!(schedule.anchor_offset(), 9 * SECONDS_PER_HOUR);
    }

    #[test]
    fn anchor_offset_stays_within_a_week() {
        let weekdays = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ];
        for anchor_weekday in weekdays {
            for anchor_hour in 0..24 {
                let schedule = EpochSchedule {
                    anchor_weekday,
                    anchor_hour,
                    ..EpochSchedule::default()
                };
                let offset = schedule.anchor_offset();
                assert!((0..SECONDS_PER_WEEK).contains(&offset));
            }
        }
    }

    #[test]
    fn hour_out_of_range_is_rejected() {
        let schedule = EpochSchedule {
            anchor_hour: 24,
            ..EpochSchedule::default()
        };
        assert_eq!(
            schedule.validate().unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::InvalidEpochSchedule)
        );
    }

    #[test]
    #[should_panic]
    fn empty_guess_window_is_rejected() {
        EpochSchedule {
            guess_window_length: 0,
            ..EpochSchedule::default()
        }
        .validate()
        .unwrap();
    }

    #[test]
    #[should_panic]
    fn negative_close_offset_is_rejected() {
        EpochSchedule {
            guess_close_offset: -1,
            ..EpochSchedule::default()
        }
        .validate()
        .unwrap();
    }
}
