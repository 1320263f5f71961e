//! Meeting time model.
//!
//! A [`MeetingTime`] pairs a meeting-days string with a start and end time in
//! 24-hour HHMM encoding (e.g. `1330` = 1:30 PM). It owns the time-range
//! validation shared by courses and events, the 12-hour wall-clock rendering,
//! and the day-sharing / interval-overlap predicates behind conflict checks.
//!
//! # Time Encoding
//!
//! Times are `u16` values in [0, 2359] whose last two digits are a minute
//! component in [0, 59]. The encoding has no timezone; a schedule is a plain
//! weekly grid.
//!
//! # Arranged Sentinel
//!
//! The days string `"A"` marks a course with no fixed meeting slot. Arranged
//! meetings must have both times zero and never participate in conflicts.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Latest representable time of day (11:59 PM).
const LATEST_TIME: u16 = 2359;
/// Largest valid minute component.
const MAX_MINUTE: u16 = 59;
/// The arranged-sentinel days string.
const ARRANGED: &str = "A";

/// A weekly meeting slot: days plus an inclusive [start, end] time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingTime {
    days: String,
    start_time: u16,
    end_time: u16,
}

impl MeetingTime {
    /// Creates a validated meeting time.
    ///
    /// Both times are stored atomically: on any failure neither is kept.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyMeetingDays`] if `days` is empty.
    /// - [`ValidationError::ArrangedWithTimes`] if `days` is the arranged
    ///   sentinel and either time is nonzero.
    /// - [`ValidationError::InvalidTime`] if a time exceeds 2359 or its
    ///   minute component exceeds 59.
    /// - [`ValidationError::EndBeforeStart`] if the end precedes the start
    ///   under (hour, minute) ordering.
    pub fn new(
        days: impl Into<String>,
        start_time: u16,
        end_time: u16,
    ) -> Result<Self, ValidationError> {
        let days = days.into();
        if days.is_empty() {
            return Err(ValidationError::EmptyMeetingDays);
        }
        if days == ARRANGED && (start_time != 0 || end_time != 0) {
            return Err(ValidationError::ArrangedWithTimes);
        }

        for time in [start_time, end_time] {
            if time > LATEST_TIME || time % 100 > MAX_MINUTE {
                return Err(ValidationError::InvalidTime(time));
            }
        }

        let (start_hour, start_min) = (start_time / 100, start_time % 100);
        let (end_hour, end_min) = (end_time / 100, end_time % 100);
        if end_hour < start_hour || (end_hour == start_hour && end_min < start_min) {
            return Err(ValidationError::EndBeforeStart);
        }

        Ok(Self {
            days,
            start_time,
            end_time,
        })
    }

    /// Creates an arranged meeting (sentinel days, both times zero).
    pub fn arranged() -> Self {
        Self {
            days: ARRANGED.to_string(),
            start_time: 0,
            end_time: 0,
        }
    }

    /// The meeting-days string.
    pub fn days(&self) -> &str {
        &self.days
    }

    /// Start time in HHMM encoding.
    pub fn start_time(&self) -> u16 {
        self.start_time
    }

    /// End time in HHMM encoding.
    pub fn end_time(&self) -> u16 {
        self.end_time
    }

    /// Whether this is the arranged sentinel.
    pub fn is_arranged(&self) -> bool {
        self.days == ARRANGED
    }

    /// Whether the two meetings share at least one day.
    pub fn shares_day(&self, other: &Self) -> bool {
        self.days.chars().any(|d| other.days.contains(d))
    }

    /// Whether the two inclusive time ranges overlap.
    ///
    /// Back-to-back slots (one ending exactly when the other starts) count
    /// as overlapping.
    pub fn overlaps(&self, other: &Self) -> bool {
        (other.start_time <= self.start_time && other.end_time >= self.end_time)
            || (other.start_time >= self.start_time && other.start_time <= self.end_time)
            || (other.end_time >= self.start_time && other.end_time <= self.end_time)
    }

    /// Renders the meeting as `"<days> <start>-<end>"` in 12-hour wall-clock
    /// form, or `"Arranged"` for the sentinel.
    ///
    /// Hour 0 and hour 12 both display as 12; minutes are zero-padded.
    pub fn meeting_string(&self) -> String {
        if self.is_arranged() {
            return "Arranged".to_string();
        }
        format!(
            "{} {}-{}",
            self.days,
            wall_clock(self.start_time),
            wall_clock(self.end_time)
        )
    }
}

/// Converts an HHMM time to `"<h>:<mm><AM|PM>"`.
fn wall_clock(time: u16) -> String {
    let (hour, minute) = (time / 100, time % 100);
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02}{meridiem}")
}

/// Checks that every character of `days` is drawn from `alphabet`.
pub(crate) fn validate_day_alphabet(days: &str, alphabet: &[char]) -> Result<(), ValidationError> {
    if days.is_empty() {
        return Err(ValidationError::EmptyMeetingDays);
    }
    if days.chars().any(|d| !alphabet.contains(&d)) {
        return Err(ValidationError::InvalidMeetingDays(days.to_string()));
    }
    Ok(())
}
