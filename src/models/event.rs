//! Event model.
//!
//! An ad-hoc schedule entry: anything occupying a weekly slot that is not a
//! catalog course (study groups, practices, appointments). Events may meet on
//! weekends and have no arranged sentinel, but carry a simple weekly-repeat
//! counter and free-form details.
//!
//! # Serialized Form
//!
//! `Display` renders the flat-file record produced by [`crate::records`]:
//! `title,days,start,end,weekly_repeat,details`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::meeting::{validate_day_alphabet, MeetingTime};
use crate::validation::ValidationError;

/// Valid weekly-repeat range.
const REPEAT_RANGE: std::ops::RangeInclusive<u8> = 1..=4;
/// Meeting-day alphabet for events: weekdays plus Saturday and Sunday.
const DAY_ALPHABET: &[char] = &['M', 'T', 'W', 'H', 'F', 'S', 'U'];

/// An ad-hoc scheduled event.
///
/// Duplicate identity for scheduling is the event *title*; full equality
/// compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    title: String,
    meeting: MeetingTime,
    weekly_repeat: u8,
    details: String,
}

impl Event {
    /// Creates a validated event.
    ///
    /// `details` may be empty.
    ///
    /// # Errors
    ///
    /// Returns the first failing field check: empty title, day alphabet,
    /// time-range validation per [`MeetingTime::new`], or weekly repeat
    /// outside [1, 4].
    pub fn new(
        title: impl Into<String>,
        meeting_days: impl Into<String>,
        start_time: u16,
        end_time: u16,
        weekly_repeat: u8,
        details: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let meeting_days = meeting_days.into();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        validate_day_alphabet(&meeting_days, DAY_ALPHABET)?;
        if !REPEAT_RANGE.contains(&weekly_repeat) {
            return Err(ValidationError::InvalidWeeklyRepeat);
        }

        let meeting = MeetingTime::new(meeting_days, start_time, end_time)?;
        Ok(Self {
            title,
            meeting,
            weekly_repeat,
            details: details.into(),
        })
    }

    /// The event title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The meeting slot.
    pub fn meeting(&self) -> &MeetingTime {
        &self.meeting
    }

    /// How often the event repeats, in weeks.
    pub fn weekly_repeat(&self) -> u8 {
        self.weekly_repeat
    }

    /// Free-form event details (may be empty).
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Rendered meeting days and times, suffixed with the repeat interval.
    pub fn meeting_string(&self) -> String {
        format!(
            "{} (every {} weeks)",
            self.meeting.meeting_string(),
            self.weekly_repeat
        )
    }

    /// Short display row: blank name/section columns, title, meeting string.
    pub fn short_display(&self) -> [String; 4] {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            self.meeting_string(),
        ]
    }

    /// Long display row: blank name/section/credits/instructor columns,
    /// title, meeting string, details.
    pub fn long_display(&self) -> [String; 7] {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            String::new(),
            String::new(),
            self.meeting_string(),
            self.details.clone(),
        ]
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.title,
            self.meeting.days(),
            self.meeting.start_time(),
            self.meeting.end_time(),
            self.weekly_repeat,
            self.details
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        Event::new("Study", "MTWHF", 1800, 1900, 3, "group study").unwrap()
    }

    #[test]
    fn test_valid_event() {
        let e = sample_event();
        assert_eq!(e.title(), "Study");
        assert_eq!(e.meeting().days(), "MTWHF");
        assert_eq!(e.weekly_repeat(), 3);
        assert_eq!(e.details(), "group study");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(
            Event::new("", "MW", 1800, 1900, 1, ""),
            Err(ValidationError::EmptyTitle)
        );
    }

    #[test]
    fn test_empty_details_allowed() {
        let e = Event::new("Practice", "SU", 800, 900, 1, "").unwrap();
        assert_eq!(e.details(), "");
    }

    #[test]
    fn test_weekend_days_allowed() {
        let e = Event::new("Soccer", "SU", 1400, 1600, 1, "club").unwrap();
        assert_eq!(e.meeting().days(), "SU");
    }

    #[test]
    fn test_no_arranged_sentinel() {
        // 'A' is not in the event alphabet even as a sole character
        assert_eq!(
            Event::new("Study", "A", 0, 0, 1, ""),
            Err(ValidationError::InvalidMeetingDays("A".into()))
        );
    }

    #[test]
    fn test_day_alphabet() {
        assert_eq!(
            Event::new("Study", "MXW", 1800, 1900, 1, ""),
            Err(ValidationError::InvalidMeetingDays("MXW".into()))
        );
    }

    #[test]
    fn test_weekly_repeat_range() {
        for bad in [0, 5] {
            assert_eq!(
                Event::new("Study", "MW", 1800, 1900, bad, ""),
                Err(ValidationError::InvalidWeeklyRepeat)
            );
        }
        for ok in [1, 4] {
            assert!(Event::new("Study", "MW", 1800, 1900, ok, "").is_ok());
        }
    }

    #[test]
    fn test_meeting_string_suffix() {
        assert_eq!(sample_event().meeting_string(), "MTWHF 6:00PM-7:00PM (every 3 weeks)");
    }

    #[test]
    fn test_display_rows() {
        let e = sample_event();
        assert_eq!(
            e.short_display(),
            ["", "", "Study", "MTWHF 6:00PM-7:00PM (every 3 weeks)"].map(String::from)
        );
        assert_eq!(
            e.long_display(),
            [
                "",
                "",
                "Study",
                "",
                "",
                "MTWHF 6:00PM-7:00PM (every 3 weeks)",
                "group study"
            ]
            .map(String::from)
        );
    }

    #[test]
    fn test_serialized_form() {
        assert_eq!(sample_event().to_string(), "Study,MTWHF,1800,1900,3,group study");
    }
}
