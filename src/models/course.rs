//! Course model.
//!
//! A course is a catalog entry with identity (name + section), credit hours,
//! an instructor, and a weekly meeting slot. Courses may be "arranged":
//! meeting days `"A"` with no fixed time.
//!
//! # Serialized Form
//!
//! `Display` renders the flat-file record consumed and produced by
//! [`crate::records`]:
//! `name,title,section,credits,instructor_id,days[,start,end]`, where the
//! trailing time fields are omitted for arranged courses.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::meeting::{validate_day_alphabet, MeetingTime};
use crate::validation::ValidationError;

/// Minimum course name length.
const NAME_MIN: usize = 4;
/// Maximum course name length.
const NAME_MAX: usize = 6;
/// Required section length (all decimal digits).
const SECTION_LEN: usize = 3;
/// Valid credit-hour range.
const CREDITS_RANGE: std::ops::RangeInclusive<u8> = 1..=5;
/// Meeting-day alphabet for courses; 'A' is the arranged sentinel and must
/// appear alone.
const DAY_ALPHABET: &[char] = &['M', 'T', 'W', 'H', 'F', 'A'];

/// A catalog course.
///
/// Duplicate identity for scheduling is the course *name* alone; two sections
/// of the same course cannot both be scheduled. Full equality compares every
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    name: String,
    title: String,
    section: String,
    credits: u8,
    instructor_id: String,
    meeting: MeetingTime,
}

impl Course {
    /// Creates a validated course with a fixed meeting slot.
    ///
    /// # Errors
    ///
    /// Returns the first failing field check: name length, empty title,
    /// section format, credit range, empty instructor id, day alphabet
    /// (with the arranged sentinel only allowed alone), or time-range
    /// validation per [`MeetingTime::new`].
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: u8,
        instructor_id: impl Into<String>,
        meeting_days: impl Into<String>,
        start_time: u16,
        end_time: u16,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let title = title.into();
        let section = section.into();
        let instructor_id = instructor_id.into();
        let meeting_days = meeting_days.into();

        if name.chars().count() < NAME_MIN || name.chars().count() > NAME_MAX {
            return Err(ValidationError::InvalidName);
        }
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if section.chars().count() != SECTION_LEN || !section.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidSection);
        }
        if !CREDITS_RANGE.contains(&credits) {
            return Err(ValidationError::InvalidCredits);
        }
        if instructor_id.is_empty() {
            return Err(ValidationError::EmptyInstructorId);
        }
        validate_day_alphabet(&meeting_days, DAY_ALPHABET)?;
        if meeting_days.contains('A') && meeting_days.chars().count() != 1 {
            return Err(ValidationError::InvalidMeetingDays(meeting_days));
        }

        let meeting = MeetingTime::new(meeting_days, start_time, end_time)?;
        Ok(Self {
            name,
            title,
            section,
            credits,
            instructor_id,
            meeting,
        })
    }

    /// Creates an arranged course (no fixed meeting slot, both times zero).
    pub fn arranged(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: u8,
        instructor_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(name, title, section, credits, instructor_id, "A", 0, 0)
    }

    /// The course name (e.g. `"CSC216"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The course title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The three-digit section.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Credit hours.
    pub fn credits(&self) -> u8 {
        self.credits
    }

    /// The instructor's id.
    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    /// The meeting slot.
    pub fn meeting(&self) -> &MeetingTime {
        &self.meeting
    }

    /// Rendered meeting days and times (see [`MeetingTime::meeting_string`]).
    pub fn meeting_string(&self) -> String {
        self.meeting.meeting_string()
    }

    /// Short display row: name, section, title, meeting string.
    pub fn short_display(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.meeting_string(),
        ]
    }

    /// Long display row: name, section, title, credits, instructor, meeting
    /// string, plus a trailing blank column for layout parity with events.
    pub fn long_display(&self) -> [String; 7] {
        [
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting_string(),
            String::new(),
        ]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.name,
            self.title,
            self.section,
            self.credits,
            self.instructor_id,
            self.meeting.days()
        )?;
        if !self.meeting.is_arranged() {
            write!(f, ",{},{}", self.meeting.start_time(), self.meeting.end_time())?;
        }
        Ok(())
    }
}
