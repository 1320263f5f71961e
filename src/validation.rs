//! Field-level validation failures.
//!
//! Every mutation of a domain value is checked at the point of construction;
//! an invalid field yields a [`ValidationError`] and leaves no partial state
//! behind. Operation-level failures (duplicates, conflicts, I/O) live in
//! [`crate::scheduler::SchedulerError`].

use thiserror::Error;

/// A field-level invariant violation.
///
/// Raised synchronously by constructors and setters; the value under
/// construction is never partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Activity or schedule title is empty.
    #[error("title cannot be empty")]
    EmptyTitle,
    /// Meeting days string is empty.
    #[error("meeting days cannot be empty")]
    EmptyMeetingDays,
    /// Meeting days string contains a character outside the variant's alphabet,
    /// or the arranged sentinel is combined with other days.
    #[error("invalid meeting days: {0}")]
    InvalidMeetingDays(String),
    /// An arranged activity carries a nonzero start or end time.
    #[error("arranged activities cannot have meeting times")]
    ArrangedWithTimes,
    /// A time is outside [0, 2359] or its minute component exceeds 59.
    #[error("invalid meeting time: {0}")]
    InvalidTime(u16),
    /// End time is earlier than start time under (hour, minute) ordering.
    #[error("end time cannot be earlier than start time")]
    EndBeforeStart,
    /// Course name is shorter than 4 or longer than 6 characters.
    #[error("course name must be 4 to 6 characters")]
    InvalidName,
    /// Course section is not exactly three decimal digits.
    #[error("section must be exactly three digits")]
    InvalidSection,
    /// Course credits are outside [1, 5].
    #[error("credits must be between 1 and 5")]
    InvalidCredits,
    /// Course instructor id is empty.
    #[error("instructor id cannot be empty")]
    EmptyInstructorId,
    /// Event weekly repeat is outside [1, 4].
    #[error("weekly repeat must be between 1 and 4")]
    InvalidWeeklyRepeat,
}
