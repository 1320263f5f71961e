//! Scheduling domain models.
//!
//! Provides the core data types for building a personal weekly schedule:
//! the schedulable [`Activity`] variants ([`Course`], [`Event`]) and the
//! shared [`MeetingTime`] slot they occupy.
//!
//! All construction is validated; an invalid field yields a
//! [`crate::validation::ValidationError`] and no value.

mod activity;
mod course;
mod event;
mod meeting;

pub use activity::{Activity, ConflictError};
pub use course::Course;
pub use event::Event;
pub use meeting::MeetingTime;
