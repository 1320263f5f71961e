//! The schedule planner.
//!
//! # Insert Algorithm
//!
//! Adding a course or event is all-or-nothing:
//! 1. Resolve or construct the candidate (field validation applies).
//! 2. Scan the schedule for a variant-scoped duplicate.
//! 3. Check the candidate against every scheduled activity for conflicts;
//!    the first conflicting pairing wins.
//! 4. Append. Nothing is mutated on any earlier failure.
//!
//! All scans are linear; the schedule is small and insertion-ordered.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::models::{Activity, Course, Event};
use crate::records;
use crate::validation::ValidationError;

/// Title a schedule starts with.
const DEFAULT_TITLE: &str = "My Schedule";

/// An operation-level scheduling failure.
///
/// Carries the user-facing message; underlying I/O causes are not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// The catalog source could not be opened or read.
    #[error("Cannot find file.")]
    CatalogNotFound,
    /// The export destination could not be written.
    #[error("The file cannot be saved.")]
    ExportFailed,
    /// A course with the same name is already scheduled.
    #[error("You are already enrolled in {0}")]
    AlreadyEnrolled(String),
    /// An event with the same title is already scheduled.
    #[error("You have already created an event called {0}")]
    DuplicateEvent(String),
    /// The candidate course overlaps a scheduled activity.
    #[error("The course cannot be added due to a conflict.")]
    CourseConflict,
    /// The candidate event overlaps a scheduled activity.
    #[error("The event cannot be added due to a conflict.")]
    EventConflict,
    /// A field-level validation failure while building a candidate.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Owns the course catalog and the user's schedule.
///
/// The catalog is loaded once at construction and immutable thereafter.
/// The schedule starts empty and is mutated only through the methods here;
/// scheduled courses are owned clones of catalog entries.
#[derive(Debug, Clone)]
pub struct Scheduler {
    catalog: Vec<Course>,
    schedule: Vec<Activity>,
    title: String,
}

impl Scheduler {
    /// Builds a scheduler from a catalog file.
    ///
    /// Construction either fully succeeds or fails; there is no partially
    /// constructed state. Invalid catalog lines are skipped during the load
    /// (see [`records::read_catalog`]).
    ///
    /// # Errors
    ///
    /// [`SchedulerError::CatalogNotFound`] if the file is unreadable.
    pub fn new(catalog_path: impl AsRef<Path>) -> Result<Self, SchedulerError> {
        let catalog =
            records::read_catalog(catalog_path).map_err(|_| SchedulerError::CatalogNotFound)?;
        debug!(courses = catalog.len(), "catalog loaded");
        Ok(Self {
            catalog,
            schedule: Vec::new(),
            title: DEFAULT_TITLE.to_string(),
        })
    }

    /// Looks up a catalog course by name and section.
    pub fn course_from_catalog(&self, name: &str, section: &str) -> Option<&Course> {
        self.catalog
            .iter()
            .find(|c| c.name() == name && c.section() == section)
    }

    /// Adds a catalog course to the schedule.
    ///
    /// Returns `Ok(false)` when the catalog has no such (name, section);
    /// `Ok(true)` when the course was appended.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::AlreadyEnrolled`] if a course with this name is
    /// already scheduled; [`SchedulerError::CourseConflict`] on the first
    /// meeting-time conflict found.
    pub fn add_course(&mut self, name: &str, section: &str) -> Result<bool, SchedulerError> {
        let Some(course) = self.course_from_catalog(name, section) else {
            return Ok(false);
        };
        let candidate = Activity::Course(course.clone());

        if self.schedule.iter().any(|a| a.is_duplicate(&candidate)) {
            return Err(SchedulerError::AlreadyEnrolled(name.to_string()));
        }
        for scheduled in &self.schedule {
            if scheduled.check_conflict(&candidate).is_err() {
                return Err(SchedulerError::CourseConflict);
            }
        }

        debug!(name, section, "course added to schedule");
        self.schedule.push(candidate);
        Ok(true)
    }

    /// Builds an event from its fields and adds it to the schedule.
    ///
    /// # Errors
    ///
    /// Any field validation failure propagates as
    /// [`SchedulerError::Validation`]; then the same duplicate
    /// ([`SchedulerError::DuplicateEvent`]) and conflict
    /// ([`SchedulerError::EventConflict`]) checks as courses apply.
    pub fn add_event(
        &mut self,
        title: &str,
        meeting_days: &str,
        start_time: u16,
        end_time: u16,
        weekly_repeat: u8,
        details: &str,
    ) -> Result<(), SchedulerError> {
        let event = Event::new(title, meeting_days, start_time, end_time, weekly_repeat, details)?;
        let candidate = Activity::Event(event);

        if self.schedule.iter().any(|a| a.is_duplicate(&candidate)) {
            return Err(SchedulerError::DuplicateEvent(title.to_string()));
        }
        for scheduled in &self.schedule {
            if scheduled.check_conflict(&candidate).is_err() {
                return Err(SchedulerError::EventConflict);
            }
        }

        debug!(title, "event added to schedule");
        self.schedule.push(candidate);
        Ok(())
    }

    /// Removes the activity at `index`.
    ///
    /// Returns whether a removal occurred; out-of-range indices are a no-op.
    pub fn remove_activity(&mut self, index: usize) -> bool {
        if index < self.schedule.len() {
            let removed = self.schedule.remove(index);
            debug!(index, title = removed.title(), "activity removed");
            true
        } else {
            false
        }
    }

    /// Clears the schedule; catalog and title are preserved.
    pub fn reset_schedule(&mut self) {
        debug!(dropped = self.schedule.len(), "schedule reset");
        self.schedule.clear();
    }

    /// The schedule title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the schedule title.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyTitle`] if `title` is empty.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), SchedulerError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        self.title = title;
        Ok(())
    }

    /// Read-only catalog snapshot: one short row per catalog course.
    pub fn course_catalog(&self) -> Vec<[String; 4]> {
        self.catalog.iter().map(Course::short_display).collect()
    }

    /// Read-only schedule snapshot: one short row per scheduled activity.
    pub fn scheduled_activities(&self) -> Vec<[String; 4]> {
        self.schedule.iter().map(Activity::short_display).collect()
    }

    /// Read-only schedule snapshot: one long row per scheduled activity.
    pub fn full_scheduled_activities(&self) -> Vec<[String; 7]> {
        self.schedule.iter().map(Activity::long_display).collect()
    }

    /// Exports the schedule to a file, one record line per activity.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::ExportFailed`] on any write failure.
    pub fn export_schedule(&self, path: impl AsRef<Path>) -> Result<(), SchedulerError> {
        records::write_schedule(path, &self.schedule).map_err(|_| SchedulerError::ExportFailed)?;
        debug!(activities = self.schedule.len(), "schedule exported");
        Ok(())
    }
}
