//! Activity: the closed set of schedulable variants.
//!
//! An [`Activity`] is anything occupying a weekly slot on a schedule: a
//! catalog [`Course`] or an ad-hoc [`Event`]. The two variants share meeting
//! semantics (days, times, rendering) but differ in duplicate identity:
//! courses by name, events by title, and never across variants.
//!
//! # Conflict Model
//!
//! Two activities conflict when they share at least one meeting day, neither
//! is arranged, and their inclusive time ranges overlap. The check is
//! one-directional per pair; the overlap predicate itself is symmetric, so
//! callers only need to test a candidate against each existing activity.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::course::Course;
use super::event::Event;
use super::meeting::MeetingTime;

/// A schedule conflict: two activities occupy overlapping meeting times.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("activities occupy overlapping meeting times")]
pub struct ConflictError;

/// A schedulable item: a course or an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    /// A catalog course.
    Course(Course),
    /// An ad-hoc event.
    Event(Event),
}

impl Activity {
    /// The activity title (course title or event title).
    pub fn title(&self) -> &str {
        match self {
            Activity::Course(c) => c.title(),
            Activity::Event(e) => e.title(),
        }
    }

    /// The meeting slot.
    pub fn meeting(&self) -> &MeetingTime {
        match self {
            Activity::Course(c) => c.meeting(),
            Activity::Event(e) => e.meeting(),
        }
    }

    /// The meeting-days string.
    pub fn meeting_days(&self) -> &str {
        self.meeting().days()
    }

    /// Start time in HHMM encoding.
    pub fn start_time(&self) -> u16 {
        self.meeting().start_time()
    }

    /// End time in HHMM encoding.
    pub fn end_time(&self) -> u16 {
        self.meeting().end_time()
    }

    /// Rendered meeting days and times (events append their repeat interval).
    pub fn meeting_string(&self) -> String {
        match self {
            Activity::Course(c) => c.meeting_string(),
            Activity::Event(e) => e.meeting_string(),
        }
    }

    /// Short display row (4 columns).
    pub fn short_display(&self) -> [String; 4] {
        match self {
            Activity::Course(c) => c.short_display(),
            Activity::Event(e) => e.short_display(),
        }
    }

    /// Long display row (7 columns).
    pub fn long_display(&self) -> [String; 7] {
        match self {
            Activity::Course(c) => c.long_display(),
            Activity::Event(e) => e.long_display(),
        }
    }

    /// Variant-scoped duplicate identity.
    ///
    /// Two courses are duplicates when their names match (regardless of
    /// section); two events when their titles match. A course and an event
    /// are never duplicates of each other.
    pub fn is_duplicate(&self, other: &Activity) -> bool {
        match (self, other) {
            (Activity::Course(a), Activity::Course(b)) => a.name() == b.name(),
            (Activity::Event(a), Activity::Event(b)) => a.title() == b.title(),
            _ => false,
        }
    }

    /// Checks this activity against another for a meeting-time conflict.
    ///
    /// Errors iff the two share at least one meeting day, neither is
    /// arranged, and their inclusive time ranges overlap. Has no side
    /// effects; on multiple possible conflicts the caller sees whichever
    /// pairing it tested first.
    pub fn check_conflict(&self, other: &Activity) -> Result<(), ConflictError> {
        let (mine, theirs) = (self.meeting(), other.meeting());
        if mine.is_arranged() || theirs.is_arranged() {
            return Ok(());
        }
        if mine.shares_day(theirs) && mine.overlaps(theirs) {
            return Err(ConflictError);
        }
        Ok(())
    }
}

impl From<Course> for Activity {
    fn from(course: Course) -> Self {
        Activity::Course(course)
    }
}

impl From<Event> for Activity {
    fn from(event: Event) -> Self {
        Activity::Event(event)
    }
}

impl fmt::Display for Activity {
    /// The variant's flat-file record line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Course(c) => fmt::Display::fmt(c, f),
            Activity::Event(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, section: &str, days: &str, start: u16, end: u16) -> Activity {
        Course::new(name, "SW Eng", section, 3, "sheckman", days, start, end)
            .unwrap()
            .into()
    }

    fn event(title: &str, days: &str, start: u16, end: u16) -> Activity {
        Event::new(title, days, start, end, 1, "").unwrap().into()
    }

    #[test]
    fn test_accessors_dispatch() {
        let c = course("CSC216", "001", "MW", 1330, 1445);
        assert_eq!(c.title(), "SW Eng");
        assert_eq!(c.meeting_days(), "MW");
        assert_eq!(c.start_time(), 1330);
        assert_eq!(c.end_time(), 1445);

        let e = event("Study", "TH", 1800, 1900);
        assert_eq!(e.title(), "Study");
        assert_eq!(e.meeting_string(), "TH 6:00PM-7:00PM (every 1 weeks)");
    }

    #[test]
    fn test_conflict_shared_day_and_overlap() {
        let a = course("CSC216", "001", "MW", 1330, 1445);
        let b = course("CSC226", "001", "WF", 1400, 1500);
        assert_eq!(a.check_conflict(&b), Err(ConflictError));
        assert_eq!(b.check_conflict(&a), Err(ConflictError));
    }

    #[test]
    fn test_no_conflict_without_shared_day() {
        let a = course("CSC216", "001", "MW", 1330, 1445);
        let b = course("CSC226", "001", "TH", 1330, 1445);
        assert!(a.check_conflict(&b).is_ok());
    }

    #[test]
    fn test_no_conflict_without_overlap() {
        let a = course("CSC216", "001", "MW", 1330, 1445);
        let b = course("CSC226", "001", "MW", 1500, 1615);
        assert!(a.check_conflict(&b).is_ok());
    }

    #[test]
    fn test_shared_endpoint_conflicts() {
        let a = course("CSC216", "001", "M", 1330, 1445);
        let b = course("CSC226", "001", "M", 1445, 1600);
        assert_eq!(a.check_conflict(&b), Err(ConflictError));
    }

    #[test]
    fn test_arranged_never_conflicts() {
        let arranged: Activity = Course::arranged("CSC491", "Research", "601", 2, "dbsturgi")
            .unwrap()
            .into();
        let fixed = course("CSC216", "001", "MW", 0, 2359);
        assert!(arranged.check_conflict(&fixed).is_ok());
        assert!(fixed.check_conflict(&arranged).is_ok());
        // Two arranged courses never conflict either
        let other: Activity = Course::arranged("CSC492", "Capstone", "601", 2, "dbsturgi")
            .unwrap()
            .into();
        assert!(arranged.check_conflict(&other).is_ok());
    }

    #[test]
    fn test_course_event_conflict() {
        let c = course("CSC216", "001", "MW", 1330, 1445);
        let e = event("Club", "WF", 1400, 1500);
        assert_eq!(c.check_conflict(&e), Err(ConflictError));
    }

    #[test]
    fn test_duplicate_course_by_name() {
        let a = course("CSC216", "001", "MW", 1330, 1445);
        let b = course("CSC216", "002", "TH", 900, 1015);
        let c = course("CSC226", "001", "MW", 1330, 1445);
        assert!(a.is_duplicate(&b));
        assert!(!a.is_duplicate(&c));
    }

    #[test]
    fn test_duplicate_event_by_title() {
        let a = event("Study", "MW", 1800, 1900);
        let b = event("Study", "F", 900, 1000);
        let c = event("Practice", "MW", 1800, 1900);
        assert!(a.is_duplicate(&b));
        assert!(!a.is_duplicate(&c));
    }

    #[test]
    fn test_duplicate_is_variant_scoped() {
        // A course and an event with matching titles are not duplicates
        let c: Activity = Course::new("CSC216", "Study", "001", 3, "sheckman", "MW", 1330, 1445)
            .unwrap()
            .into();
        let e = event("Study", "MW", 1800, 1900);
        assert!(!c.is_duplicate(&e));
        assert!(!e.is_duplicate(&c));
    }

    #[test]
    fn test_display_matches_variant() {
        let c = course("CSC216", "001", "MW", 1330, 1445);
        assert_eq!(c.to_string(), "CSC216,SW Eng,001,3,sheckman,MW,1330,1445");
        let e: Activity = Event::new("Study", "MW", 1800, 1900, 2, "library")
            .unwrap()
            .into();
        assert_eq!(e.to_string(), "Study,MW,1800,1900,2,library");
    }
}
