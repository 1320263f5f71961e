//! Personal course scheduling.
//!
//! Loads a course catalog from a flat comma-delimited file, builds a weekly
//! schedule of courses and ad-hoc events with duplicate and conflict
//! enforcement, and exports the result back to flat text.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`models::Activity`], [`models::Course`],
//!   [`models::Event`], [`models::MeetingTime`]
//! - **`validation`**: Field-level invariant failures
//! - **`records`**: Catalog reading and schedule export (flat-file I/O)
//! - **`scheduler`**: The [`scheduler::Scheduler`] owning catalog and schedule
//!
//! # Example
//!
//! ```no_run
//! use course_planner::scheduler::Scheduler;
//!
//! let mut scheduler = Scheduler::new("catalog.txt")?;
//! scheduler.add_course("CSC216", "001")?;
//! scheduler.add_event("Study", "MTWHF", 1800, 1900, 3, "group study")?;
//! scheduler.export_schedule("my_schedule.txt")?;
//! # Ok::<(), course_planner::scheduler::SchedulerError>(())
//! ```

pub mod models;
pub mod records;
pub mod scheduler;
pub mod validation;
