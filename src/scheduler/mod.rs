//! Schedule building and its operation-level errors.
//!
//! [`Scheduler`] owns a load-once course catalog and the user's mutable
//! schedule, enforcing duplicate and conflict rules on every insert.
//! Presentation layers consume read-only row snapshots and issue mutations
//! through the scheduler's methods; the schedule list is never aliased out.

mod planner;

pub use planner::{Scheduler, SchedulerError};
