//! Team scheduling engine.
//!
//! Assigns time-bounded tasks to employees with fixed daily workday
//! windows, producing a day-by-day list of schedule blocks, and inserts
//! unplanned urgent meetings into an already-built schedule by shifting
//! the displaced blocks forward — cascading onto the next day when they
//! no longer fit.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `Task`, `Priority`,
//!   `ScheduleBlock`, `BlockKind`, minute-of-day time helpers
//! - **`allocator`**: Multi-day greedy bin-packing of tasks into workday
//!   windows (`Allocator`)
//! - **`urgent`**: Urgent-meeting insertion with conflict shifting and
//!   day-overflow cascade (`UrgentInserter`)
//! - **`validation`**: Input integrity checks for the host application
//!
//! # Architecture
//!
//! Both entry points are synchronous pure functions over in-memory
//! collections: no I/O, no persistence, no clock reads (the urgent
//! inserter takes its "now" as a parameter). The host application owns
//! forms, storage, calendar export and notifications, and exchanges
//! plain serde-friendly records with this crate; applying a returned
//! schedule as a single atomic replacement is the host's responsibility.
//!
//! Both operations favor silent best-effort degradation: a task with an
//! unresolvable preferred assignee, or minutes that fall outside the
//! scheduling horizon, are dropped rather than reported. Partial results
//! are valid results.

pub mod allocator;
pub mod models;
pub mod urgent;
pub mod validation;
