//! Scheduling domain models.
//!
//! The data types exchanged with the host application: people
//! ([`Employee`]), work to place ([`Task`]), placed intervals
//! ([`ScheduleBlock`]), and minute-of-day time arithmetic ([`time`]).
//! All types are plain serde-friendly records; dates serialize as
//! `YYYY-MM-DD` and times of day as `HH:MM`.

mod block;
mod employee;
mod task;
pub mod time;

pub use block::{
    blocks_for_employee_on, blocks_for_task, minutes_for_task, total_minutes_for_employee,
    BlockKind, ScheduleBlock,
};
pub use employee::{Employee, DEFAULT_WORKDAY_END_MIN, DEFAULT_WORKDAY_START_MIN};
pub use task::{Priority, Task};
pub use time::{TimeParseError, WorkdayWindow};
