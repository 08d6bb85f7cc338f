//! Urgent-meeting insertion.
//!
//! Inserts a fixed "Urgent Meeting" block into an existing schedule for
//! one employee, shifting that employee's same-day blocks later to make
//! room. Shifted blocks pushed past the end of the workday are clamped
//! there and re-laid-out on the following morning (one cascade day).
//! Blocks of other employees or other dates pass through untouched.
//!
//! The inserter never re-runs allocation and never mutates its input: it
//! consumes a schedule and returns a new one.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::models::time::ceil_to_half_hour;
use crate::models::{BlockKind, Employee, ScheduleBlock};

/// Title given to every inserted urgent block.
pub const URGENT_TITLE: &str = "Urgent Meeting";

/// Anchor minute used for "now" on any date other than the injected
/// timestamp's own date: 09:00.
pub const DEFAULT_ANCHOR_MIN: i64 = 9 * 60;

/// Urgent-meeting inserter.
///
/// Carries the timestamp treated as "now", so insertion stays a pure
/// function of its inputs: callers pass the wall clock, tests pass a
/// fixed time.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use workplan::urgent::UrgentInserter;
/// use workplan::models::Employee;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let now = monday.and_hms_opt(8, 0, 0).unwrap();
/// let ada = Employee::new("e1").with_name("Ada");
///
/// let schedule = UrgentInserter::new(now).insert(&[], &ada, 30, monday, false);
/// assert_eq!(schedule.len(), 1);
/// assert_eq!(schedule[0].title, "Urgent Meeting");
/// assert_eq!(schedule[0].start_min, 9 * 60);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UrgentInserter {
    now: NaiveDateTime,
}

impl UrgentInserter {
    /// Creates an inserter anchored at the given "now".
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Inserts an urgent meeting of `duration_min` minutes on `date`.
    ///
    /// With `prefer_now` the meeting starts at the later of the workday
    /// start and "now" rounded up to the next half hour (09:00 stands in
    /// for "now" on any date other than the anchor's); otherwise it
    /// starts at the workday start. A meeting that no longer fits on
    /// `date` moves to the next workday morning.
    ///
    /// Existing same-day blocks starting at or after the meeting are
    /// shifted later by its duration; a shifted block that would end past
    /// the workday end is clamped to end exactly there, and the clamped
    /// blocks are re-laid-out on the next morning, offset by the
    /// accumulated overflow. The cascade covers a single day.
    ///
    /// A duration longer than the employee's whole workday can never fit
    /// on any day; the schedule is returned unchanged.
    pub fn insert(
        &self,
        blocks: &[ScheduleBlock],
        employee: &Employee,
        duration_min: i64,
        date: NaiveDate,
        prefer_now: bool,
    ) -> Vec<ScheduleBlock> {
        let window = employee.window();
        if duration_min > window.duration_min() {
            log::debug!(
                "urgent {duration_min} min exceeds '{}' {} min workday, nothing inserted",
                employee.id,
                window.duration_min()
            );
            return blocks.to_vec();
        }

        // A start that leaves no room moves the whole insertion to the
        // next morning with prefer_now off. At the workday start the
        // meeting always fits (checked above), so this settles in at
        // most two rounds.
        let mut date = date;
        let mut prefer_now = prefer_now;
        let start_min = loop {
            let candidate = if prefer_now {
                window.start_min.max(self.anchor_minute(date))
            } else {
                window.start_min
            };
            if candidate + duration_min <= window.end_min {
                break candidate;
            }
            date += Duration::days(1);
            prefer_now = false;
        };

        let mut day_blocks: Vec<ScheduleBlock> = blocks
            .iter()
            .filter(|b| b.employee_id == employee.id && b.date == date)
            .cloned()
            .collect();
        day_blocks.sort_by_key(|b| b.start_min);

        let mut updated: Vec<ScheduleBlock> = blocks
            .iter()
            .filter(|b| !(b.employee_id == employee.id && b.date == date))
            .cloned()
            .collect();

        // Shift pass: blocks at or after the meeting move later by its
        // duration plus any overflow carried from earlier shifts.
        let mut carry_over = 0;
        let mut clamped: Vec<ScheduleBlock> = Vec::new();
        for b in &day_blocks {
            if b.start_min < start_min {
                updated.push(b.clone());
                continue;
            }
            let len = b.duration_min();
            let new_start = b.start_min + duration_min + carry_over;
            let mut shifted = b.clone();
            if new_start + len <= window.end_min {
                shifted.start_min = new_start;
                shifted.end_min = new_start + len;
            } else {
                carry_over += new_start + len - window.end_min;
                shifted.start_min = window.end_min - len;
                shifted.end_min = window.end_min;
                clamped.push(b.clone());
            }
            updated.push(shifted);
        }

        // Cascade: clamped blocks land on the next morning in reverse
        // original order, packed back-to-back from the workday start plus
        // the carried overflow. Packing that would run past the workday
        // end restarts at the workday start.
        if carry_over > 0 {
            let next_date = date + Duration::days(1);
            let mut pointer = window.start_min + carry_over;
            for b in clamped.iter().rev() {
                let len = b.duration_min();
                if pointer + len > window.end_min {
                    pointer = window.start_min;
                }
                let mut moved = b.clone();
                moved.date = next_date;
                moved.start_min = pointer;
                moved.end_min = pointer + len;
                updated.push(moved);
                pointer += len;
            }
            log::debug!(
                "urgent insert on {date}: {} block(s) cascaded to {next_date}",
                clamped.len()
            );
        }

        updated.push(ScheduleBlock::new(
            &employee.id,
            URGENT_TITLE,
            BlockKind::Urgent,
            date,
            start_min,
            start_min + duration_min,
        ));
        updated
    }

    /// Minute-of-day anchor for `prefer_now`: the injected timestamp
    /// rounded up to the next half hour when `date` is that timestamp's
    /// date, 09:00 otherwise.
    fn anchor_minute(&self, date: NaiveDate) -> i64 {
        let base = if date == self.now.date() {
            i64::from(self.now.hour()) * 60 + i64::from(self.now.minute())
        } else {
            DEFAULT_ANCHOR_MIN
        };
        ceil_to_half_hour(base)
    }
}
