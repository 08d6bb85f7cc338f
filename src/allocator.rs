//! Greedy multi-day task allocator.
//!
//! # Algorithm
//!
//! 1. Sort tasks: priority descending, then due date ascending, then
//!    duration descending. The sort is stable, so equal keys keep input
//!    order.
//! 2. For each task, resolve the assignee: the preferred employee when
//!    one is named, otherwise the employee with the least minutes
//!    scheduled so far in this run (ties: input order).
//! 3. Pack the task's duration into the assignee's workday window from a
//!    per-employee cursor, rolling into following days up to the horizon.
//!
//! Unplaceable work is dropped silently: an unknown preferred assignee
//! skips the whole task, and minutes that do not fit inside the horizon
//! are discarded. A partially placed task is a valid best-effort result,
//! not an error.
//!
//! # Complexity
//! O(n log n + n * (m + d)) where n = tasks, m = employees, d = horizon days.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::models::{total_minutes_for_employee, BlockKind, Employee, ScheduleBlock, Task};

/// Horizon used when the caller does not choose one.
///
/// The reference planning board schedules two weeks at a time; ad hoc
/// allocation uses this one-week default.
pub const DEFAULT_HORIZON_DAYS: i64 = 7;

/// Input container for allocation.
#[derive(Debug, Clone)]
pub struct AllocationRequest {
    /// People available for placement.
    pub employees: Vec<Employee>,
    /// Work to place.
    pub tasks: Vec<Task>,
    /// First day eligible for placement.
    pub start_date: NaiveDate,
    /// Days past `start_date` still eligible (the day exactly at the
    /// boundary is included).
    pub horizon_days: i64,
}

impl AllocationRequest {
    /// Creates a request with the default horizon.
    pub fn new(employees: Vec<Employee>, tasks: Vec<Task>, start_date: NaiveDate) -> Self {
        Self {
            employees,
            tasks,
            start_date,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    /// Sets the horizon in days.
    pub fn with_horizon_days(mut self, horizon_days: i64) -> Self {
        self.horizon_days = horizon_days;
        self
    }
}

/// Per-employee placement cursor: the next free instant.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    date: NaiveDate,
    minute: i64,
}

/// Greedy multi-day allocator.
///
/// Pure over its inputs: consumes employees and tasks, emits a fresh
/// block list, keeps no state between invocations.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use workplan::allocator::Allocator;
/// use workplan::models::{Priority, Employee, Task};
///
/// let employees = vec![Employee::new("e1").with_name("Ada")];
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let tasks = vec![
///     Task::new("t1", monday)
///         .with_title("Write report")
///         .with_duration(120)
///         .with_priority(Priority::High),
/// ];
///
/// let blocks = Allocator::new().allocate(&employees, &tasks, monday, 1);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].start_min, 9 * 60);
/// assert_eq!(blocks[0].end_min, 11 * 60);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Allocator;

impl Allocator {
    /// Creates a new allocator.
    pub fn new() -> Self {
        Self
    }

    /// Allocates tasks to employees from `start_date` up to the horizon.
    ///
    /// Returns blocks in emission order: tasks in sorted order, each
    /// task's blocks chronological, employees interleaved. Callers that
    /// want a per-employee timeline must sort by date and start time
    /// themselves.
    pub fn allocate(
        &self,
        employees: &[Employee],
        tasks: &[Task],
        start_date: NaiveDate,
        horizon_days: i64,
    ) -> Vec<ScheduleBlock> {
        let horizon_end = start_date + Duration::days(horizon_days);
        let mut blocks: Vec<ScheduleBlock> = Vec::new();

        let mut cursors: HashMap<&str, Cursor> = employees
            .iter()
            .map(|e| {
                (
                    e.id.as_str(),
                    Cursor {
                        date: start_date,
                        minute: e.workday_start_min,
                    },
                )
            })
            .collect();

        log::debug!(
            "allocate: {} tasks, {} employees, {start_date} +{horizon_days}d",
            tasks.len(),
            employees.len()
        );

        for &idx in &self.sort_tasks(tasks) {
            let task = &tasks[idx];
            let Some(employee) = pick_employee(employees, &blocks, task) else {
                log::debug!("task '{}': no assignable employee, dropped", task.id);
                continue;
            };
            let Some(cursor) = cursors.get_mut(employee.id.as_str()) else {
                continue;
            };

            let window = employee.window();
            let mut remaining = task.duration_min;

            while remaining > 0 {
                if cursor.minute < window.start_min {
                    cursor.minute = window.start_min;
                }
                if cursor.minute >= window.end_min {
                    // Day exhausted: roll over, then give up past the horizon.
                    cursor.date += Duration::days(1);
                    cursor.minute = window.start_min;
                    if cursor.date > horizon_end {
                        break;
                    }
                    continue;
                }

                let slice = remaining.min(window.end_min - cursor.minute);
                blocks.push(
                    ScheduleBlock::new(
                        &employee.id,
                        &task.title,
                        BlockKind::Task,
                        cursor.date,
                        cursor.minute,
                        cursor.minute + slice,
                    )
                    .with_task(&task.id),
                );
                cursor.minute += slice;
                remaining -= slice;

                if remaining > 0 {
                    cursor.date += Duration::days(1);
                    cursor.minute = window.start_min;
                    if cursor.date > horizon_end {
                        log::debug!("task '{}': {remaining} min dropped past horizon", task.id);
                        break;
                    }
                }
            }
        }

        blocks
    }

    /// Allocates from a request.
    pub fn allocate_request(&self, request: &AllocationRequest) -> Vec<ScheduleBlock> {
        self.allocate(
            &request.employees,
            &request.tasks,
            request.start_date,
            request.horizon_days,
        )
    }

    /// Returns task indices in placement order.
    ///
    /// Stable composite key: priority score descending, due date
    /// ascending, duration descending.
    fn sort_tasks(&self, tasks: &[Task]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        indices.sort_by(|&a, &b| {
            let (ta, tb) = (&tasks[a], &tasks[b]);
            tb.priority
                .score()
                .cmp(&ta.priority.score())
                .then(ta.due_date.cmp(&tb.due_date))
                .then(tb.duration_min.cmp(&ta.duration_min))
        });
        indices
    }
}

/// Resolves the employee for a task.
///
/// A preferred assignee wins unconditionally, even when overloaded; an
/// unknown preferred id drops the task. Unassigned tasks go to the
/// employee with the least minutes among blocks already emitted in this
/// run (ties: input employee order).
fn pick_employee<'a>(
    employees: &'a [Employee],
    blocks: &[ScheduleBlock],
    task: &Task,
) -> Option<&'a Employee> {
    if let Some(assignee_id) = &task.assignee_id {
        return employees.iter().find(|e| e.id == *assignee_id);
    }
    employees
        .iter()
        .min_by_key(|e| total_minutes_for_employee(blocks, &e.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{minutes_for_task, Priority};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn employee(id: &str) -> Employee {
        Employee::new(id).with_name(id.to_uppercase())
    }

    fn task(id: &str, duration: i64, due: u32, priority: Priority) -> Task {
        Task::new(id, date(due))
            .with_title(id)
            .with_duration(duration)
            .with_priority(priority)
    }

    /// Id-free projection for comparing runs (block ids are fresh UUIDs).
    fn shape(blocks: &[ScheduleBlock]) -> Vec<(String, NaiveDate, i64, i64, Option<String>)> {
        blocks
            .iter()
            .map(|b| {
                (
                    b.employee_id.clone(),
                    b.date,
                    b.start_min,
                    b.end_min,
                    b.task_id.clone(),
                )
            })
            .collect()
    }

    #[test]
    fn test_single_task_single_day() {
        let employees = vec![employee("a")];
        let tasks = vec![task("report", 120, 2, Priority::High)];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 1);

        assert_eq!(blocks.len(), 1);
        let b = &blocks[0];
        assert_eq!(b.employee_id, "a");
        assert_eq!(b.date, date(2));
        assert_eq!(b.start_min, 540); // 09:00
        assert_eq!(b.end_min, 660); // 11:00
        assert_eq!(b.kind, BlockKind::Task);
        assert_eq!(b.task_id.as_deref(), Some("report"));
        assert_eq!(b.title, "report");
    }

    #[test]
    fn test_spill_to_next_day() {
        // 480-min day; two 300-min tasks: the second splits 180 + 120.
        let employees = vec![employee("a")];
        let tasks = vec![
            task("t1", 300, 2, Priority::Normal),
            task("t2", 300, 2, Priority::Normal),
        ];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 7);

        assert_eq!(
            shape(&blocks),
            vec![
                ("a".into(), date(2), 540, 840, Some("t1".into())), // 09:00-14:00
                ("a".into(), date(2), 840, 1020, Some("t2".into())), // 14:00-17:00
                ("a".into(), date(3), 540, 660, Some("t2".into())), // 09:00-11:00
            ]
        );
        assert_eq!(minutes_for_task(&blocks, "t2"), 300);
    }

    #[test]
    fn test_priority_precedes_in_emission_order() {
        let employees = vec![employee("a")];
        let tasks = vec![
            task("low", 60, 2, Priority::Low),
            task("high", 60, 2, Priority::High),
        ];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 7);

        assert_eq!(blocks[0].task_id.as_deref(), Some("high"));
        assert_eq!(blocks[1].task_id.as_deref(), Some("low"));
        assert!(blocks[0].start_min < blocks[1].start_min);
    }

    #[test]
    fn test_ordering_due_date_then_duration() {
        let employees = vec![employee("a")];
        let tasks = vec![
            task("later_due", 60, 5, Priority::Normal),
            task("early_due", 60, 2, Priority::Normal),
            task("short", 30, 2, Priority::Normal),
        ];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 7);

        // early_due before later_due (due date), and the longer of the two
        // equal-due tasks first (duration descending).
        let order: Vec<_> = blocks.iter().map(|b| b.task_id.as_deref()).collect();
        assert_eq!(order, vec![Some("early_due"), Some("short"), Some("later_due")]);
    }

    #[test]
    fn test_stable_order_on_equal_keys() {
        let employees = vec![employee("a")];
        let tasks = vec![
            task("first", 60, 2, Priority::Normal),
            task("second", 60, 2, Priority::Normal),
        ];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 7);
        assert_eq!(blocks[0].task_id.as_deref(), Some("first"));
        assert_eq!(blocks[1].task_id.as_deref(), Some("second"));
    }

    #[test]
    fn test_preferred_assignee_wins_even_if_loaded() {
        let employees = vec![employee("a"), employee("b")];
        let tasks = vec![
            task("t1", 240, 2, Priority::High).with_assignee("a"),
            task("t2", 60, 2, Priority::Normal).with_assignee("a"),
        ];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 7);
        assert!(blocks.iter().all(|b| b.employee_id == "a"));
    }

    #[test]
    fn test_unknown_assignee_drops_task() {
        let employees = vec![employee("a")];
        let tasks = vec![task("t1", 60, 2, Priority::High).with_assignee("ghost")];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 7);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_least_loaded_balancing() {
        let employees = vec![employee("a"), employee("b")];
        let tasks = vec![
            task("t1", 120, 2, Priority::Normal),
            task("t2", 120, 2, Priority::Normal),
        ];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 7);

        // First task goes to "a" (tie broken by input order), second to "b"
        // because "a" now carries 120 minutes.
        assert_eq!(blocks[0].employee_id, "a");
        assert_eq!(blocks[1].employee_id, "b");
    }

    #[test]
    fn test_horizon_drops_remainder() {
        // One 480-min day within horizon 0 (only the start date itself):
        // a 600-min task keeps its first 480 minutes and drops the rest.
        let employees = vec![employee("a")];
        let tasks = vec![task("big", 600, 2, Priority::Normal)];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 0);
        assert_eq!(minutes_for_task(&blocks, "big"), 480);
        assert!(blocks.iter().all(|b| b.date == date(2)));
    }

    #[test]
    fn test_horizon_boundary_day_is_eligible() {
        // Day start+1 is exactly at the boundary for horizon 1.
        let employees = vec![employee("a")];
        let tasks = vec![task("big", 600, 2, Priority::Normal)];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 1);
        assert_eq!(minutes_for_task(&blocks, "big"), 600);
        assert_eq!(blocks.last().unwrap().date, date(3));
    }

    #[test]
    fn test_no_employees_drops_everything() {
        let tasks = vec![task("t1", 60, 2, Priority::High)];
        let blocks = Allocator::new().allocate(&[], &tasks, date(2), 7);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_zero_duration_and_completed_tasks_tolerated() {
        let employees = vec![employee("a")];
        let tasks = vec![
            task("empty", 0, 2, Priority::High),
            task("done", 60, 2, Priority::Normal).with_completed(true),
        ];

        // Completed tasks are the caller's concern; the engine just
        // schedules what it is given without panicking.
        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 7);
        assert_eq!(minutes_for_task(&blocks, "empty"), 0);
        assert_eq!(minutes_for_task(&blocks, "done"), 60);
    }

    #[test]
    fn test_no_overlap_per_employee_day() {
        let employees = vec![employee("a"), employee("b")];
        let tasks = vec![
            task("t1", 300, 2, Priority::High),
            task("t2", 300, 2, Priority::Normal),
            task("t3", 450, 3, Priority::Normal),
            task("t4", 90, 2, Priority::Low).with_assignee("a"),
        ];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 7);
        for (i, a) in blocks.iter().enumerate() {
            for b in &blocks[i + 1..] {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_blocks_stay_inside_workday_window() {
        let employees = vec![employee("a").with_workday(600, 900)];
        let tasks = vec![task("t1", 700, 2, Priority::Normal)];

        let blocks = Allocator::new().allocate(&employees, &tasks, date(2), 7);
        assert!(!blocks.is_empty());
        for b in &blocks {
            assert!(b.start_min >= 600 && b.end_min <= 900);
            assert!(b.start_min < b.end_min);
        }
        assert_eq!(minutes_for_task(&blocks, "t1"), 700);
    }

    #[test]
    fn test_deterministic() {
        let employees = vec![employee("a"), employee("b")];
        let tasks = vec![
            task("t1", 300, 2, Priority::High),
            task("t2", 120, 3, Priority::Normal),
            task("t3", 480, 2, Priority::Normal),
        ];

        let one = Allocator::new().allocate(&employees, &tasks, date(2), 7);
        let two = Allocator::new().allocate(&employees, &tasks, date(2), 7);
        assert_eq!(shape(&one), shape(&two));
    }

    #[test]
    fn test_allocate_request() {
        let request = AllocationRequest::new(
            vec![employee("a")],
            vec![task("t1", 60, 2, Priority::Normal)],
            date(2),
        )
        .with_horizon_days(1);

        assert_eq!(request.horizon_days, 1);
        let blocks = Allocator::new().allocate_request(&request);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_default_horizon() {
        let request = AllocationRequest::new(vec![], vec![], date(2));
        assert_eq!(request.horizon_days, DEFAULT_HORIZON_DAYS);
    }
}
