//! Schedule block model and block-list queries.
//!
//! A block is one contiguous scheduled interval for one employee on one
//! date. The allocator and the urgent inserter are the only writers; the
//! `(employee_id, date)` pair determines the day bucket a block belongs
//! to for layout and conflict purposes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a block represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// A slice of a task placed by the allocator.
    Task,
    /// A planned meeting.
    Meeting,
    /// An urgent meeting inserted after the fact.
    Urgent,
}

/// A single scheduled interval for one employee on one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleBlock {
    /// Unique block identifier (UUID v4).
    pub id: String,
    /// Owning employee.
    pub employee_id: String,
    /// Display title (task title, or "Urgent Meeting").
    pub title: String,
    /// Block classification.
    pub kind: BlockKind,
    /// Source task, for `Task` blocks.
    pub task_id: Option<String>,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Start, minute-of-day. Invariant: `start < end`, both in `0..1440`.
    #[serde(rename = "start", with = "super::time::hhmm")]
    pub start_min: i64,
    /// End, minute-of-day (exclusive).
    #[serde(rename = "end", with = "super::time::hhmm")]
    pub end_min: i64,
    /// Free-form notes (host-owned).
    pub notes: Option<String>,
}

impl ScheduleBlock {
    /// Creates a new block with a fresh UUID.
    pub fn new(
        employee_id: impl Into<String>,
        title: impl Into<String>,
        kind: BlockKind,
        date: NaiveDate,
        start_min: i64,
        end_min: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.into(),
            title: title.into(),
            kind,
            task_id: None,
            date,
            start_min,
            end_min,
            notes: None,
        }
    }

    /// Links this block to its source task.
    pub fn with_task(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    /// Sets free-form notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Block length in minutes.
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// Whether two blocks occupy overlapping time in the same day bucket.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.employee_id == other.employee_id
            && self.date == other.date
            && self.start_min < other.end_min
            && other.start_min < self.end_min
    }
}

/// Blocks for one employee on one date, in list order.
pub fn blocks_for_employee_on<'a>(
    blocks: &'a [ScheduleBlock],
    employee_id: &str,
    date: NaiveDate,
) -> Vec<&'a ScheduleBlock> {
    blocks
        .iter()
        .filter(|b| b.employee_id == employee_id && b.date == date)
        .collect()
}

/// Total scheduled minutes for an employee across all dates.
pub fn total_minutes_for_employee(blocks: &[ScheduleBlock], employee_id: &str) -> i64 {
    blocks
        .iter()
        .filter(|b| b.employee_id == employee_id)
        .map(|b| b.duration_min())
        .sum()
}

/// Blocks emitted for a given source task, in list order.
pub fn blocks_for_task<'a>(blocks: &'a [ScheduleBlock], task_id: &str) -> Vec<&'a ScheduleBlock> {
    blocks
        .iter()
        .filter(|b| b.task_id.as_deref() == Some(task_id))
        .collect()
}

/// Total minutes emitted for a given source task.
pub fn minutes_for_task(blocks: &[ScheduleBlock], task_id: &str) -> i64 {
    blocks_for_task(blocks, task_id)
        .iter()
        .map(|b| b.duration_min())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn block(employee: &str, d: u32, start: i64, end: i64) -> ScheduleBlock {
        ScheduleBlock::new(employee, "work", BlockKind::Task, date(d), start, end)
    }

    #[test]
    fn test_block_duration() {
        let b = block("e1", 2, 540, 660);
        assert_eq!(b.duration_min(), 120);
    }

    #[test]
    fn test_fresh_ids() {
        let a = block("e1", 2, 540, 600);
        let b = block("e1", 2, 600, 660);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_overlaps() {
        let a = block("e1", 2, 540, 660);
        assert!(a.overlaps(&block("e1", 2, 600, 720)));
        assert!(!a.overlaps(&block("e1", 2, 660, 720))); // touching, not overlapping
        assert!(!a.overlaps(&block("e2", 2, 600, 720))); // other employee
        assert!(!a.overlaps(&block("e1", 3, 600, 720))); // other date
    }

    #[test]
    fn test_queries() {
        let blocks = vec![
            block("e1", 2, 540, 660).with_task("t1"),
            block("e1", 3, 540, 600).with_task("t1"),
            block("e2", 2, 540, 600).with_task("t2"),
        ];

        assert_eq!(blocks_for_employee_on(&blocks, "e1", date(2)).len(), 1);
        assert_eq!(total_minutes_for_employee(&blocks, "e1"), 180);
        assert_eq!(blocks_for_task(&blocks, "t1").len(), 2);
        assert_eq!(minutes_for_task(&blocks, "t1"), 180);
        assert_eq!(minutes_for_task(&blocks, "t9"), 0);
    }

    #[test]
    fn test_block_serde_shape() {
        let b = block("e1", 2, 540, 660).with_task("t1");
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["date"], "2026-03-02");
        assert_eq!(json["start"], "09:00");
        assert_eq!(json["end"], "11:00");
        assert_eq!(json["kind"], "task");

        let back: ScheduleBlock = serde_json::from_value(json).unwrap();
        assert_eq!(back.start_min, 540);
        assert_eq!(back.end_min, 660);
    }
}
