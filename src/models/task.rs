//! Task model.
//!
//! A task is a unit of work with an effort duration, a due date, and a
//! priority. It may name a preferred assignee; otherwise the allocator
//! picks one. Tasks are external input — the engine never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scheduling priority.
///
/// Ordered: `High > Normal > Low`. The allocator places higher
/// priorities first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait past its due date if capacity runs out.
    Low,
    /// Everyday work.
    #[default]
    Normal,
    /// Placed before everything else.
    High,
}

impl Priority {
    /// Numeric score used in ordering keys: low=0, normal=1, high=2.
    #[inline]
    pub fn score(&self) -> i32 {
        match self {
            Priority::Low => 0,
            Priority::Normal => 1,
            Priority::High => 2,
        }
    }
}

/// A unit of work to be placed into workday windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable title, copied onto emitted blocks.
    pub title: String,
    /// Longer description (host-owned, unused by the engine).
    pub description: Option<String>,
    /// Effort in minutes. Invariant: positive (see `validation`).
    pub duration_min: i64,
    /// Due date; earlier due dates are placed first within a priority.
    pub due_date: NaiveDate,
    /// Scheduling priority.
    pub priority: Priority,
    /// Preferred assignee. When set, that employee is used
    /// unconditionally.
    pub assignee_id: Option<String>,
    /// Completion flag. Callers are expected to pass only active tasks;
    /// the engine schedules whatever it is given.
    pub completed: bool,
}

impl Task {
    /// Creates a new task due on the given date.
    pub fn new(id: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: None,
            duration_min: 0,
            due_date,
            priority: Priority::Normal,
            assignee_id: None,
            completed: false,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the effort in minutes.
    pub fn with_duration(mut self, duration_min: i64) -> Self {
        self.duration_min = duration_min;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the preferred assignee.
    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    /// Marks the task completed.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}
