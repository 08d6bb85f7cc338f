//! Input validation for the scheduling engine.
//!
//! The allocator and the urgent inserter assume validated inputs and
//! degrade silently on anything else (tasks are dropped, never errored).
//! This module gives the host application a fail-fast check to run at
//! the form boundary instead. Detects:
//! - Duplicate employee or task IDs
//! - Inverted or out-of-range workday windows
//! - Non-positive task durations
//! - Preferred assignees that reference no known employee

use std::collections::HashSet;

use crate::models::time::MINUTES_PER_DAY;
use crate::models::{Employee, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A workday window violates `0 <= start < end < 1440`.
    InvalidWorkdayWindow,
    /// A task duration is zero or negative.
    NonPositiveDuration,
    /// A task names a preferred assignee that doesn't exist.
    UnknownAssignee,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates employees and tasks before allocation.
///
/// Checks:
/// 1. No duplicate employee IDs
/// 2. Workday windows satisfy `0 <= start < end < 1440`
/// 3. No duplicate task IDs
/// 4. Task durations are positive
/// 5. Preferred assignees reference existing employees
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(employees: &[Employee], tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = HashSet::new();
    for e in employees {
        if !employee_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }

        let w = e.window();
        if w.start_min < 0 || w.start_min >= w.end_min || w.end_min >= MINUTES_PER_DAY {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWorkdayWindow,
                format!(
                    "Employee '{}' has an invalid workday window ({}..{} min)",
                    e.id, w.start_min, w.end_min
                ),
            ));
        }
    }

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.duration_min <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Task '{}' has non-positive duration {} min",
                    task.id, task.duration_min
                ),
            ));
        }

        if let Some(assignee_id) = &task.assignee_id {
            if !employee_ids.contains(assignee_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownAssignee,
                    format!(
                        "Task '{}' prefers unknown assignee '{}'",
                        task.id, assignee_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
