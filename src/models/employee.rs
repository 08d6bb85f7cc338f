//! Employee model.
//!
//! An employee is the schedulable person: identity, optional contact
//! channels, and a fixed daily workday window. The engine reads the
//! window and the id; name and contact channels are carried for the host
//! application (display, calendar export, reminders) and never consulted
//! during allocation.

use serde::{Deserialize, Serialize};

use super::time::WorkdayWindow;

/// Default workday start, 09:00.
pub const DEFAULT_WORKDAY_START_MIN: i64 = 9 * 60;
/// Default workday end, 17:00.
pub const DEFAULT_WORKDAY_END_MIN: i64 = 17 * 60;

/// A person tasks can be scheduled for.
///
/// Immutable input to the engine; created and removed by the host
/// application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email (host-owned).
    pub email: Option<String>,
    /// Contact phone (host-owned).
    pub phone: Option<String>,
    /// Workday start, minute-of-day. Invariant: less than `workday_end_min`.
    #[serde(rename = "workday_start", with = "super::time::hhmm")]
    pub workday_start_min: i64,
    /// Workday end, minute-of-day (exclusive).
    #[serde(rename = "workday_end", with = "super::time::hhmm")]
    pub workday_end_min: i64,
}

impl Employee {
    /// Creates a new employee with a 09:00-17:00 workday.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: None,
            phone: None,
            workday_start_min: DEFAULT_WORKDAY_START_MIN,
            workday_end_min: DEFAULT_WORKDAY_END_MIN,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the contact phone.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the workday window in minutes-of-day.
    pub fn with_workday(mut self, start_min: i64, end_min: i64) -> Self {
        self.workday_start_min = start_min;
        self.workday_end_min = end_min;
        self
    }

    /// The employee's daily availability window.
    #[inline]
    pub fn window(&self) -> WorkdayWindow {
        WorkdayWindow::new(self.workday_start_min, self.workday_end_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_builder() {
        let e = Employee::new("e1")
            .with_name("Ada")
            .with_email("ada@example.com")
            .with_phone("+1555")
            .with_workday(8 * 60, 16 * 60);

        assert_eq!(e.id, "e1");
        assert_eq!(e.name, "Ada");
        assert_eq!(e.email.as_deref(), Some("ada@example.com"));
        assert_eq!(e.phone.as_deref(), Some("+1555"));
        assert_eq!(e.window().duration_min(), 480);
    }

    #[test]
    fn test_employee_defaults() {
        let e = Employee::new("e1");
        assert_eq!(e.workday_start_min, 540);
        assert_eq!(e.workday_end_min, 1020);
        assert!(e.email.is_none());
    }

    #[test]
    fn test_employee_serde_hhmm() {
        let e = Employee::new("e1").with_name("Ada");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["workday_start"], "09:00");
        assert_eq!(json["workday_end"], "17:00");

        let back: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(back.workday_start_min, 540);
        assert_eq!(back.workday_end_min, 1020);
    }
}
