//! Employee and roster models.
//!
//! An employee is the staffing resource of the shift board: it can hold
//! a bounded number of shifts. The bound (`limit`) and the running
//! count (`current_shifts`) are the only capacity state the engine
//! tracks.

use serde::{Deserialize, Serialize};

/// A staff member who can be assigned to shift slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Maximum number of shifts this employee may hold (must be > 0).
    pub limit: u32,
    /// Shifts currently held. Never exceeds `limit`.
    pub current_shifts: u32,
}

impl Employee {
    /// Creates an employee with no shifts.
    pub fn new(id: impl Into<String>, name: impl Into<String>, limit: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            limit,
            current_shifts: 0,
        }
    }

    /// Sets the number of shifts already held.
    pub fn with_current_shifts(mut self, current_shifts: u32) -> Self {
        self.current_shifts = current_shifts;
        self
    }

    /// Shifts still available before the limit is reached.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.current_shifts)
    }

    /// Whether the employee cannot take another shift.
    #[inline]
    pub fn is_at_limit(&self) -> bool {
        self.current_shifts >= self.limit
    }

    /// Fraction of the limit in use (0.0..=1.0).
    ///
    /// Returns 0.0 for a zero limit; such rosters are rejected at load.
    pub fn utilization(&self) -> f64 {
        if self.limit == 0 {
            return 0.0;
        }
        f64::from(self.current_shifts) / f64::from(self.limit)
    }
}

/// Ordered employee list. Display order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee.
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id == id)
    }

    /// Whether an employee with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates employees in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Employees as a slice.
    pub fn as_slice(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl From<Vec<Employee>> for Roster {
    fn from(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_builder() {
        let e = Employee::new("1", "Anna Ivanova", 5).with_current_shifts(3);
        assert_eq!(e.id, "1");
        assert_eq!(e.name, "Anna Ivanova");
        assert_eq!(e.remaining(), 2);
        assert!(!e.is_at_limit());
        assert!((e.utilization() - 0.6).abs() < 1e-10);
    }

    #[test]
    fn test_employee_at_limit() {
        let e = Employee::new("2", "Petr", 6).with_current_shifts(6);
        assert!(e.is_at_limit());
        assert_eq!(e.remaining(), 0);
        assert!((e.utilization() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_limit_utilization() {
        let e = Employee::new("x", "Nobody", 0);
        assert!((e.utilization() - 0.0).abs() < 1e-10);
        assert!(e.is_at_limit());
    }

    #[test]
    fn test_roster_lookup_keeps_order() {
        let roster = Roster::new()
            .with_employee(Employee::new("b", "B", 3))
            .with_employee(Employee::new("a", "A", 3));

        assert_eq!(roster.len(), 2);
        assert!(roster.contains("a"));
        assert!(!roster.contains("c"));
        let ids: Vec<&str> = roster.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_roster_serializes_as_list() {
        let roster = Roster::from(vec![Employee::new("1", "Anna", 5)]);
        let json = serde_json::to_value(&roster).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["current_shifts"], 0);
    }
}
