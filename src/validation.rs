//! Load-time validation for a roster and week.
//!
//! Checks structural integrity before a session is built. Detects:
//! - Duplicate employee or slot IDs
//! - Zero shift limits and counts above the limit
//! - Counts lower than the slots an employee already holds
//! - Week shape (seven consecutive days)
//! - Slots whose status, occupant and urgent flag disagree
//! - Slots held by unknown employees
//!
//! All problems are collected; nothing stops at the first error.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{Roster, WeekSchedule, DAYS_PER_WEEK};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two employees or two slots share the same ID.
    DuplicateId,
    /// An employee has a shift limit of zero.
    InvalidLimit,
    /// An employee already holds more shifts than allowed.
    CountOverLimit,
    /// An employee's count is below the slots they hold this week.
    CountBelowAssigned,
    /// The week does not have exactly seven days.
    WrongDayCount,
    /// Days are not consecutive calendar dates.
    NonConsecutiveDates,
    /// Slot status, occupant and urgent flag disagree.
    InconsistentSlot,
    /// A slot is held by an employee missing from the roster.
    UnknownEmployee,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the startup state of a session.
///
/// Checks:
/// 1. No duplicate employee IDs
/// 2. Every limit is positive and every count is within its limit
/// 3. The week has seven days on consecutive dates
/// 4. No duplicate slot IDs across the week
/// 5. Every slot satisfies the status invariants
/// 6. Every occupant is on the roster
/// 7. Every count covers the slots already held
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_session(roster: &Roster, week: &WeekSchedule) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = HashSet::new();
    for e in roster {
        if !employee_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
        if e.limit == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidLimit,
                format!("Employee '{}' has a shift limit of zero", e.id),
            ));
        }
        if e.current_shifts > e.limit {
            errors.push(ValidationError::new(
                ValidationErrorKind::CountOverLimit,
                format!(
                    "Employee '{}' holds {} shifts over a limit of {}",
                    e.id, e.current_shifts, e.limit
                ),
            ));
        }
    }

    validate_week_shape(week, &mut errors);

    let mut slot_ids = HashSet::new();
    for (slot_ref, slot) in week.slots() {
        if !slot_ids.insert(slot.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate slot ID: {}", slot.id),
            ));
        }
        if !slot.is_consistent() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InconsistentSlot,
                format!(
                    "Slot '{slot_ref}' is {} with occupant {:?} and urgent={}",
                    slot.status, slot.employee_id, slot.urgent
                ),
            ));
        }
        if let Some(emp) = &slot.employee_id {
            if !employee_ids.contains(emp.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownEmployee,
                    format!("Slot '{slot_ref}' is held by unknown employee '{emp}'"),
                ));
            }
        }
    }

    // A cancel decrements the occupant's count, so the count must cover
    // every slot they hold here.
    for e in roster {
        let held = week.held_by(&e.id);
        if (e.current_shifts as usize) < held {
            errors.push(ValidationError::new(
                ValidationErrorKind::CountBelowAssigned,
                format!(
                    "Employee '{}' has {} shifts recorded but holds {} slots",
                    e.id, e.current_shifts, held
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_week_shape(week: &WeekSchedule, errors: &mut Vec<ValidationError>) {
    if week.len() != DAYS_PER_WEEK {
        errors.push(ValidationError::new(
            ValidationErrorKind::WrongDayCount,
            format!("Week has {} days, expected {DAYS_PER_WEEK}", week.len()),
        ));
    }

    for pair in week.days().windows(2) {
        if pair[1].date != pair[0].date + Duration::days(1) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonConsecutiveDates,
                format!("Day {} does not follow {}", pair[1].date, pair[0].date),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DaySchedule, Employee, ShiftPeriod, Slot, SlotStatus};
    use chrono::NaiveDate;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 11).unwrap()
    }

    fn sample_roster() -> Roster {
        Roster::new()
            .with_employee(Employee::new("1", "Anna", 5).with_current_shifts(3))
            .with_employee(Employee::new("2", "Petr", 6).with_current_shifts(5))
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_session(&sample_roster(), &WeekSchedule::standard(start())).is_ok());
    }

    #[test]
    fn test_duplicate_employee_id() {
        let roster = sample_roster().with_employee(Employee::new("1", "Anna again", 3));
        let errors = validate_session(&roster, &WeekSchedule::standard(start())).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("employee")));
    }

    #[test]
    fn test_zero_limit_and_over_limit() {
        let roster = Roster::new()
            .with_employee(Employee::new("z", "Zero", 0))
            .with_employee(Employee::new("o", "Over", 2).with_current_shifts(3));
        let errors = validate_session(&roster, &WeekSchedule::standard(start())).unwrap_err();
        let k = kinds(&errors);
        assert!(k.contains(&ValidationErrorKind::InvalidLimit));
        assert!(k.contains(&ValidationErrorKind::CountOverLimit));
    }

    #[test]
    fn test_wrong_day_count() {
        let week = WeekSchedule::new(WeekSchedule::standard(start()).days()[..5].to_vec());
        let errors = validate_session(&sample_roster(), &week).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::WrongDayCount]);
    }

    #[test]
    fn test_non_consecutive_dates() {
        let mut days = WeekSchedule::standard(start()).days().to_vec();
        days.swap(2, 3);
        let errors = validate_session(&sample_roster(), &WeekSchedule::new(days)).unwrap_err();
        assert!(kinds(&errors).contains(&ValidationErrorKind::NonConsecutiveDates));
    }

    #[test]
    fn test_duplicate_slot_id() {
        let mut days = WeekSchedule::standard(start()).days().to_vec();
        days[0] = DaySchedule::new(start())
            .with_slot(ShiftPeriod::Morning, Slot::base("dup"))
            .with_slot(ShiftPeriod::Evening, Slot::base("dup"));
        let errors = validate_session(&sample_roster(), &WeekSchedule::new(days)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("slot")));
    }

    #[test]
    fn test_inconsistent_slot() {
        let mut broken = Slot::base("x");
        broken.status = SlotStatus::Taken;
        let mut days = WeekSchedule::standard(start()).days().to_vec();
        days[0] = DaySchedule::new(start()).with_slot(ShiftPeriod::Day, broken);
        let errors = validate_session(&sample_roster(), &WeekSchedule::new(days)).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::InconsistentSlot]);
    }

    #[test]
    fn test_unknown_occupant() {
        let mut days = WeekSchedule::standard(start()).days().to_vec();
        days[0] = DaySchedule::new(start())
            .with_slot(ShiftPeriod::Day, Slot::base("x").taken_by("ghost"));
        let errors = validate_session(&sample_roster(), &WeekSchedule::new(days)).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::UnknownEmployee]);
    }

    #[test]
    fn test_count_below_assigned() {
        let roster =
            Roster::new().with_employee(Employee::new("1", "Anna", 5).with_current_shifts(1));
        let mut days = WeekSchedule::standard(start()).days().to_vec();
        days[0] = DaySchedule::new(start())
            .with_slot(ShiftPeriod::Morning, Slot::base("a").taken_by("1"))
            .with_slot(ShiftPeriod::Evening, Slot::base("b").taken_by("1"));
        let errors = validate_session(&roster, &WeekSchedule::new(days)).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::CountBelowAssigned]);
    }

    #[test]
    fn test_multiple_errors() {
        let roster = Roster::new().with_employee(Employee::new("z", "Zero", 0));
        let errors = validate_session(&roster, &WeekSchedule::default()).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
