//! The shift assignment session.
//!
//! A [`Session`] owns one week and one roster. Every mutation goes
//! through [`Session::assign`], [`Session::cancel`],
//! [`Session::mark_urgent`] or [`Session::clear_urgent`]; each checks
//! all of its rules before touching state, so a rejected call leaves
//! the session exactly as it was.
//!
//! # Counting
//! `current_shifts` moves with the slots: assigning over an occupied
//! slot first releases the previous occupant (count −1) and then
//! books the new one (count +1). Cancelling releases the occupant.
//! Re-booking an employee onto their own slot is therefore neutral.

use serde::{Deserialize, Serialize};

use crate::access::{Capability, Requester};
use crate::error::{EngineError, Result};
use crate::models::{Employee, Roster, Slot, SlotRef, SlotStatus, WeekSchedule};
use crate::seed::SessionSeed;
use crate::validation::validate_session;

/// Outcome of a successful assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Where the employee was booked.
    pub slot_ref: SlotRef,
    /// The slot after the change.
    pub slot: Slot,
    /// The booked employee after the change.
    pub employee: Employee,
    /// Previous occupant displaced by this assignment, if it was someone else.
    pub displaced: Option<Employee>,
}

/// Outcome of a successful cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cancellation {
    /// The released slot.
    pub slot_ref: SlotRef,
    /// The slot after the change.
    pub slot: Slot,
    /// The released employee after the change.
    pub employee: Employee,
}

/// Shift assignment engine for one week.
///
/// # Example
///
/// ```
/// use shift_desk::access::Requester;
/// use shift_desk::engine::Session;
///
/// let mut session = Session::demo();
/// let (slot_ref, _) = session.week().find("13.11-m-1").unwrap();
///
/// let booked = session.assign(&slot_ref, "1", &Requester::employee("1")).unwrap();
/// assert_eq!(booked.employee.current_shifts, 4);
///
/// // Staff cannot book colleagues.
/// let (other, _) = session.week().find("13.11-m-2").unwrap();
/// assert!(session.assign(&other, "2", &Requester::employee("1")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    week: WeekSchedule,
}

impl Session {
    /// Creates a session after validating roster and week together.
    pub fn new(roster: Roster, week: WeekSchedule) -> Result<Self> {
        validate_session(&roster, &week).map_err(EngineError::InvalidSetup)?;
        tracing::info!(
            employees = roster.len(),
            days = week.len(),
            urgent = week.urgent_count(),
            "Session created"
        );
        Ok(Self { roster, week })
    }

    /// Creates a session from startup configuration.
    pub fn from_seed(seed: SessionSeed) -> Result<Self> {
        Self::new(seed.roster, seed.week)
    }

    /// Session over the built-in demo week.
    pub fn demo() -> Self {
        let seed = SessionSeed::demo();
        Self {
            roster: seed.roster,
            week: seed.week,
        }
    }

    /// The week, read-only.
    pub fn week(&self) -> &WeekSchedule {
        &self.week
    }

    /// The roster, read-only.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Looks up an employee.
    pub fn employee(&self, employee_id: &str) -> Result<&Employee> {
        self.roster
            .get(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound(employee_id.to_string()))
    }

    /// Resolves a slot locator.
    pub fn slot(&self, slot_ref: &SlotRef) -> Result<&Slot> {
        self.week
            .slot(slot_ref)
            .ok_or_else(|| EngineError::SlotNotFound(slot_ref.to_string()))
    }

    /// Resolves a bare slot id.
    pub fn find_slot(&self, slot_id: &str) -> Result<(SlotRef, &Slot)> {
        self.week
            .find(slot_id)
            .ok_or_else(|| EngineError::SlotNotFound(slot_id.to_string()))
    }

    /// Slots currently held by an employee, in board order.
    pub fn slots_of(&self, employee_id: &str) -> Vec<(SlotRef, &Slot)> {
        self.week
            .slots()
            .filter(|(_, s)| s.is_held_by(employee_id))
            .collect()
    }

    /// Number of slots flagged urgent, recounted on every call.
    pub fn urgent_count(&self) -> usize {
        self.week.urgent_count()
    }

    /// `current_shifts / limit` for an employee (0.0..=1.0).
    pub fn utilization(&self, employee_id: &str) -> Result<f64> {
        self.employee(employee_id).map(Employee::utilization)
    }

    /// Employees the requester could book onto the slot right now.
    ///
    /// Employees at their limit are left out; a staff member only
    /// ever sees themselves.
    pub fn eligible_employees(
        &self,
        slot_ref: &SlotRef,
        requester: &Requester,
    ) -> Result<Vec<&Employee>> {
        self.check_slot_bookable(slot_ref)?;
        let eligible = self
            .roster
            .iter()
            .filter(|e| self.check_assign(slot_ref, &e.id, requester).is_ok())
            .collect::<Vec<_>>();
        tracing::debug!(slot = %slot_ref, count = eligible.len(), "Eligible employees resolved");
        Ok(eligible)
    }

    /// Books `employee_id` onto a slot.
    ///
    /// # Rules
    /// 1. The slot exists and is not unavailable.
    /// 2. The employee exists.
    /// 3. Staff may only book themselves and may not displace a colleague.
    /// 4. The employee has room under their limit (their own slot is
    ///    released first, so re-booking it never hits the limit).
    ///
    /// # Effect
    /// The slot becomes taken and loses its urgent flag. A previous
    /// occupant is released before the new employee is counted.
    pub fn assign(
        &mut self,
        slot_ref: &SlotRef,
        employee_id: &str,
        requester: &Requester,
    ) -> Result<Assignment> {
        let previous = self
            .check_assign(slot_ref, employee_id, requester)
            .inspect_err(|err| {
                tracing::warn!(
                    slot = %slot_ref,
                    employee_id,
                    user = %requester.user_id,
                    error = %err,
                    "Assignment rejected"
                );
            })?;

        let displaced = match previous.as_deref() {
            Some(prev) => {
                let released = self.release_count(prev)?;
                (prev != employee_id).then_some(released)
            }
            None => None,
        };

        let slot = self
            .week
            .slot_mut(slot_ref)
            .ok_or_else(|| EngineError::SlotNotFound(slot_ref.to_string()))?;
        slot.occupy(employee_id);
        let slot = slot.clone();

        let employee = self
            .roster
            .get_mut(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound(employee_id.to_string()))?;
        employee.current_shifts += 1;
        let employee = employee.clone();

        tracing::info!(
            slot = %slot_ref,
            employee_id,
            shifts = employee.current_shifts,
            limit = employee.limit,
            displaced = displaced.as_ref().map(|e| e.id.as_str()),
            "Shift assigned"
        );

        Ok(Assignment {
            slot_ref: slot_ref.clone(),
            slot,
            employee,
            displaced,
        })
    }

    /// Releases a taken slot.
    ///
    /// Staff may only release their own slots. The occupant's count
    /// drops by one; the urgent flag is left untouched.
    pub fn cancel(&mut self, slot_ref: &SlotRef, requester: &Requester) -> Result<Cancellation> {
        let occupant = self.check_cancel(slot_ref, requester).inspect_err(|err| {
            tracing::warn!(
                slot = %slot_ref,
                user = %requester.user_id,
                error = %err,
                "Cancellation rejected"
            );
        })?;

        let slot = self
            .week
            .slot_mut(slot_ref)
            .ok_or_else(|| EngineError::SlotNotFound(slot_ref.to_string()))?;
        slot.release();
        let slot = slot.clone();
        let employee = self.release_count(&occupant)?;

        tracing::info!(
            slot = %slot_ref,
            employee_id = %occupant,
            shifts = employee.current_shifts,
            "Shift cancelled"
        );

        Ok(Cancellation {
            slot_ref: slot_ref.clone(),
            slot,
            employee,
        })
    }

    /// Flags a free slot as an urgent replacement. Admin only.
    ///
    /// The trigger (manual, day-of threshold, absence report) is up to
    /// the caller.
    pub fn mark_urgent(&mut self, slot_id: &str, requester: &Requester) -> Result<Slot> {
        self.set_urgency(slot_id, requester, true)
    }

    /// Withdraws an urgent flag, returning the slot to free. Admin only.
    pub fn clear_urgent(&mut self, slot_id: &str, requester: &Requester) -> Result<Slot> {
        self.set_urgency(slot_id, requester, false)
    }

    fn set_urgency(&mut self, slot_id: &str, requester: &Requester, urgent: bool) -> Result<Slot> {
        let (action, from) = if urgent {
            ("mark urgent", SlotStatus::Free)
        } else {
            ("clear urgent", SlotStatus::Urgent)
        };

        let (slot_ref, slot) = self.find_slot(slot_id)?;
        authorize(requester, Capability::ManageUrgency, slot_id)?;
        if slot.status != from {
            let err = invalid_state(slot, action);
            tracing::warn!(slot = %slot_ref, error = %err, "Urgency change rejected");
            return Err(err);
        }

        let slot = self
            .week
            .slot_mut(&slot_ref)
            .ok_or_else(|| EngineError::SlotNotFound(slot_id.to_string()))?;
        slot.set_urgent(urgent);
        tracing::info!(slot = %slot_ref, urgent, "Urgency changed");
        Ok(slot.clone())
    }

    /// Runs every assignment rule without mutating.
    ///
    /// Returns the slot's current occupant, if any.
    fn check_assign(
        &self,
        slot_ref: &SlotRef,
        employee_id: &str,
        requester: &Requester,
    ) -> Result<Option<String>> {
        let slot = self.check_slot_bookable(slot_ref)?;
        let employee = self.employee(employee_id)?;

        authorize(requester, requester.assign_capability(employee_id), employee_id)?;
        let previous = slot.employee_id.clone();
        if let Some(prev) = previous.as_deref().filter(|p| *p != employee_id) {
            authorize(requester, Capability::AssignOthers, prev)?;
        }

        let reclaimed = u32::from(previous.as_deref() == Some(employee_id));
        if employee.current_shifts.saturating_sub(reclaimed) >= employee.limit {
            return Err(EngineError::CapacityExceeded {
                employee_id: employee_id.to_string(),
                limit: employee.limit,
            });
        }

        Ok(previous)
    }

    /// Runs every cancellation rule without mutating.
    ///
    /// Returns the occupant to release.
    fn check_cancel(&self, slot_ref: &SlotRef, requester: &Requester) -> Result<String> {
        let slot = self.slot(slot_ref)?;
        let occupant = match (&slot.status, &slot.employee_id) {
            (SlotStatus::Taken, Some(occupant)) => occupant.clone(),
            _ => return Err(invalid_state(slot, "cancel")),
        };
        authorize(requester, requester.cancel_capability(&occupant), &occupant)?;
        Ok(occupant)
    }

    fn check_slot_bookable(&self, slot_ref: &SlotRef) -> Result<&Slot> {
        let slot = self.slot(slot_ref)?;
        if !slot.is_bookable() {
            return Err(invalid_state(slot, "assign"));
        }
        Ok(slot)
    }

    fn release_count(&mut self, employee_id: &str) -> Result<Employee> {
        let employee = self
            .roster
            .get_mut(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound(employee_id.to_string()))?;
        employee.current_shifts = employee.current_shifts.saturating_sub(1);
        Ok(employee.clone())
    }
}

fn authorize(requester: &Requester, capability: Capability, target: &str) -> Result<()> {
    if requester.can(capability) {
        return Ok(());
    }
    Err(EngineError::Authorization {
        user_id: requester.user_id.clone(),
        role: requester.role,
        capability,
        target: target.to_string(),
    })
}

fn invalid_state(slot: &Slot, action: &'static str) -> EngineError {
    EngineError::InvalidState {
        slot_id: slot.id.clone(),
        status: slot.status,
        action,
    }
}
