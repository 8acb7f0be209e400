//! Shared handle over a session.
//!
//! One `RwLock` guards the whole week and roster: mutations are rare
//! and short, reads are frequent. Engine operations are all-or-nothing,
//! so a poisoned lock still holds consistent state and is recovered.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::access::Requester;
use crate::error::Result;
use crate::models::{Employee, Slot, SlotRef, WeekSchedule};

use super::{Assignment, Cancellation, Session, StaffingKpi};

/// Cloneable, thread-safe handle to one [`Session`].
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<RwLock<Session>>,
}

impl SharedSession {
    /// Wraps a session.
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs a read-only closure against the session.
    pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.read())
    }

    /// Copy of the current week.
    pub fn week_snapshot(&self) -> WeekSchedule {
        self.read().week().clone()
    }

    /// Copy of the current roster.
    pub fn roster_snapshot(&self) -> Vec<Employee> {
        self.read().roster().as_slice().to_vec()
    }

    /// See [`Session::assign`].
    pub fn assign(
        &self,
        slot_ref: &SlotRef,
        employee_id: &str,
        requester: &Requester,
    ) -> Result<Assignment> {
        self.write().assign(slot_ref, employee_id, requester)
    }

    /// See [`Session::cancel`].
    pub fn cancel(&self, slot_ref: &SlotRef, requester: &Requester) -> Result<Cancellation> {
        self.write().cancel(slot_ref, requester)
    }

    /// See [`Session::mark_urgent`].
    pub fn mark_urgent(&self, slot_id: &str, requester: &Requester) -> Result<Slot> {
        self.write().mark_urgent(slot_id, requester)
    }

    /// See [`Session::clear_urgent`].
    pub fn clear_urgent(&self, slot_id: &str, requester: &Requester) -> Result<Slot> {
        self.write().clear_urgent(slot_id, requester)
    }

    /// See [`Session::urgent_count`].
    pub fn urgent_count(&self) -> usize {
        self.read().urgent_count()
    }

    /// See [`Session::utilization`].
    pub fn utilization(&self, employee_id: &str) -> Result<f64> {
        self.read().utilization(employee_id)
    }

    /// Current staffing KPIs.
    pub fn kpi(&self) -> StaffingKpi {
        StaffingKpi::from_session(&self.read())
    }
}

impl From<Session> for SharedSession {
    fn from(session: Session) -> Self {
        Self::new(session)
    }
}
