//! Shift slot model.
//!
//! A slot is one position within a shift period that a single employee
//! can fill. Its status follows a small state machine:
//!
//! ```text
//!              assign               cancel
//!   free ───────────────▶ taken ───────────────▶ free
//!    │ ▲                    ▲ │ assign (reassign)
//!    │ │ clear_urgent       │ └───┘
//!    ▼ │                    │
//!   urgent ─────────────────┘ assign
//!
//!   unavailable: no transitions
//! ```
//!
//! # Invariants
//! - `Taken` iff `employee_id` is `Some`.
//! - `Urgent` implies `urgent == true` and `employee_id == None`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a slot within its shift period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Primary required position of the period.
    Base,
    /// Supplementary or on-call position.
    Extra,
}

/// Lifecycle state of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// Not bookable. Terminal.
    Unavailable,
    /// Open for assignment.
    Free,
    /// Held by an employee.
    Taken,
    /// Open and needs a replacement urgently.
    Urgent,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unavailable => "unavailable",
            Self::Free => "free",
            Self::Taken => "taken",
            Self::Urgent => "urgent",
        };
        f.write_str(s)
    }
}

/// A bookable position within a shift period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Identifier, unique within the week.
    pub id: String,
    /// Base or extra position.
    pub kind: SlotKind,
    /// Current lifecycle state.
    pub status: SlotStatus,
    /// Assigned employee, present iff `status == Taken`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Urgent-replacement flag.
    #[serde(default)]
    pub urgent: bool,
}

impl Slot {
    /// Creates a free slot.
    pub fn new(id: impl Into<String>, kind: SlotKind) -> Self {
        Self {
            id: id.into(),
            kind,
            status: SlotStatus::Free,
            employee_id: None,
            urgent: false,
        }
    }

    /// Creates a free base slot.
    pub fn base(id: impl Into<String>) -> Self {
        Self::new(id, SlotKind::Base)
    }

    /// Creates a free extra slot.
    pub fn extra(id: impl Into<String>) -> Self {
        Self::new(id, SlotKind::Extra)
    }

    /// Marks the slot as held by `employee_id`.
    pub fn taken_by(mut self, employee_id: impl Into<String>) -> Self {
        self.status = SlotStatus::Taken;
        self.employee_id = Some(employee_id.into());
        self.urgent = false;
        self
    }

    /// Marks the slot as an open urgent replacement.
    pub fn urgent(mut self) -> Self {
        self.status = SlotStatus::Urgent;
        self.employee_id = None;
        self.urgent = true;
        self
    }

    /// Marks the slot as not bookable.
    pub fn unavailable(mut self) -> Self {
        self.status = SlotStatus::Unavailable;
        self.employee_id = None;
        self
    }

    /// Whether an employee can be placed here (free, urgent, or taken).
    #[inline]
    pub fn is_bookable(&self) -> bool {
        self.status != SlotStatus::Unavailable
    }

    /// Whether the slot has no occupant and can be booked.
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self.status, SlotStatus::Free | SlotStatus::Urgent)
    }

    /// Whether the slot is held by the given employee.
    pub fn is_held_by(&self, employee_id: &str) -> bool {
        self.status == SlotStatus::Taken && self.employee_id.as_deref() == Some(employee_id)
    }

    /// Checks the status/occupant/flag invariants.
    pub fn is_consistent(&self) -> bool {
        match self.status {
            SlotStatus::Taken => self.employee_id.is_some(),
            SlotStatus::Urgent => self.urgent && self.employee_id.is_none(),
            SlotStatus::Free | SlotStatus::Unavailable => self.employee_id.is_none(),
        }
    }

    pub(crate) fn occupy(&mut self, employee_id: &str) {
        self.status = SlotStatus::Taken;
        self.employee_id = Some(employee_id.to_string());
        self.urgent = false;
    }

    /// Frees the slot, returning the previous occupant. The urgent flag is kept.
    pub(crate) fn release(&mut self) -> Option<String> {
        self.status = SlotStatus::Free;
        self.employee_id.take()
    }

    pub(crate) fn set_urgent(&mut self, urgent: bool) {
        self.urgent = urgent;
        self.status = if urgent {
            SlotStatus::Urgent
        } else {
            SlotStatus::Free
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_builders() {
        let s = Slot::base("11.11-m-1");
        assert_eq!(s.kind, SlotKind::Base);
        assert_eq!(s.status, SlotStatus::Free);
        assert!(s.is_open());
        assert!(s.is_consistent());

        let t = Slot::extra("11.11-m-2").taken_by("1");
        assert_eq!(t.status, SlotStatus::Taken);
        assert!(t.is_held_by("1"));
        assert!(!t.is_held_by("2"));
        assert!(!t.is_open());

        let u = Slot::base("14.11-d-1").urgent();
        assert!(u.urgent);
        assert!(u.is_open());
        assert!(u.is_consistent());

        let x = Slot::base("x").unavailable();
        assert!(!x.is_bookable());
    }

    #[test]
    fn test_inconsistent_slots() {
        let mut s = Slot::base("a");
        s.status = SlotStatus::Taken;
        assert!(!s.is_consistent());

        let mut u = Slot::base("b");
        u.status = SlotStatus::Urgent;
        assert!(!u.is_consistent()); // flag not set

        let mut f = Slot::base("c");
        f.employee_id = Some("1".into());
        assert!(!f.is_consistent());
    }

    #[test]
    fn test_release_keeps_urgent_flag() {
        let mut s = Slot::base("a").taken_by("1");
        s.urgent = true;
        assert_eq!(s.release(), Some("1".to_string()));
        assert_eq!(s.status, SlotStatus::Free);
        assert!(s.urgent);
    }

    #[test]
    fn test_wire_names() {
        let s = Slot::base("a").urgent();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["kind"], "base");
        assert_eq!(json["status"], "urgent");
        assert!(json.get("employee_id").is_none());

        let back: Slot = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SlotStatus::Unavailable.to_string(), "unavailable");
        assert_eq!(SlotStatus::Taken.to_string(), "taken");
    }
}
