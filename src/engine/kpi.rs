//! Staffing metrics (KPIs).
//!
//! Computes board-level indicators from the current week and roster.
//! Nothing is cached: every call walks the week again.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Open slots | Free + urgent slots |
//! | Urgent slots | Slots with the urgent flag |
//! | Fill rate | Taken / bookable (non-unavailable) slots |
//! | Utilization | current_shifts / limit per employee |
//! | At limit | Employees who cannot take another shift |

use std::collections::HashMap;

use crate::models::{Roster, SlotStatus, WeekSchedule};

use super::Session;

/// Staffing indicators for one week.
#[derive(Debug, Clone)]
pub struct StaffingKpi {
    /// All slots in the week.
    pub total_slots: usize,
    /// Slots that can be booked (free or urgent).
    pub open_slots: usize,
    /// Slots held by an employee.
    pub taken_slots: usize,
    /// Slots carrying the urgent flag.
    pub urgent_slots: usize,
    /// Slots that can never be booked.
    pub unavailable_slots: usize,
    /// Taken / bookable slots (0.0..1.0).
    pub fill_rate: f64,
    /// Mean employee utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-employee utilization.
    pub utilization_by_employee: HashMap<String, f64>,
    /// Employees at their shift limit, in roster order.
    pub employees_at_limit: Vec<String>,
}

impl StaffingKpi {
    /// Computes KPIs for a session.
    pub fn from_session(session: &Session) -> Self {
        Self::calculate(session.week(), session.roster())
    }

    /// Computes KPIs from a week and its roster.
    pub fn calculate(week: &WeekSchedule, roster: &Roster) -> Self {
        let mut total = 0;
        let mut open = 0;
        let mut taken = 0;
        let mut urgent = 0;
        let mut unavailable = 0;

        for (_, slot) in week.slots() {
            total += 1;
            if slot.urgent {
                urgent += 1;
            }
            match slot.status {
                SlotStatus::Free | SlotStatus::Urgent => open += 1,
                SlotStatus::Taken => taken += 1,
                SlotStatus::Unavailable => unavailable += 1,
            }
        }

        let bookable = total - unavailable;
        let fill_rate = if bookable == 0 {
            0.0
        } else {
            taken as f64 / bookable as f64
        };

        let utilization_by_employee: HashMap<String, f64> = roster
            .iter()
            .map(|e| (e.id.clone(), e.utilization()))
            .collect();
        let avg_utilization = if utilization_by_employee.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_employee.values().sum();
            sum / utilization_by_employee.len() as f64
        };

        let employees_at_limit = roster
            .iter()
            .filter(|e| e.is_at_limit())
            .map(|e| e.id.clone())
            .collect();

        Self {
            total_slots: total,
            open_slots: open,
            taken_slots: taken,
            urgent_slots: urgent,
            unavailable_slots: unavailable,
            fill_rate,
            avg_utilization,
            utilization_by_employee,
            employees_at_limit,
        }
    }

    /// Whether the board meets the given staffing thresholds.
    pub fn meets_thresholds(&self, max_urgent: usize, min_fill_rate: f64) -> bool {
        self.urgent_slots <= max_urgent && self.fill_rate >= min_fill_rate
    }
}
