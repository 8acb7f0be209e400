//! Startup configuration for a session.
//!
//! A [`SessionSeed`] is the roster and week a session starts from. It is
//! plain serde data, so hosts can keep it in JSON next to their other
//! settings:
//!
//! ```json
//! {
//!   "roster": [{ "id": "1", "name": "Anna", "limit": 5, "current_shifts": 0 }],
//!   "week": [
//!     { "date": "2024-11-11", "day_name": "Mon",
//!       "shifts": { "morning": [{ "id": "11.11-m-1", "kind": "base", "status": "free" }],
//!                   "day": [], "evening": [] } }
//!   ]
//! }
//! ```
//!
//! Parsing does not validate; [`crate::engine::Session::from_seed`] does.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Employee, Roster, ShiftPeriod, SlotRef, WeekSchedule};

/// Roster and week a session starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSeed {
    /// Employees in display order.
    pub roster: Roster,
    /// Seven days of slots.
    pub week: WeekSchedule,
}

impl SessionSeed {
    /// Creates a seed.
    pub fn new(roster: Roster, week: WeekSchedule) -> Self {
        Self { roster, week }
    }

    /// Parses a seed from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let seed: Self = serde_json::from_str(json)?;
        tracing::debug!(
            employees = seed.roster.len(),
            days = seed.week.len(),
            "Session seed parsed"
        );
        Ok(seed)
    }

    /// Serializes the seed to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The built-in demo board: week of Monday 11 November 2024.
    ///
    /// - Employee 1 holds the first two morning base slots.
    /// - Employee 2 holds the first two day base slots.
    /// - Employee 3 holds the first three evening base slots.
    /// - Thursday's (14.11) day base slot needs an urgent replacement.
    pub fn demo() -> Self {
        let roster = Roster::new()
            .with_employee(Employee::new("1", "Anna Ivanova", 5).with_current_shifts(3))
            .with_employee(Employee::new("2", "Petr Smirnov", 6).with_current_shifts(5))
            .with_employee(Employee::new("3", "Maria Petrova", 4).with_current_shifts(3))
            .with_employee(Employee::new("4", "Ivan Sidorov", 5).with_current_shifts(4))
            .with_employee(Employee::new("5", "Elena Kozlova", 6).with_current_shifts(3));

        let start = NaiveDate::from_ymd_opt(2024, 11, 11).unwrap_or_default();
        let mut week = WeekSchedule::standard(start);
        let bases: Vec<(usize, SlotRef)> = week
            .days()
            .iter()
            .enumerate()
            .flat_map(|(idx, day)| {
                ShiftPeriod::ALL.into_iter().filter_map(move |period| {
                    let base = day.period(period).first()?;
                    Some((idx, SlotRef::new(day.date, period, &base.id)))
                })
            })
            .collect();

        for (idx, slot_ref) in bases {
            let holder = match slot_ref.period {
                ShiftPeriod::Morning if idx < 2 => Some("1"),
                ShiftPeriod::Day if idx < 2 => Some("2"),
                ShiftPeriod::Evening if idx < 3 => Some("3"),
                _ => None,
            };
            let Some(slot) = week.slot_mut(&slot_ref) else {
                continue;
            };
            if let Some(holder) = holder {
                slot.occupy(holder);
            } else if slot_ref.period == ShiftPeriod::Day && idx == 3 {
                slot.set_urgent(true);
            }
        }

        Self { roster, week }
    }
}
