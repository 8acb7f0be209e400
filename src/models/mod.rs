//! Shift board domain models.
//!
//! Provides the data types the engine operates on: who can work
//! (`Employee`, `Roster`) and where they can work (`Slot` inside a
//! `DaySchedule` inside a `WeekSchedule`).
//!
//! # Domain Mappings
//!
//! | shift-desk | Retail | Healthcare | Support desk |
//! |------------|--------|------------|--------------|
//! | Employee | Cashier | Nurse | Agent |
//! | Slot (base) | Till opening | Ward cover | Primary on-call |
//! | Slot (extra) | Floor help | Float nurse | Secondary on-call |
//! | Urgent slot | Sick-call gap | Short-notice cover | Escalation gap |

mod employee;
mod slot;
mod week;

pub use employee::{Employee, Roster};
pub use slot::{Slot, SlotKind, SlotStatus};
pub use week::{DaySchedule, DayShifts, ShiftPeriod, SlotRef, WeekSchedule, DAYS_PER_WEEK};
