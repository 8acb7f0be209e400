//! Weekly shift board engine.
//!
//! Headless core of a shift board: a roster of employees with shift
//! limits, a week of slots grouped into morning/day/evening periods,
//! and the rules for booking, releasing and flagging those slots.
//! Rendering, notifications and authentication live in the host; the
//! host passes the caller's identity with every mutating call.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `Roster`, `Slot`,
//!   `DaySchedule`, `WeekSchedule`, `SlotRef`
//! - **`access`**: `Role`, `Capability` table, `Requester`
//! - **`validation`**: Startup integrity checks (IDs, limits, week shape, slot invariants)
//! - **`engine`**: `Session` (assign / cancel / urgency), `StaffingKpi`, `SharedSession`
//! - **`seed`**: `SessionSeed` startup data, JSON loading, demo board
//! - **`error`**: `EngineError`
//!
//! # Invariants
//!
//! After every operation, for every employee `current_shifts <= limit`,
//! and every slot is `taken` exactly when it has an occupant.

pub mod access;
pub mod engine;
pub mod error;
pub mod models;
pub mod seed;
pub mod validation;

pub use error::{EngineError, Result};
