//! The shift assignment engine.
//!
//! [`Session`] owns the week and roster and applies assignments,
//! cancellations and urgency changes. [`StaffingKpi`] derives board
//! metrics from it. [`SharedSession`] puts a session behind a single
//! lock for hosts that serve several callers.
//!
//! # Usage
//!
//! ```
//! use shift_desk::access::Requester;
//! use shift_desk::engine::{Session, StaffingKpi};
//!
//! let mut session = Session::demo();
//! let admin = Requester::admin("admin");
//!
//! let (urgent, _) = session.find_slot("14.11-d-1").unwrap();
//! session.assign(&urgent, "5", &admin).unwrap();
//! assert_eq!(session.urgent_count(), 0);
//!
//! let kpi = StaffingKpi::from_session(&session);
//! assert_eq!(kpi.taken_slots, 8);
//! ```

mod kpi;
mod session;
mod shared;

pub use kpi::StaffingKpi;
pub use session::{Assignment, Cancellation, Session};
pub use shared::SharedSession;
