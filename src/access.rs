//! Roles and capabilities.
//!
//! Authentication happens outside the engine; every call carries a
//! [`Requester`] (user id + role) supplied by the host. What each role
//! may do is a fixed table:
//!
//! | Capability | Employee | Admin |
//! |------------|:--------:|:-----:|
//! | `AssignSelf` | ✓ | ✓ |
//! | `AssignOthers` | | ✓ |
//! | `CancelOwn` | ✓ | ✓ |
//! | `CancelOthers` | | ✓ |
//! | `ManageUrgency` | | ✓ |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of the requesting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular staff member; acts on their own shifts only.
    Employee,
    /// Shift administrator.
    Admin,
}

/// An action guarded by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Put oneself on a slot.
    AssignSelf,
    /// Put another employee on a slot, or displace its occupant.
    AssignOthers,
    /// Release one's own slot.
    CancelOwn,
    /// Release a slot held by someone else.
    CancelOthers,
    /// Mark or clear urgent replacements.
    ManageUrgency,
}

impl Role {
    /// Whether this role grants the capability.
    pub fn allows(self, capability: Capability) -> bool {
        use Capability::*;
        match self {
            Role::Admin => true,
            Role::Employee => matches!(capability, AssignSelf | CancelOwn),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Employee => f.write_str("employee"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Capability::AssignSelf => "assign-self",
            Capability::AssignOthers => "assign-others",
            Capability::CancelOwn => "cancel-own",
            Capability::CancelOthers => "cancel-others",
            Capability::ManageUrgency => "manage-urgency",
        };
        f.write_str(s)
    }
}

/// Identity attached to a mutating call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requester {
    /// Authenticated user id; matches an employee id for staff.
    pub user_id: String,
    /// Role of the user.
    pub role: Role,
}

impl Requester {
    /// Creates a requester.
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    /// A staff member acting as themselves.
    pub fn employee(user_id: impl Into<String>) -> Self {
        Self::new(user_id, Role::Employee)
    }

    /// An administrator.
    pub fn admin(user_id: impl Into<String>) -> Self {
        Self::new(user_id, Role::Admin)
    }

    /// Whether the role grants the capability.
    #[inline]
    pub fn can(&self, capability: Capability) -> bool {
        self.role.allows(capability)
    }

    /// Whether `employee_id` is the requester.
    #[inline]
    pub fn is(&self, employee_id: &str) -> bool {
        self.user_id == employee_id
    }

    /// Capability needed to act on `employee_id`'s behalf for assignment.
    pub fn assign_capability(&self, employee_id: &str) -> Capability {
        if self.is(employee_id) {
            Capability::AssignSelf
        } else {
            Capability::AssignOthers
        }
    }

    /// Capability needed to release a slot held by `occupant_id`.
    pub fn cancel_capability(&self, occupant_id: &str) -> Capability {
        if self.is(occupant_id) {
            Capability::CancelOwn
        } else {
            Capability::CancelOthers
        }
    }
}
