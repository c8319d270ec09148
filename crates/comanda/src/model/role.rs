//! Staff roles and notification addressing.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Who is looking at the system. Each role sees its own slice of the notification log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Waiter,
    Kitchen,
    Customer,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Waiter => "waiter",
            Role::Kitchen => "kitchen",
            Role::Customer => "customer",
        };
        f.write_str(name)
    }
}

/// Addressee of a notification: one role, or everybody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipient {
    Role(Role),
    All,
}

impl Recipient {
    /// True when a viewer with `role` should see a notification addressed here.
    pub fn includes(&self, role: Role) -> bool {
        match self {
            Recipient::Role(r) => *r == role,
            Recipient::All => true,
        }
    }
}

impl From<Role> for Recipient {
    fn from(role: Role) -> Self {
        Recipient::Role(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_filtering() {
        let kitchen = Recipient::from(Role::Kitchen);
        assert!(kitchen.includes(Role::Kitchen));
        assert!(!kitchen.includes(Role::Waiter));
        assert!(Recipient::All.includes(Role::Customer));
    }

    #[test]
    fn test_roles_serialize_snake_case() {
        let json = serde_json::to_string(&Recipient::Role(Role::Waiter)).unwrap();
        assert_eq!(json, r#"{"role":"waiter"}"#);
        assert_eq!(serde_json::to_string(&Recipient::All).unwrap(), r#""all""#);
    }
}
