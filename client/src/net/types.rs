//! JSON payloads exchanged with the identity and cart endpoints.
//!
//! DESIGN
//! ======
//! Every field defaults so a partial payload still deserializes; missing
//! values degrade to empty rendering instead of failing the whole session.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Stand-in used for the avatar when the account has no display name.
pub const GUEST_NAME: &str = "Guest";

/// The signed-in actor as reported by `/api/auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display name; may be empty when the account has none.
    #[serde(default)]
    pub name: String,
    /// Role flag selecting the admin navigation surface.
    #[serde(default, rename = "isAdmin", alias = "is_admin")]
    pub is_admin: bool,
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    /// Uppercased first letter of the name; a nameless account shows as a guest.
    pub fn initial(&self) -> String {
        let name = self.name.trim();
        let name = if name.is_empty() { GUEST_NAME } else { name };
        name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }

    /// Short label shown under the name in sidebar headers.
    pub fn role_label(&self) -> &'static str {
        if self.is_admin { "Administrator" } else { "Customer" }
    }
}

/// Response body of `/api/cart/count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCount {
    #[serde(default)]
    pub count: u32,
}
