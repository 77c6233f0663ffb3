//! Role taxonomy for collaborators.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Permission tier assigned to a collaborator.
///
/// The server is authoritative for enforcement; the client only carries the
/// value around. A wire value outside the known set is preserved verbatim so
/// a newer backend never breaks list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    User,
    Developer,
    ScrumMaster,
    ProductOwner,
    SuperAdmin,
    /// Unrecognized wire value, kept as received.
    Unknown(String),
}

impl Role {
    /// The five roles the backend assigns today.
    pub const KNOWN: [Role; 5] = [
        Role::User,
        Role::Developer,
        Role::ScrumMaster,
        Role::ProductOwner,
        Role::SuperAdmin,
    ];

    /// Wire value as sent to and received from the backend.
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Developer => "developers",
            Role::ScrumMaster => "scrum_master",
            Role::ProductOwner => "product_owner",
            Role::SuperAdmin => "super_admin",
            Role::Unknown(raw) => raw,
        }
    }

    /// Map a wire value to a role, preserving unknown values.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "user" => Role::User,
            "developers" => Role::Developer,
            "scrum_master" => Role::ScrumMaster,
            "product_owner" => Role::ProductOwner,
            "super_admin" => Role::SuperAdmin,
            other => Role::Unknown(other.to_string()),
        }
    }

    /// Display label. Unknown roles fall back to the raw wire value.
    pub fn label(&self) -> &str {
        match self {
            Role::User => "User",
            Role::Developer => "Developer",
            Role::ScrumMaster => "Scrum Master",
            Role::ProductOwner => "Product Owner",
            Role::SuperAdmin => "Super Admin",
            Role::Unknown(raw) => raw,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl std::str::FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::from_wire(s))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::from_wire(&raw))
    }
}
