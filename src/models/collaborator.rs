//! Collaborator model matching the admin API wire format.

use serde::{Deserialize, Serialize};

use super::{id_string, Role};

/// A collaborator account as returned by the admin users endpoint.
///
/// The backend spells several fields its own way (`_id`, `nombre_negocio`,
/// `clerk_id`) and may emit ids as numbers; both are normalized here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    #[serde(rename = "_id", alias = "id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "nombre_negocio", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "is_active", default = "default_active")]
    pub active: bool,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Identity provider user id
    #[serde(rename = "clerk_id", default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Collaborator {
    /// Name shown in listings: display name, else email, else a placeholder.
    pub fn listing_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("(unnamed)")
    }
}

/// Response body of the admin users listing.
#[derive(Debug, Deserialize)]
pub struct CollaboratorListResponse {
    #[serde(default)]
    pub users: Vec<Collaborator>,
}

/// Request body for the role assignment endpoint.
#[derive(Debug, Serialize)]
pub struct ChangeRoleRequest {
    pub role: Role,
}
