//! Principal types: the identity-provider user object and principal references.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{id_string, Role};

/// The authenticated user object cached from the identity provider.
///
/// Metadata maps are carried as-is; the role resolver probes them through a
/// fixed chain of lookups rather than trusting any single location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthIdentity {
    pub id: String,
    #[serde(rename = "public_metadata", alias = "publicMetadata", default)]
    pub public_metadata: Map<String, Value>,
    #[serde(rename = "unsafe_metadata", alias = "unsafeMetadata", default)]
    pub unsafe_metadata: Map<String, Value>,
    /// Role the provider attaches directly to the user object, when present
    #[serde(default)]
    pub role: Option<String>,
}

impl AuthIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// A reference to a principal as embedded in other records: the id plus a
/// denormalized name/email snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalRef {
    #[serde(rename = "_id", alias = "id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "nombre_negocio", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl PrincipalRef {
    /// Name shown in listings: display name, else email, else the id.
    pub fn listing_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Response body of the users-for-assignment endpoint.
#[derive(Debug, Deserialize)]
pub struct AssignableUsersResponse {
    #[serde(default)]
    pub users: Vec<PrincipalRef>,
}

/// Response body of the profile endpoint.
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub user: Option<ProfileUser>,
}

/// Profile payload; only the role is of interest to the resolver.
#[derive(Debug, Deserialize)]
pub struct ProfileUser {
    #[serde(default)]
    pub role: Option<Role>,
}
