//! Role resolution for the current principal.
//!
//! The server profile is authoritative; identity-provider metadata is the
//! fallback, probed through a fixed priority chain. Consumers hold a cloned
//! resolver handle and read session snapshots from it.

use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::client::ApiClient;
use crate::models::{AuthIdentity, ProfileResponse, Role};

const PROFILE_PATH: &str = "/api/users/profile";

/// Where the resolved role came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSource {
    /// Server profile endpoint
    Server,
    /// Identity-provider metadata fallback
    Metadata,
    /// No authenticated principal
    None,
}

/// Resolved role state for the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleSession {
    pub role: Option<Role>,
    pub source: RoleSource,
    pub loaded: bool,
}

impl RoleSession {
    fn unresolved() -> Self {
        Self {
            role: None,
            source: RoleSource::None,
            loaded: false,
        }
    }
}

type MetadataLookup = fn(&AuthIdentity) -> Option<&str>;

/// Prioritized locations a role may occupy on the provider's user object.
/// First non-empty lookup wins.
const METADATA_ROLE_CHAIN: &[MetadataLookup] = &[
    |identity| identity.public_metadata.get("role").and_then(Value::as_str),
    |identity| identity.unsafe_metadata.get("role").and_then(Value::as_str),
    |identity| identity.role.as_deref(),
];

fn metadata_role(identity: &AuthIdentity) -> Role {
    METADATA_ROLE_CHAIN
        .iter()
        .find_map(|lookup| lookup(identity))
        .map(Role::from_wire)
        .unwrap_or_default()
}

/// Owns the role session for one authenticated principal.
#[derive(Clone)]
pub struct RoleResolver {
    client: ApiClient,
    identity: Option<Arc<AuthIdentity>>,
    session: Arc<RwLock<RoleSession>>,
}

impl RoleResolver {
    /// Create a resolver; `identity` is absent when nobody is signed in.
    pub fn new(client: ApiClient, identity: Option<AuthIdentity>) -> Self {
        Self {
            client,
            identity: identity.map(Arc::new),
            session: Arc::new(RwLock::new(RoleSession::unresolved())),
        }
    }

    /// Resolve the session: server profile first, metadata fallback second.
    ///
    /// Server failures are logged and absorbed; resolution always terminates
    /// in a loaded session.
    pub async fn resolve(&self) {
        let Some(identity) = self.identity.clone() else {
            self.set(RoleSession {
                role: None,
                source: RoleSource::None,
                loaded: true,
            });
            return;
        };

        match self.client.get::<ProfileResponse>(PROFILE_PATH, &[]).await {
            Ok(profile) => {
                if let Some(role) = profile.user.and_then(|user| user.role) {
                    self.set(RoleSession {
                        role: Some(role),
                        source: RoleSource::Server,
                        loaded: true,
                    });
                    return;
                }
                tracing::warn!("Profile response carried no role, using identity metadata");
            }
            Err(err) => {
                tracing::warn!("Could not fetch server role, using identity metadata: {}", err);
            }
        }

        self.set(RoleSession {
            role: Some(metadata_role(&identity)),
            source: RoleSource::Metadata,
            loaded: true,
        });
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> RoleSession {
        self.session.read().expect("session lock poisoned").clone()
    }

    /// Local override after a mutation elsewhere already changed server
    /// state; records the new role as server-confirmed without a refetch.
    pub fn update_role(&self, role: Role) {
        self.set(RoleSession {
            role: Some(role),
            source: RoleSource::Server,
            loaded: true,
        });
    }

    /// Force re-resolution. While it runs the stale role stays readable but
    /// `loaded` is false so callers can show a reload indicator.
    pub async fn refresh(&self) {
        if self.identity.is_none() {
            return;
        }
        {
            let mut session = self.session.write().expect("session lock poisoned");
            session.loaded = false;
        }
        self.resolve().await;
    }

    fn set(&self, session: RoleSession) {
        *self.session.write().expect("session lock poisoned") = session;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity_with(public: Option<&str>, unsafe_md: Option<&str>, direct: Option<&str>) -> AuthIdentity {
        let mut identity = AuthIdentity::new("user_1");
        if let Some(role) = public {
            identity
                .public_metadata
                .insert("role".to_string(), json!(role));
        }
        if let Some(role) = unsafe_md {
            identity
                .unsafe_metadata
                .insert("role".to_string(), json!(role));
        }
        identity.role = direct.map(|r| r.to_string());
        identity
    }

    #[test]
    fn test_public_metadata_wins() {
        let identity = identity_with(Some("product_owner"), Some("developers"), Some("user"));
        assert_eq!(metadata_role(&identity), Role::ProductOwner);
    }

    #[test]
    fn test_chain_falls_through_in_order() {
        let identity = identity_with(None, Some("scrum_master"), Some("user"));
        assert_eq!(metadata_role(&identity), Role::ScrumMaster);

        let identity = identity_with(None, None, Some("super_admin"));
        assert_eq!(metadata_role(&identity), Role::SuperAdmin);
    }

    #[test]
    fn test_no_metadata_defaults_to_user() {
        let identity = identity_with(None, None, None);
        assert_eq!(metadata_role(&identity), Role::User);
    }

    #[test]
    fn test_non_string_metadata_is_skipped() {
        let mut identity = AuthIdentity::new("user_1");
        identity.public_metadata.insert("role".to_string(), json!(7));
        identity.role = Some("developers".to_string());
        assert_eq!(metadata_role(&identity), Role::Developer);
    }
}
