//! Collaborator management: filtered listing and role assignment.

use std::sync::{Arc, RwLock};

use crate::client::ApiClient;
use crate::models::{ChangeRoleRequest, Collaborator, CollaboratorListResponse, Role, ServerMessage};

use super::{ConfirmPrompt, ListState, ListStore, Notice};

const USERS_PATH: &str = "/api/admin/users";

/// Role filter for the collaborator listing. `All` is the sentinel that
/// keeps the role parameter out of the query entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

/// Filter set applied to the next listing.
#[derive(Debug, Clone, Default)]
pub struct CollaboratorFilters {
    pub search: String,
    pub role: RoleFilter,
}

/// Controller for the collaborator management view.
#[derive(Clone)]
pub struct CollaboratorsController {
    client: ApiClient,
    store: ListStore<Collaborator>,
    filters: Arc<RwLock<CollaboratorFilters>>,
}

impl CollaboratorsController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            store: ListStore::new(),
            filters: Arc::new(RwLock::new(CollaboratorFilters::default())),
        }
    }

    pub fn set_search(&self, search: impl Into<String>) {
        self.filters
            .write()
            .expect("filters lock poisoned")
            .search = search.into();
    }

    pub fn set_role_filter(&self, role: RoleFilter) {
        self.filters.write().expect("filters lock poisoned").role = role;
    }

    pub fn filters(&self) -> CollaboratorFilters {
        self.filters.read().expect("filters lock poisoned").clone()
    }

    /// Snapshot of the current list state.
    pub fn state(&self) -> ListState<Collaborator> {
        self.store.snapshot()
    }

    /// Fetch the collaborator list with the current filters. Empty search
    /// and the all-roles sentinel are omitted from the query.
    pub async fn list(&self) {
        let ticket = self.store.begin_list();

        let query = {
            let filters = self.filters.read().expect("filters lock poisoned");
            let mut query: Vec<(&str, String)> = Vec::new();
            if !filters.search.trim().is_empty() {
                query.push(("search", filters.search.trim().to_string()));
            }
            if let RoleFilter::Only(role) = &filters.role {
                query.push(("role", role.as_str().to_string()));
            }
            query
        };

        let outcome = self
            .client
            .get::<CollaboratorListResponse>(USERS_PATH, &query)
            .await
            .map(|response| response.users);

        self.store
            .finish_list(ticket, outcome, "Could not load collaborators");
    }

    /// Assign a new role to a collaborator. The confirmation prompt names
    /// the target role; a declined prompt issues no request at all. Success
    /// relists before the success notice becomes readable, so the displayed
    /// roles always come from the backend.
    pub async fn change_role(
        &self,
        user_id: &str,
        new_role: Role,
        confirm: &dyn ConfirmPrompt,
    ) -> bool {
        let prompt = format!("Change this collaborator's role to {}?", new_role.label());
        if !confirm.confirm(&prompt) {
            return false;
        }

        let path = format!("{}/{}/role", USERS_PATH, user_id);
        let request = ChangeRoleRequest { role: new_role };

        match self.client.put::<ServerMessage, _>(&path, &request).await {
            Ok(body) => {
                let message = body
                    .message
                    .unwrap_or_else(|| "Role updated".to_string());
                self.list().await;
                self.store.set_notice(Notice::success(message));
                true
            }
            Err(err) => {
                self.store.set_notice(Notice::error(err.message()));
                false
            }
        }
    }

    /// Abandon in-flight requests; their results are discarded on arrival.
    pub fn abandon_pending(&self) {
        self.store.invalidate();
    }
}
