//! Product management: CRUD, responsible assignment, and the edit form.

use std::sync::{Arc, RwLock};

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{
    AssignableUsersResponse, PrincipalRef, Product, ProductDraft, ProductListResponse,
    ServerMessage,
};

use super::{ConfirmPrompt, ListState, ListStore, Notice};

const PRODUCTS_PATH: &str = "/api/productos";
const ASSIGNABLE_PATH: &str = "/api/users-for-assignment";

/// Controller for the product management view.
#[derive(Clone)]
pub struct ProductsController {
    client: ApiClient,
    store: ListStore<Product>,
    search: Arc<RwLock<String>>,
    assignable: Arc<RwLock<Vec<PrincipalRef>>>,
}

impl ProductsController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            store: ListStore::new(),
            search: Arc::new(RwLock::new(String::new())),
            assignable: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn set_search(&self, search: impl Into<String>) {
        *self.search.write().expect("search lock poisoned") = search.into();
    }

    /// Snapshot of the current list state.
    pub fn state(&self) -> ListState<Product> {
        self.store.snapshot()
    }

    /// Principals available for responsible assignment, as last fetched.
    pub fn assignable(&self) -> Vec<PrincipalRef> {
        self.assignable
            .read()
            .expect("assignable lock poisoned")
            .clone()
    }

    /// Fetch the product list; an empty search term stays out of the query.
    pub async fn list(&self) {
        let ticket = self.store.begin_list();

        let mut query: Vec<(&str, String)> = Vec::new();
        {
            let search = self.search.read().expect("search lock poisoned");
            if !search.trim().is_empty() {
                query.push(("search", search.trim().to_string()));
            }
        }

        let outcome = self
            .client
            .get::<ProductListResponse>(PRODUCTS_PATH, &query)
            .await
            .map(|response| response.productos);

        self.store
            .finish_list(ticket, outcome, "Could not load products");
    }

    /// Fetch the principals a product may be assigned to.
    ///
    /// A 403 is a permission notice, not a failure: the backend restricts
    /// this listing to product owners and super admins.
    pub async fn load_assignable(&self) {
        match self
            .client
            .get::<AssignableUsersResponse>(ASSIGNABLE_PATH, &[])
            .await
        {
            Ok(response) => {
                if response.users.is_empty() {
                    self.store.set_notice(Notice::info(
                        "No collaborators were found to assign as responsible",
                    ));
                }
                *self.assignable.write().expect("assignable lock poisoned") = response.users;
            }
            Err(err) if err.is_permission_denied() => {
                self.assignable
                    .write()
                    .expect("assignable lock poisoned")
                    .clear();
                self.store.set_notice(Notice::info(
                    "You do not have permission to view the assignable collaborator list. \
                     Ask a product owner or super admin for access",
                ));
            }
            Err(err) => {
                self.assignable
                    .write()
                    .expect("assignable lock poisoned")
                    .clear();
                self.store.set_notice(Notice::error(format!(
                    "Could not load assignable collaborators: {}",
                    err.message()
                )));
            }
        }
    }

    /// Create a product from a draft. Returns whether the mutation applied.
    pub async fn create(&self, draft: &ProductDraft) -> bool {
        if let Err(err) = validate_draft(draft) {
            self.store.set_notice(Notice::error(err.message()));
            return false;
        }

        let outcome = self
            .client
            .post::<ServerMessage, _>(PRODUCTS_PATH, draft)
            .await;
        self.apply_mutation(outcome, "Product created").await
    }

    /// Update an existing product from a draft.
    pub async fn update(&self, id: &str, draft: &ProductDraft) -> bool {
        if let Err(err) = validate_draft(draft) {
            self.store.set_notice(Notice::error(err.message()));
            return false;
        }

        let path = format!("{}/{}", PRODUCTS_PATH, id);
        let outcome = self.client.put::<ServerMessage, _>(&path, draft).await;
        self.apply_mutation(outcome, "Product updated").await
    }

    /// Delete a product after explicit confirmation naming it. A declined
    /// prompt issues no request; a failed delete leaves the item in place.
    pub async fn remove(&self, id: &str, confirm: &dyn ConfirmPrompt) -> bool {
        let prompt = {
            let state = self.store.snapshot();
            match state.items.iter().find(|product| product.id == id) {
                Some(product) => format!("Delete product \"{}\"?", product.name),
                None => format!("Delete product {}?", id),
            }
        };
        if !confirm.confirm(&prompt) {
            return false;
        }

        let path = format!("{}/{}", PRODUCTS_PATH, id);
        let outcome = self.client.delete::<ServerMessage>(&path).await;
        self.apply_mutation(outcome, "Product deleted").await
    }

    /// Shared mutation epilogue: success relists before the success notice
    /// is set; failure surfaces the server message and changes nothing else.
    async fn apply_mutation(
        &self,
        outcome: Result<ServerMessage, ApiError>,
        default_message: &str,
    ) -> bool {
        match outcome {
            Ok(body) => {
                let message = body.message.unwrap_or_else(|| default_message.to_string());
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

fn validate_draft(draft: &ProductDraft) -> Result<(), ApiError> {
    if draft.responsible.trim().is_empty() {
        return Err(ApiError::Validation(
            "A responsible collaborator is required".to_string(),
        ));
    }
    Ok(())
}

/// Edit-form binding: a draft plus the id of the record being edited.
///
/// Submission delegates to the controller; the form clears itself only when
/// the mutation applied.
#[derive(Default)]
pub struct ProductForm {
    draft: ProductDraft,
    editing: Option<String>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    /// Id of the record being edited; absent while creating.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Populate the draft from an existing record and remember its id.
    pub fn begin_edit(&mut self, product: &Product) {
        self.draft = ProductDraft::from_product(product);
        self.editing = Some(product.id.clone());
    }

    /// Submit the draft through the controller. Returns whether it applied.
    pub async fn submit(&mut self, products: &ProductsController) -> bool {
        let applied = match self.editing.clone() {
            Some(id) => products.update(&id, &self.draft).await,
            None => products.create(&self.draft).await,
        };
        if applied {
            self.reset();
        }
        applied
    }

    /// Discard the draft and the editing reference.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = ProductDraft::default();
        self.editing = None;
    }
}
