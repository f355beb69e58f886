//! Read-side query surface for browsing the node tree.

use std::sync::Arc;

use uuid::Uuid;

use cloudnest_core::error::AppError;
use cloudnest_core::result::AppResult;
use cloudnest_core::types::NavigationIntent;
use cloudnest_database::store::NodeStore;
use cloudnest_entity::node::Node;

use crate::context::RequestContext;

/// Serves the five browsing views: root, folder contents, starred,
/// trash, and search. All views are owner-scoped.
#[derive(Debug, Clone)]
pub struct QueryService {
    store: Arc<dyn NodeStore>,
}

impl QueryService {
    /// Creates a new query service.
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }

    /// List nodes for a browsing intent.
    ///
    /// Browsing a folder that does not exist (or is not the caller's)
    /// yields `NotFound` rather than an empty listing, so a bad folder id
    /// is distinguishable from an empty folder.
    pub async fn browse(&self, ctx: &RequestContext, intent: NavigationIntent) -> AppResult<Vec<Node>> {
        match &intent {
            NavigationIntent::Folder(id) => {
                self.require_folder(ctx, *id).await?;
            }
            NavigationIntent::Search(term) => {
                if term.trim().is_empty() {
                    return Err(AppError::validation("Search term must not be empty"));
                }
            }
            _ => {}
        }

        self.store
            .list_by_filter(&ctx.owner_id, &intent.into_filter())
            .await
    }

    async fn require_folder(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Node> {
        self.store
            .find_by_id(&ctx.owner_id, id)
            .await?
            .filter(|n| n.is_folder)
            .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))
    }
}
