use crate::store::PostStore;
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Cloned into every handler. The store sits behind an `Arc` so all clones
/// see the same collection; the store does its own locking.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostStore>,
}

impl AppState {
    pub fn new(posts: PostStore) -> Self {
        Self {
            posts: Arc::new(posts),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PostStore::seeded())
    }
}
