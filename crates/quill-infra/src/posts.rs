//! In-memory post listing.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::DomainError;
use quill_core::ports::PostRepository;

/// Posts grouped by organization, kept in insertion order.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Vec<Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, post: Post) {
        let mut store = self.store.write().await;
        store.entry(post.organization_id).or_default().push(post);
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_by_organization(
        &self,
        organization_id: Uuid,
        show_unpublished: bool,
        now: DateTime<Utc>,
    ) -> Result<Vec<Post>, DomainError> {
        let store = self.store.read().await;
        let posts = store
            .get(&organization_id)
            .map(|posts| {
                posts
                    .iter()
                    .filter(|post| show_unpublished || post.is_published(now))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        tracing::debug!(
            %organization_id,
            show_unpublished,
            count = posts.len(),
            "Listed organization posts"
        );

        Ok(posts)
    }
}
