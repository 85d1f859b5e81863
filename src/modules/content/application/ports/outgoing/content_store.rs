// src/modules/content/application/ports/outgoing/content_store.rs

use async_trait::async_trait;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Database error: {0}")]
    Database(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (one persistence surface for every collection resource)
// ──────────────────────────────────────────────────────────
//

/// Persistence port of the generic resource engine.
///
/// One implementation serves every collection resource; the associated types
/// carry the per-resource payloads.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Stored representation handed back to callers.
    type View: Clone + Send + Sync + 'static;
    type CreateData: Send + 'static;
    type UpdateData: Send + 'static;

    async fn insert(&self, data: Self::CreateData) -> Result<Self::View, ContentStoreError>;

    /// Every row, in the resource's fixed retrieval order.
    async fn find_all(&self) -> Result<Vec<Self::View>, ContentStoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Self::View>, ContentStoreError>;

    /// Merge the supplied fields over the existing row.
    /// `None` when no row matches `id`.
    async fn update(
        &self,
        id: Uuid,
        data: Self::UpdateData,
    ) -> Result<Option<Self::View>, ContentStoreError>;

    /// Hard delete. Returns the prior representation, `None` when absent.
    async fn delete(&self, id: Uuid) -> Result<Option<Self::View>, ContentStoreError>;
}
