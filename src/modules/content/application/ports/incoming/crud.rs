// src/modules/content/application/ports/incoming/crud.rs

use async_trait::async_trait;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CrudError {
    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: Uuid },

    #[error("Repository error: {0}")]
    Repository(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// The five operations every collection resource exposes.
///
/// Handlers depend on this trait object only; the per-resource wiring decides
/// which store backs it.
#[async_trait]
pub trait CrudUseCase: Send + Sync {
    type View: Clone + Send + Sync + 'static;
    type CreateData: Send + 'static;
    type UpdateData: Send + 'static;

    async fn create(&self, data: Self::CreateData) -> Result<Self::View, CrudError>;

    async fn list(&self) -> Result<Vec<Self::View>, CrudError>;

    async fn get(&self, id: Uuid) -> Result<Self::View, CrudError>;

    /// Partial merge; fails with `NotFound` when `id` is absent.
    async fn update(&self, id: Uuid, data: Self::UpdateData) -> Result<Self::View, CrudError>;

    /// Hard delete; returns the removed entity's prior representation.
    async fn remove(&self, id: Uuid) -> Result<Self::View, CrudError>;
}
