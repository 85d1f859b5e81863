// src/modules/content/application/service/crud_service.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::ports::incoming::crud::{CrudError, CrudUseCase};
use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// One service for every collection resource, parameterized by its store.
///
/// Carries the resource name so NotFound errors identify what was missed.
pub struct CrudService<S> {
    resource: &'static str,
    store: S,
}

impl<S> CrudService<S> {
    pub fn new(resource: &'static str, store: S) -> Self {
        Self { resource, store }
    }
}

fn map_store_error(err: ContentStoreError) -> CrudError {
    match err {
        ContentStoreError::Database(msg) => CrudError::Repository(msg),
    }
}

#[async_trait]
impl<S> CrudUseCase for CrudService<S>
where
    S: ContentStore,
{
    type View = S::View;
    type CreateData = S::CreateData;
    type UpdateData = S::UpdateData;

    async fn create(&self, data: S::CreateData) -> Result<S::View, CrudError> {
        self.store.insert(data).await.map_err(map_store_error)
    }

    async fn list(&self) -> Result<Vec<S::View>, CrudError> {
        self.store.find_all().await.map_err(map_store_error)
    }

    async fn get(&self, id: Uuid) -> Result<S::View, CrudError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or(CrudError::NotFound {
                resource: self.resource,
                id,
            })
    }

    async fn update(&self, id: Uuid, data: S::UpdateData) -> Result<S::View, CrudError> {
        self.store
            .update(id, data)
            .await
            .map_err(map_store_error)?
            .ok_or(CrudError::NotFound {
                resource: self.resource,
                id,
            })
    }

    async fn remove(&self, id: Uuid) -> Result<S::View, CrudError> {
        self.store
            .delete(id)
            .await
            .map_err(map_store_error)?
            .ok_or(CrudError::NotFound {
                resource: self.resource,
                id,
            })
    }
}
