// src/modules/content/adapter/outgoing/sea_orm_store.rs

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, Select,
};
use uuid::Uuid;

use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError,
};

//
// ──────────────────────────────────────────────────────────
// Per-resource configuration
// ──────────────────────────────────────────────────────────
//

/// Everything the generic store needs to know about one resource: its table,
/// its fixed retrieval order, and how payloads map onto rows.
pub trait ContentMapper: Send + Sync + 'static {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;
    type View: Clone + Send + Sync + 'static;
    type CreateData: Send + 'static;
    type UpdateData: Send + 'static;

    /// Fixed ORDER BY applied to `find_all`.
    fn ordered(select: Select<Self::Entity>) -> Select<Self::Entity>;

    /// Build the full row to insert, id and timestamps included.
    fn insert_model(data: Self::CreateData) -> Self::ActiveModel;

    /// Merge the supplied fields over an existing row. Must always touch
    /// `updated_at` so the UPDATE statement is never empty.
    fn apply_update(model: &mut Self::ActiveModel, data: Self::UpdateData);

    fn to_view(model: <Self::Entity as EntityTrait>::Model) -> Self::View;
}

//
// ──────────────────────────────────────────────────────────
// Store implementation
// ──────────────────────────────────────────────────────────
//

pub struct SeaOrmContentStore<M> {
    db: Arc<DatabaseConnection>,
    _mapper: PhantomData<M>,
}

impl<M> SeaOrmContentStore<M> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _mapper: PhantomData,
        }
    }
}

impl<M> Clone for SeaOrmContentStore<M> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            _mapper: PhantomData,
        }
    }
}

fn map_db_err(err: DbErr) -> ContentStoreError {
    ContentStoreError::Database(err.to_string())
}

#[async_trait]
impl<M> ContentStore for SeaOrmContentStore<M>
where
    M: ContentMapper,
    <M::Entity as EntityTrait>::Model: IntoActiveModel<M::ActiveModel> + Send + Sync,
    <<M::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    type View = M::View;
    type CreateData = M::CreateData;
    type UpdateData = M::UpdateData;

    async fn insert(&self, data: M::CreateData) -> Result<M::View, ContentStoreError> {
        let stored = M::insert_model(data)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(M::to_view(stored))
    }

    async fn find_all(&self) -> Result<Vec<M::View>, ContentStoreError> {
        let rows = M::ordered(M::Entity::find())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(M::to_view).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<M::View>, ContentStoreError> {
        let row = M::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(M::to_view))
    }

    async fn update(
        &self,
        id: Uuid,
        data: M::UpdateData,
    ) -> Result<Option<M::View>, ContentStoreError> {
        let Some(existing) = M::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut model: M::ActiveModel = existing.into_active_model();
        M::apply_update(&mut model, data);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(Some(M::to_view(updated)))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<M::View>, ContentStoreError> {
        let Some(existing) = M::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let view = M::to_view(existing);

        M::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(view))
    }
}
