// src/modules/auth/adapter/outgoing/user_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{Column, Entity};
use crate::modules::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserRecord,
};

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, UserQueryError> {
        let user = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|model| UserRecord {
            id: model.id,
            email: model.email,
            name: model.name,
            password_hash: model.password_hash,
        }))
    }
}
