// src/modules/profile/adapter/outgoing/profile_repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::{self, Column, Entity};
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    CreateProfileData, ProfileRepository, ProfileRepositoryError, ProfileView, UpdateProfileData,
};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::Database(err.to_string())
}

fn model_to_view(model: sea_orm_entity::Model) -> ProfileView {
    ProfileView {
        id: model.id,
        name: model.name,
        title: model.title,
        bio: model.bio,
        location: model.location,
        email: model.email,
        phone: model.phone,
        linkedin: model.linkedin,
        github: model.github,
        website: model.website,
        profile_image: model.profile_image,
        resume_file: model.resume_file,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_first(&self) -> Result<Option<ProfileView>, ProfileRepositoryError> {
        // oldest row is the canonical one
        let row = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_view))
    }

    async fn insert(&self, data: CreateProfileData) -> Result<ProfileView, ProfileRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = sea_orm_entity::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            title: Set(data.title),
            bio: Set(data.bio),
            location: Set(data.location),
            email: Set(data.email),
            phone: Set(data.phone),
            linkedin: Set(data.linkedin),
            github: Set(data.github),
            website: Set(data.website),
            profile_image: Set(data.profile_image),
            resume_file: Set(data.resume_file),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let stored = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_view(stored))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateProfileData,
    ) -> Result<Option<ProfileView>, ProfileRepositoryError> {
        let Some(existing) = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();

        if let Some(name) = data.name {
            model.name = Set(name);
        }
        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(bio) = data.bio {
            model.bio = Set(bio);
        }
        if let Some(location) = data.location {
            model.location = Set(location);
        }
        if let Some(email) = data.email {
            model.email = Set(email);
        }
        if let Some(phone) = data.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(linkedin) = data.linkedin {
            model.linkedin = Set(Some(linkedin));
        }
        if let Some(github) = data.github {
            model.github = Set(Some(github));
        }
        if let Some(website) = data.website {
            model.website = Set(Some(website));
        }
        if let Some(profile_image) = data.profile_image {
            model.profile_image = Set(Some(profile_image));
        }
        if let Some(resume_file) = data.resume_file {
            model.resume_file = Set(Some(resume_file));
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(Some(model_to_view(updated)))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<ProfileView>, ProfileRepositoryError> {
        let Some(existing) = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let view = model_to_view(existing);

        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(view))
    }
}
