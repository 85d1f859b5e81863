// src/modules/profile/application/service/profile_service.rs

use async_trait::async_trait;

use crate::modules::profile::application::ports::incoming::use_cases::{
    ProfileError, ProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    CreateProfileData, ProfileRepository, ProfileRepositoryError, ProfileView, UpdateProfileData,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> ProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

fn map_repo_error(err: ProfileRepositoryError) -> ProfileError {
    match err {
        ProfileRepositoryError::Database(msg) => ProfileError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> ProfileUseCase for ProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn fetch(&self) -> Result<ProfileView, ProfileError> {
        self.profile_repository
            .find_first()
            .await
            .map_err(map_repo_error)?
            .ok_or(ProfileError::NotFound)
    }

    async fn create(&self, data: CreateProfileData) -> Result<ProfileView, ProfileError> {
        self.profile_repository
            .insert(data)
            .await
            .map_err(map_repo_error)
    }

    async fn upsert(&self, data: UpdateProfileData) -> Result<ProfileView, ProfileError> {
        let existing = self
            .profile_repository
            .find_first()
            .await
            .map_err(map_repo_error)?;

        match existing {
            Some(profile) => self
                .profile_repository
                .update(profile.id, data)
                .await
                .map_err(map_repo_error)?
                .ok_or_else(|| {
                    // row vanished between find and update; surface as 500,
                    // not as a 404 this endpoint never returns
                    ProfileError::RepositoryError("profile row disappeared mid-update".to_string())
                }),
            None => {
                let create = data.into_create().map_err(ProfileError::MissingFields)?;
                self.profile_repository
                    .insert(create)
                    .await
                    .map_err(map_repo_error)
            }
        }
    }

    async fn remove(&self) -> Result<ProfileView, ProfileError> {
        let existing = self
            .profile_repository
            .find_first()
            .await
            .map_err(map_repo_error)?
            .ok_or(ProfileError::NotFound)?;

        self.profile_repository
            .delete(existing.id)
            .await
            .map_err(map_repo_error)?
            .ok_or(ProfileError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    fn sample_view() -> ProfileView {
        ProfileView {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            title: "Full Stack Developer".to_string(),
            bio: "Builds web applications".to_string(),
            location: "San Francisco, CA".to_string(),
            email: "john@example.com".to_string(),
            phone: None,
            linkedin: None,
            github: None,
            website: None,
            profile_image: None,
            resume_file: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn full_update() -> UpdateProfileData {
        UpdateProfileData {
            name: Some("John Doe".to_string()),
            title: Some("Full Stack Developer".to_string()),
            bio: Some("Builds web applications".to_string()),
            location: Some("San Francisco, CA".to_string()),
            email: Some("john@example.com".to_string()),
            ..Default::default()
        }
    }

    /// Repository stub that records which operations ran.
    struct MockProfileRepo {
        existing: Option<ProfileView>,
        inserted: Mutex<bool>,
        updated: Mutex<bool>,
    }

    impl MockProfileRepo {
        fn with_row(view: ProfileView) -> Self {
            Self {
                existing: Some(view),
                inserted: Mutex::new(false),
                updated: Mutex::new(false),
            }
        }

        fn empty() -> Self {
            Self {
                existing: None,
                inserted: Mutex::new(false),
                updated: Mutex::new(false),
            }
        }
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepo {
        async fn find_first(&self) -> Result<Option<ProfileView>, ProfileRepositoryError> {
            Ok(self.existing.clone())
        }

        async fn insert(
            &self,
            data: CreateProfileData,
        ) -> Result<ProfileView, ProfileRepositoryError> {
            *self.inserted.lock().unwrap() = true;
            let mut view = sample_view();
            view.name = data.name;
            view.email = data.email;
            Ok(view)
        }

        async fn update(
            &self,
            id: Uuid,
            data: UpdateProfileData,
        ) -> Result<Option<ProfileView>, ProfileRepositoryError> {
            *self.updated.lock().unwrap() = true;
            Ok(self.existing.clone().map(|mut view| {
                assert_eq!(view.id, id);
                if let Some(name) = data.name {
                    view.name = name;
                }
                view
            }))
        }

        async fn delete(
            &self,
            _id: Uuid,
        ) -> Result<Option<ProfileView>, ProfileRepositoryError> {
            Ok(self.existing.clone())
        }
    }

    #[tokio::test]
    async fn fetch_without_row_is_not_found() {
        let service = ProfileService::new(MockProfileRepo::empty());

        let err = service.fetch().await.unwrap_err();
        assert!(matches!(err, ProfileError::NotFound));
    }

    #[tokio::test]
    async fn upsert_with_existing_row_updates_it() {
        let repo = MockProfileRepo::with_row(sample_view());
        let service = ProfileService::new(repo);

        let result = service
            .upsert(UpdateProfileData {
                name: Some("Jane Doe".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.name, "Jane Doe");
        assert!(*service.profile_repository.updated.lock().unwrap());
        assert!(!*service.profile_repository.inserted.lock().unwrap());
    }

    #[tokio::test]
    async fn upsert_without_row_creates_from_full_payload() {
        let service = ProfileService::new(MockProfileRepo::empty());

        let result = service.upsert(full_update()).await.unwrap();

        assert_eq!(result.name, "John Doe");
        assert!(*service.profile_repository.inserted.lock().unwrap());
    }

    #[tokio::test]
    async fn upsert_without_row_rejects_partial_payload() {
        let service = ProfileService::new(MockProfileRepo::empty());

        let err = service
            .upsert(UpdateProfileData {
                name: Some("John Doe".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        let ProfileError::MissingFields(fields) = err else {
            panic!("expected MissingFields, got {err:?}");
        };
        assert!(fields.contains(&"email"));
        assert!(!*service.profile_repository.inserted.lock().unwrap());
    }

    #[tokio::test]
    async fn remove_without_row_is_not_found() {
        let service = ProfileService::new(MockProfileRepo::empty());

        let err = service.remove().await.unwrap_err();
        assert!(matches!(err, ProfileError::NotFound));
    }

    #[tokio::test]
    async fn remove_returns_prior_representation() {
        let view = sample_view();
        let service = ProfileService::new(MockProfileRepo::with_row(view.clone()));

        let removed = service.remove().await.unwrap();
        assert_eq!(removed.id, view.id);
    }
}
