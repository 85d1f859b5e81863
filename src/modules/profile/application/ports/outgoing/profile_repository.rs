// src/modules/profile/application/ports/outgoing/profile_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileView {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub profile_image: Option<String>,
    pub resume_file: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateProfileData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub profile_image: Option<String>,
    pub resume_file: Option<String>,
}

/// Every field optional: PUT merges over the existing row. When no row exists
/// the payload must be able to stand on its own as a full profile.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileData {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub profile_image: Option<String>,
    pub resume_file: Option<String>,
}

impl UpdateProfileData {
    /// Promote the partial payload to a full creation payload, or report the
    /// required fields it is missing.
    pub fn into_create(self) -> Result<CreateProfileData, Vec<&'static str>> {
        let mut missing = Vec::new();

        if self.name.is_none() {
            missing.push("name");
        }
        if self.title.is_none() {
            missing.push("title");
        }
        if self.bio.is_none() {
            missing.push("bio");
        }
        if self.location.is_none() {
            missing.push("location");
        }
        if self.email.is_none() {
            missing.push("email");
        }

        match (self.name, self.title, self.bio, self.location, self.email) {
            (Some(name), Some(title), Some(bio), Some(location), Some(email)) => {
                Ok(CreateProfileData {
                    name,
                    title,
                    bio,
                    location,
                    email,
                    phone: self.phone,
                    linkedin: self.linkedin,
                    github: self.github,
                    website: self.website,
                    profile_image: self.profile_image,
                    resume_file: self.resume_file,
                })
            }
            _ => Err(missing),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    Database(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The canonical row: oldest row wins when more than one exists.
    async fn find_first(&self) -> Result<Option<ProfileView>, ProfileRepositoryError>;

    async fn insert(&self, data: CreateProfileData) -> Result<ProfileView, ProfileRepositoryError>;

    /// Merge the supplied fields over the row with `id`; `None` when absent.
    async fn update(
        &self,
        id: Uuid,
        data: UpdateProfileData,
    ) -> Result<Option<ProfileView>, ProfileRepositoryError>;

    /// Hard delete; returns the prior representation, `None` when absent.
    async fn delete(&self, id: Uuid) -> Result<Option<ProfileView>, ProfileRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_create_reports_every_missing_required_field() {
        let data = UpdateProfileData {
            name: Some("John Doe".to_string()),
            email: Some("john@example.com".to_string()),
            ..Default::default()
        };

        let missing = data.into_create().unwrap_err();
        assert_eq!(missing, vec!["title", "bio", "location"]);
    }

    #[test]
    fn into_create_succeeds_with_all_required_fields() {
        let data = UpdateProfileData {
            name: Some("John Doe".to_string()),
            title: Some("Full Stack Developer".to_string()),
            bio: Some("Builds web applications".to_string()),
            location: Some("San Francisco, CA".to_string()),
            email: Some("john@example.com".to_string()),
            website: Some("https://johndoe.dev".to_string()),
            ..Default::default()
        };

        let create = data.into_create().unwrap();
        assert_eq!(create.name, "John Doe");
        assert_eq!(create.website.as_deref(), Some("https://johndoe.dev"));
        assert!(create.phone.is_none());
    }
}
