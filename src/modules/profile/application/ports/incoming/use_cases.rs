// src/modules/profile/application/ports/incoming/use_cases.rs

use async_trait::async_trait;
use std::fmt;

use crate::modules::profile::application::ports::outgoing::profile_repository::{
    CreateProfileData, ProfileView, UpdateProfileData,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum ProfileError {
    /// No profile row exists yet.
    NotFound,
    /// Upsert tried to create a profile from a payload lacking required fields.
    MissingFields(Vec<&'static str>),
    RepositoryError(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NotFound => write!(f, "profile not found"),
            ProfileError::MissingFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            ProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Singleton-mode resource operations. No ids cross this boundary: the
/// canonical row is always "the first one".
#[async_trait]
pub trait ProfileUseCase: Send + Sync {
    async fn fetch(&self) -> Result<ProfileView, ProfileError>;

    async fn create(&self, data: CreateProfileData) -> Result<ProfileView, ProfileError>;

    /// Merge over the existing profile, or create one from the payload when
    /// none exists yet.
    async fn upsert(&self, data: UpdateProfileData) -> Result<ProfileView, ProfileError>;

    async fn remove(&self) -> Result<ProfileView, ProfileError>;
}
