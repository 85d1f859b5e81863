use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginResult,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    ProfileError, ProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    CreateProfileData, ProfileView, UpdateProfileData,
};

//
// ──────────────────────────────────────────────────────────
// Login
// ──────────────────────────────────────────────────────────
//

/// Default login stub: fails loudly if a test exercises it unconfigured.
#[derive(Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResult, LoginError> {
        Err(LoginError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

pub fn sample_profile_view() -> ProfileView {
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

/// Canned-result profile use case for handler tests.
#[derive(Clone)]
pub struct MockProfileUseCase {
    result: Result<ProfileView, ProfileError>,
}

impl MockProfileUseCase {
    pub fn with_default_profile() -> Self {
        Self {
            result: Ok(sample_profile_view()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(ProfileError::NotFound),
        }
    }

    pub fn missing_fields(fields: Vec<&'static str>) -> Self {
        Self {
            result: Err(ProfileError::MissingFields(fields)),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(ProfileError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl ProfileUseCase for MockProfileUseCase {
    async fn fetch(&self) -> Result<ProfileView, ProfileError> {
        self.result.clone()
    }

    async fn create(&self, _data: CreateProfileData) -> Result<ProfileView, ProfileError> {
        self.result.clone()
    }

    async fn upsert(&self, _data: UpdateProfileData) -> Result<ProfileView, ProfileError> {
        self.result.clone()
    }

    async fn remove(&self) -> Result<ProfileView, ProfileError> {
        self.result.clone()
    }
}
