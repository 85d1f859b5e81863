use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::content::adapter::incoming::web::resource_routes::validation_error_response;
use crate::modules::profile::application::ports::outgoing::profile_repository::CreateProfileData;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub bio: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub profile_image: Option<String>,
    pub resume_file: Option<String>,
}

impl From<CreateProfileRequest> for CreateProfileData {
    fn from(req: CreateProfileRequest) -> Self {
        Self {
            name: req.name,
            title: req.title,
            bio: req.bio,
            location: req.location,
            email: req.email,
            phone: req.phone,
            linkedin: req.linkedin,
            github: req.github,
            website: req.website,
            profile_image: req.profile_image,
            resume_file: req.resume_file,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/profile")]
pub async fn create_profile_handler(
    _user: AuthenticatedUser,
    req: web::Json<CreateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(violations) = req.validate() {
        return validation_error_response(&violations);
    }

    match data.profile.create(req.into()).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("Failed to create profile: {}", err);
            ApiResponse::internal_error()
        }
    }
}
