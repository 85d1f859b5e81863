use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::content::adapter::incoming::web::resource_routes::validation_error_response;
use crate::modules::profile::application::ports::incoming::use_cases::ProfileError;
use crate::modules::profile::application::ports::outgoing::profile_repository::UpdateProfileData;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// All fields optional: supplied fields merge over the stored profile. When no
/// profile exists yet the payload becomes the new profile (and must carry the
/// required fields).
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub bio: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: Option<String>,

    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub profile_image: Option<String>,
    pub resume_file: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfileData {
    fn from(req: UpdateProfileRequest) -> Self {
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

#[put("/api/profile")]
pub async fn update_profile_handler(
    _user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(violations) = req.validate() {
        return validation_error_response(&violations);
    }

    match data.profile.upsert(req.into()).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(err @ ProfileError::MissingFields(_)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        Err(err) => {
            error!("Failed to upsert profile: {}", err);
            ApiResponse::internal_error()
        }
    }
}
