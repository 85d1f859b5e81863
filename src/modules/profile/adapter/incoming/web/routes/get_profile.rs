use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::application::ports::incoming::use_cases::ProfileError;
use crate::modules::profile::application::ports::outgoing::profile_repository::ProfileView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch the public profile
///
/// Returns the single profile the site is built around, or 404 when none has
/// been created yet.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (
            status = 200,
            description = "The profile",
            body = inline(SuccessResponse<ProfileView>)
        ),
        (
            status = 404,
            description = "No profile exists yet",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PROFILE_NOT_FOUND",
                    "message": "Profile not found"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.fetch().await {
        Ok(profile) => ApiResponse::success(profile),

        Err(ProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(err) => {
            error!("Failed to fetch profile: {}", err);
            ApiResponse::internal_error()
        }
    }
}
