use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::profile::application::ports::incoming::use_cases::ProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/profile")]
pub async fn delete_profile_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.remove().await {
        Ok(removed) => ApiResponse::success(removed),

        Err(ProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(err) => {
            error!("Failed to delete profile: {}", err);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{bearer_token, test_token_provider};
    use crate::tests::support::stubs::MockProfileUseCase;

    async fn delete_profile(
        use_case: MockProfileUseCase,
        token: Option<String>,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default().with_profile(use_case).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_profile_handler),
        )
        .await;

        let mut req = test::TestRequest::delete().uri("/api/profile");
        if let Some(token) = token {
            req = req.insert_header(("Authorization", token));
        }

        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_delete_profile_returns_prior_representation() {
        let resp =
            delete_profile(MockProfileUseCase::with_default_profile(), Some(bearer_token())).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "John Doe");
    }

    #[actix_web::test]
    async fn test_delete_profile_missing_is_not_found() {
        let resp = delete_profile(MockProfileUseCase::not_found(), Some(bearer_token())).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROFILE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_delete_profile_without_token_unauthorized() {
        let resp = delete_profile(MockProfileUseCase::with_default_profile(), None).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
