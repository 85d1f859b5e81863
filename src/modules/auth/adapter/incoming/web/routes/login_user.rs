use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "admin@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "admin123")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token presented on every mutating request
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// Authenticated operator information
    pub user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    /// Email address
    #[schema(example = "admin@example.com")]
    pub email: String,

    /// Display name
    #[schema(example = "Admin User")]
    pub name: String,
}

/// Operator login
///
/// Authenticates the site operator with email and password, returns the JWT
/// access token the admin dashboard attaches to every mutating request.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>)
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let email = dto.email.clone();

    let request = LoginRequest {
        email: dto.email,
        password: dto.password,
    };

    match data.login_user_use_case.execute(request).await {
        Ok(result) => {
            info!("Operator logged in: {}", email);
            ApiResponse::success(LoginResponse {
                access_token: result.access_token,
                user: LoginUserInfo {
                    id: result.user.id.to_string(),
                    email: result.user.email,
                    name: result.user.name,
                },
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Failed login attempt for: {}", email);
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::RepositoryError(msg)) => {
            error!("Repository error during login: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::modules::auth::application::use_cases::login_user::{
        AuthenticatedAccount, ILoginUserUseCase, LoginResult,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockLoginUseCase {
        result: Result<LoginResult, LoginError>,
    }

    impl MockLoginUseCase {
        fn success() -> Self {
            Self {
                result: Ok(LoginResult {
                    access_token: "token-123".to_string(),
                    user: AuthenticatedAccount {
                        id: Uuid::new_v4(),
                        email: "admin@example.com".to_string(),
                        name: "Admin User".to_string(),
                    },
                }),
            }
        }

        fn error(err: LoginError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl ILoginUserUseCase for MockLoginUseCase {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginResult, LoginError> {
            self.result.clone()
        }
    }

    async fn post_login(use_case: MockLoginUseCase, payload: Value) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_login_user_use_case(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(payload)
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_login_success_returns_token_and_user() {
        let resp = post_login(
            MockLoginUseCase::success(),
            json!({"email": "admin@example.com", "password": "admin123"}),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["access_token"], "token-123");
        assert_eq!(body["data"]["user"]["email"], "admin@example.com");
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials_unauthorized() {
        let resp = post_login(
            MockLoginUseCase::error(LoginError::InvalidCredentials),
            json!({"email": "admin@example.com", "password": "wrong"}),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_repository_error_internal_error() {
        let resp = post_login(
            MockLoginUseCase::error(LoginError::RepositoryError("db down".to_string())),
            json!({"email": "admin@example.com", "password": "admin123"}),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
