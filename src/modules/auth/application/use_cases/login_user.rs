// src/modules/auth/application/use_cases/login_user.rs

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access_token: String,
    pub user: AuthenticatedAccount,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum LoginError {
    /// Unknown email or wrong password; the two are indistinguishable on
    /// purpose.
    InvalidCredentials,
    RepositoryError(String),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "invalid email or password"),
            LoginError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResult, LoginError>;
}

pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    user_query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        user_query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResult, LoginError> {
        let user = self
            .user_query
            .find_by_email(&request.email)
            .await
            .map_err(|UserQueryError::DatabaseError(msg)| LoginError::RepositoryError(msg))?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .verify_password(&request.password, &user.password_hash)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id)
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        Ok(LoginResult {
            access_token,
            user: AuthenticatedAccount {
                id: user.id,
                email: user.email,
                name: user.name,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::password_hasher::HashError;
    use crate::modules::auth::application::ports::outgoing::token_provider::{
        TokenClaims, TokenError,
    };
    use crate::modules::auth::application::ports::outgoing::user_query::UserRecord;

    struct MockUserQuery {
        result: Result<Option<UserRecord>, UserQueryError>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<UserRecord>, UserQueryError> {
            self.result.clone()
        }
    }

    struct MockHasher {
        matches: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!("not used in login tests")
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.matches)
        }
    }

    struct MockTokenProvider;

    impl TokenProvider for MockTokenProvider {
        fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
            Ok("token-123".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("not used in login tests")
        }
    }

    fn sample_user() -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            name: "Admin User".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    fn use_case(
        query_result: Result<Option<UserRecord>, UserQueryError>,
        matches: bool,
    ) -> LoginUserUseCase<MockUserQuery> {
        LoginUserUseCase::new(
            MockUserQuery {
                result: query_result,
            },
            Arc::new(MockHasher { matches }),
            Arc::new(MockTokenProvider),
        )
    }

    fn request() -> LoginRequest {
        LoginRequest {
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
        }
    }

    #[tokio::test]
    async fn login_with_valid_credentials_returns_token_and_user() {
        let user = sample_user();
        let uc = use_case(Ok(Some(user.clone())), true);

        let result = uc.execute(request()).await.unwrap();

        assert_eq!(result.access_token, "token-123");
        assert_eq!(result.user.id, user.id);
        assert_eq!(result.user.email, "admin@example.com");
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let uc = use_case(Ok(None), true);

        let err = uc.execute(request()).await.unwrap_err();
        assert!(matches!(err, LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let uc = use_case(Ok(Some(sample_user())), false);

        let err = uc.execute(request()).await.unwrap_err();
        assert!(matches!(err, LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn query_failure_is_repository_error() {
        let uc = use_case(
            Err(UserQueryError::DatabaseError("db down".to_string())),
            true,
        );

        let err = uc.execute(request()).await.unwrap_err();
        assert!(matches!(err, LoginError::RepositoryError(msg) if msg == "db down"));
    }
}
