#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

    pub fn test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: "cv-backend".to_string(),
            access_token_expiry: 3600,
        })
    }

    pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::new(test_jwt_service())
    }

    /// A ready-to-insert Authorization header value.
    pub fn bearer_token() -> String {
        let token = test_jwt_service()
            .generate_access_token(Uuid::new_v4())
            .unwrap();
        format!("Bearer {token}")
    }
}
