use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response (connection refused,
    /// timeout, body decode failure).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with its error envelope.
    #[error("{code}: {message} (http {status})")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// A success envelope arrived without a data payload.
    #[error("response envelope carried no data")]
    MissingData,
}

impl ClientError {
    /// True when the server rejected the bearer token (or its absence); the
    /// admin UI reacts by returning to the login screen.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if *status == 401 || *status == 403)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_renders_code_message_and_status() {
        let err = ClientError::Api {
            status: 404,
            code: "SKILL_NOT_FOUND".to_string(),
            message: "skill not found".to_string(),
        };

        assert_eq!(err.to_string(), "SKILL_NOT_FOUND: skill not found (http 404)");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn unauthorized_is_detected() {
        let err = ClientError::Api {
            status: 401,
            code: "INVALID_TOKEN".to_string(),
            message: "Invalid or expired token".to_string(),
        };

        assert!(err.is_unauthorized());
    }
}
