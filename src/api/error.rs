//! API error types for the BitBayPay REST API client.

use thiserror::Error;

use crate::auth::MissingCredentials;

/// API-specific error type for the BitBayPay REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A key was absent when a call was attempted. No request was sent.
    #[error("Credentials not set: missing {0}")]
    CredentialsNotSet(MissingCredentials),

    /// HTTP/network error while calling a method
    #[error("Call method error: {0}")]
    CallMethod(#[from] reqwest::Error),

    /// The payments response body is not a valid envelope
    #[error("Call payments method error: {message}")]
    CallPaymentsMethod {
        /// Parse failure description
        message: String,
        /// Raw response body as received
        body: String,
    },

    /// The gateway answered with `status: "fail"`
    #[error("Method response fail: {}", describe_reason(.reason))]
    MethodResponseFail {
        /// `errors` from the envelope, untouched
        errors: Option<serde_json::Value>,
        /// `reason` from the envelope, untouched
        reason: Option<serde_json::Value>,
    },

    /// Invalid client configuration
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<MissingCredentials> for ApiError {
    fn from(missing: MissingCredentials) -> Self {
        ApiError::CredentialsNotSet(missing)
    }
}

fn describe_reason(reason: &Option<serde_json::Value>) -> String {
    match reason {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => "no reason given".to_string(),
    }
}

impl ApiError {
    /// Gateway `errors`, if this is a `fail` envelope that carried them.
    pub fn errors(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::MethodResponseFail { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }

    /// Gateway `reason` as text, if this is a `fail` envelope with a string reason.
    pub fn reason(&self) -> Option<&str> {
        self.reason_value().and_then(|reason| reason.as_str())
    }

    /// Gateway `reason` as sent, whatever its JSON type.
    pub fn reason_value(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::MethodResponseFail { reason, .. } => reason.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ApiError::CredentialsNotSet(MissingCredentials::Both);
        assert_eq!(
            err.to_string(),
            "Credentials not set: missing public key and private key"
        );

        let err = ApiError::MethodResponseFail {
            errors: Some(serde_json::json!(["INVALID_ORDER"])),
            reason: Some(serde_json::json!("bad order")),
        };
        assert_eq!(err.to_string(), "Method response fail: bad order");
        assert_eq!(err.reason(), Some("bad order"));
        assert_eq!(err.errors(), Some(&serde_json::json!(["INVALID_ORDER"])));

        let err = ApiError::MethodResponseFail {
            errors: None,
            reason: None,
        };
        assert_eq!(err.to_string(), "Method response fail: no reason given");
    }

    #[test]
    fn test_from_missing_credentials() {
        let err: ApiError = MissingCredentials::PrivateKey.into();
        assert!(matches!(
            err,
            ApiError::CredentialsNotSet(MissingCredentials::PrivateKey)
        ));
        assert!(err.errors().is_none());
    }
}
