//! Credentials and request signing for the BitBayPay API.
//!
//! Every request carries the public key in plain text plus an HMAC-SHA512
//! hash derived from the private key.
//!
//! # Signing Flow
//!
//! 1. Take the current Unix timestamp (seconds)
//! 2. Concatenate `public_key + timestamp + body` (body is empty for GET)
//! 3. HMAC-SHA512 the message with the private key, hex encode the result
//! 4. Send `API-Key`, `API-Hash`, `Request-Timestamp` and a fresh `operation-id`

use std::fmt;

use ring::hmac;
use thiserror::Error;

/// Header carrying the public key.
pub const HEADER_API_KEY: &str = "API-Key";
/// Header carrying the request hash.
pub const HEADER_API_HASH: &str = "API-Hash";
/// Header carrying the per-request operation id.
pub const HEADER_OPERATION_ID: &str = "operation-id";
/// Header carrying the Unix timestamp used in the hash.
pub const HEADER_REQUEST_TIMESTAMP: &str = "Request-Timestamp";

/// Which credential(s) are absent at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingCredentials {
    #[error("public key")]
    PublicKey,

    #[error("private key")]
    PrivateKey,

    #[error("public key and private key")]
    Both,
}

/// Public/private key pair held by the client.
///
/// Either value may be absent; nothing is validated until a request is made.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    public_key: Option<String>,
    private_key: Option<String>,
}

impl Credentials {
    /// Create credentials with both keys set.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: Some(public_key.into()),
            private_key: Some(private_key.into()),
        }
    }

    pub fn set_public_key(&mut self, key: impl Into<String>) {
        self.public_key = Some(key.into());
    }

    pub fn set_private_key(&mut self, key: impl Into<String>) {
        self.private_key = Some(key.into());
    }

    pub fn clear_public_key(&mut self) {
        self.public_key = None;
    }

    pub fn clear_private_key(&mut self) {
        self.private_key = None;
    }

    /// The public key, if set.
    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    /// Check whether both keys are set.
    pub fn is_complete(&self) -> bool {
        self.public_key.is_some() && self.private_key.is_some()
    }

    /// Borrow both keys, or report which ones are missing.
    pub fn require(&self) -> Result<(&str, &str), MissingCredentials> {
        match (self.public_key.as_deref(), self.private_key.as_deref()) {
            (Some(public), Some(private)) => Ok((public, private)),
            (None, Some(_)) => Err(MissingCredentials::PublicKey),
            (Some(_), None) => Err(MissingCredentials::PrivateKey),
            (None, None) => Err(MissingCredentials::Both),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Authentication headers for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub api_key: String,
    pub api_hash: String,
    pub operation_id: String,
    pub request_timestamp: i64,
}

impl AuthHeaders {
    /// Build headers for `body` using the current time and a random operation id.
    pub fn new(public_key: &str, private_key: &str, body: &str) -> Self {
        Self::with_timestamp(
            public_key,
            private_key,
            body,
            current_timestamp(),
            uuid::Uuid::new_v4().to_string(),
        )
    }

    /// Build headers with an explicit timestamp and operation id.
    pub fn with_timestamp(
        public_key: &str,
        private_key: &str,
        body: &str,
        timestamp: i64,
        operation_id: String,
    ) -> Self {
        Self {
            api_key: public_key.to_string(),
            api_hash: sign_request(public_key, private_key, timestamp, body),
            operation_id,
            request_timestamp: timestamp,
        }
    }

    /// Header name/value pairs in the order they are attached.
    pub fn pairs(&self) -> [(&'static str, String); 4] {
        [
            (HEADER_API_KEY, self.api_key.clone()),
            (HEADER_API_HASH, self.api_hash.clone()),
            (HEADER_OPERATION_ID, self.operation_id.clone()),
            (HEADER_REQUEST_TIMESTAMP, self.request_timestamp.to_string()),
        ]
    }
}

/// Current Unix timestamp in seconds.
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Compute the `API-Hash` value.
///
/// Lowercase hex of HMAC-SHA512 over `public_key + timestamp + body`,
/// keyed with the private key.
pub fn sign_request(public_key: &str, private_key: &str, timestamp: i64, body: &str) -> String {
    let message = format!("{}{}{}", public_key, timestamp, body);
    let key = hmac::Key::new(hmac::HMAC_SHA512, private_key.as_bytes());
    hex::encode(hmac::sign(&key, message.as_bytes()).as_ref())
}
