//! BitBayPay REST API client implementation.
//!
//! The [`BitBayPayClient`] holds the key pair, signs each request and
//! interprets the gateway's response envelope.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitbaypay_sdk::api::{BitBayPayClient, PaymentRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = BitBayPayClient::new()?;
//!     client.set_public_key("public").set_private_key("private");
//!
//!     let payment = client
//!         .create_payment(PaymentRequest::new("EUR", "10.00", "order-1").with_source_currency("PLN"))
//!         .await?;
//!     println!("Payment: {:?}", payment);
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, Method};

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::*;
use crate::auth::{AuthHeaders, Credentials};
use crate::network::{BASE_URL, DEFAULT_TIMEOUT_SECS, METHOD_PAYMENTS};

/// Builder for configuring [`BitBayPayClient`].
#[derive(Debug, Clone)]
pub struct BitBayPayClientBuilder {
    base_url: String,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    credentials: Credentials,
}

impl Default for BitBayPayClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BitBayPayClientBuilder {
    /// Create a new builder targeting [`BASE_URL`].
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
            credentials: Credentials::default(),
        }
    }

    /// Override the base URL. A trailing slash is added if missing,
    /// since method names are appended directly.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Set the public key.
    pub fn public_key(mut self, key: impl Into<String>) -> Self {
        self.credentials.set_public_key(key);
        self
    }

    /// Set the private key.
    pub fn private_key(mut self, key: impl Into<String>) -> Self {
        self.credentials.set_private_key(key);
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<BitBayPayClient> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = reqwest::header::HeaderName::try_from(name.as_str())
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = reqwest::header::HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let http_client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()
            .map_err(client_build_error)?;

        Ok(BitBayPayClient {
            http_client,
            base_url: self.base_url,
            credentials: self.credentials,
        })
    }
}

/// Map an HTTP client build failure to a configuration error.
fn client_build_error(err: reqwest::Error) -> ApiError {
    ApiError::InvalidParameter(format!("Failed to build HTTP client: {}", err))
}

/// BitBayPay REST API client.
///
/// Keys are plain instance state. Request methods borrow the client
/// immutably, so keys cannot change while a call is in flight.
#[derive(Debug, Clone)]
pub struct BitBayPayClient {
    http_client: Client,
    base_url: String,
    credentials: Credentials,
}

impl BitBayPayClient {
    /// Create a new client with default settings and no keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> ApiResult<Self> {
        BitBayPayClientBuilder::new().build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder() -> BitBayPayClientBuilder {
        BitBayPayClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the public key.
    pub fn set_public_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.credentials.set_public_key(key);
        self
    }

    /// Set the private key.
    pub fn set_private_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.credentials.set_private_key(key);
        self
    }

    /// Unset the public key.
    pub fn clear_public_key(&mut self) -> &mut Self {
        self.credentials.clear_public_key();
        self
    }

    /// Unset the private key.
    pub fn clear_private_key(&mut self) -> &mut Self {
        self.credentials.clear_private_key();
        self
    }

    /// The public key currently set, if any.
    pub fn public_key(&self) -> Option<&str> {
        self.credentials.public_key()
    }

    /// Check whether both keys are set.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_complete()
    }

    // =========================================================================
    // Generic method call
    // =========================================================================

    /// Call an API method and return the raw response.
    ///
    /// GET sends `parameters` as the query string; other verbs send them as
    /// a JSON object body. The envelope is not interpreted here.
    ///
    /// # Errors
    ///
    /// * [`ApiError::CredentialsNotSet`] if a key is missing (nothing is sent)
    /// * [`ApiError::CallMethod`] on any transport failure
    pub async fn call_method(
        &self,
        method: &str,
        parameters: &Parameters,
        verb: Method,
    ) -> ApiResult<RawResponse> {
        let (public_key, private_key) = self.credentials.require()?;

        let mut url = format!("{}{}", self.base_url, method);
        let body = if verb == Method::GET {
            if !parameters.is_empty() {
                let query = serde_urlencoded::to_string(parameters).map_err(|e| {
                    ApiError::InvalidParameter(format!("Failed to encode query: {}", e))
                })?;
                url.push('?');
                url.push_str(&query);
            }
            String::new()
        } else {
            serde_json::to_string(parameters).map_err(|e| {
                ApiError::InvalidParameter(format!("Failed to encode body: {}", e))
            })?
        };

        let auth = AuthHeaders::new(public_key, private_key, &body);

        tracing::debug!(
            method,
            verb = %verb,
            url = %url,
            operation_id = %auth.operation_id,
            "Calling BitBayPay method"
        );

        let mut request = self.http_client.request(verb, &url);
        for (name, value) in auth.pairs() {
            request = request.header(name, value);
        }
        if !body.is_empty() {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        tracing::debug!(method, status = %status, "BitBayPay method responded");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    // =========================================================================
    // Payments
    // =========================================================================

    /// Call the `payments` method and return its `data`.
    ///
    /// The envelope is interpreted whatever the HTTP status code.
    ///
    /// # Errors
    ///
    /// * [`ApiError::CredentialsNotSet`] / [`ApiError::CallMethod`] from [`Self::call_method`]
    /// * [`ApiError::CallPaymentsMethod`] if the body is not a valid envelope
    /// * [`ApiError::MethodResponseFail`] if the gateway reports `fail`
    pub async fn payments(&self, parameters: &Parameters) -> ApiResult<ResponseData> {
        let response = self
            .call_method(METHOD_PAYMENTS, parameters, Method::POST)
            .await?;

        let envelope = ResponseEnvelope::parse(&response.body)?;
        if envelope.status == ResponseStatus::Fail {
            tracing::warn!(
                status = %response.status,
                reason = ?envelope.reason,
                "BitBayPay payments call failed"
            );
        }

        envelope.into_result(&response.body)
    }

    /// Create a payment from typed parameters.
    pub async fn create_payment(&self, request: PaymentRequest) -> ApiResult<ResponseData> {
        self.payments(&request.into_parameters()).await
    }
}
