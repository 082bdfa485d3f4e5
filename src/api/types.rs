//! Request and response types for the BitBayPay REST API.

use std::collections::BTreeMap;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};

/// Method parameters. Ordered so the signed request body is stable.
pub type Parameters = BTreeMap<String, String>;

/// Result data of a successful method call, as sent by the gateway.
pub type ResponseData = Value;

/// Parameter names recognized by the `payments` method.
pub mod param {
    pub const DESTINATION_CURRENCY: &str = "destinationCurrency";
    pub const PRICE: &str = "price";
    pub const ORDER_ID: &str = "orderId";
    pub const SOURCE_CURRENCY: &str = "sourceCurrency";
    pub const COVERED_BY: &str = "coveredBy";
    pub const KEEP_SOURCE_CURRENCY: &str = "keep_source_currency";
    pub const SUCCESS_CALLBACK_URL: &str = "successCallbackUrl";
    pub const FAILURE_CALLBACK_URL: &str = "failureCallbackUrl";
    pub const NOTIFICATIONS_URL: &str = "notificationsUrl";
}

// ============================================================================
// Raw response
// ============================================================================

/// HTTP response exactly as received, with the body fully read.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    /// Check whether the HTTP status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Envelope status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Fail,
}

/// Uniform `{status, data|errors, reason}` wrapper returned by every method.
///
/// Only `status` is typed. The other fields are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Value>,
}

impl ResponseEnvelope {
    /// Parse an envelope from a response body.
    ///
    /// Any body that is not JSON, lacks `status`, or carries an unknown
    /// status is reported as [`ApiError::CallPaymentsMethod`].
    pub fn parse(body: &str) -> ApiResult<Self> {
        serde_json::from_str(body).map_err(|e| ApiError::CallPaymentsMethod {
            message: format!("Failed to parse response envelope: {}", e),
            body: body.to_string(),
        })
    }

    /// Unwrap `data` on `ok`, or turn a `fail` envelope into an error.
    ///
    /// `body` is the raw body the envelope was parsed from; it is carried
    /// by the error when an `ok` envelope has no `data`.
    pub fn into_result(self, body: &str) -> ApiResult<ResponseData> {
        match self.status {
            ResponseStatus::Ok => self.data.ok_or_else(|| ApiError::CallPaymentsMethod {
                message: "Response status is ok but data is missing".to_string(),
                body: body.to_string(),
            }),
            ResponseStatus::Fail => Err(ApiError::MethodResponseFail {
                errors: self.errors,
                reason: self.reason,
            }),
        }
    }
}

// ============================================================================
// Payments
// ============================================================================

/// Typed parameters for the `payments` method.
///
/// Values are passed through unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentRequest {
    pub destination_currency: String,
    pub price: String,
    pub order_id: String,
    pub source_currency: Option<String>,
    pub covered_by: Option<String>,
    pub keep_source_currency: Option<bool>,
    pub success_callback_url: Option<String>,
    pub failure_callback_url: Option<String>,
    pub notifications_url: Option<String>,
}

impl PaymentRequest {
    /// Create a request with the mandatory fields.
    pub fn new(
        destination_currency: impl Into<String>,
        price: impl Into<String>,
        order_id: impl Into<String>,
    ) -> Self {
        Self {
            destination_currency: destination_currency.into(),
            price: price.into(),
            order_id: order_id.into(),
            ..Default::default()
        }
    }

    pub fn with_source_currency(mut self, currency: impl Into<String>) -> Self {
        self.source_currency = Some(currency.into());
        self
    }

    pub fn with_covered_by(mut self, covered_by: impl Into<String>) -> Self {
        self.covered_by = Some(covered_by.into());
        self
    }

    pub fn with_keep_source_currency(mut self, keep: bool) -> Self {
        self.keep_source_currency = Some(keep);
        self
    }

    pub fn with_success_callback_url(mut self, url: impl Into<String>) -> Self {
        self.success_callback_url = Some(url.into());
        self
    }

    pub fn with_failure_callback_url(mut self, url: impl Into<String>) -> Self {
        self.failure_callback_url = Some(url.into());
        self
    }

    pub fn with_notifications_url(mut self, url: impl Into<String>) -> Self {
        self.notifications_url = Some(url.into());
        self
    }

    /// Flatten into wire parameters, omitting unset fields.
    pub fn into_parameters(self) -> Parameters {
        let mut params = Parameters::new();
        params.insert(param::DESTINATION_CURRENCY.to_string(), self.destination_currency);
        params.insert(param::PRICE.to_string(), self.price);
        params.insert(param::ORDER_ID.to_string(), self.order_id);

        let optional = [
            (param::SOURCE_CURRENCY, self.source_currency),
            (param::COVERED_BY, self.covered_by),
            (
                param::KEEP_SOURCE_CURRENCY,
                self.keep_source_currency.map(|keep| keep.to_string()),
            ),
            (param::SUCCESS_CALLBACK_URL, self.success_callback_url),
            (param::FAILURE_CALLBACK_URL, self.failure_callback_url),
            (param::NOTIFICATIONS_URL, self.notifications_url),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                params.insert(name.to_string(), value);
            }
        }

        params
    }
}

impl From<PaymentRequest> for Parameters {
    fn from(request: PaymentRequest) -> Self {
        request.into_parameters()
    }
}
