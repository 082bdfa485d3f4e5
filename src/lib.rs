//! # BitBayPay Rust SDK
//!
//! A Rust client for the BitBayPay payment gateway REST API.
//!
//! ## Modules
//!
//! - [`api`]: REST API client, response envelope and error types
//! - [`auth`]: Key pair storage and request signing
//! - [`network`]: Base URL and method name constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bitbaypay_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BitBayPayClient::builder()
//!         .public_key("public")
//!         .private_key("private")
//!         .build()?;
//!
//!     let request = PaymentRequest::new("EUR", "10.00", "order-1")
//!         .with_source_currency("PLN")
//!         .with_notifications_url("https://shop.example/notify");
//!
//!     let data = client.create_payment(request).await?;
//!     println!("Payment: {:?}", data);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Network URL constants.
pub mod network;

/// Credentials and request signing.
pub mod auth;

/// REST API client module.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use bitbaypay_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiResult, BitBayPayClient, BitBayPayClientBuilder, Parameters,
        PaymentRequest, RawResponse, ResponseData, ResponseEnvelope, ResponseStatus,
    };

    pub use crate::auth::{Credentials, MissingCredentials};

    pub use crate::network::{BASE_URL, METHOD_PAYMENTS};
}
