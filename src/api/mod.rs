//! REST API client module for BitBayPay.
//!
//! This module provides a signed HTTP client for the BitBayPay REST API
//! and the types of its uniform `{status, data|errors, reason}` envelope.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bitbaypay_sdk::api::{BitBayPayClient, Parameters};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = BitBayPayClient::new()?;
//!     client.set_public_key("public").set_private_key("private");
//!
//!     let mut params = Parameters::new();
//!     params.insert("orderId".into(), "123".into());
//!     params.insert("price".into(), "10.00".into());
//!     params.insert("sourceCurrency".into(), "PLN".into());
//!     params.insert("destinationCurrency".into(), "EUR".into());
//!
//!     let data = client.payments(&params).await?;
//!     println!("Payment data: {:?}", data);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`:
//!
//! ```rust,ignore
//! use bitbaypay_sdk::api::ApiError;
//!
//! match client.payments(&params).await {
//!     Ok(data) => println!("Created: {:?}", data),
//!     Err(ApiError::CredentialsNotSet(missing)) => println!("Missing {}", missing),
//!     Err(ApiError::MethodResponseFail { errors, reason }) => {
//!         println!("Rejected: {:?} {:?}", errors, reason)
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{BitBayPayClient, BitBayPayClientBuilder};
pub use error::{ApiError, ApiResult};
pub use types::*;
