//! Network URL constants for the BitBayPay SDK.

/// REST API base URL. Method names are appended verbatim.
pub const BASE_URL: &str = "https://api.bitbaypay.com/rest/bitbaypay/";

/// Method name of the payments endpoint.
pub const METHOD_PAYMENTS: &str = "payments";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
