//! Error types for the Worldpay CNP client.
//!
//! All errors implement the standard [`std::error::Error`] trait via
//! [`thiserror::Error`].
//!
//! A transaction the processor *declines* is not an error at this level: the
//! round trip succeeded and the outcome is reported through the decoded
//! [`LitleOnlineResponse`](crate::types::LitleOnlineResponse). Errors here
//! mean the round trip itself could not be completed.

use thiserror::Error;

/// Result type alias for client operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, CnpError>;

/// Errors that can occur while submitting a CNP online transaction.
#[derive(Debug, Error)]
pub enum CnpError {
    /// Client configuration is invalid.
    ///
    /// Raised before any I/O when credentials are missing or the endpoint
    /// URL does not parse.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// HTTP request failed.
    ///
    /// Wraps [`reqwest::Error`]: timeouts, connection refusals, DNS and TLS
    /// failures.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The request envelope could not be serialized to XML.
    #[error("failed to encode request XML: {0}")]
    XmlEncode(#[from] quick_xml::SeError),

    /// The response body could not be decoded as a `litleOnlineResponse`.
    ///
    /// Usually means the endpoint returned something other than the online
    /// API schema (an HTML error page, a truncated body).
    #[error("failed to decode response XML: {0}")]
    XmlDecode(#[from] quick_xml::DeError),

    /// The endpoint answered with a non-success HTTP status.
    ///
    /// The body is not decoded in this case.
    #[error("endpoint returned HTTP status {status}")]
    Endpoint {
        /// HTTP status code returned by the endpoint.
        status: u16,
    },
}
