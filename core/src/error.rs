//! Error types for the inventory client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the product does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging.
//!
//! Transport failures display as their bare message (`Network Error`,
//! `timeout of 2000ms exceeded`) because that string is what ends up in
//! `ProductState::error`.

use thiserror::Error;

/// Errors returned by `ProductClient` parse methods and `ProductApi` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested product does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failures below the HTTP layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("timeout of {0}ms exceeded")]
    Timeout(u64),

    #[error("{0}")]
    Network(String),
}

/// Problems with the environment the client is started in. Fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("INVENTORY_API_URL is not defined in environment variables")]
    MissingBaseUrl,

    #[error("{name} must be a whole number of milliseconds, got {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// A form field that failed client-side validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("description is required")]
    EmptyDescription,

    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },
}

/// Reduce any API failure to the message stored in state.
///
/// Every dispatcher funnels its error through here so the failure payload has
/// one shape regardless of where the request broke.
pub fn error_message(error: &ApiError) -> String {
    error.to_string()
}
