// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `SafeTec` library.
//!
//! This module provides the error hierarchy for handling failures across
//! the library: value validation, protocol communication, and response
//! parsing.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns `true` if this error originated in the transport layer.
    ///
    /// Communication failures (request failed, non-200 status, timeout)
    /// flip the device status to offline; parse and validation failures
    /// never do.
    #[must_use]
    pub fn is_communication(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values, before any network request is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// A shutoff state other than 1 (open) or 2 (closed) was provided.
    #[error("invalid shutoff state: {0}")]
    InvalidShutoffState(i64),
}

/// Errors related to HTTP protocol communication.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the device failed or returned a non-200 status.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected key is missing from the response object.
    #[error("missing key in response: {0}")]
    MissingKey(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {key}: {message}")]
    InvalidValue {
        /// The response key whose value failed to parse.
        key: String,
        /// Description of the parsing failure.
        message: String,
    },

    /// A set command was not acknowledged with `"OK"`.
    #[error("command not acknowledged: {key} = {value}")]
    NotAcknowledged {
        /// The expected acknowledgment key.
        key: String,
        /// The value the device returned instead of `"OK"`.
        value: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
