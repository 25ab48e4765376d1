// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device response parsing.
//!
//! The device answers every command with a single flat JSON object whose
//! only key echoes the command, e.g. `{"getAB": 1}` or
//! `{"setPRF3": "OK"}`. [`Reply`] wraps that object and offers typed
//! accessors keyed by the expected response key carried on each command
//! ([`crate::command::Command::response_key`]).

use serde_json::{Map, Value};

use crate::error::ParseError;

/// A parsed flat JSON response object.
///
/// # Examples
///
/// ```
/// use safetec_lib::response::Reply;
///
/// let reply = Reply::from_json(r#"{"getAB": 1}"#).unwrap();
/// assert_eq!(reply.integer("getAB").unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Reply {
    object: Map<String, Value>,
}

impl Reply {
    /// Parses a raw response body into a reply.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not a JSON object.
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        let object: Map<String, Value> = serde_json::from_str(body)?;
        Ok(Self { object })
    }

    /// Returns the value at `key`, or `ParseError::MissingKey`.
    fn value(&self, key: &str) -> Result<&Value, ParseError> {
        self.object
            .get(key)
            .ok_or_else(|| ParseError::MissingKey(key.to_string()))
    }

    /// Reads an integer value at `key`.
    ///
    /// Accepts both JSON numbers and numeric strings; the device is not
    /// consistent about which it sends.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingKey` if the key is absent, or
    /// `ParseError::InvalidValue` if the value is not an integer.
    pub fn integer(&self, key: &str) -> Result<i64, ParseError> {
        let value = self.value(key)?;
        match value {
            Value::Number(n) => n.as_i64().ok_or_else(|| ParseError::InvalidValue {
                key: key.to_string(),
                message: format!("not an integer: {n}"),
            }),
            Value::String(s) => s.trim().parse().map_err(|_| ParseError::InvalidValue {
                key: key.to_string(),
                message: format!("not an integer: {s:?}"),
            }),
            other => Err(ParseError::InvalidValue {
                key: key.to_string(),
                message: format!("unexpected value: {other}"),
            }),
        }
    }

    /// Reads a text value at `key`.
    ///
    /// JSON numbers are rendered as text, matching the device's loose
    /// typing of profile attributes.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingKey` if the key is absent, or
    /// `ParseError::InvalidValue` for non-scalar values.
    pub fn text(&self, key: &str) -> Result<String, ParseError> {
        let value = self.value(key)?;
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(ParseError::InvalidValue {
                key: key.to_string(),
                message: format!("unexpected value: {other}"),
            }),
        }
    }

    /// Verifies a set acknowledgment at `key`.
    ///
    /// An acknowledgment is valid only when the value is the literal
    /// string `"OK"`. The new value is then inferred from the command
    /// that was issued, never from the payload.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingKey` if the key is absent, or
    /// `ParseError::NotAcknowledged` for any value other than `"OK"`.
    pub fn ack(&self, key: &str) -> Result<(), ParseError> {
        let value = self.value(key)?;
        match value {
            Value::String(s) if s == "OK" => Ok(()),
            other => Err(ParseError::NotAcknowledged {
                key: key.to_string(),
                value: other.to_string(),
            }),
        }
    }
}
