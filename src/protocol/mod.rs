// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol implementation for communicating with SafeTech devices.
//!
//! The device speaks plain HTTP on port 5333; every command is a single
//! GET request and every response a flat JSON object. [`HttpClient`] is
//! the only transport, but the [`Protocol`] trait keeps the seam open
//! for test doubles.

mod http;

pub use http::{HttpClient, HttpConfig};

use crate::command::Command;
use crate::error::{ParseError, ProtocolError};
use crate::response::Reply;

/// Raw response from a device command.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as a flat JSON object.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not a JSON object.
    pub fn reply(&self) -> Result<Reply, ParseError> {
        Reply::from_json(&self.body)
    }
}

/// Trait for transports that can send commands to a SafeTech device.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a command to the device and returns the raw response.
    ///
    /// Each call is attempted exactly once; there are no retries.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport failure, non-200 status or
    /// timeout.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError>;
}
