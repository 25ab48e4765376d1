// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed device handle.
//!
//! [`SafeTec`] wraps a transport and exposes one method per protocol
//! operation. Every method issues exactly one request (except
//! [`SafeTec::select_profile`] and [`SafeTec::active_profiles`], which
//! are documented multi-request sequences) and decodes the response
//! against the command's expected key.

use crate::command::{
    Command, ProfileAvailabilityCommand, ProfileCountCommand, ProfileNameCommand,
    ProfileSettingCommand, SelectProfileCommand, ShutoffCommand,
};
use crate::error::{Error, Result};
use crate::protocol::{HttpClient, Protocol};
use crate::response::Reply;
use crate::types::{ProfileIndex, ProfileSetting, ShutoffState};

/// A handle to a single SafeTech device.
///
/// The handle is stateless between calls; the only thing it owns is the
/// transport. Operations are attempted exactly once, with no retries.
///
/// # Examples
///
/// ```no_run
/// use safetec_lib::SafeTec;
/// use safetec_lib::types::ShutoffState;
///
/// #[tokio::main]
/// async fn main() -> safetec_lib::Result<()> {
///     let device = SafeTec::http("192.168.1.42")?;
///
///     let state = device.shutoff_state().await?;
///     if state == ShutoffState::Open {
///         device.set_shutoff(ShutoffState::Closed).await?;
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SafeTec<P> {
    protocol: P,
}

impl SafeTec<HttpClient> {
    /// Creates a device handle over HTTP with default settings
    /// (port 5333, 5 second timeout).
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or the HTTP client cannot
    /// be created.
    pub fn http(host: impl Into<String>) -> Result<Self> {
        let client = HttpClient::new(host).map_err(Error::Protocol)?;
        Ok(Self::new(client))
    }
}

impl<P: Protocol> SafeTec<P> {
    /// Creates a device handle over the given transport.
    #[must_use]
    pub fn new(protocol: P) -> Self {
        Self { protocol }
    }

    /// Returns a reference to the underlying transport.
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    async fn reply<C: Command + Sync>(&self, command: &C) -> Result<Reply> {
        let response = self.protocol.send_command(command).await?;
        Ok(response.reply()?)
    }

    /// Reads the current shutoff valve position.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure, a parse error on
    /// a malformed response, or a value error if the device reports a
    /// position other than 1 or 2.
    pub async fn shutoff_state(&self) -> Result<ShutoffState> {
        let cmd = ShutoffCommand::Get;
        let value = self.reply(&cmd).await?.integer(&cmd.response_key())?;
        Ok(ShutoffState::from_num(value)?)
    }

    /// Sets the shutoff valve position.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure or a parse error
    /// if the device does not acknowledge with `"OK"`.
    pub async fn set_shutoff(&self, state: ShutoffState) -> Result<ShutoffState> {
        let cmd = ShutoffCommand::Set(state);
        self.reply(&cmd).await?.ack(&cmd.response_key())?;
        Ok(state)
    }

    /// Reads the currently selected profile.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure, a parse error on
    /// a malformed response, or a value error if the reported profile
    /// is outside 1..=8.
    pub async fn selected_profile(&self) -> Result<ProfileIndex> {
        let cmd = SelectProfileCommand::Get;
        let value = self.reply(&cmd).await?.integer(&cmd.response_key())?;
        Ok(ProfileIndex::from_value(value)?)
    }

    /// Selects a profile.
    ///
    /// The target profile is first marked active (`PA{n}` = 1), then
    /// selected (`PRF` = n), in that order. The sequence is not
    /// transactional; a failure between the two calls leaves the first
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure or a parse error
    /// if either step is not acknowledged.
    pub async fn select_profile(&self, profile: ProfileIndex) -> Result<ProfileIndex> {
        self.set_profile_availability(profile, true).await?;

        let cmd = SelectProfileCommand::Set(profile);
        self.reply(&cmd).await?.ack(&cmd.response_key())?;
        Ok(profile)
    }

    /// Reads the number of profiles stored on the device.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure or a parse error
    /// on a malformed response.
    pub async fn profile_count(&self) -> Result<i64> {
        let cmd = ProfileCountCommand;
        Ok(self.reply(&cmd).await?.integer(&cmd.response_key())?)
    }

    /// Reads whether a profile is active.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure or a parse error
    /// if the device reports anything other than 0 or 1.
    pub async fn profile_availability(&self, profile: ProfileIndex) -> Result<bool> {
        let cmd = ProfileAvailabilityCommand::Get(profile);
        let key = cmd.response_key();
        match self.reply(&cmd).await?.integer(&key)? {
            1 => Ok(true),
            0 => Ok(false),
            other => Err(crate::error::ParseError::InvalidValue {
                key,
                message: format!("expected 0 or 1, got {other}"),
            }
            .into()),
        }
    }

    /// Activates or deactivates a profile.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure or a parse error
    /// if the device does not acknowledge with `"OK"`.
    pub async fn set_profile_availability(
        &self,
        profile: ProfileIndex,
        active: bool,
    ) -> Result<()> {
        let cmd = ProfileAvailabilityCommand::Set { profile, active };
        self.reply(&cmd).await?.ack(&cmd.response_key())?;
        Ok(())
    }

    /// Scans profiles 1 through 8 and returns the active ones, in
    /// ascending order.
    ///
    /// An unparseable availability response counts as inactive (with a
    /// warning); a transport failure aborts the scan.
    ///
    /// # Errors
    ///
    /// Returns a protocol error if any of the eight requests fails at
    /// the transport layer.
    pub async fn active_profiles(&self) -> Result<Vec<ProfileIndex>> {
        let mut active = Vec::new();
        for profile in ProfileIndex::all() {
            match self.profile_availability(profile).await {
                Ok(true) => active.push(profile),
                Ok(false) => {}
                Err(e) if e.is_communication() => return Err(e),
                Err(e) => {
                    tracing::warn!(profile = %profile, error = %e, "skipping unreadable profile availability");
                }
            }
        }
        Ok(active)
    }

    /// Reads the name of a profile.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure or a parse error
    /// on a malformed response.
    pub async fn profile_name(&self, profile: ProfileIndex) -> Result<String> {
        let cmd = ProfileNameCommand::Get(profile);
        Ok(self.reply(&cmd).await?.text(&cmd.response_key())?)
    }

    /// Renames a profile and returns the acknowledged name.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure or a parse error
    /// if the device does not acknowledge with `"OK"`.
    pub async fn set_profile_name(
        &self,
        profile: ProfileIndex,
        name: impl Into<String>,
    ) -> Result<String> {
        let name = name.into();
        let cmd = ProfileNameCommand::Set {
            profile,
            name: name.clone(),
        };
        self.reply(&cmd).await?.ack(&cmd.response_key())?;
        Ok(name)
    }

    /// Reads a profile-scoped setting as plain text.
    ///
    /// Switch-typed settings report `"1"` for on; callers coerce.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure or a parse error
    /// on a malformed response.
    pub async fn profile_setting(
        &self,
        setting: ProfileSetting,
        profile: ProfileIndex,
    ) -> Result<String> {
        let cmd = ProfileSettingCommand::new(setting, profile);
        Ok(self.reply(&cmd).await?.text(&cmd.response_key())?)
    }
}
