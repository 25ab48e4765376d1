// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SafeTech command definitions.
//!
//! This module provides typed representations of the device protocol
//! commands. Each command maps deterministically to a URL path of the
//! form `/safe-tec/{action}/{mnemonic}[/{parameter}]` and to the JSON
//! key the device uses in its response.
//!
//! # Available Commands
//!
//! | Command Type | Mnemonic | Purpose |
//! |-------------|----------|---------|
//! | [`ShutoffCommand`] | `AB` | Read or set the valve position |
//! | [`SelectProfileCommand`] | `PRF` | Read or set the selected profile |
//! | [`ProfileCountCommand`] | `PRn` | Read the number of profiles |
//! | [`ProfileAvailabilityCommand`] | `PA{n}` | Read or set profile activation |
//! | [`ProfileNameCommand`] | `PN{n}` | Read or set a profile name |
//! | [`ProfileSettingCommand`] | `PV PT PF PR PM PB PW` | Read profile attributes |
//!
//! # Response keys
//!
//! The device echoes the command back as the single key of a flat JSON
//! object, e.g. `{"getAB": 1}` or `{"setPRF3": "OK"}`. Every command
//! carries its expected response key via [`Command::response_key`] so
//! the parser looks the key up instead of reconstructing it ad hoc.
//!
//! # Examples
//!
//! ```
//! use safetec_lib::command::{Command, ShutoffCommand};
//! use safetec_lib::types::ShutoffState;
//!
//! let cmd = ShutoffCommand::Set(ShutoffState::Closed);
//! assert_eq!(cmd.to_path(), "/safe-tec/set/AB/2");
//! assert_eq!(cmd.response_key(), "setAB2");
//! ```

mod profile;
mod setting;
mod shutoff;

pub use profile::{
    ProfileAvailabilityCommand, ProfileCountCommand, ProfileNameCommand, SelectProfileCommand,
};
pub use setting::ProfileSettingCommand;
pub use shutoff::ShutoffCommand;

/// Whether a command reads from or writes to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Read a value.
    Get,
    /// Write a value.
    Set,
}

impl Action {
    /// Returns the URL path segment for this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
        }
    }
}

/// A command that can be sent to a SafeTech device.
pub trait Command {
    /// Returns whether this is a get or a set command.
    fn action(&self) -> Action;

    /// Returns the command mnemonic, e.g. `"AB"`, `"PRF"`, `"PA3"`.
    fn mnemonic(&self) -> String;

    /// Returns the command parameter, if any.
    ///
    /// For example `Some("2")` for a shutoff set, `None` for any get.
    fn parameter(&self) -> Option<String>;

    /// Returns the JSON key under which the device reports the result.
    ///
    /// For set commands the value at this key must be the literal
    /// string `"OK"`.
    fn response_key(&self) -> String;

    /// Returns the URL path for this command.
    ///
    /// The parameter segment is percent-encoded; mnemonics never need
    /// encoding.
    fn to_path(&self) -> String {
        let mut path = format!("/safe-tec/{}/{}", self.action().as_str(), self.mnemonic());
        if let Some(parameter) = self.parameter() {
            path.push('/');
            path.push_str(&urlencoding::encode(&parameter));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProfileIndex, ShutoffState};

    #[test]
    fn action_path_segments() {
        assert_eq!(Action::Get.as_str(), "get");
        assert_eq!(Action::Set.as_str(), "set");
    }

    #[test]
    fn get_command_path() {
        let cmd = ShutoffCommand::Get;
        assert_eq!(cmd.to_path(), "/safe-tec/get/AB");
    }

    #[test]
    fn set_command_path_with_parameter() {
        let cmd = SelectProfileCommand::Set(ProfileIndex::new(3).unwrap());
        assert_eq!(cmd.to_path(), "/safe-tec/set/PRF/3");
    }

    #[test]
    fn parameter_is_percent_encoded() {
        let cmd = ProfileNameCommand::Set {
            profile: ProfileIndex::new(1).unwrap(),
            name: "Holiday Mode".to_string(),
        };
        assert_eq!(cmd.to_path(), "/safe-tec/set/PN1/Holiday%20Mode");
    }

    #[test]
    fn set_command_response_key() {
        let cmd = ShutoffCommand::Set(ShutoffState::Open);
        assert_eq!(cmd.response_key(), "setAB1");
    }
}
