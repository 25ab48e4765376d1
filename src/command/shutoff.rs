// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shutoff valve commands.

use crate::command::{Action, Command};
use crate::types::ShutoffState;

/// Command to read or set the shutoff valve position (`AB`).
///
/// # Examples
///
/// ```
/// use safetec_lib::command::{Command, ShutoffCommand};
/// use safetec_lib::types::ShutoffState;
///
/// let query = ShutoffCommand::Get;
/// assert_eq!(query.to_path(), "/safe-tec/get/AB");
/// assert_eq!(query.response_key(), "getAB");
///
/// let close = ShutoffCommand::Set(ShutoffState::Closed);
/// assert_eq!(close.to_path(), "/safe-tec/set/AB/2");
/// assert_eq!(close.response_key(), "setAB2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutoffCommand {
    /// Query the current valve position.
    Get,
    /// Set the valve position.
    Set(ShutoffState),
}

impl Command for ShutoffCommand {
    fn action(&self) -> Action {
        match self {
            Self::Get => Action::Get,
            Self::Set(_) => Action::Set,
        }
    }

    fn mnemonic(&self) -> String {
        "AB".to_string()
    }

    fn parameter(&self) -> Option<String> {
        match self {
            Self::Get => None,
            Self::Set(state) => Some(state.as_num().to_string()),
        }
    }

    fn response_key(&self) -> String {
        match self {
            Self::Get => "getAB".to_string(),
            Self::Set(state) => format!("setAB{}", state.as_num()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_command() {
        let cmd = ShutoffCommand::Get;
        assert_eq!(cmd.action(), Action::Get);
        assert_eq!(cmd.mnemonic(), "AB");
        assert_eq!(cmd.parameter(), None);
        assert_eq!(cmd.response_key(), "getAB");
    }

    #[test]
    fn set_open() {
        let cmd = ShutoffCommand::Set(ShutoffState::Open);
        assert_eq!(cmd.parameter(), Some("1".to_string()));
        assert_eq!(cmd.response_key(), "setAB1");
    }

    #[test]
    fn set_closed() {
        let cmd = ShutoffCommand::Set(ShutoffState::Closed);
        assert_eq!(cmd.parameter(), Some("2".to_string()));
        assert_eq!(cmd.response_key(), "setAB2");
    }
}
