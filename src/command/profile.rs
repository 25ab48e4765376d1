// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Profile selection and management commands.

use crate::command::{Action, Command};
use crate::types::ProfileIndex;

/// Command to read or set the selected profile (`PRF`).
///
/// # Examples
///
/// ```
/// use safetec_lib::command::{Command, SelectProfileCommand};
/// use safetec_lib::types::ProfileIndex;
///
/// let cmd = SelectProfileCommand::Set(ProfileIndex::new(3).unwrap());
/// assert_eq!(cmd.to_path(), "/safe-tec/set/PRF/3");
/// assert_eq!(cmd.response_key(), "setPRF3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectProfileCommand {
    /// Query the currently selected profile.
    Get,
    /// Select a profile.
    Set(ProfileIndex),
}

impl Command for SelectProfileCommand {
    fn action(&self) -> Action {
        match self {
            Self::Get => Action::Get,
            Self::Set(_) => Action::Set,
        }
    }

    fn mnemonic(&self) -> String {
        "PRF".to_string()
    }

    fn parameter(&self) -> Option<String> {
        match self {
            Self::Get => None,
            Self::Set(profile) => Some(profile.to_string()),
        }
    }

    fn response_key(&self) -> String {
        match self {
            Self::Get => "getPRF".to_string(),
            Self::Set(profile) => format!("setPRF{profile}"),
        }
    }
}

/// Command to read the number of stored profiles (`PRn`).
///
/// The request mnemonic is `PRn` but the device reports the value under
/// `getPRN`, uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileCountCommand;

impl Command for ProfileCountCommand {
    fn action(&self) -> Action {
        Action::Get
    }

    fn mnemonic(&self) -> String {
        "PRn".to_string()
    }

    fn parameter(&self) -> Option<String> {
        None
    }

    fn response_key(&self) -> String {
        "getPRN".to_string()
    }
}

/// Command to read or set whether a profile is active (`PA{n}`).
///
/// # Examples
///
/// ```
/// use safetec_lib::command::{Command, ProfileAvailabilityCommand};
/// use safetec_lib::types::ProfileIndex;
///
/// let profile = ProfileIndex::new(2).unwrap();
/// let cmd = ProfileAvailabilityCommand::Set { profile, active: true };
/// assert_eq!(cmd.to_path(), "/safe-tec/set/PA2/1");
/// assert_eq!(cmd.response_key(), "setPA21");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAvailabilityCommand {
    /// Query whether a profile is active.
    Get(ProfileIndex),
    /// Activate or deactivate a profile.
    Set {
        /// The profile to change.
        profile: ProfileIndex,
        /// Whether the profile should be active.
        active: bool,
    },
}

impl ProfileAvailabilityCommand {
    const fn status_digit(active: bool) -> &'static str {
        if active { "1" } else { "0" }
    }
}

impl Command for ProfileAvailabilityCommand {
    fn action(&self) -> Action {
        match self {
            Self::Get(_) => Action::Get,
            Self::Set { .. } => Action::Set,
        }
    }

    fn mnemonic(&self) -> String {
        match self {
            Self::Get(profile) | Self::Set { profile, .. } => format!("PA{profile}"),
        }
    }

    fn parameter(&self) -> Option<String> {
        match self {
            Self::Get(_) => None,
            Self::Set { active, .. } => Some(Self::status_digit(*active).to_string()),
        }
    }

    fn response_key(&self) -> String {
        match self {
            Self::Get(profile) => format!("getPA{profile}"),
            Self::Set { profile, active } => {
                format!("setPA{profile}{}", Self::status_digit(*active))
            }
        }
    }
}

/// Command to read or set a profile name (`PN{n}`).
///
/// The set variant carries the name as a trailing path segment; the
/// device acknowledges under the key `setPN{n}/{name}` with the raw,
/// unencoded name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileNameCommand {
    /// Query the name of a profile.
    Get(ProfileIndex),
    /// Rename a profile.
    Set {
        /// The profile to rename.
        profile: ProfileIndex,
        /// The new profile name.
        name: String,
    },
}

impl Command for ProfileNameCommand {
    fn action(&self) -> Action {
        match self {
            Self::Get(_) => Action::Get,
            Self::Set { .. } => Action::Set,
        }
    }

    fn mnemonic(&self) -> String {
        match self {
            Self::Get(profile) | Self::Set { profile, .. } => format!("PN{profile}"),
        }
    }

    fn parameter(&self) -> Option<String> {
        match self {
            Self::Get(_) => None,
            Self::Set { name, .. } => Some(name.clone()),
        }
    }

    fn response_key(&self) -> String {
        match self {
            Self::Get(profile) => format!("getPN{profile}"),
            Self::Set { profile, name } => format!("setPN{profile}/{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(n: u8) -> ProfileIndex {
        ProfileIndex::new(n).unwrap()
    }

    #[test]
    fn select_profile_get() {
        let cmd = SelectProfileCommand::Get;
        assert_eq!(cmd.to_path(), "/safe-tec/get/PRF");
        assert_eq!(cmd.response_key(), "getPRF");
    }

    #[test]
    fn select_profile_set() {
        let cmd = SelectProfileCommand::Set(profile(8));
        assert_eq!(cmd.to_path(), "/safe-tec/set/PRF/8");
        assert_eq!(cmd.response_key(), "setPRF8");
    }

    #[test]
    fn profile_count_uppercase_response_key() {
        let cmd = ProfileCountCommand;
        assert_eq!(cmd.to_path(), "/safe-tec/get/PRn");
        assert_eq!(cmd.response_key(), "getPRN");
    }

    #[test]
    fn availability_get() {
        let cmd = ProfileAvailabilityCommand::Get(profile(4));
        assert_eq!(cmd.to_path(), "/safe-tec/get/PA4");
        assert_eq!(cmd.response_key(), "getPA4");
    }

    #[test]
    fn availability_set_off() {
        let cmd = ProfileAvailabilityCommand::Set {
            profile: profile(5),
            active: false,
        };
        assert_eq!(cmd.to_path(), "/safe-tec/set/PA5/0");
        assert_eq!(cmd.response_key(), "setPA50");
    }

    #[test]
    fn name_get() {
        let cmd = ProfileNameCommand::Get(profile(1));
        assert_eq!(cmd.to_path(), "/safe-tec/get/PN1");
        assert_eq!(cmd.response_key(), "getPN1");
    }

    #[test]
    fn name_set_key_keeps_raw_name() {
        let cmd = ProfileNameCommand::Set {
            profile: profile(2),
            name: "Vacation Home".to_string(),
        };
        assert_eq!(cmd.to_path(), "/safe-tec/set/PN2/Vacation%20Home");
        assert_eq!(cmd.response_key(), "setPN2/Vacation Home");
    }
}
