// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Profile-scoped setting queries.

use crate::command::{Action, Command};
use crate::types::{ProfileIndex, ProfileSetting};

/// Command to read a profile-scoped setting, e.g. `PV3` for the volume
/// level of profile 3. These settings are read-only over this API.
///
/// # Examples
///
/// ```
/// use safetec_lib::command::{Command, ProfileSettingCommand};
/// use safetec_lib::types::{ProfileIndex, ProfileSetting};
///
/// let cmd = ProfileSettingCommand::new(
///     ProfileSetting::MaxFlow,
///     ProfileIndex::new(3).unwrap(),
/// );
/// assert_eq!(cmd.to_path(), "/safe-tec/get/PF3");
/// assert_eq!(cmd.response_key(), "getPF3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSettingCommand {
    setting: ProfileSetting,
    profile: ProfileIndex,
}

impl ProfileSettingCommand {
    /// Creates a query for the given setting of the given profile.
    #[must_use]
    pub const fn new(setting: ProfileSetting, profile: ProfileIndex) -> Self {
        Self { setting, profile }
    }

    /// Returns the setting this command queries.
    #[must_use]
    pub const fn setting(&self) -> ProfileSetting {
        self.setting
    }

    /// Returns the profile this command addresses.
    #[must_use]
    pub const fn profile(&self) -> ProfileIndex {
        self.profile
    }
}

impl Command for ProfileSettingCommand {
    fn action(&self) -> Action {
        Action::Get
    }

    fn mnemonic(&self) -> String {
        format!("{}{}", self.setting.code(), self.profile)
    }

    fn parameter(&self) -> Option<String> {
        None
    }

    fn response_key(&self) -> String {
        format!("get{}{}", self.setting.code(), self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_paths_and_keys() {
        let profile = ProfileIndex::new(2).unwrap();
        let cases = [
            (ProfileSetting::VolumeLevel, "/safe-tec/get/PV2", "getPV2"),
            (ProfileSetting::TimeLevel, "/safe-tec/get/PT2", "getPT2"),
            (ProfileSetting::MaxFlow, "/safe-tec/get/PF2", "getPF2"),
            (ProfileSetting::ReturnTime, "/safe-tec/get/PR2", "getPR2"),
            (ProfileSetting::Microleakage, "/safe-tec/get/PM2", "getPM2"),
            (ProfileSetting::BuzzerOn, "/safe-tec/get/PB2", "getPB2"),
            (
                ProfileSetting::LeakageWarningOn,
                "/safe-tec/get/PW2",
                "getPW2",
            ),
        ];
        for (setting, path, key) in cases {
            let cmd = ProfileSettingCommand::new(setting, profile);
            assert_eq!(cmd.to_path(), path);
            assert_eq!(cmd.response_key(), key);
        }
    }

    #[test]
    fn setting_accessors() {
        let profile = ProfileIndex::new(7).unwrap();
        let cmd = ProfileSettingCommand::new(ProfileSetting::BuzzerOn, profile);
        assert_eq!(cmd.setting(), ProfileSetting::BuzzerOn);
        assert_eq!(cmd.profile(), profile);
    }
}
