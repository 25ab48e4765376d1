// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Profile-related types.
//!
//! SafeTech devices store up to 8 profiles controlling valve behavior
//! (flow limits, timing, warnings). Exactly one profile is selected at
//! a time; profile-scoped settings always address a concrete profile.

use std::fmt;

use crate::channel::Channel;
use crate::error::ValueError;

/// Index of a device profile, 1 through 8.
///
/// # Examples
///
/// ```
/// use safetec_lib::types::ProfileIndex;
///
/// let idx = ProfileIndex::new(3).unwrap();
/// assert_eq!(idx.value(), 3);
///
/// assert!(ProfileIndex::new(0).is_err());
/// assert!(ProfileIndex::new(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileIndex(u8);

impl ProfileIndex {
    /// Lowest valid profile index.
    pub const MIN: u8 = 1;
    /// Highest valid profile index.
    pub const MAX: u8 = 8;

    /// Creates a new profile index.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the index is not in 1..=8.
    pub const fn new(index: u8) -> Result<Self, ValueError> {
        if index < Self::MIN || index > Self::MAX {
            return Err(ValueError::OutOfRange {
                min: Self::MIN as i64,
                max: Self::MAX as i64,
                actual: index as i64,
            });
        }
        Ok(Self(index))
    }

    /// Creates a profile index from a signed value, as received in
    /// commands or parsed from responses.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is not in 1..=8.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_value(value: i64) -> Result<Self, ValueError> {
        if value < Self::MIN as i64 || value > Self::MAX as i64 {
            return Err(ValueError::OutOfRange {
                min: Self::MIN as i64,
                max: Self::MAX as i64,
                actual: value,
            });
        }
        Ok(Self(value as u8))
    }

    /// Returns the numeric value of the index.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Iterates over all valid profile indices, 1 through 8.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl fmt::Display for ProfileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A profile-scoped device setting.
///
/// Each setting has a two-letter protocol code that combines with a
/// profile index into a mnemonic, e.g. `PV3` for the volume level of
/// profile 3. The microleakage, buzzer and leakage-warning settings are
/// switch-typed: the device reports `"1"` for on and anything else
/// means off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileSetting {
    /// Volume limit (`PV`).
    VolumeLevel,
    /// Time limit (`PT`).
    TimeLevel,
    /// Maximum flow (`PF`).
    MaxFlow,
    /// Return time (`PR`).
    ReturnTime,
    /// Microleakage check (`PM`).
    Microleakage,
    /// Buzzer (`PB`).
    BuzzerOn,
    /// Leakage warning (`PW`).
    LeakageWarningOn,
}

impl ProfileSetting {
    /// All profile settings in the order they are refreshed.
    pub const ALL: [Self; 7] = [
        Self::VolumeLevel,
        Self::TimeLevel,
        Self::MaxFlow,
        Self::ReturnTime,
        Self::Microleakage,
        Self::BuzzerOn,
        Self::LeakageWarningOn,
    ];

    /// Returns the two-letter protocol code for this setting.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::VolumeLevel => "PV",
            Self::TimeLevel => "PT",
            Self::MaxFlow => "PF",
            Self::ReturnTime => "PR",
            Self::Microleakage => "PM",
            Self::BuzzerOn => "PB",
            Self::LeakageWarningOn => "PW",
        }
    }

    /// Returns `true` if the setting is switch-typed (on/off).
    #[must_use]
    pub const fn is_switch(&self) -> bool {
        matches!(
            self,
            Self::Microleakage | Self::BuzzerOn | Self::LeakageWarningOn
        )
    }

    /// Returns the channel this setting is exposed on.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        match self {
            Self::VolumeLevel => Channel::ProfileVolumeLevel,
            Self::TimeLevel => Channel::ProfileTimeLevel,
            Self::MaxFlow => Channel::ProfileMaxFlow,
            Self::ReturnTime => Channel::ProfileReturnTime,
            Self::Microleakage => Channel::ProfileMicroleakage,
            Self::BuzzerOn => Channel::ProfileBuzzerOn,
            Self::LeakageWarningOn => Channel::ProfileLeakageWarningOn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_index_valid_range() {
        for i in 1..=8 {
            let idx = ProfileIndex::new(i).unwrap();
            assert_eq!(idx.value(), i);
        }
    }

    #[test]
    fn profile_index_out_of_range() {
        assert!(matches!(
            ProfileIndex::new(0),
            Err(ValueError::OutOfRange { actual: 0, .. })
        ));
        assert!(matches!(
            ProfileIndex::new(9),
            Err(ValueError::OutOfRange { actual: 9, .. })
        ));
    }

    #[test]
    fn profile_index_from_value() {
        assert_eq!(ProfileIndex::from_value(5).unwrap().value(), 5);
        assert!(ProfileIndex::from_value(-1).is_err());
        assert!(ProfileIndex::from_value(100).is_err());
    }

    #[test]
    fn profile_index_all() {
        let all: Vec<u8> = ProfileIndex::all().map(|p| p.value()).collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn profile_setting_codes() {
        assert_eq!(ProfileSetting::VolumeLevel.code(), "PV");
        assert_eq!(ProfileSetting::TimeLevel.code(), "PT");
        assert_eq!(ProfileSetting::MaxFlow.code(), "PF");
        assert_eq!(ProfileSetting::ReturnTime.code(), "PR");
        assert_eq!(ProfileSetting::Microleakage.code(), "PM");
        assert_eq!(ProfileSetting::BuzzerOn.code(), "PB");
        assert_eq!(ProfileSetting::LeakageWarningOn.code(), "PW");
    }

    #[test]
    fn profile_setting_switch_typing() {
        assert!(ProfileSetting::Microleakage.is_switch());
        assert!(ProfileSetting::BuzzerOn.is_switch());
        assert!(ProfileSetting::LeakageWarningOn.is_switch());
        assert!(!ProfileSetting::VolumeLevel.is_switch());
        assert!(!ProfileSetting::MaxFlow.is_switch());
    }
}
