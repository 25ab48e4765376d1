// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channels exposed to the host automation framework.
//!
//! A channel is a named, typed point of state. The adapter translates
//! host commands addressed to a channel into device requests and
//! reflects the results back as [`ChannelValue`] updates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The channels exposed by a SafeTech device.
///
/// Serializes as the channel id string, e.g. `"selectProfile"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    /// Shutoff valve position (1 = open, 2 = closed).
    Shutoff,
    /// Currently selected profile (1-8).
    SelectProfile,
    /// Number of profiles stored on the device.
    NumberOfProfiles,
    /// Whether the selected profile is active.
    ProfileAvailability,
    /// Name of the selected profile.
    ProfileName,
    /// Volume limit of the selected profile.
    ProfileVolumeLevel,
    /// Time limit of the selected profile.
    ProfileTimeLevel,
    /// Maximum flow of the selected profile.
    ProfileMaxFlow,
    /// Return time of the selected profile.
    ProfileReturnTime,
    /// Microleakage check of the selected profile.
    ProfileMicroleakage,
    /// Buzzer setting of the selected profile.
    ProfileBuzzerOn,
    /// Leakage warning setting of the selected profile.
    ProfileLeakageWarningOn,
}

impl Channel {
    /// All channels, in refresh order.
    pub const ALL: [Self; 12] = [
        Self::Shutoff,
        Self::SelectProfile,
        Self::NumberOfProfiles,
        Self::ProfileAvailability,
        Self::ProfileName,
        Self::ProfileVolumeLevel,
        Self::ProfileTimeLevel,
        Self::ProfileMaxFlow,
        Self::ProfileReturnTime,
        Self::ProfileMicroleakage,
        Self::ProfileBuzzerOn,
        Self::ProfileLeakageWarningOn,
    ];

    /// Returns the channel id string used by the host framework.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shutoff => "shutoff",
            Self::SelectProfile => "selectProfile",
            Self::NumberOfProfiles => "numberOfProfiles",
            Self::ProfileAvailability => "profileAvailability",
            Self::ProfileName => "profileName",
            Self::ProfileVolumeLevel => "profileVolumeLevel",
            Self::ProfileTimeLevel => "profileTimeLevel",
            Self::ProfileMaxFlow => "profileMaxFlow",
            Self::ProfileReturnTime => "profileReturnTime",
            Self::ProfileMicroleakage => "profileMicroleakage",
            Self::ProfileBuzzerOn => "profileBuzzerOn",
            Self::ProfileLeakageWarningOn => "profileLeakageWarningOn",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a channel id string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChannel(pub String);

impl fmt::Display for UnknownChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown channel: {}", self.0)
    }
}

impl std::error::Error for UnknownChannel {}

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownChannel(s.to_string()))
    }
}

/// A typed value carried by a channel update.
///
/// Serializes untagged, as the bare number, boolean or string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelValue {
    /// A numeric value.
    Number(i64),
    /// An on/off value.
    Switch(bool),
    /// A plain-text value.
    Text(String),
}

impl fmt::Display for ChannelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Switch(true) => write!(f, "ON"),
            Self::Switch(false) => write!(f, "OFF"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Reachability of the device as observed by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    /// No refresh has completed yet.
    Unknown,
    /// The last full refresh completed.
    Online,
    /// A communication failure occurred.
    Offline {
        /// Description of the underlying failure.
        detail: String,
    },
}

impl DeviceStatus {
    /// Creates an offline status with the given failure detail.
    #[must_use]
    pub fn offline(detail: impl Into<String>) -> Self {
        Self::Offline {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_ids_round_trip() {
        for channel in Channel::ALL {
            let parsed: Channel = channel.as_str().parse().unwrap();
            assert_eq!(parsed, channel);
        }
    }

    #[test]
    fn channel_from_str_unknown() {
        let result = "dimmer".parse::<Channel>();
        assert_eq!(result, Err(UnknownChannel("dimmer".to_string())));
    }

    #[test]
    fn channel_count() {
        assert_eq!(Channel::ALL.len(), 12);
    }

    #[test]
    fn channel_value_display() {
        assert_eq!(ChannelValue::Number(2).to_string(), "2");
        assert_eq!(ChannelValue::Switch(true).to_string(), "ON");
        assert_eq!(ChannelValue::Switch(false).to_string(), "OFF");
        assert_eq!(ChannelValue::Text("Home".to_string()).to_string(), "Home");
    }

    #[test]
    fn channel_serializes_to_id_string() {
        for channel in Channel::ALL {
            let value = serde_json::to_value(channel).unwrap();
            assert_eq!(value, serde_json::Value::String(channel.as_str().to_string()));
            let back: Channel = serde_json::from_value(value).unwrap();
            assert_eq!(back, channel);
        }
    }

    #[test]
    fn channel_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&ChannelValue::Number(2)).unwrap(), "2");
        assert_eq!(
            serde_json::to_string(&ChannelValue::Switch(true)).unwrap(),
            "true"
        );
        assert_eq!(
            serde_json::to_string(&ChannelValue::Text("Home".to_string())).unwrap(),
            r#""Home""#
        );
    }

    #[test]
    fn channel_value_deserializes_by_shape() {
        assert_eq!(
            serde_json::from_str::<ChannelValue>("7").unwrap(),
            ChannelValue::Number(7)
        );
        assert_eq!(
            serde_json::from_str::<ChannelValue>("false").unwrap(),
            ChannelValue::Switch(false)
        );
        assert_eq!(
            serde_json::from_str::<ChannelValue>(r#""Garden""#).unwrap(),
            ChannelValue::Text("Garden".to_string())
        );
    }

    #[test]
    fn device_status_round_trips() {
        for status in [
            DeviceStatus::Unknown,
            DeviceStatus::Online,
            DeviceStatus::offline("request timed out after 5000 ms"),
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: DeviceStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn device_status_offline_detail() {
        let status = DeviceStatus::offline("connection refused");
        assert_eq!(
            status,
            DeviceStatus::Offline {
                detail: "connection refused".to_string()
            }
        );
    }
}
