// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel adapter for host automation frameworks.
//!
//! [`SafeTecAdapter`] sits between a host framework and a single device.
//! It receives commands addressed to one of the twelve channels,
//! translates each into device requests and reflects the results back
//! through a [`ChannelSink`].
//!
//! The adapter never propagates errors to the caller: domain-validation
//! failures are rejected before any request, parse failures degrade to
//! a logged warning with no channel update, and transport failures are
//! logged and, on a full refresh, reported as an offline status.
//!
//! # Examples
//!
//! ```no_run
//! use safetec_lib::adapter::{AdapterCommand, ChannelSink, SafeTecAdapter};
//! use safetec_lib::channel::{Channel, ChannelValue, DeviceStatus};
//! use safetec_lib::SafeTec;
//!
//! struct PrintSink;
//!
//! impl ChannelSink for PrintSink {
//!     fn channel_updated(&mut self, channel: Channel, value: ChannelValue) {
//!         println!("{channel} = {value}");
//!     }
//!     fn status_changed(&mut self, status: DeviceStatus) {
//!         println!("device is {status:?}");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> safetec_lib::Result<()> {
//!     let device = SafeTec::http("192.168.1.42")?;
//!     let mut adapter = SafeTecAdapter::new(device, PrintSink);
//!
//!     adapter.refresh_all().await;
//!     adapter
//!         .handle_command(Channel::Shutoff, AdapterCommand::Switch(true))
//!         .await;
//!     Ok(())
//! }
//! ```

use crate::channel::{Channel, ChannelValue, DeviceStatus};
use crate::device::SafeTec;
use crate::error::{Error, Result};
use crate::protocol::Protocol;
use crate::types::{ProfileIndex, ProfileSetting, ShutoffState};

/// Host-side sink receiving channel and status updates.
pub trait ChannelSink {
    /// Called when a channel has a new value.
    fn channel_updated(&mut self, channel: Channel, value: ChannelValue);

    /// Called when the device reachability changes.
    fn status_changed(&mut self, status: DeviceStatus);
}

/// A command delivered by the host framework to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterCommand {
    /// Re-read the channel from the device.
    Refresh,
    /// A numeric value.
    Number(i64),
    /// An on/off value.
    Switch(bool),
    /// A text value.
    Text(String),
}

/// Adapter binding a device to a host channel sink.
///
/// Handles one logical command at a time; the device address is the
/// only state carried across calls.
#[derive(Debug)]
pub struct SafeTecAdapter<P, S> {
    device: SafeTec<P>,
    sink: S,
}

impl<P: Protocol, S: ChannelSink> SafeTecAdapter<P, S> {
    /// Creates an adapter and reports an initial `Unknown` status.
    pub fn new(device: SafeTec<P>, mut sink: S) -> Self {
        sink.status_changed(DeviceStatus::Unknown);
        Self { device, sink }
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the adapter, returning the device handle and the sink.
    pub fn into_parts(self) -> (SafeTec<P>, S) {
        (self.device, self.sink)
    }

    /// Dispatches a host command addressed to a channel.
    ///
    /// Side effects: zero or more device requests, zero or one channel
    /// update per affected channel, zero or one status update. Never
    /// returns an error; all failures are logged.
    pub async fn handle_command(&mut self, channel: Channel, command: AdapterCommand) {
        match channel {
            Channel::Shutoff => self.handle_shutoff(command).await,
            Channel::SelectProfile => self.handle_select_profile(command).await,
            Channel::NumberOfProfiles => self.handle_profile_count(command).await,
            Channel::ProfileAvailability => self.handle_availability(command).await,
            Channel::ProfileName => self.handle_profile_name(command).await,
            Channel::ProfileVolumeLevel
            | Channel::ProfileTimeLevel
            | Channel::ProfileMaxFlow
            | Channel::ProfileReturnTime
            | Channel::ProfileMicroleakage
            | Channel::ProfileBuzzerOn
            | Channel::ProfileLeakageWarningOn => self.handle_setting(channel, command).await,
        }
    }

    /// Refreshes all twelve channels in sequence.
    ///
    /// Order: shutoff, selected profile, profile count, then the
    /// profile-scoped channels, all addressing the profile returned by
    /// the single selected-profile query taken at the start. A
    /// transport failure aborts the sequence and marks the device
    /// offline with the failure detail; completion marks it online.
    /// The sequence is not transactional: updates made before a
    /// failure remain in place.
    pub async fn refresh_all(&mut self) {
        match self.run_refresh().await {
            Ok(()) => self.sink.status_changed(DeviceStatus::Online),
            Err(e) => {
                tracing::error!(error = %e, "full refresh failed");
                self.sink.status_changed(DeviceStatus::offline(e.to_string()));
            }
        }
    }

    async fn run_refresh(&mut self) -> Result<()> {
        if let Some(state) = degrade(self.device.shutoff_state().await)? {
            self.update(Channel::Shutoff, ChannelValue::Number(state.as_num()));
        }

        let selected = degrade(self.device.selected_profile().await)?;
        if let Some(profile) = selected {
            self.update(
                Channel::SelectProfile,
                ChannelValue::Number(i64::from(profile.value())),
            );
        }

        if let Some(count) = degrade(self.device.profile_count().await)? {
            self.update(Channel::NumberOfProfiles, ChannelValue::Number(count));
        }

        let Some(selected) = selected else {
            tracing::warn!("selected profile unavailable, skipping profile-scoped channels");
            return Ok(());
        };

        if let Some(active) = degrade(self.device.profile_availability(selected).await)? {
            self.update(Channel::ProfileAvailability, ChannelValue::Switch(active));
        }

        if let Some(name) = degrade(self.device.profile_name(selected).await)? {
            if name.is_empty() {
                tracing::warn!(profile = %selected, "empty profile name received");
            } else {
                self.update(Channel::ProfileName, ChannelValue::Text(name));
            }
        }

        for setting in ProfileSetting::ALL {
            if let Some(text) = degrade(self.device.profile_setting(setting, selected).await)? {
                self.update(setting.channel(), coerce(setting, text));
            }
        }

        Ok(())
    }

    async fn handle_shutoff(&mut self, command: AdapterCommand) {
        match command {
            AdapterCommand::Refresh => match self.device.shutoff_state().await {
                Ok(state) => {
                    self.update(Channel::Shutoff, ChannelValue::Number(state.as_num()));
                }
                Err(e) => log_failure("shutoff refresh", &e),
            },
            AdapterCommand::Number(value) => {
                let Ok(state) = ShutoffState::from_num(value) else {
                    tracing::warn!(value, "invalid shutoff command");
                    return;
                };
                self.set_shutoff(state).await;
            }
            AdapterCommand::Switch(_) => {
                let current = match self.device.shutoff_state().await {
                    Ok(state) => state,
                    Err(e) => {
                        log_failure("reading current shutoff state", &e);
                        return;
                    }
                };
                self.set_shutoff(current.opposite()).await;
            }
            AdapterCommand::Text(_) => {
                tracing::warn!("invalid command type for shutoff channel");
            }
        }
    }

    async fn set_shutoff(&mut self, state: ShutoffState) {
        match self.device.set_shutoff(state).await {
            Ok(state) => {
                self.update(Channel::Shutoff, ChannelValue::Number(state.as_num()));
            }
            Err(e) => log_failure("setting shutoff state", &e),
        }
    }

    async fn handle_select_profile(&mut self, command: AdapterCommand) {
        match command {
            AdapterCommand::Refresh => match self.device.selected_profile().await {
                Ok(profile) => {
                    self.update(
                        Channel::SelectProfile,
                        ChannelValue::Number(i64::from(profile.value())),
                    );
                }
                Err(e) => log_failure("select profile refresh", &e),
            },
            AdapterCommand::Number(value) => {
                let Ok(profile) = ProfileIndex::from_value(value) else {
                    tracing::warn!(value, "invalid select profile command");
                    return;
                };
                if self.select_profile(profile).await {
                    self.refresh_all().await;
                }
            }
            AdapterCommand::Switch(_) | AdapterCommand::Text(_) => {
                tracing::warn!("invalid command type for selectProfile channel");
            }
        }
    }

    /// Selects a profile and updates the channel. Returns `true` on
    /// success.
    async fn select_profile(&mut self, profile: ProfileIndex) -> bool {
        match self.device.select_profile(profile).await {
            Ok(profile) => {
                self.update(
                    Channel::SelectProfile,
                    ChannelValue::Number(i64::from(profile.value())),
                );
                true
            }
            Err(e) => {
                log_failure("selecting profile", &e);
                false
            }
        }
    }

    async fn handle_profile_count(&mut self, command: AdapterCommand) {
        match command {
            AdapterCommand::Refresh => match self.device.profile_count().await {
                Ok(count) => {
                    self.update(Channel::NumberOfProfiles, ChannelValue::Number(count));
                }
                Err(e) => log_failure("profile count refresh", &e),
            },
            _ => {
                tracing::warn!("numberOfProfiles channel is read-only");
            }
        }
    }

    async fn handle_availability(&mut self, command: AdapterCommand) {
        let active = match command {
            AdapterCommand::Refresh => {
                let Some(selected) = self.read_selected_profile().await else {
                    return;
                };
                match self.device.profile_availability(selected).await {
                    Ok(active) => {
                        self.update(Channel::ProfileAvailability, ChannelValue::Switch(active));
                    }
                    Err(e) => log_failure("profile availability refresh", &e),
                }
                return;
            }
            AdapterCommand::Number(1) | AdapterCommand::Switch(true) => true,
            AdapterCommand::Number(0) | AdapterCommand::Switch(false) => false,
            AdapterCommand::Number(value) => {
                tracing::warn!(value, "invalid profile availability command");
                return;
            }
            AdapterCommand::Text(_) => {
                tracing::warn!("invalid command type for profileAvailability channel");
                return;
            }
        };

        let Some(selected) = self.read_selected_profile().await else {
            return;
        };

        if let Err(e) = self.device.set_profile_availability(selected, active).await {
            log_failure("setting profile availability", &e);
            return;
        }

        if !active {
            self.reselect_after_deactivation(selected).await;
        }
    }

    /// After deactivating the selected profile, moves the selection to
    /// the first remaining active profile. If no other profile is
    /// active the device keeps the deactivated profile selected and a
    /// warning is the only observable effect.
    async fn reselect_after_deactivation(&mut self, deactivated: ProfileIndex) {
        let active = match self.device.active_profiles().await {
            Ok(active) => active,
            Err(e) => {
                log_failure("scanning active profiles", &e);
                return;
            }
        };

        if active.len() > 1 {
            if let Some(&profile) = active.iter().find(|&&p| p != deactivated) {
                self.select_profile(profile).await;
            }
        } else {
            tracing::warn!("cannot deactivate profile as there is no other active profile available");
        }
    }

    async fn handle_profile_name(&mut self, command: AdapterCommand) {
        match command {
            AdapterCommand::Refresh => {
                let Some(selected) = self.read_selected_profile().await else {
                    return;
                };
                match self.device.profile_name(selected).await {
                    Ok(name) if !name.is_empty() => {
                        self.update(Channel::ProfileName, ChannelValue::Text(name));
                    }
                    Ok(_) => tracing::warn!(profile = %selected, "empty profile name received"),
                    Err(e) => log_failure("profile name refresh", &e),
                }
            }
            AdapterCommand::Text(name) => {
                let Some(selected) = self.read_selected_profile().await else {
                    return;
                };
                match self.device.set_profile_name(selected, name).await {
                    Ok(name) if !name.is_empty() => {
                        self.update(Channel::ProfileName, ChannelValue::Text(name));
                    }
                    Ok(_) => tracing::warn!(profile = %selected, "empty profile name set"),
                    Err(e) => log_failure("setting profile name", &e),
                }
            }
            AdapterCommand::Number(_) | AdapterCommand::Switch(_) => {
                tracing::warn!("invalid command type for profileName channel");
            }
        }
    }

    async fn handle_setting(&mut self, channel: Channel, command: AdapterCommand) {
        let Some(setting) = setting_for(channel) else {
            tracing::warn!(channel = %channel, "not a profile setting channel");
            return;
        };

        match command {
            AdapterCommand::Refresh => {
                let Some(selected) = self.read_selected_profile().await else {
                    return;
                };
                match self.device.profile_setting(setting, selected).await {
                    Ok(text) => self.update(channel, coerce(setting, text)),
                    Err(e) => log_failure("profile setting refresh", &e),
                }
            }
            _ => {
                tracing::warn!(channel = %channel, "channel is read-only");
            }
        }
    }

    async fn read_selected_profile(&mut self) -> Option<ProfileIndex> {
        match self.device.selected_profile().await {
            Ok(profile) => Some(profile),
            Err(e) => {
                log_failure("reading selected profile", &e);
                None
            }
        }
    }

    fn update(&mut self, channel: Channel, value: ChannelValue) {
        self.sink.channel_updated(channel, value);
    }
}

/// Degrades parse and validation failures to a logged warning, keeping
/// transport failures as errors for the caller.
fn degrade<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_communication() => Err(e),
        Err(e) => {
            tracing::warn!(error = %e, "invalid response, skipping channel update");
            Ok(None)
        }
    }
}

/// Maps a device setting value onto its channel type. Switch-typed
/// settings treat `"1"` as on and anything else as off.
fn coerce(setting: ProfileSetting, text: String) -> ChannelValue {
    if setting.is_switch() {
        ChannelValue::Switch(text == "1")
    } else {
        ChannelValue::Text(text)
    }
}

const fn setting_for(channel: Channel) -> Option<ProfileSetting> {
    match channel {
        Channel::ProfileVolumeLevel => Some(ProfileSetting::VolumeLevel),
        Channel::ProfileTimeLevel => Some(ProfileSetting::TimeLevel),
        Channel::ProfileMaxFlow => Some(ProfileSetting::MaxFlow),
        Channel::ProfileReturnTime => Some(ProfileSetting::ReturnTime),
        Channel::ProfileMicroleakage => Some(ProfileSetting::Microleakage),
        Channel::ProfileBuzzerOn => Some(ProfileSetting::BuzzerOn),
        Channel::ProfileLeakageWarningOn => Some(ProfileSetting::LeakageWarningOn),
        _ => None,
    }
}

fn log_failure(context: &str, error: &Error) {
    if error.is_communication() {
        tracing::error!(error = %error, "{context} failed");
    } else {
        tracing::warn!(error = %error, "{context} failed");
    }
}
