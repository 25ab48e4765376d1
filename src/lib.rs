// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `SafeTec` Lib - A Rust library for SYR SafeTech Connect valves.
//!
//! This library provides async APIs to monitor and control SafeTech
//! water leakage-protection valves over their HTTP/JSON API, and an
//! adapter that exposes the device as twelve named, typed channels to a
//! home-automation host.
//!
//! # Supported Features
//!
//! - **Shutoff control**: Open, close and toggle the valve
//! - **Profile management**: Select, activate and rename the up to 8
//!   stored profiles
//! - **Profile settings**: Volume, time and flow limits, return time,
//!   microleakage check, buzzer, leakage warning
//! - **Channel adapter**: Host-facing command dispatch with full-refresh
//!   and online/offline status tracking
//!
//! # Quick Start
//!
//! ## Device handle
//!
//! ```no_run
//! use safetec_lib::SafeTec;
//! use safetec_lib::types::ShutoffState;
//!
//! #[tokio::main]
//! async fn main() -> safetec_lib::Result<()> {
//!     let device = SafeTec::http("192.168.1.42")?;
//!
//!     // Close the valve
//!     device.set_shutoff(ShutoffState::Closed).await?;
//!
//!     // Which profile is running?
//!     let profile = device.selected_profile().await?;
//!     let name = device.profile_name(profile).await?;
//!     println!("profile {profile}: {name}");
//!     Ok(())
//! }
//! ```
//!
//! ## Channel adapter
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
//!     // Poll every channel once
//!     adapter.refresh_all().await;
//!
//!     // Toggle the valve
//!     adapter
//!         .handle_command(Channel::Shutoff, AdapterCommand::Switch(true))
//!         .await;
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod channel;
pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use adapter::{AdapterCommand, ChannelSink, SafeTecAdapter};
pub use channel::{Channel, ChannelValue, DeviceStatus};
pub use command::{
    Command, ProfileAvailabilityCommand, ProfileCountCommand, ProfileNameCommand,
    ProfileSettingCommand, SelectProfileCommand, ShutoffCommand,
};
pub use device::SafeTec;
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{HttpClient, HttpConfig};
pub use response::Reply;
pub use types::{ProfileIndex, ProfileSetting, ShutoffState};
