// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core value types for SafeTech devices.
//!
//! These types enforce the device's domain constraints at construction
//! time, so invalid values are rejected before any network request.

mod profile;
mod shutoff;

pub use profile::{ProfileIndex, ProfileSetting};
pub use shutoff::ShutoffState;
