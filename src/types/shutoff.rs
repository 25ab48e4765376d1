// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shutoff valve state.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Position of the shutoff valve.
///
/// The device encodes the valve position as `1` (open) or `2` (closed).
/// Any other value is invalid and rejected at construction.
///
/// # Examples
///
/// ```
/// use safetec_lib::types::ShutoffState;
///
/// let open = ShutoffState::Open;
/// assert_eq!(open.as_num(), 1);
/// assert_eq!(open.opposite(), ShutoffState::Closed);
///
/// assert!(ShutoffState::from_num(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShutoffState {
    /// Valve is open, water flows.
    Open,
    /// Valve is closed.
    Closed,
}

impl ShutoffState {
    /// Returns the numeric value used by the device protocol.
    #[must_use]
    pub const fn as_num(&self) -> i64 {
        match self {
            Self::Open => 1,
            Self::Closed => 2,
        }
    }

    /// Creates a shutoff state from the device's numeric encoding.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidShutoffState` for any value other
    /// than 1 or 2.
    pub const fn from_num(value: i64) -> Result<Self, ValueError> {
        match value {
            1 => Ok(Self::Open),
            2 => Ok(Self::Closed),
            other => Err(ValueError::InvalidShutoffState(other)),
        }
    }

    /// Returns the opposite valve position.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

impl fmt::Display for ShutoffState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for ShutoffState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Open),
            "2" => Ok(Self::Closed),
            other => Err(ValueError::InvalidShutoffState(
                other.parse().unwrap_or(-1),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutoff_state_numeric_encoding() {
        assert_eq!(ShutoffState::Open.as_num(), 1);
        assert_eq!(ShutoffState::Closed.as_num(), 2);
    }

    #[test]
    fn shutoff_state_from_num() {
        assert_eq!(ShutoffState::from_num(1).unwrap(), ShutoffState::Open);
        assert_eq!(ShutoffState::from_num(2).unwrap(), ShutoffState::Closed);
    }

    #[test]
    fn shutoff_state_from_num_invalid() {
        for value in [0, 3, -1, 99] {
            let result = ShutoffState::from_num(value);
            assert!(matches!(
                result,
                Err(ValueError::InvalidShutoffState(v)) if v == value
            ));
        }
    }

    #[test]
    fn shutoff_state_opposite() {
        assert_eq!(ShutoffState::Open.opposite(), ShutoffState::Closed);
        assert_eq!(ShutoffState::Closed.opposite(), ShutoffState::Open);
    }

    #[test]
    fn shutoff_state_from_str() {
        assert_eq!("1".parse::<ShutoffState>().unwrap(), ShutoffState::Open);
        assert_eq!("2".parse::<ShutoffState>().unwrap(), ShutoffState::Closed);
        assert!("3".parse::<ShutoffState>().is_err());
        assert!("open".parse::<ShutoffState>().is_err());
    }

    #[test]
    fn shutoff_state_display() {
        assert_eq!(ShutoffState::Open.to_string(), "open");
        assert_eq!(ShutoffState::Closed.to_string(), "closed");
    }
}
