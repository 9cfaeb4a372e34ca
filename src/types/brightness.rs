// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for the dedicated brightness channel.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

/// Brightness level as a percentage (0-100).
///
/// Brightness is controlled through its own device channel, independent of
/// color: combined color writes always assume full value and leave the
/// brightness channel untouched.
///
/// # Examples
///
/// ```
/// use lumalink::types::Brightness;
///
/// let level = Brightness::new(75).unwrap();
/// assert_eq!(level.value(), 75);
///
/// assert_eq!(Brightness::MIN.value(), 0);
/// assert_eq!(Brightness::MAX.value(), 100);
///
/// // Invalid values return error
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidBrightness` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::InvalidBrightness(value));
        }
        Ok(Self(value))
    }

    /// Creates a brightness value, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the brightness percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
