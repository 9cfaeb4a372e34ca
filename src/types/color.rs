// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hue/saturation color pair as seen by the host.
//!
//! The host controls color through two separate characteristics; this type
//! carries the combined pair once both halves are known. There is no value
//! component: combined color writes always assume full value, brightness is
//! a separate channel.

use std::fmt;

use crate::error::ValueError;

/// A hue/saturation pair (hue 0-360 degrees, saturation 0-100 percent).
///
/// # Examples
///
/// ```
/// use lumalink::types::HueSaturation;
///
/// let blue = HueSaturation::new(240, 100).unwrap();
/// assert_eq!(blue.hue(), 240);
/// assert_eq!(blue.saturation(), 100);
///
/// assert!(HueSaturation::new(361, 50).is_err());
/// assert!(HueSaturation::new(180, 101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct HueSaturation {
    hue: u16,
    saturation: u8,
}

impl HueSaturation {
    /// Maximum hue value (wraps at 360).
    pub const MAX_HUE: u16 = 360;

    /// Maximum saturation value.
    pub const MAX_SATURATION: u8 = 100;

    /// Creates a new hue/saturation pair.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHue` or `ValueError::InvalidSaturation`
    /// if either component is outside its valid range.
    pub fn new(hue: u16, saturation: u8) -> Result<Self, ValueError> {
        if hue > Self::MAX_HUE {
            return Err(ValueError::InvalidHue(hue));
        }
        if saturation > Self::MAX_SATURATION {
            return Err(ValueError::InvalidSaturation(saturation));
        }
        Ok(Self { hue, saturation })
    }

    /// Returns the hue in degrees (0-360).
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Returns the saturation percentage (0-100).
    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }
}

impl Default for HueSaturation {
    /// White: no saturation, hue irrelevant.
    fn default() -> Self {
        Self {
            hue: 0,
            saturation: 0,
        }
    }
}

impl fmt::Display for HueSaturation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HS({}, {}%)", self.hue, self.saturation)
    }
}
