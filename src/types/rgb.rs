// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing and hue/saturation conversion.
//!
//! The device stores color as a single hex-encoded RGB string while the host
//! controls hue and saturation separately, so this module carries the two
//! conversions the translation needs:
//!
//! - reading: RGB → HSL, lightness discarded (the device has no value
//!   channel of its own; the interesting components are hue and HSL
//!   saturation)
//! - writing: HSV → RGB with value pinned at 100% (brightness is a separate
//!   device channel)
//!
//! The round trip through these two is intentionally lossy: HSL saturation
//! and HSV saturation are different quantities, so saturation may drift while
//! hue is preserved.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::HueSaturation;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use lumalink::types::RgbColor;
///
/// let color = RgbColor::from_hex("#3333FF").unwrap();
/// assert_eq!(color.red(), 0x33);
/// assert_eq!(color.blue(), 0xFF);
///
/// // Case-insensitive, hash optional
/// assert_eq!(RgbColor::from_hex("3333ff").unwrap(), color);
///
/// assert_eq!(color.to_hex_with_hash(), "#3333FF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses an RGB color from a 6-digit hex string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive. Device colors are
    /// always full 6-digit triplets; 3-digit shorthand is rejected.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` for anything else.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.trim_start_matches('#');

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }

        let r = parse_hex_pair(&digits[0..2], hex)?;
        let g = parse_hex_pair(&digits[2..4], hex)?;
        let b = parse_hex_pair(&digits[4..6], hex)?;
        Ok(Self::new(r, g, b))
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as a hex string without the hash prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Returns the color as a hex string with the hash prefix.
    #[must_use]
    pub fn to_hex_with_hash(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Extracts the hue/saturation pair via HSL, discarding lightness.
    ///
    /// # Panics
    ///
    /// Never panics in practice: the conversion always yields hue below 360
    /// and saturation at most 100.
    #[must_use]
    pub fn to_hue_saturation(&self) -> HueSaturation {
        let (h, s) = rgb_to_hsl(self.red, self.green, self.blue);
        HueSaturation::new(h, s).expect("rgb_to_hsl returns in-range components")
    }

    /// Builds the RGB color for a hue/saturation pair at full value (HSV).
    ///
    /// The device has no value channel distinct from brightness, so the
    /// value component is pinned at 100%.
    #[must_use]
    pub fn from_hue_saturation(color: &HueSaturation) -> Self {
        let (r, g, b) = hsv_to_rgb(color.hue(), color.saturation());
        Self::new(r, g, b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_with_hash())
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for RgbColor {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

fn parse_hex_pair(pair: &str, original: &str) -> Result<u8, ValueError> {
    u8::from_str_radix(pair, 16).map_err(|_| ValueError::InvalidHexColor(original.to_string()))
}

/// Converts RGB channels to (hue 0-359, HSL saturation 0-100).
///
/// Lightness is computed for the saturation denominator and then discarded.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (u16, u8) {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta < f32::EPSILON {
        // Achromatic: hue is undefined, report 0.
        return (0, 0);
    }

    let lightness = (max + min) / 2.0;
    let saturation = ((delta / (1.0 - (2.0 * lightness - 1.0).abs())) * 100.0).round() as u8;

    let hue = if (max - r).abs() < f32::EPSILON {
        let h = 60.0 * (((g - b) / delta) % 6.0);
        if h < 0.0 { h + 360.0 } else { h }
    } else if (max - g).abs() < f32::EPSILON {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    ((hue.round() as u16) % 360, saturation.min(100))
}

/// Converts (hue 0-360, saturation 0-100) at full value to RGB channels.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
fn hsv_to_rgb(h: u16, s: u8) -> (u8, u8, u8) {
    let s = f32::from(s) / 100.0;
    let h = f32::from(h % 360);

    // Value fixed at 1.0, so chroma equals saturation.
    let c = s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = 1.0 - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}
