// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Characteristic-to-function-code mapping.
//!
//! Capability discovery (an external collaborator) determines which control
//! channels a device instance exposes and under which function codes. This
//! module only consumes the result: a lookup from characteristic to function
//! id, plus a support predicate for the host layer's pre-checks.

use std::collections::HashMap;
use std::fmt;

use crate::error::DeviceError;
use crate::types::FunctionId;

/// A device-facing control channel.
///
/// Host-side hue and saturation have no channels of their own: the device
/// accepts color only as one combined RGB value, so both translate through
/// the single [`Color`](Characteristic::Color) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Characteristic {
    /// Boolean power flag.
    Power,
    /// Integer brightness channel.
    Brightness,
    /// Combined hex RGB color channel.
    Color,
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Power => "power",
            Self::Brightness => "brightness",
            Self::Color => "color",
        };
        write!(f, "{name}")
    }
}

/// Resolved capability map for one accessory.
///
/// Built once at accessory construction from discovery results and consumed
/// by the translator for every request.
///
/// # Examples
///
/// ```
/// use lumalink::capability::{CapabilityMap, Characteristic};
/// use lumalink::types::FunctionId;
///
/// let caps = CapabilityMap::color_light(
///     FunctionId::new("50"),
///     FunctionId::new("51"),
///     FunctionId::new("52"),
/// );
/// assert!(caps.supports(Characteristic::Color));
/// assert_eq!(caps.resolve(Characteristic::Power).unwrap().as_str(), "50");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityMap {
    functions: HashMap<Characteristic, FunctionId>,
}

impl CapabilityMap {
    /// Creates an empty capability map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the function id for a characteristic.
    pub fn insert(&mut self, characteristic: Characteristic, function: FunctionId) {
        self.functions.insert(characteristic, function);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, characteristic: Characteristic, function: FunctionId) -> Self {
        self.insert(characteristic, function);
        self
    }

    /// Capability map for an on/off-only device.
    #[must_use]
    pub fn on_off(power: FunctionId) -> Self {
        Self::new().with(Characteristic::Power, power)
    }

    /// Capability map for a dimmable light without color support.
    #[must_use]
    pub fn dimmable_light(power: FunctionId, brightness: FunctionId) -> Self {
        Self::on_off(power).with(Characteristic::Brightness, brightness)
    }

    /// Capability map for a full color light.
    #[must_use]
    pub fn color_light(power: FunctionId, brightness: FunctionId, color: FunctionId) -> Self {
        Self::dimmable_light(power, brightness).with(Characteristic::Color, color)
    }

    /// Returns whether the accessory exposes a characteristic.
    #[must_use]
    pub fn supports(&self, characteristic: Characteristic) -> bool {
        self.functions.contains_key(&characteristic)
    }

    /// Resolves the device function id for a characteristic.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnsupportedCharacteristic` if the accessory has
    /// no function id for it. Callers are expected to pre-check with
    /// [`supports`](Self::supports) before wiring a characteristic up at all.
    pub fn resolve(&self, characteristic: Characteristic) -> Result<&FunctionId, DeviceError> {
        self.functions
            .get(&characteristic)
            .ok_or(DeviceError::UnsupportedCharacteristic { characteristic })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fid(code: &str) -> FunctionId {
        FunctionId::new(code)
    }

    #[test]
    fn empty_map_supports_nothing() {
        let caps = CapabilityMap::new();
        assert!(!caps.supports(Characteristic::Power));
        assert!(matches!(
            caps.resolve(Characteristic::Power),
            Err(DeviceError::UnsupportedCharacteristic {
                characteristic: Characteristic::Power
            })
        ));
    }

    #[test]
    fn color_light_has_all_channels() {
        let caps = CapabilityMap::color_light(fid("1"), fid("2"), fid("3"));
        assert!(caps.supports(Characteristic::Power));
        assert!(caps.supports(Characteristic::Brightness));
        assert!(caps.supports(Characteristic::Color));
        assert_eq!(caps.resolve(Characteristic::Color).unwrap(), &fid("3"));
    }

    #[test]
    fn dimmable_light_lacks_color() {
        let caps = CapabilityMap::dimmable_light(fid("1"), fid("2"));
        assert!(!caps.supports(Characteristic::Color));
    }

    #[test]
    fn insert_overwrites() {
        let mut caps = CapabilityMap::on_off(fid("1"));
        caps.insert(Characteristic::Power, fid("9"));
        assert_eq!(caps.resolve(Characteristic::Power).unwrap(), &fid("9"));
    }
}
