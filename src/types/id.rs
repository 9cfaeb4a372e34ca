// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identifier types for addressing devices and their control channels.

use std::fmt;

/// Identifier of a physical device as known to the device service.
///
/// Device ids are assigned externally (by the device service or its
/// discovery layer); this type only carries them. The wrapper keeps device
/// ids from being confused with function ids at call sites.
///
/// # Examples
///
/// ```
/// use lumalink::types::DeviceId;
///
/// let id = DeviceId::new("bulb-living-room");
/// assert_eq!(id.as_str(), "bulb-living-room");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Creates a device identifier from an externally-assigned id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Opaque device-specific function code for one control channel.
///
/// Function ids map a characteristic onto the device's native control
/// channel. They are resolved by capability discovery and treated as opaque
/// here: the core never inspects them, it only passes them back to the
/// device service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FunctionId(String);

impl FunctionId {
    /// Creates a function identifier from a device-specific code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the function code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FunctionId {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for FunctionId {
    fn from(code: String) -> Self {
        Self(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_id_round_trip() {
        let id = DeviceId::new("lamp-7");
        assert_eq!(id.to_string(), "lamp-7");
        assert_eq!(DeviceId::from("lamp-7"), id);
    }

    #[test]
    fn function_id_is_opaque() {
        let f = FunctionId::new("0x2F");
        assert_eq!(f.as_str(), "0x2F");
        assert_ne!(f, FunctionId::new("0x30"));
    }
}
