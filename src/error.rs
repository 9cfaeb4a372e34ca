// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `lumalink` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: value validation, device-reported unavailability, and transport
//! failures of the underlying device service.

use thiserror::Error;

use crate::capability::Characteristic;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when translating
/// characteristic operations into device service calls.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The device reported an unavailable or unsupported value.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// The device service call itself failed.
    #[error("communication error: {0}")]
    Communication(#[from] CommunicationError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values, or when decoding a malformed device color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A color string is not a well-formed 6-digit RGB hex triplet.
    #[error("invalid hex color: {0:?}")]
    InvalidHexColor(String),

    /// A hue value is outside the valid range (0-360).
    #[error("hue value {0} is out of range [0, 360]")]
    InvalidHue(u16),

    /// A saturation value is outside the valid range (0-100).
    #[error("saturation value {0} is out of range [0, 100]")]
    InvalidSaturation(u8),

    /// A brightness value is outside the valid range (0-100).
    #[error("brightness value {0} is out of range [0, 100]")]
    InvalidBrightness(u8),
}

/// Errors reported by the device about its own state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The device returned no usable value for a characteristic.
    ///
    /// This covers a null power flag, a null or `-1` brightness reading,
    /// and an empty color string.
    #[error("device reported no value for {characteristic}")]
    Unavailable {
        /// The characteristic whose value was unavailable.
        characteristic: Characteristic,
    },

    /// The accessory's capability map has no function id for a characteristic.
    #[error("accessory does not support {characteristic}")]
    UnsupportedCharacteristic {
        /// The characteristic that is not supported.
        characteristic: Characteristic,
    },
}

/// Errors raised by the device service transport.
///
/// The translation core performs no retries; these surface to the caller
/// unchanged.
#[derive(Debug, Error)]
pub enum CommunicationError {
    /// The request could not be delivered or the response was malformed.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The device service gave up waiting for the device.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Internal channel to the device service was closed.
    #[error("channel closed: {0}")]
    ChannelClosed(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidHexColor("#12345".to_string());
        assert_eq!(err.to_string(), "invalid hex color: \"#12345\"");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidHue(400);
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidHue(400))));
    }

    #[test]
    fn device_error_display() {
        let err = DeviceError::Unavailable {
            characteristic: Characteristic::Brightness,
        };
        assert_eq!(err.to_string(), "device reported no value for brightness");
    }

    #[test]
    fn unsupported_characteristic_display() {
        let err = DeviceError::UnsupportedCharacteristic {
            characteristic: Characteristic::Color,
        };
        assert_eq!(err.to_string(), "accessory does not support color");
    }

    #[test]
    fn communication_error_display() {
        let err = CommunicationError::Timeout(5000);
        assert_eq!(err.to_string(), "request timed out after 5000 ms");
    }
}
