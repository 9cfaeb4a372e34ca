// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for characteristic translation.
//!
//! This module provides type-safe representations of the values flowing
//! between the host model and the device model. Each constrained type
//! validates its range at construction time.
//!
//! # Types
//!
//! - [`DeviceId`] / [`FunctionId`] - Opaque identifiers addressing a device
//!   and one of its control channels
//! - [`Brightness`] - Brightness level (0-100%)
//! - [`HueSaturation`] - Host-side color pair (hue 0-360, saturation 0-100)
//! - [`RgbColor`] - Device-side color with hex parsing and the HSL/HSV
//!   conversions between the two models

mod brightness;
mod color;
mod id;
mod rgb;

pub use brightness::Brightness;
pub use color::HueSaturation;
pub use id::{DeviceId, FunctionId};
pub use rgb::RgbColor;
