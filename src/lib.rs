// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `lumalink` - Characteristic translation for smart lights.
//!
//! This library bridges a characteristic-based home-automation host model
//! (power, brightness, hue, saturation) onto device services that only
//! accept a boolean power flag, an integer brightness, and one combined
//! color value as a hex-encoded RGB string.
//!
//! The interesting part is not the I/O but the reconciliation: hosts set hue
//! and saturation as two separate, independently-arriving writes, while the
//! device wants color as one atomic RGB value. The translator coalesces the
//! two host writes through a per-accessory pending pair and issues exactly
//! one combined device write per completed pair, converting between hex
//! RGB, HSL (reads) and HSV at full value (writes) on the way.
//!
//! # Supported Features
//!
//! - **Power and brightness**: direct get/set pass-through with typed
//!   unavailable detection (null values, `-1` brightness sentinel)
//! - **Hue/saturation coalescing**: deferred, exactly-once combined color
//!   writes with overwrite semantics for re-sent halves
//! - **Color-space math**: hex RGB ↔ HSL ↔ HSV conversions, lossy by
//!   design on the saturation axis
//! - **Reachability signaling**: failed reads flag the accessory as not
//!   responding before the error surfaces
//!
//! # Quick Start
//!
//! ```no_run
//! use lumalink::capability::CapabilityMap;
//! use lumalink::error::CommunicationError;
//! use lumalink::service::{DeviceService, ServiceValue};
//! use lumalink::translator::LightTranslator;
//! use lumalink::types::{Brightness, DeviceId, FunctionId};
//!
//! // The transport to the physical device lives behind `DeviceService`.
//! struct MyHub;
//!
//! impl DeviceService for MyHub {
//!     async fn get_boolean(
//!         &self,
//!         device: &DeviceId,
//!         function: &FunctionId,
//!     ) -> Result<Option<bool>, CommunicationError> {
//!         todo!("issue the actual request")
//!     }
//!
//!     async fn get_integer(
//!         &self,
//!         device: &DeviceId,
//!         function: &FunctionId,
//!     ) -> Result<Option<i64>, CommunicationError> {
//!         todo!()
//!     }
//!
//!     async fn get_string(
//!         &self,
//!         device: &DeviceId,
//!         function: &FunctionId,
//!     ) -> Result<Option<String>, CommunicationError> {
//!         todo!()
//!     }
//!
//!     async fn set_value(
//!         &self,
//!         device: &DeviceId,
//!         function: &FunctionId,
//!         value: ServiceValue,
//!     ) -> Result<(), CommunicationError> {
//!         todo!()
//!     }
//! }
//!
//! # async fn run() -> lumalink::Result<()> {
//! // Function ids come from capability discovery, outside this crate.
//! let translator = LightTranslator::builder(DeviceId::new("bulb-living-room"), MyHub)
//!     .with_capabilities(CapabilityMap::color_light(
//!         FunctionId::new("50"),
//!         FunctionId::new("51"),
//!         FunctionId::new("52"),
//!     ))
//!     .build();
//!
//! translator.set_power(true).await?;
//! translator.set_brightness(Brightness::new(75)?).await?;
//!
//! // No device write yet: saturation is still unknown.
//! translator.set_hue(240).await?;
//! // Both halves known: one combined "#3333FF" write goes out.
//! translator.set_saturation(80).await?;
//! # Ok(())
//! # }
//! ```

pub mod capability;
pub mod error;
pub mod pending;
pub mod service;
pub mod translator;
pub mod types;

pub use capability::{CapabilityMap, Characteristic};
pub use error::{CommunicationError, DeviceError, Error, Result, ValueError};
pub use pending::PendingColor;
pub use service::{DeviceService, ServiceValue};
pub use translator::{LightTranslator, LightTranslatorBuilder, ReachabilityObserver};
pub use types::{Brightness, DeviceId, FunctionId, HueSaturation, RgbColor};
