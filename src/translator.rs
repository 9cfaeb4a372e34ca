// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Characteristic translation for one light accessory.
//!
//! [`LightTranslator`] maps host-side get/set requests on power, brightness,
//! hue and saturation onto device service calls. Power and brightness pass
//! through directly; hue and saturation are coalesced through a pending
//! color pair and committed as a single hex RGB write once both halves are
//! known.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::capability::{CapabilityMap, Characteristic};
use crate::error::{DeviceError, Error, Result, ValueError};
use crate::pending::PendingColor;
use crate::service::{DeviceService, ServiceValue};
use crate::types::{Brightness, DeviceId, HueSaturation, RgbColor};

/// Integer reading the device uses as an in-band "no value" answer.
const UNAVAILABLE_READING: i64 = -1;

/// Host-facing sink for the "accessory is not responding" signal.
///
/// Invoked before a failed read surfaces to the caller, so the host layer
/// can flag the accessory as unreachable instead of showing a stale value.
pub trait ReachabilityObserver: Send + Sync {
    /// Called when a read against the device failed.
    fn device_unreachable(&self, device: &DeviceId);
}

/// Translates characteristic operations for a single accessory.
///
/// Each accessory owns its own translator and with it its own pending color
/// state; nothing is shared across accessories. The translator itself is
/// `&self` throughout and safe to share behind an `Arc` between the host
/// runtime's request tasks.
///
/// # Creating a Translator
///
/// ```
/// use lumalink::capability::CapabilityMap;
/// use lumalink::translator::LightTranslator;
/// use lumalink::types::{DeviceId, FunctionId};
/// # use lumalink::service::{DeviceService, ServiceValue};
/// # use lumalink::error::CommunicationError;
/// # struct NoopService;
/// # impl DeviceService for NoopService {
/// #     async fn get_boolean(&self, _: &DeviceId, _: &FunctionId) -> Result<Option<bool>, CommunicationError> { Ok(None) }
/// #     async fn get_integer(&self, _: &DeviceId, _: &FunctionId) -> Result<Option<i64>, CommunicationError> { Ok(None) }
/// #     async fn get_string(&self, _: &DeviceId, _: &FunctionId) -> Result<Option<String>, CommunicationError> { Ok(None) }
/// #     async fn set_value(&self, _: &DeviceId, _: &FunctionId, _: ServiceValue) -> Result<(), CommunicationError> { Ok(()) }
/// # }
///
/// let translator = LightTranslator::builder(DeviceId::new("bulb-1"), NoopService)
///     .with_capabilities(CapabilityMap::color_light(
///         FunctionId::new("50"),
///         FunctionId::new("51"),
///         FunctionId::new("52"),
///     ))
///     .build();
/// assert_eq!(translator.device().as_str(), "bulb-1");
/// ```
pub struct LightTranslator<S> {
    device: DeviceId,
    service: Arc<S>,
    capabilities: CapabilityMap,
    pending: Mutex<PendingColor>,
    observer: Option<Arc<dyn ReachabilityObserver>>,
}

impl<S> std::fmt::Debug for LightTranslator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LightTranslator")
            .field("device", &self.device)
            .field("capabilities", &self.capabilities)
            .field("pending", &*self.pending.lock())
            .finish_non_exhaustive()
    }
}

impl<S: DeviceService> LightTranslator<S> {
    /// Creates a builder for the given device and service.
    #[must_use]
    pub fn builder(device: DeviceId, service: S) -> LightTranslatorBuilder<S> {
        LightTranslatorBuilder::new(device, service)
    }

    /// Returns the device id this translator serves.
    #[must_use]
    pub fn device(&self) -> &DeviceId {
        &self.device
    }

    /// Returns the accessory's capability map.
    #[must_use]
    pub fn capabilities(&self) -> &CapabilityMap {
        &self.capabilities
    }

    // ========== Power ==========

    /// Reads the power state.
    ///
    /// # Errors
    ///
    /// Fails with `DeviceError::Unavailable` if the device reports no value,
    /// or with the transport error. Either failure marks the accessory as
    /// not responding first.
    pub async fn get_power(&self) -> Result<bool> {
        let function = self.capabilities.resolve(Characteristic::Power)?;
        match self.service.get_boolean(&self.device, function).await {
            Ok(Some(on)) => Ok(on),
            Ok(None) => Err(self.read_failed(unavailable(Characteristic::Power))),
            Err(e) => Err(self.read_failed(e.into())),
        }
    }

    /// Writes the power state.
    ///
    /// # Errors
    ///
    /// Fails with the transport error if the write fails.
    pub async fn set_power(&self, on: bool) -> Result<()> {
        let function = self.capabilities.resolve(Characteristic::Power)?;
        self.service
            .set_value(&self.device, function, ServiceValue::Bool(on))
            .await
            .map_err(Error::from)
    }

    // ========== Brightness ==========

    /// Reads the brightness level.
    ///
    /// Returns the raw device reading; any value other than the `-1`
    /// sentinel is a valid level, including `0`.
    ///
    /// # Errors
    ///
    /// Fails with `DeviceError::Unavailable` if the device reports no value
    /// or the `-1` sentinel, or with the transport error. Either failure
    /// marks the accessory as not responding first.
    pub async fn get_brightness(&self) -> Result<i64> {
        let function = self.capabilities.resolve(Characteristic::Brightness)?;
        match self.service.get_integer(&self.device, function).await {
            Ok(Some(level)) if level != UNAVAILABLE_READING => Ok(level),
            Ok(_) => Err(self.read_failed(unavailable(Characteristic::Brightness))),
            Err(e) => Err(self.read_failed(e.into())),
        }
    }

    /// Writes the brightness level.
    ///
    /// # Errors
    ///
    /// Fails with the transport error if the write fails.
    pub async fn set_brightness(&self, level: Brightness) -> Result<()> {
        let function = self.capabilities.resolve(Characteristic::Brightness)?;
        self.service
            .set_value(
                &self.device,
                function,
                ServiceValue::Integer(i64::from(level.value())),
            )
            .await
            .map_err(Error::from)
    }

    // ========== Hue / Saturation ==========

    /// Reads the hue component of the device color.
    ///
    /// # Errors
    ///
    /// Fails with `DeviceError::Unavailable` for an empty color string, with
    /// `ValueError::InvalidHexColor` for a malformed one, or with the
    /// transport error. Any failure marks the accessory as not responding
    /// first.
    pub async fn get_hue(&self) -> Result<u16> {
        Ok(self.read_color().await?.hue())
    }

    /// Reads the saturation component of the device color.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get_hue`](Self::get_hue).
    pub async fn get_saturation(&self) -> Result<u8> {
        Ok(self.read_color().await?.saturation())
    }

    /// Records a host hue write.
    ///
    /// No device I/O happens until the saturation half is also known; once
    /// it is, one combined RGB write is issued and the pending pair is
    /// cleared. Re-setting hue before saturation arrives overwrites the
    /// earlier value.
    ///
    /// # Errors
    ///
    /// Fails with `ValueError::InvalidHue` for out-of-range input, or with
    /// the transport error of the combined write.
    pub async fn set_hue(&self, hue: u16) -> Result<()> {
        if hue > HueSaturation::MAX_HUE {
            return Err(ValueError::InvalidHue(hue).into());
        }
        let ready = {
            let mut pending = self.pending.lock();
            pending.set_hue(hue);
            pending.take_complete()
        };
        self.commit_color(ready).await
    }

    /// Records a host saturation write. Symmetric with [`set_hue`](Self::set_hue).
    ///
    /// # Errors
    ///
    /// Fails with `ValueError::InvalidSaturation` for out-of-range input, or
    /// with the transport error of the combined write.
    pub async fn set_saturation(&self, saturation: u8) -> Result<()> {
        if saturation > HueSaturation::MAX_SATURATION {
            return Err(ValueError::InvalidSaturation(saturation).into());
        }
        let ready = {
            let mut pending = self.pending.lock();
            pending.set_saturation(saturation);
            pending.take_complete()
        };
        self.commit_color(ready).await
    }

    // ========== Helpers ==========

    /// Reads and decodes the device color string.
    async fn read_color(&self) -> Result<HueSaturation> {
        let function = self.capabilities.resolve(Characteristic::Color)?;
        let raw = match self.service.get_string(&self.device, function).await {
            Ok(Some(hex)) if !hex.is_empty() => hex,
            Ok(_) => return Err(self.read_failed(unavailable(Characteristic::Color))),
            Err(e) => return Err(self.read_failed(e.into())),
        };
        let rgb = RgbColor::from_hex(&raw).map_err(|e| self.read_failed(e.into()))?;
        Ok(rgb.to_hue_saturation())
    }

    /// Issues the combined color write for a completed pair, if any.
    ///
    /// The pending state is left empty after any attempt: `take_complete`
    /// already cleared it, and the trailing `reset` covers a half pair that
    /// slipped in while the write was in flight.
    async fn commit_color(&self, ready: Option<(u16, u8)>) -> Result<()> {
        let Some((hue, saturation)) = ready else {
            tracing::debug!(
                device = %self.device,
                "color write deferred until both components arrive"
            );
            return Ok(());
        };

        let color = HueSaturation::new(hue, saturation)?;
        let hex = RgbColor::from_hue_saturation(&color).to_hex_with_hash();
        let function = self.capabilities.resolve(Characteristic::Color)?;

        tracing::debug!(device = %self.device, color = %hex, "issuing combined color write");
        let written = self
            .service
            .set_value(&self.device, function, ServiceValue::Text(hex))
            .await;

        self.pending.lock().reset();
        written.map_err(Error::from)
    }

    /// Marks the accessory unreachable and passes the error through.
    fn read_failed(&self, err: Error) -> Error {
        tracing::warn!(device = %self.device, error = %err, "read failed, marking accessory as not responding");
        if let Some(observer) = &self.observer {
            observer.device_unreachable(&self.device);
        }
        err
    }
}

/// Builder for [`LightTranslator`].
pub struct LightTranslatorBuilder<S> {
    device: DeviceId,
    service: S,
    capabilities: CapabilityMap,
    observer: Option<Arc<dyn ReachabilityObserver>>,
}

impl<S: DeviceService> LightTranslatorBuilder<S> {
    fn new(device: DeviceId, service: S) -> Self {
        Self {
            device,
            service,
            capabilities: CapabilityMap::new(),
            observer: None,
        }
    }

    /// Sets the resolved capability map for the accessory.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: CapabilityMap) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Registers the host-facing reachability sink.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ReachabilityObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Builds the translator.
    #[must_use]
    pub fn build(self) -> LightTranslator<S> {
        LightTranslator {
            device: self.device,
            service: Arc::new(self.service),
            capabilities: self.capabilities,
            pending: Mutex::new(PendingColor::new()),
            observer: self.observer,
        }
    }
}

fn unavailable(characteristic: Characteristic) -> Error {
    Error::Device(DeviceError::Unavailable { characteristic })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommunicationError;
    use crate::types::FunctionId;

    struct NoopService;

    impl DeviceService for NoopService {
        async fn get_boolean(
            &self,
            _: &DeviceId,
            _: &FunctionId,
        ) -> std::result::Result<Option<bool>, CommunicationError> {
            Ok(None)
        }

        async fn get_integer(
            &self,
            _: &DeviceId,
            _: &FunctionId,
        ) -> std::result::Result<Option<i64>, CommunicationError> {
            Ok(None)
        }

        async fn get_string(
            &self,
            _: &DeviceId,
            _: &FunctionId,
        ) -> std::result::Result<Option<String>, CommunicationError> {
            Ok(None)
        }

        async fn set_value(
            &self,
            _: &DeviceId,
            _: &FunctionId,
            _: ServiceValue,
        ) -> std::result::Result<(), CommunicationError> {
            Ok(())
        }
    }

    fn color_caps() -> CapabilityMap {
        CapabilityMap::color_light(
            FunctionId::new("50"),
            FunctionId::new("51"),
            FunctionId::new("52"),
        )
    }

    #[test]
    fn builder_wires_device_and_capabilities() {
        let translator = LightTranslator::builder(DeviceId::new("bulb-1"), NoopService)
            .with_capabilities(color_caps())
            .build();
        assert_eq!(translator.device().as_str(), "bulb-1");
        assert!(translator.capabilities().supports(Characteristic::Color));
    }

    #[tokio::test]
    async fn unsupported_characteristic_fails_without_io() {
        let translator = LightTranslator::builder(DeviceId::new("plug"), NoopService)
            .with_capabilities(CapabilityMap::on_off(FunctionId::new("1")))
            .build();
        let err = translator.get_brightness().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Device(DeviceError::UnsupportedCharacteristic {
                characteristic: Characteristic::Brightness
            })
        ));
    }

    #[tokio::test]
    async fn set_hue_validates_range() {
        let translator = LightTranslator::builder(DeviceId::new("bulb"), NoopService)
            .with_capabilities(color_caps())
            .build();
        let err = translator.set_hue(361).await.unwrap_err();
        assert!(matches!(err, Error::Value(ValueError::InvalidHue(361))));
        // The rejected value must not linger as a pending half.
        translator.set_saturation(50).await.unwrap();
        assert!(!translator.pending.lock().is_complete());
    }

    #[tokio::test]
    async fn set_saturation_validates_range() {
        let translator = LightTranslator::builder(DeviceId::new("bulb"), NoopService)
            .with_capabilities(color_caps())
            .build();
        let err = translator.set_saturation(101).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidSaturation(101))
        ));
    }
}
