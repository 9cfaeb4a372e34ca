// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device service boundary.
//!
//! The actual transport to the physical device lives behind the
//! [`DeviceService`] trait. Implementations own timeouts, retries and
//! cancellation; the translation core treats every failure uniformly as a
//! failed call and never retries on its own.
//!
//! The `Option` in the read results carries the device's own "no value"
//! answer (null power flag, missing reading, empty color string), distinct
//! from a transport failure.

use std::fmt;

use crate::error::CommunicationError;
use crate::types::{DeviceId, FunctionId};

/// A value written to a device function.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ServiceValue {
    /// Boolean flag (power).
    Bool(bool),
    /// Integer reading (brightness).
    Integer(i64),
    /// String payload (hex RGB color).
    Text(String),
}

impl fmt::Display for ServiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for ServiceValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ServiceValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for ServiceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Async get/set access to a physical device by device id and function code.
#[allow(async_fn_in_trait)]
pub trait DeviceService {
    /// Reads a boolean function value.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the call itself fails.
    async fn get_boolean(
        &self,
        device: &DeviceId,
        function: &FunctionId,
    ) -> Result<Option<bool>, CommunicationError>;

    /// Reads an integer function value.
    ///
    /// Devices additionally use `-1` as an in-band "no reading" sentinel;
    /// interpreting it is the caller's job, this method passes it through.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the call itself fails.
    async fn get_integer(
        &self,
        device: &DeviceId,
        function: &FunctionId,
    ) -> Result<Option<i64>, CommunicationError>;

    /// Reads a string function value.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the call itself fails.
    async fn get_string(
        &self,
        device: &DeviceId,
        function: &FunctionId,
    ) -> Result<Option<String>, CommunicationError>;

    /// Writes a value to a device function.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the call itself fails.
    async fn set_value(
        &self,
        device: &DeviceId,
        function: &FunctionId,
        value: ServiceValue,
    ) -> Result<(), CommunicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_value_display() {
        assert_eq!(ServiceValue::Bool(true).to_string(), "true");
        assert_eq!(ServiceValue::Integer(-1).to_string(), "-1");
        assert_eq!(ServiceValue::Text("#FF0000".into()).to_string(), "#FF0000");
    }

    #[test]
    fn service_value_from_impls() {
        assert_eq!(ServiceValue::from(false), ServiceValue::Bool(false));
        assert_eq!(ServiceValue::from(42_i64), ServiceValue::Integer(42));
        assert_eq!(
            ServiceValue::from("#3333FF".to_string()),
            ServiceValue::Text("#3333FF".into())
        );
    }
}
