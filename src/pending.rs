// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pending color state for hue/saturation coalescing.
//!
//! The host sets hue and saturation as two independent writes while the
//! device accepts color only as one combined value. This module holds the
//! at-most-one in-flight half of that pair per accessory and decides when a
//! combined write becomes ready.

/// Transient hue/saturation storage awaiting combination into one RGB write.
///
/// Both fields start unset. [`take_complete`](Self::take_complete) performs
/// the check-then-consume step as a single call; the owning translator wraps
/// this type in a per-accessory mutex so that two concurrently completing
/// requests cannot both observe a complete pair.
///
/// # Examples
///
/// ```
/// use lumalink::pending::PendingColor;
///
/// let mut pending = PendingColor::new();
/// pending.set_hue(240);
/// assert!(pending.take_complete().is_none());
///
/// pending.set_saturation(80);
/// assert_eq!(pending.take_complete(), Some((240, 80)));
/// assert!(!pending.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingColor {
    hue: Option<u16>,
    saturation: Option<u8>,
}

impl PendingColor {
    /// Creates an empty pending state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a hue value, overwriting any unconsumed one.
    ///
    /// Values are not validated here; the translator validates before
    /// recording.
    pub fn set_hue(&mut self, hue: u16) {
        self.hue = Some(hue);
    }

    /// Records a saturation value, overwriting any unconsumed one.
    pub fn set_saturation(&mut self, saturation: u8) {
        self.saturation = Some(saturation);
    }

    /// Returns true iff both hue and saturation are currently set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.hue.is_some() && self.saturation.is_some()
    }

    /// Takes the completed pair, clearing both fields.
    ///
    /// Returns `None` and leaves the state untouched while either half is
    /// missing. Combining the completeness check and the consume step in one
    /// call keeps the sequence atomic under the owner's lock.
    pub fn take_complete(&mut self) -> Option<(u16, u8)> {
        match (self.hue, self.saturation) {
            (Some(hue), Some(saturation)) => {
                self.hue = None;
                self.saturation = None;
                Some((hue, saturation))
            }
            _ => None,
        }
    }

    /// Clears both fields unconditionally.
    ///
    /// Called after an attempted combined write, success or failure, so a
    /// failed attempt cannot leak stale components into a later one.
    pub fn reset(&mut self) {
        self.hue = None;
        self.saturation = None;
    }
}
