// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Weight-ordered point light slots.

use crate::error::LightIndexError;
use lumen_core::renderer::{PointLight, MAX_POINT_LIGHTS};

/// The resolved view of a [`LightSet`]: slot indices by descending weight and
/// the number of active lights.
///
/// Both values come from the same resolution pass, so they always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLights {
    /// Slot indices, heaviest light first.
    pub order: [usize; MAX_POINT_LIGHTS],
    /// Number of slots with a nonzero weight.
    pub active: usize,
}

/// Fixed-capacity storage for the point lights of one mesh view.
///
/// Writing a light marks the set dirty; the order and active count are
/// recomputed lazily, at most once per change, when [`resolved`](Self::resolved)
/// is next called.
#[derive(Debug, Clone)]
pub struct LightSet {
    lights: [PointLight; MAX_POINT_LIGHTS],
    resolved: ResolvedLights,
    dirty: bool,
}

impl Default for LightSet {
    fn default() -> Self {
        Self::new()
    }
}

impl LightSet {
    /// Creates a set of inactive lights, marked dirty.
    pub fn new() -> Self {
        Self {
            lights: [PointLight::OFF; MAX_POINT_LIGHTS],
            resolved: ResolvedLights {
                order: [0, 1, 2],
                active: 0,
            },
            dirty: true,
        }
    }

    /// Returns the light in `index`, or `None` if the slot does not exist.
    pub fn get(&self, index: usize) -> Option<&PointLight> {
        self.lights.get(index)
    }

    /// All slots, in slot order.
    pub fn lights(&self) -> &[PointLight; MAX_POINT_LIGHTS] {
        &self.lights
    }

    /// Replaces the light in `index` and marks the set dirty.
    ///
    /// # Errors
    ///
    /// Returns [`LightIndexError::OutOfRange`] without touching any slot if
    /// `index >= MAX_POINT_LIGHTS`.
    pub fn set(&mut self, index: usize, light: PointLight) -> Result<(), LightIndexError> {
        let slot = self
            .lights
            .get_mut(index)
            .ok_or(LightIndexError::OutOfRange {
                index,
                max: MAX_POINT_LIGHTS,
            })?;
        *slot = light;
        self.dirty = true;
        Ok(())
    }

    /// Returns `true` if the order and count are stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recomputes the order and active count if the set is dirty.
    ///
    /// Returns `true` if a recomputation happened.
    pub fn resolve_order(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;

        let weights = self.lights.map(|l| l.weight);
        self.resolved = ResolvedLights {
            order: order_by_weight(&weights),
            active: self.lights.iter().filter(|l| l.is_active()).count(),
        };
        log::trace!(
            "LightSet: re-sorted lights {:?}, {} active",
            self.resolved.order,
            self.resolved.active
        );
        true
    }

    /// Resolves the set if needed and returns the current order and count.
    pub fn resolved(&mut self) -> ResolvedLights {
        self.resolve_order();
        self.resolved
    }
}

/// Two-pass bubble sort of the slot indices by descending weight.
///
/// Only a strictly heavier light is moved forward, so equal weights keep
/// their slot order.
fn order_by_weight(weights: &[f32; MAX_POINT_LIGHTS]) -> [usize; MAX_POINT_LIGHTS] {
    let mut order = [0, 1, 2];
    for i in 0..MAX_POINT_LIGHTS - 1 {
        for j in (i + 1..MAX_POINT_LIGHTS).rev() {
            if weights[order[j - 1]] < weights[order[j]] {
                order.swap(j - 1, j);
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::math::{LinearRgba, Vec3};

    fn light(weight: f32) -> PointLight {
        PointLight::new(Vec3::ZERO, LinearRgba::WHITE, weight)
    }

    fn set_with(weights: [f32; 3]) -> LightSet {
        let mut set = LightSet::new();
        for (i, w) in weights.iter().enumerate() {
            set.set(i, light(*w)).unwrap();
        }
        set
    }

    #[test]
    fn test_new_set_is_dirty_and_inactive() {
        let mut set = LightSet::new();
        assert!(set.is_dirty());
        let resolved = set.resolved();
        assert_eq!(resolved.order, [0, 1, 2]);
        assert_eq!(resolved.active, 0);
        assert!(!set.is_dirty());
    }

    #[test]
    fn test_heaviest_first() {
        let mut set = set_with([0.0, 5.0, 2.0]);
        let resolved = set.resolved();
        assert_eq!(resolved.order, [1, 2, 0]);
        assert_eq!(resolved.active, 2);
    }

    #[test]
    fn test_equal_weights_keep_slot_order() {
        let mut set = set_with([3.0, 3.0, 0.0]);
        let resolved = set.resolved();
        assert_eq!(resolved.order, [0, 1, 2]);
        assert_eq!(resolved.active, 2);
    }

    #[test]
    fn test_reverse_order() {
        let mut set = set_with([1.0, 2.0, 3.0]);
        assert_eq!(set.resolved().order, [2, 1, 0]);
    }

    #[test]
    fn test_all_weight_assignments() {
        let values = [0.0, 1.0, 2.0, -1.0];
        for &a in &values {
            for &b in &values {
                for &c in &values {
                    let weights = [a, b, c];
                    let mut set = set_with(weights);
                    let resolved = set.resolved();

                    let mut seen = resolved.order;
                    seen.sort_unstable();
                    assert_eq!(seen, [0, 1, 2], "not a permutation for {weights:?}");

                    for pair in resolved.order.windows(2) {
                        let (first, second) = (weights[pair[0]], weights[pair[1]]);
                        assert!(first >= second, "not descending for {weights:?}");
                        if first == second {
                            assert!(pair[0] < pair[1], "unstable for {weights:?}");
                        }
                    }

                    let expected = weights.iter().filter(|w| **w != 0.0).count();
                    assert_eq!(resolved.active, expected, "count for {weights:?}");
                }
            }
        }
    }

    #[test]
    fn test_resolution_happens_once_per_change() {
        let mut set = set_with([1.0, 0.0, 0.0]);
        assert!(set.resolve_order());
        assert!(!set.resolve_order());
        assert!(!set.resolve_order());

        set.set(2, light(4.0)).unwrap();
        assert!(set.is_dirty());
        assert!(set.resolve_order());
        assert_eq!(set.resolved().order, [2, 0, 1]);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut set = set_with([1.0, 2.0, 3.0]);
        set.resolve_order();
        let before = *set.lights();

        let err = set.set(3, light(9.0)).unwrap_err();
        assert_eq!(err, LightIndexError::OutOfRange { index: 3, max: 3 });
        assert!(set.set(usize::MAX, light(9.0)).is_err());

        assert_eq!(*set.lights(), before);
        assert!(!set.is_dirty());
        assert!(set.get(3).is_none());
    }
}
