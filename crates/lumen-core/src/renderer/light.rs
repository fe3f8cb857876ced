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

//! Defines the weighted point light used by the mesh renderer.

use crate::math::{LinearRgba, Vec3, Vec4};

/// The number of point light slots a mesh view supports.
pub const MAX_POINT_LIGHTS: usize = 3;

/// A point light with a scalar weight.
///
/// The weight is both the light's priority and its intensity: lights are
/// ordered by descending weight before being bound, and the color a shader
/// sees is `color * weight`. A weight of exactly `0.0` marks the slot inactive.
///
/// # Examples
///
/// ```
/// use lumen_core::renderer::light::PointLight;
/// use lumen_core::math::{Vec3, LinearRgba};
///
/// let lamp = PointLight::new(Vec3::new(0.0, 2.0, 0.0), LinearRgba::rgb(1.0, 0.9, 0.7), 0.5);
/// assert!(lamp.is_active());
/// assert!(!PointLight::OFF.is_active());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// The position of the light in world space.
    pub position: Vec3,
    /// The color of the light. Only the RGB channels are used.
    pub color: LinearRgba,
    /// The priority/intensity of the light. `0.0` means inactive.
    pub weight: f32,
}

impl PointLight {
    /// An inactive light at the origin.
    pub const OFF: Self = Self {
        position: Vec3::ZERO,
        color: LinearRgba::BLACK,
        weight: 0.0,
    };

    /// Creates a new point light.
    pub const fn new(position: Vec3, color: LinearRgba, weight: f32) -> Self {
        Self {
            position,
            color,
            weight,
        }
    }

    /// Returns `true` if the light has a nonzero weight.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.weight != 0.0
    }

    /// The vertex-stage register for this light: `(x, y, z, weight)`.
    #[inline]
    pub fn position_register(&self) -> Vec4 {
        self.position.extend(self.weight)
    }

    /// The light color with its RGB scaled by the weight and alpha fixed at `1.0`.
    #[inline]
    pub fn weighted_color(&self) -> LinearRgba {
        self.color.scaled_rgb(self.weight)
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::OFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_light_is_inactive() {
        let light = PointLight::default();
        assert!(!light.is_active());
        assert_eq!(light.weighted_color(), LinearRgba::BLACK);
    }

    #[test]
    fn test_negative_weight_counts_as_active() {
        let light = PointLight::new(Vec3::ZERO, LinearRgba::WHITE, -1.0);
        assert!(light.is_active());
    }

    #[test]
    fn test_registers() {
        let light = PointLight::new(Vec3::new(1.0, 2.0, 3.0), LinearRgba::rgb(0.5, 0.25, 1.0), 2.0);
        assert_eq!(light.position_register(), Vec4::new(1.0, 2.0, 3.0, 2.0));
        assert_eq!(light.weighted_color(), LinearRgba::rgb(1.0, 0.5, 2.0));
    }
}
