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

//! Defines the `LinearRgba` color type.

use crate::math::vector::Vec4;
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Represents a color in a **linear RGBA** color space using `f32` components.
///
/// Component values may exceed `1.0`; light colors are routinely scaled by a
/// weight before being handed to a shader.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

impl LinearRgba {
    /// Opaque white (`[1.0, 1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black (`[0.0, 0.0, 0.0, 1.0]`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns the color with its RGB channels multiplied by `factor` and alpha
    /// forced to `1.0`.
    #[inline]
    pub fn scaled_rgb(&self, factor: f32) -> Self {
        Self::rgb(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Returns a new color with the same RGB but a different alpha.
    #[inline]
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }

    /// Converts this color into a [`Vec4`] (`r, g, b, a`).
    #[inline]
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }
}

impl Default for LinearRgba {
    /// Returns opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl Mul<f32> for LinearRgba {
    type Output = Self;
    /// Multiplies every channel, alpha included, by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl From<LinearRgba> for Vec4 {
    fn from(c: LinearRgba) -> Self {
        c.to_vec4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_rgb_keeps_alpha_opaque() {
        let c = LinearRgba::new(0.5, 1.0, 0.25, 0.3).scaled_rgb(2.0);
        assert_eq!(c, LinearRgba::new(1.0, 2.0, 0.5, 1.0));
    }

    #[test]
    fn test_scaled_rgb_by_zero_is_opaque_black() {
        assert_eq!(LinearRgba::WHITE.scaled_rgb(0.0), LinearRgba::BLACK);
    }

    #[test]
    fn test_default_and_conversion() {
        assert_eq!(LinearRgba::default(), LinearRgba::BLACK);
        let v: Vec4 = LinearRgba::rgb(0.1, 0.2, 0.3).into();
        assert_eq!(v, Vec4::new(0.1, 0.2, 0.3, 1.0));
        assert_eq!(LinearRgba::WHITE.with_alpha(0.0).a, 0.0);
        assert_eq!(LinearRgba::WHITE * 0.5, LinearRgba::new(0.5, 0.5, 0.5, 0.5));
    }
}
