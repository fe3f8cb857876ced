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

//! Shader variant selection types.

use crate::renderer::light::MAX_POINT_LIGHTS;
use std::fmt;

/// How the pixel shader sources specular intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecularMode {
    /// No specular contribution.
    #[default]
    None,
    /// Specular from a texture map.
    Texture,
    /// Specular map modulated by the specular color's alpha.
    Mix,
    /// Specular from the material's specular color only.
    Color,
}

impl SpecularMode {
    /// Derives the mode from the material's specular inputs.
    pub const fn from_material(has_specular_map: bool, has_specular_alpha: bool) -> Self {
        match (has_specular_map, has_specular_alpha) {
            (true, true) => SpecularMode::Mix,
            (true, false) => SpecularMode::Texture,
            (false, true) => SpecularMode::Color,
            (false, false) => SpecularMode::None,
        }
    }

    const fn ordinal(self) -> usize {
        match self {
            SpecularMode::None => 0,
            SpecularMode::Texture => 1,
            SpecularMode::Mix => 2,
            SpecularMode::Color => 3,
        }
    }
}

/// Whether the pixel shader perturbs normals with a bump map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BumpMode {
    /// Interpolated vertex normals only.
    #[default]
    None,
    /// Normals read from a bump/height map.
    Specified,
}

impl BumpMode {
    /// Derives the mode from the presence of a bump map.
    pub const fn from_material(has_bump_map: bool) -> Self {
        if has_bump_map {
            BumpMode::Specified
        } else {
            BumpMode::None
        }
    }
}

/// The feature tuple that selects one precompiled pixel shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderVariantKey {
    /// Number of active point lights, `0..=3`.
    pub lights: u8,
    /// The specular mode.
    pub specular: SpecularMode,
    /// The bump mode.
    pub bump: BumpMode,
    /// Whether a self-illumination map is sampled.
    pub self_illum: bool,
}

impl ShaderVariantKey {
    /// The number of distinct variants.
    pub const COUNT: usize = (MAX_POINT_LIGHTS + 1) * 4 * 2 * 2;

    /// Creates a new key. `lights` is clamped to [`MAX_POINT_LIGHTS`].
    pub fn new(lights: u8, specular: SpecularMode, bump: BumpMode, self_illum: bool) -> Self {
        Self {
            lights: lights.min(MAX_POINT_LIGHTS as u8),
            specular,
            bump,
            self_illum,
        }
    }

    /// A dense index in `0..COUNT`, suitable for a flat shader table.
    pub fn index(&self) -> usize {
        let bump = matches!(self.bump, BumpMode::Specified) as usize;
        ((self.lights as usize * 4 + self.specular.ordinal()) * 2 + bump) * 2
            + self.self_illum as usize
    }
}

impl fmt::Display for ShaderVariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[lights={}, specular={:?}, bump={:?}, self_illum={}]",
            self.lights, self.specular, self.bump, self.self_illum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_specular_mode_derivation() {
        assert_eq!(SpecularMode::from_material(false, false), SpecularMode::None);
        assert_eq!(SpecularMode::from_material(true, false), SpecularMode::Texture);
        assert_eq!(SpecularMode::from_material(true, true), SpecularMode::Mix);
        assert_eq!(SpecularMode::from_material(false, true), SpecularMode::Color);
    }

    #[test]
    fn test_bump_mode_derivation() {
        assert_eq!(BumpMode::from_material(true), BumpMode::Specified);
        assert_eq!(BumpMode::from_material(false), BumpMode::None);
    }

    #[test]
    fn test_variant_index_is_dense_and_unique() {
        let mut seen = HashSet::new();
        for lights in 0..=3u8 {
            for specular in [
                SpecularMode::None,
                SpecularMode::Texture,
                SpecularMode::Mix,
                SpecularMode::Color,
            ] {
                for bump in [BumpMode::None, BumpMode::Specified] {
                    for self_illum in [false, true] {
                        let idx = ShaderVariantKey::new(lights, specular, bump, self_illum).index();
                        assert!(idx < ShaderVariantKey::COUNT);
                        assert!(seen.insert(idx));
                    }
                }
            }
        }
        assert_eq!(seen.len(), ShaderVariantKey::COUNT);
    }

    #[test]
    fn test_light_count_is_clamped() {
        let key = ShaderVariantKey::new(9, SpecularMode::None, BumpMode::None, false);
        assert_eq!(key.lights, 3);
    }
}
