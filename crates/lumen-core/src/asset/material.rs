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

//! Defines the phong material and its texture map semantics.

use crate::{math::LinearRgba, renderer::api::TextureId};

/// The semantic of a texture map on a [`PhongMaterial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapType {
    /// Base color map.
    Diffuse,
    /// Specular intensity map.
    Specular,
    /// Bump/height map.
    Bump,
    /// Self-illumination map.
    SelfIllumination,
}

impl MapType {
    /// All map types, in sampler order.
    pub const ALL: [MapType; 4] = [
        MapType::Diffuse,
        MapType::Specular,
        MapType::Bump,
        MapType::SelfIllumination,
    ];

    #[inline]
    const fn slot(self) -> usize {
        match self {
            MapType::Diffuse => 0,
            MapType::Specular => 1,
            MapType::Bump => 2,
            MapType::SelfIllumination => 3,
        }
    }
}

/// A phong material: a solid base color plus up to four texture maps.
///
/// # Examples
///
/// ```
/// use lumen_core::asset::{MapType, PhongMaterial};
/// use lumen_core::math::LinearRgba;
/// use lumen_core::renderer::TextureId;
///
/// let brick = PhongMaterial::new(LinearRgba::rgb(0.6, 0.3, 0.2))
///     .with_map(MapType::Diffuse, TextureId(1))
///     .with_map(MapType::Bump, TextureId(2));
/// assert!(brick.is_bump_map());
/// assert!(!brick.is_specular_map());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PhongMaterial {
    /// The solid diffuse color, multiplied with the diffuse map when present.
    pub diffuse_color: LinearRgba,

    /// Whether the specular color carries a meaningful alpha channel.
    pub specular_alpha: bool,

    maps: [Option<TextureId>; 4],
}

impl PhongMaterial {
    /// Creates an untextured material with the given solid color.
    pub fn new(diffuse_color: LinearRgba) -> Self {
        Self {
            diffuse_color,
            specular_alpha: false,
            maps: [None; 4],
        }
    }

    /// Builder-style variant of [`set_map`](Self::set_map).
    pub fn with_map(mut self, map: MapType, texture: TextureId) -> Self {
        self.set_map(map, Some(texture));
        self
    }

    /// Builder-style setter for [`specular_alpha`](Self::specular_alpha).
    pub fn with_specular_alpha(mut self, specular_alpha: bool) -> Self {
        self.specular_alpha = specular_alpha;
        self
    }

    /// Replaces (or clears, with `None`) one texture map.
    pub fn set_map(&mut self, map: MapType, texture: Option<TextureId>) {
        self.maps[map.slot()] = texture;
    }

    /// Returns the texture bound to `map`, if any.
    #[inline]
    pub fn map(&self, map: MapType) -> Option<TextureId> {
        self.maps[map.slot()]
    }

    /// Returns `true` if a texture is bound to `map`.
    #[inline]
    pub fn has_map(&self, map: MapType) -> bool {
        self.map(map).is_some()
    }

    /// Returns `true` if a specular map is present.
    pub fn is_specular_map(&self) -> bool {
        self.has_map(MapType::Specular)
    }

    /// Returns `true` if the specular color's alpha is used.
    pub fn is_specular_alpha(&self) -> bool {
        self.specular_alpha
    }

    /// Returns `true` if a bump map is present.
    pub fn is_bump_map(&self) -> bool {
        self.has_map(MapType::Bump)
    }

    /// Returns `true` if a self-illumination map is present.
    pub fn is_self_illum_map(&self) -> bool {
        self.has_map(MapType::SelfIllumination)
    }
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self::new(LinearRgba::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material_has_no_maps() {
        let material = PhongMaterial::default();
        assert_eq!(material.diffuse_color, LinearRgba::WHITE);
        assert!(MapType::ALL.iter().all(|m| !material.has_map(*m)));
        assert!(!material.is_specular_alpha());
    }

    #[test]
    fn test_set_and_clear_map() {
        let mut material = PhongMaterial::default().with_map(MapType::Specular, TextureId(7));
        assert!(material.is_specular_map());
        assert_eq!(material.map(MapType::Specular), Some(TextureId(7)));

        material.set_map(MapType::Specular, None);
        assert!(!material.is_specular_map());
    }

    #[test]
    fn test_queries_are_independent() {
        let material = PhongMaterial::default()
            .with_map(MapType::SelfIllumination, TextureId(3))
            .with_specular_alpha(true);
        assert!(material.is_self_illum_map());
        assert!(material.is_specular_alpha());
        assert!(!material.is_bump_map());
        assert!(!material.has_map(MapType::Diffuse));
    }
}
