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

//! Pixel shader variant selection from a material and the active light count.

use lumen_core::{
    asset::PhongMaterial,
    renderer::{BumpMode, ShaderVariantKey, SpecularMode},
};

/// Builds the pixel shader variant key for drawing `material` with
/// `active_lights` lights.
pub fn variant_key(active_lights: usize, material: &PhongMaterial) -> ShaderVariantKey {
    ShaderVariantKey::new(
        u8::try_from(active_lights).unwrap_or(u8::MAX),
        SpecularMode::from_material(material.is_specular_map(), material.is_specular_alpha()),
        BumpMode::from_material(material.is_bump_map()),
        material.is_self_illum_map(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{asset::MapType, renderer::TextureId};

    #[test]
    fn test_plain_material() {
        let key = variant_key(2, &PhongMaterial::default());
        assert_eq!(
            key,
            ShaderVariantKey::new(2, SpecularMode::None, BumpMode::None, false)
        );
    }

    #[test]
    fn test_fully_mapped_material() {
        let material = PhongMaterial::default()
            .with_map(MapType::Specular, TextureId(1))
            .with_map(MapType::Bump, TextureId(2))
            .with_map(MapType::SelfIllumination, TextureId(3))
            .with_specular_alpha(true);
        let key = variant_key(3, &material);
        assert_eq!(key.specular, SpecularMode::Mix);
        assert_eq!(key.bump, BumpMode::Specified);
        assert!(key.self_illum);
        assert_eq!(key.lights, 3);
    }

    #[test]
    fn test_diffuse_map_does_not_change_variant() {
        let plain = variant_key(1, &PhongMaterial::default());
        let textured = variant_key(
            1,
            &PhongMaterial::default().with_map(MapType::Diffuse, TextureId(5)),
        );
        assert_eq!(plain, textured);
    }
}
