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

use lumen_core::renderer::{
    PixelProgramId, RenderDevice, ShaderError, ShaderResolver, ShaderVariantKey, VertexProgramId,
};

#[derive(Debug, Clone, PartialEq)]
enum VariantSlot {
    Missing,
    Compiled(PixelProgramId),
    Failed(String),
}

/// A cache of precompiled phong pixel shaders, one per [`ShaderVariantKey`].
///
/// Variants are indexed densely by [`ShaderVariantKey::index`]. The headless
/// backend never compiles anything; variants are registered up front, and
/// can be removed or marked as failed to exercise the renderer's recovery.
#[derive(Debug)]
pub struct PhongShaderCache {
    vertex_program: VertexProgramId,
    variants: Vec<VariantSlot>,
    last_bound: Option<ShaderVariantKey>,
}

impl PhongShaderCache {
    /// Creates a cache with no pixel shader variants.
    pub fn new(vertex_program: VertexProgramId) -> Self {
        Self {
            vertex_program,
            variants: vec![VariantSlot::Missing; ShaderVariantKey::COUNT],
            last_bound: None,
        }
    }

    /// Creates a cache where every variant is compiled.
    ///
    /// Variant programs are numbered after their key index.
    pub fn with_all_variants(vertex_program: VertexProgramId) -> Self {
        let mut cache = Self::new(vertex_program);
        for (index, slot) in cache.variants.iter_mut().enumerate() {
            *slot = VariantSlot::Compiled(PixelProgramId(index));
        }
        cache
    }

    /// Registers the compiled program for `key`.
    pub fn insert_variant(&mut self, key: ShaderVariantKey, program: PixelProgramId) {
        self.variants[key.index()] = VariantSlot::Compiled(program);
    }

    /// Removes the program for `key`; binding it will fail with `VariantNotFound`.
    pub fn remove_variant(&mut self, key: ShaderVariantKey) {
        self.variants[key.index()] = VariantSlot::Missing;
    }

    /// Marks `key` as having failed to compile.
    pub fn mark_failed(&mut self, key: ShaderVariantKey, details: impl Into<String>) {
        self.variants[key.index()] = VariantSlot::Failed(details.into());
    }

    /// The program registered for `key`, if it compiled.
    pub fn program(&self, key: ShaderVariantKey) -> Option<PixelProgramId> {
        match self.variants[key.index()] {
            VariantSlot::Compiled(program) => Some(program),
            _ => None,
        }
    }

    /// The variant bound by the last successful
    /// [`bind_pixel_shader`](ShaderResolver::bind_pixel_shader).
    pub fn last_bound(&self) -> Option<ShaderVariantKey> {
        self.last_bound
    }
}

impl ShaderResolver for PhongShaderCache {
    fn vertex_program(&self) -> VertexProgramId {
        self.vertex_program
    }

    fn bind_pixel_shader(
        &mut self,
        device: &mut dyn RenderDevice,
        key: ShaderVariantKey,
    ) -> Result<(), ShaderError> {
        let program = match &self.variants[key.index()] {
            VariantSlot::Compiled(program) => *program,
            VariantSlot::Missing => return Err(ShaderError::VariantNotFound { key }),
            VariantSlot::Failed(details) => {
                return Err(ShaderError::CompilationFailed {
                    key,
                    details: details.clone(),
                })
            }
        };
        device.set_pixel_program(program)?;
        log::trace!("PhongShaderCache: bound {key} as {program:?}");
        self.last_bound = Some(key);
        Ok(())
    }
}
