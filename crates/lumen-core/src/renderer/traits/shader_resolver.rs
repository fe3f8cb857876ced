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

use crate::renderer::api::{ShaderVariantKey, VertexProgramId};
use crate::renderer::error::ShaderError;
use crate::renderer::traits::RenderDevice;

/// Owns the compiled phong programs and binds the variant a draw needs.
pub trait ShaderResolver {
    /// The vertex program shared by every phong variant.
    fn vertex_program(&self) -> VertexProgramId;

    /// Selects the pixel shader matching `key` and binds it on `device`.
    ///
    /// # Errors
    ///
    /// * [`ShaderError::VariantNotFound`] if no compiled program matches the key.
    /// * [`ShaderError::BindFailed`] if the device refused the bind.
    fn bind_pixel_shader(
        &mut self,
        device: &mut dyn RenderDevice,
        key: ShaderVariantKey,
    ) -> Result<(), ShaderError>;
}
