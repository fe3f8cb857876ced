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

use crate::math::Vec4;
use crate::renderer::api::*;
use crate::renderer::error::DeviceError;

/// The immediate-mode device operations the mesh renderer issues.
///
/// Every call is fallible. The renderer treats a failure as non-fatal: it logs
/// the error and moves on to the next call, so an implementation must leave the
/// device in a usable state after returning an error.
pub trait RenderDevice {
    /// Declares the vertex layout of the stream that follows.
    fn set_vertex_format(&mut self, format: VertexFormat) -> Result<(), DeviceError>;

    /// Binds a compiled vertex program.
    fn set_vertex_program(&mut self, program: VertexProgramId) -> Result<(), DeviceError>;

    /// Binds a compiled pixel program.
    fn set_pixel_program(&mut self, program: PixelProgramId) -> Result<(), DeviceError>;

    /// Uploads `data.len()` consecutive vertex-stage constant registers starting at `register`.
    fn set_vertex_constants(&mut self, register: u32, data: &[Vec4]) -> Result<(), DeviceError>;

    /// Uploads `data.len()` consecutive pixel-stage constant registers starting at `register`.
    fn set_pixel_constants(&mut self, register: u32, data: &[Vec4]) -> Result<(), DeviceError>;

    /// Applies a single coarse render-state change.
    fn set_render_state(&mut self, change: RenderStateChange) -> Result<(), DeviceError>;

    /// Binds a texture to a sampler slot. `None` unbinds the slot.
    fn set_texture(
        &mut self,
        slot: SamplerSlot,
        texture: Option<TextureId>,
    ) -> Result<(), DeviceError>;

    /// Binds a vertex buffer to a stream.
    /// ## Arguments
    /// * `stream` - The stream index.
    /// * `buffer` - The vertex buffer.
    /// * `offset` - Byte offset of the first vertex.
    /// * `stride` - Byte distance between consecutive vertices.
    fn set_stream_source(
        &mut self,
        stream: u32,
        buffer: BufferId,
        offset: u32,
        stride: u32,
    ) -> Result<(), DeviceError>;

    /// Binds the index buffer for subsequent indexed draws.
    fn set_indices(&mut self, buffer: BufferId) -> Result<(), DeviceError>;

    /// Issues an indexed draw call with the currently bound state.
    fn draw_indexed_primitive(&mut self, draw: &DrawIndexed) -> Result<(), DeviceError>;
}
