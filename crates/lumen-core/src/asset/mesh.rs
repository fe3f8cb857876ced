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

//! Defines the GPU-resident mesh description.

use crate::renderer::api::{BufferId, VertexFormat};

/// A GPU-ready mesh: buffer handles plus the counts needed to draw it.
///
/// Indices describe a triangle list, so `index_count` is expected to be a
/// multiple of three; trailing indices are ignored when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuMesh {
    /// The layout of every vertex in `vertex_buffer`.
    pub vertex_format: VertexFormat,
    /// The vertex buffer ID containing interleaved vertex data.
    pub vertex_buffer: BufferId,
    /// The index buffer ID.
    pub index_buffer: BufferId,
    /// The number of vertices in `vertex_buffer`.
    pub vertex_count: u32,
    /// The number of indices in `index_buffer`.
    pub index_count: u32,
}

impl GpuMesh {
    /// The number of whole triangles described by the index buffer.
    #[inline]
    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_count_truncates() {
        let mesh = GpuMesh {
            vertex_format: VertexFormat::PHONG,
            vertex_buffer: BufferId(1),
            index_buffer: BufferId(2),
            vertex_count: 4,
            index_count: 8,
        };
        assert_eq!(mesh.triangle_count(), 2);
    }
}
