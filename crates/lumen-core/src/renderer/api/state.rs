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

//! Coarse render state, sampler slots, and draw call descriptors.

use crate::asset::MapType;

/// Defines which face of a triangle to cull (not render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    /// No culling is performed.
    #[default]
    None,
    /// Cull front-facing triangles.
    Front,
    /// Cull back-facing triangles.
    Back,
}

/// Defines how polygons are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    /// Polygons are filled. This is the normal rendering mode.
    #[default]
    Solid,
    /// Polygons are rendered as outlines.
    Wireframe,
}

impl FillMode {
    /// Maps a wireframe toggle onto a fill mode.
    #[inline]
    pub const fn from_wireframe(wireframe: bool) -> Self {
        if wireframe {
            FillMode::Wireframe
        } else {
            FillMode::Solid
        }
    }
}

/// A single coarse render-state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStateChange {
    /// Change the face culling mode.
    CullMode(CullMode),
    /// Change the polygon fill mode.
    FillMode(FillMode),
}

/// The fixed texture sampler slots of the phong pixel shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerSlot {
    /// `s0`: diffuse map.
    Diffuse,
    /// `s1`: specular map.
    Specular,
    /// `s2`: bump/height map.
    BumpHeight,
    /// `s3`: self-illumination map.
    SelfIllumination,
}

impl SamplerSlot {
    /// All slots, in register order.
    pub const ALL: [SamplerSlot; 4] = [
        SamplerSlot::Diffuse,
        SamplerSlot::Specular,
        SamplerSlot::BumpHeight,
        SamplerSlot::SelfIllumination,
    ];

    /// The sampler register index.
    #[inline]
    pub const fn index(self) -> u32 {
        match self {
            SamplerSlot::Diffuse => 0,
            SamplerSlot::Specular => 1,
            SamplerSlot::BumpHeight => 2,
            SamplerSlot::SelfIllumination => 3,
        }
    }
}

impl From<MapType> for SamplerSlot {
    fn from(map: MapType) -> Self {
        match map {
            MapType::Diffuse => SamplerSlot::Diffuse,
            MapType::Specular => SamplerSlot::Specular,
            MapType::Bump => SamplerSlot::BumpHeight,
            MapType::SelfIllumination => SamplerSlot::SelfIllumination,
        }
    }
}

/// Defines how vertices are connected to form a geometric primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
    /// Every three indices form an isolated triangle.
    TriangleList,
    /// Indices form a connected triangle strip.
    TriangleStrip,
}

/// Parameters of an indexed draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawIndexed {
    /// The primitive topology.
    pub topology: PrimitiveTopology,
    /// Value added to every index before fetching a vertex.
    pub base_vertex: i32,
    /// Lowest vertex index referenced by the draw.
    pub min_index: u32,
    /// Number of vertices referenced by the draw, starting at `min_index`.
    pub num_vertices: u32,
    /// First index read from the index buffer.
    pub start_index: u32,
    /// Number of primitives to draw.
    pub primitive_count: u32,
}
