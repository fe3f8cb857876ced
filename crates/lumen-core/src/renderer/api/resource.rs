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

//! Opaque handles to device-owned resources.
//!
//! The renderer never creates or destroys these resources; it only passes the
//! handles back to the device that issued them.

use std::fmt;

/// An opaque handle to a GPU buffer resource (vertex or index data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub usize);

/// An opaque handle to a GPU texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// An opaque handle to a compiled vertex program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexProgramId(pub usize);

/// An opaque handle to a compiled pixel program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelProgramId(pub usize);

/// A flexible vertex format descriptor: a bit set naming the attributes of
/// each vertex, in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexFormat(pub u32);

impl VertexFormat {
    /// Untransformed position, three floats.
    pub const POSITION: Self = Self(1 << 0);
    /// One set of 2D texture coordinates.
    pub const TEXCOORD: Self = Self(1 << 1);
    /// A normal frame packed as a quaternion, four floats.
    pub const NORMAL_QUAT: Self = Self(1 << 2);

    /// The layout of the phong mesh vertex: position, texcoord, normal quaternion.
    pub const PHONG: Self = Self(Self::POSITION.0 | Self::TEXCOORD.0 | Self::NORMAL_QUAT.0);

    /// Returns `true` if every attribute of `other` is present in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Size in bytes of one vertex in this format.
    pub const fn stride(self) -> u32 {
        let mut size = 0;
        if self.contains(Self::POSITION) {
            size += 12;
        }
        if self.contains(Self::TEXCOORD) {
            size += 8;
        }
        if self.contains(Self::NORMAL_QUAT) {
            size += 16;
        }
        size
    }
}

impl fmt::Debug for VertexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexFormat({:#06b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phong_format_stride() {
        assert!(VertexFormat::PHONG.contains(VertexFormat::TEXCOORD));
        assert!(!VertexFormat::POSITION.contains(VertexFormat::PHONG));
        assert_eq!(VertexFormat::PHONG.stride(), 36);
        assert_eq!(VertexFormat::POSITION.stride(), 12);
    }
}
