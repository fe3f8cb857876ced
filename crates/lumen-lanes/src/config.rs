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

//! Configuration of the shader constant layout a mesh view writes to.

use crate::error::ConfigError;
use lumen_core::renderer::{VertexFormat, MAX_POINT_LIGHTS};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Registers occupied by each light in the vertex stage: position and color.
pub const VERTEX_REGISTERS_PER_LIGHT: u32 = 2;
/// Registers occupied by the world matrix (three rows of the transpose).
pub const WORLD_MATRIX_REGISTERS: u32 = 3;

/// Where the phong shaders expect each constant.
///
/// The defaults match the register assignments compiled into the stock phong
/// vertex and pixel shaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderRegisterLayout {
    /// First vertex register of the light block (`2 * MAX_POINT_LIGHTS` registers).
    pub lights: u32,
    /// Vertex register of the ambient color.
    pub ambient_color: u32,
    /// First vertex register of the world matrix (3 registers).
    pub world_matrix: u32,
    /// Pixel register of the material's solid color.
    pub constant_color: u32,
    /// First pixel register of the weighted light colors (`MAX_POINT_LIGHTS` registers).
    pub light_color: u32,
}

impl Default for ShaderRegisterLayout {
    fn default() -> Self {
        Self {
            lights: 10,
            ambient_color: 20,
            world_matrix: 30,
            constant_color: 0,
            light_color: 4,
        }
    }
}

impl ShaderRegisterLayout {
    fn vertex_blocks(&self) -> Result<[(&'static str, Range<u32>); 3], ConfigError> {
        let lights_len = VERTEX_REGISTERS_PER_LIGHT * MAX_POINT_LIGHTS as u32;
        Ok([
            block("lights", self.lights, lights_len)?,
            block("ambient_color", self.ambient_color, 1)?,
            block("world_matrix", self.world_matrix, WORLD_MATRIX_REGISTERS)?,
        ])
    }

    fn pixel_blocks(&self) -> Result<[(&'static str, Range<u32>); 2], ConfigError> {
        Ok([
            block("constant_color", self.constant_color, 1)?,
            block("light_color", self.light_color, MAX_POINT_LIGHTS as u32)?,
        ])
    }

    /// Checks that every constant block fits in the `u32` register space and
    /// that no two blocks of the same stage overlap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_disjoint("vertex", &self.vertex_blocks()?)?;
        check_disjoint("pixel", &self.pixel_blocks()?)
    }
}

fn block(
    name: &'static str,
    start: u32,
    len: u32,
) -> Result<(&'static str, Range<u32>), ConfigError> {
    let end = start.checked_add(len).ok_or_else(|| {
        ConfigError::Invalid(format!(
            "registers '{name}' starting at {start} overflow the register space"
        ))
    })?;
    Ok((name, start..end))
}

fn check_disjoint(stage: &str, blocks: &[(&'static str, Range<u32>)]) -> Result<(), ConfigError> {
    for (i, (name_a, a)) in blocks.iter().enumerate() {
        for (name_b, b) in &blocks[i + 1..] {
            if a.start < b.end && b.start < a.end {
                return Err(ConfigError::Invalid(format!(
                    "{stage} registers '{name_a}' ({a:?}) and '{name_b}' ({b:?}) overlap"
                )));
            }
        }
    }
    Ok(())
}

/// Configuration of a [`MeshRenderView`](crate::MeshRenderView).
///
/// # Examples
///
/// ```
/// use lumen_lanes::MeshViewConfig;
///
/// let config = MeshViewConfig::from_ron_str("(vertex_stride: 36, registers: (lights: 12))").unwrap();
/// assert_eq!(config.registers.lights, 12);
/// assert_eq!(config.registers.world_matrix, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshViewConfig {
    /// The constant register layout.
    pub registers: ShaderRegisterLayout,
    /// Byte distance between consecutive vertices in a mesh vertex buffer.
    pub vertex_stride: u32,
}

impl Default for MeshViewConfig {
    fn default() -> Self {
        Self {
            registers: ShaderRegisterLayout::default(),
            vertex_stride: VertexFormat::PHONG.stride(),
        }
    }
}

impl MeshViewConfig {
    /// Parses and validates a configuration from RON. Missing fields take
    /// their default values.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let pretty_config = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        ron::ser::to_string_pretty(self, pretty_config)
    }

    /// Checks the register layout and the vertex stride.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vertex_stride == 0 {
            return Err(ConfigError::Invalid("vertex_stride must be nonzero".into()));
        }
        self.registers.validate()
    }
}
