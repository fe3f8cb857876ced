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

use lumen_core::math::Vec4;
use lumen_core::renderer::{
    BufferId, CullMode, DeviceError, DrawIndexed, FillMode, PixelProgramId, RenderDevice,
    RenderStateChange, SamplerSlot, TextureId, VertexFormat, VertexProgramId,
};
use std::collections::{HashMap, HashSet};

/// Number of vertex-stage constant registers on a shader model 3 device.
const DEFAULT_VERTEX_REGISTERS: usize = 256;
/// Number of pixel-stage constant registers on a shader model 3 device.
const DEFAULT_PIXEL_REGISTERS: usize = 32;

/// One call made on a [`RecordingDevice`], with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCommand {
    /// `set_vertex_format`
    SetVertexFormat(VertexFormat),
    /// `set_vertex_program`
    SetVertexProgram(VertexProgramId),
    /// `set_pixel_program`
    SetPixelProgram(PixelProgramId),
    /// `set_vertex_constants`
    SetVertexConstants {
        /// First register written.
        register: u32,
        /// The uploaded registers.
        data: Vec<Vec4>,
    },
    /// `set_pixel_constants`
    SetPixelConstants {
        /// First register written.
        register: u32,
        /// The uploaded registers.
        data: Vec<Vec4>,
    },
    /// `set_render_state`
    SetRenderState(RenderStateChange),
    /// `set_texture`
    SetTexture {
        /// The sampler slot.
        slot: SamplerSlot,
        /// The bound texture, `None` to unbind.
        texture: Option<TextureId>,
    },
    /// `set_stream_source`
    SetStreamSource {
        /// The stream index.
        stream: u32,
        /// The vertex buffer.
        buffer: BufferId,
        /// Byte offset of the first vertex.
        offset: u32,
        /// Bytes per vertex.
        stride: u32,
    },
    /// `set_indices`
    SetIndices(BufferId),
    /// `draw_indexed_primitive`
    DrawIndexedPrimitive(DrawIndexed),
}

/// The kind of a [`DeviceCommand`], without its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Declaring the vertex format.
    SetVertexFormat,
    /// Binding a vertex program.
    SetVertexProgram,
    /// Binding a pixel program.
    SetPixelProgram,
    /// Uploading vertex constants.
    SetVertexConstants,
    /// Uploading pixel constants.
    SetPixelConstants,
    /// Changing cull or fill mode.
    SetRenderState,
    /// Binding or unbinding a texture.
    SetTexture,
    /// Binding the vertex buffer.
    SetStreamSource,
    /// Binding the index buffer.
    SetIndices,
    /// Issuing an indexed draw.
    DrawIndexedPrimitive,
}

impl CommandKind {
    fn call_name(self) -> &'static str {
        match self {
            CommandKind::SetVertexFormat => "set_vertex_format",
            CommandKind::SetVertexProgram => "set_vertex_program",
            CommandKind::SetPixelProgram => "set_pixel_program",
            CommandKind::SetVertexConstants => "set_vertex_constants",
            CommandKind::SetPixelConstants => "set_pixel_constants",
            CommandKind::SetRenderState => "set_render_state",
            CommandKind::SetTexture => "set_texture",
            CommandKind::SetStreamSource => "set_stream_source",
            CommandKind::SetIndices => "set_indices",
            CommandKind::DrawIndexedPrimitive => "draw_indexed_primitive",
        }
    }
}

impl DeviceCommand {
    /// The kind of this command.
    pub fn kind(&self) -> CommandKind {
        match self {
            DeviceCommand::SetVertexFormat(_) => CommandKind::SetVertexFormat,
            DeviceCommand::SetVertexProgram(_) => CommandKind::SetVertexProgram,
            DeviceCommand::SetPixelProgram(_) => CommandKind::SetPixelProgram,
            DeviceCommand::SetVertexConstants { .. } => CommandKind::SetVertexConstants,
            DeviceCommand::SetPixelConstants { .. } => CommandKind::SetPixelConstants,
            DeviceCommand::SetRenderState(_) => CommandKind::SetRenderState,
            DeviceCommand::SetTexture { .. } => CommandKind::SetTexture,
            DeviceCommand::SetStreamSource { .. } => CommandKind::SetStreamSource,
            DeviceCommand::SetIndices(_) => CommandKind::SetIndices,
            DeviceCommand::DrawIndexedPrimitive(_) => CommandKind::DrawIndexedPrimitive,
        }
    }
}

/// A device that records calls instead of executing them.
///
/// Every call is appended to the command log before it is validated, so a
/// failed call still shows up in [`commands`](Self::commands). Successful
/// calls update the simulated device state (constant registers, bound
/// textures, render state, stream bindings).
#[derive(Debug)]
pub struct RecordingDevice {
    commands: Vec<DeviceCommand>,
    failing: HashSet<CommandKind>,
    lost: bool,

    vertex_registers: Vec<Vec4>,
    pixel_registers: Vec<Vec4>,
    textures: [Option<TextureId>; 4],
    cull_mode: CullMode,
    fill_mode: FillMode,
    vertex_format: Option<VertexFormat>,
    vertex_program: Option<VertexProgramId>,
    pixel_program: Option<PixelProgramId>,
    stream_source: Option<(BufferId, u32, u32)>,
    index_buffer: Option<BufferId>,

    buffers: HashMap<BufferId, Vec<u8>>,
    live_textures: HashSet<TextureId>,
    next_buffer_id: usize,
    next_texture_id: usize,
    draw_count: u32,
}

impl Default for RecordingDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingDevice {
    /// Creates a device with shader model 3 register files.
    pub fn new() -> Self {
        Self::with_register_counts(DEFAULT_VERTEX_REGISTERS, DEFAULT_PIXEL_REGISTERS)
    }

    /// Creates a device with the given number of vertex and pixel registers.
    pub fn with_register_counts(vertex: usize, pixel: usize) -> Self {
        Self {
            commands: Vec::new(),
            failing: HashSet::new(),
            lost: false,
            vertex_registers: vec![Vec4::ZERO; vertex],
            pixel_registers: vec![Vec4::ZERO; pixel],
            textures: [None; 4],
            cull_mode: CullMode::None,
            fill_mode: FillMode::Solid,
            vertex_format: None,
            vertex_program: None,
            pixel_program: None,
            stream_source: None,
            index_buffer: None,
            buffers: HashMap::new(),
            live_textures: HashSet::new(),
            next_buffer_id: 1,
            next_texture_id: 1,
            draw_count: 0,
        }
    }

    // --- Resources ---

    /// Creates a buffer holding `contents` and returns its handle.
    pub fn create_buffer(&mut self, contents: &[u8]) -> BufferId {
        let id = BufferId(self.next_buffer_id);
        self.next_buffer_id += 1;
        self.buffers.insert(id, contents.to_vec());
        log::trace!("RecordingDevice: created {:?} ({} bytes)", id, contents.len());
        id
    }

    /// Creates a buffer from a slice of plain-old-data values.
    pub fn create_buffer_init<T: bytemuck::Pod>(&mut self, contents: &[T]) -> BufferId {
        self.create_buffer(bytemuck::cast_slice(contents))
    }

    /// The contents of a buffer, or `None` if the handle is unknown.
    pub fn buffer_contents(&self, id: BufferId) -> Option<&[u8]> {
        self.buffers.get(&id).map(Vec::as_slice)
    }

    /// Creates a texture and returns its handle.
    pub fn create_texture(&mut self) -> TextureId {
        let id = TextureId(self.next_texture_id);
        self.next_texture_id += 1;
        self.live_textures.insert(id);
        id
    }

    // --- Failure injection ---

    /// Makes every subsequent call of `kind` fail with [`DeviceError::Rejected`].
    pub fn fail_on(&mut self, kind: CommandKind) {
        self.failing.insert(kind);
    }

    /// Stops injecting failures for `kind`.
    pub fn succeed_on(&mut self, kind: CommandKind) {
        self.failing.remove(&kind);
    }

    /// Simulates a lost device: every call fails until [`reset`](Self::reset).
    pub fn lose(&mut self) {
        self.lost = true;
    }

    /// Recovers from a lost device. Bound state is cleared; resources survive.
    ///
    /// A context caching render state must forget it too; see
    /// [`HeadlessContext::reset_device`](super::HeadlessContext::reset_device).
    pub fn reset(&mut self) {
        self.lost = false;
        self.textures = [None; 4];
        self.cull_mode = CullMode::None;
        self.fill_mode = FillMode::Solid;
        self.vertex_format = None;
        self.vertex_program = None;
        self.pixel_program = None;
        self.stream_source = None;
        self.index_buffer = None;
    }

    // --- Inspection ---

    /// Every call made since creation or the last [`clear_commands`](Self::clear_commands).
    pub fn commands(&self) -> &[DeviceCommand] {
        &self.commands
    }

    /// Forgets the recorded calls. Device state is kept.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded calls of `kind`.
    pub fn count(&self, kind: CommandKind) -> usize {
        self.commands.iter().filter(|c| c.kind() == kind).count()
    }

    /// Number of draw calls that succeeded.
    pub fn draw_count(&self) -> u32 {
        self.draw_count
    }

    /// A vertex register, or `None` past the end of the register file.
    pub fn vertex_register(&self, register: u32) -> Option<Vec4> {
        self.vertex_registers.get(register as usize).copied()
    }

    /// A pixel register, or `None` past the end of the register file.
    pub fn pixel_register(&self, register: u32) -> Option<Vec4> {
        self.pixel_registers.get(register as usize).copied()
    }

    /// `count` vertex registers starting at `register`, flattened to floats.
    pub fn vertex_register_floats(&self, register: u32, count: u32) -> Option<&[f32]> {
        let start = register as usize;
        let regs = self.vertex_registers.get(start..start + count as usize)?;
        Some(bytemuck::cast_slice(regs))
    }

    /// The texture bound to `slot`.
    pub fn texture(&self, slot: SamplerSlot) -> Option<TextureId> {
        self.textures[slot.index() as usize]
    }

    /// The current cull mode.
    pub fn cull_mode(&self) -> CullMode {
        self.cull_mode
    }

    /// The current fill mode.
    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    /// The bound pixel program.
    pub fn pixel_program(&self) -> Option<PixelProgramId> {
        self.pixel_program
    }

    /// The bound vertex program.
    pub fn vertex_program(&self) -> Option<VertexProgramId> {
        self.vertex_program
    }

    /// The bound vertex format.
    pub fn vertex_format(&self) -> Option<VertexFormat> {
        self.vertex_format
    }

    /// The buffer, offset, and stride bound to stream 0.
    pub fn stream_source(&self) -> Option<(BufferId, u32, u32)> {
        self.stream_source
    }

    /// The bound index buffer.
    pub fn index_buffer(&self) -> Option<BufferId> {
        self.index_buffer
    }

    // --- Internals ---

    fn record(&mut self, command: DeviceCommand) -> Result<(), DeviceError> {
        let kind = command.kind();
        self.commands.push(command);
        if self.lost {
            return Err(DeviceError::DeviceLost);
        }
        if self.failing.contains(&kind) {
            return Err(DeviceError::Rejected {
                call: kind.call_name(),
                reason: "injected failure".to_string(),
            });
        }
        Ok(())
    }

    fn check_buffer(&self, id: BufferId) -> Result<(), DeviceError> {
        if self.buffers.contains_key(&id) {
            Ok(())
        } else {
            Err(DeviceError::InvalidHandle)
        }
    }

    fn write_registers(
        registers: &mut [Vec4],
        register: u32,
        data: &[Vec4],
    ) -> Result<(), DeviceError> {
        let start = register as usize;
        let target = start
            .checked_add(data.len())
            .and_then(|end| registers.get_mut(start..end))
            .ok_or(DeviceError::RegisterOutOfRange {
                register,
                count: data.len() as u32,
            })?;
        target.copy_from_slice(data);
        Ok(())
    }
}

impl RenderDevice for RecordingDevice {
    fn set_vertex_format(&mut self, format: VertexFormat) -> Result<(), DeviceError> {
        self.record(DeviceCommand::SetVertexFormat(format))?;
        self.vertex_format = Some(format);
        Ok(())
    }

    fn set_vertex_program(&mut self, program: VertexProgramId) -> Result<(), DeviceError> {
        self.record(DeviceCommand::SetVertexProgram(program))?;
        self.vertex_program = Some(program);
        Ok(())
    }

    fn set_pixel_program(&mut self, program: PixelProgramId) -> Result<(), DeviceError> {
        self.record(DeviceCommand::SetPixelProgram(program))?;
        self.pixel_program = Some(program);
        Ok(())
    }

    fn set_vertex_constants(&mut self, register: u32, data: &[Vec4]) -> Result<(), DeviceError> {
        self.record(DeviceCommand::SetVertexConstants {
            register,
            data: data.to_vec(),
        })?;
        Self::write_registers(&mut self.vertex_registers, register, data)
    }

    fn set_pixel_constants(&mut self, register: u32, data: &[Vec4]) -> Result<(), DeviceError> {
        self.record(DeviceCommand::SetPixelConstants {
            register,
            data: data.to_vec(),
        })?;
        Self::write_registers(&mut self.pixel_registers, register, data)
    }

    fn set_render_state(&mut self, change: RenderStateChange) -> Result<(), DeviceError> {
        self.record(DeviceCommand::SetRenderState(change))?;
        match change {
            RenderStateChange::CullMode(mode) => self.cull_mode = mode,
            RenderStateChange::FillMode(mode) => self.fill_mode = mode,
        }
        Ok(())
    }

    fn set_texture(
        &mut self,
        slot: SamplerSlot,
        texture: Option<TextureId>,
    ) -> Result<(), DeviceError> {
        self.record(DeviceCommand::SetTexture { slot, texture })?;
        if let Some(id) = texture {
            if !self.live_textures.contains(&id) {
                return Err(DeviceError::InvalidHandle);
            }
        }
        self.textures[slot.index() as usize] = texture;
        Ok(())
    }

    fn set_stream_source(
        &mut self,
        stream: u32,
        buffer: BufferId,
        offset: u32,
        stride: u32,
    ) -> Result<(), DeviceError> {
        self.record(DeviceCommand::SetStreamSource {
            stream,
            buffer,
            offset,
            stride,
        })?;
        if stream != 0 {
            return Err(DeviceError::Rejected {
                call: "set_stream_source",
                reason: format!("stream {stream} is not supported"),
            });
        }
        self.check_buffer(buffer)?;
        self.stream_source = Some((buffer, offset, stride));
        Ok(())
    }

    fn set_indices(&mut self, buffer: BufferId) -> Result<(), DeviceError> {
        self.record(DeviceCommand::SetIndices(buffer))?;
        self.check_buffer(buffer)?;
        self.index_buffer = Some(buffer);
        Ok(())
    }

    fn draw_indexed_primitive(&mut self, draw: &DrawIndexed) -> Result<(), DeviceError> {
        self.record(DeviceCommand::DrawIndexedPrimitive(*draw))?;
        if self.stream_source.is_none() || self.index_buffer.is_none() {
            return Err(DeviceError::Rejected {
                call: "draw_indexed_primitive",
                reason: "no vertex or index buffer bound".to_string(),
            });
        }
        self.draw_count += 1;
        Ok(())
    }
}
