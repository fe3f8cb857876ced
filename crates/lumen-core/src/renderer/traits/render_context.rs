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

use crate::math::Mat4;
use crate::renderer::api::{CullMode, FillMode};
use crate::renderer::traits::{RenderDevice, ShaderResolver};

/// Remembers the coarse render state last applied to a device.
///
/// Views sharing a context consult this cache so that consecutive draws with
/// the same cull and fill modes issue no redundant state changes.
pub trait RenderStateCache {
    /// The cull mode most recently applied to the device.
    fn last_cull_mode(&self) -> CullMode;
    /// Records the cull mode just applied to the device.
    fn set_last_cull_mode(&mut self, mode: CullMode);
    /// The fill mode most recently applied to the device.
    fn last_fill_mode(&self) -> FillMode;
    /// Records the fill mode just applied to the device.
    fn set_last_fill_mode(&mut self, mode: FillMode);
}

/// The plain state cache most contexts embed.
///
/// Starts at `CullMode::None` and `FillMode::Solid`, the state of a freshly
/// created device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceStateCache {
    /// The cull mode last applied.
    pub cull_mode: CullMode,
    /// The fill mode last applied.
    pub fill_mode: FillMode,
}

impl RenderStateCache for DeviceStateCache {
    fn last_cull_mode(&self) -> CullMode {
        self.cull_mode
    }

    fn set_last_cull_mode(&mut self, mode: CullMode) {
        self.cull_mode = mode;
    }

    fn last_fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    fn set_last_fill_mode(&mut self, mode: FillMode) {
        self.fill_mode = mode;
    }
}

/// Simultaneous mutable access to the parts of a context a draw touches.
///
/// A context hands out one `ContextFrame` per render so the renderer can pass
/// the device to the shader resolver while also updating the state cache.
pub struct ContextFrame<'a> {
    /// The device commands are issued on.
    pub device: &'a mut dyn RenderDevice,
    /// The phong shader cache.
    pub shaders: &'a mut dyn ShaderResolver,
    /// The last-applied render state.
    pub state: &'a mut dyn RenderStateCache,
}

/// A rendering context: a device plus the per-device state views draw against.
pub trait RenderContext {
    /// The current world transform, row-major with the row-vector convention.
    fn world_transform(&self) -> Mat4;

    /// Borrows the device, shader resolver, and state cache for one draw.
    fn frame(&mut self) -> ContextFrame<'_>;
}
