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

use super::{PhongShaderCache, RecordingDevice};
use lumen_core::math::Mat4;
use lumen_core::renderer::{ContextFrame, DeviceStateCache, RenderContext, VertexProgramId};

/// A rendering context over a [`RecordingDevice`].
///
/// Owns the device, a fully populated [`PhongShaderCache`], the render-state
/// cache, and the current world transform.
#[derive(Debug)]
pub struct HeadlessContext {
    device: RecordingDevice,
    shaders: PhongShaderCache,
    state: DeviceStateCache,
    world: Mat4,
}

impl Default for HeadlessContext {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessContext {
    /// Creates a context with a fresh device and every shader variant available.
    pub fn new() -> Self {
        Self::with_parts(
            RecordingDevice::new(),
            PhongShaderCache::with_all_variants(VertexProgramId(0)),
        )
    }

    /// Creates a context from an existing device and shader cache.
    pub fn with_parts(device: RecordingDevice, shaders: PhongShaderCache) -> Self {
        Self {
            device,
            shaders,
            state: DeviceStateCache::default(),
            world: Mat4::IDENTITY,
        }
    }

    /// The recording device.
    pub fn device(&self) -> &RecordingDevice {
        &self.device
    }

    /// Mutable access to the device, for creating resources and injecting
    /// failures. Use [`reset_device`](Self::reset_device) rather than
    /// `RecordingDevice::reset` so the state cache follows the device.
    pub fn device_mut(&mut self) -> &mut RecordingDevice {
        &mut self.device
    }

    /// The pixel shader variant cache.
    pub fn shaders(&self) -> &PhongShaderCache {
        &self.shaders
    }

    /// Mutable access to the shader cache.
    pub fn shaders_mut(&mut self) -> &mut PhongShaderCache {
        &mut self.shaders
    }

    /// The render state last applied through this context.
    pub fn state(&self) -> &DeviceStateCache {
        &self.state
    }

    /// Recovers a lost device and forgets the cached render state, which the
    /// reset returned to its defaults.
    pub fn reset_device(&mut self) {
        self.device.reset();
        self.state = DeviceStateCache::default();
        log::debug!("HeadlessContext: device reset, render state cache cleared");
    }

    /// Sets the transform used by subsequent renders.
    pub fn set_world_transform(&mut self, world: Mat4) {
        self.world = world;
    }
}

impl RenderContext for HeadlessContext {
    fn world_transform(&self) -> Mat4 {
        self.world
    }

    fn frame(&mut self) -> ContextFrame<'_> {
        ContextFrame {
            device: &mut self.device,
            shaders: &mut self.shaders,
            state: &mut self.state,
        }
    }
}
