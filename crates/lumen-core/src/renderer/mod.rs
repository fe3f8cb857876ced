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

//! Provides the public, backend-agnostic rendering contracts.
//!
//! This module defines the "common language" between the mesh renderer and a
//! device backend: the abstract `traits` (like [`RenderDevice`]), the plain data
//! types passed across them (like [`DrawIndexed`]), and the error types.
//!
//! The 'how' is supplied by a backend crate implementing these traits; the
//! renderer in `lumen-lanes` only ever talks to them.

pub mod api;
pub mod error;
pub mod light;
pub mod traits;

// Re-export the most important traits and types for easier use.
pub use self::api::*;
pub use self::error::{DeviceError, RenderError, ShaderError};
pub use self::light::{PointLight, MAX_POINT_LIGHTS};
pub use self::traits::{
    ContextFrame, DeviceStateCache, RenderContext, RenderDevice, RenderStateCache, ShaderResolver,
};
