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

//! A backend that executes no GPU work.
//!
//! [`RecordingDevice`] validates and records every call and keeps a simulated
//! register file, so the exact state a draw would see can be inspected.
//! Failures can be injected per call kind.

mod context;
mod device;
mod shader;

pub use context::HeadlessContext;
pub use device::{CommandKind, DeviceCommand, RecordingDevice};
pub use shader::PhongShaderCache;
