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

//! # Lumen Infra
//!
//! Concrete implementations of the contracts defined in `lumen-core`.
//!
//! The only graphics backend is [`graphics::headless`], which records every
//! device call instead of talking to a GPU. It backs the test suites and the
//! sandbox demo.

pub mod graphics;
pub mod logging;

pub use graphics::headless::{HeadlessContext, PhongShaderCache, RecordingDevice};
pub use logging::init_logging;
