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

//! Errors returned by the lanes' fallible entry points.

use thiserror::Error;

/// A point light was addressed outside the view's fixed slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LightIndexError {
    /// The index does not name one of the light slots.
    #[error("light index {index} is out of range (expected 0..{max})")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The number of light slots.
        max: usize,
    },
}

/// A mesh view configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The RON source was malformed.
    #[error("failed to parse mesh view config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The configuration parsed but describes an unusable layout.
    #[error("invalid mesh view config: {0}")]
    Invalid(String),
}
