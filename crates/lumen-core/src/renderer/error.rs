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

//! Defines the hierarchy of error types for the rendering subsystem.

use crate::renderer::api::ShaderVariantKey;
use std::fmt;

/// An error reported by a single device call.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceError {
    /// The device refused the call (the equivalent of a failed result code).
    Rejected {
        /// The name of the device call that failed.
        call: &'static str,
        /// A backend-provided description of the failure.
        reason: String,
    },
    /// A buffer, texture, or program handle does not name a live resource.
    InvalidHandle,
    /// A constant upload would write outside the register file.
    RegisterOutOfRange {
        /// The first register of the upload.
        register: u32,
        /// The number of registers that were to be written.
        count: u32,
    },
    /// The device was lost and must be reset before it accepts further work.
    DeviceLost,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::Rejected { call, reason } => {
                write!(f, "Device call '{call}' failed: {reason}")
            }
            DeviceError::InvalidHandle => write!(f, "Invalid resource handle."),
            DeviceError::RegisterOutOfRange { register, count } => {
                write!(
                    f,
                    "Constant upload of {count} register(s) at c{register} is out of range"
                )
            }
            DeviceError::DeviceLost => write!(f, "The graphics device was lost."),
        }
    }
}

impl std::error::Error for DeviceError {}

/// An error related to resolving or binding a shader program.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// No compiled pixel shader matches the requested variant.
    VariantNotFound {
        /// The variant that was requested.
        key: ShaderVariantKey,
    },
    /// The variant exists but failed to compile.
    CompilationFailed {
        /// The variant that was requested.
        key: ShaderVariantKey,
        /// Detailed error messages from the shader compiler.
        details: String,
    },
    /// The variant was resolved but the device refused to bind it.
    BindFailed(DeviceError),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::VariantNotFound { key } => {
                write!(f, "No pixel shader variant for {key}")
            }
            ShaderError::CompilationFailed { key, details } => {
                write!(f, "Pixel shader variant {key} failed to compile: {details}")
            }
            ShaderError::BindFailed(err) => write!(f, "Failed to bind pixel shader: {err}"),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::BindFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DeviceError> for ShaderError {
    fn from(err: DeviceError) -> Self {
        ShaderError::BindFailed(err)
    }
}

/// The top-level error type for a failed rendering step.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A device call failed.
    Device(DeviceError),
    /// Shader resolution or binding failed.
    Shader(ShaderError),
    /// The rendering context is already borrowed by another render.
    ContextUnavailable,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Device(err) => write!(f, "Device error: {err}"),
            RenderError::Shader(err) => write!(f, "Shader error: {err}"),
            RenderError::ContextUnavailable => {
                write!(f, "The rendering context is in use by another render.")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Device(err) => Some(err),
            RenderError::Shader(err) => Some(err),
            RenderError::ContextUnavailable => None,
        }
    }
}

impl From<DeviceError> for RenderError {
    fn from(err: DeviceError) -> Self {
        RenderError::Device(err)
    }
}

impl From<ShaderError> for RenderError {
    fn from(err: ShaderError) -> Self {
        RenderError::Shader(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::api::{BumpMode, SpecularMode};
    use std::error::Error;

    #[test]
    fn test_device_error_display() {
        let err = DeviceError::Rejected {
            call: "set_texture",
            reason: "bad slot".to_string(),
        };
        assert_eq!(err.to_string(), "Device call 'set_texture' failed: bad slot");
        assert_eq!(
            DeviceError::RegisterOutOfRange {
                register: 30,
                count: 3
            }
            .to_string(),
            "Constant upload of 3 register(s) at c30 is out of range"
        );
    }

    #[test]
    fn test_shader_error_wraps_device_error() {
        let err: ShaderError = DeviceError::DeviceLost.into();
        assert_eq!(err, ShaderError::BindFailed(DeviceError::DeviceLost));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_render_error_conversions() {
        let key = ShaderVariantKey::new(2, SpecularMode::None, BumpMode::None, false);
        let shader: RenderError = ShaderError::VariantNotFound { key }.into();
        assert!(matches!(shader, RenderError::Shader(_)));
        assert!(shader.to_string().starts_with("Shader error: No pixel shader variant"));

        let device: RenderError = DeviceError::InvalidHandle.into();
        assert!(matches!(device, RenderError::Device(DeviceError::InvalidHandle)));
    }
}
