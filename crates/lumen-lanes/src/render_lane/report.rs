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

//! Per-render outcome reporting.

use lumen_core::renderer::{RenderError, SamplerSlot, ShaderError};
use std::fmt;

/// One step of a mesh render, used to attribute failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStep {
    /// Borrowing the shared rendering context.
    AcquireContext,
    /// Declaring the mesh vertex format.
    BindVertexFormat,
    /// Binding the phong vertex program.
    BindVertexProgram,
    /// Uploading the position/color registers of the n-th heaviest light.
    UploadLight(usize),
    /// Uploading the ambient color.
    UploadAmbientColor,
    /// Uploading the material's solid color.
    UploadMaterialColor,
    /// Resolving and binding the pixel shader variant.
    BindPixelShader,
    /// Uploading the weighted light colors.
    UploadLightColors,
    /// Binding a material map to its sampler.
    BindTexture(SamplerSlot),
    /// Uploading the world matrix.
    UploadWorldMatrix,
    /// Changing the cull mode.
    SetCullMode,
    /// Changing the fill mode.
    SetFillMode,
    /// Binding the vertex buffer.
    BindVertexBuffer,
    /// Binding the index buffer.
    BindIndexBuffer,
    /// Issuing the draw call.
    Draw,
}

impl fmt::Display for RenderStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStep::UploadLight(i) => write!(f, "UploadLight[{i}]"),
            RenderStep::BindTexture(slot) => write!(f, "BindTexture[{slot:?}]"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// A failed step of a render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFailure {
    /// The step that failed.
    pub step: RenderStep,
    /// What went wrong.
    pub error: RenderError,
}

/// The outcome of one [`MeshRenderView::render`](crate::MeshRenderView::render).
///
/// Rendering is best-effort: failed steps are collected here rather than
/// aborting the draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    /// `true` if nothing was drawn because no material was set.
    pub skipped: bool,
    /// `true` once the draw call was issued, whether or not it succeeded.
    pub draw_issued: bool,
    /// `true` if the light order was recomputed during this render.
    pub lights_resorted: bool,
    /// Number of render-state changes the device accepted. Refused changes
    /// appear in `failures` instead.
    pub state_changes: u32,
    /// Every step that failed, in execution order.
    pub failures: Vec<RenderFailure>,
}

impl RenderReport {
    pub(crate) fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }

    /// Records `result` for `step`, logging a failure. Returns `true` on success.
    pub(crate) fn check<E: Into<RenderError>>(
        &mut self,
        step: RenderStep,
        result: Result<(), E>,
    ) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                self.fail(step, err.into());
                false
            }
        }
    }

    pub(crate) fn fail(&mut self, step: RenderStep, error: RenderError) {
        log::warn!("MeshRenderView: {step} failed: {error}");
        self.failures.push(RenderFailure { step, error });
    }

    /// Returns `true` if the mesh was drawn and every step succeeded.
    pub fn is_clean(&self) -> bool {
        !self.skipped && self.draw_issued && self.failures.is_empty()
    }

    /// The shader variant resolution failure, if any.
    ///
    /// This is a recoverable warning: the draw still went ahead with whatever
    /// pixel shader was bound before.
    pub fn shader_warning(&self) -> Option<&ShaderError> {
        self.failures.iter().find_map(|f| match (&f.step, &f.error) {
            (RenderStep::BindPixelShader, RenderError::Shader(err)) => Some(err),
            _ => None,
        })
    }

    /// Returns the failure recorded for `step`, if any.
    pub fn failure(&self, step: RenderStep) -> Option<&RenderFailure> {
        self.failures.iter().find(|f| f.step == step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::renderer::{BumpMode, DeviceError, ShaderVariantKey, SpecularMode};

    #[test]
    fn test_check_collects_failures() {
        let mut report = RenderReport::default();
        assert!(report.check::<DeviceError>(RenderStep::Draw, Ok(())));
        assert!(!report.check(RenderStep::SetCullMode, Err(DeviceError::DeviceLost)));
        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failure(RenderStep::SetCullMode).map(|f| &f.error),
            Some(&RenderError::Device(DeviceError::DeviceLost))
        );
    }

    #[test]
    fn test_shader_warning() {
        let key = ShaderVariantKey::new(1, SpecularMode::None, BumpMode::None, false);
        let mut report = RenderReport::default();
        assert!(report.shader_warning().is_none());
        report.check(
            RenderStep::BindPixelShader,
            Err(ShaderError::VariantNotFound { key }),
        );
        assert_eq!(
            report.shader_warning(),
            Some(&ShaderError::VariantNotFound { key })
        );
    }

    #[test]
    fn test_skipped_report_is_not_clean() {
        let report = RenderReport::skipped();
        assert!(report.skipped);
        assert!(!report.is_clean());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_step_display() {
        assert_eq!(RenderStep::UploadLight(2).to_string(), "UploadLight[2]");
        assert_eq!(
            RenderStep::BindTexture(SamplerSlot::Specular).to_string(),
            "BindTexture[Specular]"
        );
        assert_eq!(RenderStep::Draw.to_string(), "Draw");
    }
}
