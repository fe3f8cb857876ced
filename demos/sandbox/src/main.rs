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

//! Renders a lit cube a few times on the headless backend and logs what the
//! device saw.
//!
//! Usage: `sandbox [config.ron]`. Set `RUST_LOG=trace` to see every light
//! re-sort and draw submission.

use std::cell::RefCell;
use std::path::Path;

use anyhow::{Context, Result};
use lumen_core::{
    asset::{GpuMesh, MapType, PhongMaterial},
    math::{LinearRgba, Mat4, Vec3},
    renderer::{CullMode, VertexFormat},
};
use lumen_infra::graphics::headless::{CommandKind, HeadlessContext, RecordingDevice};
use lumen_lanes::{MeshRenderView, MeshViewConfig, RenderReport};

/// One phong vertex: position, texture coordinate, and normal quaternion.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct PhongVertex {
    position: [f32; 3],
    uv: [f32; 2],
    normal_quat: [f32; 4],
}

const fn v(position: [f32; 3], uv: [f32; 2], normal_quat: [f32; 4]) -> PhongVertex {
    PhongVertex {
        position,
        uv,
        normal_quat,
    }
}

// Front and back faces of a unit cube are enough to exercise culling.
const VERTICES: &[PhongVertex] = &[
    v([-0.5, -0.5, 0.5], [0.0, 1.0], [0.0, 0.0, 0.0, 1.0]),
    v([0.5, -0.5, 0.5], [1.0, 1.0], [0.0, 0.0, 0.0, 1.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0], [0.0, 0.0, 0.0, 1.0]),
    v([-0.5, 0.5, 0.5], [0.0, 0.0], [0.0, 0.0, 0.0, 1.0]),
    v([-0.5, -0.5, -0.5], [1.0, 1.0], [0.0, 1.0, 0.0, 0.0]),
    v([0.5, -0.5, -0.5], [0.0, 1.0], [0.0, 1.0, 0.0, 0.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0], [0.0, 1.0, 0.0, 0.0]),
    v([-0.5, 0.5, -0.5], [1.0, 0.0], [0.0, 1.0, 0.0, 0.0]),
];

const INDICES: &[u16] = &[0, 1, 2, 2, 3, 0, 5, 4, 7, 7, 6, 5];

fn load_config(path: &Path) -> Result<MeshViewConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    MeshViewConfig::from_ron_str(&source)
        .with_context(|| format!("failed to load mesh view config from {}", path.display()))
}

fn upload_cube(device: &mut RecordingDevice) -> GpuMesh {
    GpuMesh {
        vertex_format: VertexFormat::PHONG,
        vertex_buffer: device.create_buffer_init(VERTICES),
        index_buffer: device.create_buffer_init(INDICES),
        vertex_count: VERTICES.len() as u32,
        index_count: INDICES.len() as u32,
    }
}

fn log_report(frame: usize, report: &RenderReport, context: &HeadlessContext) {
    let device = context.device();
    log::info!(
        "frame {frame}: drawn={} resorted={} state_changes={} failures={} commands={} constant_uploads={}",
        report.draw_issued,
        report.lights_resorted,
        report.state_changes,
        report.failures.len(),
        device.commands().len(),
        device.count(CommandKind::SetVertexConstants) + device.count(CommandKind::SetPixelConstants),
    );
    if let Some(key) = context.shaders().last_bound() {
        log::info!("frame {frame}: pixel shader {key}");
    }
    for failure in &report.failures {
        log::warn!("frame {frame}: {} failed: {}", failure.step, failure.error);
    }
}

fn main() -> Result<()> {
    let _ = lumen_infra::init_logging("info");

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => MeshViewConfig::default(),
    };
    log::info!("Using mesh view config:\n{}", config.to_ron_string()?);

    let mut context = HeadlessContext::new();
    let mesh = upload_cube(context.device_mut());
    let diffuse = context.device_mut().create_texture();
    let specular = context.device_mut().create_texture();
    let context = RefCell::new(context);

    let material = PhongMaterial::new(LinearRgba::rgb(0.8, 0.7, 0.6))
        .with_map(MapType::Diffuse, diffuse)
        .with_map(MapType::Specular, specular);

    let mut view = MeshRenderView::with_config(&context, &mesh, config)?;
    view.set_material(Some(&material));
    view.set_ambient_light(0.1, 0.1, 0.15);
    view.set_culling_mode(CullMode::Back);
    view.set_point_light(0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0)?;
    view.set_point_light(1, -2.0, 1.0, 0.0, 1.0, 0.5, 0.2, 3.0)?;

    for frame in 0..4 {
        context.borrow_mut().device_mut().clear_commands();
        context
            .borrow_mut()
            .set_world_transform(Mat4::from_translation(Vec3::new(frame as f32, 0.0, -5.0)));

        match frame {
            1 => view.set_point_light(2, 0.0, 4.0, 0.0, 0.2, 0.2, 1.0, 2.0)?,
            2 => view.set_wireframe(true),
            3 => view.set_material(None),
            _ => {}
        }

        let report = view.render();
        log_report(frame, &report, &context.borrow());
    }

    log::info!(
        "Done: {} draw call(s) reached the device.",
        context.borrow().device().draw_count()
    );
    Ok(())
}
