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

//! Draws one mesh with a phong material and up to three weighted point lights.
//!
//! The view keeps only cheap CPU-side state (lights, ambient color, cull and
//! fill toggles). Everything it draws with is borrowed: the context, the mesh,
//! and the material are owned by whoever manages the device's resources.

use super::{variant_key, LightSet, RenderReport, RenderStep};
use crate::config::{MeshViewConfig, VERTEX_REGISTERS_PER_LIGHT, WORLD_MATRIX_REGISTERS};
use crate::error::{ConfigError, LightIndexError};
use lumen_core::{
    asset::{GpuMesh, MapType, PhongMaterial},
    math::{LinearRgba, Vec3, Vec4},
    renderer::{
        ContextFrame, CullMode, DrawIndexed, FillMode, PointLight, PrimitiveTopology,
        RenderContext, RenderError, RenderStateChange, SamplerSlot, MAX_POINT_LIGHTS,
    },
};
use std::cell::RefCell;

/// A mesh bound to a rendering context, ready to be drawn with a material and
/// a small set of prioritized point lights.
///
/// Mutators only record state. Lights are re-sorted, and cull/fill modes are
/// pushed to the device, lazily on the next [`render`](Self::render).
///
/// The context is shared through a `RefCell` so several views can draw against
/// the same device one after another; the state cache on the context lets them
/// skip render-state changes the previous view already applied.
pub struct MeshRenderView<'a, C: RenderContext> {
    context: &'a RefCell<C>,
    mesh: &'a GpuMesh,
    material: Option<&'a PhongMaterial>,
    config: MeshViewConfig,
    ambient_light: LinearRgba,
    lights: LightSet,
    cull_mode: CullMode,
    wireframe: bool,
}

impl<'a, C: RenderContext> MeshRenderView<'a, C> {
    /// Creates a view of `mesh` on `context` with the default configuration.
    pub fn new(context: &'a RefCell<C>, mesh: &'a GpuMesh) -> Self {
        Self::from_parts(context, mesh, MeshViewConfig::default())
    }

    /// Creates a view of `mesh` on `context` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the register layout overflows or
    /// overlaps, or if the vertex stride is zero.
    pub fn with_config(
        context: &'a RefCell<C>,
        mesh: &'a GpuMesh,
        config: MeshViewConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(context, mesh, config))
    }

    fn from_parts(context: &'a RefCell<C>, mesh: &'a GpuMesh, config: MeshViewConfig) -> Self {
        Self {
            context,
            mesh,
            material: None,
            config,
            ambient_light: LinearRgba::BLACK,
            lights: LightSet::new(),
            cull_mode: CullMode::None,
            wireframe: false,
        }
    }

    /// Replaces the material. With `None`, [`render`](Self::render) draws nothing.
    pub fn set_material(&mut self, material: Option<&'a PhongMaterial>) {
        self.material = material;
    }

    /// Sets the face culling mode used by the next render.
    pub fn set_culling_mode(&mut self, mode: CullMode) {
        self.cull_mode = mode;
    }

    /// Toggles wireframe rasterization for the next render.
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.wireframe = wireframe;
    }

    /// Sets the ambient light color.
    pub fn set_ambient_light(&mut self, r: f32, g: f32, b: f32) {
        self.ambient_light = LinearRgba::rgb(r, g, b);
    }

    /// Sets the point light in slot `index`.
    ///
    /// A `weight` of `0.0` disables the slot.
    ///
    /// # Errors
    ///
    /// Returns [`LightIndexError::OutOfRange`] if `index` is not a valid slot;
    /// no light is modified in that case.
    #[allow(clippy::too_many_arguments)]
    pub fn set_point_light(
        &mut self,
        index: usize,
        x: f32,
        y: f32,
        z: f32,
        r: f32,
        g: f32,
        b: f32,
        weight: f32,
    ) -> Result<(), LightIndexError> {
        let light = PointLight::new(Vec3::new(x, y, z), LinearRgba::rgb(r, g, b), weight);
        self.lights.set(index, light).inspect_err(|err| {
            log::warn!("MeshRenderView: rejected point light: {err}");
        })
    }

    /// The current material, if any.
    pub fn material(&self) -> Option<&'a PhongMaterial> {
        self.material
    }

    /// The mesh this view draws.
    pub fn mesh(&self) -> &'a GpuMesh {
        self.mesh
    }

    /// The requested cull mode.
    pub fn culling_mode(&self) -> CullMode {
        self.cull_mode
    }

    /// Whether wireframe rasterization is requested.
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// The ambient light color.
    pub fn ambient_light(&self) -> LinearRgba {
        self.ambient_light
    }

    /// The view's light slots.
    pub fn lights(&self) -> &LightSet {
        &self.lights
    }

    /// The configuration this view was created with.
    pub fn config(&self) -> &MeshViewConfig {
        &self.config
    }

    /// Draws the mesh.
    ///
    /// Does nothing, and touches no device state, while no material is set.
    /// Otherwise every step is attempted even if an earlier one failed; the
    /// returned report lists what went wrong.
    pub fn render(&mut self) -> RenderReport {
        let Some(material) = self.material else {
            log::debug!("MeshRenderView: no material set, skipping render");
            return RenderReport::skipped();
        };

        let mut report = RenderReport::default();
        let context_cell = self.context;
        let Ok(mut context) = context_cell.try_borrow_mut() else {
            report.fail(RenderStep::AcquireContext, RenderError::ContextUnavailable);
            return report;
        };
        let world = context.world_transform();
        let ContextFrame {
            device,
            shaders,
            state,
        } = context.frame();
        let registers = self.config.registers;
        let mesh = self.mesh;

        report.check(
            RenderStep::BindVertexFormat,
            device.set_vertex_format(mesh.vertex_format),
        );
        report.check(
            RenderStep::BindVertexProgram,
            device.set_vertex_program(shaders.vertex_program()),
        );

        report.lights_resorted = self.lights.resolve_order();
        let resolved = self.lights.resolved();
        let slots = *self.lights.lights();

        for (rank, &slot) in resolved.order.iter().enumerate() {
            let light = &slots[slot];
            let register = registers.lights + rank as u32 * VERTEX_REGISTERS_PER_LIGHT;
            let data = [
                light.position_register(),
                light.color.with_alpha(1.0).to_vec4(),
            ];
            report.check(
                RenderStep::UploadLight(rank),
                device.set_vertex_constants(register, &data),
            );
        }

        report.check(
            RenderStep::UploadAmbientColor,
            device.set_vertex_constants(
                registers.ambient_color,
                &[self.ambient_light.with_alpha(1.0).to_vec4()],
            ),
        );
        report.check(
            RenderStep::UploadMaterialColor,
            device.set_pixel_constants(registers.constant_color, &[material.diffuse_color.to_vec4()]),
        );

        let key = variant_key(resolved.active, material);
        report.check(
            RenderStep::BindPixelShader,
            shaders.bind_pixel_shader(&mut *device, key),
        );

        // Slot order on purpose: inactive slots carry weight 0 and contribute black.
        let light_colors: [Vec4; MAX_POINT_LIGHTS] = slots.map(|l| l.weighted_color().to_vec4());
        report.check(
            RenderStep::UploadLightColors,
            device.set_pixel_constants(registers.light_color, &light_colors),
        );

        for map in MapType::ALL {
            let slot = SamplerSlot::from(map);
            report.check(
                RenderStep::BindTexture(slot),
                device.set_texture(slot, material.map(map)),
            );
        }

        let world_rows = world.transpose().rows;
        report.check(
            RenderStep::UploadWorldMatrix,
            device.set_vertex_constants(
                registers.world_matrix,
                &world_rows[..WORLD_MATRIX_REGISTERS as usize],
            ),
        );

        if state.last_cull_mode() != self.cull_mode {
            log::debug!("MeshRenderView: cull mode -> {:?}", self.cull_mode);
            if report.check(
                RenderStep::SetCullMode,
                device.set_render_state(RenderStateChange::CullMode(self.cull_mode)),
            ) {
                state.set_last_cull_mode(self.cull_mode);
                report.state_changes += 1;
            }
        }
        let fill_mode = FillMode::from_wireframe(self.wireframe);
        if state.last_fill_mode() != fill_mode {
            log::debug!("MeshRenderView: fill mode -> {fill_mode:?}");
            if report.check(
                RenderStep::SetFillMode,
                device.set_render_state(RenderStateChange::FillMode(fill_mode)),
            ) {
                state.set_last_fill_mode(fill_mode);
                report.state_changes += 1;
            }
        }

        report.check(
            RenderStep::BindVertexBuffer,
            device.set_stream_source(0, mesh.vertex_buffer, 0, self.config.vertex_stride),
        );
        report.check(
            RenderStep::BindIndexBuffer,
            device.set_indices(mesh.index_buffer),
        );

        let draw = DrawIndexed {
            topology: PrimitiveTopology::TriangleList,
            base_vertex: 0,
            min_index: 0,
            num_vertices: mesh.vertex_count,
            start_index: 0,
            primitive_count: mesh.triangle_count(),
        };
        log::trace!(
            "MeshRenderView: drawing {} triangles with {} light(s)",
            draw.primitive_count,
            resolved.active
        );
        report.check(RenderStep::Draw, device.draw_indexed_primitive(&draw));
        report.draw_issued = true;

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::renderer::VertexFormat;
    use lumen_infra::graphics::headless::{CommandKind, DeviceCommand, HeadlessContext};

    fn setup() -> (RefCell<HeadlessContext>, GpuMesh) {
        let mut context = HeadlessContext::new();
        let device = context.device_mut();
        let mesh = GpuMesh {
            vertex_format: VertexFormat::PHONG,
            vertex_buffer: device.create_buffer(&[0; 24 * 36]),
            index_buffer: device.create_buffer_init(&[0u16; 36]),
            vertex_count: 24,
            index_count: 36,
        };
        (RefCell::new(context), mesh)
    }

    #[test]
    fn test_new_view_defaults() {
        let (context, mesh) = setup();
        let view = MeshRenderView::new(&context, &mesh);

        assert!(view.material().is_none());
        assert_eq!(view.ambient_light(), LinearRgba::BLACK);
        assert_eq!(view.culling_mode(), CullMode::None);
        assert!(!view.wireframe());
        assert!(view.lights().is_dirty());
        assert!(view.lights().lights().iter().all(|l| !l.is_active()));
        assert_eq!(view.mesh(), &mesh);
        assert_eq!(view.config(), &MeshViewConfig::default());
    }

    #[test]
    fn test_with_config_rejects_invalid_layouts() {
        let (context, mesh) = setup();
        let mut config = MeshViewConfig::default();
        config.registers.lights = u32::MAX;
        assert!(matches!(
            MeshRenderView::with_config(&context, &mesh, config),
            Err(ConfigError::Invalid(_))
        ));

        config.registers.lights = 100;
        let view = MeshRenderView::with_config(&context, &mesh, config).unwrap();
        assert_eq!(view.config().registers.lights, 100);
    }

    #[test]
    fn test_mutators_do_not_touch_the_device() {
        let (context, mesh) = setup();
        let material = PhongMaterial::default();
        let mut view = MeshRenderView::new(&context, &mesh);

        view.set_material(Some(&material));
        view.set_culling_mode(CullMode::Back);
        view.set_wireframe(true);
        view.set_ambient_light(0.1, 0.2, 0.3);
        view.set_point_light(1, 1.0, 2.0, 3.0, 1.0, 1.0, 1.0, 0.5).unwrap();

        assert!(context.borrow().device().commands().is_empty());
        assert_eq!(view.ambient_light(), LinearRgba::rgb(0.1, 0.2, 0.3));
        assert_eq!(view.lights().get(1).map(|l| l.weight), Some(0.5));
    }

    #[test]
    fn test_ambient_light_overwrites() {
        let (context, mesh) = setup();
        let mut view = MeshRenderView::new(&context, &mesh);
        view.set_ambient_light(1.0, 1.0, 1.0);
        view.set_ambient_light(0.0, 0.5, 0.0);
        assert_eq!(view.ambient_light(), LinearRgba::rgb(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_out_of_range_light_is_rejected() {
        let (context, mesh) = setup();
        let mut view = MeshRenderView::new(&context, &mesh);

        let err = view
            .set_point_light(3, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0)
            .unwrap_err();
        assert_eq!(err, LightIndexError::OutOfRange { index: 3, max: 3 });
        assert!(view
            .set_point_light(usize::MAX, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0)
            .is_err());
        assert!(view.lights().lights().iter().all(|l| !l.is_active()));
    }

    #[test]
    fn test_render_without_material_is_a_no_op() {
        let (context, mesh) = setup();
        let mut view = MeshRenderView::new(&context, &mesh);
        view.set_point_light(0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0).unwrap();

        let report = view.render();
        assert!(report.skipped);
        assert!(!report.draw_issued);
        assert!(context.borrow().device().commands().is_empty());
        // Light resolution is deferred to the first real render.
        assert!(view.lights().is_dirty());
    }

    #[test]
    fn test_clearing_material_stops_drawing() {
        let (context, mesh) = setup();
        let material = PhongMaterial::default();
        let mut view = MeshRenderView::new(&context, &mesh);

        view.set_material(Some(&material));
        assert!(view.render().is_clean());
        let issued = context.borrow().device().commands().len();

        view.set_material(None);
        assert!(view.render().skipped);
        assert_eq!(context.borrow().device().commands().len(), issued);
    }

    #[test]
    fn test_render_binds_textures_in_sampler_order() {
        let (context, mesh) = setup();
        let (diffuse, bump) = {
            let mut ctx = context.borrow_mut();
            let device = ctx.device_mut();
            (device.create_texture(), device.create_texture())
        };
        let material = PhongMaterial::default()
            .with_map(MapType::Diffuse, diffuse)
            .with_map(MapType::Bump, bump);
        let mut view = MeshRenderView::new(&context, &mesh);
        view.set_material(Some(&material));
        assert!(view.render().is_clean());

        let ctx = context.borrow();
        let textures: Vec<_> = ctx
            .device()
            .commands()
            .iter()
            .filter_map(|c| match c {
                DeviceCommand::SetTexture { slot, texture } => Some((*slot, *texture)),
                _ => None,
            })
            .collect();
        assert_eq!(
            textures,
            vec![
                (SamplerSlot::Diffuse, Some(diffuse)),
                (SamplerSlot::Specular, None),
                (SamplerSlot::BumpHeight, Some(bump)),
                (SamplerSlot::SelfIllumination, None),
            ]
        );
    }

    #[test]
    fn test_busy_context_is_reported() {
        let (context, mesh) = setup();
        let material = PhongMaterial::default();
        let mut view = MeshRenderView::new(&context, &mesh);
        view.set_material(Some(&material));

        let guard = context.borrow();
        let report = view.render();
        drop(guard);

        assert!(!report.draw_issued);
        assert_eq!(
            report.failure(RenderStep::AcquireContext).map(|f| &f.error),
            Some(&RenderError::ContextUnavailable)
        );
        assert_eq!(
            context.borrow().device().count(CommandKind::DrawIndexedPrimitive),
            0
        );
    }
}
