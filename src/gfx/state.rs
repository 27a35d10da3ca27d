use parking_lot::Mutex;
use std::fmt;

use eframe::wgpu;
use wgpu::util::DeviceExt;

use super::{cache::GrowableBuffer, pipelines, structs::UvVertex, DotInstance};

pub(crate) struct GraphicsState {
    /// Whether the surface expects linear colours rather than sRGB-encoded ones.
    pub(crate) linear_output: bool,
    pub(super) dot_pipeline: pipelines::dots::Pipeline,
    pub(super) uv_vertex_buffer: wgpu::Buffer,
    pub(super) dot_instance_buffer: Mutex<GrowableBuffer<DotInstance>>,
}
impl GraphicsState {
    pub(crate) fn new(render_state: &eframe::egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;
        let uv_vertex_buffer = create_buffer_init::<UvVertex>(
            device,
            "uv_vertices",
            &UvVertex::SQUARE,
            wgpu::BufferUsages::VERTEX,
        );
        let shader_module = device.create_shader_module(wgpu::include_wgsl!("shader.wgsl"));
        let dot_pipeline =
            pipelines::dots::Pipeline::new(device, &shader_module, render_state.target_format);
        let dot_instance_buffer = Mutex::new(GrowableBuffer::new(
            "dot_instances",
            wgpu::BufferUsages::VERTEX,
        ));
        ftlog::info!("render target format {:?}", render_state.target_format);
        Self {
            linear_output: render_state.target_format.is_srgb(),
            dot_pipeline,
            uv_vertex_buffer,
            dot_instance_buffer,
        }
    }
}

fn create_buffer_init<T: Default + bytemuck::Pod>(
    device: &wgpu::Device,
    label: impl fmt::Display,
    contents: &[T],
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    let mut contents = contents.to_vec();
    super::pad_buffer_to_wgpu_copy_buffer_alignment(&mut contents);

    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&label.to_string()),
        contents: bytemuck::cast_slice::<T, u8>(contents.as_slice()),
        usage,
    })
}
