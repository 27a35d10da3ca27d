use eframe::wgpu;

use super::RenderPipelineDescriptor;
use crate::gfx::structs::{DotInstance, UvVertex};

pub(in crate::gfx) struct Pipeline {
    pub pipeline: wgpu::RenderPipeline,
}
impl Pipeline {
    pub fn new(
        device: &wgpu::Device,
        shader_module: &wgpu::ShaderModule,
        target_format: wgpu::TextureFormat,
    ) -> Self {
        let pipeline = RenderPipelineDescriptor {
            label: "dots",
            vertex_buffers: &[UvVertex::LAYOUT, DotInstance::LAYOUT],
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            fragment_target: Some(wgpu::ColorTargetState::from(target_format)),
            ..Default::default()
        }
        .create_pipeline(device, shader_module);
        Self { pipeline }
    }
}
