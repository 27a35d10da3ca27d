use std::sync::Arc;

use eframe::{
    egui::{self, Color32},
    egui_wgpu::{CallbackResources, CallbackTrait, ScreenDescriptor},
    wgpu,
};

use super::{DotInstance, GraphicsState};
use crate::{geom::Pos, sim::Grid};

/// One frame's worth of dots, handed to egui as a paint callback.
pub(crate) struct RenderResources {
    pub(crate) gfx: Arc<GraphicsState>,
    pub(crate) dots: Vec<DotInstance>,
}

/// Instance buffer uploaded in `prepare`, kept alive for `paint`.
struct DotBatch {
    buffer: Arc<wgpu::Buffer>,
    len: u32,
}

impl CallbackTrait for RenderResources {
    fn prepare(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        _descriptor: &ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        callback_resources: &mut CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        let buffer = self
            .gfx
            .dot_instance_buffer
            .lock()
            .upload(device, queue, &self.dots);
        callback_resources.insert(DotBatch {
            buffer,
            len: self.dots.len() as u32,
        });
        vec![]
    }

    fn paint<'a>(
        &'a self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'a>,
        callback_resources: &'a CallbackResources,
    ) {
        let Some(batch) = callback_resources.get::<DotBatch>() else {
            ftlog::error!("dot instances were not prepared for this frame");
            return;
        };
        if batch.len == 0 {
            return;
        }
        render_pass.set_pipeline(&self.gfx.dot_pipeline.pipeline);
        render_pass.set_vertex_buffer(0, self.gfx.uv_vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, batch.buffer.slice(..));
        render_pass.draw(0..4, 0..batch.len);
    }
}

/// Every point of `grid`, free or pinned, as a disc of the same size and colour.
pub(crate) fn dot_instances(
    grid: &Grid,
    canvas: Pos,
    radius: f32,
    color: Color32,
    linear_output: bool,
) -> Vec<DotInstance> {
    let col = if linear_output {
        egui::Rgba::from(color).to_array()
    } else {
        color.to_normalized_gamma_f32()
    };
    grid.points()
        .iter()
        .map(|p| DotInstance::on_canvas(p.position, radius, canvas, col))
        .collect()
}
