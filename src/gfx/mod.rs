//! Instanced disc rendering through an egui paint callback.

mod cache;
mod draw;
mod pipelines;
mod state;
mod structs;

pub(crate) use draw::{dot_instances, RenderResources};
use eframe::wgpu;
pub(crate) use state::GraphicsState;
pub(crate) use structs::DotInstance;

/// Pads a buffer to `wgpu::COPY_BUFFER_ALIGNMENT`.
fn pad_buffer_to_wgpu_copy_buffer_alignment<T: Default + bytemuck::Pod>(buf: &mut Vec<T>) {
    loop {
        let bytes_len = bytemuck::cast_slice::<T, u8>(buf).len();
        if bytes_len > 0 && bytes_len as u64 % wgpu::COPY_BUFFER_ALIGNMENT == 0 {
            break;
        }
        buf.push(T::default());
    }
}
