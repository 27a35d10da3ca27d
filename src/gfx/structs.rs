//! Structs shared between the CPU and GPU.

use eframe::wgpu;

use crate::geom::Pos;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(super) struct UvVertex {
    pub position: [f32; 2],
    pub offset: [f32; 2],
}
impl UvVertex {
    const fn new(position: [f32; 2], offset: [f32; 2]) -> Self {
        Self { position, offset }
    }
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![
            0 => Float32x2,
            1 => Float32x2,
        ],
    };
    /// Unit quad as a triangle strip; `offset` is the position within the disc.
    pub const SQUARE: [Self; 4] = [
        UvVertex::new([-1.0, 1.0], [-1.0, 1.0]),
        UvVertex::new([1.0, 1.0], [1.0, 1.0]),
        UvVertex::new([-1.0, -1.0], [-1.0, -1.0]),
        UvVertex::new([1.0, -1.0], [1.0, -1.0]),
    ];
}

/// One filled disc, in normalised device coordinates.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct DotInstance {
    pub col: [f32; 4],
    pub centre: [f32; 2],
    pub scale: [f32; 2],
}
impl DotInstance {
    /// Places a disc of `radius` pixels at `centre` on a `canvas`-sized area.
    pub fn on_canvas(centre: Pos, radius: f32, canvas: Pos, col: [f32; 4]) -> Self {
        Self {
            col,
            centre: [
                2. * centre.x / canvas.x - 1.,
                1. - 2. * centre.y / canvas.y,
            ],
            scale: [2. * radius / canvas.x, 2. * radius / canvas.y],
        }
    }
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &wgpu::vertex_attr_array![
            2 => Float32x4,
            3 => Float32x2,
            4 => Float32x2,
        ],
    };
}
