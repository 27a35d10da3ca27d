use std::{marker::PhantomData, sync::Arc};

use eframe::wgpu;

/// GPU buffer that is reused between frames and only reallocated to grow.
pub(super) struct GrowableBuffer<T> {
    label: &'static str,
    usage: wgpu::BufferUsages,
    capacity: usize,
    buffer: Option<Arc<wgpu::Buffer>>,
    _marker: PhantomData<T>,
}
impl<T: Default + bytemuck::Pod> GrowableBuffer<T> {
    pub fn new(label: &'static str, usage: wgpu::BufferUsages) -> Self {
        Self {
            label,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            capacity: 0,
            buffer: None,
            _marker: PhantomData,
        }
    }

    /// Uploads `data`, growing the buffer first if it cannot hold it.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> Arc<wgpu::Buffer> {
        let mut data = data.to_vec();
        super::pad_buffer_to_wgpu_copy_buffer_alignment(&mut data);

        let buffer = match &self.buffer {
            Some(buffer) if self.capacity >= data.len() => Arc::clone(buffer),
            _ => {
                self.capacity = data.len().next_power_of_two();
                ftlog::debug!("allocating {} buffer for {} elements", self.label, self.capacity);
                let buffer = Arc::new(device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some(self.label),
                    size: (self.capacity * std::mem::size_of::<T>()) as u64,
                    usage: self.usage,
                    mapped_at_creation: false,
                }));
                self.buffer = Some(Arc::clone(&buffer));
                buffer
            }
        };
        queue.write_buffer(&buffer, 0, bytemuck::cast_slice(&data));
        buffer
    }
}
