use eframe::wgpu;

pub(super) mod dots;

#[derive(Default)]
struct RenderPipelineDescriptor<'a> {
    /// Also names the shader entry points, `{label}_vertex` and `{label}_fragment`.
    label: &'a str,
    vertex_buffers: &'a [wgpu::VertexBufferLayout<'a>],
    primitive: wgpu::PrimitiveState,
    fragment_target: Option<wgpu::ColorTargetState>,
}
impl RenderPipelineDescriptor<'_> {
    fn create_pipeline(
        self,
        device: &wgpu::Device,
        shader_module: &wgpu::ShaderModule,
    ) -> wgpu::RenderPipeline {
        let vertex_entry_point = format!("{}_vertex", self.label);
        let fragment_entry_point = format!("{}_fragment", self.label);
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{}_pipeline_layout", self.label)),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{}_pipeline", self.label)),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader_module,
                entry_point: &vertex_entry_point,
                buffers: self.vertex_buffers,
            },
            primitive: self.primitive,
            // egui's render pass has no depth attachment.
            depth_stencil: None,
            // egui's render pass is single-sampled.
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: shader_module,
                entry_point: &fragment_entry_point,
                targets: &[self.fragment_target],
            }),
            multiview: None,
        })
    }
}
