use super::{RenderCtx, VertexArray};

/// Source for one shader stage.
#[derive(Debug, Copy, Clone)]
pub struct StageSource<'a> {
    /// WGSL text.
    pub wgsl: &'a str,
    pub entry_point: &'a str,
}

/// Everything needed to link a [`ShaderProgram`].
#[derive(Debug, Copy, Clone)]
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    pub vertex: StageSource<'a>,
    pub fragment: StageSource<'a>,
    pub topology: wgpu::PrimitiveTopology,
}

/// A linked vertex + fragment stage pair.
///
/// Compile and link problems are not returned: wgpu reports them to the
/// device's uncaptured-error handler, and a broken program draws nothing.
pub struct ShaderProgram {
    _vertex: wgpu::ShaderModule,
    _fragment: wgpu::ShaderModule,
    pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    /// Compiles both stages and links them against `vertex_array`'s layout.
    pub fn link(ctx: &RenderCtx<'_>, desc: &ProgramDesc<'_>, vertex_array: &VertexArray) -> Self {
        let vertex = compile_stage(ctx, &format!("{} vertex stage", desc.label), desc.vertex);
        let fragment = compile_stage(ctx, &format!("{} fragment stage", desc.label), desc.fragment);

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(desc.label),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let buffers = vertex_array.layouts();

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vertex,
                entry_point: Some(desc.vertex.entry_point),
                compilation_options: Default::default(),
                buffers: &buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment,
                entry_point: Some(desc.fragment.entry_point),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: desc.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("linked program `{}`", desc.label);

        Self {
            _vertex: vertex,
            _fragment: fragment,
            pipeline,
        }
    }

    /// Makes this program current for subsequent draws in `rpass`.
    #[inline]
    pub fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
    }
}

fn compile_stage(ctx: &RenderCtx<'_>, label: &str, stage: StageSource<'_>) -> wgpu::ShaderModule {
    ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(stage.wgsl.into()),
    })
}
