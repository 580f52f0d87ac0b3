//! The one triangle: fixed geometry, its two shader stages and the renderer
//! that draws it.

use anyhow::Result;

use triangles_engine::paint::Color;
use triangles_engine::render::{
    AttributeBuffer, ProgramDesc, RenderCtx, ShaderProgram, StageSource, VertexArray,
};

/// Background, written before every draw.
pub const CLEAR_COLOR: Color = Color::opaque(0.2, 0.2, 0.2);

pub const POSITION_LOCATION: u32 = 0;
pub const COLOR_LOCATION: u32 = 1;

/// Vertex positions in normalized device coordinates.
pub const POSITIONS: [[f32; 3]; 3] = [
    [-0.5, -0.5, 0.0],
    [0.5, -0.5, 0.0],
    [0.0, 0.5, 0.0],
];

/// Per-vertex colors, interpolated across the face.
pub const COLORS: [[f32; 3]; 3] = [Color::RED.rgb(), Color::GREEN.rgb(), Color::BLUE.rgb()];

const VERTEX_STAGE: &str = include_str!("shaders/triangle.vert.wgsl");
const FRAGMENT_STAGE: &str = include_str!("shaders/triangle.frag.wgsl");

pub fn program_desc() -> ProgramDesc<'static> {
    ProgramDesc {
        label: "triangle program",
        vertex: StageSource {
            wgsl: VERTEX_STAGE,
            entry_point: "vs_main",
        },
        fragment: StageSource {
            wgsl: FRAGMENT_STAGE,
            entry_point: "fs_main",
        },
        topology: wgpu::PrimitiveTopology::TriangleList,
    }
}

/// Owns the triangle's vertex array and program.
///
/// Both are created once in [`TriangleRenderer::new`]; drawing only binds
/// them, so nothing is allocated per frame.
pub struct TriangleRenderer {
    vertex_array: VertexArray,
    program: ShaderProgram,
}

impl TriangleRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Result<Self> {
        let positions = AttributeBuffer::upload(
            ctx,
            "triangle positions",
            POSITION_LOCATION,
            wgpu::VertexFormat::Float32x3,
            &POSITIONS,
        )?;
        let colors = AttributeBuffer::upload(
            ctx,
            "triangle colors",
            COLOR_LOCATION,
            wgpu::VertexFormat::Float32x3,
            &COLORS,
        )?;

        let vertex_array = VertexArray::new(vec![positions, colors])?;
        let program = ShaderProgram::link(ctx, &program_desc(), &vertex_array);

        Ok(Self {
            vertex_array,
            program,
        })
    }

    /// Binds program and vertex array, then draws all vertices as one
    /// triangle list.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        self.program.bind(rpass);
        self.vertex_array.bind(rpass);
        rpass.draw(0..self.vertex_array.vertex_count(), 0..1);
    }
}
