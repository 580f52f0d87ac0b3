//! GPU rendering helpers.
//!
//! The GL-style building blocks the application assembles once at startup:
//! attribute buffers grouped into a [`VertexArray`], and a [`ShaderProgram`]
//! linking a vertex stage with a fragment stage.
//!
//! Convention:
//! - positions are already in normalized device coordinates
//! - one buffer per attribute, tightly packed

mod ctx;
mod program;
mod vertex_array;

pub use ctx::RenderCtx;
pub use program::{ProgramDesc, ShaderProgram, StageSource};
pub use vertex_array::{AttributeBuffer, VertexArray};
