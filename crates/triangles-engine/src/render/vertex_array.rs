use anyhow::{Context, Result, bail, ensure};
use bytemuck::Pod;
use wgpu::util::DeviceExt;

use super::RenderCtx;

/// One vertex attribute stored in its own GPU buffer.
///
/// The buffer holds tightly packed values of `format`, one per vertex, and
/// feeds shader input `@location(location)`. Contents are immutable after
/// upload.
pub struct AttributeBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
    attrs: [wgpu::VertexAttribute; 1],
}

impl AttributeBuffer {
    /// Uploads `data` verbatim into a static vertex buffer.
    pub fn upload<T: Pod>(
        ctx: &RenderCtx<'_>,
        label: &str,
        location: u32,
        format: wgpu::VertexFormat,
        data: &[T],
    ) -> Result<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let vertex_count = vertex_count(bytes.len() as u64, format)
            .with_context(|| format!("invalid contents for attribute buffer `{label}`"))?;

        let buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytes,
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!("uploaded `{label}`: {vertex_count} x {format:?} at location {location}");

        Ok(Self {
            buffer,
            vertex_count,
            attrs: [wgpu::VertexAttribute {
                format,
                offset: 0,
                shader_location: location,
            }],
        })
    }

    #[inline]
    pub fn location(&self) -> u32 {
        self.attrs[0].shader_location
    }

    #[inline]
    pub fn format(&self) -> wgpu::VertexFormat {
        self.attrs[0].format
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    fn layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.format().size(),
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attrs,
        }
    }
}

/// Named collection of attribute-buffer bindings.
///
/// Buffer slot `i` in the pipeline is `buffers[i]`; the shader sees each
/// attribute at its own location. Created once and bound once per frame.
pub struct VertexArray {
    buffers: Vec<AttributeBuffer>,
    vertex_count: u32,
}

impl VertexArray {
    /// Groups attribute buffers. All must hold the same number of vertices
    /// and use distinct locations.
    pub fn new(buffers: Vec<AttributeBuffer>) -> Result<Self> {
        let bindings: Vec<(u32, u32)> = buffers
            .iter()
            .map(|b| (b.location(), b.vertex_count()))
            .collect();
        let vertex_count = validate_bindings(&bindings)?;

        Ok(Self {
            buffers,
            vertex_count,
        })
    }

    /// Vertices per draw.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Vertex buffer layouts, in slot order, for pipeline creation.
    pub fn layouts(&self) -> Vec<wgpu::VertexBufferLayout<'_>> {
        self.buffers.iter().map(AttributeBuffer::layout).collect()
    }

    /// Binds every attribute buffer to its slot.
    pub fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        for (slot, b) in self.buffers.iter().enumerate() {
            rpass.set_vertex_buffer(slot as u32, b.buffer.slice(..));
        }
    }
}

/// Number of whole `format` elements in `byte_len` bytes.
fn vertex_count(byte_len: u64, format: wgpu::VertexFormat) -> Result<u32> {
    let stride = format.size();
    ensure!(byte_len > 0, "attribute data is empty");
    ensure!(
        byte_len % stride == 0,
        "{byte_len} bytes is not a multiple of the {format:?} stride ({stride})"
    );
    u32::try_from(byte_len / stride).context("too many vertices")
}

/// Checks `(location, vertex_count)` pairs and returns the shared count.
fn validate_bindings(bindings: &[(u32, u32)]) -> Result<u32> {
    let Some(&(_, count)) = bindings.first() else {
        bail!("vertex array needs at least one attribute buffer");
    };

    for (i, &(location, n)) in bindings.iter().enumerate() {
        if bindings[..i].iter().any(|&(l, _)| l == location) {
            bail!("attribute location {location} bound twice");
        }
        ensure!(
            n == count,
            "attribute at location {location} has {n} vertices, expected {count}"
        );
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── vertex_count ──────────────────────────────────────────────────────

    #[test]
    fn three_vec3_floats_are_three_vertices() {
        let n = vertex_count(36, wgpu::VertexFormat::Float32x3).unwrap();
        assert_eq!(n, 3);
    }

    #[test]
    fn partial_vertex_is_rejected() {
        assert!(vertex_count(40, wgpu::VertexFormat::Float32x3).is_err());
    }

    #[test]
    fn empty_data_is_rejected() {
        assert!(vertex_count(0, wgpu::VertexFormat::Float32x3).is_err());
    }

    // ── validate_bindings ─────────────────────────────────────────────────

    #[test]
    fn matching_counts_pass() {
        assert_eq!(validate_bindings(&[(0, 3), (1, 3)]).unwrap(), 3);
    }

    #[test]
    fn mismatched_counts_fail() {
        let err = validate_bindings(&[(0, 3), (1, 4)]).unwrap_err();
        assert!(err.to_string().contains("location 1"));
    }

    #[test]
    fn duplicate_location_fails() {
        let err = validate_bindings(&[(0, 3), (0, 3)]).unwrap_err();
        assert!(err.to_string().contains("bound twice"));
    }

    #[test]
    fn no_buffers_fails() {
        assert!(validate_bindings(&[]).is_err());
    }
}
