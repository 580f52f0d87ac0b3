/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends tried first.
    ///
    /// Defaults to GL, the closest match to a core-profile OpenGL context.
    pub backends: wgpu::Backends,

    /// Retry with every backend when `backends` yields no usable adapter.
    pub fallback_to_all_backends: bool,

    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default: a plain UNORM target writes clear and vertex colors
    /// unchanged, like a default GL framebuffer.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO waits for vertical blank, the equivalent of a swap interval of 1.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    ///
    /// Downlevel WebGL2 limits are the ones every GL adapter can meet.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::GL,
            fallback_to_all_backends: true,
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuInit {
    /// Backend sets to try, in order.
    pub fn backend_attempts(&self) -> Vec<wgpu::Backends> {
        let mut attempts = vec![self.backends];
        if self.fallback_to_all_backends && self.backends != wgpu::Backends::all() {
            attempts.push(wgpu::Backends::all());
        }
        attempts
    }

    /// Limits to request from a device on `adapter_limits`.
    ///
    /// Texture dimensions come from the adapter so the swapchain can be as
    /// large as the drawable on high-DPI displays.
    pub fn device_limits(&self, adapter_limits: wgpu::Limits) -> wgpu::Limits {
        self.required_limits.clone().using_resolution(adapter_limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_prefer_gl_with_vsync() {
        let init = GpuInit::default();
        assert_eq!(init.backends, wgpu::Backends::GL);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert!(!init.prefer_srgb);
    }

    #[test]
    fn gl_first_then_all_backends() {
        let init = GpuInit::default();
        assert_eq!(
            init.backend_attempts(),
            vec![wgpu::Backends::GL, wgpu::Backends::all()]
        );
    }

    #[test]
    fn no_fallback_when_disabled() {
        let init = GpuInit {
            fallback_to_all_backends: false,
            ..Default::default()
        };
        assert_eq!(init.backend_attempts(), vec![wgpu::Backends::GL]);
    }

    #[test]
    fn device_limits_take_adapter_texture_size() {
        let init = GpuInit::default();
        let adapter = wgpu::Limits {
            max_texture_dimension_2d: 8192,
            ..wgpu::Limits::default()
        };
        let limits = init.device_limits(adapter);

        // 800x600 logical at a 3.0 scale factor.
        let (width, height) = (2400, 1800);
        assert_eq!(limits.max_texture_dimension_2d, 8192);
        assert!(width <= limits.max_texture_dimension_2d);
        assert!(height <= limits.max_texture_dimension_2d);
    }

    #[test]
    fn device_limits_keep_other_requested_limits() {
        let init = GpuInit::default();
        let limits = init.device_limits(wgpu::Limits::default());
        assert_eq!(
            limits.max_storage_buffers_per_shader_stage,
            init.required_limits.max_storage_buffers_per_shader_stage
        );
    }

    #[test]
    fn no_duplicate_attempt_when_already_all() {
        let init = GpuInit {
            backends: wgpu::Backends::all(),
            ..Default::default()
        };
        assert_eq!(init.backend_attempts(), vec![wgpu::Backends::all()]);
    }
}
