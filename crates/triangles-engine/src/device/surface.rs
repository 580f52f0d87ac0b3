use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Picks the surface format.
///
/// With `prefer_srgb` the usual 8-bit sRGB formats win; otherwise the first
/// non-sRGB format does. Falls back to the first advertised format.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if formats.contains(&f) {
                return Some(f);
            }
        }
    } else if let Some(f) = formats.iter().copied().find(|f| !f.is_srgb()) {
        return Some(f);
    }

    Some(first)
}

pub(crate) fn choose_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| modes.contains(m))
        .or_else(|| modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// FIFO is guaranteed by every backend, so it is the fallback.
pub(crate) fn choose_present_mode(
    modes: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    if modes.contains(&requested) {
        requested
    } else {
        wgpu::PresentMode::Fifo
    }
}

/// Updates the configuration for a new drawable size.
///
/// wgpu does not support configuring a surface with a 0x0 size; in that case,
/// only `size` is updated and configuration is deferred. Returns whether the
/// surface needs reconfiguring.
pub(crate) fn apply_resize(
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;

    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    true
}

pub(crate) fn recover_from_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    let action = SurfaceErrorAction::for_error(&err);
    match action {
        SurfaceErrorAction::Reconfigured => {
            log::debug!("surface {err:?}; reconfiguring");
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
        }
        SurfaceErrorAction::SkipFrame => log::debug!("surface {err:?}; skipping frame"),
        SurfaceErrorAction::Fatal => log::error!("surface {err:?}; cannot continue"),
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    fn config(width: u32, height: u32) -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: F::Bgra8Unorm,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    // ── surface format ────────────────────────────────────────────────────

    #[test]
    fn no_formats_yields_none() {
        assert_eq!(choose_surface_format(&[], true), None);
        assert_eq!(choose_surface_format(&[], false), None);
    }

    #[test]
    fn linear_preferred_skips_srgb() {
        let formats = [F::Bgra8UnormSrgb, F::Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats, false), Some(F::Bgra8Unorm));
    }

    #[test]
    fn srgb_preferred_when_requested() {
        let formats = [F::Rgba8Unorm, F::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(F::Rgba8UnormSrgb));
    }

    #[test]
    fn only_srgb_available_falls_back_to_first() {
        let formats = [F::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(F::Bgra8UnormSrgb));
    }

    // ── alpha / present mode ──────────────────────────────────────────────

    #[test]
    fn unsupported_alpha_mode_uses_first_supported() {
        let modes = [wgpu::CompositeAlphaMode::Opaque];
        assert_eq!(
            choose_alpha_mode(&modes, Some(wgpu::CompositeAlphaMode::PreMultiplied)),
            wgpu::CompositeAlphaMode::Opaque
        );
    }

    #[test]
    fn empty_alpha_modes_is_auto() {
        assert_eq!(choose_alpha_mode(&[], None), wgpu::CompositeAlphaMode::Auto);
    }

    #[test]
    fn unsupported_present_mode_falls_back_to_fifo() {
        let modes = [wgpu::PresentMode::Fifo];
        assert_eq!(
            choose_present_mode(&modes, wgpu::PresentMode::Mailbox),
            wgpu::PresentMode::Fifo
        );
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_updates_config() {
        let mut cfg = config(800, 600);
        let mut size = PhysicalSize::new(800, 600);
        assert!(apply_resize(&mut cfg, &mut size, PhysicalSize::new(1024, 768)));
        assert_eq!((cfg.width, cfg.height), (1024, 768));
        assert_eq!(size, PhysicalSize::new(1024, 768));
    }

    #[test]
    fn zero_size_defers_configuration() {
        let mut cfg = config(800, 600);
        let mut size = PhysicalSize::new(800, 600);
        assert!(!apply_resize(&mut cfg, &mut size, PhysicalSize::new(0, 0)));
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert_eq!(size, PhysicalSize::new(0, 0));
    }
}
