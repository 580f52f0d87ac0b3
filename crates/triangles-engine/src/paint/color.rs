/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Opaque colors are unaffected by premultiplication, so `opaque` is `const`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const RED: Self = Self::opaque(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::opaque(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::opaque(0.0, 0.0, 1.0);

    /// Creates an opaque color (`a = 1`).
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// RGB channels, dropping alpha. Used for per-vertex color attributes.
    #[inline]
    pub const fn rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Clear value for a render pass.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_has_full_alpha() {
        let c = Color::opaque(0.2, 0.2, 0.2);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.rgb(), [0.2, 0.2, 0.2]);
    }

    #[test]
    fn to_wgpu_widens_channels() {
        let w = Color::opaque(0.25, 0.5, 1.0).to_wgpu();
        assert_eq!((w.r, w.g, w.b, w.a), (0.25, 0.5, 1.0, 1.0));
    }

    #[test]
    fn primaries() {
        assert_eq!(Color::RED.rgb(), [1.0, 0.0, 0.0]);
        assert_eq!(Color::GREEN.rgb(), [0.0, 1.0, 0.0]);
        assert_eq!(Color::BLUE.rgb(), [0.0, 0.0, 1.0]);
    }
}
