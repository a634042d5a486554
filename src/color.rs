//! Color types and gamma-correct blending.
//!
//! Stored channel bytes are sRGB-encoded; alpha is linear opacity. Blending
//! two colors therefore decodes to linear light, interpolates there, and
//! re-encodes, instead of averaging the encoded bytes directly — naive byte
//! interpolation between saturated hues produces visibly muddy midpoints.
//!
//! The sRGB transfer function is approximated by a cubic polynomial (decode)
//! and a nested-square-root polynomial (encode) rather than the exact
//! piecewise curve. The pair is cheap and good in the mid and upper range
//! but is not an exact inverse: round trips drift by a count or two for
//! bright channels and more for very dark ones. This is a deliberate,
//! inherited approximation, kept bit-compatible rather than corrected.

/// RGBA color with 8-bit components.
///
/// `r`, `g`, `b` are sRGB-encoded; `a` is linear opacity (255 = opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Color {
    /// Red component (0-255), sRGB-encoded.
    pub r: u8,
    /// Green component (0-255), sRGB-encoded.
    pub g: u8,
    /// Blue component (0-255), sRGB-encoded.
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque), linear.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque silver.
    pub const SILVER: Self = Self::rgb(192, 192, 192);
    /// Opaque gray.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque maroon.
    pub const MAROON: Self = Self::rgb(128, 0, 0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque purple.
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    /// Opaque fuchsia.
    pub const FUCHSIA: Self = Self::rgb(255, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    /// Opaque lime.
    pub const LIME: Self = Self::rgb(0, 255, 0);
    /// Opaque olive.
    pub const OLIVE: Self = Self::rgb(128, 128, 0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Opaque navy.
    pub const NAVY: Self = Self::rgb(0, 0, 128);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque teal.
    pub const TEAL: Self = Self::rgb(0, 128, 128);
    /// Opaque aqua.
    pub const AQUA: Self = Self::rgb(0, 255, 255);

    /// The 16 named web-safe palette colors.
    pub const PALETTE: [Self; 16] = [
        Self::BLACK,
        Self::SILVER,
        Self::GRAY,
        Self::WHITE,
        Self::MAROON,
        Self::RED,
        Self::PURPLE,
        Self::FUCHSIA,
        Self::GREEN,
        Self::LIME,
        Self::OLIVE,
        Self::YELLOW,
        Self::NAVY,
        Self::BLUE,
        Self::TEAL,
        Self::AQUA,
    ];

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Naive linear interpolation of the encoded bytes.
    ///
    /// Cheap but perceptually wrong between saturated hues; prefer
    /// [`Color::blend`] when the result is shown to a human.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }

    /// Gamma-correct mix of two colors.
    ///
    /// `fraction` is the weight of `self`: 1.0 yields (approximately) `self`,
    /// 0.0 yields (approximately) `other`. The r, g, b channels are decoded
    /// from sRGB, interpolated in linear light, and re-encoded; alpha is
    /// interpolated directly since it is not a light intensity.
    ///
    /// Total function: `fraction` outside `[0, 1]` extrapolates, and every
    /// output channel saturates into the valid byte range. Never fails.
    #[must_use]
    pub fn blend(self, other: Self, fraction: f32) -> Self {
        Self::new(
            blend_channel(self.r, other.r, fraction),
            blend_channel(self.g, other.g, fraction),
            blend_channel(self.b, other.b, fraction),
            (((f32::from(self.a) / 256.0) * fraction
                + (f32::from(other.a) / 256.0) * (1.0 - fraction))
                * 256.0) as u8,
        )
    }
}

/// Cubic approximation of the sRGB decode curve, `x` in [0, 1].
fn srgb_to_linear(x: f32) -> f32 {
    x * (x * (x * 0.30530611 + 0.682171111) + 0.012522878)
}

/// Nested-square-root approximation of the sRGB encode curve.
///
/// Not an exact inverse of [`srgb_to_linear`]; see the module docs.
fn linear_to_srgb(x: f32) -> f32 {
    let s0 = x.sqrt();
    let s1 = s0.sqrt();
    let s2 = s1.sqrt();
    (0.662002687 * s0 + 0.684122060 * s1 - 0.323583601 * s2 - 0.0225411470 * x).clamp(0.0, 1.0)
}

/// Mix one channel pair in linear light and re-encode, saturating to u8.
fn blend_channel(x: u8, y: u8, fraction: f32) -> u8 {
    let mixed = srgb_to_linear(f32::from(x) / 256.0) * fraction
        + srgb_to_linear(f32::from(y) / 256.0) * (1.0 - fraction);
    (linear_to_srgb(mixed) * 256.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel_delta(a: u8, b: u8) -> u8 {
        a.abs_diff(b)
    }

    #[test]
    fn test_constants() {
        assert_eq!(Color::BLACK, Color::rgb(0, 0, 0));
        assert_eq!(Color::WHITE, Color::rgb(255, 255, 255));
        assert_eq!(Color::RED.r, 255);
        assert_eq!(Color::LIME.g, 255);
        assert_eq!(Color::BLUE.b, 255);
        assert_eq!(Color::PALETTE.len(), 16);
        for col in Color::PALETTE {
            assert_eq!(col.a, 255);
        }
    }

    #[test]
    fn test_to_array_from_array() {
        let color = Color::new(10, 20, 30, 40);
        assert_eq!(Color::from_array(color.to_array()), color);
    }

    #[test]
    fn test_with_alpha() {
        let semi = Color::RED.with_alpha(128);
        assert_eq!(semi.r, 255);
        assert_eq!(semi.a, 128);
    }

    #[test]
    fn test_blend_midpoint_is_gamma_corrected() {
        let mid = Color::BLACK.blend(Color::WHITE, 0.5);

        // The encode polynomial puts the perceptual midpoint of black and
        // white near 188, well above the naive byte average of 128.
        assert!((186..=189).contains(&mid.r), "mid.r = {}", mid.r);
        assert_eq!(mid.r, mid.g);
        assert_eq!(mid.g, mid.b);
        assert!(mid.r > 160);
        assert_eq!(mid.a, 255);
    }

    #[test]
    fn test_blend_differs_from_lerp() {
        let blended = Color::BLACK.blend(Color::WHITE, 0.5);
        let lerped = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert!(blended.r > lerped.r + 30);
    }

    #[test]
    fn test_blend_self_is_idempotent_on_palette() {
        // Polynomial round trip drifts by at most one count for the
        // palette's channel values (0, 128, 192, 255).
        for col in Color::PALETTE {
            for fraction in [0.0, 0.25, 0.5, 0.75, 1.0] {
                let out = col.blend(col, fraction);
                assert!(channel_delta(out.r, col.r) <= 1, "{col:?} @ {fraction}");
                assert!(channel_delta(out.g, col.g) <= 1, "{col:?} @ {fraction}");
                assert!(channel_delta(out.b, col.b) <= 1, "{col:?} @ {fraction}");
                assert_eq!(out.a, col.a);
            }
        }
    }

    #[test]
    fn test_blend_endpoints_on_palette() {
        for c0 in Color::PALETTE {
            for c1 in Color::PALETTE {
                let at_one = c0.blend(c1, 1.0);
                assert!(channel_delta(at_one.r, c0.r) <= 2);
                assert!(channel_delta(at_one.g, c0.g) <= 2);
                assert!(channel_delta(at_one.b, c0.b) <= 2);

                let at_zero = c0.blend(c1, 0.0);
                assert!(channel_delta(at_zero.r, c1.r) <= 2);
                assert!(channel_delta(at_zero.g, c1.g) <= 2);
                assert!(channel_delta(at_zero.b, c1.b) <= 2);
            }
        }
    }

    #[test]
    fn test_blend_extrapolation_saturates() {
        // Fractions outside [0, 1] are extrapolation, never a panic, and
        // every channel stays a valid byte by saturation.
        let a = Color::new(200, 10, 255, 0);
        let b = Color::new(0, 240, 5, 255);
        for fraction in [-3.0, -0.5, 1.5, 4.0] {
            let _ = a.blend(b, fraction);
        }
        // Far extrapolation toward `a` pins bright channels high.
        let far = a.blend(b, 4.0);
        assert_eq!(far.b, 255);
        assert_eq!(far.a, 0);
    }

    #[test]
    fn test_blend_alpha_is_linear() {
        let a = Color::new(0, 0, 0, 0);
        let b = Color::new(0, 0, 0, 255);
        let mid = a.blend(b, 0.5);
        // Plain byte-space average, no gamma curve on alpha.
        assert!((126..=129).contains(&mid.a), "mid.a = {}", mid.a);
    }

    #[test]
    fn test_lerp_boundaries() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, -1.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);
    }

    #[test]
    fn test_default_is_transparent_black() {
        assert_eq!(Color::default(), Color::new(0, 0, 0, 0));
    }
}
