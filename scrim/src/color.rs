//! Color values for overlay styling.
//!
//! Colors are either concrete sRGB bytes or OKLCH, the perceptual space used
//! for interpolation. Hosts resolve everything to [`Rgb`] at paint time.

use palette::{IntoColor, Oklch, Srgb};

/// A styling color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Perceptual OKLCH (lightness, chroma, hue in degrees).
    Oklch { l: f32, c: f32, h: f32 },
    /// sRGB bytes.
    Rgb { r: u8, g: u8, b: u8 },
}

/// Concrete sRGB triple, the form hosts paint with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Resolve to concrete sRGB bytes.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }

    /// Extract OKLCH components, converting from sRGB when necessary.
    pub fn to_oklch(&self) -> (f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h } => (*l, *c, *h),
            Self::Rgb { r, g, b } => {
                let srgb = Srgb::new(
                    *r as f32 / 255.0,
                    *g as f32 / 255.0,
                    *b as f32 / 255.0,
                );
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
            }
        }
    }

    /// Interpolate toward `other` in OKLCH space.
    ///
    /// Lightness and chroma interpolate linearly; hue takes the shortest
    /// path around the circle.
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        let (from_l, from_c, from_h) = self.to_oklch();
        let (to_l, to_c, to_h) = other.to_oklch();

        let l = from_l + (to_l - from_l) * t;
        let c = from_c + (to_c - from_c) * t;

        let mut dh = to_h - from_h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        let h = (from_h + dh * t).rem_euclid(360.0);

        Color::oklch(l, c, h)
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let srgb = srgb.into_format::<f32>();
    Rgb::new(
        (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_roundtrip_is_identity() {
        let color = Color::rgb(16, 142, 233);
        assert_eq!(color.to_rgb(), Rgb::new(16, 142, 233));
    }

    #[test]
    fn oklch_resolves_to_plausible_rgb() {
        // A mid-lightness blue accent.
        let rgb = Color::oklch(0.62, 0.16, 250.0).to_rgb();
        assert!(rgb.b > rgb.r, "expected a blue-dominant color, got {rgb:?}");
    }

    #[test]
    fn lerp_endpoints_match_inputs() {
        let a = Color::oklch(0.2, 0.05, 100.0);
        let b = Color::oklch(0.8, 0.15, 140.0);

        let at_start = a.lerp(&b, 0.0).to_oklch();
        assert!((at_start.0 - 0.2).abs() < 1e-5);

        let at_end = a.lerp(&b, 1.0).to_oklch();
        assert!((at_end.0 - 0.8).abs() < 1e-5);
    }

    #[test]
    fn lerp_hue_takes_shortest_path() {
        let a = Color::oklch(0.5, 0.1, 350.0);
        let b = Color::oklch(0.5, 0.1, 10.0);

        // Halfway should land on 0/360, not 180.
        let (_, _, h) = a.lerp(&b, 0.5).to_oklch();
        assert!(h < 20.0 || h > 340.0, "hue {h} crossed the long way");
    }
}
