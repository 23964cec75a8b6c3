//! Colour values shared by every sketch.
//!
//! Sketches describe most colours in HSB with 0..100 saturation, brightness
//! and alpha (hue in degrees); the drawing surface only understands CSS
//! `rgba()` so everything is converted through [`Rgba`].

/// RGB colour with channels in `0..=255` and alpha in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb(rgb: [u8; 3], a: f32) -> Self {
        Self::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32, a)
    }

    /// CSS colour string; channels and alpha are clamped to their ranges.
    pub fn css(&self) -> String {
        format!(
            "rgba({},{},{},{:.3})",
            self.r.clamp(0.0, 255.0).round() as u8,
            self.g.clamp(0.0, 255.0).round() as u8,
            self.b.clamp(0.0, 255.0).round() as u8,
            self.a.clamp(0.0, 1.0)
        )
    }

    /// Component-wise interpolation. `amount` is clamped to `[0, 1]`.
    pub fn lerp(self, to: Rgba, amount: f32) -> Rgba {
        let t = amount.clamp(0.0, 1.0);
        Rgba {
            r: self.r + (to.r - self.r) * t,
            g: self.g + (to.g - self.g) * t,
            b: self.b + (to.b - self.b) * t,
            a: self.a + (to.a - self.a) * t,
        }
    }
}

/// HSB colour: hue in degrees, saturation/brightness/alpha in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsba {
    pub h: f32,
    pub s: f32,
    pub b: f32,
    pub a: f32,
}

impl Hsba {
    pub const fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self { h, s, b, a }
    }

    pub fn from_triple(hsb: [f32; 3], a: f32) -> Self {
        Self::new(hsb[0], hsb[1], hsb[2], a)
    }

    pub fn to_rgba(self) -> Rgba {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.b / 100.0).clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let (r1, g1, b1) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        Rgba {
            r: (r1 + m) * 255.0,
            g: (g1 + m) * 255.0,
            b: (b1 + m) * 255.0,
            a: (self.a / 100.0).clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_convert() {
        let red = Hsba::new(0.0, 100.0, 100.0, 100.0).to_rgba();
        assert_eq!((red.r, red.g, red.b), (255.0, 0.0, 0.0));
        let blue = Hsba::new(240.0, 100.0, 100.0, 50.0).to_rgba();
        assert_eq!((blue.r.round(), blue.g.round(), blue.b.round()), (0.0, 0.0, 255.0));
        assert!((blue.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn css_clamps_out_of_range() {
        let c = Rgba::new(300.0, -4.0, 12.4, 1.7);
        assert_eq!(c.css(), "rgba(255,0,12,1.000)");
    }
}
