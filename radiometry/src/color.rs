use std::{
    iter::Sum,
    ops::{Add, Mul},
};

/// Linear RGB color. Components are unbounded f32 values; clamping and quantization happen only
/// when a color is converted for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Clamps an f32 value to [0, 1], mutiplies it by 255 and casts it to u8.
/// Returns 0 if `f` is NaN.
fn saturate_cast_u8(f: f32) -> u8 {
    if f > 1.0 {
        255
    } else if f >= 0.0 {
        (f * 255.0).round() as u8
    } else {
        0
    }
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }
    pub const fn black() -> Color {
        Color::new(0.0, 0.0, 0.0)
    }
    pub const fn white() -> Color {
        Color::new(1.0, 1.0, 1.0)
    }
    pub const fn gray(level: f32) -> Color {
        Color::new(level, level, level)
    }
    pub fn is_black(&self) -> bool {
        self.r <= 0.0 && self.g <= 0.0 && self.b <= 0.0
    }
    pub fn to_u8(&self) -> [u8; 3] {
        [
            saturate_cast_u8(self.r),
            saturate_cast_u8(self.g),
            saturate_cast_u8(self.b),
        ]
    }
    /// Returns true iff all RGB components are finite and free of NaNs.
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Divides the sum of `n` samples by `n`. Panics if `n` is zero.
    pub fn scale_down_by(self, n: u32) -> Self {
        match n {
            0 => panic!("can't average zero samples"),
            _ => self * (1.0 / n as f32),
        }
    }

    /// Returns `self + weight * other`: the non-energy-conserving mix used for reflections.
    pub fn add_weighted(self, other: Self, weight: f32) -> Self {
        self + other * weight
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, rhs: Self) -> Self {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, s: f32) -> Self {
        Color::new(self.r * s, self.g * s, self.b * s)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;
    fn mul(self, c: Color) -> Color {
        c * self
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "rgb({:.precision$}, {:.precision$}, {:.precision$})",
            self.r,
            self.g,
            self.b,
            precision = precision
        )
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Color::black(), |c0, c1| c0 + c1)
    }
}

#[cfg(test)]
mod test {
    use super::Color;

    #[test]
    fn quantization_saturates() {
        assert_eq!(Color::new(-0.5, 0.5, 2.0).to_u8(), [0, 128, 255]);
        assert_eq!(Color::new(f32::NAN, 1.0, 0.0).to_u8(), [0, 255, 0]);
    }

    #[test]
    fn averaging_samples() {
        let samples = vec![Color::gray(0.25), Color::gray(0.75), Color::white(), Color::black()];
        let mean = samples.iter().copied().sum::<Color>().scale_down_by(4);
        assert_eq!(mean, Color::gray(0.5));
    }

    #[test]
    fn weighted_mix_is_not_normalized() {
        let mixed = Color::white().add_weighted(Color::white(), 0.4);
        assert_eq!(mixed, Color::gray(1.4));
        assert!(mixed.is_finite());
    }
}
