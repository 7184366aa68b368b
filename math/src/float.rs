use std::fmt;
use std::ops::{Mul, Neg};

/// Represents an angle. Stored internally in radians; build one with `new_rad()` or `new_deg()`
/// so that the unit is never ambiguous at the call site.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f32,
}

impl Angle {
    pub fn new_rad(rad: f32) -> Self {
        Self { rad }
    }
    pub fn new_deg(deg: f32) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }
    pub fn to_rad(self) -> f32 {
        self.rad
    }
    pub fn to_deg(self) -> f32 {
        self.rad.to_degrees()
    }
    pub fn sin_cos(self) -> (f32, f32) {
        self.rad.sin_cos()
    }
    pub fn tan(self) -> f32 {
        self.rad.tan()
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;
    fn mul(self, s: f32) -> Angle {
        Angle::new_rad(self.rad * s)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::new_rad(-self.rad)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.p$}deg", self.to_deg(), p = precision)
    }
}

pub trait Float: Sized {
    /// Returns the fractional part of `|self|`, always in [0, 1).
    fn abs_fract(self) -> Self;
}

impl Float for f32 {
    /// Folds negative values onto the positive axis before taking the fractional part, so that a
    /// periodic pattern looks the same on both sides of zero.
    /// ```
    /// use math::float::Float;
    /// assert!((2.25f32.abs_fract() - 0.25).abs() < 1e-6);
    /// assert!(((-2.25f32).abs_fract() - 0.25).abs() < 1e-6);
    /// assert_eq!(0.0f32.abs_fract(), 0.0);
    /// ```
    fn abs_fract(self) -> f32 {
        self.abs().fract()
    }
}

#[macro_export]
macro_rules! assert_le {
    ($left:expr, $right:expr) => {
        if $left > $right {
            panic!(
                "Assertion failed: {} <= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_lt {
    ($left:expr, $right:expr) => {
        if $left >= $right {
            panic!(
                "Assertion failed: {} < {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_gt {
    ($left:expr, $right:expr) => {
        if $left <= $right {
            panic!(
                "Assertion failed: {} > {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_ge {
    ($left:expr, $right:expr) => {
        if $left < $right {
            panic!(
                "Assertion failed: {} >= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}
