//! Board geometry primitives.
//!
//! Coordinates are in millimetres, angles in degrees. These are plain value
//! types; the interesting transforms (mirror, rotate) live on
//! [`ComponentInstance`](super::ComponentInstance), which knows which of its
//! parts move together.

use serde::{Deserialize, Serialize};

/// A 2D point in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate in mm.
    pub x: f64,
    /// Y coordinate in mm.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Mirrors this point about a vertical axis through `about`.
    #[must_use]
    pub fn mirrored_x(self, about: Self) -> Self {
        Self {
            x: 2.0f64.mul_add(about.x, -self.x),
            y: self.y,
        }
    }
}

/// An angle in degrees, normalised to `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Angle(f64);

impl Angle {
    /// Zero degrees.
    pub const ZERO: Self = Self(0.0);

    /// Creates an angle from degrees, normalising into `[0, 360)`.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.rem_euclid(360.0))
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// The angle after mirroring about a vertical axis.
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self::from_degrees(-self.0)
    }
}

/// Which side of the board an item sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Front (top) of the board.
    #[default]
    Front,
    /// Back (bottom) of the board.
    Back,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_about_self_is_identity() {
        let p = Point::new(3.5, -1.25);
        assert_eq!(p.mirrored_x(p), p);
    }

    #[test]
    fn mirror_reflects_x_only() {
        let p = Point::new(1.0, 2.0);
        let about = Point::new(4.0, 0.0);
        assert_eq!(p.mirrored_x(about), Point::new(7.0, 2.0));
    }

    #[test]
    fn angle_normalises() {
        assert!((Angle::from_degrees(450.0).degrees() - 90.0).abs() < f64::EPSILON);
        assert!((Angle::from_degrees(-90.0).degrees() - 270.0).abs() < f64::EPSILON);
    }

    #[test]
    fn angle_mirror() {
        let a = Angle::from_degrees(90.0);
        assert!((a.mirrored().degrees() - 270.0).abs() < f64::EPSILON);
        assert_eq!(Angle::ZERO.mirrored(), Angle::ZERO);
    }

    #[test]
    fn side_opposite() {
        assert_eq!(Side::Front.opposite(), Side::Back);
        assert_eq!(Side::Back.opposite(), Side::Front);
    }
}
