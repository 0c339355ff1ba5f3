//! This module contains a struct, [`Coord`](struct.Coord.html), that models a 3D coordinate space
//! and supports limited math in 3 dimensions with scalars and other coordinates. Every color record
//! in Carmine converts to and from a `Coord`, which is how math that is the same for all of them
//! (midpoints for mixing, Euclidean distance for the CIE76 color difference) is written once
//! instead of once per space.

use num;
use num::{Num, NumCast};
use std::ops::{Add, Div, Mul, Sub};

/// Represents a scalar value that can be easily converted, described using the common numeric
/// traits in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to
/// scale it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. The axes are purely conventional: any color type that converts to a
/// `Coord` matches its components with `x`, `y`, and `z` in the order of the letters in its name,
/// so `CIELABColor` puts `l` on the x-axis, `a` on the y-axis, and `b` on the z-axis.
///
/// # Example
/// ```
/// # use carmine::coord::Coord;
/// let point_1 = Coord { x: 1., y: 8., z: 7. };
/// let point_2 = Coord { x: 7., y: 2., z: 3. };
/// // componentwise addition and subtraction
/// let sum = point_1 + point_2; // the point (8, 10, 10)
/// let diff = point_1 - point_2; // the point (-6, 6, 4)
/// // scalar multiplication and division, one way around only
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// let quot = point_1 / 2.; // the point (0.5, 4, 3.5)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

// Addition and subtraction are componentwise. Multiplication of two points in 3D space has several
// competing definitions and Carmine needs none of them, so only scalar multiplication exists.
impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap();
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        if rhs.is_zero() {
            panic!("Division by 0!");
        } else {
            let r: f64 = num::cast(rhs).unwrap();
            Coord {
                x: self.x / r,
                y: self.y / r,
                z: self.z / r,
            }
        }
    }
}

impl Coord {
    /// The midpoint between two 3D points: returns a new Coord.
    /// # Example
    /// ```
    /// # use carmine::coord::Coord;
    /// let point1 = Coord { x: 0.25, y: 0., z: 1. };
    /// let point2 = Coord { x: 0.75, y: 1., z: 1. };
    /// let mid = point1.midpoint(&point2);
    /// assert!((mid.x - 0.5).abs() <= 1e-10);
    /// assert!((mid.y - 0.5).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn midpoint(&self, other: &Coord) -> Coord {
        Coord {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }
    /// The Euclidean distance between two 3D points: the square root of the sum of squares of the
    /// differences in each axis. For most projections of colors into 3D space this is a poor
    /// analogue of perceptual difference; the one space where it is the accepted baseline is
    /// CIELAB, where it is the CIE76 formula
    /// [`CIELABColor::delta_e`](../colors/cielabcolor/struct.CIELABColor.html#method.delta_e). For
    /// anything more faithful to human vision, use the CIE94, CMC, or CIEDE2000 methods in the
    /// [`distance`](../distance/index.html) module.
    /// # Example
    /// ```
    /// # use carmine::coord::Coord;
    /// let point1 = Coord { x: 0., y: 0., z: -1. };
    /// let point2 = Coord { x: 2., y: 3., z: 5. };
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}
