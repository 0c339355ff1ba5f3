//! Describes colors that can be mixed with other colors of the same type. Mixing, in this
//! context, is taking the midpoint of the two colors' projections into 3D space: if colors A and
//! B mix to A, that should mean B is the same color as A.
//!
//! One very crucial thing to remember about mixing: it depends on the color space being used. If
//! A and B are converted to another space and mixed there, the result will generally differ from
//! converting the mix itself. For that reason `mix` is only allowed between two colors of the
//! same type; mixing across spaces would make `A.mix(B)` and `B.mix(A)` disagree, which is
//! error-prone and unintuitive.
//!
//! Also note that mixing in any additive space will not agree with paint-style subtractive
//! mixing: yellow mixed with blue here is gray, not green.

use coord::Coord;

/// A trait for colors that can be mixed within their own space. There is a blanket
/// implementation for anything that converts to and from [`Coord`], which covers every color
/// record in the crate.
pub trait Mix: From<Coord> + Into<Coord> {
    /// Given two Colors, returns a Color representing their midpoint in the space's projection
    /// into three-dimensional space.
    fn mix(self, other: Self) -> Self;
}

impl<T: From<Coord> + Into<Coord>> Mix for T {
    /// Given two colors that represent the points (a1, b1, c1) and (a2, b2, c2) in some common
    /// projection, returns the color (a1 + a2, b1 + b2, c1 + c2) / 2.
    fn mix(self, other: T) -> T {
        // convert to 3D space, take the midpoint, come back
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        T::from(c1.midpoint(&c2))
    }
}
