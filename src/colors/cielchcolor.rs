//! This file implements the CIELCH color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes. It carries exactly the same information as
//! CIELAB; the cylindrical coordinates are simply the more natural frame for talking about "how
//! colorful" (chroma) and "which color" (hue) separately.

use colors::cielabcolor::CIELABColor;
use coord::Coord;

/// A cylindrical form of CIELAB, analogous to the relationship between HSL and RGB.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHColor {
    /// The luminance component, identical to CIELAB's. Ranges between 0 and 100.
    pub l: f64,
    /// The chroma component: the distance away from the neutral line a = b = 0. Nonnegative, and
    /// below roughly 150 for every physically meaningful color.
    pub c: f64,
    /// The hue component, in degrees in the range [0, 360). 0 is towards magenta-red, 90 towards
    /// yellow, 180 towards green, and 270 towards blue.
    pub h: f64,
}

impl CIELCHColor {
    /// Converts from CIELAB by going to cylindrical coordinates: chroma is the radius
    /// sqrt(a² + b²) and hue is the angle of (a, b), converted to degrees and brought into
    /// [0, 360) by mapping a negative angle θ to 360 − |θ|. The achromatic case a = b = 0 lands on
    /// h = 0, the `atan2(0, 0)` convention.
    /// # Example
    /// ```
    /// # use carmine::colors::{CIELABColor, CIELCHColor};
    /// let lab = CIELABColor { l: 50., a: 0., b: -10. };
    /// let lch = CIELCHColor::from_lab(lab);
    /// assert!((lch.c - 10.0).abs() <= 1e-10);
    /// assert!((lch.h - 270.0).abs() <= 1e-10);
    /// ```
    pub fn from_lab(lab: CIELABColor) -> CIELCHColor {
        let angle = lab.b.atan2(lab.a);
        let h = if angle < 0.0 {
            // map a negative angle to the equivalent one a full turn up
            360.0 - angle.abs().to_degrees()
        } else {
            angle.to_degrees()
        };
        CIELCHColor {
            l: lab.l,
            c: (lab.a * lab.a + lab.b * lab.b).sqrt(),
            h,
        }
    }
}

impl From<Coord> for CIELCHColor {
    fn from(c: Coord) -> CIELCHColor {
        CIELCHColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl Into<Coord> for CIELCHColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.c,
            z: self.h,
        }
    }
}
