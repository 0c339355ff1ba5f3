//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). CIELAB is a device-independent
//! color space with an L value for luminance and two opponent color axes for chromaticity: it is
//! built so that moving a fixed geometric distance corresponds roughly to a fixed perceived
//! difference, which is what makes it the home of every delta-E formula in the
//! [`distance`](../../distance/index.html) module. Formally the three values are called L\*, a\*,
//! and b\* to distinguish them from generic Lab, but for convenience they are just `l`, `a`, and
//! `b` here.

use color::XYZColor;
use colors::cielchcolor::CIELCHColor;
use consts;
use coord::Coord;

/// A color in the CIELAB color space, under the D65 illuminant.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is black and 100 is the luminance
    /// of diffuse white; reflective surfaces can in principle exceed it.
    pub l: f64,
    /// The first opponent color axis, negative towards green and positive towards magenta. By
    /// convention roughly between -128 and 127, although nothing in the math enforces that and
    /// "imaginary" colors outside human vision are representable.
    pub a: f64,
    /// The second opponent color axis, negative towards blue and positive towards yellow. The same
    /// conventional range and caveats as `a`.
    pub b: f64,
}

impl CIELABColor {
    /// Converts a given CIE XYZ color to CIELAB. The tristimulus values are first scaled against
    /// the D65 white point, then passed through a piecewise cube-root function that models the
    /// compressive nonlinearity of human lightness perception, and finally combined linearly into
    /// the lightness and opponent axes.
    /// # Example
    /// ```
    /// # use carmine::color::RGBColor;
    /// let white_lab = RGBColor { r: 255., g: 255., b: 255. }.to_xyz().to_cielab();
    /// assert!((white_lab.l - 100.0).abs() <= 1e-2);
    /// assert!(white_lab.a.abs() <= 1e-2);
    /// assert!(white_lab.b.abs() <= 1e-2);
    /// ```
    pub fn from_xyz(xyz: XYZColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        // the threshold is (6/29)^3; below it the cube root is replaced by a linear segment
        let f = |v: f64| {
            if v > 0.008856 {
                v.powf(1.0 / 3.0)
            } else {
                7.787 * v + 16.0 / 116.0
            }
        };
        let white_point = consts::D65_WHITE_POINT;
        let fx = f(xyz.x / white_point[0]);
        let fy = f(xyz.y / white_point[1]);
        let fz = f(xyz.z / white_point[2]);

        // simple linear formulae once the nonlinearity is accounted for
        // note how a and b are opponent color axes
        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
    /// Converts to the cylindrical CIELCH form. See
    /// [`CIELCHColor::from_lab`](../cielchcolor/struct.CIELCHColor.html#method.from_lab).
    pub fn to_cielch(&self) -> CIELCHColor {
        CIELCHColor::from_lab(*self)
    }
    /// The chroma of the color: its distance from the neutral axis a = b = 0, i.e.,
    /// sqrt(a² + b²). This is the radial coordinate of CIELCH.
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for CIELABColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.a,
            z: self.b,
        }
    }
}
