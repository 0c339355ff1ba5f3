//! This file defines the two foundational color types in Carmine: [`RGBColor`], the familiar
//! device-oriented sRGB representation, and [`XYZColor`], the device-independent CIE 1931 space
//! that every perceptual space is defined against. The conversion between them is the gateway to
//! everything else in the crate: sRGB channels are gamma-encoded, so they are first linearized
//! with the piecewise sRGB transfer function and then pushed through a fixed linear transform into
//! tristimulus values.
//!
//! Neither type validates its fields. An `RGBColor` with channels outside [0, 255] simply
//! propagates arithmetically into out-of-gamut XYZ and CIELAB values, and NaN or infinite inputs
//! flow through per IEEE 754. That is deliberate: silent correction would change outputs for
//! edge-case inputs, and callers who want clamping can do it before constructing the record.

use colors::cielabcolor::CIELABColor;
use colors::hslcolor::HSLColor;
use consts;
use coord::Coord;
use rulinalg::vector::Vector;

/// A color in the sRGB color space, the one used by monitors, image formats, and the web. Channels
/// are conventionally in the range [0, 255], stored as `f64` so that fractional and out-of-range
/// values survive round trips through arithmetic untouched.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, nominally 0 to 255.
    pub r: f64,
    /// The green channel, nominally 0 to 255.
    pub g: f64,
    /// The blue channel, nominally 0 to 255.
    pub b: f64,
}

/// A point in the CIE 1931 XYZ color space under the D65 illuminant, scaled so that the Y
/// (luminance) of diffuse white is 100. XYZ is device-independent: it describes the color itself,
/// not any particular way of producing it, which makes it the interchange hub between sRGB and the
/// perceptual spaces.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X tristimulus value, a mix of the cone responses. Nominally non-negative.
    pub x: f64,
    /// The Y tristimulus value: luminance. 100 is diffuse white.
    pub y: f64,
    /// The Z tristimulus value, roughly the blue cone response. Nominally non-negative.
    pub z: f64,
}

/// Undoes the sRGB gamma encoding of a single channel already normalized to [0, 1]. The transfer
/// function is piecewise: a linear toe below 0.04045 and a power curve above it.
fn inverse_srgb_gamma(channel: f64) -> f64 {
    if channel > 0.04045 {
        ((channel + 0.055) / 1.055).powf(2.4)
    } else {
        channel / 12.92
    }
}

impl RGBColor {
    /// Converts to XYZ: each channel is normalized to [0, 1], linearized with the inverse sRGB
    /// gamma function, scaled to the 0–100 range, and multiplied through the sRGB→XYZ matrix.
    /// # Example
    /// ```
    /// # use carmine::color::RGBColor;
    /// let white = RGBColor { r: 255., g: 255., b: 255. };
    /// let xyz = white.to_xyz();
    /// assert!((xyz.y - 100.0).abs() <= 1e-10);
    /// ```
    pub fn to_xyz(&self) -> XYZColor {
        XYZColor::from_rgb(*self)
    }
    /// Converts to HSL, the cylindrical reshuffling of sRGB. See
    /// [`HSLColor::from_rgb`](../colors/hslcolor/struct.HSLColor.html#method.from_rgb).
    pub fn to_hsl(&self) -> HSLColor {
        HSLColor::from_rgb(*self)
    }
}

impl XYZColor {
    /// Converts an sRGB color to XYZ. See [`RGBColor::to_xyz`](struct.RGBColor.html#method.to_xyz)
    /// for the chaining form.
    pub fn from_rgb(rgb: RGBColor) -> XYZColor {
        let linear: Vec<f64> = [rgb.r, rgb.g, rgb.b]
            .iter()
            .map(|channel| inverse_srgb_gamma(channel / 255.0) * 100.0)
            .collect();
        let xyz = consts::SRGB_TO_XYZ_MAT() * Vector::new(linear);
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
    /// Converts to CIELAB. See
    /// [`CIELABColor::from_xyz`](../colors/cielabcolor/struct.CIELABColor.html#method.from_xyz).
    pub fn to_cielab(&self) -> CIELABColor {
        CIELABColor::from_xyz(*self)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor {
            r: f64::from(rgb.0),
            g: f64::from(rgb.1),
            b: f64::from(rgb.2),
        }
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for RGBColor {
    fn into(self) -> Coord {
        Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        }
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl Into<Coord> for XYZColor {
    fn into(self) -> Coord {
        Coord {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_white_to_xyz() {
        // full-intensity sRGB is the D65-ish white the matrix rows sum to
        let xyz = RGBColor::from((255, 255, 255)).to_xyz();
        assert!(approx_eq!(f64, xyz.x, 95.05, epsilon = 1e-8));
        assert!(approx_eq!(f64, xyz.y, 100.0, epsilon = 1e-8));
        assert!(approx_eq!(f64, xyz.z, 108.9, epsilon = 1e-8));
    }
    #[test]
    fn test_black_to_xyz() {
        let xyz = RGBColor { r: 0., g: 0., b: 0. }.to_xyz();
        assert_eq!(xyz.x, 0.0);
        assert_eq!(xyz.y, 0.0);
        assert_eq!(xyz.z, 0.0);
    }
    #[test]
    fn test_mid_blue_to_xyz() {
        // pinned against a reference computation of the same formulas
        let xyz = RGBColor::from((64, 128, 192)).to_xyz();
        assert!(approx_eq!(f64, xyz.x, 19.347951966408505, epsilon = 1e-9));
        assert!(approx_eq!(f64, xyz.y, 20.334102860774205, epsilon = 1e-9));
        assert!(approx_eq!(f64, xyz.z, 52.77429991435711, epsilon = 1e-9));
    }
    #[test]
    fn test_gamma_toe_is_linear() {
        // channel values at or below the toe threshold skip the power curve
        let dark = RGBColor { r: 10.0, g: 0.0, b: 0.0 }.to_xyz();
        let linear_r = 10.0 / 255.0 / 12.92 * 100.0;
        assert!(approx_eq!(f64, dark.x, 0.4124 * linear_r, epsilon = 1e-12));
    }
    #[test]
    fn test_out_of_range_propagates() {
        // no validation or clamping: a negative channel flows through the linear toe
        let xyz = RGBColor { r: -12.92 * 255.0, g: 0.0, b: 0.0 }.to_xyz();
        assert!(approx_eq!(f64, xyz.x, -100.0 * 0.4124, epsilon = 1e-9));
        assert!(xyz.y < 0.0);
    }
}
