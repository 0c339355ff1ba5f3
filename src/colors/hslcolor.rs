//! This file implements what is usually just called HSL but would more precisely be sHSL: a simple
//! cylindrical reshuffling of sRGB. HSL inherits all of sRGB's problems with perceptual
//! uniformity, so it is a poor space for measuring color difference, but it is convenient for
//! picking and nudging display colors because hue, saturation, and lightness line up loosely with
//! how people describe colors. A small note on the gray axis: when all three channels are equal
//! the hue is undefined, and this implementation (like most) reports 0 for it.

use color::RGBColor;
use coord::Coord;

/// A color in the HSL color space, a direct transformation of sRGB. Unlike the degree-valued hue
/// of CIELCH, all three components here are normalized to the unit interval.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component as a fraction of a full turn, in [0, 1). Multiply by 360 for degrees: 0
    /// is red, 1/3 is green, 2/3 is blue.
    pub h: f64,
    /// The saturation component, in [0, 1]. 0 is gray; 1 is the most vivid color of this hue and
    /// lightness. Much less perceptually meaningful than CIELCH chroma.
    pub s: f64,
    /// The lightness component, in [0, 1]: the average of the largest and smallest sRGB channels,
    /// which trades accuracy for convenience. 0 is black, 1 is white.
    pub l: f64,
}

impl HSLColor {
    /// Converts from sRGB. Channels are normalized to [0, 1]; lightness is the midpoint of the
    /// channel extremes; saturation is the channel spread scaled by whichever half of the
    /// lightness cone the color sits in; and hue is computed per-sector based on which channel is
    /// largest, wrapped back into [0, 1) when a sector formula lands outside it.
    /// # Example
    /// ```
    /// # use carmine::color::RGBColor;
    /// let teal = RGBColor { r: 0., g: 128., b: 128. }.to_hsl();
    /// assert!((teal.h - 0.5).abs() <= 1e-10);
    /// assert!((teal.s - 1.0).abs() <= 1e-10);
    /// ```
    pub fn from_rgb(rgb: RGBColor) -> HSLColor {
        let r = rgb.r / 255.0;
        let g = rgb.g / 255.0;
        let b = rgb.b / 255.0;
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let lightness = (max_c + min_c) / 2.0;

        if max_c == min_c {
            // gray: hue undefined, reported as 0, and saturation is 0
            return HSLColor {
                h: 0.0,
                s: 0.0,
                l: lightness,
            };
        }
        let d = max_c - min_c;
        let saturation = if lightness < 0.5 {
            d / (min_c + max_c)
        } else {
            d / (2.0 - max_c - min_c)
        };
        // each sector formula gives the position along one-sixth of the hue circle
        let mut hue = if max_c == r {
            (g - b) / d / 6.0
        } else if max_c == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        // the red sector can come out negative; wrap back into [0, 1)
        if hue < 0.0 {
            hue += 1.0;
        }
        if hue >= 1.0 {
            hue -= 1.0;
        }
        HSLColor {
            h: hue,
            s: saturation,
            l: lightness,
        }
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl Into<Coord> for HSLColor {
    fn into(self) -> Coord {
        Coord {
            x: self.h,
            y: self.s,
            z: self.l,
        }
    }
}
