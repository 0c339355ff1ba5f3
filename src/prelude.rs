//! This module simply brings the most common Carmine functionality under a single namespace, to
//! prevent excessive imports: the five color records, the difference-metric parameter structs,
//! and the [`Mix`] trait.

pub use color::{RGBColor, XYZColor};
pub use colors::{CIELABColor, CIELCHColor, HSLColor};
pub use distance::{CIE94Params, CIEDE2000Params, CMCParams};
pub use mix::Mix;
