//! This module contains the color spaces beyond sRGB and XYZ. For convenience, each main type is
//! imported into this module's namespace directly.

pub mod cielabcolor;
pub mod cielchcolor;
pub mod hslcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cielchcolor::CIELCHColor;
pub use self::hslcolor::HSLColor;
