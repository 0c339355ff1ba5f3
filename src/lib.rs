//! Carmine is a library for converting colors between representations and for measuring how
//! different two colors actually look. The underlying philosophy is that color difference is a
//! perceptual question, not a geometric one: subtracting RGB channels says almost nothing about
//! what a human would notice. Carmine moves colors into spaces built around human vision (CIELAB
//! and its cylindrical form CIELCH) and implements the standard difference formulas the color
//! science community has refined over the decades: CIE76, CIE94, CMC l:c, and CIEDE2000. Every
//! operation is a pure function over immutable value records, so the whole crate is freely usable
//! from any number of threads with no synchronization.

#![doc(html_root_url = "https://docs.rs/carmine/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate num;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
#[macro_use]
extern crate float_cmp;

pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod distance;
pub mod mix;
pub mod prelude;
