//! This file provides the constants used for color space conversion: the linear sRGB→XYZ
//! transformation matrix and the D65 reference white point. The matrix lives behind a function
//! instead of a `static` because `rulinalg` matrices can't be constructed in a constant context.
//! Carmine works exclusively in D65, the daylight illuminant that sRGB itself is defined against,
//! so a single white point suffices.

use rulinalg::matrix::Matrix;

/// The white point of the D65 standard illuminant, as XYZ tristimulus values normalized so that Y
/// (luminance) is 100. These are the values used by the sRGB standard.
pub static D65_WHITE_POINT: [f64; 3] = [95.047, 100.000, 108.883];

/// The matrix taking linear-light sRGB values to XYZ tristimulus values under D65. The rows
/// produce X, Y, and Z in order from an (R, G, B) column vector.
#[allow(non_snake_case)]
pub fn SRGB_TO_XYZ_MAT() -> Matrix<f64> {
    matrix![
        0.4124, 0.3576, 0.1805;
        0.2126, 0.7152, 0.0722;
        0.0193, 0.1192, 0.9505
    ]
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_matrix_rows_sum_to_white() {
        // full-intensity linear RGB, scaled by 100, has to land on the nominal sRGB white
        let mat = SRGB_TO_XYZ_MAT();
        let x = mat[[0, 0]] + mat[[0, 1]] + mat[[0, 2]];
        let y = mat[[1, 0]] + mat[[1, 1]] + mat[[1, 2]];
        let z = mat[[2, 0]] + mat[[2, 1]] + mat[[2, 2]];
        assert!((x * 100.0 - 95.05).abs() <= 1e-8);
        assert!((y * 100.0 - 100.0).abs() <= 1e-8);
        assert!((z * 100.0 - 108.9).abs() <= 1e-8);
    }
}
