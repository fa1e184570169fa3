// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! This module contains the series coefficients used by Vincenty's inverse
//! formula to convert between lengths on the auxiliary sphere and the
//! ellipsoid.
//!
//! The equations are from T. Vincenty,
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application
//! of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf),
//! Survey Review XXIII, 1975.

#![allow(clippy::suboptimal_flops)]

/// Calculate `u^2`, the square of the geodesic's reduced second eccentricity.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the Equator.
/// * `ep_2` - the square of the second Eccentricity of the ellipsoid.
#[must_use]
pub fn calculate_sq_u(sq_cos_alpha: f64, ep_2: f64) -> f64 {
    sq_cos_alpha * ep_2
}

/// The scale factor `A`.
/// Vincenty, Eq. 3.
/// * `sq_u` - `u^2`, see `calculate_sq_u`.
/// # Examples
/// ```
/// use angle_sc::is_within_tolerance;
/// use latlng::ellipsoid::{calculate_sq_2nd_eccentricity, grs80};
/// use latlng::ellipsoid::coefficients::evaluate_a;
///
/// // evaluate_a for a GRS 80 meridian
/// let sq_u = calculate_sq_2nd_eccentricity(grs80::F);
/// assert!(is_within_tolerance(1.001_682_751_049_825_4, evaluate_a(sq_u), 1e-15));
/// ```
#[must_use]
pub fn evaluate_a(sq_u: f64) -> f64 {
    1.0 + sq_u / 16384.0 * (4096.0 + sq_u * (-768.0 + sq_u * (320.0 - 175.0 * sq_u)))
}

/// The series coefficient `B`.
/// Vincenty, Eq. 4.
/// * `sq_u` - `u^2`, see `calculate_sq_u`.
/// # Examples
/// ```
/// use angle_sc::is_within_tolerance;
/// use latlng::ellipsoid::{calculate_sq_2nd_eccentricity, grs80};
/// use latlng::ellipsoid::coefficients::evaluate_b;
///
/// // evaluate_b for a GRS 80 meridian
/// let sq_u = calculate_sq_2nd_eccentricity(grs80::F);
/// assert!(is_within_tolerance(0.001_679_218_618_560_264_3, evaluate_b(sq_u), 1e-15));
/// ```
#[must_use]
pub fn evaluate_b(sq_u: f64) -> f64 {
    sq_u / 1024.0 * (256.0 + sq_u * (-128.0 + sq_u * (74.0 - 47.0 * sq_u)))
}

/// The longitude correction coefficient `C`.
/// Vincenty, Eq. 10.
/// * `f` - the flattening of the ellipsoid.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the Equator.
#[must_use]
pub fn evaluate_c(f: f64, sq_cos_alpha: f64) -> f64 {
    f / 16.0 * sq_cos_alpha * (4.0 + f * (4.0 - 3.0 * sq_cos_alpha))
}

/// The difference between the arc length on the auxiliary sphere and the
/// scaled geodesic length, `Δσ`.
/// Vincenty, Eq. 6.
/// * `b` - the series coefficient `B`, see `evaluate_b`.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of the arc length.
/// * `cos_2sigma_m` - the cosine of twice the arc length from the Equator to
///   the midpoint of the arc.
#[must_use]
pub fn evaluate_delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let sq_cos_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * sq_cos_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * sq_cos_2sigma_m)))
}

/// The longitude difference on the auxiliary sphere, `λ`, for the next
/// iteration.
/// Vincenty, Eq. 11.
/// * `delta_long` - the geodetic longitude difference, `L`.
/// * `f` - the flattening of the ellipsoid.
/// * `c` - the coefficient `C`, see `evaluate_c`.
/// * `sin_alpha` - the sine of the azimuth at the Equator.
/// * `sigma`, `sin_sigma`, `cos_sigma` - the arc length, its sine and cosine.
/// * `cos_2sigma_m` - see `evaluate_delta_sigma`.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn evaluate_lambda(
    delta_long: f64,
    f: f64,
    c: f64,
    sin_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
) -> f64 {
    delta_long
        + (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)))
}
