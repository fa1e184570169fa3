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

//! The ellipsoid module contains functions for defining an ellipsoid
//! given its Semimajor axis (the equivalent of its radius) and flattening ratio.

#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod grs80;
pub mod wgs84;

use crate::{Degrees, Metres, Radians};

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use angle_sc::is_within_tolerance;
/// use latlng::ellipsoid::{calculate_minor_axis, grs80};
///
/// // The GRS 80 Semiminor axis measured in metres.
/// let b = calculate_minor_axis(grs80::A, grs80::F);
/// assert!(is_within_tolerance(6_356_752.314_140_356, b.0, 1e-8));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid,
/// i.e. `(a^2 - b^2) / b^2`.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use angle_sc::is_within_tolerance;
/// use latlng::ellipsoid::{calculate_sq_2nd_eccentricity, grs80};
///
/// // The GRS 80 sq 2nd eccentricity.
/// let ep_2 = calculate_sq_2nd_eccentricity(grs80::F);
/// assert!(is_within_tolerance(0.006_739_496_775_478_957, ep_2, 1e-15));
/// ```
#[must_use]
pub fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

/// Function to convert a `geodetic` Latitude to a `reduced` Latitude on the
/// auxiliary sphere: `atan((1 - f) * tan(lat))`.
/// * `lat` - the `geodetic` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_reduced_latitude(lat: Degrees, one_minus_f: f64) -> Radians {
    Radians(libm::atan(one_minus_f * libm::tan(lat.0.to_radians())))
}
