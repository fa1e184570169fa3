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

//! The spherical module calculates distances and bearings on the surface of
//! a sphere using the
//! [spherical law of cosines](https://en.wikipedia.org/wiki/Spherical_law_of_cosines).
//!
//! It is much cheaper than the `vincenty` module, but ignores the
//! flattening of the Earth: distances may differ from the geodesic distance
//! on the ellipsoid by up to 0.5%.

#![allow(clippy::suboptimal_flops)]

use crate::{
    is_same_position, normalise_bearing, Degrees, GeodesicResult, LatLong, Metres, Radians,
};
use angle_sc::trig::UnitNegRange;

/// Calculate the great circle distance between a pair of positions on a
/// unit sphere.
/// * `a`, `b` - the start and finish positions.
///
/// returns the central angle between the positions, `0 <= angle <= π`.
///
/// # Examples
/// ```
/// use latlng::{spherical, Degrees, LatLong};
///
/// let a = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let b = LatLong::new(Degrees(0.0), Degrees(180.0));
/// let angle = spherical::calculate_central_angle(&a, &b);
/// assert_eq!(core::f64::consts::PI, angle.0);
/// ```
#[must_use]
pub fn calculate_central_angle(a: &LatLong, b: &LatLong) -> Radians {
    let phi1 = a.lat().0.to_radians();
    let phi2 = b.lat().0.to_radians();
    let delta_long = (b.lon().0 - a.lon().0).to_radians();

    // rounding may put nearly coincident or antipodal points outside acos range
    let cos_angle = UnitNegRange::clamp(
        libm::sin(phi1) * libm::sin(phi2)
            + libm::cos(phi1) * libm::cos(phi2) * libm::cos(delta_long),
    );
    Radians(libm::acos(cos_angle.0))
}

/// Calculate the initial bearing of the great circle between a pair of
/// positions on a sphere.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing at the start position, `0° <= bearing < 360°`.
#[must_use]
pub fn calculate_initial_bearing(a: &LatLong, b: &LatLong) -> Degrees {
    let phi1 = a.lat().0.to_radians();
    let phi2 = b.lat().0.to_radians();
    let delta_long = (b.lon().0 - a.lon().0).to_radians();

    let bearing = libm::atan2(
        libm::sin(delta_long),
        libm::cos(phi1) * libm::tan(phi2) - libm::sin(phi1) * libm::cos(delta_long),
    );
    normalise_bearing(bearing.to_degrees())
}

/// Calculate the great circle distance and initial bearing between a pair
/// of positions on a sphere.
/// * `a`, `b` - the start and finish positions.
/// * `radius` - the radius of the sphere, e.g. the Earth's equatorial radius.
///
/// # Examples
/// ```
/// use latlng::*;
///
/// let a = LatLong::new(Degrees(36.0), Degrees(150.0));
/// let b = LatLong::new(Degrees(44.0), Degrees(141.0));
/// let result = spherical::calculate_distance_and_bearing(&a, &b, GRS80_ELLIPSOID.a());
///
/// assert!((result.distance.0 - 1_174_152.51).abs() < 1e-2);
/// assert!((result.bearing.0 - 322.066_954).abs() < 1e-6);
/// ```
#[must_use]
pub fn calculate_distance_and_bearing(a: &LatLong, b: &LatLong, radius: Metres) -> GeodesicResult {
    if is_same_position(a, b) {
        return GeodesicResult::ZERO;
    }

    GeodesicResult::new(
        Metres(radius.0 * calculate_central_angle(a, b).0),
        calculate_initial_bearing(a, b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GRS80_ELLIPSOID;
    use angle_sc::is_within_tolerance;

    fn lat_long(lat: f64, lon: f64) -> LatLong {
        LatLong::new(Degrees(lat), Degrees(lon))
    }

    #[test]
    fn test_calculate_central_angle() {
        let a = lat_long(0.0, 0.0);
        assert_eq!(0.0, calculate_central_angle(&a, &a).0);

        let b = lat_long(0.0, 90.0);
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            calculate_central_angle(&a, &b).0,
            f64::EPSILON
        ));

        let b = lat_long(90.0, 0.0);
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            calculate_central_angle(&a, &b).0,
            f64::EPSILON
        ));
    }

    #[test]
    fn test_central_angle_clamped() {
        // nearly coincident positions
        let a = lat_long(36.0, 150.0);
        let b = lat_long(36.000_000_000_1, 150.0);
        let angle = calculate_central_angle(&a, &b);
        assert!(angle.0.is_finite());
        assert!(0.0 <= angle.0);

        // antipodal positions
        let a = lat_long(60.0, -20.0);
        let b = lat_long(-60.0, 160.0);
        let angle = calculate_central_angle(&a, &b);
        assert!(is_within_tolerance(core::f64::consts::PI, angle.0, 1e-7));
    }

    #[test]
    fn test_calculate_initial_bearing() {
        let a = lat_long(0.0, 0.0);
        assert_eq!(0.0, calculate_initial_bearing(&a, &lat_long(1.0, 0.0)).0);
        assert_eq!(180.0, calculate_initial_bearing(&a, &lat_long(-1.0, 0.0)).0);
        assert!(is_within_tolerance(
            90.0,
            calculate_initial_bearing(&a, &lat_long(0.0, 1.0)).0,
            1e-12
        ));
        assert!(is_within_tolerance(
            270.0,
            calculate_initial_bearing(&a, &lat_long(0.0, -1.0)).0,
            1e-12
        ));
    }

    #[test]
    fn test_calculate_distance_and_bearing() {
        let a = lat_long(36.0, 150.0);
        let b = lat_long(44.0, 141.0);
        let result = calculate_distance_and_bearing(&a, &b, GRS80_ELLIPSOID.a());
        assert!(is_within_tolerance(1_174_152.509_570_948, result.distance.0, 1e-6));
        assert!(is_within_tolerance(322.066_953_860_750_6, result.bearing.0, 1e-9));

        let result = calculate_distance_and_bearing(&b, &a, GRS80_ELLIPSOID.a());
        assert!(is_within_tolerance(1_174_152.509_570_948, result.distance.0, 1e-6));
        assert!(is_within_tolerance(136.260_758_994_885_07, result.bearing.0, 1e-9));
    }

    #[test]
    fn test_calculate_distance_and_bearing_identical() {
        let a = lat_long(36.0, 150.0);
        let result = calculate_distance_and_bearing(&a, &a, GRS80_ELLIPSOID.a());
        assert_eq!(GeodesicResult::ZERO, result);
    }

    #[test]
    fn test_calculate_distance_and_bearing_antipodal() {
        let a = lat_long(0.0, 0.0);
        let b = lat_long(0.0, 180.0);
        let result = calculate_distance_and_bearing(&a, &b, GRS80_ELLIPSOID.a());
        assert!(is_within_tolerance(20_037_508.342_789_244, result.distance.0, 1e-6));
        assert!(is_within_tolerance(90.0, result.bearing.0, 1e-12));
    }

    #[test]
    fn test_calculate_distance_and_bearing_radius() {
        let a = lat_long(-40.0, 70.0);
        let b = lat_long(30.0, 0.0);
        let unit = calculate_distance_and_bearing(&a, &b, Metres(1.0));
        let earth = calculate_distance_and_bearing(&a, &b, GRS80_ELLIPSOID.a());
        assert!(is_within_tolerance(
            unit.distance.0 * GRS80_ELLIPSOID.a().0,
            earth.distance.0,
            1e-6
        ));
        assert_eq!(unit.bearing, earth.bearing);
        assert!(is_within_tolerance(305.169_129_767_203_23, earth.bearing.0, 1e-9));
    }
}
