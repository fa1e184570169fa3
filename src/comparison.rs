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

//! The comparison module calculates the distance and bearing between a pair
//! of positions with all three models and reports how far the `spherical`
//! and `planar` results are from the `vincenty` result, which is treated as
//! the ground truth.

use crate::{planar, spherical, vincenty, Degrees, Ellipsoid, GeodesicResult, LatLong, Metres};
use core::fmt;

/// A pair of values, one for each approximate model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Differences<T> {
    /// The value for the spherical model.
    pub spherical: T,
    /// The value for the planar model.
    pub planar: T,
}

/// The results of the three models for a pair of positions.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonReport {
    /// The start position.
    pub a: LatLong,
    /// The finish position.
    pub b: LatLong,
    /// The geodesic result on the ellipsoid.
    pub ellipsoidal: GeodesicResult,
    /// The great circle result on a sphere.
    pub spherical: GeodesicResult,
    /// The flat Earth result.
    pub planar: GeodesicResult,
    /// The absolute differences from the ellipsoidal distance.
    pub distance_diffs: Differences<Metres>,
    /// The absolute differences from the ellipsoidal bearing.
    pub bearing_diffs: Differences<Degrees>,
}

/// Calculate the absolute differences of the approximate results from the
/// ellipsoidal result.
fn calculate_differences(
    ellipsoidal: &GeodesicResult,
    spherical: &GeodesicResult,
    planar: &GeodesicResult,
) -> (Differences<Metres>, Differences<Degrees>) {
    let distance = |result: &GeodesicResult| {
        Metres(libm::fabs(ellipsoidal.distance.0 - result.distance.0))
    };
    let bearing =
        |result: &GeodesicResult| Degrees(libm::fabs(ellipsoidal.bearing.0 - result.bearing.0));
    (
        Differences {
            spherical: distance(spherical),
            planar: distance(planar),
        },
        Differences {
            spherical: bearing(spherical),
            planar: bearing(planar),
        },
    )
}

/// Compare the three models for a pair of positions.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `ellipsoid` - the `Ellipsoid`, its Semimajor axis is used as the radius
///   of the sphere and the plane.
///
/// # Examples
/// ```
/// use latlng::*;
///
/// let a = LatLong::new(Degrees(36.0), Degrees(150.0));
/// let b = LatLong::new(Degrees(44.0), Degrees(141.0));
/// let report = comparison::compare(&a, &b, &GRS80_ELLIPSOID);
///
/// assert!(report.distance_diffs.spherical.0 < 6_000.0);
/// println!("{report}");
/// ```
#[must_use]
pub fn compare(a: &LatLong, b: &LatLong, ellipsoid: &Ellipsoid) -> ComparisonReport {
    let ellipsoidal = vincenty::calculate_distance_and_bearing(a, b, ellipsoid);
    let spherical = spherical::calculate_distance_and_bearing(a, b, ellipsoid.a());
    let planar = planar::calculate_distance_and_bearing(a, b, ellipsoid.a());
    let (distance_diffs, bearing_diffs) =
        calculate_differences(&ellipsoidal, &spherical, &planar);

    ComparisonReport {
        a: LatLong::new(a.lat(), a.lon()),
        b: LatLong::new(b.lat(), b.lon()),
        ellipsoidal,
        spherical,
        planar,
        distance_diffs,
        bearing_diffs,
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "lat1: {} lng1: {} lat2: {} lng2: {}",
            self.a.lat().0,
            self.a.lon().0,
            self.b.lat().0,
            self.b.lon().0
        )?;
        writeln!(
            f,
            "[vincenty] distance: {} bearing: {}",
            self.ellipsoidal.distance.0, self.ellipsoidal.bearing.0
        )?;
        writeln!(
            f,
            "[spherical] distance: {} bearing: {}",
            self.spherical.distance.0, self.spherical.bearing.0
        )?;
        writeln!(
            f,
            "[spherical] distance diff: {} bearing diff: {}",
            self.distance_diffs.spherical.0, self.bearing_diffs.spherical.0
        )?;
        writeln!(
            f,
            "[planar] distance: {} bearing: {}",
            self.planar.distance.0, self.planar.bearing.0
        )?;
        write!(
            f,
            "[planar] distance diff: {} bearing diff: {}",
            self.distance_diffs.planar.0, self.bearing_diffs.planar.0
        )
    }
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
    fn test_calculate_differences() {
        let ellipsoidal = GeodesicResult::new(Metres(100.0), Degrees(10.0));
        let spherical = GeodesicResult::new(Metres(101.5), Degrees(9.5));
        let planar = GeodesicResult::new(Metres(98.0), Degrees(12.0));
        let (distances, bearings) = calculate_differences(&ellipsoidal, &spherical, &planar);

        assert_eq!(Metres(1.5), distances.spherical);
        assert_eq!(Metres(2.0), distances.planar);
        assert_eq!(Degrees(0.5), bearings.spherical);
        assert_eq!(Degrees(2.0), bearings.planar);
    }

    #[test]
    fn test_compare() {
        let a = lat_long(36.0, 150.0);
        let b = lat_long(44.0, 141.0);
        let report = compare(&a, &b, &GRS80_ELLIPSOID);

        assert_eq!(
            vincenty::calculate_distance_and_bearing(&a, &b, &GRS80_ELLIPSOID),
            report.ellipsoidal
        );
        assert_eq!(
            spherical::calculate_distance_and_bearing(&a, &b, GRS80_ELLIPSOID.a()),
            report.spherical
        );
        assert_eq!(
            planar::calculate_distance_and_bearing(&a, &b, GRS80_ELLIPSOID.a()),
            report.planar
        );

        assert!(is_within_tolerance(
            1_034.858_341_391,
            report.distance_diffs.spherical.0,
            1e-5
        ));
        assert!(is_within_tolerance(
            167_346.525_620_645,
            report.distance_diffs.planar.0,
            1e-5
        ));
        assert!(is_within_tolerance(
            0.111_270_042_434_2,
            report.bearing_diffs.spherical.0,
            1e-9
        ));
        assert!(is_within_tolerance(
            10.322_144_481_746_2,
            report.bearing_diffs.planar.0,
            1e-9
        ));
    }

    #[test]
    fn test_compare_identical() {
        let a = lat_long(35.41, 139.41);
        let report = compare(&a, &a, &GRS80_ELLIPSOID);

        assert_eq!(GeodesicResult::ZERO, report.ellipsoidal);
        assert_eq!(GeodesicResult::ZERO, report.spherical);
        assert_eq!(GeodesicResult::ZERO, report.planar);
        assert_eq!(Metres(0.0), report.distance_diffs.spherical);
        assert_eq!(Degrees(0.0), report.bearing_diffs.planar);
    }

    #[test]
    fn test_compare_display() {
        let a = lat_long(0.0, 0.0);
        let b = lat_long(1.0, 0.0);
        let report = compare(&a, &b, &GRS80_ELLIPSOID);
        let text = report.to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(6, lines.len());
        assert_eq!("lat1: 0 lng1: 0 lat2: 1 lng2: 0", lines[0]);
        assert!(lines[1].starts_with("[vincenty] distance: 110574."));
        assert!(lines[2].starts_with("[spherical] distance: 111319."));
        assert!(lines[3].starts_with("[spherical] distance diff: "));
        assert!(lines[4].starts_with("[planar] distance: 111319."));
        assert!(lines[5].ends_with("bearing diff: 0"));
    }
}
