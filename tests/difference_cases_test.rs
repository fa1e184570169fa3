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

extern crate latlng;

use angle_sc::is_within_tolerance;
use latlng::{comparison, vincenty, Degrees, LatLong, GRS80_ELLIPSOID};

const FILENAME: &str = "data/difference_cases.csv";

/// lat1, lon1, lat2, lon2, distance, bearing
type DataRecord = (f64, f64, f64, f64, f64, f64);

#[test]
fn test_difference_cases() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    let mut count = 0;
    for result in rdr.deserialize::<DataRecord>() {
        let (lat1, lon1, lat2, lon2, distance, bearing) = result?;
        let a = LatLong::new(Degrees(lat1), Degrees(lon1));
        let b = LatLong::new(Degrees(lat2), Degrees(lon2));

        let solution = vincenty::try_calculate_distance_and_bearing(&a, &b, &GRS80_ELLIPSOID)?;
        assert!(
            is_within_tolerance(distance, solution.distance.0, 1e-5),
            "distance, line: {count} expected: {distance} actual: {}",
            solution.distance.0
        );
        assert!(
            is_within_tolerance(bearing, solution.bearing.0, 1e-7),
            "bearing, line: {count} expected: {bearing} actual: {}",
            solution.bearing.0
        );

        let report = comparison::compare(&a, &b, &GRS80_ELLIPSOID);
        assert_eq!(solution, report.ellipsoidal);
        // the sphere is within 0.5% of the ellipsoid
        assert!(report.distance_diffs.spherical.0 / distance < 0.005);
        println!("{report}");

        count += 1;
    }
    assert_eq!(7, count);

    Ok(())
}
