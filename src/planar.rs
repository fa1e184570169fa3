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

//! The planar module approximates distances and bearings by treating a
//! small region of the Earth's surface as a flat plane, with latitude and
//! longitude differences (in radians) as Cartesian coordinates.
//!
//! It is only valid when the positions are close together.
//! Longitude differences are not scaled by the cosine of the latitude, so
//! the error in East-West distances increases away from the Equator.
//! Positions either side of the ±180° meridian are not supported.

use crate::{is_same_position, Degrees, GeodesicResult, LatLong, Metres};

/// A quadrant of the compass rose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// Between North (inclusive) and East.
    NorthEast,
    /// Between East (inclusive) and South.
    SouthEast,
    /// Between South (inclusive) and West, math angle -180° inclusive.
    SouthWest,
    /// Between West and North, math angle 180° inclusive.
    NorthWest,
}

impl Quadrant {
    /// The quadrant of a mathematical angle: anticlockwise from East.
    /// * `angle` - the angle, `-180° <= angle <= 180°`.
    #[must_use]
    pub fn from_math_angle(angle: Degrees) -> Self {
        if 90.0 < angle.0 {
            Self::NorthWest
        } else if 0.0 < angle.0 {
            Self::NorthEast
        } else if -90.0 < angle.0 {
            Self::SouthEast
        } else {
            Self::SouthWest
        }
    }
}

/// Convert a mathematical angle (anticlockwise from East) into a compass
/// bearing (clockwise from North).
/// * `angle` - the angle, `-180° <= angle <= 180°`, e.g. from `atan2`.
///
/// returns the bearing, `0° <= bearing < 360°`. Both -180° and 180° are
/// due West: 270°.
///
/// # Examples
/// ```
/// use latlng::{planar::compass_bearing, Degrees};
///
/// assert_eq!(0.0, compass_bearing(Degrees(90.0)).0);
/// assert_eq!(90.0, compass_bearing(Degrees(0.0)).0);
/// assert_eq!(180.0, compass_bearing(Degrees(-90.0)).0);
/// assert_eq!(270.0, compass_bearing(Degrees(180.0)).0);
/// assert_eq!(315.0, compass_bearing(Degrees(135.0)).0);
/// ```
#[must_use]
pub fn compass_bearing(angle: Degrees) -> Degrees {
    match Quadrant::from_math_angle(angle) {
        Quadrant::NorthEast | Quadrant::SouthEast | Quadrant::SouthWest => Degrees(90.0 - angle.0),
        Quadrant::NorthWest => Degrees(450.0 - angle.0),
    }
}

/// Calculate the approximate distance and initial bearing between a pair
/// of nearby positions.
/// * `a`, `b` - the start and finish positions, which must be close together.
/// * `radius` - the radius of the Earth, e.g. its equatorial radius.
///
/// # Examples
/// ```
/// use latlng::*;
///
/// let a = LatLong::new(Degrees(35.0), Degrees(139.0));
/// let b = LatLong::new(Degrees(35.005), Degrees(139.0));
/// let result = planar::calculate_distance_and_bearing(&a, &b, GRS80_ELLIPSOID.a());
///
/// assert!((result.distance.0 - 556.597).abs() < 1e-3);
/// assert_eq!(0.0, result.bearing.0);
/// ```
#[must_use]
pub fn calculate_distance_and_bearing(a: &LatLong, b: &LatLong, radius: Metres) -> GeodesicResult {
    if is_same_position(a, b) {
        return GeodesicResult::ZERO;
    }

    let delta_lat = (b.lat().0 - a.lat().0).to_radians();
    let delta_long = (b.lon().0 - a.lon().0).to_radians();

    let distance = radius.0 * libm::sqrt(delta_long * delta_long + delta_lat * delta_lat);
    let angle = libm::atan2(radius.0 * delta_lat, radius.0 * delta_long).to_degrees();
    GeodesicResult::new(Metres(distance), compass_bearing(Degrees(angle)))
}
