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

//! latlng
//!
//! A library for calculating the distance and initial bearing between a pair
//! of positions given by latitude and longitude in degrees.
//!
//! It provides three models of the Earth, in decreasing order of accuracy
//! and cost:
//!
//! - [`vincenty`]: the inverse geodesic problem on an ellipsoid of revolution,
//!   solved with [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty%27s_formulae);
//! - [`spherical`]: the
//!   [spherical law of cosines](https://en.wikipedia.org/wiki/Spherical_law_of_cosines),
//!   treating the Earth as a sphere;
//! - [`planar`]: a flat Earth approximation, only valid for short distances.
//!
//! The [`comparison`] module runs all three on the same pair of positions and
//! reports their differences, using the ellipsoidal result as ground truth.
//!
//! ## Design
//!
//! Bearings are measured clockwise from true North and are always in the
//! range `0° <= bearing < 360°`.
//!
//! The `Ellipsoid` struct holds the parameters of an ellipsoid of revolution.
//! The statics `GRS80_ELLIPSOID` and `WGS84_ELLIPSOID` hold the GRS 80 and
//! WGS 84 `Ellipsoid`s, which are passed by reference to the solvers.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod comparison;
pub mod ellipsoid;
pub mod error;
pub mod planar;
pub mod spherical;
pub mod vincenty;

pub use angle_sc::{Degrees, Radians};
pub use error::Error;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use lazy_static::lazy_static;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub fn new(a: Metres, f: f64) -> Self {
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            one_minus_f: 1.0 - f,
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
        }
    }

    /// Construct an `Ellipsoid` with the GRS 80 parameters.
    #[must_use]
    pub fn grs80() -> Self {
        Self::new(ellipsoid::grs80::A, ellipsoid::grs80::F)
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// Convert a geodetic Latitude to a reduced Latitude on the
    /// auxiliary sphere.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn calculate_reduced_latitude(&self, lat: Degrees) -> Radians {
        ellipsoid::calculate_reduced_latitude(lat, self.one_minus_f)
    }
}

lazy_static! {
    /// A static instance of the GRS 80 `Ellipsoid`.
    pub static ref GRS80_ELLIPSOID: Ellipsoid = Ellipsoid::grs80();

    /// A static instance of the WGS-84 `Ellipsoid`.
    pub static ref WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();
}

/// The distance and initial bearing from one position to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicResult {
    /// The distance between the positions, never negative.
    pub distance: Metres,
    /// The bearing at the start position, clockwise from North:
    /// `0° <= bearing < 360°`.
    pub bearing: Degrees,
}

impl GeodesicResult {
    /// The result between coincident positions.
    pub const ZERO: Self = Self {
        distance: Metres(0.0),
        bearing: Degrees(0.0),
    };

    /// Constructor.
    /// * `distance` - the distance between the positions.
    /// * `bearing` - the initial bearing, see `normalise_bearing`.
    #[must_use]
    pub const fn new(distance: Metres, bearing: Degrees) -> Self {
        Self { distance, bearing }
    }
}

/// Normalise a bearing in degrees in the range `-360° < degrees < 360°` into
/// the range `0° <= bearing < 360°`.
/// * `degrees` - the bearing, e.g. from `atan2`.
///
/// # Examples
/// ```
/// use latlng::normalise_bearing;
///
/// assert_eq!(270.0, normalise_bearing(-90.0).0);
/// assert_eq!(90.0, normalise_bearing(90.0).0);
/// assert_eq!(0.0, normalise_bearing(-1.0e-20).0);
/// ```
#[must_use]
pub fn normalise_bearing(degrees: f64) -> Degrees {
    let bearing = if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    };
    // a tiny negative value rounds to exactly 360
    Degrees(if bearing < 360.0 { bearing } else { 0.0 })
}

/// Whether a pair of positions have exactly the same coordinates.
#[allow(clippy::float_cmp)]
#[must_use]
pub(crate) fn is_same_position(a: &LatLong, b: &LatLong) -> bool {
    a.lat().0 == b.lat().0 && a.lon().0 == b.lon().0
}
