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

//! The vincenty module solves the inverse geodesic problem on the surface of
//! an ellipsoid using Vincenty's iterative method.
//!
//! The positions are projected onto an auxiliary sphere using their reduced
//! latitudes. The longitude difference on the auxiliary sphere, `λ`, is then
//! found by fixed-point iteration, starting from the geodetic longitude
//! difference, `L`.
//!
//! The iteration converges quickly for most pairs of positions but may
//! converge slowly or not at all for nearly antipodal positions.
//! The `solve` function returns whether the iteration converged, so that the
//! caller can decide what to do: `calculate_distance_and_bearing` accepts the
//! last value, `try_calculate_distance_and_bearing` reports an `Error`.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

use crate::ellipsoid::coefficients::{
    calculate_sq_u, evaluate_a, evaluate_b, evaluate_c, evaluate_delta_sigma, evaluate_lambda,
};
use crate::{
    is_same_position, normalise_bearing, Degrees, Ellipsoid, Error, GeodesicResult, LatLong,
    Metres, Radians,
};

/// The maximum number of iterations used to solve for `λ`.
pub const MAX_ITERATIONS: u32 = 2000;

/// Iteration stops when the change in `λ` is less than this, approximately
/// 0.006mm on the Earth's surface.
pub const LOSS_THRESHOLD: Radians = Radians(1e-12);

/// The limits of the iteration for `λ`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationLimits {
    /// The maximum number of iterations, at least one iteration is performed.
    pub max_iterations: u32,
    /// The change in `λ` below which the iteration has converged.
    pub loss: Radians,
}

impl Default for IterationLimits {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            loss: LOSS_THRESHOLD,
        }
    }
}

/// The solution of an inverse geodesic problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
    /// The distance and initial bearing.
    pub result: GeodesicResult,
    /// The number of iterations performed.
    pub iterations: u32,
    /// Whether the change in `λ` fell below the loss threshold.
    pub converged: bool,
    /// The absolute change in `λ` on the final iteration.
    pub delta_lambda: Radians,
}

impl InverseSolution {
    /// The solution for positions which coincide on the auxiliary sphere.
    const fn coincident(iterations: u32) -> Self {
        Self {
            result: GeodesicResult::ZERO,
            iterations,
            converged: true,
            delta_lambda: Radians(0.0),
        }
    }
}

/// The state of the iteration for `λ`, it only exists during a `solve`.
#[derive(Debug)]
struct ConvergenceState {
    lambda: f64,
    iteration: u32,
    converged: bool,
}

/// The sines and cosines of the reduced latitudes of the start and finish
/// positions.
#[derive(Debug)]
struct ReducedLatitudes {
    sin_u1: f64,
    cos_u1: f64,
    sin_u2: f64,
    cos_u2: f64,
}

/// The great circle arc between the positions on the auxiliary sphere for a
/// value of `λ`.
#[derive(Debug)]
struct AuxiliaryArc {
    sin_sigma: f64,
    cos_sigma: f64,
    sigma: f64,
    sin_alpha: f64,
    sq_cos_alpha: f64,
    cos_2sigma_m: f64,
}

/// Calculate the cosine of twice the arc length from the Equator to the
/// midpoint of the arc.
/// * `cos_sigma` - the cosine of the arc length.
/// * `sin_u1`, `sin_u2` - the sines of the reduced latitudes.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the Equator.
///
/// returns zero for an equatorial geodesic, where `sq_cos_alpha` is zero.
#[must_use]
fn calculate_cos_2sigma_m(cos_sigma: f64, sin_u1: f64, sin_u2: f64, sq_cos_alpha: f64) -> f64 {
    let is_equatorial = sq_cos_alpha == 0.0;
    if is_equatorial {
        0.0
    } else {
        cos_sigma - 2.0 * sin_u1 * sin_u2 / sq_cos_alpha
    }
}

impl ReducedLatitudes {
    fn new(a: &LatLong, b: &LatLong, ellipsoid: &Ellipsoid) -> Self {
        let u1 = ellipsoid.calculate_reduced_latitude(a.lat()).0;
        let u2 = ellipsoid.calculate_reduced_latitude(b.lat()).0;
        Self {
            sin_u1: libm::sin(u1),
            cos_u1: libm::cos(u1),
            sin_u2: libm::sin(u2),
            cos_u2: libm::cos(u2),
        }
    }

    /// The North and East components of the arc at the start position.
    fn start_components(&self, sin_lambda: f64, cos_lambda: f64) -> (f64, f64) {
        (
            self.cos_u1 * self.sin_u2 - self.sin_u1 * self.cos_u2 * cos_lambda,
            self.cos_u2 * sin_lambda,
        )
    }

    /// Calculate the arc on the auxiliary sphere.
    /// * `lambda` - the longitude difference on the auxiliary sphere.
    ///
    /// returns None if the positions coincide on the auxiliary sphere.
    fn auxiliary_arc(&self, lambda: f64) -> Option<AuxiliaryArc> {
        let sin_lambda = libm::sin(lambda);
        let cos_lambda = libm::cos(lambda);
        let (north, east) = self.start_components(sin_lambda, cos_lambda);

        let sin_sigma = libm::sqrt(east * east + north * north);
        if sin_sigma == 0.0 {
            return None;
        }

        let cos_sigma = self.sin_u1 * self.sin_u2 + self.cos_u1 * self.cos_u2 * cos_lambda;
        let sigma = libm::atan2(sin_sigma, cos_sigma);
        let sin_alpha = self.cos_u1 * self.cos_u2 * sin_lambda / sin_sigma;
        let sq_cos_alpha = 1.0 - sin_alpha * sin_alpha;
        let cos_2sigma_m = calculate_cos_2sigma_m(cos_sigma, self.sin_u1, self.sin_u2, sq_cos_alpha);

        Some(AuxiliaryArc {
            sin_sigma,
            cos_sigma,
            sigma,
            sin_alpha,
            sq_cos_alpha,
            cos_2sigma_m,
        })
    }

    /// Calculate the initial bearing at the start position.
    /// * `lambda` - the longitude difference on the auxiliary sphere.
    fn initial_bearing(&self, lambda: f64) -> Degrees {
        let (north, east) = self.start_components(libm::sin(lambda), libm::cos(lambda));
        normalise_bearing(libm::atan2(east, north).to_degrees())
    }
}

impl AuxiliaryArc {
    /// Convert the arc length on the auxiliary sphere to a geodesic length
    /// on the ellipsoid.
    fn length(&self, ellipsoid: &Ellipsoid) -> Metres {
        let sq_u = calculate_sq_u(self.sq_cos_alpha, ellipsoid.ep_2());
        let a = evaluate_a(sq_u);
        let b = evaluate_b(sq_u);
        let delta_sigma =
            evaluate_delta_sigma(b, self.sin_sigma, self.cos_sigma, self.cos_2sigma_m);
        Metres(ellipsoid.b().0 * a * (self.sigma - delta_sigma))
    }
}

/// Solve the inverse geodesic problem between a pair of positions.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `limits` - the limits of the iteration.
///
/// returns the distance and initial bearing together with whether the
/// iteration converged. If it did not converge, the result is calculated
/// from the last value of `λ`.
#[must_use]
pub fn solve(
    a: &LatLong,
    b: &LatLong,
    ellipsoid: &Ellipsoid,
    limits: IterationLimits,
) -> InverseSolution {
    if is_same_position(a, b) {
        return InverseSolution::coincident(0);
    }

    let lats = ReducedLatitudes::new(a, b, ellipsoid);
    let delta_long = (b.lon().0 - a.lon().0).to_radians();
    let f = ellipsoid.f();

    let mut state = ConvergenceState {
        lambda: delta_long,
        iteration: 0,
        converged: false,
    };
    let Some(mut arc) = lats.auxiliary_arc(state.lambda) else {
        return InverseSolution::coincident(0);
    };

    let mut delta_lambda;
    loop {
        let c = evaluate_c(f, arc.sq_cos_alpha);
        let lambda_prev = state.lambda;
        state.lambda = evaluate_lambda(
            delta_long,
            f,
            c,
            arc.sin_alpha,
            arc.sigma,
            arc.sin_sigma,
            arc.cos_sigma,
            arc.cos_2sigma_m,
        );
        state.iteration += 1;

        delta_lambda = libm::fabs(state.lambda - lambda_prev);
        if delta_lambda < limits.loss.0 {
            state.converged = true;
            break;
        }
        if limits.max_iterations <= state.iteration {
            break;
        }

        arc = match lats.auxiliary_arc(state.lambda) {
            Some(next) => next,
            None => return InverseSolution::coincident(state.iteration),
        };
    }

    tracing::trace!(
        iterations = state.iteration,
        converged = state.converged,
        "vincenty inverse"
    );

    InverseSolution {
        result: GeodesicResult::new(arc.length(ellipsoid), lats.initial_bearing(state.lambda)),
        iterations: state.iteration,
        converged: state.converged,
        delta_lambda: Radians(delta_lambda),
    }
}

/// Calculate the geodesic distance and initial bearing between a pair of
/// positions on the ellipsoid.
///
/// If the iteration does not converge, the result from the last value of `λ`
/// is returned.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// # Examples
/// ```
/// use latlng::*;
///
/// let a = LatLong::new(Degrees(36.0), Degrees(150.0));
/// let b = LatLong::new(Degrees(44.0), Degrees(141.0));
/// let result = vincenty::calculate_distance_and_bearing(&a, &b, &GRS80_ELLIPSOID);
///
/// assert!((result.distance.0 - 1_173_117.651).abs() < 1e-3);
/// assert!((result.bearing.0 - 321.955_684).abs() < 1e-6);
/// ```
#[must_use]
pub fn calculate_distance_and_bearing(
    a: &LatLong,
    b: &LatLong,
    ellipsoid: &Ellipsoid,
) -> GeodesicResult {
    let solution = solve(a, b, ellipsoid, IterationLimits::default());
    if !solution.converged {
        tracing::warn!(
            iterations = solution.iterations,
            delta_lambda = solution.delta_lambda.0,
            "vincenty inverse did not converge, using last lambda"
        );
    }
    solution.result
}

/// Calculate the geodesic distance and initial bearing between a pair of
/// positions on the ellipsoid.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// # Errors
///
/// Returns `Error::NonConvergence` if the iteration did not converge within
/// `MAX_ITERATIONS`.
pub fn try_calculate_distance_and_bearing(
    a: &LatLong,
    b: &LatLong,
    ellipsoid: &Ellipsoid,
) -> Result<GeodesicResult, Error> {
    let solution = solve(a, b, ellipsoid, IterationLimits::default());
    if solution.converged {
        Ok(solution.result)
    } else {
        Err(Error::NonConvergence {
            iterations: solution.iterations,
            delta_lambda: solution.delta_lambda.0,
        })
    }
}
