mod best;
mod error;
mod solution;

pub use error::Error;
pub use solution::{Solution, Status};

use best::Best;

use crate::function;

/// Interval width below which the search stops.
pub const EPSILON: f64 = 1e-12;

/// Cap on bisection iterations.
pub const MAX_ITERATIONS: usize = 1000;

/// Floor the left bound is clamped up to, keeping it inside the domain.
pub const MIN_POSITIVE: f64 = 1e-10;

/// Ceiling the right bound is clamped down to.
pub const MAX_BOUND: f64 = 100.0;

/// Finds a root of `eˣ − 1/√x = 0` in `[a, b]` using the bisection method.
///
/// Out-of-range bounds are silently clamped into `[MIN_POSITIVE, MAX_BOUND]`
/// before the endpoint checks. When no midpoint evaluates to exactly zero,
/// the returned root is the evaluated point with the smallest residual
/// magnitude, which floating-point rounding can make a better answer than
/// the final midpoint.
///
/// # Errors
///
/// Returns an error if the interval is unordered, collapses under clamping,
/// has an undefined or same-sign endpoint, or the function comes back
/// undefined at a midpoint.
pub fn solve(a: f64, b: f64) -> Result<Solution, Error> {
    if a >= b {
        return Err(Error::UnorderedInterval);
    }

    let low = if a < MIN_POSITIVE { MIN_POSITIVE } else { a };
    let high = if b > MAX_BOUND { MAX_BOUND } else { b };

    if low >= high {
        return Err(Error::InvalidAfterClamp);
    }

    let f_low = function::eval(low);
    let f_high = function::eval(high);

    if f_low.is_nan() || f_high.is_nan() {
        return Err(Error::UndefinedAtBoundary);
    }
    if f_low * f_high > 0.0 {
        return Err(Error::SameSign);
    }

    iterate(low, high)
}

/// Runs the bisection loop over a validated, clamped interval.
fn iterate(mut low: f64, mut high: f64) -> Result<Solution, Error> {
    let mut best = Best::empty();
    let mut iters = 0;

    while high - low > EPSILON && iters < MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let f_mid = function::eval(mid);

        if f_mid.is_nan() {
            return Err(Error::UndefinedAt { x: mid });
        }

        best.update(mid, f_mid);

        if f_mid == 0.0 {
            return Ok(Solution {
                status: Status::Exact,
                root: Some(mid),
                residual: Some(f_mid),
                iters,
            });
        }

        // The sign at `low` is recomputed each pass instead of cached; one
        // redundant evaluation per step for one less piece of loop state.
        if function::eval(low) * f_mid < 0.0 {
            high = mid;
        } else {
            low = mid;
        }

        iters += 1;
    }

    Ok(best.finish(Status::Bisected, iters))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_the_root() {
        let solution = solve(0.1, 2.0).expect("bracketing interval");

        let root = solution.root.expect("root found");
        assert!((0.1..=2.0).contains(&root));
        assert!(function::eval(root).abs() < 1e-6);
        // eˣ crosses 1/√x near x ≈ 0.43.
        assert_relative_eq!(root, 0.426_302_75, epsilon = 1e-6);
    }

    #[test]
    fn best_residual_beats_both_endpoints() {
        let (a, b) = (0.2, 1.5);
        let solution = solve(a, b).expect("bracketing interval");

        let residual = solution.residual.expect("root found");
        assert!(residual.abs() <= function::eval(a).abs());
        assert!(residual.abs() <= function::eval(b).abs());
    }

    #[test]
    fn reports_iteration_count() {
        let solution = solve(0.1, 2.0).expect("bracketing interval");

        // Width 1.9 halves below 1e-12 in ~41 steps, well under the cap.
        assert_eq!(solution.status, Status::Bisected);
        assert!(solution.iters > 0 && solution.iters < MAX_ITERATIONS);
        assert_eq!(
            solution.message(),
            format!("solution found after {} iterations", solution.iters)
        );
    }

    #[test]
    fn rejects_unordered_interval() {
        let err = solve(2.0, 0.1).expect_err("unordered");
        assert_eq!(err, Error::UnorderedInterval);
        assert_eq!(err.to_string(), "a must be < b");
    }

    #[test]
    fn rejects_interval_collapsed_by_clamping() {
        // b clamps down to 100, meeting a exactly.
        let err = solve(100.0, 200.0).expect_err("collapsed");
        assert_eq!(err, Error::InvalidAfterClamp);
        assert_eq!(err.to_string(), "invalid interval after adjustment");
    }

    #[test]
    fn rejects_same_sign_endpoints() {
        // f is positive everywhere past its single root.
        let err = solve(1.0, 2.0).expect_err("same sign");
        assert_eq!(err, Error::SameSign);
        assert_eq!(err.to_string(), "f(a) and f(b) have the same sign");
    }

    #[test]
    fn clamps_left_bound_to_floor() {
        // 1e-12 clamps up to 1e-10, so both calls search the same interval
        // and must visit the same midpoints.
        let clamped = solve(1e-12, 1.0).expect("bracketing interval");
        let explicit = solve(MIN_POSITIVE, 1.0).expect("bracketing interval");

        assert_eq!(clamped, explicit);
    }

    #[test]
    fn clamps_right_bound_to_ceiling() {
        // After the clamp both endpoints sit past the root, so the solver
        // sees [50, 100] and reports the sign check on it.
        let err = solve(50.0, 200.0).expect_err("same sign after clamp");
        assert_eq!(err, Error::SameSign);
    }

    #[test]
    fn solve_is_deterministic() {
        assert_eq!(solve(0.1, 2.0), solve(0.1, 2.0));
        assert_eq!(solve(2.0, 0.1), solve(2.0, 0.1));
    }
}
