//! Numerical core for solving eˣ = 1/√x by bisection.
//!
//! The target function is fixed: `f(x) = eˣ − 1/√x`, defined only for
//! `x > 0`. [`bisection::solve`] validates and clamps the search interval,
//! runs the bisection loop with a best-approximation fallback, and reports
//! every failure mode as a distinct [`bisection::Error`]. [`format`] renders
//! results for display.

pub mod bisection;
pub mod format;
pub mod function;
