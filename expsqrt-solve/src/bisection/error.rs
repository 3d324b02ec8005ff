use thiserror::Error;

/// Failure modes of a bisection solve.
///
/// Every variant is a reportable diagnostic, never fatal; the caller decides
/// whether to prompt for new bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The interval is not ordered; no clamping is attempted.
    #[error("a must be < b")]
    UnorderedInterval,

    /// Clamping collapsed the interval.
    #[error("invalid interval after adjustment")]
    InvalidAfterClamp,

    /// The function is undefined at one or both clamped endpoints.
    #[error("function undefined at the boundaries")]
    UndefinedAtBoundary,

    /// Endpoint values share a sign, so no root is guaranteed inside.
    #[error("f(a) and f(b) have the same sign")]
    SameSign,

    /// The function came back undefined at a midpoint during iteration.
    #[error("function undefined at {x}")]
    UndefinedAt { x: f64 },
}
