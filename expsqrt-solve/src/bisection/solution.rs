/// How the bisection loop finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A midpoint evaluated to exactly zero.
    Exact,
    /// The loop exited by interval width or the iteration cap and the best
    /// approximation seen was returned.
    Bisected,
}

/// The result of a successful bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Best estimate of the root.
    ///
    /// `None` only when the loop body never ran, which requires the clamped
    /// interval to already be narrower than the width threshold.
    pub root: Option<f64>,
    /// Function value at the reported root estimate.
    pub residual: Option<f64>,
    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Renders the human-readable status message.
    #[must_use]
    pub fn message(&self) -> String {
        match self.status {
            Status::Exact => format!("exact solution after {} iterations", self.iters),
            Status::Bisected => format!("solution found after {} iterations", self.iters),
        }
    }
}
