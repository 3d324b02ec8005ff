use super::{Solution, Status};

/// Tracks the evaluated point with the smallest residual magnitude.
///
/// The `Option` represents the state before any midpoint evaluation, acting
/// as an infinite sentinel so the first midpoint is always recorded.
#[derive(Debug, Clone, Copy)]
pub(super) struct Best {
    point: Option<(f64, f64)>,
}

impl Best {
    /// Creates an empty tracker.
    pub(super) fn empty() -> Self {
        Self { point: None }
    }

    /// Records `(x, f_x)` if its residual magnitude improves on the best.
    pub(super) fn update(&mut self, x: f64, f_x: f64) {
        let best_magnitude = self.point.map_or(f64::INFINITY, |(_, f)| f.abs());
        if f_x.abs() < best_magnitude {
            self.point = Some((x, f_x));
        }
    }

    /// Finalizes the solve using the best point seen, if any.
    pub(super) fn finish(self, status: Status, iters: usize) -> Solution {
        let (root, residual) = match self.point {
            Some((x, f_x)) => (Some(x), Some(f_x)),
            None => (None, None),
        };
        Solution {
            status,
            root,
            residual,
            iters,
        }
    }
}
