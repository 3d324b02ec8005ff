use expsqrt_solve::bisection::{self, MIN_POSITIVE};

use crate::input;

/// Application state owned by the front end.
///
/// Every event is a pure update: it reads the current fields and writes the
/// new display state, with the solver call as the only computation. The
/// stable root is set by the first successful solve and survives later edits
/// and solves until an explicit [`AppState::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Left bound field text.
    pub a: String,
    /// Right bound field text.
    pub b: String,
    /// Status or error message from the last solve, empty before any.
    pub result: String,
    /// Root from the last solve, if it produced one.
    pub solution: Option<f64>,
    /// True when `result` is a failure diagnostic.
    pub error: bool,
    /// True when the last solve clamped the left bound up to the domain floor.
    pub adjusted: bool,
    /// First successful root, retained until reset.
    pub stable_root: Option<f64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            a: "0.1".to_string(),
            b: "2.0".to_string(),
            result: String::new(),
            solution: None,
            error: false,
            adjusted: false,
            stable_root: None,
        }
    }
}

impl AppState {
    /// Replaces the left bound text, clearing stale results.
    pub fn edit_a(&mut self, text: &str) {
        self.a = input::sanitize(text);
        self.solution = None;
        self.result.clear();
    }

    /// Replaces the right bound text, clearing stale results.
    pub fn edit_b(&mut self, text: &str) {
        self.b = input::sanitize(text);
        self.solution = None;
        self.result.clear();
    }

    /// Parses both bounds and runs one solve.
    ///
    /// Non-numeric input short-circuits with `invalid numbers` and never
    /// reaches the solver.
    pub fn solve_clicked(&mut self) {
        self.error = false;
        self.adjusted = false;

        let (Some(a), Some(b)) = (input::parse_bound(&self.a), input::parse_bound(&self.b))
        else {
            self.result = "invalid numbers".to_string();
            self.solution = None;
            self.error = true;
            return;
        };

        match bisection::solve(a, b) {
            Ok(solution) => {
                self.solution = solution.root;
                self.result = solution.message();
                match solution.root {
                    Some(root) => {
                        if self.stable_root.is_none() {
                            self.stable_root = Some(root);
                        }
                        if a < MIN_POSITIVE {
                            self.adjusted = true;
                        }
                    }
                    None => {
                        self.error = true;
                    }
                }
            }
            Err(err) => {
                self.solution = None;
                self.result = err.to_string();
                self.error = true;
            }
        }
    }

    /// Restores the default bounds and clears every result, stable root
    /// included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
