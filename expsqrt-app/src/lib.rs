//! Presentation layer for the expsqrt solver.
//!
//! The original interface around this solver was interactive: two bound
//! fields, a solve action, and a reset. That behavior lives here as an
//! explicit [`state::AppState`] with pure update methods, so any front end
//! (the bundled CLI included) can own the state and re-render after each
//! event.

pub mod input;
pub mod state;
