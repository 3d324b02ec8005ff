use clap::Parser;
use colored::Colorize;

use expsqrt_app::state::AppState;
use expsqrt_solve::{bisection::MIN_POSITIVE, format, function};

/// Solves eˣ = 1/√x on [a, b] using the bisection method.
///
/// The function is defined only for x > 0; bounds outside
/// [1e-10, 100] are clamped into range before solving.
#[derive(Parser)]
#[command(name = "expsqrt", version)]
struct Args {
    /// Left interval bound (both `.` and `,` decimals are accepted).
    a: String,
    /// Right interval bound, must exceed the left bound.
    b: String,
}

fn main() {
    let args = Args::parse();

    let mut state = AppState::default();
    state.edit_a(&args.a);
    state.edit_b(&args.b);
    state.solve_clicked();

    if state.adjusted {
        println!(
            "{}",
            format!("left bound was adjusted to {MIN_POSITIVE:e}").yellow()
        );
    }

    if let Some(root) = state.stable_root {
        println!("root: {}", format::fixed(root));
        println!(
            "f(root): {} ≈ 0",
            format::scientific(function::eval(root))
        );
    }

    if state.error {
        println!("{}", state.result.red());
    } else {
        println!("{}", state.result.green());
    }
}
