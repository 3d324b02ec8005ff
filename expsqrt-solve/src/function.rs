/// Evaluates the target function `f(x) = eˣ − 1/√x`.
///
/// The function is defined only for `x > 0`. Out-of-domain inputs return
/// `f64::NAN` rather than an error; callers must check for NaN explicitly
/// before using the value.
#[must_use]
pub fn eval(x: f64) -> f64 {
    if x <= 0.0 {
        return f64::NAN;
    }
    x.exp() - 1.0 / x.sqrt()
}
