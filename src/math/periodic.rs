/// Mathematical modulo of `value` by `period`, always in `[0, period)`.
///
/// Unlike `%`, the result never takes the sign of `value`, so negative
/// offsets and offsets spanning several periods land on the same phase.
/// A result that rounds up to `period` itself is folded back to zero.
///
/// `period` must be finite and positive; callers guard this.
#[must_use]
pub fn wrap(value: f64, period: f64) -> f64 {
    let r = value.rem_euclid(period);
    if r >= period {
        0.0
    } else {
        r
    }
}

/// Largest coordinate `<= bound` lying on the lattice `phase + k * period`.
///
/// Guarantees `result <= bound` and `bound - result < period` even when the
/// subtraction inside [`wrap`] loses precision.
#[must_use]
pub fn lattice_floor(bound: f64, phase: f64, period: f64) -> f64 {
    let mut start = bound - wrap(bound - phase, period);
    if start > bound {
        start -= period;
    }
    if bound - start >= period {
        start += period;
        if start > bound {
            // Cannot satisfy both bounds at this magnitude; stay on the safe side.
            start = bound;
        }
    }
    start
}
