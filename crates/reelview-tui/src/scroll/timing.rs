use std::time::{Duration, Instant};

/// Fraction of `duration` elapsed since `start`, in [0, 1]
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (start.elapsed().as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Whether `value` sits on a multiple of `step` (within half a cell)
#[inline]
pub fn is_aligned(value: f64, step: f64) -> bool {
    if step <= 0.0 {
        return true;
    }
    let remainder = value.rem_euclid(step);
    remainder < 0.5 || step - remainder < 0.5
}
