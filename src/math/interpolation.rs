//! Scalar interpolation helpers shared by noise, palettes and split ratios
//!
//! All functions are total: parameters outside `[0, 1]` are clamped where a
//! clamped result is the only meaningful one.

use num_traits::Float;

/// Linear interpolation between `a` and `b`
///
/// `t` is not clamped, so values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    (b - a).mul_add(t, a)
}

/// Position of `value` between `a` and `b`, clamped to `[0, 1]`
///
/// Returns zero for a degenerate range.
#[inline]
pub fn inverse_lerp<T: Float>(a: T, b: T, value: T) -> T {
    let span = b - a;
    if span.abs() <= T::epsilon() {
        return T::zero();
    }
    ((value - a) / span).max(T::zero()).min(T::one())
}

/// Hermite smoothstep on a clamped parameter
#[inline]
pub fn smoothstep<T: Float>(t: T) -> T {
    let t = t.max(T::zero()).min(T::one());
    let two = T::one() + T::one();
    let three = two + T::one();
    t * t * (three - two * t)
}

/// Interpolate a single 8-bit channel
#[inline]
pub fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    lerp(f64::from(a), f64::from(b), t.clamp(0.0, 1.0))
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Interpolate two RGBA colors channel by channel
pub fn lerp_rgba(a: [u8; 4], b: [u8; 4], t: f64) -> [u8; 4] {
    let [ar, ag, ab, aa] = a;
    let [br, bg, bb, ba] = b;
    [
        lerp_channel(ar, br, t),
        lerp_channel(ag, bg, t),
        lerp_channel(ab, bb, t),
        lerp_channel(aa, ba, t),
    ]
}

/// Locate `t` within an ordered sequence of `len` evenly spaced stops
///
/// Returns the lower stop index and the fraction towards the next stop. The
/// index is always at most `len - 2` so the next stop exists.
pub fn segment(t: f64, len: usize) -> (usize, f64) {
    if len < 2 {
        return (0, 0.0);
    }
    let scaled = t.clamp(0.0, 1.0) * (len - 1) as f64;
    let index = (scaled.floor() as usize).min(len - 2);
    (index, scaled - index as f64)
}
