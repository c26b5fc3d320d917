//! Range mapping and small numeric helpers.
//!
//! MIDI controls arrive in integer domains (`0..=127`, `0..=16383`) and have
//! to be mapped onto whatever range a parameter exposes. Ranges here are plain
//! `(start, end)` pairs that may run in either direction: a range of
//! `(1.0, 0.0)` maps a rising controller onto a falling value.

/// Linear interpolation between two values.
///
/// Written as a weighted sum so that `t == 0.0` yields exactly `a` and
/// `t == 1.0` yields exactly `b`.
///
/// # Example
/// ```rust
/// use legato_core::lerp;
///
/// assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
/// assert_eq!(lerp(-1.0, 1.0, 0.5), 0.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Map `x` linearly from the range `from` onto the range `to`.
///
/// Computes `to.0 + (x - from.0) * (to.1 - to.0) / (from.1 - from.0)`.
/// Either range may be given in descending order. Values outside `from`
/// extrapolate; callers clamp when they need to. The endpoints of `from` map
/// exactly onto the endpoints of `to`.
///
/// A degenerate source range (`from.0 == from.1`) maps everything onto
/// `to.0`.
///
/// # Example
/// ```rust
/// use legato_core::scale;
///
/// assert_eq!(scale(127.0, (0.0, 127.0), (-1.0, 1.0)), 1.0);
/// assert_eq!(scale(0.0, (0.0, 127.0), (20.0, 20000.0)), 20.0);
/// assert_eq!(scale(0.25, (0.0, 1.0), (1.0, 0.0)), 0.75);
/// ```
#[inline]
pub fn scale(x: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let width = from.1 - from.0;
    if width == 0.0 {
        return to.0;
    }
    lerp(to.0, to.1, (x - from.0) / width)
}

/// Order a range so that the first element is the minimum.
#[inline]
pub fn ordered(range: (f32, f32)) -> (f32, f32) {
    if range.0 <= range.1 {
        range
    } else {
        (range.1, range.0)
    }
}

/// Clamp a value into a range given in either order.
#[inline]
pub fn clamp_to(x: f32, range: (f32, f32)) -> f32 {
    let (min, max) = ordered(range);
    x.clamp(min, max)
}

/// Flush denormal values to zero.
///
/// Replaces values below 1e-20 with zero so that decaying filter state never
/// enters the IEEE 754 subnormal range, which is very slow on most CPUs.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}
