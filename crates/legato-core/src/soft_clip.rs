//! Linear-center soft clipper with a hyperbolic tail.
//!
//! Unlike `tanh`-style saturation, this clipper is exactly linear for
//! `|x| <= threshold`. Beyond the threshold a hyperbola takes over that
//! approaches `±limit` asymptotically, so an unbounded input range is folded
//! smoothly into `[-limit, limit]`. The curve and its first derivative are
//! both continuous at `±threshold`.
//!
//! ```text
//! t = |threshold|, l = |limit|
//! a = -(l - t)^2,  b = l,  c = l - 2t
//!
//! f(x) =  a / ( x + c) + b    for x >  t
//!      = -a / (-x + c) - b    for x < -t
//!      =  x                   otherwise
//! ```
//!
//! At `x = t` the tail evaluates to `-(l - t)^2 / (l - t) + l = t` and its
//! slope `-a / (x + c)^2` is `1`, matching the linear segment.
//!
//! The shape is modeled on the soft tail of analog tape: a wide linear
//! region, then a long gentle compression.
//!
//! # Example
//!
//! ```rust
//! use legato_core::SoftClipper;
//!
//! let clip = SoftClipper::new(0.5, 1.0);
//! assert_eq!(clip.clip(0.25), 0.25);
//! assert!(clip.clip(100.0) < 1.0);
//! assert!(clip.clip(-100.0) > -1.0);
//! ```

use crate::filter::Filter;

/// Memoryless soft clipper.
///
/// Has no state: [`Filter::reset_to`] only reports the clipped steady-state
/// value.
///
/// A `limit` smaller than `threshold` produces a curve that is no longer
/// monotonic past the threshold; keep `limit >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftClipper {
    threshold: f32,
    limit: f32,
    a: f32,
    b: f32,
    c: f32,
}

impl SoftClipper {
    /// Create a soft clipper.
    ///
    /// Signs of `threshold` and `limit` are ignored.
    pub fn new(threshold: f32, limit: f32) -> Self {
        let t = threshold.abs();
        let l = limit.abs();
        let knee = l - t;
        Self {
            threshold: t,
            limit: l,
            a: -(knee * knee),
            b: l,
            c: l - 2.0 * t,
        }
    }

    /// Clip a single sample.
    #[inline]
    pub fn clip(&self, x: f32) -> f32 {
        if x > self.threshold {
            self.a / (x + self.c) + self.b
        } else if x < -self.threshold {
            -self.a / (-x + self.c) - self.b
        } else {
            x
        }
    }

    /// Start of the curved region.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Asymptote the output approaches.
    pub fn limit(&self) -> f32 {
        self.limit
    }
}

impl Default for SoftClipper {
    /// Linear up to 0.5, limited to ±1.
    fn default() -> Self {
        Self::new(0.5, 1.0)
    }
}

impl Filter for SoftClipper {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.clip(input)
    }

    fn reset_to(&mut self, value: f32) -> f32 {
        self.clip(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_region_is_identity() {
        let clip = SoftClipper::new(0.8, 1.0);
        for i in -80..=80 {
            let x = i as f32 / 100.0;
            assert_eq!(clip.clip(x), x);
        }
    }

    #[test]
    fn continuous_at_threshold() {
        let clip = SoftClipper::new(0.5, 1.0);
        let above = clip.clip(0.5 + 1e-4);
        let below = clip.clip(-0.5 - 1e-4);
        assert!((above - 0.5).abs() < 1e-3, "got {above}");
        assert!((below + 0.5).abs() < 1e-3, "got {below}");
    }

    #[test]
    fn derivative_matches_at_threshold() {
        let clip = SoftClipper::new(0.5, 1.0);
        let h = 1e-3;
        let slope_out = (clip.clip(0.5 + 2.0 * h) - clip.clip(0.5 + h)) / h;
        let slope_neg = (clip.clip(-0.5 - h) - clip.clip(-0.5 - 2.0 * h)) / h;
        assert!((slope_out - 1.0).abs() < 0.02, "slope {slope_out}");
        assert!((slope_neg - 1.0).abs() < 0.02, "slope {slope_neg}");
    }

    #[test]
    fn approaches_limit() {
        let clip = SoftClipper::new(0.5, 1.0);
        let big = clip.clip(1.0e6);
        assert!(big < 1.0 && big > 0.999, "got {big}");
        assert_eq!(clip.clip(-1.0e6), -big);
    }

    #[test]
    fn signs_are_ignored() {
        assert_eq!(SoftClipper::new(-0.5, -2.0), SoftClipper::new(0.5, 2.0));
        let clip = SoftClipper::new(-0.5, -2.0);
        assert_eq!(clip.threshold(), 0.5);
        assert_eq!(clip.limit(), 2.0);
    }

    #[test]
    fn block_processing_is_memoryless() {
        let mut clip = SoftClipper::default();
        let mut first = [3.0, 0.1, -3.0];
        let mut second = [0.1, -3.0, 3.0];
        clip.process_block_inplace(&mut first);
        clip.process_block_inplace(&mut second);
        assert_eq!(first[1], second[0]);
        assert_eq!(first[0], second[2]);
        assert_eq!(first[2], second[1]);
        assert_eq!(clip.reset_to(3.0), first[0]);
    }
}
