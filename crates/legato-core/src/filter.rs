//! The per-sample [`Filter`] trait and static filter chaining.
//!
//! Every stage in this crate (slew limiter, soft clipper, one-pole low-pass)
//! implements [`Filter`]. Stages can be combined two ways:
//!
//! - [`FilterExt::chain`] builds a [`Chain`] with static dispatch. Use this
//!   when the topology is fixed at compile time.
//! - [`FilterChain`](crate::FilterChain) holds boxed stages and can be
//!   assembled at runtime.
//!
//! ## Priming
//!
//! Besides processing, a stage must know how to jump straight to the steady
//! state it would reach if fed a constant input forever. That is what
//! [`Filter::reset_to`] does, and it is how a control parameter skips its
//! smoothing when it is reset.

/// A per-sample filter stage.
///
/// Object-safe, so stages can be stored as `Box<dyn Filter>`. Processing
/// methods never allocate.
///
/// # Example
///
/// ```rust
/// use legato_core::Filter;
///
/// struct Gain(f32);
///
/// impl Filter for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.0
///     }
///
///     fn reset_to(&mut self, value: f32) -> f32 {
///         value * self.0
///     }
/// }
///
/// let mut gain = Gain(0.5);
/// let mut block = [1.0, 2.0];
/// gain.process_block_inplace(&mut block);
/// assert_eq!(block, [0.5, 1.0]);
/// ```
pub trait Filter {
    /// Process a single sample, advancing internal state by one step.
    fn process(&mut self, input: f32) -> f32;

    /// Process a buffer in place.
    ///
    /// Default implementation calls [`process`](Self::process) for each
    /// sample in order.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Process `input` into `output`.
    ///
    /// # Panics
    /// Default implementation debug-asserts that both buffers have the same
    /// length.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Prime the stage to its steady state for a constant input `value`.
    ///
    /// Returns the output the stage produces in that steady state, which is
    /// the input the next stage in a chain should be primed with.
    fn reset_to(&mut self, value: f32) -> f32;

    /// Prime the stage for a constant input of zero.
    fn reset(&mut self) {
        self.reset_to(0.0);
    }
}

impl<F: Filter + ?Sized> Filter for &mut F {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        (**self).process(input)
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        (**self).process_block_inplace(buffer);
    }

    fn reset_to(&mut self, value: f32) -> f32 {
        (**self).reset_to(value)
    }
}

/// Extension trait for chaining filters with static dispatch.
pub trait FilterExt: Filter + Sized {
    /// Chain this filter with another, creating a composite filter.
    ///
    /// The output of `self` feeds into the input of `next`.
    ///
    /// # Example
    /// ```rust
    /// use legato_core::{FilterExt, OnePole, SlewLimiter};
    ///
    /// let follower = SlewLimiter::new(60.0, Some(30.0), Some(30.0), false).unwrap();
    /// let lowpass = OnePole::new(60.0, 15.0).unwrap();
    /// let mut smoother = follower.chain(lowpass);
    /// ```
    fn chain<F: Filter>(self, next: F) -> Chain<Self, F> {
        Chain {
            first: self,
            second: next,
        }
    }
}

impl<T: Filter> FilterExt for T {}

/// Two filters in series.
///
/// Created by [`FilterExt::chain`]. The first filter's output feeds into the
/// second filter's input.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: Filter, B: Filter> Filter for Chain<A, B> {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let mid = self.first.process(input);
        self.second.process(mid)
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        self.first.process_block_inplace(buffer);
        self.second.process_block_inplace(buffer);
    }

    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        self.first.process_block(input, output);
        self.second.process_block_inplace(output);
    }

    fn reset_to(&mut self, value: f32) -> f32 {
        let mid = self.first.reset_to(value);
        self.second.reset_to(mid)
    }
}

impl<A, B> Chain<A, B> {
    /// Get a reference to the first filter in the chain.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Get a mutable reference to the first filter in the chain.
    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    /// Get a reference to the second filter in the chain.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Get a mutable reference to the second filter in the chain.
    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }
}
