//! Runtime-assembled sequence of filter stages.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::filter::Filter;

/// An ordered list of boxed [`Filter`] stages.
///
/// Processing runs every stage over the whole buffer in insertion order.
/// Priming with [`reset_to`](Filter::reset_to) walks the stages in the same
/// order, feeding each stage the steady-state output of the one before it.
///
/// Use [`FilterExt::chain`](crate::FilterExt::chain) instead when the stage
/// types are known at compile time.
///
/// # Example
///
/// ```rust
/// use legato_core::{Filter, FilterChain, SlewLimiter, SoftClipper};
///
/// let mut chain = FilterChain::new()
///     .with(SlewLimiter::new(1.0, Some(0.5), Some(0.5), false).unwrap())
///     .with(SoftClipper::new(0.5, 1.0));
///
/// let mut block = [2.0, 2.0];
/// chain.process_block_inplace(&mut block);
/// assert_eq!(block[0], 0.5);
/// assert!(block[1] > 0.5 && block[1] < 1.0);
/// ```
#[derive(Default)]
pub struct FilterChain {
    stages: Vec<Box<dyn Filter + Send>>,
}

impl FilterChain {
    /// Create an empty chain. An empty chain passes samples through.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage, builder style.
    pub fn with<F: Filter + Send + 'static>(mut self, stage: F) -> Self {
        self.push(stage);
        self
    }

    /// Append a stage.
    pub fn push<F: Filter + Send + 'static>(&mut self, stage: F) {
        self.stages.push(Box::new(stage));
    }

    /// Append an already boxed stage.
    pub fn push_boxed(&mut self, stage: Box<dyn Filter + Send>) {
        self.stages.push(stage);
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True when the chain has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Filter for FilterChain {
    fn process(&mut self, input: f32) -> f32 {
        self.stages
            .iter_mut()
            .fold(input, |sample, stage| stage.process(sample))
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for stage in &mut self.stages {
            stage.process_block_inplace(buffer);
        }
    }

    fn reset_to(&mut self, value: f32) -> f32 {
        self.stages
            .iter_mut()
            .fold(value, |steady, stage| stage.reset_to(steady))
    }
}

impl core::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FilterChain")
            .field("stages", &self.stages.len())
            .finish()
    }
}
