//! Legato Core - per-sample filters for MIDI control smoothing
//!
//! This crate provides the sample-level building blocks used by the legato
//! control engine. Every stage is allocation-free on its processing path and
//! suitable for an audio or control-rate callback.
//!
//! # Core Abstractions
//!
//! ## Filter System
//!
//! - [`Filter`] - Object-safe trait for per-sample stages, with steady-state priming
//! - [`FilterExt`] - Extension trait for static chaining
//! - [`Chain`] - Zero-cost two-stage combinator
//! - [`FilterChain`] - Runtime-assembled sequence of boxed stages
//!
//! ## Stages
//!
//! - [`SlewLimiter`] - Velocity-limited follower with separate rise/fall bounds
//! - [`SoftClipper`] - Linear-center clipper with a hyperbolic soft tail
//! - [`OnePole`] - Single-pole low-pass (no overshoot, no ringing)
//!
//! ## Utilities
//!
//! - Range mapping: [`scale`], [`lerp`], [`clamp_to`], [`ordered`]
//! - [`flush_denormal`] for feedback state
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! legato-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use legato_core::{Filter, FilterExt, OnePole, SlewLimiter};
//!
//! // A 60 Hz control smoother: at most one full unit per second, then 15 Hz low-pass.
//! let follower = SlewLimiter::new(60.0, Some(1.0), Some(1.0), false).unwrap();
//! let lowpass = OnePole::new(60.0, 15.0).unwrap();
//! let mut smoother = follower.chain(lowpass);
//!
//! smoother.reset_to(0.0);
//! let first = smoother.process(1.0);
//! assert!(first > 0.0 && first <= 1.0 / 60.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod chain;
pub mod error;
pub mod filter;
pub mod math;
pub mod one_pole;
pub mod slew;
pub mod soft_clip;

// Re-export main types at crate root
pub use chain::FilterChain;
pub use error::ConfigError;
pub use filter::{Chain, Filter, FilterExt};
pub use math::{clamp_to, flush_denormal, lerp, ordered, scale};
pub use one_pole::OnePole;
pub use slew::SlewLimiter;
pub use soft_clip::SoftClipper;
