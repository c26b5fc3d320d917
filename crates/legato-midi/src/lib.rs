//! Legato MIDI - MIDI events and smoothed MIDI-controlled parameters
//!
//! This crate turns stepped MIDI controller input into continuous control
//! signals. It builds on the filter stages in `legato-core`.
//!
//! # Core Abstractions
//!
//! ## Events
//!
//! - [`MidiEvent`] - Decoded channel and realtime messages, with [`MidiEvent::parse`]
//! - [`MidiKind`] - Message kind without data, with its raw value range
//! - [`cc`] - Common controller numbers and names
//!
//! ## Parameters
//!
//! - [`MidiBinding`] - Template selecting which messages drive a parameter
//! - [`ControlParameter`] - Range-mapped value with slew limiting and low-pass smoothing
//! - [`ParameterOptions`] - Range, default, rate limits and smoothing settings
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for descriptions).
//! Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! legato-midi = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use legato_midi::{ControlParameter, MidiBinding, MidiEvent, ParameterOptions};
//!
//! let mut bend = ControlParameter::new(
//!     MidiBinding::pitch_bend().on_channel(0),
//!     ParameterOptions::default().with_range(-2.0, 2.0).with_default(0.0),
//! )
//! .unwrap();
//!
//! let event = MidiEvent::parse(&[0xE0, 0x7F, 0x7F]).unwrap();
//! assert!(bend.notify(&event));
//! assert_eq!(bend.target(), 2.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod binding;
pub mod cc;
pub mod error;
pub mod event;
pub mod parameter;

pub use binding::MidiBinding;
pub use error::ParameterError;
pub use event::{MidiEvent, MidiKind, PITCH_BEND_CENTER, PITCH_BEND_MAX, Realtime};
pub use parameter::{ControlParameter, DEFAULT_FILTER_HZ, DEFAULT_UPDATE_RATE, ParameterOptions};
