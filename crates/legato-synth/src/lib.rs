//! Legato Synth - voice allocation for polyphonic instruments
//!
//! This crate manages a fixed pool of sound generators. It decides which
//! voice plays each note, steals voices when the pool is exhausted, and
//! applies sustain pedal and pitch bend semantics. The voices themselves
//! (oscillators, envelopes) are supplied by the caller through the [`Voice`]
//! trait.
//!
//! # Core Components
//!
//! - [`Voice`] - Capability a sound generator implements
//! - [`VoiceAllocator`] - Note-to-voice mapping with FIFO stealing, sustain and pitch bend
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc`). Disable the default
//! `std` feature:
//!
//! ```toml
//! [dependencies]
//! legato-synth = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use legato_midi::MidiEvent;
//! use legato_synth::{Voice, VoiceAllocator};
//!
//! #[derive(Default)]
//! struct Beep {
//!     on: bool,
//! }
//!
//! impl Voice for Beep {
//!     fn trigger(&mut self, _note: u8, _velocity: u8) { self.on = true; }
//!     fn release(&mut self, _note: u8, _velocity: u8) { self.on = false; }
//!     fn sample(&mut self, out: &mut [f32]) { out.fill(if self.on { 0.5 } else { 0.0 }); }
//!     fn is_active(&self) -> bool { self.on }
//!     fn set_pitch_offset(&mut self, _semitones: f32) {}
//! }
//!
//! let mut pool = VoiceAllocator::from_fn(1, |_| Beep::default());
//! for bytes in [[0x90, 60, 100], [0x90, 67, 100]] {
//!     pool.handle_event(&MidiEvent::parse(&bytes).unwrap());
//! }
//!
//! // One voice: note 67 stole it from note 60.
//! assert_eq!(pool.voice_for(60), None);
//! assert_eq!(pool.voice_for(67), Some(0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod allocator;
pub mod voice;

pub use allocator::VoiceAllocator;
pub use voice::Voice;
