//! TOML patch files for legato.
//!
//! A patch names a set of MIDI-controlled parameters and the size of the
//! voice pool that plays notes. Each `[[parameters]]` entry becomes a
//! [`legato_midi::ControlParameter`]; the pool becomes a
//! [`legato_synth::VoiceAllocator`] over voices supplied by the caller.
//!
//! # Example
//!
//! ```rust
//! use legato_config::Patch;
//! use legato_midi::MidiEvent;
//!
//! let patch = Patch::from_toml(r#"
//! name = "Pad"
//!
//! [[parameters]]
//! name = "cutoff"
//! kind = "control_change"
//! number = 74
//! range = [200.0, 8000.0]
//! "#).unwrap();
//!
//! let mut params = patch.build_parameters().unwrap();
//! params.notify(&MidiEvent::parse(&[0xB0, 74, 127]).unwrap());
//! for _ in 0..120 {
//!     params.tick();
//! }
//! assert!((params.value("cutoff").unwrap() - 8000.0).abs() < 1.0);
//! ```

mod error;
mod parameter_config;
mod parameter_set;
mod patch;

pub use error::PatchError;
pub use parameter_config::ParameterConfig;
pub use parameter_set::ParameterSet;
pub use patch::{DEFAULT_VOICES, Patch};
