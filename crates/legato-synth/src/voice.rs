//! The capability a sound generator needs to be managed by a
//! [`VoiceAllocator`](crate::VoiceAllocator).

use alloc::boxed::Box;

/// A single sound-generating unit that can be triggered, released and
/// rendered.
///
/// The allocator decides *which* voice plays a note; the voice owns
/// everything about *how* it sounds, including its envelope and any release
/// tail that keeps sounding after [`release`](Voice::release).
///
/// # Example
///
/// ```rust
/// use legato_synth::Voice;
///
/// /// Plays its pitch offset as a DC level while the gate is open.
/// #[derive(Default)]
/// struct Gate {
///     open: bool,
///     offset: f32,
/// }
///
/// impl Voice for Gate {
///     fn trigger(&mut self, _note: u8, _velocity: u8) {
///         self.open = true;
///     }
///     fn release(&mut self, _note: u8, _velocity: u8) {
///         self.open = false;
///     }
///     fn sample(&mut self, output: &mut [f32]) {
///         let level = if self.open { 1.0 + self.offset } else { 0.0 };
///         output.fill(level);
///     }
///     fn is_active(&self) -> bool {
///         self.open
///     }
///     fn set_pitch_offset(&mut self, semitones: f32) {
///         self.offset = semitones;
///     }
/// }
/// ```
pub trait Voice {
    /// Start playing `note`.
    ///
    /// The allocator has already applied the current pitch-bend offset via
    /// [`set_pitch_offset`](Voice::set_pitch_offset), so the sounding pitch
    /// is `note + offset` semitones.
    fn trigger(&mut self, note: u8, velocity: u8);

    /// Begin the release phase of `note`.
    fn release(&mut self, note: u8, velocity: u8);

    /// Render `output.len()` samples, overwriting `output`.
    ///
    /// Inactive voices must write silence.
    fn sample(&mut self, output: &mut [f32]);

    /// Whether the voice is still producing sound, including any release tail.
    fn is_active(&self) -> bool;

    /// Offset the sounding pitch by a fractional number of semitones.
    ///
    /// Applies immediately to a sounding note as well as to later triggers.
    fn set_pitch_offset(&mut self, semitones: f32);
}

/// Boxed voices let one pool mix different voice types.
impl<V: Voice + ?Sized> Voice for Box<V> {
    fn trigger(&mut self, note: u8, velocity: u8) {
        (**self).trigger(note, velocity);
    }

    fn release(&mut self, note: u8, velocity: u8) {
        (**self).release(note, velocity);
    }

    fn sample(&mut self, output: &mut [f32]) {
        (**self).sample(output);
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn set_pitch_offset(&mut self, semitones: f32) {
        (**self).set_pitch_offset(semitones);
    }
}
