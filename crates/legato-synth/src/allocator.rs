//! Polyphonic voice allocation.
//!
//! [`VoiceAllocator`] assigns a fixed pool of voices to incoming notes. Each
//! held note maps to exactly one voice and each assigned voice to exactly one
//! note. When every voice is taken, the voice that was assigned longest ago
//! is stolen for the new note.
//!
//! ## Allocation order
//!
//! 1. A note that is already held keeps its voice.
//! 2. Otherwise the oldest free voice is taken.
//! 3. Otherwise the oldest assigned voice is stolen from its note.
//!
//! ## Sustain
//!
//! CC 64 at or above [`SUSTAIN_THRESHOLD`] holds notes: note-offs are ignored
//! while it is engaged. Lifting the pedal below the threshold, or sending a
//! value of exactly 0, releases every held note.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use legato_midi::MidiEvent;
use legato_midi::cc::{SUSTAIN_PEDAL, SUSTAIN_THRESHOLD};

use crate::voice::Voice;

/// Number of distinct note keys tracked.
const KEYS: usize = u8::MAX as usize + 1;

/// Samples rendered per voice per pass when mixing.
const SCRATCH_LEN: usize = 256;

/// A fixed pool of voices driven by note and sustain events.
///
/// # Invariants
///
/// - every voice index is in exactly one of the free and held queues
/// - the note-to-voice and voice-to-note maps are inverse over held voices
/// - the pool size never changes after construction
///
/// # Example
///
/// ```rust
/// use legato_synth::{Voice, VoiceAllocator};
///
/// #[derive(Default)]
/// struct Click(bool);
///
/// impl Voice for Click {
///     fn trigger(&mut self, _: u8, _: u8) { self.0 = true; }
///     fn release(&mut self, _: u8, _: u8) { self.0 = false; }
///     fn sample(&mut self, out: &mut [f32]) { out.fill(if self.0 { 1.0 } else { 0.0 }); }
///     fn is_active(&self) -> bool { self.0 }
///     fn set_pitch_offset(&mut self, _: f32) {}
/// }
///
/// let mut pool = VoiceAllocator::from_fn(2, |_| Click::default());
/// pool.on_note_event(60, 100, true);
/// pool.on_note_event(64, 100, true);
///
/// let mut block = [0.0f32; 64];
/// pool.sample(&mut block);
/// assert_eq!(block[0], 2.0);
/// ```
#[derive(Debug)]
pub struct VoiceAllocator<V> {
    voices: Vec<V>,
    key_to_voice: [Option<usize>; KEYS],
    voice_to_key: Vec<Option<u8>>,
    available: VecDeque<usize>,
    in_use: VecDeque<usize>,
    last: usize,
    sustain: u8,
    pitch_bend: f32,
    scratch: [f32; SCRATCH_LEN],
}

impl<V: Voice> VoiceAllocator<V> {
    /// Create an allocator owning `voices`.
    ///
    /// # Panics
    ///
    /// Panics if `voices` is empty. A pool without voices cannot play any
    /// note, which is a setup defect rather than a runtime condition.
    pub fn new(voices: impl IntoIterator<Item = V>) -> Self {
        let voices: Vec<V> = voices.into_iter().collect();
        let count = voices.len();
        assert!(count > 0, "voice pool needs at least one voice");

        Self {
            voices,
            key_to_voice: [None; KEYS],
            voice_to_key: alloc::vec![None; count],
            available: (0..count).collect(),
            in_use: VecDeque::with_capacity(count),
            last: count - 1,
            sustain: 0,
            pitch_bend: 0.0,
            scratch: [0.0; SCRATCH_LEN],
        }
    }

    /// Create an allocator with `count` voices built by `make(index)`.
    pub fn from_fn(count: usize, make: impl FnMut(usize) -> V) -> Self {
        Self::new((0..count).map(make))
    }

    /// Route a MIDI event.
    ///
    /// Note On starts a note, Note Off (or Note On with velocity 0) ends one,
    /// and Control Change goes to [`on_control_event`](Self::on_control_event).
    /// Everything else is ignored.
    pub fn handle_event(&mut self, event: &MidiEvent) {
        match *event {
            MidiEvent::NoteOn { note, velocity, .. } => {
                self.on_note_event(note, velocity, velocity > 0);
            }
            MidiEvent::NoteOff { note, velocity, .. } => self.on_note_event(note, velocity, false),
            MidiEvent::ControlChange { .. } => self.on_control_event(event),
            _ => {}
        }
    }

    /// React to a controller event. Only the sustain pedal is used.
    pub fn on_control_event(&mut self, event: &MidiEvent) {
        let MidiEvent::ControlChange {
            index: SUSTAIN_PEDAL,
            value,
            ..
        } = *event
        else {
            return;
        };

        let lifted = self.sustain >= SUSTAIN_THRESHOLD && value < SUSTAIN_THRESHOLD;
        if lifted || value == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(held = self.in_use.len(), value, "sustain released");
            self.all_off();
        }
        self.sustain = value;
    }

    /// Start or end a note.
    ///
    /// Note-offs are deferred while the sustain pedal is down; the note keeps
    /// its voice until the pedal is lifted.
    pub fn on_note_event(&mut self, note: u8, velocity: u8, on: bool) {
        if on {
            self.trigger(note, velocity);
        } else if self.sustain < SUSTAIN_THRESHOLD {
            if let Some(voice) = self.release(note) {
                voice.release(note, velocity);
            }
        }
    }

    /// Assign a voice to `note` and trigger it with the current pitch bend.
    ///
    /// Returns the index of the triggered voice.
    pub fn trigger(&mut self, note: u8, velocity: u8) -> usize {
        let index = self.acquire(note);
        let voice = &mut self.voices[index];
        voice.set_pitch_offset(self.pitch_bend);
        voice.trigger(note, velocity);
        self.last = index;
        index
    }

    /// Find the voice that should play `note` and assign it.
    ///
    /// Does not trigger the voice. Returns its index.
    ///
    /// # Panics
    ///
    /// Panics if the pool holds no voices, which [`new`](Self::new) rules out.
    pub fn acquire(&mut self, note: u8) -> usize {
        if let Some(index) = self.key_to_voice[usize::from(note)] {
            return index;
        }

        let index = match self.available.pop_front() {
            Some(index) => index,
            None => {
                let Some(index) = self.in_use.pop_front() else {
                    panic!("voice pool has neither free nor assigned voices");
                };
                if let Some(old) = self.voice_to_key[index].take() {
                    self.key_to_voice[usize::from(old)] = None;
                    #[cfg(feature = "tracing")]
                    tracing::debug!(voice = index, from = old, to = note, "voice stolen");
                }
                index
            }
        };

        self.in_use.push_back(index);
        self.key_to_voice[usize::from(note)] = Some(index);
        self.voice_to_key[index] = Some(note);
        index
    }

    /// Unassign the voice playing `note`.
    ///
    /// Returns the freed voice so the caller can start its release, or `None`
    /// if `note` holds no voice (never played, already released, or stolen).
    pub fn release(&mut self, note: u8) -> Option<&mut V> {
        let index = self.key_to_voice[usize::from(note)].take()?;
        self.voice_to_key[index] = None;
        if let Some(pos) = self.in_use.iter().position(|&i| i == index) {
            self.in_use.remove(pos);
        }
        self.available.push_back(index);
        Some(&mut self.voices[index])
    }

    /// Release every held note, oldest first, with velocity 0.
    pub fn all_off(&mut self) {
        while let Some(&index) = self.in_use.front() {
            let Some(note) = self.voice_to_key[index] else {
                // Unreachable while the maps are consistent.
                self.in_use.pop_front();
                self.available.push_back(index);
                continue;
            };
            if let Some(voice) = self.release(note) {
                voice.release(note, 0);
            }
        }
    }

    /// Set the pitch bend in fractional semitones.
    ///
    /// Applies to every held note immediately and to later triggers.
    pub fn set_pitch_bend(&mut self, semitones: f32) {
        self.pitch_bend = semitones;
        #[cfg(feature = "tracing")]
        tracing::debug!(semitones, held = self.in_use.len(), "pitch bend");
        for &index in &self.in_use {
            self.voices[index].set_pitch_offset(semitones);
        }
    }

    /// Whether any voice is sounding, assigned or not.
    pub fn is_active(&self) -> bool {
        self.voices.iter().any(Voice::is_active)
    }

    /// Render the sum of every voice into `output`, overwriting it.
    pub fn sample(&mut self, output: &mut [f32]) {
        output.fill(0.0);
        for chunk in output.chunks_mut(SCRATCH_LEN) {
            let scratch = &mut self.scratch[..chunk.len()];
            for voice in &mut self.voices {
                voice.sample(scratch);
                for (out, s) in chunk.iter_mut().zip(scratch.iter()) {
                    *out += *s;
                }
            }
        }
    }

    /// The most recently triggered voice.
    ///
    /// Before any trigger this is the last voice in the pool.
    pub fn last(&self) -> &V {
        &self.voices[self.last]
    }

    /// All voices in pool order.
    pub fn voices(&self) -> &[V] {
        &self.voices
    }

    /// Index of the voice holding `note`, if any.
    pub fn voice_for(&self, note: u8) -> Option<usize> {
        self.key_to_voice[usize::from(note)]
    }

    /// Note held by the voice at `index`, if any.
    pub fn note_for(&self, index: usize) -> Option<u8> {
        self.voice_to_key.get(index).copied().flatten()
    }

    /// Held notes, oldest assignment first.
    pub fn held_notes(&self) -> impl Iterator<Item = u8> + '_ {
        self.in_use.iter().filter_map(|&i| self.voice_to_key[i])
    }

    /// Number of voices currently assigned to notes.
    pub fn held_count(&self) -> usize {
        self.in_use.len()
    }

    /// Number of unassigned voices.
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Total number of voices.
    pub fn len(&self) -> usize {
        self.voices.len()
    }

    /// Always `false`; pools hold at least one voice.
    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// Current sustain pedal value (0-127).
    pub fn sustain(&self) -> u8 {
        self.sustain
    }

    /// Current pitch bend in semitones.
    pub fn pitch_bend(&self) -> f32 {
        self.pitch_bend
    }
}
