//! Integration tests for legato-config.
//!
//! Patches are loaded from disk, built, and driven with raw MIDI bytes.

use legato_config::{ParameterConfig, ParameterSet, Patch, PatchError};
use legato_midi::{MidiEvent, MidiKind, ParameterError, cc};
use legato_synth::Voice;
use tempfile::TempDir;

const PIANO: &str = r#"
name = "Electric piano"
description = "Tines with a wheel-driven filter"
voices = 4
update_rate = 100.0

[[parameters]]
name = "cutoff"
kind = "control_change"
number = 74
range = [200.0, 8000.0]
default = 1000.0

[[parameters]]
name = "volume"
kind = "control_change"
channel = 0
number = 7
range = [0.0, 1.0]
default = 0.8

[[parameters]]
name = "bend"
kind = "pitch_bend"
range = [-2.0, 2.0]
default = 0.0
filter_hz = 30.0

[[parameters]]
name = "kick"
kind = "note_on"
channel = 9
number = 36
"#;

/// Voice that holds its velocity as a DC level while gated.
#[derive(Debug, Default)]
struct GateVoice {
    note: Option<u8>,
    level: f32,
}

impl Voice for GateVoice {
    fn trigger(&mut self, note: u8, velocity: u8) {
        self.note = Some(note);
        self.level = f32::from(velocity) / 127.0;
    }

    fn release(&mut self, _note: u8, _velocity: u8) {
        self.note = None;
        self.level = 0.0;
    }

    fn sample(&mut self, output: &mut [f32]) {
        output.fill(self.level);
    }

    fn is_active(&self) -> bool {
        self.note.is_some()
    }

    fn set_pitch_offset(&mut self, _semitones: f32) {}
}

fn feed(params: &mut ParameterSet, bytes: &[u8]) -> usize {
    let event = MidiEvent::parse(bytes).expect("valid MIDI message");
    params.notify(&event)
}

#[test]
fn save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("piano.toml");

    let patch = Patch::from_toml(PIANO).unwrap();
    patch.save(&path).unwrap();
    assert!(path.exists());

    let loaded = Patch::load(&path).unwrap();
    assert_eq!(loaded, patch);
    assert_eq!(loaded.voices, 4);
    assert_eq!(loaded.update_rate, 100.0);
    assert_eq!(loaded.parameters.len(), 4);
}

#[test]
fn patch_drives_parameters_from_midi_bytes() {
    let patch = Patch::from_toml(PIANO).unwrap();
    let mut params = patch.build_parameters().unwrap();

    assert_eq!(params.value("cutoff"), Some(1000.0));
    assert_eq!(params.value("bend"), Some(0.0));

    // Brightness full up on channel 5: cutoff listens on every channel.
    assert_eq!(feed(&mut params, &[0xB5, cc::BRIGHTNESS, 127]), 1);
    // Volume is bound to channel 0 only.
    assert_eq!(feed(&mut params, &[0xB3, cc::VOLUME, 0]), 0);
    assert_eq!(feed(&mut params, &[0xB0, cc::VOLUME, 0]), 1);
    // Bend fully down.
    assert_eq!(feed(&mut params, &[0xE0, 0x00, 0x00]), 1);
    // Kick velocity on the drum channel only.
    assert_eq!(feed(&mut params, &[0x90, 36, 40]), 0);
    assert_eq!(feed(&mut params, &[0x99, 36, 127]), 1);

    for _ in 0..200 {
        params.tick();
    }

    assert!((params.value("cutoff").unwrap() - 8000.0).abs() < 1e-2);
    assert!(params.value("volume").unwrap().abs() < 1e-4);
    assert!((params.value("bend").unwrap() + 2.0).abs() < 1e-4);
    assert!((params.value("kick").unwrap() - 1.0).abs() < 1e-4);

    params.reset();
    assert_eq!(params.value("cutoff"), Some(1000.0));
}

#[test]
fn patch_builds_voice_pool() {
    let patch = Patch::from_toml(PIANO).unwrap();
    let mut pool = patch.build_allocator(|_| GateVoice::default()).unwrap();
    assert_eq!(pool.len(), 4);

    for note in [60, 64, 67, 72, 76] {
        pool.handle_event(&MidiEvent::parse(&[0x90, note, 127]).unwrap());
    }
    // Five notes into four voices: the oldest was stolen.
    assert_eq!(pool.held_count(), 4);
    assert_eq!(pool.voice_for(60), None);
    assert!(pool.voice_for(76).is_some());

    let mut out = [0.0f32; 8];
    pool.sample(&mut out);
    assert!(out.iter().all(|s| (s - 4.0).abs() < 1e-6));
}

#[test]
fn unknown_kind_fails_to_parse() {
    let toml = r#"
name = "Bad"

[[parameters]]
name = "x"
kind = "system_exclusive"
"#;
    assert!(matches!(Patch::from_toml(toml), Err(PatchError::TomlParse(_))));
}

#[test]
fn empty_voice_pool_is_rejected() {
    let patch = Patch::new("Silent").with_voices(0);
    assert!(matches!(
        patch.build_allocator(|_| GateVoice::default()),
        Err(PatchError::EmptyVoicePool)
    ));
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    match Patch::load(&path) {
        Err(PatchError::ReadFile { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn invalid_entries_name_the_parameter() {
    let patch = Patch::new("Broken")
        .with_parameter(ParameterConfig::new("ok", MidiKind::ChannelAftertouch))
        .with_parameter(ParameterConfig::new("wheel", MidiKind::ControlChange));

    match patch.build_parameters() {
        Err(PatchError::Parameter { name, source }) => {
            assert_eq!(name, "wheel");
            assert_eq!(source, ParameterError::MissingIndex(MidiKind::ControlChange));
        }
        other => panic!("expected parameter error, got {other:?}"),
    }

    let dup = Patch::new("Dup")
        .with_parameter(ParameterConfig::new("p", MidiKind::PitchBend))
        .with_parameter(ParameterConfig::new("p", MidiKind::PitchBend));
    assert!(matches!(
        dup.build_parameters(),
        Err(PatchError::DuplicateName(ref n)) if n == "p"
    ));
}
