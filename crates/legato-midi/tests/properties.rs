//! Property-based tests for MIDI decoding and parameter smoothing.

use legato_midi::{ControlParameter, MidiBinding, MidiEvent, ParameterOptions, cc};
use proptest::prelude::*;

fn event_fields_in_range(event: &MidiEvent) -> bool {
    let data_ok = match *event {
        MidiEvent::NoteOn { note, velocity, .. } | MidiEvent::NoteOff { note, velocity, .. } => {
            note < 128 && velocity < 128
        }
        MidiEvent::ControlChange { index, value, .. } => index < 128 && value < 128,
        MidiEvent::ProgramChange { program, .. } => program < 128,
        MidiEvent::PitchBend { low, high, .. } => low < 128 && high < 128,
        MidiEvent::ChannelAftertouch { value, .. } => value < 128,
        MidiEvent::PolyAftertouch { note, value, .. } => note < 128 && value < 128,
        MidiEvent::Realtime(_) => true,
    };
    data_ok && event.channel().is_none_or(|c| c < 16)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Arbitrary bytes either fail to decode or decode to in-range fields.
    #[test]
    fn parse_never_yields_out_of_range_fields(
        bytes in prop::collection::vec(any::<u8>(), 0..4),
    ) {
        if let Some(event) = MidiEvent::parse(&bytes) {
            prop_assert!(event_fields_in_range(&event), "{event:?} from {bytes:?}");
            if let Some(bend) = event.bend_value() {
                prop_assert!(bend <= 16383);
            }
        }
    }

    /// Whatever the controller does, the smoothed output stays inside the
    /// configured range, in either orientation.
    #[test]
    fn output_stays_in_range(
        start in -1000.0f32..1000.0f32,
        end in -1000.0f32..1000.0f32,
        filter_hz in 0.5f32..25.0f32,
        stream in prop::collection::vec((0u8..128, 1usize..8), 1..40),
    ) {
        let options = ParameterOptions::default()
            .with_range(start, end)
            .with_filter_hz(filter_hz);
        let mut param =
            ControlParameter::new(MidiBinding::control_change(cc::EXPRESSION), options).unwrap();
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };

        for (value, ticks) in stream {
            param.notify(&MidiEvent::ControlChange { channel: 0, index: cc::EXPRESSION, value });
            prop_assert!(param.target() >= lo && param.target() <= hi);
            for _ in 0..ticks {
                let out = param.advance();
                prop_assert!(out >= lo && out <= hi, "{out} outside [{lo}, {hi}]");
            }
        }
    }

    /// Per-tick movement never exceeds the configured rise and fall rates.
    #[test]
    fn movement_respects_rate_limits(
        rise in 0.5f32..20.0f32,
        fall in 0.5f32..20.0f32,
        values in prop::collection::vec(0u8..128, 1..20),
    ) {
        let update_rate = 60.0;
        let options = ParameterOptions::default()
            .with_max_rise(rise)
            .with_max_fall(fall)
            .with_update_rate(update_rate);
        let mut param =
            ControlParameter::new(MidiBinding::channel_aftertouch(), options).unwrap();

        let mut prev = param.last_value();
        for value in values {
            param.notify(&MidiEvent::ChannelAftertouch { channel: 3, value });
            for _ in 0..10 {
                let out = param.advance();
                let tol = 1e-5;
                prop_assert!(out - prev <= rise / update_rate + tol);
                prop_assert!(prev - out <= fall / update_rate + tol);
                prev = out;
            }
        }
    }
}
