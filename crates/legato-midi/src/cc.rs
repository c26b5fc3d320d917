//! Common MIDI Control Change (CC) numbers and their conventional names.

/// Bank Select MSB (CC0).
pub const BANK_SELECT: u8 = 0;
/// Modulation Wheel (CC1).
pub const MOD_WHEEL: u8 = 1;
/// Breath Controller (CC2).
pub const BREATH: u8 = 2;
/// Foot Controller (CC4).
pub const FOOT: u8 = 4;
/// Portamento Time (CC5).
pub const PORTAMENTO_TIME: u8 = 5;
/// Data Entry MSB (CC6).
pub const DATA_ENTRY_MSB: u8 = 6;
/// Volume (CC7).
pub const VOLUME: u8 = 7;
/// Balance (CC8).
pub const BALANCE: u8 = 8;
/// Pan (CC10).
pub const PAN: u8 = 10;
/// Expression (CC11).
pub const EXPRESSION: u8 = 11;
/// Sustain Pedal (CC64).
pub const SUSTAIN_PEDAL: u8 = 64;
/// Portamento on/off (CC65).
pub const PORTAMENTO: u8 = 65;
/// Sostenuto Pedal (CC66).
pub const SOSTENUTO: u8 = 66;
/// Soft Pedal (CC67).
pub const SOFT_PEDAL: u8 = 67;
/// Legato Footswitch (CC68).
pub const LEGATO: u8 = 68;
/// Resonance / Timbre (CC71).
pub const RESONANCE: u8 = 71;
/// Release Time (CC72).
pub const RELEASE_TIME: u8 = 72;
/// Attack Time (CC73).
pub const ATTACK_TIME: u8 = 73;
/// Brightness / Cutoff (CC74).
pub const BRIGHTNESS: u8 = 74;
/// Reverb Depth (CC91).
pub const REVERB: u8 = 91;
/// Chorus Depth (CC93).
pub const CHORUS: u8 = 93;
/// All Sound Off (CC120).
pub const ALL_SOUND_OFF: u8 = 120;
/// Reset All Controllers (CC121).
pub const RESET_ALL_CONTROLLERS: u8 = 121;
/// All Notes Off (CC123).
pub const ALL_NOTES_OFF: u8 = 123;

/// Sustain values at or above this level hold notes.
///
/// The pedal engages at roughly a quarter of the CC range so that
/// half-pedal positions on continuous pedals still count as held.
pub const SUSTAIN_THRESHOLD: u8 = 32;

/// Conventional name of a controller, if it has a widely used one.
///
/// # Example
///
/// ```rust
/// use legato_midi::cc;
///
/// assert_eq!(cc::name(cc::VOLUME), Some("Volume"));
/// assert_eq!(cc::name(20), None);
/// ```
pub fn name(index: u8) -> Option<&'static str> {
    let name = match index {
        BANK_SELECT => "Bank Select",
        MOD_WHEEL => "Modulation Wheel",
        BREATH => "Breath Controller",
        FOOT => "Foot Controller",
        PORTAMENTO_TIME => "Portamento Time",
        DATA_ENTRY_MSB => "Data Entry",
        VOLUME => "Volume",
        BALANCE => "Balance",
        PAN => "Pan",
        EXPRESSION => "Expression",
        32 => "Bank Select LSB",
        SUSTAIN_PEDAL => "Sustain Pedal",
        PORTAMENTO => "Portamento",
        SOSTENUTO => "Sostenuto",
        SOFT_PEDAL => "Soft Pedal",
        LEGATO => "Legato Footswitch",
        RESONANCE => "Resonance",
        RELEASE_TIME => "Release Time",
        ATTACK_TIME => "Attack Time",
        BRIGHTNESS => "Brightness",
        REVERB => "Reverb Depth",
        CHORUS => "Chorus Depth",
        ALL_SOUND_OFF => "All Sound Off",
        RESET_ALL_CONTROLLERS => "Reset All Controllers",
        122 => "Local Control",
        ALL_NOTES_OFF => "All Notes Off",
        124 => "Omni Off",
        125 => "Omni On",
        126 => "Mono On",
        127 => "Poly On",
        _ => return None,
    };
    Some(name)
}
