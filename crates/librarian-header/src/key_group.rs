//! Key group header (192 bytes).
//!
//! A key group spans a note range and layers up to four velocity zones, each
//! naming the sample it plays. Zone fields repeat on a 24-byte stride, with
//! pitch, output and velocity-to-start kept in per-zone arrays further up the
//! block.

use librarian_codec::{FieldCodec, FilterType, Pitch, ZonePlayback};
use serde::{Deserialize, Serialize};

use crate::layout::{Field, Layout, BYTE, FLAG, PM24, PM50, PM999, TUNE};

pub const KEY_GROUP_SIZE: usize = 192;

pub const ZONE_COUNT: usize = 4;

/// Distance between consecutive zones' name, velocity, tune and level fields.
pub const ZONE_STRIDE: usize = 24;

/// Offsets of the four zone sample names.
pub const ZONE_NAME_OFFSETS: [usize; ZONE_COUNT] = [34, 58, 82, 106];

/// First zone output routing byte; zone `z` lives at `+ z`.
pub const ZONE_OUTPUT_OFFSET: usize = 136;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub low_note: u8,
    pub high_note: u8,
    pub tune: f64,
    pub beat: i16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter1 {
    pub frequency: u8,
    pub key_follow: i16,
    pub resonance: u8,
    pub freq_mod_amounts: [i16; 3],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter2 {
    pub frequency: u8,
    pub key_follow: i16,
    pub resonance: u8,
    pub attenuator: u8,
    pub filter_type: FilterType,
    pub freq_mod_amounts: [i16; 3],
}

/// Amplitude envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope1 {
    pub attack: u8,
    pub decay: u8,
    pub sustain: u8,
    pub release: u8,
    pub velocity_to_attack: i16,
    pub velocity_to_release: i16,
    pub off_velocity_to_release: i16,
    pub key_to_decay_and_release: i16,
    pub attack_hold: bool,
}

/// Four-stage rate/level envelope (envelopes 2 and 3).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLevelEnvelope {
    pub rate1: u8,
    pub level1: u8,
    pub rate2: u8,
    pub level2: u8,
    pub rate3: u8,
    pub level3: u8,
    pub rate4: u8,
    pub level4: u8,
    pub velocity_to_rate1: i16,
    pub velocity_to_rate4: i16,
    pub off_velocity_to_rate4: i16,
    pub key_to_rate2_and_rate4: i16,
    pub velocity_to_envelope: i16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tone {
    pub center_frequency: u8,
    pub slope: i16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub sample_name: String,
    pub velocity_low: u8,
    pub velocity_high: u8,
    pub tune: f64,
    pub loudness: i16,
    pub filter_cutoff: i16,
    pub pan: i16,
    pub playback: ZonePlayback,
    pub pitch: Pitch,
    /// Individual output routing; the valid range depends on the sampler model.
    pub output: u8,
    pub velocity_to_start: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyGroup {
    pub span: Span,
    pub filter1: Filter1,
    pub filter2: Filter2,
    pub envelope1: Envelope1,
    pub envelope2: RateLevelEnvelope,
    pub envelope3: RateLevelEnvelope,
    pub tone: Tone,
    pub zones: [Zone; ZONE_COUNT],
    pub velocity_cross_fade: bool,
    pub pitch_mod_by_lfo1: i16,
    pub pitch_mod_amount: i16,
    pub loudness_mod_amount: i16,
    pub mute_group: u8,
    pub filter2_tone_enabled: bool,
}

const PLAYBACK: FieldCodec = FieldCodec::choice::<ZonePlayback>();
const PITCH: FieldCodec = FieldCodec::choice::<Pitch>();

macro_rules! zone_fields {
    ($z:literal) => {
        &[
            name!(KeyGroup; 34 + ZONE_STRIDE * $z; zones[$z].sample_name),
            field!(KeyGroup; 46 + ZONE_STRIDE * $z => BYTE; zones[$z].velocity_low),
            field!(KeyGroup; 47 + ZONE_STRIDE * $z => BYTE; zones[$z].velocity_high),
            field!(KeyGroup; 48 + ZONE_STRIDE * $z => TUNE; zones[$z].tune),
            field!(KeyGroup; 50 + ZONE_STRIDE * $z => PM50; zones[$z].loudness),
            field!(KeyGroup; 51 + ZONE_STRIDE * $z => PM50; zones[$z].filter_cutoff),
            field!(KeyGroup; 52 + ZONE_STRIDE * $z => PM50; zones[$z].pan),
            field!(KeyGroup; 53 + ZONE_STRIDE * $z => PLAYBACK; zones[$z].playback),
            field!(KeyGroup; 132 + $z => PITCH; zones[$z].pitch),
            field!(KeyGroup; ZONE_OUTPUT_OFFSET + $z => BYTE; zones[$z].output),
            field!(KeyGroup; 140 + 2 * $z => PM999; zones[$z].velocity_to_start),
        ]
    };
}

const KEY_GROUP_FIELDS: &[Field<KeyGroup>] = &[
    field!(KeyGroup; 3 => BYTE; span.low_note),
    field!(KeyGroup; 4 => BYTE; span.high_note),
    field!(KeyGroup; 5 => TUNE; span.tune),
    field!(KeyGroup; 7 => BYTE; filter1.frequency),
    field!(KeyGroup; 8 => PM24; filter1.key_follow),
    field!(KeyGroup; 12 => BYTE; envelope1.attack),
    field!(KeyGroup; 13 => BYTE; envelope1.decay),
    field!(KeyGroup; 14 => BYTE; envelope1.sustain),
    field!(KeyGroup; 15 => BYTE; envelope1.release),
    field!(KeyGroup; 16 => PM50; envelope1.velocity_to_attack),
    field!(KeyGroup; 17 => PM50; envelope1.velocity_to_release),
    field!(KeyGroup; 18 => PM50; envelope1.off_velocity_to_release),
    field!(KeyGroup; 19 => PM50; envelope1.key_to_decay_and_release),
    field!(KeyGroup; 20 => BYTE; envelope2.rate1),
    field!(KeyGroup; 21 => BYTE; envelope2.rate3),
    field!(KeyGroup; 22 => BYTE; envelope2.level3),
    field!(KeyGroup; 23 => BYTE; envelope2.rate4),
    field!(KeyGroup; 24 => PM50; envelope2.velocity_to_rate1),
    field!(KeyGroup; 25 => PM50; envelope2.velocity_to_rate4),
    field!(KeyGroup; 26 => PM50; envelope2.off_velocity_to_rate4),
    field!(KeyGroup; 27 => PM50; envelope2.key_to_rate2_and_rate4),
    field!(KeyGroup; 28 => PM50; envelope2.velocity_to_envelope),
    field!(KeyGroup; 30 => FLAG; velocity_cross_fade),
    field!(KeyGroup; 130 => PM50; span.beat),
    field!(KeyGroup; 131 => FLAG; envelope1.attack_hold),
    field!(KeyGroup; 149 => BYTE; filter1.resonance),
    field!(KeyGroup; 150 => PM50; pitch_mod_by_lfo1),
    field!(KeyGroup; 151 => PM50; filter1.freq_mod_amounts[0]),
    field!(KeyGroup; 152 => PM50; filter1.freq_mod_amounts[1]),
    field!(KeyGroup; 153 => PM50; filter1.freq_mod_amounts[2]),
    field!(KeyGroup; 154 => PM50; pitch_mod_amount),
    field!(KeyGroup; 155 => PM50; loudness_mod_amount),
    field!(KeyGroup; 156 => BYTE; envelope2.level1),
    field!(KeyGroup; 157 => BYTE; envelope2.rate2),
    field!(KeyGroup; 158 => BYTE; envelope2.level2),
    field!(KeyGroup; 159 => BYTE; envelope2.level4),
    field!(KeyGroup; 160 => BYTE; mute_group),
    field!(KeyGroup; 168 => FLAG; filter2_tone_enabled),
    field!(KeyGroup; 169 => BYTE; filter2.attenuator),
    field!(KeyGroup; 170 => FieldCodec::choice::<FilterType>(); filter2.filter_type),
    field!(KeyGroup; 171 => BYTE; filter2.resonance),
    field!(KeyGroup; 172 => BYTE; tone.center_frequency),
    field!(KeyGroup; 173 => PM50; tone.slope),
    field!(KeyGroup; 174 => PM50; filter2.freq_mod_amounts[0]),
    field!(KeyGroup; 175 => PM50; filter2.freq_mod_amounts[1]),
    field!(KeyGroup; 176 => PM50; filter2.freq_mod_amounts[2]),
    field!(KeyGroup; 177 => BYTE; filter2.frequency),
    field!(KeyGroup; 178 => PM24; filter2.key_follow),
    field!(KeyGroup; 179 => BYTE; envelope3.rate1),
    field!(KeyGroup; 180 => BYTE; envelope3.level1),
    field!(KeyGroup; 181 => BYTE; envelope3.rate2),
    field!(KeyGroup; 182 => BYTE; envelope3.level2),
    field!(KeyGroup; 183 => BYTE; envelope3.rate3),
    field!(KeyGroup; 184 => BYTE; envelope3.level3),
    field!(KeyGroup; 185 => BYTE; envelope3.rate4),
    field!(KeyGroup; 186 => BYTE; envelope3.level4),
    field!(KeyGroup; 187 => PM50; envelope3.velocity_to_rate1),
    field!(KeyGroup; 188 => PM50; envelope3.velocity_to_rate4),
    field!(KeyGroup; 189 => PM50; envelope3.off_velocity_to_rate4),
    field!(KeyGroup; 190 => PM50; envelope3.key_to_rate2_and_rate4),
    field!(KeyGroup; 191 => PM50; envelope3.velocity_to_envelope),
];

const ZONE_1: &[Field<KeyGroup>] = zone_fields!(0);
const ZONE_2: &[Field<KeyGroup>] = zone_fields!(1);
const ZONE_3: &[Field<KeyGroup>] = zone_fields!(2);
const ZONE_4: &[Field<KeyGroup>] = zone_fields!(3);

pub static KEY_GROUP_LAYOUT: Layout<KeyGroup> = Layout {
    record: "key group",
    size: KEY_GROUP_SIZE,
    sections: &[KEY_GROUP_FIELDS, ZONE_1, ZONE_2, ZONE_3, ZONE_4],
};

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyGroupMapper;

layout_mapper!(KeyGroupMapper, KeyGroup, KEY_GROUP_LAYOUT);
