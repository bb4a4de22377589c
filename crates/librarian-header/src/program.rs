//! Program header (192 bytes).
//!
//! A program groups key groups under one MIDI program number and carries the
//! program-wide LFOs, modulation routing, temperament and portamento.

use librarian_codec::{
    BendMode, FieldCodec, ModulationSource, PortamentoType, Reassignment, Waveform,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::layout::{Field, HeaderMapper, Layout, BYTE, FLAG, PM12, PM50, TUNE};

pub const PROGRAM_SIZE: usize = 192;

/// Offset of the program name.
pub const PROGRAM_NAME_OFFSET: usize = 3;

const MOD_SOURCE: FieldCodec = FieldCodec::choice::<ModulationSource>();

/// A modulation routing slot: input source plus signed amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulationInput {
    pub source: ModulationSource,
    pub amount: i16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramMidi {
    pub program_number: u8,
    pub channel: u8,
    pub polyphony: u8,
    pub priority: u8,
    pub play_range_low: u8,
    pub play_range_high: u8,
    pub reassignment: Reassignment,
    pub transpose: i16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterOutput {
    pub individual_output: u8,
    pub stereo_level: u8,
    pub loudness: u8,
    pub individual_level: u8,
    pub loudness_mod1_amount: i16,
    pub loudness_mod2: ModulationInput,
    pub loudness_mod3: ModulationInput,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterPan {
    pub stereo_pan: i16,
    pub pan_mod: [ModulationInput; 3],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lfo1 {
    pub speed: u8,
    pub depth: u8,
    pub delay: u8,
    pub extra_depth_by_modwheel: u8,
    pub extra_depth_by_aftertouch: u8,
    pub extra_depth_by_velocity: u8,
    pub desync: bool,
    pub speed_mod: ModulationInput,
    pub depth_mod: ModulationInput,
    pub delay_mod: ModulationInput,
    pub waveform: Waveform,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lfo2 {
    pub speed: u8,
    pub depth: u8,
    pub delay: u8,
    pub waveform: Waveform,
    pub retrigger: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchBend {
    pub bend_up: u8,
    pub bend_down: u8,
    pub pressure_modulation: i16,
    pub bend_mode: BendMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramModes {
    pub key_group_cross_fade: bool,
    pub mono_legato: bool,
}

/// Per-semitone temperament offsets, C through B.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemitoneTuning {
    pub c: i16,
    pub c_sharp: i16,
    pub d: i16,
    pub d_sharp: i16,
    pub e: i16,
    pub f: i16,
    pub f_sharp: i16,
    pub g: i16,
    pub g_sharp: i16,
    pub a: i16,
    pub a_sharp: i16,
    pub b: i16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftPedal {
    pub loudness_reduction: u8,
    pub attack_stretch: u8,
    pub filter_close: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portamento {
    pub rate: u8,
    #[serde(rename = "type")]
    pub portamento_type: PortamentoType,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub name: String,
    pub midi: ProgramMidi,
    pub master_output: MasterOutput,
    pub master_pan: MasterPan,
    pub lfo1: Lfo1,
    pub lfo2: Lfo2,
    pub pitch_bend: PitchBend,
    pub modes: ProgramModes,
    pub number_of_key_groups: u8,
    pub semitone_tuning: SemitoneTuning,
    pub soft_pedal: SoftPedal,
    pub master_tuning: f64,
    pub filter1_freq_mod_sources: [ModulationSource; 3],
    pub filter2_freq_mod_sources: [ModulationSource; 3],
    pub pitch_mod_source: ModulationSource,
    pub loudness_mod_source: ModulationSource,
    pub portamento: Portamento,
}

const PROGRAM_FIELDS: &[Field<Program>] = &[
    name!(Program; PROGRAM_NAME_OFFSET; name),
    field!(Program; 15 => BYTE; midi.program_number),
    field!(Program; 16 => BYTE; midi.channel),
    field!(Program; 17 => BYTE; midi.polyphony),
    field!(Program; 18 => BYTE; midi.priority),
    field!(Program; 19 => BYTE; midi.play_range_low),
    field!(Program; 20 => BYTE; midi.play_range_high),
    field!(Program; 22 => BYTE; master_output.individual_output),
    field!(Program; 23 => BYTE; master_output.stereo_level),
    field!(Program; 24 => PM50; master_pan.stereo_pan),
    field!(Program; 25 => BYTE; master_output.loudness),
    field!(Program; 26 => PM50; master_output.loudness_mod1_amount),
    field!(Program; 29 => BYTE; lfo2.speed),
    field!(Program; 30 => BYTE; lfo2.depth),
    field!(Program; 31 => BYTE; lfo2.delay),
    field!(Program; 33 => BYTE; lfo1.speed),
    field!(Program; 34 => BYTE; lfo1.depth),
    field!(Program; 35 => BYTE; lfo1.delay),
    field!(Program; 36 => BYTE; lfo1.extra_depth_by_modwheel),
    field!(Program; 37 => BYTE; lfo1.extra_depth_by_aftertouch),
    field!(Program; 38 => BYTE; lfo1.extra_depth_by_velocity),
    field!(Program; 39 => BYTE; pitch_bend.bend_up),
    field!(Program; 40 => PM12; pitch_bend.pressure_modulation),
    field!(Program; 41 => FLAG; modes.key_group_cross_fade),
    field!(Program; 42 => BYTE; number_of_key_groups),
    field!(Program; 44 => PM50; semitone_tuning.c),
    field!(Program; 45 => PM50; semitone_tuning.c_sharp),
    field!(Program; 46 => PM50; semitone_tuning.d),
    field!(Program; 47 => PM50; semitone_tuning.d_sharp),
    field!(Program; 48 => PM50; semitone_tuning.e),
    field!(Program; 49 => PM50; semitone_tuning.f),
    field!(Program; 50 => PM50; semitone_tuning.f_sharp),
    field!(Program; 51 => PM50; semitone_tuning.g),
    field!(Program; 52 => PM50; semitone_tuning.g_sharp),
    field!(Program; 53 => PM50; semitone_tuning.a),
    field!(Program; 54 => PM50; semitone_tuning.a_sharp),
    field!(Program; 55 => PM50; semitone_tuning.b),
    field!(Program; 59 => FLAG; lfo1.desync),
    field!(Program; 61 => FieldCodec::choice::<Reassignment>(); midi.reassignment),
    field!(Program; 62 => BYTE; soft_pedal.loudness_reduction),
    field!(Program; 63 => BYTE; soft_pedal.attack_stretch),
    field!(Program; 64 => BYTE; soft_pedal.filter_close),
    field!(Program; 65 => TUNE; master_tuning),
    field!(Program; 70 => BYTE; master_output.individual_level),
    field!(Program; 72 => FLAG; modes.mono_legato),
    field!(Program; 73 => BYTE; pitch_bend.bend_down),
    field!(Program; 74 => FieldCodec::choice::<BendMode>(); pitch_bend.bend_mode),
    field!(Program; 75 => PM50; midi.transpose),
    field!(Program; 76 => MOD_SOURCE; master_pan.pan_mod[0].source),
    field!(Program; 77 => MOD_SOURCE; master_pan.pan_mod[1].source),
    field!(Program; 78 => MOD_SOURCE; master_pan.pan_mod[2].source),
    field!(Program; 79 => MOD_SOURCE; master_output.loudness_mod2.source),
    field!(Program; 80 => MOD_SOURCE; master_output.loudness_mod3.source),
    field!(Program; 81 => MOD_SOURCE; lfo1.speed_mod.source),
    field!(Program; 82 => MOD_SOURCE; lfo1.depth_mod.source),
    field!(Program; 83 => MOD_SOURCE; lfo1.delay_mod.source),
    field!(Program; 84 => MOD_SOURCE; filter1_freq_mod_sources[0]),
    field!(Program; 85 => MOD_SOURCE; filter1_freq_mod_sources[1]),
    field!(Program; 86 => MOD_SOURCE; filter1_freq_mod_sources[2]),
    field!(Program; 87 => MOD_SOURCE; pitch_mod_source),
    field!(Program; 88 => MOD_SOURCE; loudness_mod_source),
    field!(Program; 89 => PM50; master_pan.pan_mod[0].amount),
    field!(Program; 90 => PM50; master_pan.pan_mod[1].amount),
    field!(Program; 91 => PM50; master_pan.pan_mod[2].amount),
    field!(Program; 92 => PM50; master_output.loudness_mod2.amount),
    field!(Program; 93 => PM50; master_output.loudness_mod3.amount),
    field!(Program; 94 => PM50; lfo1.speed_mod.amount),
    field!(Program; 95 => PM50; lfo1.depth_mod.amount),
    field!(Program; 96 => PM50; lfo1.delay_mod.amount),
    field!(Program; 97 => FieldCodec::choice::<Waveform>(); lfo1.waveform),
    field!(Program; 98 => FieldCodec::choice::<Waveform>(); lfo2.waveform),
    field!(Program; 99 => MOD_SOURCE; filter2_freq_mod_sources[0]),
    field!(Program; 100 => MOD_SOURCE; filter2_freq_mod_sources[1]),
    field!(Program; 101 => MOD_SOURCE; filter2_freq_mod_sources[2]),
    field!(Program; 102 => BYTE; lfo2.retrigger),
    field!(Program; 110 => BYTE; portamento.rate),
    field!(Program; 111 => FieldCodec::choice::<PortamentoType>(); portamento.portamento_type),
    field!(Program; 112 => FLAG; portamento.enabled),
];

pub static PROGRAM_LAYOUT: Layout<Program> = Layout {
    record: "program",
    size: PROGRAM_SIZE,
    sections: &[PROGRAM_FIELDS],
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramMapper;

impl HeaderMapper for ProgramMapper {
    type Record = Program;

    fn size(&self) -> usize {
        PROGRAM_SIZE
    }

    fn decode(&self, block: &[u8]) -> Result<Program> {
        let program = PROGRAM_LAYOUT.decode(block)?;
        debug!("Decoded program: {}", program.name);
        Ok(program)
    }

    fn encode(&self, program: &Program) -> Result<Vec<u8>> {
        PROGRAM_LAYOUT.encode(program)
    }

    fn encode_partial(&self, index: usize, value: f64) -> Result<crate::layout::Patch> {
        PROGRAM_LAYOUT.encode_partial(index, value)
    }

    fn encode_name(&self, index: usize, name: &str) -> Result<crate::layout::Patch> {
        PROGRAM_LAYOUT.encode_name(index, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn block_with(pairs: &[(usize, u8)]) -> Vec<u8> {
        let mut block = vec![0u8; PROGRAM_SIZE];
        for &(offset, byte) in pairs {
            block[offset] = byte;
        }
        block
    }

    #[test]
    fn test_decode_reads_sign_codecs_at_their_offsets() {
        let block = block_with(&[(24, 206), (40, 244), (75, 255), (44, 5)]);
        let program = ProgramMapper.decode(&block).unwrap();
        assert_eq!(program.master_pan.stereo_pan, -50);
        assert_eq!(program.pitch_bend.pressure_modulation, -12);
        assert_eq!(program.midi.transpose, -1);
        assert_eq!(program.semitone_tuning.c, 5);
    }

    #[test]
    fn test_decode_master_tuning_is_fraction_then_whole() {
        let block = block_with(&[(65, 118), (66, 254)]);
        assert_eq!(ProgramMapper.decode(&block).unwrap().master_tuning, -1.54);
    }

    #[test]
    fn test_decode_enums_fall_back() {
        let block = block_with(&[(61, 3), (74, 9), (76, 99), (97, 2), (111, 7)]);
        let program = ProgramMapper.decode(&block).unwrap();
        assert_eq!(program.midi.reassignment, Reassignment::Quietest);
        assert_eq!(program.pitch_bend.bend_mode, BendMode::Held);
        assert_eq!(program.master_pan.pan_mod[0].source, ModulationSource::NoSource);
        assert_eq!(program.lfo1.waveform, Waveform::Square);
        assert_eq!(program.portamento.portamento_type, PortamentoType::Time);
    }

    #[test]
    fn test_encode_writes_name_and_flags() {
        let program = Program {
            name: "Strings".to_string(),
            modes: ProgramModes {
                key_group_cross_fade: true,
                mono_legato: false,
            },
            ..Default::default()
        };
        let block = ProgramMapper.encode(&program).unwrap();
        assert_eq!(&block[3..10], &[29, 30, 28, 19, 24, 17, 29]);
        assert_eq!(&block[10..15], &[10; 5]);
        assert_eq!(block[41], 1);
        assert_eq!(block[72], 0);
    }

    #[test]
    fn test_partial_transpose_uses_sign_codec() {
        assert_eq!(ProgramMapper.encode_partial(75, -3.0).unwrap().as_slice(), &[253]);
    }

    #[test]
    fn test_partial_pressure_modulation_is_twelve_range() {
        assert_eq!(ProgramMapper.encode_partial(40, -12.0).unwrap().as_slice(), &[244]);
        assert!(ProgramMapper.encode_partial(40, -13.0).is_err());
    }

    #[test]
    fn test_partial_master_tuning_is_two_bytes() {
        assert_eq!(ProgramMapper.encode_partial(65, 11.01).unwrap().as_slice(), &[2, 11]);
    }

    #[test]
    fn test_partial_rejects_undefined_offset() {
        assert_eq!(
            ProgramMapper.encode_partial(21, 1.0),
            Err(Error::UnsupportedField { index: 21 })
        );
        assert_eq!(
            ProgramMapper.encode_partial(66, 1.0),
            Err(Error::UnsupportedField { index: 66 })
        );
    }

    #[test]
    fn test_name_only_at_offset_three() {
        assert_eq!(ProgramMapper.encode_name(3, "A").unwrap()[0], 11);
        assert_eq!(
            ProgramMapper.encode_name(15, "A"),
            Err(Error::UnsupportedNameField { index: 15 })
        );
    }
}
