//! Integration tests for librarian-remote.
//!
//! These tests drive the service end to end against the in-memory transport.

use std::sync::Arc;
use std::thread;

use librarian_header::effect::{Chorus, Echo};
use librarian_header::{
    Effect, EffectType, Error as HeaderError, HeaderMapper, KeyGroup, Program, ProgramMapper,
    Reverb, Sample,
};
use librarian_remote::{
    Error, HeaderAddress, MemoryTransport, RemoteSampler, SamplerModel, SysexTransport,
    WriteRecord,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn remote() -> RemoteSampler<MemoryTransport> {
    init_tracing();
    RemoteSampler::builder(MemoryTransport::new()).build().unwrap()
}

// ---------------------------------------------------------------------------
// 1. Full reads and writes
// ---------------------------------------------------------------------------

#[test]
fn test_every_header_kind_round_trips() {
    let remote = remote();

    let mut program = Program {
        name: "PIANO       ".to_string(),
        number_of_key_groups: 2,
        ..Default::default()
    };
    program.midi.transpose = 12;
    remote.update_program(1, &program).unwrap();
    assert_eq!(remote.program(1).unwrap(), program);

    let mut key_group = KeyGroup::default();
    key_group.span.low_note = 36;
    for zone in key_group.zones.iter_mut() {
        zone.sample_name = "PIANO C3    ".to_string();
    }
    key_group.zones[1].output = 10;
    remote.update_key_group(1, 1, &key_group).unwrap();
    assert_eq!(remote.key_group(1, 1).unwrap(), key_group);

    let sample = Sample {
        name: "PIANO C3    ".to_string(),
        sample_rate: 44100,
        sample_length: 99,
        ..Default::default()
    };
    remote.update_sample(7, &sample).unwrap();
    assert_eq!(remote.sample(7).unwrap(), sample);

    let mut echo = Echo::default();
    echo.base.name = "SLAPBACK    ".to_string();
    echo.delays = [120, 240, 360];
    let effect = Effect::Echo(echo);
    remote.update_effect(3, &effect).unwrap();
    assert_eq!(remote.effect(3).unwrap(), effect);

    let reverb = Reverb {
        pre_delay: 300,
        decay_time: 80,
        ..Default::default()
    };
    remote.update_reverb(0, &reverb).unwrap();
    assert_eq!(remote.reverb(0).unwrap().pre_delay, 300);

    assert_eq!(remote.transport().writes().len(), 5);
}

#[test]
fn test_missing_header_is_not_found() {
    let remote = remote();
    assert_eq!(
        remote.program(42),
        Err(Error::NotFound(HeaderAddress::program(42)))
    );
    assert_eq!(
        remote.update_sample_field(5, 1, 3.0),
        Err(Error::NotFound(HeaderAddress::sample(5)))
    );
}

#[test]
fn test_unknown_effect_discriminant_is_rejected() {
    let remote = remote();
    let mut block = vec![0u8; 64];
    block[13] = 2;
    remote
        .transport()
        .insert(HeaderAddress::effect(0), block)
        .unwrap();

    assert_eq!(
        remote.effect(0),
        Err(Error::Header(HeaderError::UnknownEffectType(2)))
    );
    assert_eq!(
        remote.update_effect_field(0, 36, 1.0),
        Err(Error::Header(HeaderError::UnknownEffectType(2)))
    );
}

// ---------------------------------------------------------------------------
// 2. Field updates and renames
// ---------------------------------------------------------------------------

#[test]
fn test_field_update_keeps_unmodelled_bytes() {
    let remote = remote();
    let address = HeaderAddress::key_group(0, 0);
    let mut block = vec![0u8; 192];
    block[161] = 0xAA;
    block[162] = 0x55;
    remote.transport().insert(address, block).unwrap();

    remote.update_key_group_field(0, 0, 3, 24.0).unwrap();
    remote.update_key_group_field(0, 0, 48, -1.54).unwrap();

    let resident = remote.transport().get(address).unwrap();
    assert_eq!(&resident[161..163], &[0xAA, 0x55]);
    assert_eq!(&resident[48..50], &[118, 254]);
    let key_group = remote.key_group(0, 0).unwrap();
    assert_eq!(key_group.span.low_note, 24);
    assert_eq!(key_group.zones[0].tune, -1.54);
}

#[test]
fn test_effect_field_uses_resident_variant() {
    let remote = remote();
    remote
        .update_effect(1, &Effect::Echo(Echo::default()))
        .unwrap();

    remote.update_effect_field(1, 58, -25.0).unwrap();
    match remote.effect(1).unwrap() {
        Effect::Echo(echo) => assert_eq!(echo.pans[0], -25),
        other => panic!("expected echo, got {other:?}"),
    }

    // 36 is a chorus offset; echo leaves it unmapped
    assert_eq!(
        remote.update_effect_field(1, 36, 1.0),
        Err(Error::Header(HeaderError::UnsupportedField { index: 36 }))
    );
    assert_eq!(
        remote.update_effect_field(1, 13, 6.0),
        Err(Error::Header(HeaderError::UnsupportedField { index: 13 }))
    );
    assert_eq!(
        remote.transport().get(HeaderAddress::effect(1)).unwrap()[13],
        EffectType::Echo.to_byte()
    );
}

#[test]
fn test_renames_patch_only_the_name() {
    let remote = remote();
    remote
        .update_effect(0, &Effect::Chorus(Chorus::default()))
        .unwrap();
    remote.update_reverb(0, &Reverb::default()).unwrap();
    remote.update_sample(0, &Sample::default()).unwrap();
    remote.update_key_group(0, 0, &KeyGroup::default()).unwrap();
    remote.transport().clear_writes();

    remote.rename_effect(0, "ensemble").unwrap();
    remote.rename_reverb(0, "hall").unwrap();
    remote.rename_sample(0, "kick-01").unwrap();
    remote.rename_key_group_zone(0, 0, 82, "snare").unwrap();

    assert!(remote
        .transport()
        .writes()
        .iter()
        .all(|write| matches!(write, WriteRecord::Partial { len: 12, .. })));
    assert_eq!(remote.effect(0).unwrap().base().name, "ENSEMBLE    ");
    assert_eq!(remote.reverb(0).unwrap().base.name, "HALL        ");
    assert_eq!(remote.sample(0).unwrap().name, "KICK-01     ");
    assert_eq!(
        remote.key_group(0, 0).unwrap().zones[2].sample_name,
        "SNARE       "
    );
}

#[test]
fn test_invalid_edits_send_nothing() {
    let remote = remote();
    remote.update_program(0, &Program::default()).unwrap();
    remote.transport().clear_writes();

    assert!(matches!(
        remote.rename_program(0, "bad/name"),
        Err(Error::Header(HeaderError::Codec(_)))
    ));
    assert_eq!(
        remote.rename_key_group_zone(0, 0, 35, "x"),
        Err(Error::Header(HeaderError::UnsupportedNameField { index: 35 }))
    );
    assert!(matches!(
        remote.update_program_field(0, 75, 51.0),
        Err(Error::Header(HeaderError::Codec(_)))
    ));
    assert!(remote.transport().writes().is_empty());
}

// ---------------------------------------------------------------------------
// 3. Configuration
// ---------------------------------------------------------------------------

#[test]
fn test_s2800_rejects_high_zone_outputs() {
    init_tracing();
    let remote = RemoteSampler::builder(MemoryTransport::new())
        .model(SamplerModel::S2800)
        .build()
        .unwrap();
    let mut key_group = KeyGroup::default();
    key_group.zones[0].output = 5;

    assert_eq!(
        remote.update_key_group(0, 0, &key_group),
        Err(Error::ZoneOutputOutOfRange { output: 5, max: 4 })
    );
    key_group.zones[0].output = 4;
    remote.update_key_group(0, 0, &key_group).unwrap();
    assert_eq!(
        remote.update_key_group_field(0, 0, 139, 10.0),
        Err(Error::ZoneOutputOutOfRange { output: 10, max: 4 })
    );
}

/// Transport that drops every write on the floor.
struct LossyTransport {
    inner: MemoryTransport,
}

impl SysexTransport for LossyTransport {
    fn read_header(&self, address: HeaderAddress) -> librarian_remote::Result<Vec<u8>> {
        self.inner.read_header(address)
    }

    fn write_header(&self, _address: HeaderAddress, _block: &[u8]) -> librarian_remote::Result<()> {
        Ok(())
    }

    fn write_header_bytes(
        &self,
        _address: HeaderAddress,
        _offset: usize,
        _bytes: &[u8],
    ) -> librarian_remote::Result<()> {
        Ok(())
    }
}

#[test]
fn test_verify_writes_detects_lost_write() {
    init_tracing();
    let inner = MemoryTransport::new();
    let address = HeaderAddress::program(0);
    inner
        .insert(address, ProgramMapper.encode(&Program::default()).unwrap())
        .unwrap();

    let program = Program {
        number_of_key_groups: 3,
        ..Default::default()
    };

    let unverified = RemoteSampler::builder(LossyTransport {
        inner: MemoryTransport::new(),
    })
    .build()
    .unwrap();
    unverified.update_program(0, &program).unwrap();

    let verified = RemoteSampler::builder(LossyTransport { inner })
        .verify_writes(true)
        .build()
        .unwrap();
    assert!(matches!(
        verified.update_program(0, &program),
        Err(Error::Transport(_))
    ));
    verified.update_program(0, &Program::default()).unwrap();
}

// ---------------------------------------------------------------------------
// 4. Shared transport
// ---------------------------------------------------------------------------

#[test]
fn test_concurrent_field_updates() {
    init_tracing();
    let transport = Arc::new(MemoryTransport::new());
    let remote = Arc::new(RemoteSampler::builder(transport.clone()).build().unwrap());
    for number in 0..8 {
        remote.update_program(number, &Program::default()).unwrap();
    }

    let handles: Vec<_> = (0..8u16)
        .map(|number| {
            let remote = remote.clone();
            thread::spawn(move || {
                for transpose in -10..=10 {
                    remote
                        .update_program_field(number, 75, transpose as f64)
                        .unwrap();
                }
                remote
                    .update_program_field(number, 75, number as f64)
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for number in 0..8u16 {
        assert_eq!(
            remote.program(number).unwrap().midi.transpose,
            number as i16
        );
    }
    assert_eq!(transport.writes().len(), 8 + 8 * 22);
}
