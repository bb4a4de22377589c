//! Partial updates: a patch spliced into a full encode must equal the full
//! encode of the record with only that field changed.

mod common;

use common::{noise_block, populated, representative_values, NAMES};
use librarian_header::effect::{CHORUS_LAYOUT, DELAY_LAYOUT, ECHO_LAYOUT, PITCH_SHIFT_LAYOUT};
use librarian_header::*;
use proptest::prelude::*;
use std::fmt::Debug;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn assert_patch_matches_full_encode<R>(layout: &Layout<R>, record: &R, index: usize, value: f64)
where
    R: Default + Clone + PartialEq + Debug + 'static,
{
    let mut block = layout.encode(record).unwrap();
    let patch = layout.encode_partial(index, value).unwrap();
    let width = layout.field_at(index).unwrap().width();
    assert_eq!(patch.len(), width, "{} offset {}", layout.record, index);
    apply_patch(&mut block, index, &patch).unwrap();

    let mut changed = record.clone();
    layout.set(&mut changed, index, value).unwrap();
    assert_eq!(
        block,
        layout.encode(&changed).unwrap(),
        "{} offset {} value {}",
        layout.record,
        index,
        value
    );
}

fn assert_every_field<R>(layout: &Layout<R>)
where
    R: Default + Clone + PartialEq + Debug + 'static,
{
    let records = [
        populated(layout, 0),
        populated(layout, 3),
        layout.decode(&noise_block(layout.size, 0x1234_5678)).unwrap(),
    ];
    for record in &records {
        for field in layout.fields() {
            if field.is_name() {
                for name in NAMES {
                    let mut block = layout.encode(record).unwrap();
                    let patch = layout.encode_name(field.offset(), name).unwrap();
                    apply_patch(&mut block, field.offset(), &patch).unwrap();
                    let mut changed = record.clone();
                    layout.set_name(&mut changed, field.offset(), name).unwrap();
                    assert_eq!(block, layout.encode(&changed).unwrap());
                }
                continue;
            }
            for value in representative_values(field.codec().unwrap()) {
                assert_patch_matches_full_encode(layout, record, field.offset(), value);
            }
        }
    }
}

fn assert_unmapped_offsets_rejected<R: Default + 'static>(layout: &Layout<R>) {
    for index in 0..layout.size + 4 {
        match layout.field_at(index) {
            Some(field) if !field.is_name() => {}
            _ => assert_eq!(
                layout.encode_partial(index, 0.0),
                Err(Error::UnsupportedField { index }),
                "{} offset {}",
                layout.record,
                index
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// 1. Every offset of every record type
// ---------------------------------------------------------------------------

#[test]
fn test_program_partial_equivalence() {
    assert_every_field(&PROGRAM_LAYOUT);
}

#[test]
fn test_key_group_partial_equivalence() {
    assert_every_field(&KEY_GROUP_LAYOUT);
}

#[test]
fn test_sample_partial_equivalence() {
    assert_every_field(&SAMPLE_LAYOUT);
}

#[test]
fn test_effect_partial_equivalence() {
    assert_every_field(&CHORUS_LAYOUT);
    assert_every_field(&DELAY_LAYOUT);
    assert_every_field(&ECHO_LAYOUT);
    assert_every_field(&PITCH_SHIFT_LAYOUT);
}

#[test]
fn test_reverb_partial_equivalence() {
    assert_every_field(&REVERB_LAYOUT);
}

#[test]
fn test_unmapped_offsets_are_rejected() {
    assert_unmapped_offsets_rejected(&PROGRAM_LAYOUT);
    assert_unmapped_offsets_rejected(&KEY_GROUP_LAYOUT);
    assert_unmapped_offsets_rejected(&SAMPLE_LAYOUT);
    assert_unmapped_offsets_rejected(&REVERB_LAYOUT);
    assert_unmapped_offsets_rejected(&ECHO_LAYOUT);
}

// ---------------------------------------------------------------------------
// 2. Effect mapper keeps the resident discriminant
// ---------------------------------------------------------------------------

#[test]
fn test_effect_patch_preserves_discriminant() {
    let effect = Effect::Echo(populated(&ECHO_LAYOUT, 2));
    let mapper = EffectMapper::for_effect(&effect);
    let mut block = mapper.encode(&effect).unwrap();

    let patch = mapper.encode_partial(58, -50.0).unwrap();
    apply_patch(&mut block, 58, &patch).unwrap();

    assert_eq!(block[13], EffectType::Echo.to_byte());
    match EffectMapper::from_block(&block).unwrap().decode(&block).unwrap() {
        Effect::Echo(echo) => assert_eq!(echo.pans[0], -50),
        other => panic!("expected echo, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// 3. Random resident blocks
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_key_group_patch_on_resident_block(
        resident in prop::collection::vec(any::<u8>(), KEY_GROUP_SIZE),
        zone in 0usize..4,
        tune in -5000i32..=5000,
    ) {
        let value = tune as f64 / 100.0;
        let index = 48 + 24 * zone;
        let record = KeyGroupMapper.decode(&resident).unwrap();

        let mut block = KeyGroupMapper.encode(&record).unwrap();
        apply_patch(&mut block, index, &KeyGroupMapper.encode_partial(index, value).unwrap()).unwrap();

        let patched = KeyGroupMapper.decode(&block).unwrap();
        prop_assert_eq!(patched.zones[zone].tune, value);
        let mut expected = record.clone();
        expected.zones[zone].tune = value;
        prop_assert_eq!(patched, expected);
    }

    #[test]
    fn prop_sample_loop_length_patch(
        resident in prop::collection::vec(any::<u8>(), SAMPLE_SIZE),
        whole in 0u32..=100_000,
        thousandths in 0u32..1000,
    ) {
        let value = (whole as u64 * 1000 + thousandths as u64) as f64 / 1000.0;
        let record = SampleMapper.decode(&resident).unwrap();

        let mut block = SampleMapper.encode(&record).unwrap();
        apply_patch(&mut block, 42, &SampleMapper.encode_partial(42, value).unwrap()).unwrap();
        prop_assert_eq!(SampleMapper.decode(&block).unwrap().loops[0].loop_length, value);
    }
}
