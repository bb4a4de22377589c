//! Remote control tests through the umbrella crate (requires "remote" feature)
//!
//! Run with:
//! ```bash
//! cargo test -p librarian --test remote_integration --features remote
//! ```

#![cfg(feature = "remote")]

use librarian::prelude::*;
use librarian::remote::WriteRecord;
use librarian::{Echo, Error, PitchShift};

fn remote(model: SamplerModel) -> RemoteSampler<MemoryTransport> {
    RemoteSampler::builder(MemoryTransport::new())
        .model(model)
        .verify_writes(true)
        .build()
        .unwrap()
}

// =============================================================================
// Editing Session
// =============================================================================

#[test]
fn test_editing_session() -> librarian::Result<()> {
    let remote = remote(SamplerModel::S3200);

    remote.update_program(0, &Program::default())?;
    remote.rename_program(0, "choir")?;
    remote.update_program_field(0, 75, 7.0)?;

    let mut key_group = KeyGroup::default();
    key_group.zones[0].output = 10;
    remote.update_key_group(0, 0, &key_group)?;
    remote.update_key_group_field(0, 0, 5, -49.99)?;

    let program = remote.program(0)?;
    assert_eq!(program.name, "CHOIR       ");
    assert_eq!(program.midi.transpose, 7);
    assert_eq!(remote.key_group(0, 0)?.span.tune, -49.99);
    Ok(())
}

#[test]
fn test_effect_variant_swap() -> librarian::Result<()> {
    let remote = remote(SamplerModel::S3000);
    remote.update_effect(0, &Effect::Echo(Echo::default()))?;
    remote.update_effect(0, &Effect::PitchShift(PitchShift::default()))?;

    // the resident block is now a pitch shifter, so its offsets apply
    remote.update_effect_field(0, 39, 12.5)?;
    match remote.effect(0)? {
        Effect::PitchShift(shift) => assert_eq!(shift.left_tune_offset, 12.5),
        other => panic!("expected pitch shift, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_remote_errors_convert_to_umbrella_error() {
    let remote = remote(SamplerModel::S2800);
    let result: librarian::Result<()> = (|| {
        remote.update_reverb_field(3, 33, 10.0)?;
        Ok(())
    })();
    assert!(matches!(
        result,
        Err(Error::Remote(librarian::remote::Error::NotFound(_)))
    ));
}

#[test]
fn test_write_log_through_prelude() {
    let remote = remote(SamplerModel::S3000);
    remote.update_reverb(2, &Reverb::default()).unwrap();
    remote.rename_reverb(2, "plate").unwrap();
    assert_eq!(
        remote.transport().writes(),
        vec![
            WriteRecord::Full(HeaderAddress::reverb(2)),
            WriteRecord::Partial {
                address: HeaderAddress::reverb(2),
                offset: 0,
                len: 12
            },
        ]
    );
}
