//! Header read/patch service over a [`SysexTransport`].

use librarian_header::effect::EFFECT_NAME_OFFSET;
use librarian_header::key_group::{ZONE_COUNT, ZONE_OUTPUT_OFFSET};
use librarian_header::program::PROGRAM_NAME_OFFSET;
use librarian_header::sample::SAMPLE_NAME_OFFSET;
use librarian_header::{
    Effect, EffectMapper, HeaderMapper, KeyGroup, KeyGroupMapper, Patch, Program, ProgramMapper,
    Reverb, ReverbMapper, Sample, SampleMapper,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::transport::{HeaderAddress, SysexTransport};

/// Sampler model. Decides how many individual outputs a zone can route to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplerModel {
    S2800,
    #[default]
    S3000,
    S3200,
}

impl SamplerModel {
    /// Highest zone output routing value the model accepts.
    pub const fn max_zone_output(self) -> u8 {
        match self {
            SamplerModel::S2800 => 4,
            SamplerModel::S3000 | SamplerModel::S3200 => 10,
        }
    }
}

/// Remote editor for one connected sampler.
///
/// Every operation is a blocking round trip through the transport. Reads
/// decode the resident block; full updates encode and replace it; field
/// updates and renames send only the bytes of one field.
pub struct RemoteSampler<T: SysexTransport> {
    transport: T,
    model: SamplerModel,
    max_zone_output: u8,
    verify_writes: bool,
}

impl<T: SysexTransport> RemoteSampler<T> {
    /// Create a new remote sampler builder.
    pub fn builder(transport: T) -> RemoteSamplerBuilder<T> {
        RemoteSamplerBuilder {
            transport,
            model: SamplerModel::default(),
            zone_output_limit: None,
            verify_writes: false,
        }
    }

    pub fn model(&self) -> SamplerModel {
        self.model
    }

    /// Highest zone output this sampler accepts in writes.
    pub fn max_zone_output(&self) -> u8 {
        self.max_zone_output
    }

    pub fn verify_writes(&self) -> bool {
        self.verify_writes
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // Programs
    // =========================================================================

    pub fn program(&self, number: u16) -> Result<Program> {
        self.read(&ProgramMapper, HeaderAddress::program(number))
    }

    pub fn update_program(&self, number: u16, program: &Program) -> Result<()> {
        self.write(&ProgramMapper, HeaderAddress::program(number), program)
    }

    pub fn update_program_field(&self, number: u16, index: usize, value: f64) -> Result<()> {
        let patch = ProgramMapper.encode_partial(index, value)?;
        self.patch(HeaderAddress::program(number), index, &patch)
    }

    pub fn rename_program(&self, number: u16, name: &str) -> Result<()> {
        let patch = ProgramMapper.encode_name(PROGRAM_NAME_OFFSET, name)?;
        self.patch(HeaderAddress::program(number), PROGRAM_NAME_OFFSET, &patch)
    }

    // =========================================================================
    // Key groups
    // =========================================================================

    pub fn key_group(&self, program: u16, key_group: u8) -> Result<KeyGroup> {
        self.read(&KeyGroupMapper, HeaderAddress::key_group(program, key_group))
    }

    pub fn update_key_group(&self, program: u16, key_group: u8, record: &KeyGroup) -> Result<()> {
        for zone in &record.zones {
            self.check_zone_output(zone.output)?;
        }
        self.write(
            &KeyGroupMapper,
            HeaderAddress::key_group(program, key_group),
            record,
        )
    }

    pub fn update_key_group_field(
        &self,
        program: u16,
        key_group: u8,
        index: usize,
        value: f64,
    ) -> Result<()> {
        let patch = KeyGroupMapper.encode_partial(index, value)?;
        if (ZONE_OUTPUT_OFFSET..ZONE_OUTPUT_OFFSET + ZONE_COUNT).contains(&index) {
            self.check_zone_output(patch[0])?;
        }
        self.patch(HeaderAddress::key_group(program, key_group), index, &patch)
    }

    /// Renames the sample a zone plays. `index` is one of the zone name offsets.
    pub fn rename_key_group_zone(
        &self,
        program: u16,
        key_group: u8,
        index: usize,
        name: &str,
    ) -> Result<()> {
        let patch = KeyGroupMapper.encode_name(index, name)?;
        self.patch(HeaderAddress::key_group(program, key_group), index, &patch)
    }

    // =========================================================================
    // Samples
    // =========================================================================

    pub fn sample(&self, number: u16) -> Result<Sample> {
        self.read(&SampleMapper, HeaderAddress::sample(number))
    }

    pub fn update_sample(&self, number: u16, sample: &Sample) -> Result<()> {
        self.write(&SampleMapper, HeaderAddress::sample(number), sample)
    }

    pub fn update_sample_field(&self, number: u16, index: usize, value: f64) -> Result<()> {
        let patch = SampleMapper.encode_partial(index, value)?;
        self.patch(HeaderAddress::sample(number), index, &patch)
    }

    pub fn rename_sample(&self, number: u16, name: &str) -> Result<()> {
        let patch = SampleMapper.encode_name(SAMPLE_NAME_OFFSET, name)?;
        self.patch(HeaderAddress::sample(number), SAMPLE_NAME_OFFSET, &patch)
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Reads an effect, choosing the variant from the resident discriminant.
    pub fn effect(&self, number: u16) -> Result<Effect> {
        let block = self.transport.read_header(HeaderAddress::effect(number))?;
        let mapper = EffectMapper::from_block(&block)?;
        Ok(mapper.decode(&block)?)
    }

    pub fn update_effect(&self, number: u16, effect: &Effect) -> Result<()> {
        let mapper = EffectMapper::for_effect(effect);
        self.write(&mapper, HeaderAddress::effect(number), effect)
    }

    /// Patches one field of the resident effect, using that effect's variant layout.
    pub fn update_effect_field(&self, number: u16, index: usize, value: f64) -> Result<()> {
        let address = HeaderAddress::effect(number);
        let mapper = EffectMapper::from_block(&self.transport.read_header(address)?)?;
        let patch = mapper.encode_partial(index, value)?;
        self.patch(address, index, &patch)
    }

    pub fn rename_effect(&self, number: u16, name: &str) -> Result<()> {
        let address = HeaderAddress::effect(number);
        let mapper = EffectMapper::from_block(&self.transport.read_header(address)?)?;
        let patch = mapper.encode_name(EFFECT_NAME_OFFSET, name)?;
        self.patch(address, EFFECT_NAME_OFFSET, &patch)
    }

    // =========================================================================
    // Reverbs
    // =========================================================================

    pub fn reverb(&self, number: u16) -> Result<Reverb> {
        self.read(&ReverbMapper, HeaderAddress::reverb(number))
    }

    pub fn update_reverb(&self, number: u16, reverb: &Reverb) -> Result<()> {
        self.write(&ReverbMapper, HeaderAddress::reverb(number), reverb)
    }

    pub fn update_reverb_field(&self, number: u16, index: usize, value: f64) -> Result<()> {
        let patch = ReverbMapper.encode_partial(index, value)?;
        self.patch(HeaderAddress::reverb(number), index, &patch)
    }

    pub fn rename_reverb(&self, number: u16, name: &str) -> Result<()> {
        let patch = ReverbMapper.encode_name(EFFECT_NAME_OFFSET, name)?;
        self.patch(HeaderAddress::reverb(number), EFFECT_NAME_OFFSET, &patch)
    }

    // =========================================================================
    // Transport round trips
    // =========================================================================

    fn read<M: HeaderMapper>(&self, mapper: &M, address: HeaderAddress) -> Result<M::Record> {
        debug!("Reading {}", address);
        let block = self.transport.read_header(address)?;
        Ok(mapper.decode(&block)?)
    }

    fn write<M: HeaderMapper>(
        &self,
        mapper: &M,
        address: HeaderAddress,
        record: &M::Record,
    ) -> Result<()> {
        let block = mapper.encode(record)?;
        debug!("Writing {} ({} bytes)", address, block.len());
        self.transport.write_header(address, &block)?;

        if self.verify_writes {
            let resident = self.transport.read_header(address)?;
            if resident != block {
                warn!("Write verification failed for {}", address);
                return Err(Error::Transport(format!(
                    "{} read back differs from the block written",
                    address
                )));
            }
        }
        Ok(())
    }

    fn patch(&self, address: HeaderAddress, index: usize, patch: &Patch) -> Result<()> {
        debug!("Patching {} at {}: {:?}", address, index, patch.as_slice());
        self.transport.write_header_bytes(address, index, patch)
    }

    fn check_zone_output(&self, output: u8) -> Result<()> {
        if output > self.max_zone_output {
            return Err(Error::ZoneOutputOutOfRange {
                output,
                max: self.max_zone_output,
            });
        }
        Ok(())
    }
}

/// Builder for [`RemoteSampler`].
pub struct RemoteSamplerBuilder<T: SysexTransport> {
    transport: T,
    model: SamplerModel,
    zone_output_limit: Option<u8>,
    verify_writes: bool,
}

impl<T: SysexTransport> RemoteSamplerBuilder<T> {
    /// Set the sampler model (default: S3000).
    pub fn model(mut self, model: SamplerModel) -> Self {
        self.model = model;
        self
    }

    /// Restrict zone outputs below the model maximum, e.g. when the output
    /// expansion board is not fitted.
    pub fn zone_output_limit(mut self, limit: u8) -> Self {
        self.zone_output_limit = Some(limit);
        self
    }

    /// Read every full write back and compare (default: off).
    pub fn verify_writes(mut self, verify: bool) -> Self {
        self.verify_writes = verify;
        self
    }

    pub fn build(self) -> Result<RemoteSampler<T>> {
        let model_max = self.model.max_zone_output();
        let max_zone_output = match self.zone_output_limit {
            Some(limit) if limit > model_max => {
                return Err(Error::InvalidConfig(format!(
                    "zone output limit {} exceeds the {:?} maximum of {}",
                    limit, self.model, model_max
                )));
            }
            Some(limit) => limit,
            None => model_max,
        };

        Ok(RemoteSampler {
            transport: self.transport,
            model: self.model,
            max_zone_output,
            verify_writes: self.verify_writes,
        })
    }
}
