use crate::fill::ValueSource;

use datacube_core::ScalarFormat;

use serde::{Deserialize, Serialize};

/// The indivisible tile consumed by the compute unit: 1x1 spatial, one scalar per channel.
///
/// Units are allocated at the atomic channel depth and only ever grow by having zero channels
/// appended during padding resolution.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AtomicUnit {
    values: Vec<f32>,
}

impl AtomicUnit {
    /// Allocates a unit of `depth` channels with values drawn from `source`.
    pub(crate) fn fill_from(depth: usize, source: &mut impl ValueSource) -> Self {
        let mut values = vec![0.0; depth];
        source.fill(&mut values);

        Self { values }
    }

    /// Grows this unit along the channel axis.
    pub(crate) fn append_channels(&mut self, values: &[f32]) {
        self.values.extend_from_slice(values);
    }

    /// The number of channels this unit currently holds.
    #[inline]
    pub fn channel_depth(&self) -> usize {
        self.values.len()
    }

    /// The scalar values, one per channel.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// The values reinterpreted as raw bytes, for handing to a consumer.
    #[inline]
    pub fn as_raw_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }

    /// How many bytes this unit occupies once encoded at `format`.
    #[inline]
    pub fn encoded_len(&self, format: ScalarFormat) -> usize {
        format.encoded_len(self.values.len())
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    use crate::fill::ConstantFill;

    use datacube_core::Precision;

    #[test]
    fn filled_unit_draws_every_value_from_the_source() {
        let unit = AtomicUnit::fill_from(64, &mut ConstantFill(0.25));

        assert_eq!(unit.channel_depth(), 64);
        assert!(unit.values().iter().all(|&v| v == 0.25));
    }

    #[test]
    fn appended_channels_grow_the_depth() {
        let mut unit = AtomicUnit::fill_from(64, &mut ConstantFill(1.0));
        unit.append_channels(&[0.0; 32]);

        assert_eq!(unit.channel_depth(), 96);
        assert!(unit.values()[64..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn raw_bytes_cover_four_bytes_per_value() {
        let unit = AtomicUnit::fill_from(64, &mut ConstantFill(0.0));

        assert_eq!(unit.as_raw_bytes().len(), 256);
        assert_eq!(unit.encoded_len(Precision::Int8.format()), 64);
        assert_eq!(unit.encoded_len(Precision::Fp16.format()), 128);
    }
}
