use serde::{Deserialize, Serialize};

/// The all-zero channels that bring a non-aligned cube up to the next multiple of the atomic
/// depth.
///
/// Shaped `replicas x units_per_replica x pad_channels`, 1x1 spatial. Every channel slice is
/// identically zero, so one shared buffer backs all of them. A zero block only lives for the
/// duration of a merge; it is not part of the finished collection's shape.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ZeroBlock {
    zeros: Vec<f32>,
    replicas: usize,
    units_per_replica: usize,
}

impl ZeroBlock {
    /// Builds the zero block for `pad_channels` missing channels. Pure and deterministic.
    pub fn new(pad_channels: u32, replicas: usize, units_per_replica: usize) -> Self {
        Self {
            zeros: vec![0.0; pad_channels as usize],
            replicas,
            units_per_replica,
        }
    }

    /// The number of zero channels appended to each unit.
    #[inline]
    pub fn pad_channels(&self) -> usize {
        self.zeros.len()
    }

    #[inline]
    pub fn replicas(&self) -> usize {
        self.replicas
    }

    #[inline]
    pub fn units_per_replica(&self) -> usize {
        self.units_per_replica
    }

    /// The zero channel slice appended to a unit. The same slice serves every
    /// (replica, position) pair.
    #[inline]
    pub fn channel_slice(&self) -> &[f32] {
        &self.zeros
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

    #[test]
    fn zero_block_is_all_zeros() {
        let block = ZeroBlock::new(48, 2, 6);

        assert_eq!(block.pad_channels(), 48);
        assert_eq!(block.replicas(), 2);
        assert_eq!(block.units_per_replica(), 6);
        assert!(block.channel_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn aligned_cubes_get_an_empty_block() {
        let block = ZeroBlock::new(0, 1, 16);

        assert_eq!(block.pad_channels(), 0);
        assert!(block.channel_slice().is_empty());
    }
}
