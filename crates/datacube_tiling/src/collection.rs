use crate::error::TilingError;
use crate::fill::ValueSource;
use crate::padding::ZeroBlock;
use crate::unit::AtomicUnit;

use datacube_core::{ScalarFormat, ATOMIC_CHANNELS};

use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// Addresses one atomic unit: the cube replica it came from and its block position within that
/// replica.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct UnitKey {
    pub replica: usize,
    pub position: usize,
}

/// An ordered collection of atomic units, grouped by cube replica then block position.
///
/// Units live in one flat `Vec`; the (replica, position) key maps to the flat index
/// `replica * units_per_replica + position`. Every unit holds exactly `channel_depth` channels,
/// which is the atomic depth after an aligned build or the atomic depth plus the zero padding
/// after a merge.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AtomicCollection {
    units: Vec<AtomicUnit>,
    replicas: usize,
    units_per_replica: usize,
    channel_depth: usize,
    format: ScalarFormat,
}

impl AtomicCollection {
    /// Allocates `replicas * units_per_replica` units at the atomic channel depth, filled from
    /// `source` in key order.
    pub(crate) fn generate(
        replicas: usize,
        units_per_replica: usize,
        format: ScalarFormat,
        source: &mut impl ValueSource,
    ) -> Self {
        let depth = ATOMIC_CHANNELS as usize;
        let units = (0..replicas * units_per_replica)
            .map(|_| AtomicUnit::fill_from(depth, source))
            .collect();

        Self {
            units,
            replicas,
            units_per_replica,
            channel_depth: depth,
            format,
        }
    }

    /// Appends the zero block's channels onto every unit, channel-axis only.
    ///
    /// The block's replica and spatial extents must line up one-to-one with this collection's.
    pub(crate) fn merge_zero_block(&mut self, block: &ZeroBlock) -> Result<(), TilingError> {
        if block.replicas() != self.replicas || block.units_per_replica() != self.units_per_replica
        {
            return Err(TilingError::ShapeMismatch {
                collection_replicas: self.replicas,
                collection_units: self.units_per_replica,
                block_replicas: block.replicas(),
                block_units: block.units_per_replica(),
            });
        }

        for unit in self.units.iter_mut() {
            unit.append_channels(block.channel_slice());
        }
        self.channel_depth += block.pad_channels();

        Ok(())
    }

    /// The number of cube replicas represented.
    #[inline]
    pub fn replicas(&self) -> usize {
        self.replicas
    }

    /// The number of units in each replica.
    #[inline]
    pub fn units_per_replica(&self) -> usize {
        self.units_per_replica
    }

    /// The uniform channel depth of every unit.
    #[inline]
    pub fn channel_depth(&self) -> usize {
        self.channel_depth
    }

    /// The scalar format the cube declared for these values.
    #[inline]
    pub fn format(&self) -> ScalarFormat {
        self.format
    }

    /// Total units across all replicas.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The unit at `key`, or `None` when either index is out of range.
    #[inline]
    pub fn get(&self, key: UnitKey) -> Option<&AtomicUnit> {
        if key.replica >= self.replicas || key.position >= self.units_per_replica {
            return None;
        }

        self.units
            .get(key.replica * self.units_per_replica + key.position)
    }

    /// All units in key order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, AtomicUnit> {
        self.units.iter()
    }

    /// All keys in storage order: replica-major, then position.
    pub fn keys(&self) -> impl Iterator<Item = UnitKey> {
        iproduct!(0..self.replicas, 0..self.units_per_replica)
            .map(|(replica, position)| UnitKey { replica, position })
    }
}

impl<'a> IntoIterator for &'a AtomicCollection {
    type Item = &'a AtomicUnit;
    type IntoIter = core::slice::Iter<'a, AtomicUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fill::ConstantFill;

    use datacube_core::Precision;
    use pretty_assertions::assert_eq;

    fn small_collection(replicas: usize, units_per_replica: usize) -> AtomicCollection {
        AtomicCollection::generate(
            replicas,
            units_per_replica,
            Precision::Fp32.format(),
            &mut ConstantFill(1.0),
        )
    }

    #[test]
    fn generated_units_all_have_the_atomic_depth() {
        let collection = small_collection(2, 4);

        assert_eq!(collection.len(), 8);
        assert_eq!(collection.channel_depth(), 64);
        for unit in collection.iter() {
            assert_eq!(unit.channel_depth(), 64);
        }
    }

    #[test]
    fn keys_walk_replica_major_storage_order() {
        let collection = small_collection(2, 3);
        let keys: Vec<_> = collection.keys().collect();

        assert_eq!(keys.len(), collection.len());
        assert_eq!(
            keys[..4],
            [
                UnitKey {
                    replica: 0,
                    position: 0
                },
                UnitKey {
                    replica: 0,
                    position: 1
                },
                UnitKey {
                    replica: 0,
                    position: 2
                },
                UnitKey {
                    replica: 1,
                    position: 0
                },
            ]
        );
        for key in keys {
            assert!(collection.get(key).is_some());
        }
    }

    #[test]
    fn out_of_range_keys_are_none() {
        let collection = small_collection(2, 3);

        assert!(collection
            .get(UnitKey {
                replica: 2,
                position: 0
            })
            .is_none());
        assert!(collection
            .get(UnitKey {
                replica: 0,
                position: 3
            })
            .is_none());
    }

    #[test]
    fn merging_a_zero_block_grows_every_unit() {
        let mut collection = small_collection(2, 4);
        let block = ZeroBlock::new(32, 2, 4);

        collection.merge_zero_block(&block).unwrap();

        assert_eq!(collection.channel_depth(), 96);
        for unit in collection.iter() {
            assert_eq!(unit.channel_depth(), 96);
            assert!(unit.values()[64..].iter().all(|&v| v == 0.0));
            assert!(unit.values()[..64].iter().all(|&v| v == 1.0));
        }
    }

    #[test]
    fn mismatched_zero_block_is_rejected() {
        let mut collection = small_collection(2, 4);
        let block = ZeroBlock::new(32, 1, 4);

        assert_eq!(
            collection.merge_zero_block(&block),
            Err(TilingError::ShapeMismatch {
                collection_replicas: 2,
                collection_units: 4,
                block_replicas: 1,
                block_units: 4,
            })
        );
        // The failed merge must not have touched the units.
        assert_eq!(collection.channel_depth(), 64);
    }
}
