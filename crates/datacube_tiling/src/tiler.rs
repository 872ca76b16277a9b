//! The tiler drives one decomposition pass: validate the cube, derive its counts, allocate the
//! units, and merge in the zero block when the channel count is not aligned.

use crate::collection::AtomicCollection;
use crate::error::TilingError;
use crate::fill::{UniformFill, ValueSource};
use crate::padding::ZeroBlock;

use datacube_core::{channels_aligned, channels_to_pad, AtomicCounts, Cube, ATOMIC_CHANNELS};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The finished decomposition of one cube: the units, their counts, and the resolved channel
/// depth per unit (the atomic depth, or atomic depth plus padding on the non-aligned path).
#[derive(Clone, Debug, PartialEq)]
pub struct CubeTiling {
    pub collection: AtomicCollection,
    pub counts: AtomicCounts,
    pub channel_depth: usize,
}

/// What the tiler remembers about its most recent build, for introspection.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TilingReport {
    pub counts: AtomicCounts,
    pub channel_depth: usize,
}

/// Decomposes [`Cube`]s into atomic-unit collections.
///
/// Each call to [`build`](Self::build) runs a fresh cycle over its input cube; the only state
/// kept across calls is the [`TilingReport`] of the last successful build. The finished
/// collection itself is handed to the caller by value.
#[derive(Clone, Debug)]
pub struct CubeTiler<S = UniformFill> {
    source: S,
    last: Option<TilingReport>,
}

impl CubeTiler<UniformFill> {
    /// A tiler with the default uniform-random fill.
    pub fn new() -> Self {
        Self::with_source(UniformFill::new())
    }
}

impl Default for CubeTiler<UniformFill> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> CubeTiler<S>
where
    S: ValueSource,
{
    /// A tiler drawing unit values from `source`.
    pub fn with_source(source: S) -> Self {
        Self { source, last: None }
    }

    /// The report of the last successful build, if any.
    #[inline]
    pub fn last_report(&self) -> Option<TilingReport> {
        self.last
    }

    /// Decomposes `cube` into its atomic units.
    ///
    /// Validation happens up front: zero dimensions and channel counts below the atomic depth
    /// fail here, before anything is allocated. On the non-aligned path the primary collection
    /// is allocated at the floor block count and then grown channel-wise by the zero-block
    /// merge, so every unit ends at depth `64 + channels_to_pad(channels)`.
    pub fn build(&mut self, cube: &Cube) -> Result<CubeTiling, TilingError> {
        cube.validate()?;

        let counts = cube.atomic_counts();
        if cube.channels < ATOMIC_CHANNELS {
            return Err(TilingError::DegenerateBlockCount {
                channels: cube.channels,
                per_cube: counts.per_cube,
            });
        }

        debug!(
            width = cube.width,
            height = cube.height,
            channels = cube.channels,
            n_cubes = cube.n_cubes,
            precision = %cube.precision,
            per_cube = counts.per_cube,
            total = counts.total,
            "tiling cube"
        );

        let mut collection = AtomicCollection::generate(
            cube.n_cubes as usize,
            counts.per_cube,
            cube.precision.format(),
            &mut self.source,
        );

        if !channels_aligned(cube.channels) {
            let pad = channels_to_pad(cube.channels);
            debug!(
                channels = cube.channels,
                pad_channels = pad,
                "channel count not aligned; merging zero block"
            );
            let block = ZeroBlock::new(pad, cube.n_cubes as usize, counts.per_cube);
            collection.merge_zero_block(&block)?;
        }

        let report = TilingReport {
            counts,
            channel_depth: collection.channel_depth(),
        };
        self.last = Some(report);

        Ok(CubeTiling {
            collection,
            counts,
            channel_depth: report.channel_depth,
        })
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
