use datacube_core::{InvalidDimension, InvalidPrecision};

use thiserror::Error;

/// Everything that can go wrong while decomposing a cube into atomic units.
///
/// All variants are detected eagerly, either when `build` starts or at zero-block merge time.
/// Tiling is a pure computation, so none of these are retried, and no partial collection is ever
/// returned alongside one.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TilingError {
    #[error(transparent)]
    InvalidDimension(#[from] InvalidDimension),

    /// Raised at the tag-parsing boundary; past construction the precision enum is closed.
    #[error(transparent)]
    InvalidPrecision(#[from] InvalidPrecision),

    /// Fewer channels than one atomic block cannot feed the compute unit.
    #[error(
        "channel count {channels} is below the atomic depth; \
         the per-cube unit count would degenerate to {per_cube}"
    )]
    DegenerateBlockCount { channels: u32, per_cube: usize },

    /// A zero block can only merge into a collection with the same replica and spatial extents.
    #[error(
        "zero block shaped {block_replicas}x{block_units} cannot merge into \
         a collection shaped {collection_replicas}x{collection_units}"
    )]
    ShapeMismatch {
        collection_replicas: usize,
        collection_units: usize,
        block_replicas: usize,
        block_units: usize,
    },
}
