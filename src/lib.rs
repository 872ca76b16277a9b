//! Decomposition of multi-channel data cubes into the fixed-depth atomic units consumed by a
//! MAC-style compute unit.
//!
//! This library is organized into two crates:
//! - **core**: cube descriptions, precision formats, and the block math deciding how a cube
//!   splits into atomic units
//! - **tiling**: the atomic-unit collection, zero-channel padding, and the tiler that builds one
//!   from the other
//!
//! ```
//! use datacube::prelude::*;
//!
//! let cube = Cube::new(4, 4, 96, Precision::Fp16);
//! let mut tiler = CubeTiler::new();
//!
//! let tiling = tiler.build(&cube).unwrap();
//!
//! // 4 * 4 * (96 / 64) = 24 units, each grown from 64 to 96 channels by the zero merge.
//! assert_eq!(tiling.counts, AtomicCounts { per_cube: 24, total: 24 });
//! assert_eq!(tiling.channel_depth, 64 + channels_to_pad(96) as usize);
//! ```

pub use datacube_core as core;
pub use datacube_tiling as tiling;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::tiling::prelude::*;
}
