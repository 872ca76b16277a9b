//! Tiling of multi-channel data cubes into the atomic units consumed by a MAC-style compute unit.
//!
//! The core types are:
//!   - [`CubeTiler`]: decomposes a [`Cube`](datacube_core::Cube) into an [`AtomicCollection`]
//!   - [`AtomicCollection`]: the ordered units, grouped by cube replica then block position
//!   - [`ZeroBlock`]: transient all-zero channels merged in when the channel count is not a
//!     multiple of the atomic depth
//!
//! Scalar values come from an injectable [`ValueSource`]; the default [`UniformFill`] draws
//! uniform-random placeholders, and tests inject deterministic sources.

pub mod collection;
pub mod error;
pub mod fill;
pub mod padding;
pub mod tiler;
pub mod unit;

pub use collection::{AtomicCollection, UnitKey};
pub use error::TilingError;
pub use fill::{ConstantFill, UniformFill, ValueSource};
pub use padding::ZeroBlock;
pub use tiler::{CubeTiler, CubeTiling, TilingReport};
pub use unit::AtomicUnit;

pub mod prelude {
    pub use super::{
        AtomicCollection, AtomicUnit, ConstantFill, CubeTiler, CubeTiling, TilingError,
        TilingReport, UniformFill, UnitKey, ValueSource, ZeroBlock,
    };
}
