//! The core data types for describing multi-channel data cubes:
//! - `Cube`: a `width x height x channels` volume, optionally replicated `n_cubes` times
//! - `Precision` and `ScalarFormat`: the declared scalar storage format
//! - `AtomicCounts` and the block math that decides how a cube splits into atomic units

pub mod cube;
pub mod dims;
pub mod precision;

pub use cube::{Cube, InvalidDimension, SpatialPad};
pub use dims::{channels_aligned, channels_to_pad, AtomicCounts, ATOMIC_CHANNELS};
pub use precision::{InvalidPrecision, Precision, ScalarClass, ScalarFormat};

pub use num;

pub mod prelude {
    pub use super::{
        channels_aligned, channels_to_pad, AtomicCounts, Cube, InvalidDimension, InvalidPrecision,
        Precision, ScalarClass, ScalarFormat, SpatialPad, ATOMIC_CHANNELS,
    };
}
