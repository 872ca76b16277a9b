use crate::dims::AtomicCounts;
use crate::precision::Precision;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Spatial padding around a cube: left, right, top, bottom. Consumed by downstream processing of
/// the atomic units; channel tiling does not read it.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SpatialPad {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl SpatialPad {
    #[inline]
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// A `width x height x channels` data volume, optionally replicated `n_cubes` times.
///
/// This is the logical input to tiling. All dimension fields must be at least 1; a `Cube` is
/// immutable for the duration of a tiling pass.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cube {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub precision: Precision,
    pub pad: SpatialPad,
    pub n_cubes: u32,
}

/// A dimension field that must be at least 1 was 0.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("cube {field} must be at least 1")]
pub struct InvalidDimension {
    pub field: &'static str,
}

impl Cube {
    /// A single unpadded cube. Use [`with_pad`](Self::with_pad) and
    /// [`with_replicas`](Self::with_replicas) for the rest.
    #[inline]
    pub const fn new(width: u32, height: u32, channels: u32, precision: Precision) -> Self {
        Self {
            width,
            height,
            channels,
            precision,
            pad: SpatialPad::new(0, 0, 0, 0),
            n_cubes: 1,
        }
    }

    #[inline]
    pub const fn with_pad(mut self, pad: SpatialPad) -> Self {
        self.pad = pad;
        self
    }

    /// Replicate this cube `n_cubes` times, e.g. for a kernel stack.
    #[inline]
    pub const fn with_replicas(mut self, n_cubes: u32) -> Self {
        self.n_cubes = n_cubes;
        self
    }

    /// The number of 1x1 spatial positions in one replica.
    #[inline]
    pub fn spatial_positions(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Checks the `>= 1` invariant on every dimension field.
    pub fn validate(&self) -> Result<(), InvalidDimension> {
        for &(field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("channels", self.channels),
            ("n_cubes", self.n_cubes),
        ]
        .iter()
        {
            if value == 0 {
                return Err(InvalidDimension { field });
            }
        }

        Ok(())
    }

    /// The atomic-unit counts this cube decomposes into.
    #[inline]
    pub fn atomic_counts(&self) -> AtomicCounts {
        AtomicCounts::compute(self.width, self.height, self.channels, self.n_cubes)
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
    fn valid_cube_passes_validation() {
        let cube = Cube::new(4, 4, 64, Precision::Fp32)
            .with_pad(SpatialPad::new(1, 1, 0, 0))
            .with_replicas(2);

        assert_eq!(cube.validate(), Ok(()));
        assert_eq!(cube.spatial_positions(), 16);
    }

    #[test]
    fn each_zero_dimension_is_rejected() {
        let base = Cube::new(4, 4, 64, Precision::Int8);

        let zero_width = Cube { width: 0, ..base };
        let zero_height = Cube { height: 0, ..base };
        let zero_channels = Cube {
            channels: 0,
            ..base
        };
        let zero_replicas = base.with_replicas(0);

        assert_eq!(
            zero_width.validate(),
            Err(InvalidDimension { field: "width" })
        );
        assert_eq!(
            zero_height.validate(),
            Err(InvalidDimension { field: "height" })
        );
        assert_eq!(
            zero_channels.validate(),
            Err(InvalidDimension { field: "channels" })
        );
        assert_eq!(
            zero_replicas.validate(),
            Err(InvalidDimension { field: "n_cubes" })
        );
    }

    #[test]
    fn cube_serde_round_trip() {
        let cube = Cube::new(8, 2, 96, Precision::Int16).with_replicas(3);
        let encoded = serde_json::to_string(&cube).unwrap();
        let decoded: Cube = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, cube);
    }
}
