//! Block math: how a channel count splits into fixed-depth atomic blocks, and how many atomic
//! units a cube decomposes into.

use num::Integer;
use serde::{Deserialize, Serialize};

/// Channel depth of one atomic unit. Fixed by the consuming compute unit.
pub const ATOMIC_CHANNELS: u32 = 64;

/// Returns `true` iff `channels` divides evenly into atomic blocks.
#[inline]
pub fn channels_aligned(channels: u32) -> bool {
    channels % ATOMIC_CHANNELS == 0
}

/// The smallest number of zero channels that brings `channels` up to the next multiple of
/// [`ATOMIC_CHANNELS`]. Always in `[0, ATOMIC_CHANNELS)`; 0 when already aligned.
#[inline]
pub fn channels_to_pad(channels: u32) -> u32 {
    let (_, rem) = channels.div_rem(&ATOMIC_CHANNELS);

    (ATOMIC_CHANNELS - rem) % ATOMIC_CHANNELS
}

/// Atomic-unit counts derived from a cube's dimensions.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AtomicCounts {
    /// Units in one replica of the cube.
    pub per_cube: usize,
    /// Units across all `n_cubes` replicas.
    pub total: usize,
}

impl AtomicCounts {
    /// Counts for a `width x height x channels` cube replicated `n_cubes` times.
    ///
    /// `per_cube` is `floor(width * height * (channels / 64))`. Multiplying the full volume out
    /// before dividing keeps the fractional block contribution of a non-aligned channel count,
    /// so this never truncates to 0 unless the whole volume holds less than one block.
    pub fn compute(width: u32, height: u32, channels: u32, n_cubes: u32) -> Self {
        let volume = width as usize * height as usize * channels as usize;
        let per_cube = volume / ATOMIC_CHANNELS as usize;

        Self {
            per_cube,
            total: per_cube * n_cubes as usize,
        }
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

    #[test]
    fn padding_completes_every_channel_count_to_a_multiple() {
        for channels in 1..=512 {
            let pad = channels_to_pad(channels);

            assert!(pad < ATOMIC_CHANNELS);
            assert_eq!((channels + pad) % ATOMIC_CHANNELS, 0);
        }
    }

    #[test]
    fn aligned_channel_counts_need_no_padding() {
        for blocks in 1..=8 {
            let channels = blocks * ATOMIC_CHANNELS;

            assert!(channels_aligned(channels));
            assert_eq!(channels_to_pad(channels), 0);
        }

        assert!(!channels_aligned(65));
        assert_eq!(channels_to_pad(65), 63);
        assert_eq!(channels_to_pad(1), 63);
    }

    #[test]
    fn counts_match_hand_computed_examples() {
        assert_eq!(
            AtomicCounts::compute(4, 4, 64, 1),
            AtomicCounts {
                per_cube: 16,
                total: 16
            }
        );
        assert_eq!(
            AtomicCounts::compute(4, 4, 128, 2),
            AtomicCounts {
                per_cube: 32,
                total: 64
            }
        );
    }

    #[test]
    fn fractional_blocks_still_contribute_to_the_count() {
        // 2 * 2 * (32 / 64) = 2 whole blocks; naive per-position truncation would give 0.
        assert_eq!(AtomicCounts::compute(2, 2, 32, 1).per_cube, 2);

        // Less than one block in the whole volume is the only way to reach 0.
        assert_eq!(AtomicCounts::compute(1, 1, 32, 1).per_cube, 0);
    }
}
