// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants for the cuboctahedral tile geometry.
//!
//! A tile has one potential arm at the midpoint of each of the 12 edges of a
//! cube. Those midpoints are the vertices of a cuboctahedron, and they fall
//! into three axis groups of four (alpha, beta, gamma).

/// Number of arm positions on a tile.
pub const NPOSITIONS: usize = 12;

/// Number of axis groups (alpha, beta, gamma).
pub const NAXIS_GROUPS: usize = 3;

/// Positions in each axis group.
pub const GROUP_SIZE: usize = NPOSITIONS / NAXIS_GROUPS;

/// Bit mask covering every arm position.
pub const FULL_MASK: u16 = (1 << NPOSITIONS) - 1;

/// Order of the rotation group of the cuboctahedron (same as the cube's).
pub const ROTATION_GROUP_ORDER: usize = 24;

/// Compute factorial at compile time.
const fn factorial(n: usize) -> usize {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Compute binomial coefficient (n choose k) at compile time.
///
/// Returns the number of ways to choose k items from n items.
pub const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        0
    } else if k == 0 || k == n {
        1
    } else {
        factorial(n) / (factorial(k) * factorial(n - k))
    }
}

/// Total number of placements over all arm counts (2^NPOSITIONS).
pub const NPLACEMENTS: usize = 1 << NPOSITIONS;

const _: () = assert!(NPOSITIONS <= 16, "placements are stored in a u16");
