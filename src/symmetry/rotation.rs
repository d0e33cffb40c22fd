// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator rotations of the cuboctahedron as permutations of arm positions.
//!
//! A [`Rotation`] stores, for every destination position, the position whose
//! arm moves there: `image[i] = source[perm[i]]`. The three generators are
//! enough to reach all 24 rotations of the cuboctahedron:
//!
//! - [`QUARTER_TURN`]: 90 degrees about the axis through the square face
//!   bounded by b2, b3, g2 and g3. The alpha arms stay in the alpha plane.
//! - [`FACE_TURN`]: 120 degrees about the centre of the triangular face
//!   formed by a1, b1 and g1. Beta arms move to alpha, gamma to beta and
//!   alpha to gamma.
//! - [`HALF_TURN`]: 180 degrees about the a1/a3 axis.
//!
//! The group is never materialised; the symmetry engine composes these on
//! the fly.

use crate::geometry::constants::NPOSITIONS;
use crate::geometry::{angle_between, Placement, Position};

/// A permutation of the 12 arm positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    /// `source[i]` is the index of the position whose arm lands on position i.
    source: [u8; NPOSITIONS],
}

pub const IDENTITY: Rotation = Rotation {
    source: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
};

/// a1 <- a2 <- a3 <- a4 <- a1, with the beta and gamma arms in two 4-cycles.
pub const QUARTER_TURN: Rotation = Rotation {
    //       a1 a2 a3 a4 b1 b2 b3  b4  g1 g2 g3 g4
    source: [1, 2, 3, 0, 8, 9, 10, 11, 7, 6, 5, 4],
};

/// alpha <- beta <- gamma <- alpha; a1, b1 and g1 lie on the turning face.
pub const FACE_TURN: Rotation = Rotation {
    //       a1 a2 a3 a4 b1 b2  b3  b4 g1 g2 g3 g4
    source: [4, 5, 6, 7, 8, 11, 10, 9, 0, 3, 2, 1],
};

/// Fixes a1 and a3, swaps a2/a4 and pairs each beta arm with a gamma arm.
pub const HALF_TURN: Rotation = Rotation {
    //       a1 a2 a3 a4 b1 b2 b3  b4  g1 g2 g3 g4
    source: [0, 3, 2, 1, 9, 8, 11, 10, 5, 4, 7, 6],
};

impl Rotation {
    /// Build a rotation from a source table.
    ///
    /// Returns None unless the table is a permutation of `0..12`.
    pub fn from_sources(source: [u8; NPOSITIONS]) -> Option<Self> {
        let mut seen = 0u16;
        for &s in &source {
            if s as usize >= NPOSITIONS || seen & (1 << s) != 0 {
                return None;
            }
            seen |= 1 << s;
        }
        Some(Self { source })
    }

    /// The position whose arm is carried onto `destination`.
    pub fn source_of(&self, destination: Position) -> Position {
        Position::from_index(self.source[destination.index()])
    }

    /// Rotate a placement, returning a new one.
    pub fn apply(&self, placement: Placement) -> Placement {
        let mut image = Placement::empty();
        for destination in Position::all() {
            if placement.contains(self.source_of(destination)) {
                image.insert(destination);
            }
        }
        image
    }

    /// The rotation that applies `self` first and then `next`.
    #[must_use]
    pub fn then(&self, next: &Rotation) -> Rotation {
        let mut source = [0u8; NPOSITIONS];
        for (i, slot) in source.iter_mut().enumerate() {
            *slot = self.source[next.source[i] as usize];
        }
        Rotation { source }
    }

    /// `self` applied `k` times.
    #[must_use]
    pub fn power(&self, k: usize) -> Rotation {
        (0..k).fold(IDENTITY, |acc, _| acc.then(self))
    }

    pub fn is_identity(&self) -> bool {
        *self == IDENTITY
    }

    /// Smallest k > 0 with `self^k` the identity.
    pub fn order(&self) -> usize {
        let mut k = 1;
        let mut current = *self;
        while !current.is_identity() {
            current = current.then(self);
            k += 1;
        }
        k
    }

    /// True if every pairwise angle is unchanged, i.e. the permutation is a
    /// genuine rigid motion of the cuboctahedron.
    pub fn preserves_angles(&self) -> bool {
        Position::all().all(|a| {
            Position::all().all(|b| {
                angle_between(a, b) == angle_between(self.source_of(a), self.source_of(b))
            })
        })
    }
}

impl Default for Rotation {
    fn default() -> Self {
        IDENTITY
    }
}

/// 90-degree rotation keeping the alpha arms in the alpha plane.
pub fn rotate_alpha_plane(placement: Placement) -> Placement {
    QUARTER_TURN.apply(placement)
}

/// 120-degree rotation carrying the beta arms onto the alpha arms.
pub fn rotate_beta_to_alpha(placement: Placement) -> Placement {
    FACE_TURN.apply(placement)
}

/// 180-degree rotation about the a1/a3 axis.
pub fn rotate_around_axis1(placement: Placement) -> Placement {
    HALF_TURN.apply(placement)
}
