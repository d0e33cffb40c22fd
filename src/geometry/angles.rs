// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Angles between arm positions, and the angle signature of a placement.
//!
//! The angle between two arms is unchanged by any rotation, so the sorted
//! multiset of pairwise angles is a rotation invariant. Two placements with
//! different signatures can never be rotations of one another; equal
//! signatures are necessary but not sufficient.

use std::fmt;

use crate::geometry::constants::NPOSITIONS;
use crate::geometry::{Placement, Position};

/// Pairwise angles (degrees) between the 12 arm positions.
///
/// Rows and columns follow position index order `a1..a4, b1..b4, g1..g4`.
pub const ANGLE_LUT: [[u16; NPOSITIONS]; NPOSITIONS] = [
    [0, 90, 180, 90, 60, 60, 120, 120, 60, 60, 120, 120],
    [90, 0, 90, 180, 120, 120, 60, 60, 60, 60, 120, 120],
    [180, 90, 0, 90, 120, 120, 60, 60, 120, 120, 60, 60],
    [90, 180, 90, 0, 60, 60, 120, 120, 120, 120, 60, 60],
    [60, 120, 120, 60, 0, 90, 180, 90, 60, 120, 120, 60],
    [60, 120, 120, 60, 90, 0, 90, 180, 120, 60, 60, 120],
    [120, 60, 60, 120, 180, 90, 0, 90, 120, 60, 60, 120],
    [120, 60, 60, 120, 90, 180, 90, 0, 60, 120, 120, 60],
    [60, 60, 120, 120, 60, 120, 120, 60, 0, 90, 180, 90],
    [60, 60, 120, 120, 120, 60, 60, 120, 90, 0, 90, 180],
    [120, 120, 60, 60, 120, 60, 60, 120, 180, 90, 0, 90],
    [120, 120, 60, 60, 60, 120, 120, 60, 90, 180, 90, 0],
];

/// The five angle classes that occur between cuboctahedron vertices.
pub const ANGLE_CLASSES: [u16; 5] = [0, 60, 90, 120, 180];

/// Angle in degrees between two arm positions.
pub fn angle_between(a: Position, b: Position) -> u16 {
    ANGLE_LUT[a.index()][b.index()]
}

/// Sorted multiset of the angles between every pair of arms in a placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AngleSignature(Vec<u16>);

impl AngleSignature {
    /// Compute the signature of a placement.
    ///
    /// A placement with k arms yields k(k-1)/2 angles.
    pub fn of(placement: Placement) -> Self {
        let arms: Vec<Position> = placement.iter().collect();
        let mut angles = Vec::with_capacity(arms.len() * arms.len().saturating_sub(1) / 2);
        for (k, &a) in arms.iter().enumerate() {
            for &b in &arms[k + 1..] {
                angles.push(angle_between(a, b));
            }
        }
        angles.sort_unstable();
        Self(angles)
    }

    pub fn angles(&self) -> &[u16] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AngleSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, angle) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", angle)?;
        }
        write!(f, "]")
    }
}
