// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Special-case rotations for tiles lying in a hexagonal plane.
//!
//! A tile whose arms all lie in one of the cuboctahedron's hexagonal planes
//! has a larger symmetry group than a general tile. Some of its images are
//! reached by turning the plane by the tetrahedral angle (about 109.5
//! degrees) or its supplement, the tetrahedral dihedral angle (about 70.5
//! degrees), about the a1 or a2 axis. Neither turn is a composition of the
//! three generators.
//!
//! Each transform applies only when six guard positions are empty. It then
//! moves the remaining six positions onto another hexagon, and every
//! destination it does not map is left empty.

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use crate::geometry::{Placement, Position};

use crate::geometry::Position as P;

/// The four extended transforms, in the order the engine tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCountMacro, Display)]
pub enum ExtendedRotation {
    /// Tetrahedral dihedral angle about the a1 axis.
    #[strum(serialize = "Alpha 71")]
    AlphaTetraDihedral,
    /// Tetrahedral angle about the a1 axis.
    #[strum(serialize = "Alpha 109")]
    AlphaTetrahedral,
    /// Tetrahedral dihedral angle about the a2 axis.
    #[strum(serialize = "Alpha2 71")]
    Alpha2TetraDihedral,
    /// Tetrahedral angle about the a2 axis.
    #[strum(serialize = "Alpha2 109")]
    Alpha2Tetrahedral,
}

impl ExtendedRotation {
    /// Positions that must be empty for the transform to apply.
    pub fn guard(self) -> Placement {
        let positions = match self {
            ExtendedRotation::AlphaTetraDihedral => [P::A2, P::A4, P::B1, P::B3, P::G2, P::G4],
            ExtendedRotation::AlphaTetrahedral => [P::A2, P::A4, P::B2, P::B4, P::G1, P::G3],
            ExtendedRotation::Alpha2TetraDihedral => [P::A1, P::A3, P::B1, P::B3, P::G1, P::G3],
            ExtendedRotation::Alpha2Tetrahedral => [P::A1, P::A3, P::B2, P::B4, P::G2, P::G4],
        };
        Placement::from_positions(&positions)
    }

    /// `(source, destination)` pairs for the six positions the transform moves.
    pub fn mapping(self) -> [(Position, Position); 6] {
        match self {
            ExtendedRotation::AlphaTetraDihedral => [
                (P::A1, P::A1),
                (P::A3, P::A3),
                (P::G1, P::B1),
                (P::G3, P::B3),
                (P::B2, P::G2),
                (P::B4, P::G4),
            ],
            ExtendedRotation::AlphaTetrahedral => [
                (P::A1, P::A1),
                (P::A3, P::A3),
                (P::B1, P::B2),
                (P::B3, P::B4),
                (P::G2, P::G1),
                (P::G4, P::G3),
            ],
            ExtendedRotation::Alpha2TetraDihedral => [
                (P::A2, P::A2),
                (P::A4, P::A4),
                (P::G4, P::B1),
                (P::G2, P::B3),
                (P::B4, P::G1),
                (P::B2, P::G3),
            ],
            ExtendedRotation::Alpha2Tetrahedral => [
                (P::A2, P::A2),
                (P::A4, P::A4),
                (P::B1, P::B2),
                (P::B3, P::B4),
                (P::G1, P::G2),
                (P::G3, P::G4),
            ],
        }
    }

    /// Whether the guard positions of `placement` are all empty.
    pub fn applies_to(self, placement: Placement) -> bool {
        placement.is_disjoint(self.guard())
    }

    /// Transform a placement, or None if its guard positions are occupied.
    pub fn apply(self, placement: Placement) -> Option<Placement> {
        if !self.applies_to(placement) {
            return None;
        }
        let mut image = Placement::empty();
        for (source, destination) in self.mapping() {
            if placement.contains(source) {
                image.insert(destination);
            }
        }
        Some(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    fn tile(s: &str) -> Placement {
        s.parse().unwrap()
    }

    #[test]
    fn test_four_variants_with_labels() {
        assert_eq!(ExtendedRotation::COUNT, 4);
        let labels: Vec<String> = ExtendedRotation::iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, ["Alpha 71", "Alpha 109", "Alpha2 71", "Alpha2 109"]);
    }

    #[test]
    fn test_mapping_covers_the_complement_of_the_guard() {
        for rotation in ExtendedRotation::iter() {
            let guard = rotation.guard();
            assert_eq!(guard.len(), 6);
            let sources: Vec<Position> = rotation.mapping().iter().map(|&(s, _)| s).collect();
            let destinations: Vec<Position> =
                rotation.mapping().iter().map(|&(_, d)| d).collect();
            let sources = Placement::from_positions(&sources);
            assert_eq!(sources.len(), 6);
            assert!(sources.is_disjoint(guard));
            assert_eq!(Placement::from_positions(&destinations).len(), 6);
        }
    }

    #[test]
    fn test_guard_blocks_transform() {
        let rotation = ExtendedRotation::AlphaTetraDihedral;
        assert_eq!(rotation.apply(tile("a1 a2")), None);
        assert!(!rotation.applies_to(tile("g4")));
        assert!(rotation.applies_to(Placement::empty()));
    }

    #[test]
    fn test_transform_preserves_arm_count() {
        let plane = tile("a1 a3 b2 b4 g1 g3");
        for rotation in ExtendedRotation::iter() {
            if let Some(image) = rotation.apply(plane) {
                assert_eq!(image.len(), plane.len(), "{rotation}");
            }
        }
        assert_eq!(
            ExtendedRotation::AlphaTetraDihedral.apply(plane),
            Some(tile("a1 a3 b1 b3 g2 g4"))
        );
    }

    #[test]
    fn test_merges_a1_b3_with_a1_b4() {
        // a1,b3 and a1,b4 are both at 120 degrees but no rotation maps one
        // onto the other; the tetrahedral turn about a1 does.
        assert_eq!(
            ExtendedRotation::AlphaTetrahedral.apply(tile("a1 b3")),
            Some(tile("a1 b4"))
        );
    }
}
