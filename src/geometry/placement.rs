// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Placement type: the set of arm positions present on a tile.
//!
//! A Placement is a 12-bit set, where bit i is set if position i carries an
//! arm. Equality and hashing are structural.
//!
//! # Examples
//!
//! ```
//! use tile_symmetry::geometry::{Placement, Position};
//!
//! let tile: Placement = "a1, b3".parse().unwrap();
//! assert_eq!(tile.len(), 2);
//! assert!(tile.contains(Position::B3));
//! assert_eq!(tile.to_string(), "a1, b3");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TileError};
use crate::geometry::constants::{FULL_MASK, NPOSITIONS};
use crate::geometry::Position;

/// A set of active arm positions.
///
/// Ordering is generation order: placements compare as boolean sequences
/// from position 0 upward, inactive before active. This is the order in
/// which [`crate::enumerate::generate`] emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Placement(u16);

impl Placement {
    /// A placement with no arms.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// A placement with all 12 arms.
    pub const fn full() -> Self {
        Self(FULL_MASK)
    }

    /// Create a placement from raw bits (bit i = position i).
    pub fn from_bits(bits: u16) -> Result<Self> {
        if bits & !FULL_MASK != 0 {
            return Err(TileError::InvalidRawBits { bits });
        }
        Ok(Self(bits))
    }

    /// Create a placement from one flag per position.
    ///
    /// A slice of any length other than 12 does not describe a tile and is
    /// rejected as a configuration error.
    pub fn from_bools(flags: &[bool]) -> Result<Self> {
        if flags.len() != NPOSITIONS {
            return Err(TileError::Configuration { len: flags.len() });
        }
        let mut bits = 0u16;
        for (i, &on) in flags.iter().enumerate() {
            if on {
                bits |= 1 << i;
            }
        }
        Ok(Self(bits))
    }

    pub fn from_positions(positions: &[Position]) -> Self {
        positions.iter().fold(Self::empty(), |acc, &p| acc.with(p))
    }

    /// Create a placement from position names such as `["a1", "g4"]`.
    pub fn from_names<'a, I>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().try_fold(Self::empty(), |acc, name| {
            Ok(acc.with(name.parse::<Position>()?))
        })
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    /// One flag per position, in index order.
    pub fn to_bools(self) -> [bool; NPOSITIONS] {
        let mut flags = [false; NPOSITIONS];
        for p in self.iter() {
            flags[p.index()] = true;
        }
        flags
    }

    pub fn contains(self, position: Position) -> bool {
        (self.0 >> position.index()) & 1 != 0
    }

    pub fn insert(&mut self, position: Position) {
        self.0 |= 1 << position.index();
    }

    pub fn remove(&mut self, position: Position) {
        self.0 &= !(1 << position.index());
    }

    /// A copy of this placement with one more arm.
    #[must_use]
    pub fn with(self, position: Position) -> Self {
        Self(self.0 | 1 << position.index())
    }

    /// Number of arms (Hamming weight).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if no arm of `self` sits on a position of `other`.
    pub fn is_disjoint(self, other: Placement) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate over active positions in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::all().filter(move |&p| self.contains(p))
    }

    /// Sort key realising generation order: position 0 is the most
    /// significant bit.
    pub fn generation_key(self) -> u16 {
        self.0.reverse_bits() >> (16 - NPOSITIONS)
    }
}

impl Ord for Placement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.generation_key().cmp(&other.generation_key())
    }
}

impl PartialOrd for Placement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Placement {
    /// Format a placement as its arm names, e.g. "a1, b3, g2".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(no arms)");
        }
        for (k, p) in self.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}

impl FromStr for Placement {
    type Err = TileError;

    /// Parse arm names separated by commas and/or whitespace.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_names(
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|name| !name.is_empty()),
        )
    }
}

impl From<&[Position]> for Placement {
    fn from(positions: &[Position]) -> Self {
        Self::from_positions(positions)
    }
}

impl TryFrom<&[bool]> for Placement {
    type Error = TileError;

    fn try_from(flags: &[bool]) -> Result<Self> {
        Self::from_bools(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_full() {
        assert!(Placement::empty().is_empty());
        assert_eq!(Placement::full().len(), NPOSITIONS);
        assert_eq!(Placement::full().iter().count(), NPOSITIONS);
    }

    #[test]
    fn test_insert_contains_remove() {
        let mut tile = Placement::empty();
        tile.insert(Position::A1);
        tile.insert(Position::G4);
        assert!(tile.contains(Position::A1));
        assert!(tile.contains(Position::G4));
        assert!(!tile.contains(Position::B1));
        assert_eq!(tile.len(), 2);

        tile.remove(Position::A1);
        tile.remove(Position::A1); // idempotent
        assert_eq!(tile.len(), 1);
    }

    #[test]
    fn test_from_bools_requires_twelve_flags() {
        assert_eq!(
            Placement::from_bools(&[true; 11]),
            Err(TileError::Configuration { len: 11 })
        );
        assert_eq!(
            Placement::from_bools(&[false; 13]),
            Err(TileError::Configuration { len: 13 })
        );
        let mut flags = [false; NPOSITIONS];
        flags[0] = true;
        flags[6] = true;
        let tile = Placement::from_bools(&flags).unwrap();
        assert_eq!(tile, Placement::from_positions(&[Position::A1, Position::B3]));
        assert_eq!(tile.to_bools(), flags);
    }

    #[test]
    fn test_from_bits_rejects_high_bits() {
        assert!(Placement::from_bits(FULL_MASK).is_ok());
        assert_eq!(
            Placement::from_bits(1 << 12),
            Err(TileError::InvalidRawBits { bits: 1 << 12 })
        );
    }

    #[test]
    fn test_parse_and_display() {
        let tile: Placement = "A1,b2  g4".parse().unwrap();
        assert_eq!(tile.to_string(), "a1, b2, g4");
        assert_eq!(Placement::empty().to_string(), "(no arms)");
        assert!("a1, x9".parse::<Placement>().is_err());
    }

    #[test]
    fn test_generation_order() {
        // Position 0 inactive sorts before position 0 active.
        let g4 = Placement::from_positions(&[Position::G4]);
        let a1 = Placement::from_positions(&[Position::A1]);
        assert!(g4 < a1);
        assert!(Placement::empty() < g4);
        assert_eq!(a1.generation_key(), 1 << 11);
        assert_eq!(g4.generation_key(), 1);
        assert_eq!(Placement::full().generation_key(), FULL_MASK);
    }

    #[test]
    fn test_disjoint() {
        let a: Placement = "a1 a3".parse().unwrap();
        let b: Placement = "a2 a4".parse().unwrap();
        assert!(a.is_disjoint(b));
        assert!(!a.is_disjoint(a));
    }
}
