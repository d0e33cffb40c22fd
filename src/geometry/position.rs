// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arm positions and their two-character names.
//!
//! Positions are indexed `0..12` in the fixed order
//! `a1 a2 a3 a4 b1 b2 b3 b4 g1 g2 g3 g4`: four positions in each of the
//! alpha, beta and gamma axis groups.
//!
//! ```
//! use tile_symmetry::geometry::{position_index, position_name, Position};
//!
//! assert_eq!(position_index("b3").unwrap(), 6);
//! assert_eq!(position_name(11).unwrap(), "g4");
//! assert_eq!("G1".parse::<Position>().unwrap(), Position::G1);
//! ```

use std::fmt;
use std::str::FromStr;

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

use crate::error::{Result, TileError};
use crate::geometry::constants::{GROUP_SIZE, NPOSITIONS};

/// One of the three axis groups a position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCountMacro)]
pub enum AxisGroup {
    Alpha,
    Beta,
    Gamma,
}

impl AxisGroup {
    /// The letter used in position names.
    pub fn letter(self) -> char {
        match self {
            AxisGroup::Alpha => 'a',
            AxisGroup::Beta => 'b',
            AxisGroup::Gamma => 'g',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(AxisGroup::Alpha),
            'b' => Some(AxisGroup::Beta),
            'g' => Some(AxisGroup::Gamma),
            _ => None,
        }
    }
}

const NAMES: [&str; NPOSITIONS] = [
    "a1", "a2", "a3", "a4", "b1", "b2", "b3", "b4", "g1", "g2", "g3", "g4",
];

/// An arm position in the range 0..NPOSITIONS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    pub const A1: Position = Position(0);
    pub const A2: Position = Position(1);
    pub const A3: Position = Position(2);
    pub const A4: Position = Position(3);
    pub const B1: Position = Position(4);
    pub const B2: Position = Position(5);
    pub const B3: Position = Position(6);
    pub const B4: Position = Position(7);
    pub const G1: Position = Position(8);
    pub const G2: Position = Position(9);
    pub const G3: Position = Position(10);
    pub const G4: Position = Position(11);

    /// Create a position, returning an error if out of range.
    pub fn try_new(index: usize) -> Result<Self> {
        if index < NPOSITIONS {
            Ok(Self(index as u8))
        } else {
            Err(TileError::InvalidPositionIndex { index })
        }
    }

    /// Wrap an index already known to be in range.
    pub(crate) const fn from_index(index: u8) -> Self {
        debug_assert!((index as usize) < NPOSITIONS);
        Self(index)
    }

    /// Build a position from its axis group and 1-based number within it.
    pub fn from_parts(group: AxisGroup, number: u8) -> Option<Self> {
        if (1..=GROUP_SIZE as u8).contains(&number) {
            Some(Self(group as u8 * GROUP_SIZE as u8 + number - 1))
        } else {
            None
        }
    }

    /// Iterate over all positions in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NPOSITIONS as u8).map(Position)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn group(self) -> AxisGroup {
        match self.0 as usize / GROUP_SIZE {
            0 => AxisGroup::Alpha,
            1 => AxisGroup::Beta,
            _ => AxisGroup::Gamma,
        }
    }

    /// The 1-based number of this position within its axis group.
    pub fn number(self) -> u8 {
        self.0 % GROUP_SIZE as u8 + 1
    }

    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = TileError;

    /// Parse a name of the form `[abg][1-4]`, ignoring case and surrounding space.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TileError::InvalidPositionName {
            name: s.to_string(),
        };
        let mut chars = s.trim().chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };
        let group = AxisGroup::from_letter(letter).ok_or_else(invalid)?;
        let number = digit.to_digit(10).ok_or_else(invalid)? as u8;
        Position::from_parts(group, number).ok_or_else(invalid)
    }
}

/// Translate a position name such as `"a1"` or `"g4"` to its index.
pub fn position_index(name: &str) -> Result<usize> {
    name.parse::<Position>().map(Position::index)
}

/// Translate an index back to its position name.
pub fn position_name(index: usize) -> Result<&'static str> {
    Position::try_new(index).map(Position::name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_names_round_trip_in_index_order() {
        for (i, position) in Position::all().enumerate() {
            assert_eq!(position.index(), i);
            assert_eq!(position_index(position.name()).unwrap(), i);
            assert_eq!(position_name(i).unwrap(), position.name());
        }
    }

    #[test]
    fn test_constants_match_names() {
        assert_eq!(Position::A1.name(), "a1");
        assert_eq!(Position::B3.name(), "b3");
        assert_eq!(Position::G4.name(), "g4");
        assert_eq!(Position::G1.index(), 8);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("A1".parse::<Position>().unwrap(), Position::A1);
        assert_eq!(" b2 ".parse::<Position>().unwrap(), Position::B2);
        assert_eq!("G3".parse::<Position>().unwrap(), Position::G3);
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        for bad in ["", "a", "a0", "a5", "c1", "d2", "a12", "1a", "ab"] {
            assert_eq!(
                bad.parse::<Position>(),
                Err(TileError::InvalidPositionName {
                    name: bad.to_string()
                }),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_invalid_index_is_rejected() {
        assert_eq!(
            position_name(12),
            Err(TileError::InvalidPositionIndex { index: 12 })
        );
        assert!(Position::try_new(11).is_ok());
    }

    #[test]
    fn test_groups_and_numbers() {
        assert_eq!(AxisGroup::COUNT, 3);
        for group in AxisGroup::iter() {
            let members: Vec<_> = Position::all().filter(|p| p.group() == group).collect();
            assert_eq!(members.len(), GROUP_SIZE);
            for (k, p) in members.iter().enumerate() {
                assert_eq!(p.number() as usize, k + 1);
                assert!(p.name().starts_with(group.letter()));
            }
        }
        assert_eq!(Position::from_parts(AxisGroup::Beta, 0), None);
        assert_eq!(Position::from_parts(AxisGroup::Gamma, 2), Some(Position::G2));
    }
}
