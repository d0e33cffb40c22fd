// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Record of which generator rotations produced an image.
//!
//! Only diagnostics read a trace; the equivalence test never depends on it.

use std::fmt;

use crate::symmetry::extended::ExtendedRotation;
use crate::symmetry::rotation::{Rotation, FACE_TURN, HALF_TURN, QUARTER_TURN};

/// The generators applied to reach one image, in application order:
/// face turns, then quarter turns, then the half turn, then at most one
/// extended rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationTrace {
    /// Number of 120-degree face turns (0..=2).
    pub face_turns: u8,
    /// Number of 90-degree turns in the alpha plane (0..=3).
    pub quarter_turns: u8,
    /// Whether the 180-degree turn about the a1 axis followed.
    pub half_turn: bool,
    pub extended: Option<ExtendedRotation>,
}

impl RotationTrace {
    pub fn identity() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_face_turns(self, face_turns: u8) -> Self {
        Self { face_turns, ..self }
    }

    #[must_use]
    pub fn with_quarter_turns(self, quarter_turns: u8) -> Self {
        Self {
            quarter_turns,
            ..self
        }
    }

    #[must_use]
    pub fn with_half_turn(self) -> Self {
        Self {
            half_turn: true,
            ..self
        }
    }

    #[must_use]
    pub fn with_extended(self, extended: ExtendedRotation) -> Self {
        Self {
            extended: Some(extended),
            ..self
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Total number of generator applications.
    pub fn generator_count(&self) -> usize {
        self.face_turns as usize
            + self.quarter_turns as usize
            + usize::from(self.half_turn)
            + usize::from(self.extended.is_some())
    }

    /// The composed rotation, or None when an extended transform was used
    /// (those are not permutations of all 12 positions).
    pub fn rotation(&self) -> Option<Rotation> {
        if self.extended.is_some() {
            return None;
        }
        let mut rotation = FACE_TURN
            .power(self.face_turns as usize)
            .then(&QUARTER_TURN.power(self.quarter_turns as usize));
        if self.half_turn {
            rotation = rotation.then(&HALF_TURN);
        }
        Some(rotation)
    }
}

impl fmt::Display for RotationTrace {
    /// Lists each generator application, e.g. "Face 120, Plane 90, Alpha 180".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "identity");
        }
        let mut steps: Vec<String> = Vec::with_capacity(self.generator_count());
        steps.extend((0..self.face_turns).map(|_| "Face 120".to_string()));
        steps.extend((0..self.quarter_turns).map(|_| "Plane 90".to_string()));
        if self.half_turn {
            steps.push("Alpha 180".to_string());
        }
        if let Some(extended) = self.extended {
            steps.push(extended.to_string());
        }
        write!(f, "{}", steps.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Placement;

    #[test]
    fn test_identity_display() {
        assert_eq!(RotationTrace::identity().to_string(), "identity");
        assert_eq!(RotationTrace::identity().rotation(), Some(Rotation::default()));
    }

    #[test]
    fn test_display_lists_each_application() {
        let trace = RotationTrace::identity()
            .with_face_turns(2)
            .with_quarter_turns(3)
            .with_half_turn()
            .with_extended(ExtendedRotation::AlphaTetrahedral);
        assert_eq!(
            trace.to_string(),
            "Face 120, Face 120, Plane 90, Plane 90, Plane 90, Alpha 180, Alpha 109"
        );
        assert_eq!(trace.generator_count(), 7);
        assert_eq!(trace.rotation(), None);
    }

    #[test]
    fn test_rotation_composes_in_trace_order() {
        let p: Placement = "a2 b1 g3".parse().unwrap();
        let trace = RotationTrace::identity()
            .with_face_turns(1)
            .with_quarter_turns(2)
            .with_half_turn();
        let expected = HALF_TURN.apply(QUARTER_TURN.apply(QUARTER_TURN.apply(FACE_TURN.apply(p))));
        assert_eq!(trace.rotation().unwrap().apply(p), expected);
    }
}
