// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rotational symmetry of arm placements.
//!
//! ## Module Structure
//!
//! - `rotation`: the three generator rotations as position permutations
//! - `extended`: guarded transforms for tiles lying in a hexagonal plane
//! - `trace`: which generators produced an image
//! - `engine`: image generation and the equivalence test

pub mod engine;
pub mod extended;
pub mod rotation;
pub mod trace;

pub use engine::SymmetryEngine;
pub use extended::ExtendedRotation;
pub use rotation::{
    rotate_alpha_plane, rotate_around_axis1, rotate_beta_to_alpha, Rotation, FACE_TURN, HALF_TURN,
    IDENTITY, QUARTER_TURN,
};
pub use trace::RotationTrace;
