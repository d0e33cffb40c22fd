// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for cuboctahedral tiles.
//!
//! This module contains the fixed geometry every other module works over:
//! - Position: one of the 12 arm positions, named `a1`..`g4`
//! - Placement: bitset of the positions carrying an arm
//! - Angles: pairwise angle lookup table and the angle signature invariant

pub mod angles;
pub mod constants;
pub mod placement;
pub mod position;

// Re-export for convenience
pub use angles::{angle_between, AngleSignature, ANGLE_LUT};
pub use constants::*;
pub use placement::Placement;
pub use position::{position_index, position_name, AxisGroup, Position};
