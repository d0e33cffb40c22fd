// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use tile_symmetry::{generate, Placement, SymmetryConfig, SymmetryEngine};

/// Orbit counts for 0..=12 arms, with the hexagonal-plane transforms.
pub const EXTENDED_COUNTS: [usize; 13] = [1, 1, 4, 10, 26, 37, 48, 38, 27, 13, 5, 1, 1];

/// Orbit counts for 0..=12 arms under the 24 proper rotations only.
pub const STANDARD_COUNTS: [usize; 13] = [1, 1, 5, 13, 27, 38, 48, 38, 27, 13, 5, 1, 1];

pub fn tile(names: &str) -> Placement {
    names.parse().unwrap()
}

pub fn extended_engine() -> SymmetryEngine {
    SymmetryEngine::default()
}

pub fn standard_engine() -> SymmetryEngine {
    SymmetryEngine::new(SymmetryConfig::standard())
}

/// Both engines, labelled for assertion messages.
pub fn engines() -> [(&'static str, SymmetryEngine); 2] {
    [("extended", extended_engine()), ("standard", standard_engine())]
}

pub fn all_placements(n: usize) -> HashSet<Placement> {
    generate(n).into_iter().collect()
}

pub fn sorted(mut placements: Vec<Placement>) -> Vec<Placement> {
    placements.sort();
    placements
}
