// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orbit and stabilizer tracking.
//!
//! Comparing a tile against itself with tracking enabled visits every image
//! of the tile. The distinct images form its orbit, and the comparisons that
//! matched count the rotations that fix it. For the 24 proper rotations,
//! orbit size times stabilizer count is 24 for every tile, and the orbits of
//! the representatives of a reduction cover every tile exactly once. Both
//! facts check the reduction independently of the grouping shortcut.

use std::collections::HashSet;

use crate::diagnostics::DiagnosticsSink;
use crate::geometry::Placement;
use crate::symmetry::RotationTrace;

/// Accumulates the images seen and the number of matching comparisons.
///
/// Tracking starts enabled. Counters only reset on an explicit
/// [`reset`](Self::reset), [`enable`](Self::enable) or
/// [`disable`](Self::disable).
#[derive(Debug, Clone)]
pub struct OrbitStabilizer {
    enabled: bool,
    orbit: Vec<Placement>,
    seen: HashSet<Placement>,
    stabilizers: usize,
}

impl Default for OrbitStabilizer {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitStabilizer {
    pub fn new() -> Self {
        Self {
            enabled: true,
            orbit: Vec::new(),
            seen: HashSet::new(),
            stabilizers: 0,
        }
    }

    /// Turn tracking on, clearing previous results.
    pub fn enable(&mut self) {
        self.enabled = true;
        self.reset();
    }

    /// Turn tracking off, clearing previous results.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.orbit.clear();
        self.seen.clear();
        self.stabilizers = 0;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of distinct images seen since the last reset.
    pub fn orbit_size(&self) -> usize {
        self.orbit.len()
    }

    /// Number of comparisons that matched since the last reset.
    pub fn stabilizer_count(&self) -> usize {
        self.stabilizers
    }

    /// Distinct images in the order they were first seen.
    pub fn orbit(&self) -> impl Iterator<Item = Placement> + '_ {
        self.orbit.iter().copied()
    }

    pub fn contains(&self, placement: Placement) -> bool {
        self.seen.contains(&placement)
    }
}

impl DiagnosticsSink for OrbitStabilizer {
    fn record(&mut self, _target: Placement, image: Placement, _trace: &RotationTrace, matched: bool) {
        if !self.enabled {
            return;
        }
        if matched {
            self.stabilizers += 1;
        }
        if self.seen.insert(image) {
            self.orbit.push(image);
        }
    }
}
