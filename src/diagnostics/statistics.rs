// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters describing one reduction. Each reduction owns its own
//! `Statistics`, and parallel group reductions are merged afterwards.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

use crate::diagnostics::DiagnosticsSink;
use crate::geometry::Placement;
use crate::symmetry::RotationTrace;

#[derive(Debug, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Placements handed to the reduction.
    Placements,
    /// Angle-signature groups.
    Groups,
    /// Placements skipped by anchor pruning.
    Pruned,
    /// Calls to the symmetry test.
    SymmetryTests,
    /// Symmetry tests that found a rotation.
    Symmetric,
    /// Representatives kept.
    Kept,
    /// Individual image comparisons (when used as a sink).
    Comparisons,
    /// Image comparisons that matched (when used as a sink).
    Matches,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Add every counter of `other` into `self`.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

impl DiagnosticsSink for Statistics {
    fn record(&mut self, _target: Placement, _image: Placement, _trace: &RotationTrace, matched: bool) {
        self.increment(Counters::Comparisons);
        if matched {
            self.increment(Counters::Matches);
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, counter) in Counters::iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}={}", counter, self.get(counter))?;
        }
        Ok(())
    }
}
