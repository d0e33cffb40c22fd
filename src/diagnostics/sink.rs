// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Observers of the symmetry engine's comparisons.

use tracing::trace;

use crate::geometry::Placement;
use crate::symmetry::RotationTrace;

/// Receives one call per image the engine compares against the fixed tile.
///
/// Sinks only observe; they never change the outcome of a comparison.
pub trait DiagnosticsSink {
    /// `target` is the tile held fixed, `image` the rotated tile compared
    /// against it, and `matched` whether the two are equal.
    fn record(&mut self, target: Placement, image: Placement, trace: &RotationTrace, matched: bool);
}

/// A sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl DiagnosticsSink for NoDiagnostics {
    fn record(&mut self, _target: Placement, _image: Placement, _trace: &RotationTrace, _matched: bool) {}
}

/// Logs every comparison at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    /// Log only comparisons that matched.
    pub matches_only: bool,
}

impl DiagnosticsSink for TracingSink {
    fn record(&mut self, target: Placement, image: Placement, trace: &RotationTrace, matched: bool) {
        if matched {
            trace!(target: "tile_symmetry::compare", tile = %target, rotation = %trace, "match");
        } else if !self.matches_only {
            trace!(target: "tile_symmetry::compare", tile = %target, %image, rotation = %trace, "no match");
        }
    }
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for &mut S {
    fn record(&mut self, target: Placement, image: Placement, trace: &RotationTrace, matched: bool) {
        (**self).record(target, image, trace, matched);
    }
}

/// Feed both sinks.
impl<A: DiagnosticsSink, B: DiagnosticsSink> DiagnosticsSink for (A, B) {
    fn record(&mut self, target: Placement, image: Placement, trace: &RotationTrace, matched: bool) {
        self.0.record(target, image, trace, matched);
        self.1.record(target, image, trace, matched);
    }
}
