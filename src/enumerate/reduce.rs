// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reduction of a placement list to one representative per orbit.
//!
//! Placements are first grouped by angle signature. Each group is then walked
//! from its last placement to its first, keeping a placement only if it is not
//! a rotation of one already kept from that group. The kept lists are
//! concatenated in group order.

use tracing::debug;

use crate::diagnostics::{Counters, DiagnosticsSink, NoDiagnostics, Statistics};
use crate::geometry::{Placement, Position};
use crate::grouping::{Grouper, SignatureGroup};
use crate::symmetry::SymmetryEngine;

/// Representatives together with the counters of the run that found them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reduction {
    pub representatives: Vec<Placement>,
    pub statistics: Statistics,
}

impl Reduction {
    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// The representative `placement` is a rotation of, if any.
    pub fn representative_of(&self, engine: &SymmetryEngine, placement: Placement) -> Option<Placement> {
        self.representatives
            .iter()
            .copied()
            .find(|representative| engine.are_symmetric(representative, &placement))
    }
}

/// One representative per orbit of `placements`.
///
/// The output preserves the order described in the module docs. Equal
/// placements in the input count once.
pub fn reduce(engine: &SymmetryEngine, placements: &[Placement]) -> Vec<Placement> {
    reduce_sequential(engine, placements, false, &mut NoDiagnostics).representatives
}

/// Reduce one signature group.
///
/// With `anchor_pruning`, non-empty placements without an arm at a1 are
/// skipped. That is only sound when the group holds whole orbits.
pub(crate) fn reduce_group<S>(
    engine: &SymmetryEngine,
    group: &SignatureGroup,
    anchor_pruning: bool,
    sink: &mut S,
) -> Reduction
where
    S: DiagnosticsSink + ?Sized,
{
    let mut statistics = Statistics::new();
    let mut kept: Vec<Placement> = Vec::new();
    statistics.add(Counters::Placements, group.placements.len() as u64);
    statistics.increment(Counters::Groups);

    for &candidate in group.placements.iter().rev() {
        if anchor_pruning && !candidate.is_empty() && !candidate.contains(Position::A1) {
            statistics.increment(Counters::Pruned);
            continue;
        }
        let mut symmetric = false;
        for representative in &kept {
            statistics.increment(Counters::SymmetryTests);
            if engine.are_symmetric_with(representative, &candidate, sink) {
                symmetric = true;
                break;
            }
        }
        if symmetric {
            statistics.increment(Counters::Symmetric);
        } else {
            kept.push(candidate);
        }
    }
    statistics.add(Counters::Kept, kept.len() as u64);

    Reduction {
        representatives: kept,
        statistics,
    }
}

fn merge(parts: impl IntoIterator<Item = Reduction>) -> Reduction {
    let mut total = Reduction::default();
    for part in parts {
        total.representatives.extend(part.representatives);
        total.statistics.merge(&part.statistics);
    }
    total
}

/// Reduce group by group on the current thread, reporting comparisons to `sink`.
pub fn reduce_sequential<S>(
    engine: &SymmetryEngine,
    placements: &[Placement],
    anchor_pruning: bool,
    sink: &mut S,
) -> Reduction
where
    S: DiagnosticsSink + ?Sized,
{
    let grouper = Grouper::from_placements(placements.iter().copied());
    let reduction = merge(
        grouper
            .groups()
            .iter()
            .map(|group| reduce_group(engine, group, anchor_pruning, &mut *sink))
            .collect::<Vec<_>>(),
    );
    log_summary(&reduction);
    reduction
}

/// Reduce every signature group concurrently.
///
/// Gives the same output, in the same order, as [`reduce_sequential`].
#[cfg(feature = "parallel")]
pub fn reduce_parallel(engine: &SymmetryEngine, placements: &[Placement], anchor_pruning: bool) -> Reduction {
    use rayon::prelude::*;

    let grouper = Grouper::from_placements(placements.iter().copied());
    let parts: Vec<Reduction> = grouper
        .groups()
        .par_iter()
        .map(|group| reduce_group(engine, group, anchor_pruning, &mut NoDiagnostics))
        .collect();
    let reduction = merge(parts);
    log_summary(&reduction);
    reduction
}

fn log_summary(reduction: &Reduction) {
    let stats = &reduction.statistics;
    debug!(
        placements = stats.get(Counters::Placements),
        groups = stats.get(Counters::Groups),
        kept = stats.get(Counters::Kept),
        comparisons = stats.get(Counters::SymmetryTests),
        pruned = stats.get(Counters::Pruned),
        "reduced placements"
    );
}
