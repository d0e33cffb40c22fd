// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of tile placements up to rotation.
//!
//! ## Module Structure
//!
//! - `generate`: every placement with a given number of arms
//! - `reduce`: one representative per orbit
//! - `mod`: the [`Enumerator`] driver tying the two to a configuration

pub mod generate;
pub mod reduce;

pub use generate::generate;
pub use reduce::{reduce, reduce_sequential, Reduction};

#[cfg(feature = "parallel")]
pub use reduce::reduce_parallel;

use tracing::debug;

use crate::config::{ReduceConfig, Settings};
use crate::diagnostics::{DiagnosticsSink, NoDiagnostics};
use crate::geometry::Placement;
use crate::symmetry::SymmetryEngine;

/// Generates placements and reduces them with one configured engine.
///
/// ```
/// use tile_symmetry::config::Settings;
/// use tile_symmetry::enumerate::Enumerator;
///
/// let enumerator = Enumerator::new(&Settings::default());
/// let tiles = enumerator.unique_tiles(2);
/// assert_eq!(tiles.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Enumerator {
    engine: SymmetryEngine,
    config: ReduceConfig,
}

impl Enumerator {
    pub fn new(settings: &Settings) -> Self {
        Self {
            engine: SymmetryEngine::new(settings.symmetry),
            config: settings.reduce,
        }
    }

    pub fn engine(&self) -> &SymmetryEngine {
        &self.engine
    }

    pub fn config(&self) -> &ReduceConfig {
        &self.config
    }

    pub fn generate(&self, n: usize) -> Vec<Placement> {
        generate(n)
    }

    /// Reduce an arbitrary list. No pruning is applied, since the list need
    /// not contain whole orbits.
    pub fn reduce(&self, placements: &[Placement]) -> Reduction {
        self.run(placements, false)
    }

    /// Representatives of every orbit of `n`-armed placements.
    pub fn unique_tiles(&self, n: usize) -> Reduction {
        let placements = generate(n);
        let prune = self.config.anchor_pruning && self.engine.config().half_turn;
        let reduction = self.run(&placements, prune);
        debug!(n, kept = reduction.len(), "unique tiles");
        reduction
    }

    /// As [`unique_tiles`](Self::unique_tiles), sequentially, reporting every
    /// image comparison to `sink`.
    pub fn unique_tiles_with<S>(&self, n: usize, sink: &mut S) -> Reduction
    where
        S: DiagnosticsSink + ?Sized,
    {
        let placements = generate(n);
        let prune = self.config.anchor_pruning && self.engine.config().half_turn;
        reduce_sequential(&self.engine, &placements, prune, sink)
    }

    /// The representative of `placement` among the tiles with the same
    /// number of arms.
    pub fn lookup(&self, placement: Placement) -> Option<Placement> {
        self.unique_tiles(placement.len())
            .representative_of(&self.engine, placement)
    }

    fn run(&self, placements: &[Placement], prune: bool) -> Reduction {
        if self.config.parallel {
            #[cfg(feature = "parallel")]
            {
                return reduce_parallel(&self.engine, placements, prune);
            }
            #[cfg(not(feature = "parallel"))]
            tracing::warn!("parallel reduction requested but the `parallel` feature is disabled");
        }
        reduce_sequential(&self.engine, placements, prune, &mut NoDiagnostics)
    }
}
