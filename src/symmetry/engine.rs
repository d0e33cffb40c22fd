// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry engine: decides whether two placements are rotations of each other.
//!
//! The rotation group is never stored. For a placement `p` the engine
//! produces its images in a fixed order:
//!
//! 1. Three seeds: `p`, one face turn of `p`, two face turns of `p`.
//! 2. For each seed, four alpha-plane turns (0 to 3 quarter turns), each
//!    followed by its half turn about a1 when that is enabled. These are the
//!    base images of the seed.
//! 3. When extended rotations are enabled, each extended transform in turn
//!    is applied to every base image of the seed whose guard positions are
//!    empty.
//!
//! With both options on, a placement has 24 base images (one per rotation,
//! duplicates included) plus whatever extended images its shape allows.

use std::collections::HashSet;
use std::ops::ControlFlow;

use strum::IntoEnumIterator;

use crate::config::SymmetryConfig;
use crate::diagnostics::{DiagnosticsSink, OrbitStabilizer};
use crate::geometry::Placement;
use crate::symmetry::extended::ExtendedRotation;
use crate::symmetry::rotation::{rotate_alpha_plane, rotate_around_axis1, rotate_beta_to_alpha};
use crate::symmetry::trace::RotationTrace;

const FACE_TURNS: u8 = 3;
const QUARTER_TURNS: u8 = 4;
const MAX_BASE_IMAGES: usize = (QUARTER_TURNS as usize) * 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct SymmetryEngine {
    config: SymmetryConfig,
}

impl SymmetryEngine {
    pub fn new(config: SymmetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SymmetryConfig {
        &self.config
    }

    /// Visit every image of `placement` in engine order.
    ///
    /// Stops as soon as `visit` breaks, and returns what it returned.
    pub fn for_each_image<F>(&self, placement: Placement, mut visit: F) -> ControlFlow<()>
    where
        F: FnMut(Placement, RotationTrace) -> ControlFlow<()>,
    {
        let mut seed = placement;
        for face_turns in 0..FACE_TURNS {
            let mut base = [(Placement::empty(), RotationTrace::identity()); MAX_BASE_IMAGES];
            let mut nbase = 0;
            let mut turned = seed;
            for quarter_turns in 0..QUARTER_TURNS {
                let trace = RotationTrace::identity()
                    .with_face_turns(face_turns)
                    .with_quarter_turns(quarter_turns);
                base[nbase] = (turned, trace);
                nbase += 1;
                if self.config.half_turn {
                    base[nbase] = (rotate_around_axis1(turned), trace.with_half_turn());
                    nbase += 1;
                }
                turned = rotate_alpha_plane(turned);
            }
            let base = &base[..nbase];

            for &(image, trace) in base {
                visit(image, trace)?;
            }
            if self.config.extended_rotations {
                for extended in ExtendedRotation::iter() {
                    for &(image, trace) in base {
                        if let Some(moved) = extended.apply(image) {
                            visit(moved, trace.with_extended(extended))?;
                        }
                    }
                }
            }
            seed = rotate_beta_to_alpha(seed);
        }
        ControlFlow::Continue(())
    }

    /// Every image of `placement` with the rotations that produced it.
    pub fn images(&self, placement: Placement) -> Vec<(Placement, RotationTrace)> {
        let mut images = Vec::new();
        let _ = self.for_each_image(placement, |image, trace| {
            images.push((image, trace));
            ControlFlow::Continue(())
        });
        images
    }

    /// True if `target` is one of the images of `candidate`.
    pub fn are_symmetric(&self, target: &Placement, candidate: &Placement) -> bool {
        self.for_each_image(*candidate, |image, _| {
            if image == *target {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// As [`are_symmetric`](Self::are_symmetric), but visits every image and
    /// reports each comparison to `sink`.
    pub fn are_symmetric_with<S>(&self, target: &Placement, candidate: &Placement, sink: &mut S) -> bool
    where
        S: DiagnosticsSink + ?Sized,
    {
        let mut found = false;
        let _ = self.for_each_image(*candidate, |image, trace| {
            let matched = image == *target;
            found |= matched;
            sink.record(*target, image, &trace, matched);
            ControlFlow::Continue(())
        });
        found
    }

    /// Distinct images of `placement`, in the order first produced.
    pub fn orbit(&self, placement: Placement) -> Vec<Placement> {
        let mut seen = HashSet::new();
        let mut orbit = Vec::new();
        let _ = self.for_each_image(placement, |image, _| {
            if seen.insert(image) {
                orbit.push(image);
            }
            ControlFlow::Continue(())
        });
        orbit
    }

    /// Compare `placement` with itself while tracking its orbit and stabilizer.
    pub fn orbit_stabilizer(&self, placement: Placement) -> OrbitStabilizer {
        let mut tracker = OrbitStabilizer::new();
        self.are_symmetric_with(&placement, &placement, &mut tracker);
        tracker
    }
}
