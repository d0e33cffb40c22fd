// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Diagnostics for the symmetry engine.
//!
//! None of this affects which tiles are kept. It lets callers watch the
//! engine's comparisons (sinks), check group-theoretic bookkeeping (orbits
//! and stabilizers), and count the work a reduction did (statistics). All
//! state is owned by the caller and passed in explicitly.
//!
//! ## Module Structure
//!
//! - `sink`: the `DiagnosticsSink` trait, plus null and tracing sinks
//! - `orbit`: orbit and stabilizer tracking
//! - `statistics`: per-reduction counters

pub mod orbit;
pub mod sink;
pub mod statistics;

pub use orbit::OrbitStabilizer;
pub use sink::{DiagnosticsSink, NoDiagnostics, TracingSink};
pub use statistics::{Counters, Statistics};
