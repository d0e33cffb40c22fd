// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of cuboctahedral tiles up to rotation.
//!
//! A tile is a set of arms placed at some of the 12 vertices of a
//! cuboctahedron. Two tiles are the same type when a rotation of the
//! cuboctahedron carries one onto the other. This crate lists every
//! placement with a given number of arms and keeps one representative of
//! each type.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! 1. **Generation** (`enumerate::generate`): every placement with `n` arms,
//!    in a fixed total order.
//! 2. **Grouping** (`grouping`): placements are partitioned by their angle
//!    signature, the sorted list of angles between pairs of arms. Rotations
//!    preserve it, so only placements in the same group need comparing.
//! 3. **Symmetry** (`symmetry`): within each group, the engine composes three
//!    generator rotations (plus four guarded transforms for tiles in a
//!    hexagonal plane) to test whether two placements are equivalent.
//! 4. **Reduction** (`enumerate::reduce`): each group is walked from its end,
//!    keeping placements not equivalent to one already kept.
//!
//! Diagnostics (`diagnostics`) observe the engine's comparisons without
//! changing them: orbit and stabilizer tracking, counters, and trace logging.
//!
//! # Parallelization
//!
//! Signature groups are independent. With the `parallel` feature and
//! `ReduceConfig::parallel` set, they are reduced concurrently with rayon
//! and merged back in group order.
//!
//! # Example
//!
//! ```
//! use tile_symmetry::{Enumerator, Placement, Settings};
//!
//! let enumerator = Enumerator::new(&Settings::default());
//! let tiles = enumerator.unique_tiles(2);
//! assert_eq!(tiles.representatives[0].to_string(), "a1, a2");
//!
//! let b2_b3: Placement = "b2 b3".parse().unwrap();
//! assert_eq!(enumerator.lookup(b2_b3), Some("a1, a2".parse().unwrap()));
//! ```

pub mod config;
pub mod diagnostics;
pub mod enumerate;
pub mod error;
pub mod geometry;
pub mod grouping;
pub mod symmetry;

// Re-export commonly used types
pub use config::{ReduceConfig, Settings, SymmetryConfig};
pub use enumerate::{generate, reduce, Enumerator, Reduction};
pub use error::{Result, TileError};
pub use geometry::{position_index, position_name, Placement, Position};
pub use symmetry::SymmetryEngine;
