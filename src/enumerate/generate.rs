// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of all placements with a given number of arms.

use tracing::debug;

use crate::geometry::constants::{choose, NPOSITIONS};
use crate::geometry::{Placement, Position};

/// Every placement with exactly `n` arms, in increasing generation order.
///
/// At each position the "leave empty" branch is explored before the "place
/// an arm" branch, so the result is sorted by [`Placement`]'s `Ord`. There
/// are `C(12, n)` placements, and none for `n > 12`.
pub fn generate(n: usize) -> Vec<Placement> {
    if n > NPOSITIONS {
        debug!(n, count = 0, "no placements with more arms than positions");
        return Vec::new();
    }
    let mut placements = Vec::with_capacity(choose(NPOSITIONS, n));
    extend(0, n, Placement::empty(), &mut placements);
    debug!(n, count = placements.len(), "generated placements");
    placements
}

fn extend(position: usize, remaining: usize, partial: Placement, out: &mut Vec<Placement>) {
    if remaining == 0 {
        out.push(partial);
        return;
    }
    if position == NPOSITIONS {
        return;
    }
    extend(position + 1, remaining, partial, out);
    let arm = Position::from_index(position as u8);
    extend(position + 1, remaining - 1, partial.with(arm), out);
}
