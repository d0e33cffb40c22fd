// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partitioning placements by angle signature.
//!
//! Rotations preserve the angle between any two arms, so only placements in
//! the same signature group can be rotations of one another. Reduction runs
//! the symmetry test inside each group and never across groups.

use std::collections::HashMap;

use crate::geometry::{AngleSignature, Placement};

/// Placements sharing one angle signature, in insertion order.
#[derive(Debug, Clone)]
pub struct SignatureGroup {
    pub signature: AngleSignature,
    pub placements: Vec<Placement>,
}

/// Collects placements into signature groups.
///
/// Groups are kept in the order their signature was first seen, so iterating
/// the grouper is deterministic. A placement already present in its group is
/// not added twice.
#[derive(Debug, Default)]
pub struct Grouper {
    groups: Vec<SignatureGroup>,
    index: HashMap<AngleSignature, usize>,
}

impl Grouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group every placement of an iterator.
    pub fn from_placements<I>(placements: I) -> Self
    where
        I: IntoIterator<Item = Placement>,
    {
        let mut grouper = Self::new();
        for placement in placements {
            grouper.insert(placement);
        }
        grouper
    }

    /// Compute the placement's signature and add it to that group.
    ///
    /// Returns false if the placement was already in its group.
    pub fn insert(&mut self, placement: Placement) -> bool {
        let signature = AngleSignature::of(placement);
        let slot = match self.index.get(&signature) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.index.insert(signature.clone(), slot);
                self.groups.push(SignatureGroup {
                    signature,
                    placements: Vec::new(),
                });
                slot
            }
        };
        let group = &mut self.groups[slot].placements;
        if group.contains(&placement) {
            return false;
        }
        group.push(placement);
        true
    }

    /// The group holding placements with this signature, if any.
    pub fn group(&self, signature: &AngleSignature) -> Option<&SignatureGroup> {
        self.index.get(signature).map(|&slot| &self.groups[slot])
    }

    pub fn groups(&self) -> &[SignatureGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<SignatureGroup> {
        self.groups
    }

    /// Number of distinct signatures seen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of placements across all groups.
    pub fn placement_count(&self) -> usize {
        self.groups.iter().map(|g| g.placements.len()).sum()
    }
}
