// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::*;
use tile_symmetry::config::{ReduceConfig, Settings, SymmetryConfig};
use tile_symmetry::geometry::{choose, NPOSITIONS};
use tile_symmetry::{generate, reduce, Enumerator, Placement, Position};

#[test]
fn test_generate_counts_and_weights() {
    for n in 0..=NPOSITIONS {
        let placements = generate(n);
        assert_eq!(placements.len(), choose(NPOSITIONS, n));
        assert!(placements.iter().all(|p| p.len() == n));
        assert_eq!(all_placements(n).len(), placements.len(), "duplicates for n={}", n);
    }
    assert!(generate(13).is_empty());
    assert!(generate(100).is_empty());
}

#[test]
fn test_extended_orbit_counts() {
    let engine = extended_engine();
    for n in 0..=NPOSITIONS {
        assert_eq!(reduce(&engine, &generate(n)).len(), EXTENDED_COUNTS[n], "n={}", n);
    }
}

#[test]
fn test_standard_orbit_counts() {
    let engine = standard_engine();
    for n in 0..=NPOSITIONS {
        assert_eq!(reduce(&engine, &generate(n)).len(), STANDARD_COUNTS[n], "n={}", n);
    }
}

#[test]
fn test_extended_rotations_merge_small_tiles() {
    for n in 2..=5 {
        assert!(EXTENDED_COUNTS[n] < STANDARD_COUNTS[n]);
        let extended = reduce(&extended_engine(), &generate(n)).len();
        let standard = reduce(&standard_engine(), &generate(n)).len();
        assert!(extended < standard, "n={}", n);
    }
}

#[test]
fn test_zero_one_and_twelve_arms() {
    for (label, engine) in engines() {
        assert_eq!(reduce(&engine, &generate(0)), vec![Placement::empty()], "{}", label);
        assert_eq!(reduce(&engine, &generate(1)), vec![tile("a1")], "{}", label);
        assert_eq!(reduce(&engine, &generate(12)), vec![Placement::full()], "{}", label);
    }
}

#[test]
fn test_representatives_have_an_arm_at_a1() {
    let engine = extended_engine();
    for n in 1..=NPOSITIONS {
        for representative in reduce(&engine, &generate(n)) {
            assert!(representative.contains(Position::A1), "{}", representative);
        }
    }
}

#[test]
fn test_representatives_are_pairwise_distinct_types() {
    for (label, engine) in engines() {
        for n in [3, 4] {
            let representatives = reduce(&engine, &generate(n));
            for (i, a) in representatives.iter().enumerate() {
                for b in &representatives[i + 1..] {
                    assert!(!engine.are_symmetric(a, b), "{}: {} ~ {}", label, a, b);
                }
            }
        }
    }
}

#[test]
fn test_every_placement_has_a_representative() {
    for (label, engine) in engines() {
        for n in [2, 5] {
            let representatives = reduce(&engine, &generate(n));
            for p in generate(n) {
                let found = representatives.iter().any(|r| engine.are_symmetric(r, &p));
                assert!(found, "{}: {} has no representative", label, p);
            }
        }
    }
}

#[test]
fn test_reduce_is_idempotent() {
    for (label, engine) in engines() {
        for n in [2, 4, 7] {
            let once = reduce(&engine, &generate(n));
            let twice = reduce(&engine, &once);
            assert_eq!(sorted(twice), sorted(once), "{}: n={}", label, n);
        }
    }
}

#[test]
fn test_last_generated_member_is_kept() {
    let engine = extended_engine();
    for n in [2, 3, 4] {
        let placements = generate(n);
        for representative in reduce(&engine, &placements) {
            let greatest = placements
                .iter()
                .filter(|p| engine.are_symmetric(&representative, p))
                .max()
                .copied();
            assert_eq!(greatest, Some(representative));
        }
    }
}

#[test]
fn test_pruned_and_unpruned_agree() {
    for symmetry in [SymmetryConfig::default(), SymmetryConfig::standard()] {
        let make = |anchor_pruning| {
            Enumerator::new(&Settings {
                symmetry,
                reduce: ReduceConfig {
                    parallel: false,
                    anchor_pruning,
                },
            })
        };
        let (pruned, unpruned) = (make(true), make(false));
        for n in 0..=NPOSITIONS {
            assert_eq!(
                pruned.unique_tiles(n).representatives,
                unpruned.unique_tiles(n).representatives,
                "n={}",
                n
            );
        }
    }
}

#[test]
fn test_parallel_and_sequential_agree() {
    let make = |parallel| {
        Enumerator::new(&Settings {
            symmetry: SymmetryConfig::default(),
            reduce: ReduceConfig {
                parallel,
                anchor_pruning: true,
            },
        })
    };
    let (parallel, sequential) = (make(true), make(false));
    for n in 0..=NPOSITIONS {
        assert_eq!(
            parallel.unique_tiles(n).representatives,
            sequential.unique_tiles(n).representatives
        );
    }
}

#[test]
fn test_half_turn_disabled_never_prunes() {
    let enumerator = Enumerator::new(&Settings {
        symmetry: SymmetryConfig {
            extended_rotations: false,
            half_turn: false,
        },
        reduce: ReduceConfig::default(),
    });
    let reduction = enumerator.unique_tiles(3);
    assert_eq!(
        reduction
            .statistics
            .get(tile_symmetry::diagnostics::Counters::Pruned),
        0
    );
}
