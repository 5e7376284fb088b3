//! Properties of the generated levels.
//!
//! Run with: cargo test --test partition

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use trisplit::generator::adjacency;
use trisplit::{GenerateError, GeneratorConfig, Grid, LevelGenerator, Partition, generate};

/// Verify the partition guarantees without relying on [`Partition::verify`].
fn assert_partition(partition: &Partition, expected_pieces: usize) {
    let grid: Grid = Grid::build(partition.grid_size).unwrap();
    assert_eq!(partition.piece_count(), expected_pieces);

    // Totality and disjointness
    let mut all: Vec<usize> = partition
        .pieces
        .iter()
        .flat_map(|p| p.triangles.iter().copied())
        .collect();
    all.sort_unstable();
    assert_eq!(all, (0..grid.triangle_count).collect::<Vec<usize>>());

    // Connectivity, with a depth-first walk inside each piece
    for piece in &partition.pieces {
        assert!(!piece.is_empty(), "piece {} is empty", piece.id);
        let members: HashSet<usize> = piece.triangles.iter().copied().collect();
        let mut reached: HashSet<usize> = HashSet::from([piece.triangles[0]]);
        let mut stack: Vec<usize> = vec![piece.triangles[0]];
        while let Some(t) = stack.pop() {
            for n in adjacency::neighbors(t, &grid) {
                if members.contains(&n) && reached.insert(n) {
                    stack.push(n);
                }
            }
        }
        assert_eq!(reached.len(), members.len(), "piece {} is split", piece.id);
    }
}

#[test]
fn single_cell_grid_fails() {
    assert!(matches!(
        generate(1, 6, Some(1)),
        Err(GenerateError::Configuration(_))
    ));
}

#[test]
fn empty_grid_fails() {
    assert!(matches!(
        generate(0, 6, None),
        Err(GenerateError::Configuration(_))
    ));
}

#[test]
fn six_pieces_on_3x3_grid() {
    let partition: Partition = generate(3, 6, Some(2025)).unwrap();
    assert_partition(&partition, 6);
    assert_eq!(partition.line_triangle_count, 12);
    assert_eq!(partition.sizes().iter().sum::<usize>(), 36);

    let again: Partition = generate(3, 6, Some(2025)).unwrap();
    assert_eq!(partition, again);
    assert_eq!(
        serde_json::to_string(&partition).unwrap(),
        serde_json::to_string(&again).unwrap()
    );
}

#[test]
fn twelve_pieces_on_3x3_grid() {
    for seed in 0..200 {
        let partition: Partition = generate(3, 12, Some(seed)).unwrap();
        assert_partition(&partition, 12);
    }
}

#[test]
fn without_pockets_between_pieces() {
    let config = GeneratorConfig {
        fill_between_pieces: false,
        ..Default::default()
    };
    let mut generator = LevelGenerator::new(config);
    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let partition: Partition = generator.generate(3, 9, &mut rng).unwrap();
        assert_partition(&partition, 9);
    }
}

#[test]
fn unseeded_generation() {
    let partition: Partition = generate(4, 8, None).unwrap();
    assert_partition(&partition, 8);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn partition_guarantees(grid_size in 2u32..7, shape_count in 0u32..20, seed in any::<u64>()) {
        let partition: Partition = generate(grid_size, shape_count, Some(seed)).unwrap();
        assert_partition(&partition, shape_count.clamp(6, 12) as usize);
        prop_assert!(partition.verify().is_ok());
    }

    #[test]
    fn same_seed_same_partition(grid_size in 2u32..6, shape_count in 6u32..13, seed in any::<u64>()) {
        let first: Partition = generate(grid_size, shape_count, Some(seed)).unwrap();
        let second: Partition = generate(grid_size, shape_count, Some(seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}
