use blockdiag::dense::{from_vec2d, invert_dense, mat_mul, DenseMatrix};
use blockdiag::DiagonalBlockMatrix;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use faer::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate a random block matrix with a square grid
fn random_block_matrix(blocks: usize, size: usize, seed: u64) -> DiagonalBlockMatrix<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grid: Vec<Vec<Vec<f64>>> = (0..blocks)
        .map(|_| {
            (0..blocks)
                .map(|_| (0..size).map(|_| rng.random::<f64>()).collect())
                .collect()
        })
        .collect();
    DiagonalBlockMatrix::from_diagonals(grid).unwrap()
}

/// Generate a random dense matrix as blockdiag's DenseMatrix
fn random_dense_matrix(n: usize, seed: u64) -> DenseMatrix<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..n).map(|_| rng.random::<f64>()).collect())
        .collect();
    from_vec2d(rows)
}

/// Generate a random faer Mat<f64>
fn random_faer_matrix(n: usize, seed: u64) -> Mat<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Mat::from_fn(n, n, |_, _| rng.random::<f64>())
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_multiply");

    for &(blocks, size) in &[(2usize, 8usize), (4, 16), (8, 32)] {
        let n = blocks * size;

        group.bench_with_input(
            BenchmarkId::new("blockwise", n),
            &(blocks, size),
            |b, &(blocks, size)| {
                let lhs = random_block_matrix(blocks, size, 42);
                let rhs = random_block_matrix(blocks, size, 43);
                b.iter(|| lhs.multiply(&rhs).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("dense_reference", n),
            &(blocks, size),
            |b, &(blocks, size)| {
                let lhs = random_block_matrix(blocks, size, 42).to_dense();
                let rhs = random_block_matrix(blocks, size, 43).to_dense();
                b.iter(|| mat_mul(&lhs, &rhs));
            },
        );
    }

    group.finish();
}

fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_invert");

    for &size in &[10, 50, 100] {
        group.bench_with_input(BenchmarkId::new("lu_inverse", size), &size, |b, &n| {
            let m = random_dense_matrix(n, 42);
            b.iter(|| invert_dense(&m).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("faer_lu_fullpiv", size), &size, |b, &n| {
            let m = random_faer_matrix(n, 42);
            b.iter(|| m.full_piv_lu());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply, bench_invert);
criterion_main!(benches);
