//! Synthetic square-matrix fixtures for the matrix
//! multiplication benchmarks.
//!
//! Each fixture is a flat text file: a dimension line holding
//! `n`, then `n` lines of `n` space-separated decimal cells,
//! every cell drawn uniformly from `[0, 100)`.

use std::path::Path;

use rand::Rng;

pub mod error;
pub mod matrix;
pub mod rng;
pub mod writer;

pub use error::{FixtureError, FixtureResult};
pub use matrix::{Matrix, VALUE_BOUND};

/// Sample an `n` x `n` matrix and persist it at `path`,
/// creating or overwriting the file.
///
/// The file satisfies the fixture layout on success. A failure
/// partway through a write leaves whatever made it to disk; no
/// cleanup or atomic rename is attempted.
pub fn generate<R: Rng>(
    rng: &mut R,
    n: usize,
    path: impl AsRef<Path>,
) -> FixtureResult {
    let matrix = Matrix::sample(rng, n)?;
    writer::write_matrix(&matrix, path)
}
