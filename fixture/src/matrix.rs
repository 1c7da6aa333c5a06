use rand::Rng;

use crate::error::FixtureResult;

/// Exclusive upper bound for sampled cell values.
pub const VALUE_BOUND: u8 = 100;

/// Dense square matrix of uniformly sampled cells, row-major.
///
/// Lives only long enough to be serialized; nothing retains or
/// aliases it after the write.
pub struct Matrix {
    n: usize,
    cells: Vec<u8>,
}

impl Matrix {
    /// Sample an `n` x `n` matrix with cells drawn
    /// independently and uniformly from `[0, VALUE_BOUND)`.
    ///
    /// Allocation of the cell buffer is fallible; for the large
    /// benchmark tiers it is the dominant memory cost.
    pub fn sample<R: Rng>(
        rng: &mut R,
        n: usize,
    ) -> FixtureResult<Matrix> {
        assert!(n > 0, "matrix dimension must be nonzero");

        let mut cells = Vec::new();
        cells.try_reserve_exact(n * n)?;
        cells.extend((0..n * n).map(|_| rng.gen_range(0..VALUE_BOUND)));

        Ok(Matrix { n, cells })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Rows in generation order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.n)
    }
}
