//! Stochastic interleaving of sparse matrices.

use log::debug;
use num_traits::Num;
use rand::prelude::*;
use sprs::CsMat;

use super::assemble::assemble;
use crate::error::GridmatError;
use crate::sampling::{closed_loop_moving_mean, darts_sampling};

/// Interleave rows (columns) of several matrices at target proportions.
///
/// One uniform draw per output slice is smoothed with the closed-loop
/// moving mean at radius `coupling`, then darts sampling maps each draw to
/// a source index; the selected slices are assembled into the output. A
/// `coupling` of 0 leaves the draws independent; larger values make
/// neighboring output slices more likely to come from the same source.
///
/// The draw sequence is seeded by `seed`, so results are reproducible. The
/// reference defaults are `coupling = 0` and `seed = 42`.
///
/// All sources must share one outer size; one proportion per source is
/// required, with any positive total.
pub fn interleave<N>(
    sources: &[CsMat<N>],
    proportions: &[f64],
    coupling: usize,
    seed: u64,
) -> Result<CsMat<N>, GridmatError>
where
    N: Copy + Num,
{
    if sources.is_empty() {
        return Err(GridmatError::EmptyInput);
    }
    if proportions.len() != sources.len() {
        return Err(GridmatError::CountMismatch {
            expected: sources.len(),
            actual: proportions.len(),
        });
    }
    let outer_size = sources[0].outer_dims();
    for matrix in sources {
        if matrix.outer_dims() != outer_size {
            return Err(GridmatError::OuterSizeMismatch {
                a: outer_size,
                b: matrix.outer_dims(),
            });
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let draws: Vec<f64> = (0..outer_size).map(|_| rng.gen()).collect();
    let smoothed = closed_loop_moving_mean(&draws, 0.0, 1.0, coupling);
    let indices = darts_sampling(proportions, &smoothed);
    debug!(
        "interleave: {} sources, {} output slices, coupling {}",
        sources.len(),
        indices.len(),
        coupling
    );

    assemble(sources, &indices)
}
