//! Sparsity-pattern perturbation of selected rows.

use std::collections::HashMap;

use num_traits::Num;
use rand::distributions::uniform::SampleUniform;
use rand::prelude::*;
use sprs::CsMat;

use crate::error::GridmatError;

/// Randomize the non-zero positions and values of selected rows.
///
/// Each selected row keeps its non-zero count but receives fresh inner
/// indices, drawn without replacement from a shuffled pool of all inner
/// indices (re-shuffled whenever it runs out) and written back in ascending
/// order. Values are redrawn uniformly from [1, 2). Rows not selected are
/// copied unchanged.
///
/// Column-major input is not implemented and fails fast.
pub fn perturb<N>(
    matrix: &CsMat<N>,
    outer_indices: &[usize],
    seed: u64,
) -> Result<CsMat<N>, GridmatError>
where
    N: Copy + Num + PartialOrd + SampleUniform,
{
    if !matrix.is_csr() {
        return Err(GridmatError::NotImplemented("column-major perturb"));
    }
    let outer_size = matrix.outer_dims();
    let inner_size = matrix.inner_dims();
    for &index in outer_indices {
        if index >= outer_size {
            return Err(GridmatError::IndexOutOfRange {
                index,
                bound: outer_size,
            });
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let one = N::one();
    let two = one + one;

    // Pool of candidate inner indices. Drawing segments of a shuffled pool
    // instead of independent draws avoids duplicate indices within a row.
    let mut pool: Vec<usize> = (0..inner_size).collect();
    pool.shuffle(&mut rng);
    let mut pool_pos = 0usize;

    // New structure per selected row, in selection order. A row selected
    // twice is redrawn twice, keeping the last result.
    let mut replacements: HashMap<usize, (Vec<usize>, Vec<N>)> = HashMap::new();
    for &outer_index in outer_indices {
        let nnz = matrix.outer_view(outer_index).map_or(0, |v| v.nnz());
        if pool.len() - pool_pos <= nnz {
            pool.shuffle(&mut rng);
            pool_pos = 0;
        }
        let segment = &mut pool[pool_pos..pool_pos + nnz];
        segment.sort_unstable();
        let indices = segment.to_vec();
        pool_pos += nnz;

        let values: Vec<N> = (0..nnz).map(|_| rng.gen_range(one..two)).collect();
        replacements.insert(outer_index, (indices, values));
    }

    // Rebuild the matrix row by row.
    let mut indptr = Vec::with_capacity(outer_size + 1);
    let mut indices = Vec::with_capacity(matrix.nnz());
    let mut data = Vec::with_capacity(matrix.nnz());
    indptr.push(0);
    for outer_index in 0..outer_size {
        match replacements.get(&outer_index) {
            Some((new_indices, new_values)) => {
                indices.extend_from_slice(new_indices);
                data.extend_from_slice(new_values);
            }
            None => {
                if let Some(view) = matrix.outer_view(outer_index) {
                    for (inner_index, &value) in view.iter() {
                        indices.push(inner_index);
                        data.push(value);
                    }
                }
            }
        }
        indptr.push(indices.len());
    }

    Ok(CsMat::new((outer_size, inner_size), indptr, indices, data))
}
