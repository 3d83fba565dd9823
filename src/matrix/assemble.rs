//! Row/column assembly across sparse matrices.

use num_traits::Num;
use sprs::{CsMat, TriMat};

use crate::error::GridmatError;

/// Build a matrix from rows (columns) picked out of several sources.
///
/// The output's k-th outer slice equals the k-th outer slice of the source
/// matrix selected by `indices[k]`. All sources must share one storage
/// order; the output uses the same order. The output's outer size is the
/// number of indices and its inner size is the largest inner size among the
/// sources, so slices drawn from a narrower source are tail-padded with
/// zeros.
///
/// An empty source sequence yields an empty matrix.
///
/// # Example
///
/// With row-major sources A (5x3) and B (3x2), the indices `[0, 1, 1, 0, 0]`
/// produce a 5x3 matrix whose rows are A0, B1, B2, A3, A4, with the B rows
/// padded by a zero third column.
pub fn assemble<N>(sources: &[CsMat<N>], indices: &[usize]) -> Result<CsMat<N>, GridmatError>
where
    N: Copy + Num,
{
    if sources.is_empty() {
        return Ok(CsMat::zero((0, 0)));
    }

    let row_major = sources[0].is_csr();
    if sources.iter().any(|m| m.is_csr() != row_major) {
        return Err(GridmatError::StorageOrderMismatch);
    }
    for &index in indices {
        if index >= sources.len() {
            return Err(GridmatError::IndexOutOfRange {
                index,
                bound: sources.len(),
            });
        }
    }

    let outer_size = indices.len();
    let inner_size = sources.iter().map(|m| m.inner_dims()).max().unwrap_or(0);
    let shape = if row_major {
        (outer_size, inner_size)
    } else {
        (inner_size, outer_size)
    };

    let mut triplets = TriMat::new(shape);
    for (k, &source_index) in indices.iter().enumerate() {
        let source = &sources[source_index];
        let slice = source
            .outer_view(k)
            .ok_or(GridmatError::IndexOutOfRange {
                index: k,
                bound: source.outer_dims(),
            })?;
        for (inner_index, &value) in slice.iter() {
            if row_major {
                triplets.add_triplet(k, inner_index, value);
            } else {
                triplets.add_triplet(inner_index, k, value);
            }
        }
    }

    Ok(if row_major {
        triplets.to_csr()
    } else {
        triplets.to_csc()
    })
}
