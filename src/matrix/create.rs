//! Matrix construction from literal element lists.
//!
//! Elements are given in row-major order (row by row from the top-left)
//! irrespective of the output's storage layout.

use ndarray::Array2;
use num_traits::Num;
use sprs::{CsMat, TriMat};

use crate::error::GridmatError;

/// Dense matrix from a row-major element list.
pub fn create_dense<N: Clone>(
    rows: usize,
    cols: usize,
    elements: &[N],
) -> Result<Array2<N>, GridmatError> {
    if elements.len() != rows * cols {
        return Err(GridmatError::CountMismatch {
            expected: rows * cols,
            actual: elements.len(),
        });
    }
    Ok(Array2::from_shape_vec((rows, cols), elements.to_vec())
        .expect("shape checked above"))
}

/// Row-major sparse matrix from a row-major element list.
///
/// Zero elements are not stored.
pub fn create_sparse<N>(
    rows: usize,
    cols: usize,
    elements: &[N],
) -> Result<CsMat<N>, GridmatError>
where
    N: Copy + Num,
{
    if elements.len() != rows * cols {
        return Err(GridmatError::CountMismatch {
            expected: rows * cols,
            actual: elements.len(),
        });
    }
    let mut triplets = TriMat::new((rows, cols));
    for row in 0..rows {
        for col in 0..cols {
            let value = elements[row * cols + col];
            if !value.is_zero() {
                triplets.add_triplet(row, col, value);
            }
        }
    }
    Ok(triplets.to_csr())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dense() {
        let mat = create_dense(3, 2, &[3.0, 0.0, 0.0, 1.0, 9.0, 4.0]).unwrap();
        assert_eq!(mat, ndarray::arr2(&[[3.0, 0.0], [0.0, 1.0], [9.0, 4.0]]));
    }

    #[test]
    fn test_create_sparse_skips_zeros() {
        let mat = create_sparse(3, 2, &[3.0, 0.0, 0.0, 1.0, 9.0, 4.0]).unwrap();
        assert_eq!(mat.shape(), (3, 2));
        assert_eq!(mat.nnz(), 4);
        assert_eq!(mat.to_dense(), create_dense(3, 2, &[3.0, 0.0, 0.0, 1.0, 9.0, 4.0]).unwrap());
    }

    #[test]
    fn test_create_rejects_wrong_element_count() {
        assert!(matches!(
            create_dense(2, 2, &[1.0, 2.0, 3.0]).unwrap_err(),
            GridmatError::CountMismatch {
                expected: 4,
                actual: 3
            }
        ));
        assert!(create_sparse(2, 2, &[1.0]).is_err());
    }

    #[test]
    fn test_container_sums_duplicate_triplets() {
        // The bulk-construction contract the builder relies on: triplets at
        // one position add up instead of overwriting each other.
        let mut triplets = TriMat::new((2, 2));
        triplets.add_triplet(0, 0, 3.0);
        triplets.add_triplet(0, 0, 4.0);
        let mat: CsMat<f64> = triplets.to_csr();
        assert_eq!(mat.nnz(), 1);
        assert_eq!(mat.get(0, 0), Some(&7.0));
    }
}
