//! Return-value containers for derived matrices
//!
//! Sparse matrices are CSR (`sprs::CsMat`), dense ones `ndarray::Array2`.
//! Both are built from (row, col, value) triplets; duplicate coordinates are
//! summed, which is what turns repeated tokens into counts.

use ndarray::{Array1, Array2};
use sprs::{CsMat, TriMat};

/// Sparse-or-dense 2-D matrix
#[derive(Debug, Clone)]
pub enum Matrix<T> {
    Sparse(CsMat<T>),
    Dense(Array2<T>),
}

impl<T> Matrix<T> {
    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Matrix::Sparse(m) => (m.rows(), m.cols()),
            Matrix::Dense(m) => m.dim(),
        }
    }

    pub fn is_sparse(&self) -> bool {
        matches!(self, Matrix::Sparse(_))
    }

    pub fn as_sparse(&self) -> Option<&CsMat<T>> {
        match self {
            Matrix::Sparse(m) => Some(m),
            Matrix::Dense(_) => None,
        }
    }

    pub fn as_dense(&self) -> Option<&Array2<T>> {
        match self {
            Matrix::Dense(m) => Some(m),
            Matrix::Sparse(_) => None,
        }
    }
}

// sprs needs num-traits bounds for CSR assembly and densification, so the
// numeric constructors are stamped out per scalar type.
macro_rules! impl_numeric_matrix {
    ($($scalar:ty),*) => {
        $(
            impl Matrix<$scalar> {
                /// Assemble from triplets; duplicates at the same coordinates are summed
                pub fn from_triplets<I>(shape: (usize, usize), triplets: I, sparse: bool) -> Self
                where
                    I: IntoIterator<Item = (usize, usize, $scalar)>,
                {
                    let mut tri = TriMat::new(shape);
                    for (row, col, value) in triplets {
                        tri.add_triplet(row, col, value);
                    }
                    let csr: CsMat<$scalar> = tri.to_csr();
                    if sparse {
                        Matrix::Sparse(csr)
                    } else {
                        Matrix::Dense(csr.to_dense())
                    }
                }

                /// Value at (row, col); zero for absent entries and out-of-range cells
                pub fn get(&self, row: usize, col: usize) -> $scalar {
                    match self {
                        Matrix::Sparse(m) => m.get(row, col).copied().unwrap_or(0.0),
                        Matrix::Dense(m) => m.get([row, col]).copied().unwrap_or(0.0),
                    }
                }

                pub fn into_dense(self) -> Array2<$scalar> {
                    match self {
                        Matrix::Sparse(m) => m.to_dense(),
                        Matrix::Dense(m) => m,
                    }
                }

                /// Number of non-zero cells
                pub fn nnz(&self) -> usize {
                    match self {
                        Matrix::Sparse(m) => m.data().iter().filter(|v| **v != 0.0).count(),
                        Matrix::Dense(m) => m.iter().filter(|v| **v != 0.0).count(),
                    }
                }
            }
        )*
    };
}

impl_numeric_matrix!(f32, f64);

/// Node labels as raw LABEL indices or a one-hot matrix
#[derive(Debug, Clone, PartialEq)]
pub enum LabelOutput {
    Indices(Array1<usize>),
    OneHot(Array2<i32>),
}

impl LabelOutput {
    pub fn as_indices(&self) -> Option<&Array1<usize>> {
        match self {
            LabelOutput::Indices(v) => Some(v),
            LabelOutput::OneHot(_) => None,
        }
    }

    pub fn as_one_hot(&self) -> Option<&Array2<i32>> {
        match self {
            LabelOutput::OneHot(m) => Some(m),
            LabelOutput::Indices(_) => None,
        }
    }
}
