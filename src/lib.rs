//! A dense column-major matrix library, generic over real and complex
//! scalars, with all numeric kernels delegated to native BLAS/LAPACK
//! routines through the `blas` and `lapack` crates.

#[macro_use] extern crate error_chain;

mod errors;
pub use crate::errors::{Error, ErrorKind, Result};

#[macro_use] mod macro_def;

pub mod element;
pub use crate::element::{MatrixElement, NumericElement};

pub mod core;
pub use crate::core::{flatten, BlockMatrix, Matrix, Transpose};

mod subm;
pub use crate::subm::IndexCollection;

mod map;
mod norm;

mod ops;
pub use crate::ops::{gemm, gemv, ger, gerc, Dot};

mod solve;
pub use crate::solve::{ApproxSoln, Solve};

mod decompose;
pub use crate::decompose::{
    Compose, Eigen, EigenDecompose, Schur, SchurDecompose, SingularValueDecompose, SVD,
};
