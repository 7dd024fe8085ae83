use std::cmp;

use crate::core::{Matrix, Transpose};
use crate::element::{MatrixElement, NumericElement};
use crate::errors::*;

#[derive(Debug, Clone)]
pub struct ApproxSoln<E: NumericElement> {
    pub soln: Matrix<E>,
    /// Per right-hand-side column sums of squared residual magnitudes;
    /// only available for overdetermined systems.
    pub resid: Option<Vec<E::Magnitude>>,
}

pub trait Solve: Sized {
    type Rhs;
    type Output;
    type ApproxOutput;

    /// Solves exactly for square systems, in the least-squares sense
    /// otherwise.
    fn solve(&self, b: &Self::Rhs) -> Result<Self::Output>;
    fn solve_exact(&self, b: &Self::Rhs) -> Result<Self::Output>;
    fn solve_approx(&self, b: &Self::Rhs, trans: Transpose) -> Result<Self::ApproxOutput>;
}

impl<E: NumericElement> Solve for Matrix<E> {
    type Rhs = Matrix<E>;
    type Output = Matrix<E>;
    type ApproxOutput = ApproxSoln<E>;

    fn solve(&self, b: &Matrix<E>) -> Result<Matrix<E>> {
        if self.is_square() {
            self.solve_exact(b)
        } else {
            self.solve_approx(b, Transpose::No).map(|approx_soln| approx_soln.soln)
        }
    }

    fn solve_exact(&self, b: &Matrix<E>) -> Result<Matrix<E>> {
        if !self.is_square() {
            return Err(Error::from_kind(ErrorKind::SolveError(
                "solve_exact called with non-square matrix".to_string())))
        }
        let (n, nrhs) = (self.nrows(), b.ncols());
        if b.nrows() != n {
            return Err(Error::from_kind(ErrorKind::SolveError(
                "right-hand side nrows must match left-hand matrix nrows".to_string())))
        }

        let mut inout = self.clone();
        let mut soln = b.clone();
        let mut ipiv = vec![0; n];
        let ld = (n as i32).max(1);
        let info = E::gesv(n as i32, nrhs as i32, inout.elements_mut(), ld,
                           &mut ipiv, soln.elements_mut(), ld);

        if info < 0 {
            Err(Error::from_kind(ErrorKind::SolveError(
                format!("Matrix solver: Invalid call to gesv in argument {}", -info))))
        } else if info > 0 {
            Err(Error::from_kind(ErrorKind::SolveError(
                "Matrix solver: matrix is singular".to_string())))
        } else {
            Ok(soln)
        }
    }

    fn solve_approx(&self, b: &Matrix<E>, trans: Transpose) -> Result<ApproxSoln<E>> {
        let (m, n) = self.dims();
        let (op_rows, op_cols) = match trans {
            Transpose::No => (m, n),
            _ => (n, m),
        };
        let nrhs = b.ncols();
        if b.nrows() != op_rows {
            return Err(Error::from_kind(ErrorKind::SolveError(
                "right-hand side nrows must match left-hand matrix nrows".to_string())))
        }

        let ldb = cmp::max(m, n);
        let mut inout = self.clone();
        let mut soln = b.clone();
        // the RHS buffer must also hold the (possibly longer) solution
        soln.extend(ldb, nrhs, E::zero());

        let info = E::gels(trans, m as i32, n as i32, nrhs as i32,
                           inout.elements_mut(), (m as i32).max(1),
                           soln.elements_mut(), (ldb as i32).max(1));

        if info < 0 {
            Err(Error::from_kind(ErrorKind::SolveError(
                format!("Approx matrix solver: Invalid call to gels in argument {}", -info))))
        } else if info > 0 {
            Err(Error::from_kind(ErrorKind::SolveError(
                "Approx matrix solver: matrix is rank-deficient".to_string())))
        } else if op_rows > op_cols {
            let resid = (0..nrhs)
                .map(|j| {
                    soln.subm(op_cols..op_rows, j)
                        .fold(E::Magnitude::zero(), |acc, e| acc + e.length_squared())
                })
                .collect();
            Ok(ApproxSoln {
                soln: soln.subm(0..op_cols, 0..nrhs),
                resid: Some(resid),
            })
        } else {
            Ok(ApproxSoln { soln, resid: None })
        }
    }
}
