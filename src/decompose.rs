use std::cmp;

use num_complex::Complex;

use crate::core::Matrix;
use crate::element::{MatrixElement, NumericElement};
use crate::errors::*;

/// Re-multiplies a decomposition back into the matrix it was computed
/// from, up to rounding.
pub trait Compose<T> {
    fn compose(&self) -> T;
}

#[derive(Debug, Clone)]
pub struct SVD<E: NumericElement> {
    /// Left singular vectors, `m x m`.
    pub u: Matrix<E>,
    /// Singular values, descending, `min(m, n)` of them.
    pub sigma: Vec<E::Magnitude>,
    /// Right singular vectors, transposed, `n x n`.
    pub vt: Matrix<E>,
}

impl<E: NumericElement> SVD<E> {
    /// The singular values as a rectangular diagonal matrix.
    pub fn sigma_matrix(&self, rows: usize, columns: usize) -> Matrix<E> {
        let mut s = Matrix::zeros(rows, columns);
        for (i, &value) in self.sigma.iter().enumerate().take(cmp::min(rows, columns)) {
            s[(i, i)] = E::from_magnitude(value);
        }
        s
    }
}

impl<E: NumericElement> Compose<Matrix<E>> for SVD<E> {
    fn compose(&self) -> Matrix<E> {
        let (m, n) = (self.u.nrows(), self.vt.ncols());
        &self.u * self.sigma_matrix(m, n) * &self.vt
    }
}

pub trait SingularValueDecompose {
    type Element: NumericElement;

    fn svd(&self) -> Result<SVD<Self::Element>>;
    fn singular_values(&self)
        -> Result<Vec<<Self::Element as NumericElement>::Magnitude>>;
}

impl<E: NumericElement> SingularValueDecompose for Matrix<E> {
    type Element = E;

    fn svd(&self) -> Result<SVD<E>> {
        let (m, n) = self.dims();
        let mindim = cmp::min(m, n);

        let mut input = self.clone();
        let mut u = Matrix::zeros(m, m);
        let mut vt = Matrix::zeros(n, n);
        let mut sigma = vec![E::Magnitude::zero(); mindim];

        let info = E::gesvd(b'A', b'A', m as i32, n as i32,
                            input.elements_mut(), (m as i32).max(1),
                            &mut sigma,
                            u.elements_mut(), (m as i32).max(1),
                            vt.elements_mut(), (n as i32).max(1));

        if info < 0 {
            Err(Error::from_kind(ErrorKind::DecompositionError(
                format!("SVD: Invalid call to gesvd in argument {}", -info))))
        } else if info > 0 {
            Err(Error::from_kind(ErrorKind::DecompositionError(
                "SVD: did not converge".to_string())))
        } else {
            Ok(SVD { u, sigma, vt })
        }
    }

    fn singular_values(&self) -> Result<Vec<E::Magnitude>> {
        let (m, n) = self.dims();
        let mindim = cmp::min(m, n);

        let mut input = self.clone();
        let mut u = vec![E::zero(); 1];
        let mut vt = vec![E::zero(); 1];
        let mut sigma = vec![E::Magnitude::zero(); mindim];

        let info = E::gesvd(b'N', b'N', m as i32, n as i32,
                            input.elements_mut(), (m as i32).max(1),
                            &mut sigma, &mut u, 1, &mut vt, 1);

        if info < 0 {
            Err(Error::from_kind(ErrorKind::DecompositionError(
                format!("SVD: Invalid call to gesvd in argument {}", -info))))
        } else if info > 0 {
            Err(Error::from_kind(ErrorKind::DecompositionError(
                "SVD: did not converge".to_string())))
        } else {
            Ok(sigma)
        }
    }
}

/// Eigen-decomposition of a symmetric (Hermitian) matrix; only the upper
/// triangle of the input is referenced.
#[derive(Debug, Clone)]
pub struct Eigen<E: NumericElement> {
    /// Eigenvalues, ascending; real even for complex matrices.
    pub values: Vec<E::Magnitude>,
    /// Orthonormal eigenvectors, one per column.
    pub vectors: Matrix<E>,
}

impl<E: NumericElement> Compose<Matrix<E>> for Eigen<E> {
    fn compose(&self) -> Matrix<E> {
        let d: Vec<E> = self.values.iter().map(|&v| E::from_magnitude(v)).collect();
        &self.vectors * Matrix::diag(&d) * self.vectors.adjoint()
    }
}

pub trait EigenDecompose {
    type Element: NumericElement;

    fn eigen(&self) -> Result<Eigen<Self::Element>>;
    fn eigenvalues(&self)
        -> Result<Vec<<Self::Element as NumericElement>::Magnitude>>;
}

impl<E: NumericElement> EigenDecompose for Matrix<E> {
    type Element = E;

    fn eigen(&self) -> Result<Eigen<E>> {
        let mut vectors = self.clone();
        let values = heev_driver::<E>(b'V', &mut vectors)?;
        Ok(Eigen { values, vectors })
    }

    fn eigenvalues(&self) -> Result<Vec<E::Magnitude>> {
        let mut scratch = self.clone();
        heev_driver::<E>(b'N', &mut scratch)
    }
}

fn heev_driver<E: NumericElement>(jobz: u8, a: &mut Matrix<E>)
        -> Result<Vec<E::Magnitude>> {
    if !a.is_square() {
        return Err(Error::from_kind(ErrorKind::DecompositionError(
            "eigen called with non-square matrix".to_string())))
    }
    let n = a.nrows();
    let mut values = vec![E::Magnitude::zero(); n];
    let info = E::heev(jobz, n as i32, a.elements_mut(), (n as i32).max(1), &mut values);

    if info < 0 {
        Err(Error::from_kind(ErrorKind::DecompositionError(
            format!("Eigen: Invalid call to heev in argument {}", -info))))
    } else if info > 0 {
        Err(Error::from_kind(ErrorKind::DecompositionError(
            "Eigen: did not converge".to_string())))
    } else {
        Ok(values)
    }
}

/// Schur form `A = Z T Z^H` with `T` (quasi) upper triangular and `Z`
/// unitary. Eigenvalues come back in `T`'s diagonal order; the kernel is
/// invoked with sorting disabled.
#[derive(Debug, Clone)]
pub struct Schur<E: NumericElement> {
    pub t: Matrix<E>,
    pub z: Matrix<E>,
    pub eigenvalues: Vec<Complex<E::Magnitude>>,
}

impl<E: NumericElement> Compose<Matrix<E>> for Schur<E> {
    fn compose(&self) -> Matrix<E> {
        &self.z * &self.t * self.z.adjoint()
    }
}

pub trait SchurDecompose {
    type Element: NumericElement;

    fn schur(&self) -> Result<Schur<Self::Element>>;
}

impl<E: NumericElement> SchurDecompose for Matrix<E> {
    type Element = E;

    fn schur(&self) -> Result<Schur<E>> {
        if !self.is_square() {
            return Err(Error::from_kind(ErrorKind::DecompositionError(
                "schur called with non-square matrix".to_string())))
        }
        let n = self.nrows();
        let mut t = self.clone();
        let mut z = Matrix::zeros(n, n);
        let mut wr = vec![E::Magnitude::zero(); n];
        let mut wi = vec![E::Magnitude::zero(); n];

        let ld = (n as i32).max(1);
        let info = E::gees(b'V', n as i32, t.elements_mut(), ld,
                           &mut wr, &mut wi, z.elements_mut(), ld);

        if info < 0 {
            Err(Error::from_kind(ErrorKind::DecompositionError(
                format!("Schur: Invalid call to gees in argument {}", -info))))
        } else if info > 0 {
            Err(Error::from_kind(ErrorKind::DecompositionError(
                "Schur: failed to compute all eigenvalues".to_string())))
        } else {
            let eigenvalues = wr.iter()
                .zip(wi.iter())
                .map(|(&re, &im)| Complex::new(re, im))
                .collect();
            Ok(Schur { t, z, eigenvalues })
        }
    }
}
