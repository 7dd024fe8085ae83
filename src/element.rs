use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, RangeInclusive, Sub, SubAssign};

use num_complex::{Complex, Complex32, Complex64};
use num_traits::{One, Zero};
use rand::Rng;

use crate::core::Transpose;

/// Anything that can be stored in a `Matrix`: scalars, and matrices
/// themselves (which is what makes block matrices work).
pub trait MatrixElement: Clone + PartialEq + fmt::Debug {
    fn zero() -> Self;
    /// Complex conjugate for complex scalars, identity for real scalars.
    /// For a matrix element this is the conjugate transpose.
    fn adjoint(&self) -> Self;
}

/// A scalar type the matrix engine can do arithmetic with. Every method
/// prefixed with a BLAS/LAPACK routine name binds that routine for the
/// concrete scalar type; the engine never implements these kernels itself.
///
/// All kernel bindings follow the Fortran conventions: column-major
/// buffers with explicit dimensions, strides and leading dimensions, and
/// (for the LAPACK drivers) an `i32` status code that is zero on success.
pub trait NumericElement:
    MatrixElement
    + Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + fmt::Display
    + 'static
{
    /// The real type magnitudes of this scalar are measured in: `Self` for
    /// real scalars, the component type for complex ones.
    type Magnitude: NumericElement<Magnitude = Self::Magnitude> + PartialOrd;

    fn one() -> Self;
    fn from_magnitude(magnitude: Self::Magnitude) -> Self;
    fn from_int(value: i64) -> Self;
    fn to_int(self) -> i64;

    /// Modulus of the scalar.
    fn length(self) -> Self::Magnitude;
    fn length_squared(self) -> Self::Magnitude;
    /// `|re| + |im|` for complex scalars, `|self|` for real ones.
    fn manhattan_length(self) -> Self::Magnitude;

    fn random(range: RangeInclusive<Self::Magnitude>) -> Self;
    fn random_whole(range: RangeInclusive<i64>) -> Self;

    // level-1 kernels
    fn asum(n: i32, x: &[Self], incx: i32) -> Self::Magnitude;
    fn nrm2(n: i32, x: &[Self], incx: i32) -> Self::Magnitude;
    fn scal(n: i32, alpha: Self, x: &mut [Self], incx: i32);
    /// `Y := alpha * X + beta * Y`.
    fn axpby(n: i32, alpha: Self, x: &[Self], incx: i32, beta: Self, y: &mut [Self], incy: i32);
    /// Index (1-based, BLAS convention) of the element with the largest
    /// manhattan length; 0 when `n == 0`.
    fn iamax(n: i32, x: &[Self], incx: i32) -> i32;
    /// Like `iamax` but under the max-modulus norm, which differs from
    /// `iamax` only for complex scalars.
    fn iamax_inf(n: i32, x: &[Self], incx: i32) -> i32;
    fn dot(n: i32, x: &[Self], incx: i32, y: &[Self], incy: i32) -> Self;
    fn dotc(n: i32, x: &[Self], incx: i32, y: &[Self], incy: i32) -> Self;

    // level-2/3 kernels
    #[allow(clippy::too_many_arguments)]
    fn gemm(
        transa: Transpose, transb: Transpose, m: i32, n: i32, k: i32, alpha: Self,
        a: &[Self], lda: i32, b: &[Self], ldb: i32, beta: Self, c: &mut [Self], ldc: i32,
    );
    #[allow(clippy::too_many_arguments)]
    fn gemv(
        trans: Transpose, m: i32, n: i32, alpha: Self, a: &[Self], lda: i32,
        x: &[Self], incx: i32, beta: Self, y: &mut [Self], incy: i32,
    );
    #[allow(clippy::too_many_arguments)]
    fn ger(m: i32, n: i32, alpha: Self, x: &[Self], incx: i32, y: &[Self], incy: i32,
           a: &mut [Self], lda: i32);
    #[allow(clippy::too_many_arguments)]
    fn gerc(m: i32, n: i32, alpha: Self, x: &[Self], incx: i32, y: &[Self], incy: i32,
            a: &mut [Self], lda: i32);

    // LAPACK drivers; workspace queries happen inside the binding
    fn gesv(n: i32, nrhs: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32],
            b: &mut [Self], ldb: i32) -> i32;
    fn gels(trans: Transpose, m: i32, n: i32, nrhs: i32, a: &mut [Self], lda: i32,
            b: &mut [Self], ldb: i32) -> i32;
    #[allow(clippy::too_many_arguments)]
    fn gesvd(jobu: u8, jobvt: u8, m: i32, n: i32, a: &mut [Self], lda: i32,
             s: &mut [Self::Magnitude], u: &mut [Self], ldu: i32,
             vt: &mut [Self], ldvt: i32) -> i32;
    fn heev(jobz: u8, n: i32, a: &mut [Self], lda: i32, w: &mut [Self::Magnitude]) -> i32;
    /// Real Schur form with eigenvalue sorting disabled; eigenvalues are
    /// reported through separate real/imaginary arrays for real and
    /// complex scalars alike.
    #[allow(clippy::too_many_arguments)]
    fn gees(jobvs: u8, n: i32, a: &mut [Self], lda: i32, wr: &mut [Self::Magnitude],
            wi: &mut [Self::Magnitude], vs: &mut [Self], ldvs: i32) -> i32;
}

macro_rules! numeric_real_impl {
    ($t:ty, $asum:ident, $nrm2:ident, $scal:ident, $axpy:ident, $iamax:ident, $dot:ident,
     $gemm:ident, $gemv:ident, $ger:ident,
     $gesv:ident, $gels:ident, $gesvd:ident, $syev:ident, $gees:ident
     $($gels_tail:tt)*) => {
        impl MatrixElement for $t {
            fn zero() -> Self { Zero::zero() }
            fn adjoint(&self) -> Self { *self }
        }

        impl NumericElement for $t {
            type Magnitude = $t;

            fn one() -> Self { One::one() }
            fn from_magnitude(magnitude: Self::Magnitude) -> Self { magnitude }
            fn from_int(value: i64) -> Self { value as $t }
            fn to_int(self) -> i64 { self as i64 }

            fn length(self) -> Self::Magnitude { self.abs() }
            fn length_squared(self) -> Self::Magnitude { self * self }
            fn manhattan_length(self) -> Self::Magnitude { self.abs() }

            fn random(range: RangeInclusive<Self::Magnitude>) -> Self {
                rand::thread_rng().gen_range(range)
            }
            fn random_whole(range: RangeInclusive<i64>) -> Self {
                rand::thread_rng().gen_range(range) as $t
            }

            fn asum(n: i32, x: &[Self], incx: i32) -> Self::Magnitude {
                unsafe { blas::$asum(n, x, incx) }
            }
            fn nrm2(n: i32, x: &[Self], incx: i32) -> Self::Magnitude {
                unsafe { blas::$nrm2(n, x, incx) }
            }
            fn scal(n: i32, alpha: Self, x: &mut [Self], incx: i32) {
                unsafe { blas::$scal(n, alpha, x, incx) }
            }
            fn axpby(n: i32, alpha: Self, x: &[Self], incx: i32,
                     beta: Self, y: &mut [Self], incy: i32) {
                unsafe {
                    blas::$scal(n, beta, y, incy);
                    blas::$axpy(n, alpha, x, incx, y, incy);
                }
            }
            fn iamax(n: i32, x: &[Self], incx: i32) -> i32 {
                unsafe { blas::$iamax(n, x, incx) as i32 }
            }
            fn iamax_inf(n: i32, x: &[Self], incx: i32) -> i32 {
                unsafe { blas::$iamax(n, x, incx) as i32 }
            }
            fn dot(n: i32, x: &[Self], incx: i32, y: &[Self], incy: i32) -> Self {
                unsafe { blas::$dot(n, x, incx, y, incy) }
            }
            fn dotc(n: i32, x: &[Self], incx: i32, y: &[Self], incy: i32) -> Self {
                unsafe { blas::$dot(n, x, incx, y, incy) }
            }

            fn gemm(transa: Transpose, transb: Transpose, m: i32, n: i32, k: i32,
                    alpha: Self, a: &[Self], lda: i32, b: &[Self], ldb: i32,
                    beta: Self, c: &mut [Self], ldc: i32) {
                let ta = match transa { Transpose::No => b'N', _ => b'T' };
                let tb = match transb { Transpose::No => b'N', _ => b'T' };
                unsafe { blas::$gemm(ta, tb, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc) }
            }
            fn gemv(trans: Transpose, m: i32, n: i32, alpha: Self, a: &[Self], lda: i32,
                    x: &[Self], incx: i32, beta: Self, y: &mut [Self], incy: i32) {
                let t = match trans { Transpose::No => b'N', _ => b'T' };
                unsafe { blas::$gemv(t, m, n, alpha, a, lda, x, incx, beta, y, incy) }
            }
            fn ger(m: i32, n: i32, alpha: Self, x: &[Self], incx: i32,
                   y: &[Self], incy: i32, a: &mut [Self], lda: i32) {
                unsafe { blas::$ger(m, n, alpha, x, incx, y, incy, a, lda) }
            }
            fn gerc(m: i32, n: i32, alpha: Self, x: &[Self], incx: i32,
                    y: &[Self], incy: i32, a: &mut [Self], lda: i32) {
                unsafe { blas::$ger(m, n, alpha, x, incx, y, incy, a, lda) }
            }

            fn gesv(n: i32, nrhs: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32],
                    b: &mut [Self], ldb: i32) -> i32 {
                let mut info = 0;
                unsafe { lapack::$gesv(n, nrhs, a, lda, ipiv, b, ldb, &mut info) }
                info
            }
            fn gels(trans: Transpose, m: i32, n: i32, nrhs: i32, a: &mut [Self], lda: i32,
                    b: &mut [Self], ldb: i32) -> i32 {
                let t = match trans { Transpose::No => b'N', _ => b'T' };
                let mut info = 0;
                let mut query = [0.0 as $t];
                unsafe { lapack::$gels(t, m, n, nrhs, a, lda, b, ldb, &mut query, -1, &mut info $($gels_tail)*) }
                if info != 0 { return info; }
                let lwork = (query[0] as i32).max(1);
                let mut work = vec![0.0 as $t; lwork as usize];
                unsafe { lapack::$gels(t, m, n, nrhs, a, lda, b, ldb, &mut work, lwork, &mut info $($gels_tail)*) }
                info
            }
            fn gesvd(jobu: u8, jobvt: u8, m: i32, n: i32, a: &mut [Self], lda: i32,
                     s: &mut [Self::Magnitude], u: &mut [Self], ldu: i32,
                     vt: &mut [Self], ldvt: i32) -> i32 {
                let mut info = 0;
                let mut query = [0.0 as $t];
                unsafe {
                    lapack::$gesvd(jobu, jobvt, m, n, a, lda, s, u, ldu, vt, ldvt,
                                   &mut query, -1, &mut info)
                }
                if info != 0 { return info; }
                let lwork = (query[0] as i32).max(1);
                let mut work = vec![0.0 as $t; lwork as usize];
                unsafe {
                    lapack::$gesvd(jobu, jobvt, m, n, a, lda, s, u, ldu, vt, ldvt,
                                   &mut work, lwork, &mut info)
                }
                info
            }
            fn heev(jobz: u8, n: i32, a: &mut [Self], lda: i32,
                    w: &mut [Self::Magnitude]) -> i32 {
                let mut info = 0;
                let mut query = [0.0 as $t];
                unsafe { lapack::$syev(jobz, b'U', n, a, lda, w, &mut query, -1, &mut info) }
                if info != 0 { return info; }
                let lwork = (query[0] as i32).max(1);
                let mut work = vec![0.0 as $t; lwork as usize];
                unsafe { lapack::$syev(jobz, b'U', n, a, lda, w, &mut work, lwork, &mut info) }
                info
            }
            fn gees(jobvs: u8, n: i32, a: &mut [Self], lda: i32,
                    wr: &mut [Self::Magnitude], wi: &mut [Self::Magnitude],
                    vs: &mut [Self], ldvs: i32) -> i32 {
                let mut info = 0;
                let mut sdim = 0;
                let mut bwork = vec![0; n.max(1) as usize];
                let mut query = [0.0 as $t];
                unsafe {
                    lapack::$gees(jobvs, b'N', None, n, a, lda, &mut sdim, wr, wi, vs, ldvs,
                                  &mut query, -1, &mut bwork, &mut info)
                }
                if info != 0 { return info; }
                let lwork = (query[0] as i32).max(1);
                let mut work = vec![0.0 as $t; lwork as usize];
                unsafe {
                    lapack::$gees(jobvs, b'N', None, n, a, lda, &mut sdim, wr, wi, vs, ldvs,
                                  &mut work, lwork, &mut bwork, &mut info)
                }
                info
            }
        }
    };
}

macro_rules! numeric_complex_impl {
    ($t:ty, $mag:ty, $asum:ident, $nrm2:ident, $scal:ident, $axpy:ident, $iamax:ident,
     $dotu:ident, $dotc:ident, $gemm:ident, $gemv:ident, $geru:ident, $gerc:ident,
     $gesv:ident, $gels:ident, $gesvd:ident, $heev:ident, $gees:ident
     $($gels_tail:tt)*) => {
        impl MatrixElement for $t {
            fn zero() -> Self { Zero::zero() }
            fn adjoint(&self) -> Self { self.conj() }
        }

        impl NumericElement for $t {
            type Magnitude = $mag;

            fn one() -> Self { One::one() }
            fn from_magnitude(magnitude: Self::Magnitude) -> Self {
                Complex::new(magnitude, 0.0)
            }
            fn from_int(value: i64) -> Self { Complex::new(value as $mag, 0.0) }
            fn to_int(self) -> i64 { self.re as i64 }

            fn length(self) -> Self::Magnitude { self.norm() }
            fn length_squared(self) -> Self::Magnitude { self.norm_sqr() }
            fn manhattan_length(self) -> Self::Magnitude { self.l1_norm() }

            fn random(range: RangeInclusive<Self::Magnitude>) -> Self {
                let mut rng = rand::thread_rng();
                Complex::new(rng.gen_range(range.clone()), rng.gen_range(range))
            }
            fn random_whole(range: RangeInclusive<i64>) -> Self {
                let mut rng = rand::thread_rng();
                Complex::new(rng.gen_range(range.clone()) as $mag,
                             rng.gen_range(range) as $mag)
            }

            fn asum(n: i32, x: &[Self], incx: i32) -> Self::Magnitude {
                unsafe { blas::$asum(n, x, incx) }
            }
            fn nrm2(n: i32, x: &[Self], incx: i32) -> Self::Magnitude {
                unsafe { blas::$nrm2(n, x, incx) }
            }
            fn scal(n: i32, alpha: Self, x: &mut [Self], incx: i32) {
                unsafe { blas::$scal(n, alpha, x, incx) }
            }
            fn axpby(n: i32, alpha: Self, x: &[Self], incx: i32,
                     beta: Self, y: &mut [Self], incy: i32) {
                unsafe {
                    blas::$scal(n, beta, y, incy);
                    blas::$axpy(n, alpha, x, incx, y, incy);
                }
            }
            fn iamax(n: i32, x: &[Self], incx: i32) -> i32 {
                unsafe { blas::$iamax(n, x, incx) as i32 }
            }
            fn iamax_inf(n: i32, x: &[Self], incx: i32) -> i32 {
                // the BLAS iamax maximizes |re| + |im|; the max-modulus
                // variant scans the element moduli instead
                let moduli: Vec<$mag> = (0..n)
                    .map(|i| x[(i * incx) as usize].norm())
                    .collect();
                <$mag as NumericElement>::iamax(n, &moduli, 1)
            }
            fn dot(n: i32, x: &[Self], incx: i32, y: &[Self], incy: i32) -> Self {
                let mut pres = [<$t as MatrixElement>::zero()];
                unsafe { blas::$dotu(&mut pres, n, x, incx, y, incy) }
                pres[0]
            }
            fn dotc(n: i32, x: &[Self], incx: i32, y: &[Self], incy: i32) -> Self {
                let mut pres = [<$t as MatrixElement>::zero()];
                unsafe { blas::$dotc(&mut pres, n, x, incx, y, incy) }
                pres[0]
            }

            fn gemm(transa: Transpose, transb: Transpose, m: i32, n: i32, k: i32,
                    alpha: Self, a: &[Self], lda: i32, b: &[Self], ldb: i32,
                    beta: Self, c: &mut [Self], ldc: i32) {
                let ta = match transa {
                    Transpose::No => b'N',
                    Transpose::Yes => b'T',
                    Transpose::Adjoint => b'C',
                };
                let tb = match transb {
                    Transpose::No => b'N',
                    Transpose::Yes => b'T',
                    Transpose::Adjoint => b'C',
                };
                unsafe { blas::$gemm(ta, tb, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc) }
            }
            fn gemv(trans: Transpose, m: i32, n: i32, alpha: Self, a: &[Self], lda: i32,
                    x: &[Self], incx: i32, beta: Self, y: &mut [Self], incy: i32) {
                let t = match trans {
                    Transpose::No => b'N',
                    Transpose::Yes => b'T',
                    Transpose::Adjoint => b'C',
                };
                unsafe { blas::$gemv(t, m, n, alpha, a, lda, x, incx, beta, y, incy) }
            }
            fn ger(m: i32, n: i32, alpha: Self, x: &[Self], incx: i32,
                   y: &[Self], incy: i32, a: &mut [Self], lda: i32) {
                unsafe { blas::$geru(m, n, alpha, x, incx, y, incy, a, lda) }
            }
            fn gerc(m: i32, n: i32, alpha: Self, x: &[Self], incx: i32,
                    y: &[Self], incy: i32, a: &mut [Self], lda: i32) {
                unsafe { blas::$gerc(m, n, alpha, x, incx, y, incy, a, lda) }
            }

            fn gesv(n: i32, nrhs: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32],
                    b: &mut [Self], ldb: i32) -> i32 {
                let mut info = 0;
                unsafe { lapack::$gesv(n, nrhs, a, lda, ipiv, b, ldb, &mut info) }
                info
            }
            fn gels(trans: Transpose, m: i32, n: i32, nrhs: i32, a: &mut [Self], lda: i32,
                    b: &mut [Self], ldb: i32) -> i32 {
                // complex least squares only knows 'N' and the adjoint 'C'
                let t = match trans { Transpose::No => b'N', _ => b'C' };
                let mut info = 0;
                let mut query = [<$t as MatrixElement>::zero()];
                unsafe { lapack::$gels(t, m, n, nrhs, a, lda, b, ldb, &mut query, -1, &mut info $($gels_tail)*) }
                if info != 0 { return info; }
                let lwork = (query[0].re as i32).max(1);
                let mut work = vec![<$t as MatrixElement>::zero(); lwork as usize];
                unsafe { lapack::$gels(t, m, n, nrhs, a, lda, b, ldb, &mut work, lwork, &mut info $($gels_tail)*) }
                info
            }
            fn gesvd(jobu: u8, jobvt: u8, m: i32, n: i32, a: &mut [Self], lda: i32,
                     s: &mut [Self::Magnitude], u: &mut [Self], ldu: i32,
                     vt: &mut [Self], ldvt: i32) -> i32 {
                let mut info = 0;
                let mindim = m.min(n).max(1);
                let mut rwork: Vec<$mag> = vec![0.0; 5 * mindim as usize];
                let mut query = [<$t as MatrixElement>::zero()];
                unsafe {
                    lapack::$gesvd(jobu, jobvt, m, n, a, lda, s, u, ldu, vt, ldvt,
                                   &mut query, -1, &mut rwork, &mut info)
                }
                if info != 0 { return info; }
                let lwork = (query[0].re as i32).max(1);
                let mut work = vec![<$t as MatrixElement>::zero(); lwork as usize];
                unsafe {
                    lapack::$gesvd(jobu, jobvt, m, n, a, lda, s, u, ldu, vt, ldvt,
                                   &mut work, lwork, &mut rwork, &mut info)
                }
                info
            }
            fn heev(jobz: u8, n: i32, a: &mut [Self], lda: i32,
                    w: &mut [Self::Magnitude]) -> i32 {
                let mut info = 0;
                let mut rwork: Vec<$mag> = vec![0.0; (3 * n - 2).max(1) as usize];
                let mut query = [<$t as MatrixElement>::zero()];
                unsafe { lapack::$heev(jobz, b'U', n, a, lda, w, &mut query, -1,
                                       &mut rwork, &mut info) }
                if info != 0 { return info; }
                let lwork = (query[0].re as i32).max(1);
                let mut work = vec![<$t as MatrixElement>::zero(); lwork as usize];
                unsafe { lapack::$heev(jobz, b'U', n, a, lda, w, &mut work, lwork,
                                       &mut rwork, &mut info) }
                info
            }
            fn gees(jobvs: u8, n: i32, a: &mut [Self], lda: i32,
                    wr: &mut [Self::Magnitude], wi: &mut [Self::Magnitude],
                    vs: &mut [Self], ldvs: i32) -> i32 {
                let mut info = 0;
                let mut sdim = 0;
                let mut w = vec![<$t as MatrixElement>::zero(); n.max(1) as usize];
                let mut rwork: Vec<$mag> = vec![0.0; n.max(1) as usize];
                let mut bwork = vec![0; n.max(1) as usize];
                let mut query = [<$t as MatrixElement>::zero()];
                unsafe {
                    lapack::$gees(jobvs, b'N', None, n, a, lda, &mut sdim, &mut w, vs, ldvs,
                                  &mut query, -1, &mut rwork, &mut bwork, &mut info)
                }
                if info != 0 { return info; }
                let lwork = (query[0].re as i32).max(1);
                let mut work = vec![<$t as MatrixElement>::zero(); lwork as usize];
                unsafe {
                    lapack::$gees(jobvs, b'N', None, n, a, lda, &mut sdim, &mut w, vs, ldvs,
                                  &mut work, lwork, &mut rwork, &mut bwork, &mut info)
                }
                for (i, value) in w.iter().enumerate().take(n as usize) {
                    wr[i] = value.re;
                    wi[i] = value.im;
                }
                info
            }
        }
    };
}

numeric_real_impl!(f32, sasum, snrm2, sscal, saxpy, isamax, sdot,
                   sgemm, sgemv, sger, sgesv, sgels, sgesvd, ssyev, sgees);
numeric_real_impl!(f64, dasum, dnrm2, dscal, daxpy, idamax, ddot,
                   dgemm, dgemv, dger, dgesv, dgels, dgesvd, dsyev, dgees, 1);
numeric_complex_impl!(Complex32, f32, scasum, scnrm2, cscal, caxpy, icamax,
                      cdotu, cdotc, cgemm, cgemv, cgeru, cgerc,
                      cgesv, cgels, cgesvd, cheev, cgees);
numeric_complex_impl!(Complex64, f64, dzasum, dznrm2, zscal, zaxpy, izamax,
                      zdotu, zdotc, zgemm, zgemv, zgeru, zgerc,
                      zgesv, zgels, zgesvd, zheev, zgees);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjoint_scalars() {
        assert_eq!(2.5f64.adjoint(), 2.5);
        assert_eq!(Complex64::new(1.0, 2.0).adjoint(), Complex64::new(1.0, -2.0));
    }

    #[test]
    fn test_lengths() {
        assert_eq!((-3.0f64).length(), 3.0);
        assert_eq!((-3.0f64).manhattan_length(), 3.0);
        assert_eq!(Complex64::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Complex64::new(3.0, 4.0).length_squared(), 25.0);
        assert_eq!(Complex64::new(3.0, -4.0).manhattan_length(), 7.0);
    }

    #[test]
    fn test_int_conversion() {
        assert_eq!(f64::from_int(-7), -7.0);
        assert_eq!(7.9f64.to_int(), 7);
        assert_eq!(Complex32::from_int(3), Complex32::new(3.0, 0.0));
        assert_eq!(Complex32::new(3.7, 1.0).to_int(), 3);
    }

    #[test]
    fn test_random_whole_in_range() {
        for _ in 0..100 {
            let x = f64::random_whole(-2..=2);
            assert!(x >= -2.0 && x <= 2.0);
            assert_eq!(x, x.trunc());
        }
        for _ in 0..100 {
            let z = Complex64::random(-1.0..=1.0);
            assert!(z.re >= -1.0 && z.re <= 1.0);
            assert!(z.im >= -1.0 && z.im <= 1.0);
        }
    }
}
