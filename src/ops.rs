use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_complex::{Complex32, Complex64};

use crate::core::{Matrix, Transpose};
use crate::element::NumericElement;

fn axpby_into<E: NumericElement>(alpha: E, x: &Matrix<E>, beta: E, y: &mut Matrix<E>) {
    assert_eq!(x.dims(), y.dims(),
               "elementwise operands must have identical dimensions");
    let n = x.len() as i32;
    E::axpby(n, alpha, x.elements(), 1, beta, y.elements_mut(), 1);
}

fn scal_in_place<E: NumericElement>(alpha: E, m: &mut Matrix<E>) {
    E::scal(m.len() as i32, alpha, m.elements_mut(), 1);
}

macro_rules! forward_matrix_binop {
    ($imp:ident, $method:ident) => {
        impl<'a, E: NumericElement> $imp<&'a Matrix<E>> for Matrix<E> {
            type Output = Matrix<E>;
            fn $method(self, rhs: &'a Matrix<E>) -> Matrix<E> {
                (&self).$method(rhs)
            }
        }
        impl<'a, E: NumericElement> $imp<Matrix<E>> for &'a Matrix<E> {
            type Output = Matrix<E>;
            fn $method(self, rhs: Matrix<E>) -> Matrix<E> {
                self.$method(&rhs)
            }
        }
        impl<E: NumericElement> $imp<Matrix<E>> for Matrix<E> {
            type Output = Matrix<E>;
            fn $method(self, rhs: Matrix<E>) -> Matrix<E> {
                (&self).$method(&rhs)
            }
        }
    };
}

impl<'a, 'b, E: NumericElement> Add<&'b Matrix<E>> for &'a Matrix<E> {
    type Output = Matrix<E>;

    fn add(self, rhs: &'b Matrix<E>) -> Matrix<E> {
        let mut out = self.clone();
        axpby_into(E::one(), rhs, E::one(), &mut out);
        out
    }
}
forward_matrix_binop!(Add, add);

impl<'a, 'b, E: NumericElement> Sub<&'b Matrix<E>> for &'a Matrix<E> {
    type Output = Matrix<E>;

    fn sub(self, rhs: &'b Matrix<E>) -> Matrix<E> {
        let mut out = self.clone();
        axpby_into(-E::one(), rhs, E::one(), &mut out);
        out
    }
}
forward_matrix_binop!(Sub, sub);

impl<'a, E: NumericElement> Neg for &'a Matrix<E> {
    type Output = Matrix<E>;

    fn neg(self) -> Matrix<E> {
        let mut out = self.clone();
        scal_in_place(-E::one(), &mut out);
        out
    }
}

impl<E: NumericElement> Neg for Matrix<E> {
    type Output = Matrix<E>;

    fn neg(mut self) -> Matrix<E> {
        scal_in_place(-E::one(), &mut self);
        self
    }
}

impl<'a, E: NumericElement> AddAssign<&'a Matrix<E>> for Matrix<E> {
    fn add_assign(&mut self, rhs: &'a Matrix<E>) {
        axpby_into(E::one(), rhs, E::one(), self);
    }
}

impl<E: NumericElement> AddAssign<Matrix<E>> for Matrix<E> {
    fn add_assign(&mut self, rhs: Matrix<E>) {
        *self += &rhs;
    }
}

impl<'a, E: NumericElement> SubAssign<&'a Matrix<E>> for Matrix<E> {
    fn sub_assign(&mut self, rhs: &'a Matrix<E>) {
        axpby_into(-E::one(), rhs, E::one(), self);
    }
}

impl<E: NumericElement> SubAssign<Matrix<E>> for Matrix<E> {
    fn sub_assign(&mut self, rhs: Matrix<E>) {
        *self -= &rhs;
    }
}

impl<E: NumericElement> MulAssign<E> for Matrix<E> {
    fn mul_assign(&mut self, rhs: E) {
        scal_in_place(rhs, self);
    }
}

/// `alpha * op(A) * op(B)`, or `alpha * op(A) * op(B) + beta * C` when
/// `c_beta` is given. The inner dimensions of the two operands (after
/// applying the transpose flags) must agree.
pub fn gemm<E: NumericElement>(
    alpha: E,
    a: &Matrix<E>,
    transa: Transpose,
    b: &Matrix<E>,
    transb: Transpose,
    c_beta: Option<(&Matrix<E>, E)>,
) -> Matrix<E> {
    let (m, k) = match transa {
        Transpose::No => a.dims(),
        _ => { let (r, c) = a.dims(); (c, r) }
    };
    let (kb, n) = match transb {
        Transpose::No => b.dims(),
        _ => { let (r, c) = b.dims(); (c, r) }
    };
    assert_eq!(k, kb, "inner dimensions must agree");

    let (mut out, beta) = match c_beta {
        Some((c, beta)) => {
            assert_eq!(c.dims(), (m, n), "accumulator dimensions must match the product");
            (c.clone(), beta)
        }
        None => (Matrix::zeros(m, n), E::zero()),
    };

    let (lda, ldb, ldc) = (
        (a.nrows() as i32).max(1),
        (b.nrows() as i32).max(1),
        (m as i32).max(1),
    );
    E::gemm(transa, transb, m as i32, n as i32, k as i32, alpha,
            a.elements(), lda, b.elements(), ldb, beta, out.elements_mut(), ldc);
    out
}

/// `alpha * op(A) * x`, or `alpha * op(A) * x + beta * y` when `y_beta`
/// is given. `x` must be a column vector matching `op(A)`'s column count.
pub fn gemv<E: NumericElement>(
    alpha: E,
    a: &Matrix<E>,
    trans: Transpose,
    x: &Matrix<E>,
    y_beta: Option<(&Matrix<E>, E)>,
) -> Matrix<E> {
    assert!(x.is_col_vector(), "gemv operand must be a column vector");
    let (m, n) = a.dims();
    let (op_rows, op_cols) = match trans {
        Transpose::No => (m, n),
        _ => (n, m),
    };
    assert_eq!(x.nrows(), op_cols, "vector length must match the operand");

    let (mut y, beta) = match y_beta {
        Some((y, beta)) => {
            assert_eq!(y.dims(), (op_rows, 1), "accumulator must be a matching column vector");
            (y.clone(), beta)
        }
        None => (Matrix::zeros(op_rows, 1), E::zero()),
    };

    E::gemv(trans, m as i32, n as i32, alpha, a.elements(), (m as i32).max(1),
            x.elements(), 1, beta, y.elements_mut(), 1);
    y
}

/// Rank-1 update `A += alpha * x * y^T` for column vectors `x` and `y`.
pub fn ger<E: NumericElement>(alpha: E, x: &Matrix<E>, y: &Matrix<E>, a: &mut Matrix<E>) {
    assert!(x.is_col_vector() && y.is_col_vector(),
            "rank-1 update operands must be column vectors");
    assert_eq!(a.dims(), (x.nrows(), y.nrows()),
               "updated matrix dimensions must match the outer product");
    E::ger(x.nrows() as i32, y.nrows() as i32, alpha,
           x.elements(), 1, y.elements(), 1,
           a.elements_mut(), (x.nrows() as i32).max(1));
}

/// Rank-1 update `A += alpha * x * y^H`.
pub fn gerc<E: NumericElement>(alpha: E, x: &Matrix<E>, y: &Matrix<E>, a: &mut Matrix<E>) {
    assert!(x.is_col_vector() && y.is_col_vector(),
            "rank-1 update operands must be column vectors");
    assert_eq!(a.dims(), (x.nrows(), y.nrows()),
               "updated matrix dimensions must match the outer product");
    E::gerc(x.nrows() as i32, y.nrows() as i32, alpha,
            x.elements(), 1, y.elements(), 1,
            a.elements_mut(), (x.nrows() as i32).max(1));
}

impl<'a, 'b, E: NumericElement> Mul<&'b Matrix<E>> for &'a Matrix<E> {
    type Output = Matrix<E>;

    fn mul(self, rhs: &'b Matrix<E>) -> Matrix<E> {
        gemm(E::one(), self, Transpose::No, rhs, Transpose::No, None)
    }
}
forward_matrix_binop!(Mul, mul);

impl<'a, E: NumericElement> Mul<E> for &'a Matrix<E> {
    type Output = Matrix<E>;

    fn mul(self, rhs: E) -> Matrix<E> {
        let mut out = self.clone();
        scal_in_place(rhs, &mut out);
        out
    }
}

impl<E: NumericElement> Mul<E> for Matrix<E> {
    type Output = Matrix<E>;

    fn mul(mut self, rhs: E) -> Matrix<E> {
        scal_in_place(rhs, &mut self);
        self
    }
}

macro_rules! implement_scalar_mul {
    ($($t:ty),*) => {$(
        impl Mul<Matrix<$t>> for $t {
            type Output = Matrix<$t>;
            fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> { rhs * self }
        }
        impl<'a> Mul<&'a Matrix<$t>> for $t {
            type Output = Matrix<$t>;
            fn mul(self, rhs: &'a Matrix<$t>) -> Matrix<$t> { rhs * self }
        }
    )*};
}
implement_scalar_mul!(f32, f64, Complex32, Complex64);

pub trait Dot<T> {
    type Output;

    fn dot(&self, rhs: &T) -> Self::Output;
    /// Dot product with the left operand conjugated.
    fn adjoint_dot(&self, rhs: &T) -> Self::Output;
}

impl<E: NumericElement> Dot<Matrix<E>> for Matrix<E> {
    type Output = E;

    fn dot(&self, rhs: &Matrix<E>) -> E {
        assert!(self.is_vector() && rhs.is_vector(), "dot operands must be vectors");
        assert_eq!(self.len(), rhs.len(), "dot operands must have equal length");
        E::dot(self.len() as i32, self.elements(), 1, rhs.elements(), 1)
    }

    fn adjoint_dot(&self, rhs: &Matrix<E>) -> E {
        assert!(self.is_vector() && rhs.is_vector(), "dot operands must be vectors");
        assert_eq!(self.len(), rhs.len(), "dot operands must have equal length");
        E::dotc(self.len() as i32, self.elements(), 1, rhs.elements(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gemm_operands() -> (Matrix<f64>, Matrix<f64>) {
        let a = Matrix::from_vec(vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0], 2, 3);
        let b = Matrix::from_vec(
            vec![1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0], 3, 4);
        (a, b)
    }

    #[test]
    fn test_gemm_with_accumulator() {
        let (a, b) = gemm_operands();
        let c = Matrix::from_vec(vec![2.0, 7.0, 6.0, 2.0, 0.0, 7.0, 4.0, 2.0], 2, 4);

        let out = gemm(1.0, &a, Transpose::No, &b, Transpose::No, Some((&c, 1.0)));
        assert_eq!(out.dims(), (2, 4));
        assert_eq!(out.elements(),
                   &[40.0, 90.0, 50.0, 100.0, 50.0, 120.0, 60.0, 130.0]);
    }

    #[test]
    fn test_gemm_transpose_flags() {
        let (a, b) = gemm_operands();
        let plain = &a * &b;
        let via_t = gemm(1.0, &a.t(), Transpose::Yes, &b, Transpose::No, None);
        assert_eq!(plain, via_t);
    }

    #[test]
    fn test_matrix_mul() {
        let (a, b) = gemm_operands();
        let expected = [38.0, 83.0, 44.0, 98.0, 50.0, 113.0, 56.0, 128.0];

        let out = &a * &b;
        assert_eq!(out.dims(), (2, 4));
        assert_eq!(out.elements(), &expected);

        assert_eq!((a.clone() * &b).elements(), &expected);
        assert_eq!((&a * b.clone()).elements(), &expected);
        assert_eq!((a * b).elements(), &expected);
    }

    #[test]
    fn test_matrix_mul_complex() {
        use num_complex::Complex64;
        let a = Matrix::from_vec(vec![Complex64::new(1.0, 1.0)], 1, 1);
        let b = Matrix::from_vec(vec![Complex64::new(2.0, -1.0)], 1, 1);
        let out = &a * &b;
        assert_eq!(out[(0, 0)], Complex64::new(3.0, 1.0));
    }

    #[test]
    fn test_gemm_adjoint_flag() {
        use num_complex::Complex64;
        let a = Matrix::from_vec(vec![Complex64::new(0.0, 1.0)], 1, 1);
        let b = Matrix::from_vec(vec![Complex64::new(0.0, 1.0)], 1, 1);
        // conj(i) * i = 1
        let out = gemm(Complex64::new(1.0, 0.0), &a, Transpose::Adjoint,
                       &b, Transpose::No, None);
        assert_eq!(out[(0, 0)], Complex64::new(1.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "inner dimensions")]
    fn test_matrix_mul_mismatch() {
        let a: Matrix<f64> = Matrix::zeros(2, 3);
        let b: Matrix<f64> = Matrix::zeros(2, 3);
        let _ = &a * &b;
    }

    #[test]
    fn test_scalar_mul() {
        let a = Matrix::from_vec(vec![1.0, 5.0, 2.0, 6.0], 2, 2);
        let expected = [2.0, 10.0, 4.0, 12.0];
        assert_eq!((&a * 2.0).elements(), &expected);
        assert_eq!((2.0 * &a).elements(), &expected);
        assert_eq!((a.clone() * 2.0).elements(), &expected);
        assert_eq!((2.0 * a).elements(), &expected);
    }

    #[test]
    fn test_add_sub() {
        let a = Matrix::from_vec(vec![2.0, 7.0, 6.0, 2.0], 2, 2);
        let b = Matrix::from_vec(vec![38.0, 83.0, 44.0, 98.0], 2, 2);

        let sum = &a + &b;
        assert_eq!(sum.elements(), &[40.0, 90.0, 50.0, 100.0]);
        let diff = &sum - &b;
        assert_eq!(diff.elements(), &[2.0, 7.0, 6.0, 2.0]);

        let mut acc = a.clone();
        acc += &b;
        assert_eq!(acc, sum);
        acc -= b;
        assert_eq!(acc, a);
    }

    #[test]
    #[should_panic(expected = "identical dimensions")]
    fn test_add_shape_mismatch() {
        let a: Matrix<f64> = Matrix::zeros(2, 3);
        let b: Matrix<f64> = Matrix::zeros(3, 2);
        let _ = a + b;
    }

    #[test]
    fn test_neg() {
        let a = Matrix::from_vec(vec![2.0, -7.0, 0.0, 2.0], 2, 2);
        assert_eq!((-&a).elements(), &[-2.0, 7.0, 0.0, -2.0]);
        assert_eq!((-a).elements(), &[-2.0, 7.0, 0.0, -2.0]);
    }

    #[test]
    fn test_mul_assign_scalar() {
        let mut a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        a *= 3.0;
        assert_eq!(a.elements(), &[3.0, 6.0, 9.0, 12.0]);
    }

    #[test]
    fn test_gemv() {
        let a = Matrix::from_vec(vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0], 2, 3);
        let x = Matrix::from_col(vec![1.0, 1.0, 1.0]);
        let y = gemv(1.0, &a, Transpose::No, &x, None);
        assert_eq!(y.dims(), (2, 1));
        assert_eq!(y.elements(), &[6.0, 15.0]);

        let yt = gemv(1.0, &a, Transpose::Yes, &Matrix::from_col(vec![1.0, 1.0]), None);
        assert_eq!(yt.elements(), &[5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_ger() {
        let x = Matrix::from_col(vec![1.0, 2.0]);
        let y = Matrix::from_col(vec![3.0, 4.0]);
        let mut a: Matrix<f64> = Matrix::zeros(2, 2);
        ger(1.0, &x, &y, &mut a);
        assert_eq!(a.elements(), &[3.0, 6.0, 4.0, 8.0]);
    }

    #[test]
    fn test_gerc() {
        use num_complex::Complex64;
        let x = Matrix::from_col(vec![Complex64::new(0.0, 1.0)]);
        let y = Matrix::from_col(vec![Complex64::new(0.0, 1.0)]);
        let mut a: Matrix<Complex64> = Matrix::zeros(1, 1);
        // i * conj(i) = 1
        gerc(Complex64::new(1.0, 0.0), &x, &y, &mut a);
        assert_eq!(a[(0, 0)], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_dot() {
        let expected = 10.0 + 40.0 + 90.0 + 160.0 + 250.0 + 360.0;

        let a = mat![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = mat![10.0, 20.0, 30.0, 40.0, 50.0, 60.0];
        assert!(a.is_row_vector() && b.is_row_vector());
        assert_eq!(a.dot(&b), expected);

        let a = mat![1.0; 2.0; 3.0; 4.0; 5.0; 6.0];
        assert!(a.is_col_vector());
        assert_eq!(a.dot(&b.t()), expected);
    }

    #[test]
    fn test_adjoint_dot() {
        use num_complex::Complex64;
        let a = Matrix::from_col(vec![Complex64::new(1.0, 1.0)]);
        let b = Matrix::from_col(vec![Complex64::new(2.0, 3.0)]);
        // conj(1 + i) * (2 + 3i) = 5 + i
        assert_eq!(a.adjoint_dot(&b), Complex64::new(5.0, 1.0));
        // plain dot leaves the left operand alone: (1 + i) * (2 + 3i) = -1 + 5i
        assert_eq!(a.dot(&b), Complex64::new(-1.0, 5.0));
    }

    #[test]
    #[should_panic(expected = "must be vectors")]
    fn test_dot_nonvec() {
        let a: Matrix<f64> = Matrix::zeros(2, 2);
        let b: Matrix<f64> = Matrix::zeros(2, 2);
        a.dot(&b);
    }
}
