// End-to-end checks of the public API, element-generic where it matters.

use num_complex::Complex64;

use lamat::{assert_fp_eq, assert_fpmat_eq, mat};
use lamat::{Compose, Dot, Matrix, SchurDecompose, SingularValueDecompose, Solve};

#[test]
fn test_creation() {
    let a = mat![1.0, 2.0, 3.0, 4.0; 5.0, 6.0, 7.0, 8.0; 9.0, 10.0, 11.0, 12.0];
    assert_eq!(a.dims(), (3, 4));

    // from_vec takes the buffer in column-major order
    let b = Matrix::from_vec(
        vec![1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0], 3, 4);
    assert_eq!(a, b);
}

#[test]
fn test_transpose_involution() {
    let a: Matrix<f64> = Matrix::random(4, 7, -10.0..=10.0);
    let t = a.t();
    assert_eq!(t.dims(), (7, 4));
    assert_eq!(t.t(), a);
}

#[test]
fn test_adjoint_involution() {
    let a: Matrix<Complex64> = Matrix::random(3, 5, -1.0..=1.0);
    assert_eq!(a.adjoint().adjoint(), a);

    // for real elements the adjoint is just the transpose
    let b: Matrix<f64> = Matrix::random(3, 5, -1.0..=1.0);
    assert_eq!(b.adjoint(), b.t());
}

#[test]
fn test_row_stack_round_trip() {
    let v1 = vec![1.0, 2.0, 3.0];
    let v2 = vec![4.0, 5.0, 6.0];
    let m = Matrix::from_rows(vec![v1.clone(), v2.clone()]);
    assert_eq!(m.dims(), (2, 3));
    assert_eq!(m.row(0).elements(), &v1[..]);
    assert_eq!(m.row(1).elements(), &v2[..]);
}

#[test]
fn test_reshape_round_trip() {
    let a: Matrix<f64> = Matrix::random(3, 4, -1.0..=1.0);
    assert_eq!(a.reshaped(4, 3).reshaped(3, 4), a);
}

#[test]
fn test_extend_examples() {
    let mut a: Matrix<f64> = Matrix::ones(2, 2);
    let before = a.clone();
    a.extend(2, 2, 0.0);
    assert_eq!(a, before);

    a.extend(3, 3, 0.0);
    let expected = mat![1.0, 1.0, 0.0; 1.0, 1.0, 0.0; 0.0, 0.0, 0.0];
    assert_eq!(a, expected);
}

#[test]
fn test_stack_horizontally_example() {
    let col_a = Matrix::from_col(vec![1.0, 2.0]);
    let col_b = Matrix::from_col(vec![3.0, 4.0]);
    let m = Matrix::hstack(&[col_a, col_b]);
    assert_eq!(m, mat![1.0, 3.0; 2.0, 4.0]);
    assert_eq!(m.elements(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_fold_sum() {
    let a = mat![1.0, 3.0; 2.0, 4.0];
    assert_eq!(a.fold(0.0, |acc, &x| acc + x), 10.0);
    assert_eq!(a.reduce(|acc, &x| acc + x), 10.0);
}

#[test]
fn test_upper_triangle_identity() {
    for n in 1..6 {
        let i: Matrix<f64> = Matrix::eye(n);
        assert!(i.is_upper_triangle());
    }
    let mut a: Matrix<f64> = Matrix::eye(3);
    a[(2, 1)] = 0.5;
    assert!(!a.is_upper_triangle());
}

#[test]
fn test_ops_end_to_end() {
    let a: Matrix<f64> = Matrix::ones(2, 2);
    let b: Matrix<f64> = Matrix::ones(2, 2);
    let c = &a + &b;
    assert_eq!(c[(0, 0)], 2.0);

    let d = &c * Matrix::zeros(2, 2);
    assert_eq!(d.dims(), (2, 2));
    assert_eq!(d[(0, 0)], 0.0);

    let v = mat![1.0; 2.0; 2.0];
    assert_fp_eq!(v.norm(), 3.0);
    assert_fp_eq!(v.dot(&v), 9.0);
}

#[test]
fn test_solve_end_to_end() {
    let a = mat![4.0, 1.0; 1.0, 3.0];
    let b = mat![1.0; 2.0];
    let x = a.solve(&b).expect("solve failed unexpectedly");
    assert_fpmat_eq!(&a * &x, b, 1e-10);
}

#[test]
fn test_svd_end_to_end() {
    let a: Matrix<f64> = Matrix::random_whole(4, 4, -3..=3);
    let svd = a.svd().expect("svd failed unexpectedly");
    assert_fpmat_eq!(svd.compose(), a, 1e-8);
}

#[test]
fn test_schur_validates_with_triangle_predicates() {
    let a: Matrix<f64> = Matrix::random(5, 5, -1.0..=1.0);
    let schur = a.schur().expect("schur failed unexpectedly");
    assert!(schur.t.is_quasi_upper_triangle());
    assert_fpmat_eq!(schur.compose(), a, 1e-8);

    let c: Matrix<Complex64> = Matrix::random(4, 4, -1.0..=1.0);
    let schur = c.schur().expect("schur failed unexpectedly");
    assert!(schur.t.is_upper_triangle());
    assert_fpmat_eq!(schur.compose(), c, 1e-8);
}

#[test]
fn test_block_composition() {
    let a: Matrix<f64> = Matrix::ones(2, 2);
    let b: Matrix<f64> = Matrix::zeros(2, 2);
    let m = Matrix::vstack(&[
        Matrix::hstack(&[a.clone(), b.clone()]),
        Matrix::hstack(&[b, a]),
    ]);
    assert_eq!(m.dims(), (4, 4));
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(0, 3)], 0.0);
    assert_eq!(m[(3, 3)], 1.0);
}
