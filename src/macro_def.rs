// Example:
// let a = mat![1.0, 2.0, 3.0; 4.0, 5.0, 6.0];
// assert_eq!(a.dims(), (2, 3));
#[macro_export]
macro_rules! mat {
    [$( $( $x:expr ),+ );+] => {{
        $crate::Matrix::from_rows(vec![ $( vec![ $($x),+ ] ),+ ])
    }};
}

#[macro_export]
macro_rules! assert_fp_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_fp_eq!($left, $right, 1e-5);
    };
    ($left:expr, $right:expr, $tol:expr) => {{
        let (l, r) = ($left, $right);
        let diff = $crate::NumericElement::length(l - r);
        assert!(diff < $tol,
                "assertion failed: `{}` != `{}` (diff: {})", l, r, diff);
    }};
}

#[macro_export]
macro_rules! assert_fpmat_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_fpmat_eq!($left, $right, 1e-5);
    };
    ($left:expr, $right:expr, $tol:expr) => {{
        let (l, r) = (&$left, &$right);
        assert_eq!(l.dims(), r.dims(), "matrix dimensions differ");
        for (a, b) in l.iter().zip(r.iter()) {
            let diff = $crate::NumericElement::length(*a - *b);
            assert!(diff < $tol,
                    "matrices differ by {} at some position:\n{}\n{}", diff, l, r);
        }
    }};
}
