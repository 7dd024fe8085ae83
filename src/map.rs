use crate::core::Matrix;
use crate::element::MatrixElement;

impl<E: MatrixElement> Matrix<E> {
    /// Applies `transform` to every element, preserving the shape.
    pub fn map<F, T>(&self, transform: T) -> Matrix<F>
    where
        F: MatrixElement,
        T: Fn(&E) -> F,
    {
        Matrix::from_vec(
            self.iter().map(transform).collect(),
            self.nrows(),
            self.ncols(),
        )
    }

    /// Pairs up the elements of two matrices of identical shape,
    /// position-wise in storage order.
    pub fn combine<E2, F, T>(&self, other: &Matrix<E2>, using: T) -> Matrix<F>
    where
        E2: MatrixElement,
        F: MatrixElement,
        T: Fn(&E, &E2) -> F,
    {
        assert_eq!(self.dims(), other.dims(),
                   "combine requires operands of identical dimensions");
        Matrix::from_vec(
            self.iter()
                .zip(other.iter())
                .map(|(a, b)| using(a, b))
                .collect(),
            self.nrows(),
            self.ncols(),
        )
    }

    /// Left fold over the elements in buffer (column-major) order.
    pub fn fold<A, T>(&self, start: A, using: T) -> A
    where
        T: Fn(A, &E) -> A,
    {
        let mut result = start;
        for elem in self.iter() {
            result = using(result, elem);
        }
        result
    }

    /// `fold` seeded with the zero element.
    pub fn reduce<T>(&self, using: T) -> E
    where
        T: Fn(E, &E) -> E,
    {
        self.fold(E::zero(), using)
    }

    pub fn all<T>(&self, cond: T) -> bool
    where
        T: Fn(&E) -> bool,
    {
        self.iter().all(cond)
    }

    pub fn any<T>(&self, cond: T) -> bool
    where
        T: Fn(&E) -> bool,
    {
        self.iter().any(cond)
    }

    /// Condenses each column to a single value, producing a row matrix.
    pub fn map_columns<F, T>(&self, f: T) -> Matrix<F>
    where
        F: MatrixElement,
        T: Fn(Matrix<E>) -> F,
    {
        let mut v = Vec::with_capacity(self.ncols());
        for c in 0..self.ncols() {
            v.push(f(self.column(c)));
        }
        Matrix::from_row(v)
    }

    /// Condenses each row to a single value, producing a column matrix.
    pub fn map_rows<F, T>(&self, f: T) -> Matrix<F>
    where
        F: MatrixElement,
        T: Fn(Matrix<E>) -> F,
    {
        let mut v = Vec::with_capacity(self.nrows());
        for r in 0..self.nrows() {
            v.push(f(self.row(r)));
        }
        Matrix::from_col(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_map() {
        let a = mat![1.0, 2.0; 3.0, 4.0];
        let b = a.map(|x| x * 10.0);
        assert_eq!(b.dims(), (2, 2));
        assert_eq!(b.elements(), &[10.0, 30.0, 20.0, 40.0]);
    }

    #[test]
    fn test_map_changes_element_type() {
        let a = mat![1.0, -2.0; -3.0, 4.0];
        let b = a.map(|&x| Complex64::new(x, 0.0));
        assert_eq!(b[(1, 0)], Complex64::new(-3.0, 0.0));
    }

    #[test]
    fn test_combine() {
        let a = mat![1.0, 2.0; 3.0, 4.0];
        let b = mat![10.0, 20.0; 30.0, 40.0];
        let c = a.combine(&b, |x, y| x + y);
        assert_eq!(c.elements(), &[11.0, 33.0, 22.0, 44.0]);
    }

    #[test]
    #[should_panic(expected = "identical dimensions")]
    fn test_combine_shape_mismatch() {
        let a: Matrix<f64> = Matrix::zeros(2, 3);
        let b: Matrix<f64> = Matrix::zeros(3, 2);
        a.combine(&b, |x, y| x + y);
    }

    #[test]
    fn test_fold() {
        let a = mat![1.0, 3.0; 2.0, 4.0];
        let sum = a.fold(0.0, |acc, &x| acc + x);
        assert_eq!(sum, 10.0);
        // fold order is the storage order
        let order = a.fold(Vec::new(), |mut acc, &x| { acc.push(x); acc });
        assert_eq!(order, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_reduce_seeds_with_zero() {
        let a = mat![1.0, 2.0; 3.0, 4.0];
        assert_eq!(a.reduce(|acc, &x| acc + x), 10.0);
    }

    #[test]
    fn test_all_any() {
        let a = mat![1.0, 2.0; 3.0, 4.0];
        assert!(a.all(|&x| x > 0.0));
        assert!(!a.all(|&x| x > 1.0));
        assert!(a.any(|&x| x == 4.0));
        assert!(!a.any(|&x| x < 0.0));
    }

    #[test]
    fn test_map_columns_rows() {
        let a = mat![1.0, 2.0, 3.0; 10.0, 20.0, 30.0];
        let cols = a.map_columns(|m| m.fold(0.0, |acc, &x| acc + x));
        assert_eq!(cols.dims(), (1, 3));
        assert_eq!(cols.elements(), &[11.0, 22.0, 33.0]);

        let rows = a.map_rows(|m| m.fold(0.0, |acc, &x| acc + x));
        assert_eq!(rows.dims(), (2, 1));
        assert_eq!(rows.elements(), &[6.0, 60.0]);
    }
}
