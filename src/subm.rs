use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use crate::core::Matrix;
use crate::element::MatrixElement;

/// A collection of row or column indices a sub-matrix is addressed with:
/// any range form, a single index, or an explicit index list.
pub trait IndexCollection {
    fn resolve(&self, extent: usize) -> Vec<usize>;
}

impl IndexCollection for Range<usize> {
    fn resolve(&self, _extent: usize) -> Vec<usize> {
        self.clone().collect()
    }
}

impl IndexCollection for RangeTo<usize> {
    fn resolve(&self, _extent: usize) -> Vec<usize> {
        (0..self.end).collect()
    }
}

impl IndexCollection for RangeFrom<usize> {
    fn resolve(&self, extent: usize) -> Vec<usize> {
        (self.start..extent).collect()
    }
}

impl IndexCollection for RangeFull {
    fn resolve(&self, extent: usize) -> Vec<usize> {
        (0..extent).collect()
    }
}

impl IndexCollection for RangeInclusive<usize> {
    fn resolve(&self, _extent: usize) -> Vec<usize> {
        self.clone().collect()
    }
}

impl IndexCollection for usize {
    fn resolve(&self, _extent: usize) -> Vec<usize> {
        vec![*self]
    }
}

impl IndexCollection for Vec<usize> {
    fn resolve(&self, _extent: usize) -> Vec<usize> {
        self.clone()
    }
}

impl<'a> IndexCollection for &'a [usize] {
    fn resolve(&self, _extent: usize) -> Vec<usize> {
        self.to_vec()
    }
}

impl<E: MatrixElement> Matrix<E> {
    /// Gathers the elements at the Cartesian product of the given row and
    /// column indices into a new matrix, iterating columns outer and rows
    /// inner to match the storage order.
    pub fn subm<R, C>(&self, rows: R, columns: C) -> Matrix<E>
    where
        R: IndexCollection,
        C: IndexCollection,
    {
        let ri = rows.resolve(self.nrows());
        let ci = columns.resolve(self.ncols());
        let mut elements = Vec::with_capacity(ri.len() * ci.len());
        for &c in &ci {
            for &r in &ri {
                elements.push(self[(r, c)].clone());
            }
        }
        Matrix::from_vec(elements, ri.len(), ci.len())
    }

    /// Scatters `values` over the Cartesian product of the given indices,
    /// in the same iteration order as `subm`. The shape of `values` must
    /// equal `(rows.len(), columns.len())`.
    pub fn set_subm<R, C>(&mut self, rows: R, columns: C, values: &Matrix<E>)
    where
        R: IndexCollection,
        C: IndexCollection,
    {
        let ri = rows.resolve(self.nrows());
        let ci = columns.resolve(self.ncols());
        assert_eq!(values.dims(), (ri.len(), ci.len()),
                   "assigned matrix shape must match the index collections");
        let mut index = 0;
        for &c in &ci {
            for &r in &ri {
                self[(r, c)] = values.elements()[index].clone();
                index += 1;
            }
        }
    }
}
