//! Row-major addressing of N-dimensional grids.
//!
//! The last axis varies fastest, so the cells along it are contiguous in
//! memory. Neighborhoods are enumerated with the same axis innermost.

use crate::errors::{check_ndim, CaError, CaResult};
use crate::fixedvec::UVec;

/// Mapping between subscript vectors and linear offsets into a flat buffer.
///
/// A layout does no storage of its own; see `Grid` for that.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct GridLayout {
    extents: UVec,
    strides: UVec,
    total_size: usize,
}

impl GridLayout {
    /// Creates a layout with the given size along each axis.
    ///
    /// A layout with no axes has a total size of zero.
    pub fn new(extents: impl Into<UVec>) -> Self {
        let extents = extents.into();
        let ndim = extents.len();
        let mut strides = UVec::new(ndim);
        if ndim > 0 {
            strides[ndim - 1] = 1;
            for i in (1..ndim).rev() {
                strides[i - 1] = strides[i] * extents[i];
            }
        }
        let total_size = if ndim == 0 { 0 } else { extents.product() };
        Self {
            extents,
            strides,
            total_size,
        }
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn order(&self) -> usize {
        self.extents.len()
    }
    /// Returns the size along each axis.
    #[inline]
    pub fn extents(&self) -> &UVec {
        &self.extents
    }
    /// Returns the size along one axis.
    #[inline]
    pub fn extent(&self, axis: usize) -> CaResult<usize> {
        self.extents.get(axis).copied()
    }
    /// Returns the linear-offset weight of each axis.
    #[inline]
    pub fn strides(&self) -> &UVec {
        &self.strides
    }
    /// Returns the number of cells covered by the layout.
    #[inline]
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Returns the linear offset of a subscript vector.
    ///
    /// Individual subscripts are not bounds-checked here; an out-of-range
    /// subscript produces an offset that the storage layer will reject (or
    /// alias another cell, for every axis but the first).
    pub fn linear_index(&self, subscripts: &[usize]) -> CaResult<usize> {
        check_ndim(self.order(), subscripts.len())?;
        Ok(subscripts
            .iter()
            .zip(self.strides.iter())
            .map(|(&s, &stride)| s * stride)
            .sum())
    }

    /// Returns the subscript vector of a linear offset.
    ///
    /// A layout with a zero extent covers no cells; every offset then maps to
    /// the all-zero subscript vector.
    pub fn to_subscripts(&self, index: usize) -> UVec {
        let ndim = self.order();
        let mut ret = UVec::new(ndim);
        if self.total_size == 0 {
            return ret;
        }
        for i in (1..=ndim).rev() {
            ret[i - 1] = (index / self.strides[i - 1]) % self.extents[i - 1];
        }
        ret
    }

    /// Returns whether every subscript is within the extent of its axis.
    pub fn contains(&self, subscripts: &[usize]) -> bool {
        subscripts.len() == self.order()
            && subscripts
                .iter()
                .zip(self.extents.iter())
                .all(|(s, e)| s < e)
    }

    /// Returns an `IndexOutOfRange` error unless `index` is a valid linear
    /// offset.
    pub(crate) fn check_index(&self, index: usize) -> CaResult<()> {
        if index < self.total_size {
            Ok(())
        } else {
            Err(CaError::IndexOutOfRange {
                index,
                len: self.total_size,
            })
        }
    }
}
