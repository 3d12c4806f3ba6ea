//! Fixed-length vectors.
//!
//! A `FixedVec` is allocated once with its final length and never grows or
//! shrinks. Grids use them for extents, strides, subscripts and deltas, whose
//! length is always the number of dimensions of the grid.

use std::fmt;
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut, Index, IndexMut};

mod aliases;

pub use aliases::*;

use crate::errors::{CaError, CaResult};

/// Vector with a length fixed at construction and elements of type `T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedVec<T>(Box<[T]>);

/// The empty vector, whatever the element type.
impl<T> Default for FixedVec<T> {
    fn default() -> Self {
        Self(Box::new([]))
    }
}

impl<T: fmt::Display> fmt::Display for FixedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        write!(f, "]")?;
        Ok(())
    }
}

impl<T: Default> FixedVec<T> {
    /// Creates a vector of `len` default-valued elements.
    pub fn new(len: usize) -> Self {
        Self::from_fn(len, |_| T::default())
    }
}

impl<T> FixedVec<T> {
    /// Creates a vector by evaluating `generator` for each index.
    pub fn from_fn(len: usize, generator: impl FnMut(usize) -> T) -> Self {
        (0..len).map(generator).collect()
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns `true` if the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the element at `index`, or an
    /// `IndexOutOfRange` error if there is no such element.
    #[inline]
    pub fn get(&self, index: usize) -> CaResult<&T> {
        let len = self.len();
        self.0.get(index).ok_or(CaError::IndexOutOfRange { index, len })
    }
    /// Returns a mutable reference to the element at `index`, or an
    /// `IndexOutOfRange` error if there is no such element.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> CaResult<&mut T> {
        let len = self.len();
        self.0
            .get_mut(index)
            .ok_or(CaError::IndexOutOfRange { index, len })
    }
    /// Overwrites the element at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> CaResult<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Moves the contents out of the vector, leaving it empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }
    /// Converts the vector into a `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0.into_vec()
    }
}

impl<T: Copy + std::iter::Product<T>> FixedVec<T> {
    /// Returns the product of the elements of the vector.
    pub fn product(&self) -> T {
        self.0.iter().copied().product()
    }
}

impl<T: Default + PartialEq> FixedVec<T> {
    /// Returns `true` if every element is the default value (zero for
    /// numbers).
    pub fn is_zero(&self) -> bool {
        let zero = T::default();
        self.0.iter().all(|x| *x == zero)
    }
}

impl<T> Deref for FixedVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.0
    }
}
impl<T> DerefMut for FixedVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T> Index<usize> for FixedVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}
impl<T> IndexMut<usize> for FixedVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T> From<Vec<T>> for FixedVec<T> {
    fn from(v: Vec<T>) -> Self {
        Self(v.into_boxed_slice())
    }
}
impl<T: Clone> From<&[T]> for FixedVec<T> {
    fn from(s: &[T]) -> Self {
        Self(s.into())
    }
}
impl<T, const N: usize> From<[T; N]> for FixedVec<T> {
    fn from(a: [T; N]) -> Self {
        Self::from(Vec::from(a))
    }
}
impl<T> FromIterator<T> for FixedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a FixedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
impl<T> IntoIterator for FixedVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

#[cfg(test)]
mod tests;
