//! Adjacency topologies.
//!
//! A neighborhood only decides which directions count as adjacent. It builds
//! one delta vector per neighbor and leaves every edge case to the boundary
//! policy, so none of these types do any bounds checking.

use std::convert::TryFrom;
use std::fmt;

use crate::boundary::{BoundaryPolicy, BoundaryRule, Site};
use crate::errors::{check_ndim, CaError, CaResult};
use crate::fixedvec::Delta;
use crate::grid::Grid;
use crate::layout::GridLayout;

/// Rule for enumerating the neighbors of a cell.
pub trait Neighborhood: fmt::Debug {
    /// Returns the delta vector of each neighbor, in order, for a grid with
    /// `order` dimensions.
    fn deltas(&self, order: usize) -> CaResult<Vec<Delta>>;

    /// Returns the number of neighbors each cell has in a grid with `order`
    /// dimensions.
    fn neighbor_count(&self, order: usize) -> CaResult<usize> {
        self.deltas(order).map(|deltas| deltas.len())
    }

    /// Returns the site of each neighbor of `pos`, in order.
    fn sites<B: BoundaryRule + ?Sized>(
        &self,
        layout: &GridLayout,
        boundary: &B,
        pos: &[usize],
    ) -> CaResult<Vec<Site>>
    where
        Self: Sized,
    {
        self.deltas(layout.order())?
            .iter()
            .map(|delta| boundary.locate(layout, pos, delta))
            .collect()
    }

    /// Returns each neighbor of `pos`, in order.
    ///
    /// The same cell may appear more than once when a boundary policy folds
    /// several steps onto it (for example, wrapping on a small grid).
    fn neighbors<'a, C, B: BoundaryPolicy<C> + ?Sized>(
        &self,
        grid: &'a Grid<C>,
        boundary: &'a B,
        pos: &[usize],
    ) -> CaResult<Vec<&'a C>>
    where
        Self: Sized,
    {
        self.deltas(grid.order())?
            .iter()
            .map(|delta| boundary.resolve(grid, pos, delta))
            .collect()
    }
}

/// One-dimensional neighborhood: the cells immediately to the left and right.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Linear;
impl Neighborhood for Linear {
    fn deltas(&self, order: usize) -> CaResult<Vec<Delta>> {
        check_ndim(1, order)?;
        Ok(vec![Delta::from([-1]), Delta::from([1])])
    }
    fn neighbor_count(&self, order: usize) -> CaResult<usize> {
        check_ndim(1, order)?;
        Ok(2)
    }
}

/// Von Neumann neighborhood: the two cells along each axis, ordered axis by
/// axis with the negative step first.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VonNeumann;
impl Neighborhood for VonNeumann {
    fn deltas(&self, order: usize) -> CaResult<Vec<Delta>> {
        let mut ret = Vec::with_capacity(2 * order);
        for axis in 0..order {
            let mut delta = Delta::new(order);
            delta[axis] = -1;
            ret.push(delta.clone());
            delta[axis] = 1;
            ret.push(delta);
        }
        Ok(ret)
    }
    fn neighbor_count(&self, order: usize) -> CaResult<usize> {
        Ok(2 * order)
    }
}

/// Moore neighborhood: every cell that differs by at most one step along each
/// axis.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Moore;
impl Neighborhood for Moore {
    fn deltas(&self, order: usize) -> CaResult<Vec<Delta>> {
        let count = self.neighbor_count(order)?;
        let mut ret = Vec::with_capacity(count);
        ret.extend(MooreDeltas::new(order));
        Ok(ret)
    }
    fn neighbor_count(&self, order: usize) -> CaResult<usize> {
        u32::try_from(order)
            .ok()
            .and_then(|exp| 3_usize.checked_pow(exp))
            .map(|n| n - 1)
            .ok_or(CaError::TooManyNeighbors { order })
    }
}

/// Iterator over every delta vector in `{-1, 0, 1}^n` except the zero vector.
///
/// Deltas are counted like an odometer whose digits run from -1 to 1, with the
/// last axis turning fastest. This matches the storage order of a grid.
#[derive(Debug, Clone)]
pub struct MooreDeltas {
    next: Option<Delta>,
}
impl MooreDeltas {
    /// Returns an iterator over the Moore deltas for `order` dimensions.
    pub fn new(order: usize) -> Self {
        Self {
            next: Some(Delta::from_fn(order, |_| -1)),
        }
    }
}
impl Iterator for MooreDeltas {
    type Item = Delta;

    fn next(&mut self) -> Option<Delta> {
        loop {
            let ret = self.next.take()?;
            let mut next = ret.clone();
            let mut carry = true;
            for d in next.iter_mut().rev() {
                // Increment this axis.
                if *d < 1 {
                    *d += 1;
                    carry = false;
                    break;
                }
                // It overflowed, so reset it and carry into the next axis.
                *d = -1;
            }
            // If every axis overflowed then we're done.
            if !carry {
                self.next = Some(next);
            }
            if !ret.is_zero() {
                return Some(ret);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use std::collections::HashSet;

    use super::*;
    use crate::boundary::{Fixed, Reflect, Wrap};
    use crate::errors::CaError;
    use crate::fixedvec::UVec;

    #[test]
    fn test_linear_deltas() {
        assert_eq!(
            vec![Delta::from([-1]), Delta::from([1])],
            Linear.deltas(1).unwrap(),
        );
        assert_eq!(
            Err(CaError::DimensionMismatch {
                expected: 1,
                got: 2
            }),
            Linear.deltas(2),
        );
    }

    #[test]
    fn test_von_neumann_deltas() {
        let deltas = VonNeumann.deltas(3).unwrap();
        let expected: Vec<Delta> = vec![
            Delta::from([-1, 0, 0]),
            Delta::from([1, 0, 0]),
            Delta::from([0, -1, 0]),
            Delta::from([0, 1, 0]),
            Delta::from([0, 0, -1]),
            Delta::from([0, 0, 1]),
        ];
        assert_eq!(expected, deltas);
    }

    #[test]
    fn test_moore_deltas_order() {
        let deltas = MooreDeltas::new(2).collect_vec();
        let expected: Vec<Delta> = vec![
            Delta::from([-1, -1]),
            Delta::from([-1, 0]),
            Delta::from([-1, 1]),
            Delta::from([0, -1]),
            Delta::from([0, 1]),
            Delta::from([1, -1]),
            Delta::from([1, 0]),
            Delta::from([1, 1]),
        ];
        assert_eq!(expected, deltas);
    }

    #[test]
    fn test_moore_deltas_count() {
        assert_eq!(0, MooreDeltas::new(0).count());
        for order in 1..=5 {
            let deltas = MooreDeltas::new(order).collect_vec();
            assert_eq!(Moore.neighbor_count(order).unwrap(), deltas.len());
            let unique: HashSet<Delta> = deltas.iter().cloned().collect();
            assert_eq!(deltas.len(), unique.len());
            assert!(deltas.iter().all(|d| !d.is_zero() && d.len() == order));
        }
    }

    #[test]
    fn test_neighbor_counts() {
        for order in 1..=4 {
            assert_eq!(Ok(2 * order), VonNeumann.neighbor_count(order));
            assert_eq!(
                VonNeumann.neighbor_count(order),
                VonNeumann.deltas(order).map(|d| d.len()),
            );
        }
        assert_eq!(Ok(26), Moore.neighbor_count(3));
        assert_eq!(Ok(0), Moore.neighbor_count(0));
        assert_eq!(
            Err(CaError::TooManyNeighbors { order: 64 }),
            Moore.neighbor_count(64),
        );
        assert!(Moore.deltas(64).is_err());
        assert_eq!(Ok(2), Linear.neighbor_count(1));
        assert!(Linear.neighbor_count(3).is_err());
    }

    #[test]
    fn test_sites_with_fixed_boundary() {
        let layout = GridLayout::new([3, 3]);
        let fixed = Fixed::new(0_u8);
        let sites = VonNeumann.sites(&layout, &fixed, &[0, 1]).unwrap();
        assert_eq!(
            vec![Site::Sentinel, Site::Cell(4), Site::Cell(0), Site::Cell(2)],
            sites,
        );
    }

    #[test]
    fn test_neighbors_resolve_through_boundary() {
        let grid = Grid::from_flat([5], (0..5).collect::<Vec<u32>>()).unwrap();
        let values = |pos: usize| -> Vec<u32> {
            Linear
                .neighbors(&grid, &Reflect, &[pos])
                .unwrap()
                .into_iter()
                .copied()
                .collect()
        };
        assert_eq!(vec![1, 1], values(0));
        assert_eq!(vec![1, 3], values(2));
        assert_eq!(vec![3, 3], values(4));

        let wrapped: Vec<UVec> = Linear
            .neighbors(&grid, &Wrap, &[0])
            .unwrap()
            .into_iter()
            .map(|cell| grid.cell_to_subscripts(cell).unwrap())
            .collect();
        assert_eq!(vec![UVec::from([4]), UVec::from([1])], wrapped);
    }
}
