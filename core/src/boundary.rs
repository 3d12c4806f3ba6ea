//! Edge-handling rules for steps that leave the grid.
//!
//! A boundary rule takes a position and a single-step delta and decides which
//! cell the step lands on. Stepping inside the grid always lands on the obvious
//! cell; the rules differ only at the edges:
//!
//! - `Wrap` identifies opposite edges, turning the grid into a torus.
//! - `Reflect` bounces off the edge onto the interior cell one step away.
//! - `Fixed` lands on a sentinel cell that lives outside the grid.

use std::fmt;

use crate::errors::{check_ndim, CaError, CaResult};
use crate::fixedvec::UVec;
use crate::grid::Grid;
use crate::layout::GridLayout;

/// Place that a step from some position lands on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Site {
    /// Cell inside the grid, by linear offset.
    Cell(usize),
    /// Sentinel cell owned by the boundary policy.
    Sentinel,
}

/// Rule for locating the site reached by stepping from a position, independent
/// of what kind of cells the grid holds.
pub trait BoundaryRule: fmt::Debug {
    /// Returns the site reached by stepping `delta` from `pos`.
    ///
    /// Every component of `delta` must be `-1`, `0`, or `1`. Returns a
    /// `DimensionMismatch` error if `pos` or `delta` does not have one
    /// component per axis of `layout`.
    fn locate(&self, layout: &GridLayout, pos: &[usize], delta: &[i8]) -> CaResult<Site>;
}

/// Boundary rule that can hand out references to the cells it locates.
pub trait BoundaryPolicy<C>: BoundaryRule {
    /// Returns the sentinel cell, if this policy has one.
    fn sentinel(&self) -> Option<&C> {
        None
    }
    /// Returns the sentinel cell mutably, if this policy has one.
    fn sentinel_mut(&mut self) -> Option<&mut C> {
        None
    }

    /// Returns the cell at a site.
    fn site<'a>(&'a self, grid: &'a Grid<C>, site: Site) -> CaResult<&'a C> {
        match site {
            Site::Cell(index) => grid.get_index(index),
            Site::Sentinel => self.sentinel().ok_or(CaError::NoSentinel),
        }
    }
    /// Returns the cell at a site, mutably.
    fn site_mut<'a>(&'a mut self, grid: &'a mut Grid<C>, site: Site) -> CaResult<&'a mut C> {
        match site {
            Site::Cell(index) => grid.get_index_mut(index),
            Site::Sentinel => self.sentinel_mut().ok_or(CaError::NoSentinel),
        }
    }

    /// Returns the cell reached by stepping `delta` from `pos`.
    fn resolve<'a>(&'a self, grid: &'a Grid<C>, pos: &[usize], delta: &[i8]) -> CaResult<&'a C> {
        let site = self.locate(grid.layout(), pos, delta)?;
        self.site(grid, site)
    }
    /// Returns the cell reached by stepping `delta` from `pos`, mutably.
    fn resolve_mut<'a>(
        &'a mut self,
        grid: &'a mut Grid<C>,
        pos: &[usize],
        delta: &[i8],
    ) -> CaResult<&'a mut C> {
        let site = self.locate(grid.layout(), pos, delta)?;
        self.site_mut(grid, site)
    }
}

/// Checks that `pos` and `delta` both have one component per axis.
fn check_args(layout: &GridLayout, pos: &[usize], delta: &[i8]) -> CaResult<()> {
    check_ndim(layout.order(), pos.len())?;
    check_ndim(layout.order(), delta.len())
}

/// Steps every axis independently using `step_axis(p, d, extent)` and
/// locates the resulting cell.
fn locate_per_axis(
    layout: &GridLayout,
    pos: &[usize],
    delta: &[i8],
    step_axis: impl Fn(usize, i8, usize) -> usize,
) -> CaResult<Site> {
    check_args(layout, pos, delta)?;
    let subscripts: UVec = pos
        .iter()
        .zip(delta)
        .zip(layout.extents().iter())
        .map(|((&p, &d), &extent)| step_axis(p, d, extent))
        .collect();
    layout.linear_index(&subscripts).map(Site::Cell)
}

/// Periodic boundary: stepping off one edge lands on the opposite edge.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Wrap;
impl BoundaryRule for Wrap {
    fn locate(&self, layout: &GridLayout, pos: &[usize], delta: &[i8]) -> CaResult<Site> {
        locate_per_axis(layout, pos, delta, |p, d, extent| {
            if d < 0 {
                if p == 0 {
                    extent.saturating_sub(1)
                } else {
                    p - 1
                }
            } else if d > 0 {
                if p + 1 >= extent {
                    0
                } else {
                    p + 1
                }
            } else {
                p
            }
        })
    }
}
impl<C> BoundaryPolicy<C> for Wrap {}

/// Reflecting boundary: stepping off an edge lands on the interior cell one
/// step away from that edge.
///
/// Along an axis of extent 1 there is no such cell, so the step stays where
/// it is.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Reflect;
impl BoundaryRule for Reflect {
    fn locate(&self, layout: &GridLayout, pos: &[usize], delta: &[i8]) -> CaResult<Site> {
        locate_per_axis(layout, pos, delta, |p, d, extent| {
            if d < 0 {
                if p == 0 {
                    std::cmp::min(1, extent.saturating_sub(1))
                } else {
                    p - 1
                }
            } else if d > 0 {
                if p + 1 >= extent {
                    p.saturating_sub(1)
                } else {
                    p + 1
                }
            } else {
                p
            }
        })
    }
}
impl<C> BoundaryPolicy<C> for Reflect {}

/// Fixed boundary: stepping off any edge lands on a single sentinel cell.
///
/// Axes are checked in order and the first one that leaves the grid decides
/// the result; later axes are not looked at.
///
/// Not `Clone`: each automaton owns its own sentinel.
#[derive(Debug, Default)]
pub struct Fixed<C> {
    value: C,
}
impl<C> Fixed<C> {
    /// Creates a fixed boundary whose sentinel holds `value`.
    pub fn new(value: C) -> Self {
        Self { value }
    }
    /// Returns the sentinel value.
    pub fn value(&self) -> &C {
        &self.value
    }
    /// Overwrites the sentinel value.
    pub fn set_value(&mut self, value: C) {
        self.value = value;
    }
}
impl<C: fmt::Debug> BoundaryRule for Fixed<C> {
    fn locate(&self, layout: &GridLayout, pos: &[usize], delta: &[i8]) -> CaResult<Site> {
        check_args(layout, pos, delta)?;
        let mut subscripts = UVec::new(layout.order());
        for (axis, ((&p, &d), &extent)) in pos
            .iter()
            .zip(delta)
            .zip(layout.extents().iter())
            .enumerate()
        {
            subscripts[axis] = if d < 0 {
                if p == 0 {
                    return Ok(Site::Sentinel);
                }
                p - 1
            } else if d > 0 {
                if p + 1 >= extent {
                    return Ok(Site::Sentinel);
                }
                p + 1
            } else {
                p
            };
        }
        layout.linear_index(&subscripts).map(Site::Cell)
    }
}
impl<C: fmt::Debug> BoundaryPolicy<C> for Fixed<C> {
    fn sentinel(&self) -> Option<&C> {
        Some(&self.value)
    }
    fn sentinel_mut(&mut self) -> Option<&mut C> {
        Some(&mut self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Grid<usize> {
        Grid::from_flat([5], vec![0, 1, 2, 3, 4]).unwrap()
    }

    /// Resolves a step and returns the subscripts of the cell it lands on.
    fn landing<B: BoundaryPolicy<usize>>(
        boundary: &B,
        grid: &Grid<usize>,
        pos: &[usize],
        delta: &[i8],
    ) -> UVec {
        let cell = boundary.resolve(grid, pos, delta).unwrap();
        grid.cell_to_subscripts(cell).unwrap()
    }

    #[test]
    fn test_wrap_1d() {
        let grid = line();
        assert_eq!(UVec::from([4]), landing(&Wrap, &grid, &[0], &[-1]));
        assert_eq!(UVec::from([0]), landing(&Wrap, &grid, &[4], &[1]));
        assert_eq!(UVec::from([3]), landing(&Wrap, &grid, &[2], &[1]));
        assert_eq!(UVec::from([1]), landing(&Wrap, &grid, &[2], &[-1]));
        assert_eq!(UVec::from([2]), landing(&Wrap, &grid, &[2], &[0]));
    }

    #[test]
    fn test_reflect_1d() {
        let grid = line();
        assert_eq!(UVec::from([1]), landing(&Reflect, &grid, &[0], &[-1]));
        assert_eq!(UVec::from([3]), landing(&Reflect, &grid, &[4], &[1]));
        assert_eq!(UVec::from([1]), landing(&Reflect, &grid, &[0], &[1]));
        assert_eq!(UVec::from([3]), landing(&Reflect, &grid, &[4], &[-1]));
    }

    #[test]
    fn test_single_cell_axis_stays_put() {
        let grid: Grid<usize> = Grid::from_flat([1, 3], vec![0, 1, 2]).unwrap();
        for &d in &[-1, 1] {
            assert_eq!(UVec::from([0, 2]), landing(&Reflect, &grid, &[0, 2], &[d, 0]));
            assert_eq!(UVec::from([0, 2]), landing(&Wrap, &grid, &[0, 2], &[d, 0]));
        }
        assert_eq!(UVec::from([0, 1]), landing(&Reflect, &grid, &[0, 2], &[1, 1]));
    }

    #[test]
    fn test_wrap_2d_corners() {
        let grid: Grid<usize> = Grid::new([3, 4]);
        let layout = grid.layout();
        assert_eq!(
            Ok(Site::Cell(11)),
            BoundaryRule::locate(&Wrap, layout, &[0, 0], &[-1, -1]),
        );
        assert_eq!(
            Ok(Site::Cell(0)),
            BoundaryRule::locate(&Wrap, layout, &[2, 3], &[1, 1]),
        );
    }

    #[test]
    fn test_fixed_sentinel() {
        let grid = line();
        let mut fixed = Fixed::new(99_usize);
        let a = fixed.resolve(&grid, &[0], &[-1]).unwrap() as *const usize;
        let b = fixed.resolve(&grid, &[4], &[1]).unwrap() as *const usize;
        assert_eq!(a, b);
        assert_eq!(Some(&99), fixed.sentinel());
        assert_eq!(Ok(&99), fixed.resolve(&grid, &[0], &[-1]));
        assert_eq!(Ok(&3), fixed.resolve(&grid, &[4], &[-1]));

        fixed.set_value(7);
        assert_eq!(&7, fixed.value());
        assert_eq!(Ok(&7), fixed.resolve(&grid, &[4], &[1]));
        // The sentinel is not part of the grid.
        let sentinel = fixed.resolve(&grid, &[4], &[1]).unwrap();
        assert_eq!(None, grid.cell_to_index(sentinel));
    }

    #[test]
    fn test_fixed_sentinel_mut() {
        let mut grid = line();
        let mut fixed = Fixed::new(0_usize);
        *fixed.resolve_mut(&mut grid, &[0], &[-1]).unwrap() += 5;
        *fixed.resolve_mut(&mut grid, &[4], &[1]).unwrap() += 5;
        *fixed.resolve_mut(&mut grid, &[1], &[1]).unwrap() += 10;
        assert_eq!(&10, fixed.value());
        assert_eq!(&[0, 1, 12, 3, 4], grid.cells());
    }

    #[test]
    fn test_fixed_first_axis_decides() {
        let layout = GridLayout::new([3, 3]);
        let fixed = Fixed::new(0_u8);
        assert_eq!(Ok(Site::Sentinel), fixed.locate(&layout, &[0, 1], &[-1, 0]));
        assert_eq!(Ok(Site::Sentinel), fixed.locate(&layout, &[1, 2], &[0, 1]));
        assert_eq!(Ok(Site::Sentinel), fixed.locate(&layout, &[0, 2], &[-1, 1]));
        assert_eq!(Ok(Site::Cell(4)), fixed.locate(&layout, &[0, 0], &[1, 1]));
    }

    #[test]
    fn test_boundary_dimension_mismatch() {
        let grid: Grid<u8> = Grid::new([3, 3]);
        let mismatch = |got| {
            Err(CaError::DimensionMismatch {
                expected: 2,
                got,
            })
        };
        assert_eq!(mismatch(1), Wrap.resolve(&grid, &[1], &[0, 1]).map(|_| ()));
        assert_eq!(mismatch(3), Reflect.resolve(&grid, &[1, 1], &[0, 1, 0]).map(|_| ()));
        assert_eq!(mismatch(3), Fixed::new(0).resolve(&grid, &[1, 1, 1], &[0, 1]).map(|_| ()));
    }

    #[test]
    fn test_no_sentinel() {
        let grid: Grid<u8> = Grid::new([3]);
        assert_eq!(Err(CaError::NoSentinel), Wrap.site(&grid, Site::Sentinel));
        assert_eq!(Ok(&0), Wrap.site(&grid, Site::Cell(2)));
    }
}
