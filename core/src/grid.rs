//! Dense N-dimensional grids.

use itertools::Itertools;
use std::ops::{Index, IndexMut};

use crate::errors::{CaError, CaResult};
use crate::fixedvec::UVec;
use crate::layout::GridLayout;

/// Dense, fixed-shape, N-dimensional array of cells of type `C`.
///
/// The minimum subscript is always 0 along all axes. `Grid::default()` is the
/// empty zero-order grid, which is also what `take()` leaves behind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grid<C> {
    layout: GridLayout,
    cells: Box<[C]>,
}

impl<C: Default> Grid<C> {
    /// Creates a grid of default-valued cells with the given size along each
    /// axis.
    pub fn new(extents: impl Into<UVec>) -> Self {
        let layout = GridLayout::new(extents);
        log::trace!(
            "Allocating {}-dimensional grid of {} cells",
            layout.order(),
            layout.total_size(),
        );
        let cells = std::iter::repeat_with(C::default)
            .take(layout.total_size())
            .collect();
        Self { layout, cells }
    }
}

impl<C: Clone> Grid<C> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(extents: impl Into<UVec>, value: C) -> Self {
        let layout = GridLayout::new(extents);
        let cells = vec![value; layout.total_size()].into_boxed_slice();
        Self { layout, cells }
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: C) {
        for cell in self.cells.iter_mut() {
            *cell = value.clone();
        }
    }
}

impl<C> Grid<C> {
    /// Creates a grid from cells listed in storage order (last axis varying
    /// fastest).
    ///
    /// Returns an `IndexOutOfRange` error if `cells` is not exactly as long as
    /// the grid.
    pub fn from_flat(extents: impl Into<UVec>, cells: impl Into<Box<[C]>>) -> CaResult<Self> {
        let layout = GridLayout::new(extents);
        let cells = cells.into();
        if cells.len() != layout.total_size() {
            return Err(CaError::IndexOutOfRange {
                index: cells.len(),
                len: layout.total_size(),
            });
        }
        Ok(Self { layout, cells })
    }

    /// Returns the layout used to address cells.
    #[inline]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }
    /// Returns the number of dimensions.
    #[inline]
    pub fn order(&self) -> usize {
        self.layout.order()
    }
    /// Returns the size along one axis.
    #[inline]
    pub fn extent(&self, axis: usize) -> CaResult<usize> {
        self.layout.extent(axis)
    }
    /// Returns the size along each axis.
    #[inline]
    pub fn extents(&self) -> &UVec {
        self.layout.extents()
    }
    /// Returns the number of cells in the grid.
    #[inline]
    pub fn total_size(&self) -> usize {
        self.layout.total_size()
    }

    /// Returns the cell at a subscript vector.
    pub fn get(&self, subscripts: &[usize]) -> CaResult<&C> {
        let index = self.layout.linear_index(subscripts)?;
        self.get_index(index)
    }
    /// Returns the cell at a subscript vector, mutably.
    pub fn get_mut(&mut self, subscripts: &[usize]) -> CaResult<&mut C> {
        let index = self.layout.linear_index(subscripts)?;
        self.get_index_mut(index)
    }
    /// Overwrites the cell at a subscript vector.
    pub fn set(&mut self, subscripts: &[usize], value: C) -> CaResult<()> {
        *self.get_mut(subscripts)? = value;
        Ok(())
    }

    /// Returns the cell at a linear offset.
    #[inline]
    pub fn get_index(&self, index: usize) -> CaResult<&C> {
        self.layout.check_index(index)?;
        Ok(&self.cells[index])
    }
    /// Returns the cell at a linear offset, mutably.
    #[inline]
    pub fn get_index_mut(&mut self, index: usize) -> CaResult<&mut C> {
        self.layout.check_index(index)?;
        Ok(&mut self.cells[index])
    }

    /// Returns the linear offset of a cell borrowed from this grid, or `None`
    /// if the reference points somewhere else.
    ///
    /// This compares identities, not values, so two equal cells at different
    /// positions are told apart. It scans the buffer, so it takes time linear
    /// in the number of cells. Zero-sized cells all share one address and are
    /// never found.
    pub fn cell_to_index(&self, cell: &C) -> Option<usize> {
        if std::mem::size_of::<C>() == 0 {
            return None;
        }
        self.cells.iter().position(|c| std::ptr::eq(c, cell))
    }
    /// Returns the subscript vector of a cell borrowed from this grid, or
    /// `None` if the reference points somewhere else.
    pub fn cell_to_subscripts(&self, cell: &C) -> Option<UVec> {
        self.cell_to_index(cell)
            .map(|index| self.layout.to_subscripts(index))
    }

    /// Returns the cells in storage order.
    #[inline]
    pub fn cells(&self) -> &[C] {
        &self.cells
    }
    /// Returns the cells in storage order, mutably.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [C] {
        &mut self.cells
    }

    /// Returns an iterator over every subscript vector in storage order.
    pub fn positions(&self) -> impl '_ + Iterator<Item = UVec> {
        (0..self.total_size()).map(move |index| self.layout.to_subscripts(index))
    }
    /// Returns an iterator over all the cells in the grid, enumerated by their
    /// positions.
    pub fn iter_enumerated(&self) -> impl '_ + Iterator<Item = (UVec, &C)> {
        self.positions().zip(self.cells.iter())
    }

    /// Creates a new grid of the same shape by applying a function to every
    /// cell.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn map<U>(&self, f: impl FnMut(&C) -> U) -> Grid<U> {
        Grid {
            layout: self.layout.clone(),
            cells: self.cells.iter().map(f).collect_vec().into_boxed_slice(),
        }
    }

    /// Moves the layout and cells out of the grid, leaving it as the empty
    /// zero-order grid.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            layout: std::mem::take(&mut self.layout),
            cells: std::mem::take(&mut self.cells),
        }
    }
}

impl<C> Index<&[usize]> for Grid<C> {
    type Output = C;

    fn index(&self, subscripts: &[usize]) -> &C {
        match self.get(subscripts) {
            Ok(cell) => cell,
            Err(e) => panic!("{}", e),
        }
    }
}
impl<C> IndexMut<&[usize]> for Grid<C> {
    fn index_mut(&mut self, subscripts: &[usize]) -> &mut C {
        match self.get_mut(subscripts) {
            Ok(cell) => cell,
            Err(e) => panic!("{}", e),
        }
    }
}
