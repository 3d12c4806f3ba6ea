//! Brian's Brain: a three-state automaton on a wrapped 2D grid.
//!
//! Firing cells always rest for a tick before they turn off, so patterns tend
//! to travel instead of settling down.

use colorous::Color;
use log::trace;
use ndlattice_core::prelude::*;
use rand::Rng;

use crate::automaton::Automaton;
use crate::canvas::{Canvas, BLACK, WHITE};
use crate::config::BrainConfig;

const DYING_COLOR: Color = Color {
    r: 40,
    g: 90,
    b: 200,
};

/// State of a single neuron.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    On,
    Dying,
    Off,
}
impl Default for Status {
    fn default() -> Self {
        Self::Off
    }
}
impl Status {
    /// Returns the state after one tick, given how many neighbors are on.
    pub fn next(self, on_neighbors: usize) -> Self {
        match self {
            Self::On => Self::Dying,
            Self::Dying => Self::Off,
            Self::Off if on_neighbors == 2 => Self::On,
            Self::Off => Self::Off,
        }
    }

    fn color(self) -> Color {
        match self {
            Self::On => WHITE,
            Self::Dying => DYING_COLOR,
            Self::Off => BLACK,
        }
    }
}

/// Brian's Brain on a torus, indexed `[y, x]`.
#[derive(Debug)]
pub struct BriansBrain {
    grid: Grid<Status>,
    next: Grid<Status>,
    boundary: Wrap,
    nbhd: Moore,
    generation: u64,
}
impl BriansBrain {
    /// Creates a grid where each cell is independently on with probability
    /// `config.density`.
    pub fn new(config: &BrainConfig, rng: &mut impl Rng) -> Self {
        let mut grid = Grid::new([config.height, config.width]);
        let density = config.density.max(0.0).min(1.0);
        for cell in grid.cells_mut() {
            if rng.random_bool(density) {
                *cell = Status::On;
            }
        }
        Self::from_grid(grid)
    }

    /// Wraps an existing grid of states.
    pub fn from_grid(grid: Grid<Status>) -> Self {
        let next = Grid::new(grid.extents().clone());
        Self {
            grid,
            next,
            boundary: Wrap,
            nbhd: Moore,
            generation: 0,
        }
    }

    /// Returns the number of cells in a given state.
    pub fn count(&self, status: Status) -> usize {
        self.grid.cells().iter().filter(|&&s| s == status).count()
    }
}
impl Automaton for BriansBrain {
    fn name(&self) -> &'static str {
        "Brian's Brain"
    }
    fn generation(&self) -> u64 {
        self.generation
    }
    fn canvas_size(&self) -> (usize, usize) {
        let extents = self.grid.extents();
        (extents[1], extents[0])
    }

    fn status(&self) -> String {
        format!(
            "generation {}, {} on, {} dying",
            self.generation,
            self.count(Status::On),
            self.count(Status::Dying),
        )
    }

    fn update(&mut self) -> CaResult<()> {
        for (index, pos) in self.grid.positions().enumerate() {
            let on_neighbors = self
                .nbhd
                .neighbors(&self.grid, &self.boundary, &pos)?
                .into_iter()
                .filter(|&&s| s == Status::On)
                .count();
            self.next.cells_mut()[index] = self.grid.cells()[index].next(on_neighbors);
        }
        std::mem::swap(&mut self.grid, &mut self.next);
        self.generation += 1;
        trace!(
            "Brian's Brain generation {} has {} cells on",
            self.generation,
            self.count(Status::On),
        );
        Ok(())
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        for (pos, status) in self.grid.iter_enumerated() {
            canvas.fill_cell(pos[1], pos[0], status.color());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_status_cycle() {
        assert_eq!(Status::Dying, Status::On.next(2));
        assert_eq!(Status::Off, Status::Dying.next(2));
        assert_eq!(Status::On, Status::Off.next(2));
        for &n in &[0, 1, 3, 8] {
            assert_eq!(Status::Off, Status::Off.next(n));
        }
    }

    #[test]
    fn test_pair_fires_above_and_below() {
        let mut grid = Grid::new([10, 10]);
        grid[&[5, 5][..]] = Status::On;
        grid[&[5, 6][..]] = Status::On;
        let mut brain = BriansBrain::from_grid(grid);
        brain.update().unwrap();

        let on: Vec<UVec> = brain
            .grid
            .iter_enumerated()
            .filter(|(_, s)| **s == Status::On)
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(
            vec![
                UVec::from([4, 5]),
                UVec::from([4, 6]),
                UVec::from([6, 5]),
                UVec::from([6, 6]),
            ],
            on,
        );
        assert_eq!(2, brain.count(Status::Dying));
        assert_eq!(Status::Dying, brain.grid[&[5, 5][..]]);
        assert_eq!(1, brain.generation());
        assert_eq!("generation 1, 4 on, 2 dying", brain.status());
    }

    #[test]
    fn test_pair_wraps_around_edges() {
        let mut grid = Grid::new([4, 6]);
        grid[&[0, 0][..]] = Status::On;
        grid[&[0, 5][..]] = Status::On;
        let mut brain = BriansBrain::from_grid(grid);
        brain.update().unwrap();
        // The pair straddles the left/right seam, so the cells that fire sit
        // on the top/bottom seam too.
        assert_eq!(Status::On, brain.grid[&[3, 0][..]]);
        assert_eq!(Status::On, brain.grid[&[3, 5][..]]);
        assert_eq!(Status::On, brain.grid[&[1, 0][..]]);
        assert_eq!(Status::On, brain.grid[&[1, 5][..]]);
        assert_eq!(4, brain.count(Status::On));
    }

    #[test]
    fn test_random_seed_is_reproducible() {
        let config = BrainConfig {
            width: 20,
            height: 10,
            density: 0.3,
        };
        let a = BriansBrain::new(&config, &mut StdRng::seed_from_u64(7));
        let b = BriansBrain::new(&config, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.grid, b.grid);
        assert_eq!((20, 10), a.canvas_size());
    }
}
