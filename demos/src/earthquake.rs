//! Olami-Feder-Christensen slider-block model of earthquakes.
//!
//! Each block carries some stress. Stress builds up uniformly until one block
//! reaches the threshold and slips, passing a fraction of its stress to each
//! of its four neighbors. Those may slip in turn, producing an avalanche.
//! Blocks on the edge hand part of their stress to the fixed boundary, where
//! it is lost.

use log::trace;
use ndlattice_core::prelude::*;
use rand::Rng;
use std::collections::VecDeque;

use crate::automaton::Automaton;
use crate::canvas::Canvas;
use crate::config::QuakeConfig;

/// OFC model on a 2D grid indexed `[y, x]`.
#[derive(Debug)]
pub struct Earthquake {
    grid: Grid<f64>,
    boundary: Fixed<f64>,
    nbhd: VonNeumann,
    threshold: f64,
    alpha: f64,
    /// Sizes of recent avalanches, oldest first.
    avalanches: VecDeque<usize>,
    history_len: usize,
    /// Total stress that has left through the boundary.
    dissipated: f64,
    generation: u64,
}
impl Earthquake {
    /// Creates a grid with stresses drawn uniformly below the threshold.
    pub fn new(config: &QuakeConfig, rng: &mut impl Rng) -> Self {
        let mut grid = Grid::new([config.height, config.width]);
        for cell in grid.cells_mut() {
            *cell = rng.random::<f64>() * config.threshold;
        }
        let mut ret = Self::from_grid(grid, config.threshold, config.alpha);
        ret.history_len = config.history_len.max(1);
        ret
    }

    /// Wraps an existing grid of stresses.
    pub fn from_grid(grid: Grid<f64>, threshold: f64, alpha: f64) -> Self {
        Self {
            grid,
            boundary: Fixed::new(0.0),
            nbhd: VonNeumann,
            threshold,
            alpha,
            avalanches: VecDeque::new(),
            history_len: 256,
            dissipated: 0.0,
            generation: 0,
        }
    }

    /// Returns the slip threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
    /// Returns the fraction of stress passed to each neighbor on a slip.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
    /// Returns the sizes of recent avalanches, oldest first.
    pub fn avalanches(&self) -> impl '_ + Iterator<Item = usize> {
        self.avalanches.iter().copied()
    }
    /// Returns the total stress lost through the boundary so far.
    pub fn dissipated(&self) -> f64 {
        self.dissipated
    }
    /// Returns the total stress held by the grid.
    pub fn total_stress(&self) -> f64 {
        self.grid.cells().iter().sum()
    }

    /// Raises every block by the same amount, so that the most stressed one
    /// sits exactly at the threshold. Returns the amount added to each block.
    fn drive(&mut self) -> f64 {
        let max = self
            .grid
            .cells()
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, s)| match best {
                Some((_, b)) if b >= s => best,
                _ => Some((i, s)),
            });
        let (argmax, max) = match max {
            Some(m) => m,
            None => return 0.0,
        };
        let gap = (self.threshold - max).max(0.0);
        for cell in self.grid.cells_mut() {
            *cell += gap;
        }
        if gap > 0.0 {
            // Guard against rounding leaving it just short.
            self.grid.cells_mut()[argmax] = self.threshold;
        }
        gap
    }

    /// Topples blocks until every block is below the threshold. Returns the
    /// number of topplings.
    fn relax(&mut self) -> CaResult<usize> {
        let mut unstable: Vec<usize> = self
            .grid
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s >= self.threshold)
            .map(|(i, _)| i)
            .collect();
        let mut topplings = 0;
        while let Some(index) = unstable.pop() {
            let stress = self.grid.cells()[index];
            if stress < self.threshold {
                continue;
            }
            self.grid.cells_mut()[index] = 0.0;
            topplings += 1;

            let pos = self.grid.layout().to_subscripts(index);
            let share = self.alpha * stress;
            for site in self.nbhd.sites(self.grid.layout(), &self.boundary, &pos)? {
                let cell = self.boundary.site_mut(&mut self.grid, site)?;
                *cell += share;
                if let Site::Cell(i) = site {
                    if *cell >= self.threshold {
                        unstable.push(i);
                    }
                }
            }
            self.dissipated += *self.boundary.value();
            self.boundary.set_value(0.0);
        }
        Ok(topplings)
    }
}
impl Automaton for Earthquake {
    fn name(&self) -> &'static str {
        "Earthquake 2D"
    }
    fn generation(&self) -> u64 {
        self.generation
    }
    fn canvas_size(&self) -> (usize, usize) {
        let extents = self.grid.extents();
        (extents[1], extents[0])
    }

    fn status(&self) -> String {
        let last = self.avalanches.back().copied().unwrap_or(0);
        let largest = self.avalanches().max().unwrap_or(0);
        format!(
            "generation {}, last avalanche {} (largest of {}: {}), \
             stress {:.2}, dissipated {:.2} (threshold {}, alpha {})",
            self.generation,
            last,
            self.avalanches.len(),
            largest,
            self.total_stress(),
            self.dissipated(),
            self.threshold(),
            self.alpha(),
        )
    }

    fn update(&mut self) -> CaResult<()> {
        let gap = self.drive();
        let size = self.relax()?;
        while self.avalanches.len() >= self.history_len {
            self.avalanches.pop_front();
        }
        self.avalanches.push_back(size);
        self.generation += 1;
        trace!(
            "Earthquake generation {}: drove by {:.4}, avalanche of {} slips",
            self.generation,
            gap,
            size,
        );
        Ok(())
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        for (pos, &stress) in self.grid.iter_enumerated() {
            let t = (stress / self.threshold).max(0.0).min(1.0);
            canvas.fill_cell(pos[1], pos[0], colorous::INFERNO.eval_continuous(t));
        }
    }
}
