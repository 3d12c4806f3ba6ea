//! Reaction-diffusion lattice-gas automaton that forms Turing patterns.
//!
//! Two species of particles, activators and inhibitors, live on the same torus.
//! Each cell has five channels per species (four directions plus rest), and
//! each channel holds at most one particle. Every tick the species react
//! locally and then diffuse, with inhibitors diffusing faster.

use colorous::Color;
use log::trace;
use ndlattice_core::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::automaton::Automaton;
use crate::canvas::Canvas;
use crate::config::TuringConfig;

/// Channel of a lattice-gas cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Channel {
    Up,
    Down,
    Left,
    Right,
    Rest,
}
impl Channel {
    /// All channels, in index order.
    pub const ALL: [Channel; 5] = [
        Channel::Up,
        Channel::Down,
        Channel::Left,
        Channel::Right,
        Channel::Rest,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Lattice-gas cell with one exclusion slot per channel.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LgCell {
    channels: [bool; 5],
}
impl LgCell {
    /// Returns whether a channel holds a particle.
    pub fn get(self, channel: Channel) -> bool {
        self.channels[channel.index()]
    }
    /// Sets whether a channel holds a particle.
    pub fn set(&mut self, channel: Channel, occupied: bool) {
        self.channels[channel.index()] = occupied;
    }
    /// Returns the number of particles in the cell.
    pub fn particle_count(self) -> usize {
        self.channels.iter().filter(|&&c| c).count()
    }
    /// Empties every channel.
    pub fn reset(&mut self) {
        self.channels = [false; 5];
    }

    /// Occupies each channel independently with probability `density`.
    pub fn randomize(&mut self, rng: &mut impl Rng, density: f64) {
        for c in &mut self.channels {
            *c = rng.random_bool(density);
        }
    }

    /// Redistributes the particles over randomly chosen channels.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        let n = self.particle_count();
        let mut bag = Channel::ALL;
        bag.shuffle(rng);
        self.reset();
        for &channel in &bag[..n] {
            self.set(channel, true);
        }
    }

    /// Puts a particle in a random free channel. Returns `false` if the cell
    /// is full.
    pub fn add_particle(&mut self, rng: &mut impl Rng) -> bool {
        match self.pick(rng, false) {
            Some(channel) => {
                self.set(channel, true);
                true
            }
            None => false,
        }
    }
    /// Removes a particle from a random occupied channel. Returns `false` if
    /// the cell is empty.
    pub fn remove_particle(&mut self, rng: &mut impl Rng) -> bool {
        match self.pick(rng, true) {
            Some(channel) => {
                self.set(channel, false);
                true
            }
            None => false,
        }
    }

    /// Picks a random channel whose occupancy is `occupied`.
    fn pick(self, rng: &mut impl Rng, occupied: bool) -> Option<Channel> {
        let candidates: Vec<Channel> = Channel::ALL
            .iter()
            .copied()
            .filter(|&ch| self.get(ch) == occupied)
            .collect();
        if candidates.is_empty() {
            None
        } else {
            Some(candidates[rng.random_range(0..candidates.len())])
        }
    }
}

/// Double-buffered lattice of one species.
#[derive(Debug)]
struct Species {
    current: Grid<LgCell>,
    next: Grid<LgCell>,
}
impl Species {
    fn new(size: usize) -> Self {
        Self {
            current: Grid::new([size, size]),
            next: Grid::new([size, size]),
        }
    }

    fn particle_count(&self) -> usize {
        self.current.cells().iter().map(|c| c.particle_count()).sum()
    }

    fn shuffle(&mut self, rng: &mut impl Rng) {
        for cell in self.current.cells_mut() {
            cell.shuffle(rng);
        }
    }

    /// Moves every particle one cell along its channel. Resting particles
    /// stay put.
    fn propagate(&mut self, nbhd: &VonNeumann, boundary: &Wrap) -> CaResult<()> {
        for (index, pos) in self.current.positions().enumerate() {
            // [row - 1, row + 1, col - 1, col + 1]
            let nbrs = nbhd.neighbors(&self.current, boundary, &pos)?;
            let (above, below, left, right) = (nbrs[0], nbrs[1], nbrs[2], nbrs[3]);
            let mut cell = LgCell::default();
            cell.set(Channel::Up, below.get(Channel::Up));
            cell.set(Channel::Down, above.get(Channel::Down));
            cell.set(Channel::Left, right.get(Channel::Left));
            cell.set(Channel::Right, left.get(Channel::Right));
            cell.set(Channel::Rest, self.current.cells()[index].get(Channel::Rest));
            self.next.cells_mut()[index] = cell;
        }
        std::mem::swap(&mut self.current, &mut self.next);
        Ok(())
    }

    /// Runs `steps` rounds of redistribution followed by propagation.
    fn diffuse(
        &mut self,
        steps: u32,
        rng: &mut impl Rng,
        nbhd: &VonNeumann,
        boundary: &Wrap,
    ) -> CaResult<()> {
        for _ in 0..steps {
            self.shuffle(rng);
            self.propagate(nbhd, boundary)?;
        }
        Ok(())
    }
}

/// Activator-inhibitor lattice gas on a square torus, indexed `[y, x]`.
#[derive(Debug)]
pub struct TuringPatterns {
    activator: Species,
    inhibitor: Species,
    rng: StdRng,
    p_c: f64,
    p_d: f64,
    m_a: u32,
    m_i: u32,
    density: f64,
    boundary: Wrap,
    nbhd: VonNeumann,
    generation: u64,
}
impl TuringPatterns {
    /// Creates a randomly filled lattice.
    pub fn new(config: &TuringConfig, rng: StdRng) -> Self {
        let mut ret = Self::empty(config, rng);
        ret.randomize();
        ret
    }

    /// Creates a lattice with no particles.
    pub fn empty(config: &TuringConfig, rng: StdRng) -> Self {
        let mut ret = Self {
            activator: Species::new(config.size),
            inhibitor: Species::new(config.size),
            rng,
            p_c: 0.0,
            p_d: 0.0,
            m_a: 0,
            m_i: 0,
            density: clamp_probability(config.density),
            boundary: Wrap,
            nbhd: VonNeumann,
            generation: 0,
        };
        ret.set_p_c(config.p_c);
        ret.set_p_d(config.p_d);
        ret.set_m_a(config.m_a);
        ret.set_m_i(config.m_i);
        ret
    }

    /// Refills both species at random and restarts the generation count.
    pub fn randomize(&mut self) {
        for species in &mut [&mut self.activator, &mut self.inhibitor] {
            for cell in species.current.cells_mut() {
                cell.randomize(&mut self.rng, self.density);
            }
        }
        self.generation = 0;
    }

    /// Returns the activator lattice.
    pub fn activators(&self) -> &Grid<LgCell> {
        &self.activator.current
    }

    pub fn p_c(&self) -> f64 {
        self.p_c
    }
    pub fn set_p_c(&mut self, p_c: f64) {
        self.p_c = clamp_probability(p_c);
    }
    pub fn p_d(&self) -> f64 {
        self.p_d
    }
    pub fn set_p_d(&mut self, p_d: f64) {
        self.p_d = clamp_probability(p_d);
    }
    pub fn m_a(&self) -> u32 {
        self.m_a
    }
    pub fn set_m_a(&mut self, m_a: u32) {
        self.m_a = m_a;
    }
    pub fn m_i(&self) -> u32 {
        self.m_i
    }
    pub fn set_m_i(&mut self, m_i: u32) {
        self.m_i = m_i;
    }

    /// Creates particles where activators outnumber inhibitors and destroys
    /// them everywhere else.
    fn react(&mut self) {
        let cells = self
            .activator
            .current
            .cells_mut()
            .iter_mut()
            .zip(self.inhibitor.current.cells_mut());
        for (a, i) in cells {
            if a.particle_count() > i.particle_count() {
                if self.rng.random_bool(self.p_c) {
                    a.add_particle(&mut self.rng);
                }
                if self.rng.random_bool(self.p_c) {
                    i.add_particle(&mut self.rng);
                }
            } else {
                if self.rng.random_bool(self.p_d) {
                    a.remove_particle(&mut self.rng);
                }
                if self.rng.random_bool(self.p_d) {
                    i.remove_particle(&mut self.rng);
                }
            }
        }
    }
}
impl Automaton for TuringPatterns {
    fn name(&self) -> &'static str {
        "Turing Patterns"
    }
    fn generation(&self) -> u64 {
        self.generation
    }
    fn canvas_size(&self) -> (usize, usize) {
        let extents = self.activator.current.extents();
        (extents[1], extents[0])
    }

    fn status(&self) -> String {
        format!(
            "generation {}, {} activators, {} inhibitors \
             (p_c {:.2}, p_d {:.2}, m_a {}, m_i {})",
            self.generation,
            self.activator.particle_count(),
            self.inhibitor.particle_count(),
            self.p_c(),
            self.p_d(),
            self.m_a(),
            self.m_i(),
        )
    }

    fn update(&mut self) -> CaResult<()> {
        self.react();
        self.activator
            .diffuse(self.m_a, &mut self.rng, &self.nbhd, &self.boundary)?;
        self.inhibitor
            .diffuse(self.m_i, &mut self.rng, &self.nbhd, &self.boundary)?;
        self.generation += 1;
        trace!(
            "Turing generation {}: {} activators, {} inhibitors",
            self.generation,
            self.activator.particle_count(),
            self.inhibitor.particle_count(),
        );
        Ok(())
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        for (pos, cell) in self.activators().iter_enumerated() {
            canvas.fill_cell(pos[1], pos[0], activator_color(cell.particle_count()));
        }
    }
}

fn activator_color(count: usize) -> Color {
    colorous::VIRIDIS.eval_rational(count, Channel::ALL.len() + 1)
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.max(0.0).min(1.0)
    }
}
