//! One-dimensional, two-state, nearest-neighbor automata (Wolfram's
//! "elementary" rules) on a ring.

use log::{debug, trace};
use ndlattice_core::prelude::*;
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::automaton::Automaton;
use crate::canvas::{Canvas, BLACK, WHITE};
use crate::config::ElementaryConfig;

/// Error returned when parsing a rule number fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    /// The text is not a number.
    NotANumber(String),
    /// The number is larger than 255.
    OutOfRange(u64),
}
impl fmt::Display for RuleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(s) => write!(f, "Rule {:?} is not a number", s),
            Self::OutOfRange(n) => write!(f, "Rule {} is out of range 0..=255", n),
        }
    }
}
impl Error for RuleParseError {}

/// Elementary rule number. Bit `4*left + 2*center + right` holds the next
/// state for that neighborhood.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ElementaryRule(u8);
impl ElementaryRule {
    /// Constructs a rule from its Wolfram number.
    pub const fn new(number: u8) -> Self {
        Self(number)
    }
    /// Returns the Wolfram number of the rule.
    pub fn number(self) -> u8 {
        self.0
    }
    /// Returns the next state of a cell.
    pub fn next(self, left: bool, center: bool, right: bool) -> bool {
        let bit = (left as u8) << 2 | (center as u8) << 1 | right as u8;
        (self.0 >> bit) & 1 == 1
    }
}
impl fmt::Display for ElementaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule {}", self.number())
    }
}
impl FromStr for ElementaryRule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, RuleParseError> {
        let s = s.trim();
        let n: u64 = s
            .parse()
            .map_err(|_| RuleParseError::NotANumber(s.to_owned()))?;
        if n > u8::MAX as u64 {
            return Err(RuleParseError::OutOfRange(n));
        }
        Ok(Self(n as u8))
    }
}

/// Elementary automaton on a ring of cells, with a scrolling record of recent
/// rows.
#[derive(Debug)]
pub struct Elementary {
    row: Grid<bool>,
    next: Grid<bool>,
    rule: ElementaryRule,
    boundary: Wrap,
    nbhd: Linear,
    history: VecDeque<Vec<bool>>,
    history_len: usize,
    generation: u64,
}
impl Elementary {
    /// Creates a ring with only the center cell alive.
    pub fn new(config: &ElementaryConfig) -> Self {
        let mut ret = Self {
            row: Grid::new([config.width]),
            next: Grid::new([config.width]),
            rule: config.rule,
            boundary: Wrap,
            nbhd: Linear,
            history: VecDeque::with_capacity(config.history_len),
            history_len: config.history_len.max(1),
            generation: 0,
        };
        ret.clear();
        ret
    }

    /// Resets to a single live center cell and forgets the history.
    pub fn clear(&mut self) {
        debug!("Resetting {} to a single live cell", self.rule);
        self.row.fill(false);
        let width = self.row.total_size();
        if width > 0 {
            self.row.cells_mut()[width / 2] = true;
        }
        self.history.clear();
        self.record_row();
        self.generation = 0;
    }

    /// Returns the current rule.
    pub fn rule(&self) -> ElementaryRule {
        self.rule
    }

    /// Returns the current row.
    pub fn row(&self) -> &[bool] {
        self.row.cells()
    }
    /// Returns recent rows, oldest first. The last one is the current row.
    pub fn history(&self) -> impl '_ + Iterator<Item = &[bool]> {
        self.history.iter().map(|row| row.as_slice())
    }

    fn record_row(&mut self) {
        while self.history.len() >= self.history_len {
            self.history.pop_front();
        }
        let row = self.row().to_vec();
        self.history.push_back(row);
    }
}
impl Automaton for Elementary {
    fn name(&self) -> &'static str {
        "Elementary"
    }
    fn generation(&self) -> u64 {
        self.generation
    }
    fn canvas_size(&self) -> (usize, usize) {
        (self.row.total_size(), self.history_len)
    }

    fn status(&self) -> String {
        let live = self.row().iter().filter(|&&alive| alive).count();
        format!(
            "{}, generation {}, {} live cells",
            self.rule(),
            self.generation,
            live,
        )
    }

    fn update(&mut self) -> CaResult<()> {
        for (index, pos) in self.row.positions().enumerate() {
            let nbrs = self.nbhd.neighbors(&self.row, &self.boundary, &pos)?;
            let center = self.row.cells()[index];
            self.next.cells_mut()[index] = self.rule.next(*nbrs[0], center, *nbrs[1]);
        }
        std::mem::swap(&mut self.row, &mut self.next);
        self.record_row();
        self.generation += 1;
        trace!("{} generation {}", self.rule, self.generation);
        Ok(())
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear(BLACK);
        for (y, row) in self.history().enumerate() {
            for (x, &alive) in row.iter().enumerate() {
                if alive {
                    canvas.fill_cell(x, y, WHITE);
                }
            }
        }
    }
}
