use std::time::Duration;

use crate::elementary::ElementaryRule;

#[derive(Debug, Default)]
pub struct Config {
    pub seed: Option<u64>,
    pub gfx: GfxConfig,
    pub brain: BrainConfig,
    pub quake: QuakeConfig,
    pub elementary: ElementaryConfig,
    pub turing: TuringConfig,
}

#[derive(Debug)]
pub struct GfxConfig {
    /// Time between simulation ticks.
    pub tick_interval: Duration,
    /// Number of ticks to run before exiting.
    pub ticks: u64,
    /// Render after every this many ticks (and always after the last one).
    pub render_every: u64,
}
impl Default for GfxConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
            ticks: 100,
            render_every: 10,
        }
    }
}

#[derive(Debug)]
pub struct BrainConfig {
    pub width: usize,
    pub height: usize,
    /// Probability that a cell starts out on.
    pub density: f64,
}
impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 160,
            density: 0.1,
        }
    }
}

#[derive(Debug)]
pub struct QuakeConfig {
    pub width: usize,
    pub height: usize,
    /// Stress at which a block slips.
    pub threshold: f64,
    /// Fraction of a slipping block's stress handed to each neighbor. Values
    /// below 0.25 leak stress on every slip.
    pub alpha: f64,
    /// Number of recent avalanche sizes to remember.
    pub history_len: usize,
}
impl Default for QuakeConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            threshold: 4.0,
            alpha: 0.2,
            history_len: 256,
        }
    }
}

#[derive(Debug)]
pub struct ElementaryConfig {
    pub width: usize,
    /// Number of rows kept on screen.
    pub history_len: usize,
    pub rule: ElementaryRule,
}
impl Default for ElementaryConfig {
    fn default() -> Self {
        Self {
            width: 101,
            history_len: 50,
            rule: ElementaryRule::new(30),
        }
    }
}

#[derive(Debug)]
pub struct TuringConfig {
    pub size: usize,
    /// Probability of creating a particle where activators outnumber
    /// inhibitors.
    pub p_c: f64,
    /// Probability of destroying a particle everywhere else.
    pub p_d: f64,
    /// Diffusion steps per tick for activators.
    pub m_a: u32,
    /// Diffusion steps per tick for inhibitors.
    pub m_i: u32,
    /// Probability that each channel starts out occupied.
    pub density: f64,
}
impl Default for TuringConfig {
    fn default() -> Self {
        Self {
            size: 100,
            p_c: 0.5,
            p_d: 0.5,
            m_a: 1,
            m_i: 6,
            density: 0.2,
        }
    }
}
