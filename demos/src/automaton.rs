//! Common interface for the demo automata and a way to pick one by name.

use anyhow::{anyhow, Result};
use ndlattice_core::CaResult;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::str::FromStr;

use crate::brians_brain::BriansBrain;
use crate::canvas::Canvas;
use crate::config::Config;
use crate::earthquake::Earthquake;
use crate::elementary::Elementary;
use crate::turing::TuringPatterns;

/// Cellular automaton that advances in discrete ticks and can draw itself.
pub trait Automaton: fmt::Debug {
    /// Returns a human-friendly name for the automaton.
    fn name(&self) -> &'static str;
    /// Returns the number of ticks simulated so far.
    fn generation(&self) -> u64;
    /// Returns the width and height of the picture drawn by `render()`.
    fn canvas_size(&self) -> (usize, usize);
    /// Returns a one-line summary of the current state.
    fn status(&self) -> String {
        format!("generation {}", self.generation())
    }
    /// Advances the automaton by one tick.
    fn update(&mut self) -> CaResult<()>;
    /// Draws the current state onto a canvas.
    fn render(&self, canvas: &mut dyn Canvas);
}

/// Demo selectable from the command line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Demo {
    BriansBrain,
    Earthquake,
    Elementary,
    Turing,
}
impl Default for Demo {
    fn default() -> Self {
        Self::BriansBrain
    }
}
impl FromStr for Demo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brain" | "brians-brain" => Ok(Self::BriansBrain),
            "quake" | "earthquake" => Ok(Self::Earthquake),
            "elementary" | "eca" => Ok(Self::Elementary),
            "turing" => Ok(Self::Turing),
            other => Err(anyhow!(
                "Unknown demo {:?}; expected one of brain, quake, elementary, turing",
                other,
            )),
        }
    }
}
impl Demo {
    /// Constructs the demo from its configuration.
    pub fn build(self, config: &Config) -> Result<Box<dyn Automaton>> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(match self {
            Self::BriansBrain => Box::new(BriansBrain::new(&config.brain, &mut rng)),
            Self::Earthquake => Box::new(Earthquake::new(&config.quake, &mut rng)),
            Self::Elementary => Box::new(Elementary::new(&config.elementary)),
            Self::Turing => Box::new(TuringPatterns::new(&config.turing, rng)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_demo() {
        assert_eq!(Demo::BriansBrain, "brain".parse().unwrap());
        assert_eq!(Demo::Earthquake, " Quake ".parse().unwrap());
        assert_eq!(Demo::Elementary, "eca".parse().unwrap());
        assert_eq!(Demo::Turing, "turing".parse().unwrap());
        assert!("life".parse::<Demo>().is_err());
    }

    #[test]
    fn test_build_every_demo() {
        let mut config = Config::default();
        config.seed = Some(1);
        config.brain.width = 16;
        config.brain.height = 8;
        config.quake.width = 8;
        config.quake.height = 8;
        config.elementary.width = 15;
        config.turing.size = 8;
        for &demo in &[
            Demo::BriansBrain,
            Demo::Earthquake,
            Demo::Elementary,
            Demo::Turing,
        ] {
            let mut automaton = demo.build(&config).unwrap();
            assert_eq!(0, automaton.generation());
            automaton.update().unwrap();
            automaton.update().unwrap();
            assert_eq!(2, automaton.generation());
            assert!(!automaton.status().is_empty());
            let mut canvas = crate::canvas::TextCanvas::new(automaton.canvas_size());
            automaton.render(&mut canvas);
        }
    }
}
