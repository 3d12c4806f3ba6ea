//! Terminal frontend that runs one of the demo automata.
//!
//! Usage: `ndlattice [brain|quake|elementary|turing] [ticks] [rule] [--seed N]`

#![warn(rust_2018_idioms)]

use anyhow::{Context, Result};
use log::{debug, info};
use std::thread;

mod automaton;
mod brians_brain;
mod canvas;
mod config;
mod earthquake;
mod elementary;
mod turing;

use automaton::Demo;
use canvas::TextCanvas;
use config::Config;

/// Clears the terminal and moves the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn main() -> Result<()> {
    simple_logger::init().context("Failed to initialize logger")?;
    info!("Starting ndlattice v{} ...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::default();
    let demo = parse_args(std::env::args().skip(1), &mut config)?;
    debug!("Running {:?} with {:?}", demo, config);
    run(demo, &config)
}

/// Reads positional arguments (demo, tick count, elementary rule) and the
/// `--seed` option into the config.
fn parse_args(mut args: impl Iterator<Item = String>, config: &mut Config) -> Result<Demo> {
    let mut positional = vec![];
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            let seed = args.next().context("Missing value for --seed")?;
            config.seed = Some(
                seed.parse()
                    .with_context(|| format!("Invalid seed {:?}", seed))?,
            );
        } else {
            positional.push(arg);
        }
    }
    let mut positional = positional.into_iter();

    let demo = match positional.next() {
        Some(name) => name.parse()?,
        None => Demo::default(),
    };
    if let Some(ticks) = positional.next() {
        config.gfx.ticks = ticks
            .parse()
            .with_context(|| format!("Invalid tick count {:?}", ticks))?;
    }
    if let Some(rule) = positional.next() {
        config.elementary.rule = rule.parse()?;
    }
    if let Some(extra) = positional.next() {
        anyhow::bail!("Unexpected argument {:?}", extra);
    }
    Ok(demo)
}

fn run(demo: Demo, config: &Config) -> Result<()> {
    let mut automaton = demo.build(config)?;
    info!("Running {} for {} ticks", automaton.name(), config.gfx.ticks);
    let mut canvas = TextCanvas::new(automaton.canvas_size());
    let render_every = config.gfx.render_every.max(1);

    for tick in 1..=config.gfx.ticks {
        automaton
            .update()
            .with_context(|| format!("Error on tick {}", tick))?;
        debug!("{}: {}", automaton.name(), automaton.status());
        if tick % render_every == 0 || tick == config.gfx.ticks {
            automaton.render(&mut canvas);
            print!("{}{}", CLEAR_SCREEN, canvas);
            println!("{} - {}", automaton.name(), automaton.status());
        }
        thread::sleep(config.gfx.tick_interval);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<(Demo, Config)> {
        let mut config = Config::default();
        let demo = parse_args(args.iter().map(|s| s.to_string()), &mut config)?;
        Ok((demo, config))
    }

    #[test]
    fn test_parse_args() {
        let (demo, config) = parse(&[]).unwrap();
        assert_eq!(Demo::BriansBrain, demo);
        assert_eq!(None, config.seed);

        let (demo, config) = parse(&["elementary", "20", "90", "--seed", "4"]).unwrap();
        assert_eq!(Demo::Elementary, demo);
        assert_eq!(20, config.gfx.ticks);
        assert_eq!(90, config.elementary.rule.number());
        assert_eq!(Some(4), config.seed);

        assert!(parse(&["quake", "lots"]).is_err());
        assert!(parse(&["elementary", "1", "300"]).is_err());
        assert!(parse(&["turing", "--seed"]).is_err());
        assert!(parse(&["turing", "1", "2", "3"]).is_err());
    }
}
