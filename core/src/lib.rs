//! Dense N-dimensional cell grids with pluggable boundaries and neighborhoods.
//!
//! A `Grid` stores cells of any type in a flat row-major buffer. A boundary
//! policy (`Wrap`, `Reflect`, or `Fixed`) decides where a single step from a
//! cell lands, and a neighborhood (`Linear`, `VonNeumann`, or `Moore`) decides
//! which steps to take. Automata combine the three without ever touching
//! linear offsets themselves.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

#[macro_use]
mod macros;
pub mod boundary;
pub mod errors;
pub mod fixedvec;
pub mod grid;
pub mod layout;
pub mod neighborhood;

pub use boundary::{BoundaryPolicy, BoundaryRule, Fixed, Reflect, Site, Wrap};
pub use errors::{CaError, CaResult};
pub use fixedvec::{Delta, FixedVec, UVec};
pub use grid::Grid;
pub use layout::GridLayout;
pub use neighborhood::{Linear, Moore, MooreDeltas, Neighborhood, VonNeumann};

/// Traits needed to call methods on boundaries and neighborhoods.
pub mod traits {
    pub use crate::boundary::{BoundaryPolicy, BoundaryRule};
    pub use crate::neighborhood::Neighborhood;
}

/// Everything an automaton usually needs.
pub mod prelude {
    pub use crate::traits::*;

    pub use crate::boundary::{Fixed, Reflect, Site, Wrap};
    pub use crate::errors::{CaError, CaResult};
    pub use crate::fixedvec::{Delta, FixedVec, UVec};
    pub use crate::grid::Grid;
    pub use crate::layout::GridLayout;
    pub use crate::neighborhood::{Linear, Moore, MooreDeltas, VonNeumann};
}
