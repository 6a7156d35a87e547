#![deny(unsafe_code)]
//! Gray-Scott-style reaction-diffusion simulation on a fixed 2D grid.
//!
//! Two chemicals A and B react and diffuse: A is replenished at the feed
//! rate and consumed by the reaction A + 2B → 3B; B is produced by the
//! reaction and removed at the feed-plus-kill rate. Diffusion is a 3x3
//! kernel convolution over a frozen pre-step snapshot, with zero padding at
//! the grid edges.
//!
//! The readout per cell is the scalar `rate = a / (a + b)`, which a render
//! sink maps to a grayscale intensity. The crate exposes no loop or timer
//! of its own; an external driver calls [`Grid::update`] then
//! [`Grid::draw`] once per frame.

pub mod cell;
pub mod grid;
pub mod kernel;
pub mod params;
pub mod seed;

pub use cell::{Cell, Delta};
pub use grid::{Grid, GridDump, RenderSink};
pub use kernel::Kernel;
pub use params::SimulationParams;
pub use seed::SeedMode;
