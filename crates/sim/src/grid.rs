//! The simulation grid: a fixed 2D lattice of cells, the convolution
//! kernel, and the per-step orchestration.
//!
//! Storage is a flat row-major `Vec<Cell>` indexed by `y * width + x`.
//! Boundary handling is zero padding: neighbors outside the grid contribute
//! nothing to the convolution (no wraparound, no reflection).

use crate::cell::{Cell, Delta};
use crate::kernel::Kernel;
use crate::params::SimulationParams;
use crate::seed::SeedMode;
use petri_core::error::SimError;
use petri_core::prng::Xorshift64;
use petri_core::runspec::RunSpec;
use std::fmt;

/// Receiver for the per-cell readout pass.
///
/// `draw` yields every cell's grayscale rate in row-major order; the sink
/// decides how (and whether) to turn that into pixels. The rate is intended
/// to lie in [0, 1] but may leave that range — or be NaN — at extremes, and
/// the sink must cope deterministically.
pub trait RenderSink {
    /// Called once per cell with its grid coordinates and readout rate.
    fn cell(&mut self, x: usize, y: usize, rate: f64);
}

/// A fixed-size 2D lattice of [`Cell`]s driven by a reaction-diffusion rule.
///
/// Dimensions are fixed for the grid's lifetime. The driver contract is:
/// [`seed`](Grid::seed) once, then [`update`](Grid::update) followed by
/// [`draw`](Grid::draw) once per frame.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    params: SimulationParams,
    kernel: Kernel,
}

impl Grid {
    /// Creates a grid of quiescent cells (`a = 1`, `b = 0`).
    ///
    /// Returns `SimError::InvalidDimensions` if either dimension is zero or
    /// `width * height` overflows `usize`.
    pub fn new(
        width: usize,
        height: usize,
        params: SimulationParams,
        kernel: Kernel,
    ) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(SimError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::new(); len],
            params,
            kernel,
        })
    }

    /// Builds and seeds a grid from a reproducible [`RunSpec`].
    ///
    /// Identical specs produce bit-identical grids.
    pub fn from_spec(spec: &RunSpec) -> Result<Self, SimError> {
        spec.validate()?;
        let params = SimulationParams::from_json(&spec.params);
        let kernel = spec.kernel.map(Kernel::new).unwrap_or_default();
        let mut grid = Grid::new(spec.width, spec.height, params, kernel)?;
        let mut rng = Xorshift64::new(spec.seed);
        grid.seed(SeedMode::from_name(&spec.mode, spec.rate), &mut rng);
        Ok(grid)
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The shared simulation parameters.
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// The convolution kernel.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// The cell at `(x, y)`, or `SimError::OutOfBounds`.
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, SimError> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Mutable access to the cell at `(x, y)`, or `SimError::OutOfBounds`.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, SimError> {
        self.index(x, y).map(move |idx| &mut self.cells[idx])
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, SimError> {
        if x >= self.width || y >= self.height {
            return Err(SimError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Perturbs the B concentration across the grid.
    ///
    /// - `Random(rate)`: each cell independently gets `b = 1` with
    ///   probability `rate` (one PRNG draw per cell), else `b = 0`.
    /// - `Center`: `b = 1` for rows in `[H/3, 2H/3)` and columns in
    ///   `[W/3, 2H/3)`. NB: the column upper bound uses the grid HEIGHT, so
    ///   the block is only square when the grid is. On grids where that
    ///   bound exceeds the width it is clamped to the width.
    ///
    /// May be called at any time; it only writes `b`, never the snapshot.
    pub fn seed(&mut self, mode: SeedMode, rng: &mut Xorshift64) {
        match mode {
            SeedMode::Random(rate) => {
                for cell in &mut self.cells {
                    cell.b = if rng.next_f64() < rate { 1.0 } else { 0.0 };
                }
            }
            SeedMode::Center => {
                let row_lo = self.height / 3;
                let row_hi = 2 * self.height / 3;
                let col_lo = self.width / 3;
                let col_hi = (2 * self.height / 3).min(self.width);
                for y in row_lo..row_hi {
                    for x in col_lo..col_hi {
                        self.cells[y * self.width + x].b = 1.0;
                    }
                }
            }
        }
    }

    /// Computes the diffusion delta for the cell at `(x, y)`: the kernel-
    /// weighted sum of the 3x3 neighborhood's `last_a`/`last_b` snapshots.
    ///
    /// The center cell contributes its own snapshot under the center weight;
    /// out-of-bounds neighbors contribute zero.
    pub fn laplacian(&self, x: usize, y: usize) -> Delta {
        let mut delta = Delta::ZERO;
        for (ki, dy) in (-1_isize..=1).enumerate() {
            for (kj, dx) in (-1_isize..=1).enumerate() {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= self.width as isize || ny >= self.height as isize {
                    continue;
                }
                let weight = self.kernel.weight(ki, kj);
                let cell = &self.cells[ny as usize * self.width + nx as usize];
                delta.a += cell.last_a * weight;
                delta.b += cell.last_b * weight;
            }
        }
        delta
    }

    /// Advances the whole grid by one step.
    ///
    /// First snapshots every cell (`last ← current`), then computes each
    /// cell's Laplacian delta from the snapshots and applies the cell
    /// update, in row-major order. Because all neighbor reads go through
    /// the frozen snapshot, the result is independent of traversal order.
    pub fn update(&mut self) {
        self.update_in(0..self.cells.len());
    }

    /// Snapshot pass plus per-cell step in the given index order.
    ///
    /// The public `update` always passes row-major order; other orders
    /// exist to verify order independence.
    fn update_in(&mut self, order: impl IntoIterator<Item = usize>) {
        for cell in &mut self.cells {
            cell.snapshot();
        }
        let params = self.params;
        for idx in order {
            let x = idx % self.width;
            let y = idx / self.width;
            let delta = self.laplacian(x, y);
            self.cells[idx].update(&params, delta);
        }
    }

    /// Readout pass: yields every cell's rate to `sink` in row-major order.
    ///
    /// Pure with respect to grid state; calling it any number of times
    /// between updates produces identical output.
    pub fn draw(&self, sink: &mut dyn RenderSink) {
        for (x, y, rate) in self.rates() {
            sink.cell(x, y, rate);
        }
    }

    /// Iterates over all cells yielding `(x, y, rate)` in row-major order.
    pub fn rates(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.cells.iter().enumerate().map(|(i, cell)| {
            let x = i % self.width;
            let y = i / self.width;
            (x, y, cell.rate())
        })
    }

    /// A lazy human-readable dump of every cell's `(a, b)` pair.
    ///
    /// Formats on demand via `Display`; one grid row per line. Debugging
    /// aid only.
    pub fn dump(&self) -> GridDump<'_> {
        GridDump { grid: self }
    }
}

/// Lazy `Display` adapter returned by [`Grid::dump`].
pub struct GridDump<'a> {
    grid: &'a Grid,
}

impl fmt::Display for GridDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                if x > 0 {
                    f.write_str(" | ")?;
                }
                let cell = &self.grid.cells[y * self.grid.width + x];
                write!(f, "{:.6} {:.6}", cell.a, cell.b)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
