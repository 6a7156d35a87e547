//! One lattice point: two chemical concentrations and their pre-step snapshot.

use crate::params::SimulationParams;

/// Diffusion delta pair produced by the grid's Laplacian convolution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub a: f64,
    pub b: f64,
}

impl Delta {
    /// The zero delta (isolated cell, or an all-zero kernel).
    pub const ZERO: Delta = Delta { a: 0.0, b: 0.0 };
}

/// One grid position's local chemical state.
///
/// `last_a`/`last_b` hold the values `a`/`b` had immediately before the most
/// recent update; they are the only values neighbors read during a step, so
/// every cell in one pass observes a consistent pre-step snapshot.
///
/// Concentrations are plain f64 with no clamping: the update rule is defined
/// over all reals and degenerate values (NaN, infinities) propagate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub(crate) a: f64,
    pub(crate) b: f64,
    pub(crate) last_a: f64,
    pub(crate) last_b: f64,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Creates a cell in the quiescent initial state: `a = 1`, `b = 0`,
    /// snapshot equal to the current values.
    pub fn new() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            last_a: 1.0,
            last_b: 0.0,
        }
    }

    /// Current A concentration.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Current B concentration.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// A concentration as of the start of the most recent update.
    pub fn last_a(&self) -> f64 {
        self.last_a
    }

    /// B concentration as of the start of the most recent update.
    pub fn last_b(&self) -> f64 {
        self.last_b
    }

    /// Copies the current concentrations into the snapshot.
    pub(crate) fn snapshot(&mut self) {
        self.last_a = self.a;
        self.last_b = self.b;
    }

    /// Applies one reaction-diffusion step to this cell.
    ///
    /// Snapshots `a, b` into `last_a, last_b`, then computes the new
    /// concentrations from the pre-call values:
    ///
    /// ```text
    /// a' = a + (Da·delta.a·a − a·b² + feed·(1−a)) · speed
    /// b' = b + (Db·delta.b·1.1·b + a·b² − (feed+kill)·b) · speed
    /// ```
    ///
    /// NB: the `1.1` factor on the B-diffusion term is a deliberate tuning
    /// constant carried over unchanged. Both equations read the pre-call
    /// `a` and `b`.
    pub fn update(&mut self, params: &SimulationParams, delta: Delta) {
        self.last_a = self.a;
        self.last_b = self.b;

        let a = self.a;
        let b = self.b;
        let reaction = a * b * b;

        self.a = a
            + (params.diffusion_a * delta.a * a - reaction + params.feed * (1.0 - a))
                * params.speed;
        self.b = b
            + (params.diffusion_b * delta.b * 1.1 * b + reaction
                - (params.feed + params.kill) * b)
                * params.speed;
    }

    /// The grayscale readout `a / (a + b)`.
    ///
    /// Pure: no state mutation. When `a + b == 0` this is NaN, which the
    /// caller must let propagate.
    pub fn rate(&self) -> f64 {
        self.a / (self.a + self.b)
    }
}
