//! Tunable constants of the reaction-diffusion rule.

use petri_core::params::param_f64;
use serde_json::Value;

/// Default diffusion rate for chemical A.
pub const DEFAULT_DIFFUSION_A: f64 = 1.0;
/// Default diffusion rate for chemical B.
pub const DEFAULT_DIFFUSION_B: f64 = 0.5;
/// Default feed rate — how fast A is replenished.
pub const DEFAULT_FEED: f64 = 0.045;
/// Default kill rate — how fast B is removed.
pub const DEFAULT_KILL: f64 = 0.065;
/// Default time-step multiplier applied to the whole update.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Simulation parameters for the reaction-diffusion rule.
///
/// A single immutable snapshot shared read-only by every cell for the
/// lifetime of a run. Use [`Default`] for the classic coral-growth values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Diffusion rate for A.
    pub diffusion_a: f64,
    /// Diffusion rate for B.
    pub diffusion_b: f64,
    /// Feed rate: how fast A is replenished.
    pub feed: f64,
    /// Kill rate: how fast B is removed.
    pub kill: f64,
    /// Time-step multiplier applied to the whole per-cell delta.
    pub speed: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            diffusion_a: DEFAULT_DIFFUSION_A,
            diffusion_b: DEFAULT_DIFFUSION_B,
            feed: DEFAULT_FEED,
            kill: DEFAULT_KILL,
            speed: DEFAULT_SPEED,
        }
    }
}

impl SimulationParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            diffusion_a: param_f64(params, "diffusion_a", DEFAULT_DIFFUSION_A),
            diffusion_b: param_f64(params, "diffusion_b", DEFAULT_DIFFUSION_B),
            feed: param_f64(params, "feed", DEFAULT_FEED),
            kill: param_f64(params, "kill", DEFAULT_KILL),
            speed: param_f64(params, "speed", DEFAULT_SPEED),
        }
    }
}
