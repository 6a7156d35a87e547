//! Initial perturbation of the grid's B concentration.

/// How the grid's B concentration is perturbed before simulation starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeedMode {
    /// Independently set `b = 1` in each cell with the given probability.
    Random(f64),
    /// Set `b = 1` in a block in the middle of the grid.
    Center,
}

impl SeedMode {
    /// Resolves a mode name, falling back to `Random(rate)` for anything
    /// that is not `"center"`.
    pub fn from_name(name: &str, rate: f64) -> Self {
        match name {
            "center" => SeedMode::Center,
            _ => SeedMode::Random(rate),
        }
    }

    /// The canonical name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            SeedMode::Random(_) => "random",
            SeedMode::Center => "center",
        }
    }
}
