#![deny(unsafe_code)]
//! Core types for the petri reaction-diffusion workspace.
//!
//! Provides the `SimError` error type, typed JSON parameter helpers,
//! the `Xorshift64` PRNG, and the reproducible `RunSpec`.

pub mod error;
pub mod params;
pub mod prng;
pub mod runspec;

pub use error::SimError;
pub use prng::Xorshift64;
pub use runspec::RunSpec;
