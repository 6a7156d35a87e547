#![deny(unsafe_code)]
//! Thin render sink for the petri simulation: maps each cell's readout rate
//! to a grayscale rectangle in an RGBA buffer, and optionally writes PNG
//! snapshots (feature `png`, default on).

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::FrameBuffer;
