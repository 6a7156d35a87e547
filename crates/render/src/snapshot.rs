//! PNG output for a rendered frame.
//!
//! Feature-gated behind `png` (default on) so callers that only want the
//! in-memory buffer do not pull in the `image` crate.

use crate::pixel::FrameBuffer;
use petri_core::error::SimError;
use std::path::Path;

/// Writes a frame buffer to `path` as a PNG.
///
/// Returns `SimError::InvalidDimensions` if the buffer dimensions overflow
/// `u32`, or `SimError::Io` on write failure.
pub fn write_png(buffer: &FrameBuffer, path: &Path) -> Result<(), SimError> {
    let w = u32::try_from(buffer.width()).map_err(|_| SimError::InvalidDimensions)?;
    let h = u32::try_from(buffer.height()).map_err(|_| SimError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, buffer.pixels().to_vec())
        .ok_or_else(|| SimError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SimError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_core::prng::Xorshift64;
    use petri_sim::{Grid, Kernel, SeedMode, SimulationParams};

    #[test]
    fn write_png_round_trip() {
        let mut grid = Grid::new(16, 16, SimulationParams::default(), Kernel::default()).unwrap();
        grid.seed(SeedMode::Random(0.5), &mut Xorshift64::new(42));
        let mut buf = FrameBuffer::new(16, 16, 64, 64).unwrap();
        grid.draw(&mut buf);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        write_png(&buf, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
    }

    #[test]
    fn write_png_to_bad_path_reports_io_error() {
        let buf = FrameBuffer::new(4, 4, 8, 8).unwrap();
        let result = write_png(&buf, Path::new("/nonexistent-dir/frame.png"));
        assert!(matches!(result, Err(SimError::Io(_))));
    }
}
