//! Grayscale RGBA frame buffer that receives the grid's readout pass.
//!
//! Each grid cell owns a rectangle of `cell_width x cell_height` pixels,
//! derived from the requested canvas size. The canvas has no effect on the
//! simulation; it only scales the drawing.

use petri_core::error::SimError;
use petri_sim::RenderSink;

/// An RGBA8 pixel buffer that fills one grayscale rectangle per cell.
///
/// The cell rectangle size is `canvas / grid`, rounded down; the buffer is
/// trimmed to whole cells, so its real size is `cell_size * grid_size` per
/// axis. Intensity is `rate * 255` through a saturating cast: rates above 1
/// clip to white, below 0 to black, and NaN lands on black — degenerate but
/// deterministic.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    cell_width: usize,
    cell_height: usize,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// Creates a buffer for a `grid_width x grid_height` grid drawn onto a
    /// canvas of roughly `canvas_width x canvas_height` pixels.
    ///
    /// Returns `SimError::InvalidDimensions` if any input is zero or the
    /// canvas is smaller than the grid (a cell must get at least one pixel).
    pub fn new(
        grid_width: usize,
        grid_height: usize,
        canvas_width: usize,
        canvas_height: usize,
    ) -> Result<Self, SimError> {
        if grid_width == 0 || grid_height == 0 {
            return Err(SimError::InvalidDimensions);
        }
        let cell_width = canvas_width / grid_width;
        let cell_height = canvas_height / grid_height;
        if cell_width == 0 || cell_height == 0 {
            return Err(SimError::InvalidDimensions);
        }
        let width = cell_width * grid_width;
        let height = cell_height * grid_height;
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(SimError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            cell_width,
            cell_height,
            pixels: vec![0; len],
        })
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel width of one cell's rectangle.
    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Pixel height of one cell's rectangle.
    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// The raw RGBA8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the buffer, returning the raw RGBA8 pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Grayscale intensity for a readout rate.
    fn intensity(rate: f64) -> u8 {
        // Saturating float->int cast: >255 clips, <0 clips, NaN -> 0.
        (rate * 255.0) as u8
    }
}

impl RenderSink for FrameBuffer {
    fn cell(&mut self, x: usize, y: usize, rate: f64) {
        let v = Self::intensity(rate);
        let px0 = x * self.cell_width;
        let py0 = y * self.cell_height;
        for py in py0..py0 + self.cell_height {
            let row = py * self.width;
            for px in px0..px0 + self.cell_width {
                let at = (row + px) * 4;
                self.pixels[at] = v;
                self.pixels[at + 1] = v;
                self.pixels[at + 2] = v;
                self.pixels[at + 3] = 255;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_core::prng::Xorshift64;
    use petri_sim::{Grid, Kernel, SeedMode, SimulationParams};

    fn rgba_at(buf: &FrameBuffer, px: usize, py: usize) -> [u8; 4] {
        let at = (py * buf.width() + px) * 4;
        buf.pixels()[at..at + 4].try_into().unwrap()
    }

    #[test]
    fn buffer_is_trimmed_to_whole_cells() {
        // 500 / 100 = 5 px per cell, exact.
        let buf = FrameBuffer::new(100, 100, 500, 500).unwrap();
        assert_eq!(buf.width(), 500);
        assert_eq!(buf.height(), 500);
        assert_eq!(buf.cell_width(), 5);
        assert_eq!(buf.pixels().len(), 500 * 500 * 4);

        // 7 / 3 = 2 px per cell, canvas trimmed from 7 to 6.
        let buf = FrameBuffer::new(3, 3, 7, 7).unwrap();
        assert_eq!(buf.width(), 6);
        assert_eq!(buf.height(), 6);
    }

    #[test]
    fn canvas_smaller_than_grid_is_rejected() {
        assert!(matches!(
            FrameBuffer::new(100, 100, 50, 500),
            Err(SimError::InvalidDimensions)
        ));
        assert!(FrameBuffer::new(0, 10, 100, 100).is_err());
    }

    #[test]
    fn cell_fills_its_whole_rectangle() {
        let mut buf = FrameBuffer::new(4, 4, 16, 16).unwrap();
        buf.cell(1, 2, 1.0);
        // Cell (1, 2) owns pixels x in [4, 8), y in [8, 12).
        for py in 8..12 {
            for px in 4..8 {
                assert_eq!(rgba_at(&buf, px, py), [255, 255, 255, 255]);
            }
        }
        // A neighboring pixel is untouched.
        assert_eq!(rgba_at(&buf, 3, 8), [0, 0, 0, 0]);
    }

    #[test]
    fn intensity_maps_rate_to_grayscale() {
        assert_eq!(FrameBuffer::intensity(0.0), 0);
        assert_eq!(FrameBuffer::intensity(1.0), 255);
        assert_eq!(FrameBuffer::intensity(0.5), 127);
    }

    #[test]
    fn intensity_is_deterministic_at_the_extremes() {
        assert_eq!(FrameBuffer::intensity(2.0), 255);
        assert_eq!(FrameBuffer::intensity(-1.0), 0);
        assert_eq!(FrameBuffer::intensity(f64::NAN), 0);
        assert_eq!(FrameBuffer::intensity(f64::INFINITY), 255);
    }

    #[test]
    fn quiescent_grid_draws_all_white() {
        let grid = Grid::new(8, 8, SimulationParams::default(), Kernel::default()).unwrap();
        let mut buf = FrameBuffer::new(8, 8, 32, 32).unwrap();
        grid.draw(&mut buf);
        assert!(buf
            .pixels()
            .chunks_exact(4)
            .all(|p| p == [255, 255, 255, 255]));
    }

    #[test]
    fn seeded_cells_draw_darker_than_unseeded() {
        let mut grid = Grid::new(9, 9, SimulationParams::default(), Kernel::default()).unwrap();
        grid.seed(SeedMode::Center, &mut Xorshift64::new(1));
        let mut buf = FrameBuffer::new(9, 9, 9, 9).unwrap();
        grid.draw(&mut buf);
        // Seeded center cell: rate = 1 / (1 + 1) = 0.5.
        assert_eq!(rgba_at(&buf, 4, 4)[0], 127);
        assert_eq!(rgba_at(&buf, 0, 0)[0], 255);
    }
}
