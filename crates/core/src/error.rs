//! Error types shared across the petri workspace.

use thiserror::Error;

/// Errors produced by simulation construction and snapshot I/O.
///
/// The numeric core itself defines no recoverable errors: the update rule is
/// total over the reals and NaN/Infinity propagate. Everything here is a
/// configuration or I/O failure that should abort fast.
#[derive(Debug, Error)]
pub enum SimError {
    /// Width or height was zero (or their product overflowed) when creating a grid.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A convolution kernel was not exactly 3x3.
    #[error("invalid kernel: expected 3x3, got {rows}x{cols}")]
    InvalidKernel { rows: usize, cols: usize },

    /// A kernel entry was not a JSON number.
    #[error("invalid kernel entry at ({row}, {col}): not a number")]
    InvalidKernelEntry { row: usize, col: usize },

    /// An (x, y) coordinate was outside the grid bounds.
    #[error("index ({x}, {y}) out of bounds for grid of size ({width}, {height})")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A snapshot could not be written.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let err = SimError::InvalidDimensions;
        let msg = format!("{err}");
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn invalid_kernel_includes_actual_shape() {
        let err = SimError::InvalidKernel { rows: 2, cols: 5 };
        let msg = format!("{err}");
        assert!(msg.contains("3x3"), "missing expected shape in: {msg}");
        assert!(msg.contains("2x5"), "missing actual shape in: {msg}");
    }

    #[test]
    fn invalid_kernel_entry_includes_position() {
        let err = SimError::InvalidKernelEntry { row: 1, col: 2 };
        let msg = format!("{err}");
        assert!(
            msg.contains('1') && msg.contains('2'),
            "missing position in: {msg}"
        );
    }

    #[test]
    fn out_of_bounds_includes_coordinates_and_dimensions() {
        let err = SimError::OutOfBounds {
            x: 10,
            y: 20,
            width: 8,
            height: 8,
        };
        let msg = format!("{err}");
        assert!(msg.contains("10"), "missing x in: {msg}");
        assert!(msg.contains("20"), "missing y in: {msg}");
        assert!(msg.contains('8'), "missing dimension in: {msg}");
    }

    #[test]
    fn io_error_includes_message() {
        let err = SimError::Io("disk full".into());
        assert!(format!("{err}").contains("disk full"));
    }

    #[test]
    fn sim_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimError>();
    }

    #[test]
    fn sim_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<SimError>();
    }
}
