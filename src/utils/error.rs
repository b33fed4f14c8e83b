use thiserror::Error;

/// Errors emitted by grids and the generation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid grid dimension {width}x{height}: both sides must be positive and the cell count must fit in memory")]
    InvalidDimension { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("unknown representation `{0}`, expected `dense` or `packed`")]
    UnknownRepresentation(String),
}

impl LifeError {
    /// Returns the number of cells of a `width x height` grid.
    ///
    /// Fails with [`LifeError::InvalidDimension`] if a side is zero or the
    /// cell count overflows `usize`.
    pub fn check_dimensions(width: usize, height: usize) -> Result<usize, Self> {
        match width.checked_mul(height) {
            Some(cells) if cells > 0 => Ok(cells),
            _ => Err(Self::InvalidDimension { width, height }),
        }
    }
}
