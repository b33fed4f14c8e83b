use crate::LifeError;

mod dense;
mod packed;

pub use dense::DenseGrid;
pub use packed::{Chunk, PackedGrid};

/// Storage strategy of the cells, chosen once when a game is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Representation {
    /// One `bool` per cell.
    Dense,
    /// 32 cells per chunk.
    #[default]
    Packed,
}

impl std::str::FromStr for Representation {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dense" => Ok(Self::Dense),
            "packed" => Ok(Self::Packed),
            _ => Err(LifeError::UnknownRepresentation(s.to_string())),
        }
    }
}
