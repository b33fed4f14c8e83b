mod engine;
mod grid;
mod runner;
mod utils;

pub use engine::{next_state, GameOfLife, SharedGame};
pub use grid::{Chunk, DenseGrid, PackedGrid, Representation};
pub use runner::{GridCallback, IterationCallback, LifeControl, LifeRunner};
pub use utils::{Config, Grid, LifeError};

pub type DefaultGame = GameOfLife<PackedGrid>;
