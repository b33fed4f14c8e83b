use crate::{Grid, LifeError};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Handle to a game shared between a runner and the code editing its cells.
pub type SharedGame<G> = Arc<Mutex<GameOfLife<G>>>;

/// Double-buffered Game of Life on a bounded grid.
///
/// Generation `n + 1` is computed from an untouched snapshot of generation `n`:
/// the active buffer is only read and the passive one only written, then the
/// two swap roles.
#[derive(Clone, Debug)]
pub struct GameOfLife<G: Grid> {
    fields: [G; 2],
    active: usize,
    iteration: u64,
}

impl<G: Grid> GameOfLife<G> {
    /// Side length of the default field.
    pub const FIELD_SIZE_DEFAULT: usize = 10;

    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        Ok(Self {
            fields: [G::blank(width, height)?, G::blank(width, height)?],
            active: 0,
            iteration: 0,
        })
    }

    /// Wraps an already filled grid as generation 0.
    pub fn from_grid(grid: G) -> Result<Self, LifeError> {
        let (width, height) = grid.size();
        Ok(Self {
            fields: [grid, G::blank(width, height)?],
            active: 0,
            iteration: 0,
        })
    }

    pub fn into_shared(self) -> SharedGame<G> {
        Arc::new(Mutex::new(self))
    }

    /// The latest committed generation.
    pub fn current(&self) -> &G {
        &self.fields[self.active]
    }

    /// Edits one cell of the latest committed generation.
    ///
    /// Only single cells can be changed, so both buffers keep the same size.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the field.
    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.fields[self.active].set(x, y, state);
    }

    pub fn checked_set(&mut self, x: usize, y: usize, state: bool) -> Result<(), LifeError> {
        self.fields[self.active].checked_set(x, y, state)
    }

    pub fn size(&self) -> (usize, usize) {
        self.current().size()
    }

    /// Number of transitions done so far.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Changes the size of both buffers.
    ///
    /// Overlapping cells are kept, new area is dead. Nothing happens if the
    /// dimensions already match. The iteration counter is untouched.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), LifeError> {
        LifeError::check_dimensions(width, height)?;
        let (old_width, old_height) = self.size();
        if (old_width, old_height) == (width, height) {
            return Ok(());
        }

        let mut resized = [G::blank(width, height)?, G::blank(width, height)?];
        for (old, new) in self.fields.iter().zip(resized.iter_mut()) {
            old.copy_into(new);
        }
        self.fields = resized;
        debug!(old_width, old_height, width, height, "resized game of life buffers");
        Ok(())
    }

    /// Computes the next generation and makes it current.
    pub fn transition(&mut self) {
        let (width, height) = self.size();
        let [a, b] = &mut self.fields;
        let (curr, next) = if self.active == 0 { (&*a, b) } else { (&*b, a) };
        for y in 0..height {
            for x in 0..width {
                let state = next_state(curr.get(x, y), curr.neighbor_count(x, y));
                next.set(x, y, state);
            }
        }
        self.active = 1 - self.active;
        self.iteration += 1;
    }
}

impl<G: Grid> Default for GameOfLife<G> {
    fn default() -> Self {
        let side = Self::FIELD_SIZE_DEFAULT;
        match Self::new(side, side) {
            Ok(game) => game,
            Err(e) => unreachable!("default field size is positive: {e}"),
        }
    }
}

/// Conway's rule: a live cell survives with 2 or 3 neighbours,
/// a dead cell is born with exactly 3.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}
