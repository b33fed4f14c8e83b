use super::LifeError;

/// One generation of a bounded rectangular life world.
///
/// Coordinates are `(x, y)` with `x` in `0..width` and `y` in `0..height`.
/// Cells outside the grid are dead and never wrap around.
pub trait Grid {
    /// Create a grid of dead cells.
    ///
    /// Fails with [`LifeError::InvalidDimension`] if `width` or `height` is zero.
    fn blank(width: usize, height: usize) -> Result<Self, LifeError>
    where
        Self: Sized;

    /// Create a grid with random cells.
    ///
    /// `fill_rate` - probability of cell being alive
    /// `seed` - random seed (if `None`, then random seed is generated)
    ///
    /// Cells are drawn in row-major order, so grids of different representations
    /// built from the same seed hold the same pattern.
    fn random(
        width: usize,
        height: usize,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<Self, LifeError>
    where
        Self: Sized,
    {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut result = Self::blank(width, height)?;
        result.fill_from_generator(&mut || rng.gen_bool(fill_rate));
        Ok(result)
    }

    /// `(width, height)` of the grid, fixed at construction.
    fn size(&self) -> (usize, usize);

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    fn get(&self, x: usize, y: usize) -> bool;

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    fn set(&mut self, x: usize, y: usize, state: bool);

    /// Number of alive cells among the 8 neighbours of `(x, y)`, in `0..=8`.
    ///
    /// Neighbours outside the grid count as dead.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    fn neighbor_count(&self, x: usize, y: usize) -> u8;

    fn is_legal_coordinates(&self, x: usize, y: usize) -> bool {
        let (w, h) = self.size();
        x < w && y < h
    }

    fn checked_get(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        self.check_bounds(x, y)?;
        Ok(self.get(x, y))
    }

    fn checked_set(&mut self, x: usize, y: usize, state: bool) -> Result<(), LifeError> {
        self.check_bounds(x, y)?;
        self.set(x, y, state);
        Ok(())
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), LifeError> {
        if self.is_legal_coordinates(x, y) {
            Ok(())
        } else {
            let (width, height) = self.size();
            Err(LifeError::OutOfBounds {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Sets every cell from `generator`, calling it exactly once per cell.
    ///
    /// Iteration order is left to right and row by row.
    fn fill_from_generator(&mut self, generator: &mut dyn FnMut() -> bool) {
        let (w, h) = self.size();
        for y in 0..h {
            for x in 0..w {
                self.set(x, y, generator());
            }
        }
    }

    /// Copies every cell that also exists in `target`.
    ///
    /// Cells of `target` outside this grid keep their previous state.
    fn copy_into(&self, target: &mut dyn Grid) {
        let (w, h) = self.size();
        for y in 0..h {
            for x in 0..w {
                if target.is_legal_coordinates(x, y) {
                    target.set(x, y, self.get(x, y));
                }
            }
        }
    }

    /// Total number of alive cells in the grid.
    fn population(&self) -> usize {
        let (w, h) = self.size();
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| self.get(x, y))
            .count()
    }

    /// Newline-terminated rows of `'1'` (alive) and `'0'` (dead).
    fn dump(&self) -> String {
        let (w, h) = self.size();
        let mut result = String::with_capacity((w + 1) * h);
        for y in 0..h {
            for x in 0..w {
                result.push(if self.get(x, y) { '1' } else { '0' });
            }
            result.push('\n');
        }
        result
    }
}
