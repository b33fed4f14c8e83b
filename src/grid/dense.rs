use crate::{Grid, LifeError};

/// Grid storing one `bool` per cell, row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGrid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl DenseGrid {
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside of the {}x{} grid",
            self.width,
            self.height
        );
        x + y * self.width
    }
}

impl Grid for DenseGrid {
    fn blank(width: usize, height: usize) -> Result<Self, LifeError> {
        let cells = LifeError::check_dimensions(width, height)?;
        Ok(Self {
            cells: vec![false; cells],
            width,
            height,
        })
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    fn set(&mut self, x: usize, y: usize, state: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let center = self.index(x, y);
        let x1 = x.saturating_sub(1);
        let x2 = (x + 1).min(self.width - 1);
        let y1 = y.saturating_sub(1);
        let y2 = (y + 1).min(self.height - 1);
        let mut neibs = 0;
        for yi in y1..=y2 {
            let row = &self.cells[yi * self.width..(yi + 1) * self.width];
            neibs += row[x1..=x2].iter().filter(|&&c| c).count() as u8;
        }
        // the window includes the cell itself
        neibs - self.cells[center] as u8
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl std::fmt::Display for DenseGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dump())
    }
}
