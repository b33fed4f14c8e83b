use crate::{Grid, LifeError};

pub type Chunk = u32;

/// Grid packing 32 cells into each chunk along the x axis.
///
/// Cell `(x, y)` is bit `x % 32` of chunk `x / 32` in row `y`.
/// Bits past `width` in the last chunk of a row always stay zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedGrid {
    chunks: Vec<Chunk>,
    width: usize,
    height: usize,
    width_chunks: usize,
}

impl PackedGrid {
    const CELLS_IN_CHUNK: usize = Chunk::BITS as usize;

    /// Chunk index and bit mask of an in-bounds cell.
    fn locate(&self, x: usize, y: usize) -> (usize, Chunk) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside of the {}x{} grid",
            self.width,
            self.height
        );
        let pos = x / Self::CELLS_IN_CHUNK + y * self.width_chunks;
        (pos, 1 << (x % Self::CELLS_IN_CHUNK))
    }

    fn bit(&self, x: usize, y: usize) -> u8 {
        let pos = x / Self::CELLS_IN_CHUNK + y * self.width_chunks;
        ((self.chunks[pos] >> (x % Self::CELLS_IN_CHUNK)) & 1) as u8
    }

    /// Raw chunks, row by row.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }
}

impl Grid for PackedGrid {
    fn blank(width: usize, height: usize) -> Result<Self, LifeError> {
        // chunk count never exceeds the checked cell count
        LifeError::check_dimensions(width, height)?;
        let width_chunks = width.div_ceil(Self::CELLS_IN_CHUNK);
        Ok(Self {
            chunks: vec![0; width_chunks * height],
            width,
            height,
            width_chunks,
        })
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn get(&self, x: usize, y: usize) -> bool {
        let (pos, mask) = self.locate(x, y);
        self.chunks[pos] & mask != 0
    }

    fn set(&mut self, x: usize, y: usize, state: bool) {
        let (pos, mask) = self.locate(x, y);
        if state {
            self.chunks[pos] |= mask;
        } else {
            self.chunks[pos] &= !mask;
        }
    }

    fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let (pos, mask) = self.locate(x, y);
        let x1 = x.saturating_sub(1);
        let x2 = (x + 1).min(self.width - 1);
        let y1 = y.saturating_sub(1);
        let y2 = (y + 1).min(self.height - 1);
        let mut neibs = 0;
        for yi in y1..=y2 {
            for xi in x1..=x2 {
                neibs += self.bit(xi, yi);
            }
        }
        neibs - (self.chunks[pos] & mask != 0) as u8
    }

    fn population(&self) -> usize {
        self.chunks.iter().map(|c| c.count_ones() as usize).sum()
    }
}

impl std::fmt::Display for PackedGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dump())
    }
}
