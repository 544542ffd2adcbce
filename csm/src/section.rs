use std::ops::Range;

use crate::orientation::RowOrder;
use crate::types::{CharacterSet, PixelRow, BLOCK_HEIGHT};

/// A run of up to [`BLOCK_HEIGHT`] rows forming one character.
///
/// Blocks always partition the set by row index (rows 0-7, 8-15, ...);
/// `row_order` only decides the order rows are visited inside the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Character number, `start / BLOCK_HEIGHT`.
    pub index: usize,
    /// Lowest row index in the block.
    pub start: usize,
    /// Number of rows; only the last block may be short.
    pub len: usize,
    pub row_order: RowOrder,
}

impl Block {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Row indices in visiting order.
    pub fn row_indices(self) -> impl Iterator<Item = usize> {
        (0..self.len).map(move |step| self.start + self.row_order.offset(step, self.len))
    }

    /// Index of the row visited first.
    pub fn first_visited(&self) -> usize {
        self.start + self.row_order.offset(0, self.len)
    }

    /// The block's rows from `set`, in visiting order.
    pub fn rows<'a>(self, set: &'a CharacterSet) -> impl Iterator<Item = &'a PixelRow> + 'a {
        self.row_indices().map(move |i| set.row(i))
    }
}

/// Iterator over the blocks of a character set, first block first.
#[derive(Debug, Clone)]
pub struct Sections {
    total_rows: usize,
    next_start: usize,
    row_order: RowOrder,
}

impl Iterator for Sections {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.next_start >= self.total_rows {
            return None;
        }
        let start = self.next_start;
        let len = BLOCK_HEIGHT.min(self.total_rows - start);
        self.next_start += len;
        Some(Block {
            index: start / BLOCK_HEIGHT,
            start,
            len,
            row_order: self.row_order,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.total_rows.saturating_sub(self.next_start).div_ceil(BLOCK_HEIGHT);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Sections {}

/// Carve `total_rows` rows into blocks.
pub fn sections_of(total_rows: usize, row_order: RowOrder) -> Sections {
    Sections {
        total_rows,
        next_start: 0,
        row_order,
    }
}
