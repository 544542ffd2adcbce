use std::fmt;
use std::io::Write;

use crate::error::CsmError;
use crate::section::Block;
use crate::types::{CharacterSet, Pixel};

/// Colors `3` and `4` both appear in one character.
///
/// Both encode as `11`, so the hardware can only show one of them per
/// character; the glyph is still emitted unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub start: usize,
    pub block_index: usize,
    /// Rows containing at least one `3`.
    pub rows_with_three: usize,
    /// Rows containing at least one `4`.
    pub rows_with_four: usize,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block {} (character {}) has '3' and '4'.",
            self.start, self.block_index
        )
    }
}

/// Scan a block for rows holding `3` and rows holding `4`.
pub fn find_conflict(block: &Block, set: &CharacterSet) -> Option<Conflict> {
    let (threes, fours) = block.rows(set).fold((0, 0), |(t, f), row| {
        (
            t + row.contains(Pixel::Three) as usize,
            f + row.contains(Pixel::Four) as usize,
        )
    });

    (threes > 0 && fours > 0).then_some(Conflict {
        start: block.start,
        block_index: block.index,
        rows_with_three: threes,
        rows_with_four: fours,
    })
}

/// Check a block and report a conflict to `diag`. Returns whether one was found.
pub fn check_conflict<D: Write + ?Sized>(
    block: &Block,
    set: &CharacterSet,
    diag: &mut D,
) -> Result<bool, CsmError> {
    match find_conflict(block, set) {
        Some(conflict) => {
            writeln!(diag, "csm: Warning: {conflict}")?;
            Ok(true)
        }
        None => Ok(false),
    }
}
