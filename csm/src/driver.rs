//! Orientation driver: emits a character set once per selected orientation.
//!
//! Passes run in canonical order (identity, vertical, horizontal, both).
//! Each pass prints a banner, then every block in index order: conflict
//! check to the diagnostic sink, listing and DATA line to the output sink.

use std::io::Write;

use crate::conflict::check_conflict;
use crate::error::CsmError;
use crate::orientation::{Orientation, OrientationSet};
use crate::render::{encode_block, render, EncodedBlock};
use crate::section::sections_of;
use crate::types::CharacterSet;

/// Counts from one [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passes: usize,
    pub blocks: usize,
    pub conflicts: usize,
}

/// All blocks of one orientation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EncodedPass {
    pub orientation: Orientation,
    pub blocks: Vec<EncodedBlock>,
}

/// Render `set` under each orientation in `orientations`.
///
/// Returns [`CsmError::EmptyInput`] without writing anything when the set has
/// no rows; callers should treat that as "nothing to do".
pub fn run<W, D>(
    set: &CharacterSet,
    orientations: OrientationSet,
    out: &mut W,
    diag: &mut D,
) -> Result<RunSummary, CsmError>
where
    W: Write + ?Sized,
    D: Write + ?Sized,
{
    if set.is_empty() {
        return Err(CsmError::EmptyInput);
    }

    let mut summary = RunSummary::default();
    for orientation in orientations.iter() {
        writeln!(out)?;
        writeln!(out, "{}", orientation.banner())?;

        for block in sections_of(set.len(), orientation.row_order) {
            if check_conflict(&block, set, diag)? {
                summary.conflicts += 1;
            }
            render(block, set, orientation, out)?;
            summary.blocks += 1;
        }
        summary.passes += 1;
    }
    Ok(summary)
}

/// Encode `set` under each orientation without rendering text.
///
/// Conflicts are still reported to `diag`.
pub fn encode_passes<D: Write + ?Sized>(
    set: &CharacterSet,
    orientations: OrientationSet,
    diag: &mut D,
) -> Result<Vec<EncodedPass>, CsmError> {
    if set.is_empty() {
        return Err(CsmError::EmptyInput);
    }

    orientations
        .iter()
        .map(|orientation| -> Result<EncodedPass, CsmError> {
            let mut blocks = Vec::with_capacity(set.block_count());
            for block in sections_of(set.len(), orientation.row_order) {
                check_conflict(&block, set, diag)?;
                blocks.push(encode_block(block, set, orientation.pixel_order));
            }
            Ok(EncodedPass {
                orientation,
                blocks,
            })
        })
        .collect()
}
