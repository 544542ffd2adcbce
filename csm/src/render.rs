use std::io::Write;

use smallvec::SmallVec;

use crate::encode::{encode_bit_string, encode_byte, ordered_pixels};
use crate::error::CsmError;
use crate::orientation::{Orientation, PixelOrder};
use crate::section::Block;
use crate::types::{CharacterSet, PixelRow, BLOCK_HEIGHT, DATA_LINE_BASE};

/// Caption above the annotated rows of each block.
pub const LISTING_CAPTION: &str = "; 0 1 2 3   BITS";
/// Assembler byte directive, followed by a binary literal.
pub const BYTE_DIRECTIVE: &str = ".by %";

/// One row of a block after encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EncodedRow {
    /// Row index in the character set.
    pub row: usize,
    /// Pixel symbols in packing order.
    pub symbols: String,
    pub bits: String,
    pub byte: u8,
}

/// A block encoded under one orientation, rows in visiting order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EncodedBlock {
    pub index: usize,
    pub start: usize,
    /// BASIC line number of the DATA statement.
    pub line_number: usize,
    pub rows: SmallVec<[EncodedRow; BLOCK_HEIGHT]>,
}

impl EncodedBlock {
    pub fn bytes(&self) -> SmallVec<[u8; BLOCK_HEIGHT]> {
        self.rows.iter().map(|r| r.byte).collect()
    }

    /// Assembler label for this character.
    pub fn label(&self) -> String {
        format!("CSET_{}", self.index)
    }

    /// The DATA statement: `1000 DATA 147,78,...` with no trailing comma.
    pub fn data_line(&self) -> String {
        let values: Vec<String> = self.rows.iter().map(|r| r.byte.to_string()).collect();
        format!("{} DATA {}", self.line_number, values.join(","))
    }
}

/// Encode every row of `block` under `pixel_order`.
///
/// The DATA line number is taken from the first row visited, so a
/// bottom-to-top block 0 is numbered 1007.
pub fn encode_block(block: Block, set: &CharacterSet, pixel_order: PixelOrder) -> EncodedBlock {
    let rows = block
        .row_indices()
        .map(|i| {
            let row = set.row(i);
            EncodedRow {
                row: i,
                symbols: ordered_pixels(row, pixel_order)
                    .iter()
                    .map(|p| p.symbol())
                    .collect(),
                bits: encode_bit_string(row, pixel_order),
                byte: encode_byte(row, pixel_order),
            }
        })
        .collect();

    EncodedBlock {
        index: block.index,
        start: block.start,
        line_number: DATA_LINE_BASE + block.first_visited(),
        rows,
    }
}

/// One annotated comment line: `; 2 1 . 3   10 01 00 11`.
pub fn annotated_line(row: &PixelRow, pixel_order: PixelOrder) -> String {
    let symbols: Vec<String> = ordered_pixels(row, pixel_order)
        .iter()
        .map(|p| p.symbol().to_string())
        .collect();
    format!(
        "; {}   {}",
        symbols.join(" "),
        spaced_bits(&encode_bit_string(row, pixel_order))
    )
}

/// Split an 8-bit string into space-separated pixel pairs.
fn spaced_bits(bits: &str) -> String {
    let pairs: Vec<&str> = (0..bits.len())
        .step_by(2)
        .map(|i| &bits[i..i + 2])
        .collect();
    pairs.join(" ")
}

/// Write the annotated listing and the DATA line for one block.
pub fn write_block<W: Write + ?Sized>(
    encoded: &EncodedBlock,
    set: &CharacterSet,
    pixel_order: PixelOrder,
    out: &mut W,
) -> Result<(), CsmError> {
    writeln!(out)?;
    writeln!(out, "{LISTING_CAPTION}")?;
    for r in &encoded.rows {
        writeln!(out, "{}", annotated_line(set.row(r.row), pixel_order))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", encoded.label())?;
    for r in &encoded.rows {
        writeln!(out, "\t{BYTE_DIRECTIVE}{}", r.bits)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", encoded.data_line())?;
    Ok(())
}

/// Encode `block` under `orientation` and write both renderings to `out`.
pub fn render<W: Write + ?Sized>(
    block: Block,
    set: &CharacterSet,
    orientation: Orientation,
    out: &mut W,
) -> Result<EncodedBlock, CsmError> {
    let block = Block {
        row_order: orientation.row_order,
        ..block
    };
    let encoded = encode_block(block, set, orientation.pixel_order);
    write_block(&encoded, set, orientation.pixel_order, out)?;
    Ok(encoded)
}
