//! Row encoder: packs four 2-bit pixels into one byte.
//!
//! The pixel visited first occupies the two most significant bits. With
//! [`PixelOrder::RightToLeft`] the row is visited from column 3 down to 0, so
//! the packed byte is that of the horizontally mirrored row.

use crate::orientation::PixelOrder;
use crate::types::{Pixel, PixelRow, ROW_WIDTH};

/// The row's pixels in traversal order.
pub fn ordered_pixels(row: &PixelRow, order: PixelOrder) -> [Pixel; ROW_WIDTH] {
    std::array::from_fn(|step| row.pixel(order.column(step)))
}

/// Shift of the bit pair for traversal step `step`.
fn pair_shift(step: usize) -> u32 {
    (2 * (ROW_WIDTH - 1 - step)) as u32
}

/// Pack a row into one byte.
pub fn encode_byte(row: &PixelRow, order: PixelOrder) -> u8 {
    ordered_pixels(row, order)
        .iter()
        .enumerate()
        .fold(0u8, |byte, (step, p)| byte | (p.bits() << pair_shift(step)))
}

/// The packed byte as eight `0`/`1` characters, most significant bit first.
pub fn encode_bit_string(row: &PixelRow, order: PixelOrder) -> String {
    format!("{:08b}", encode_byte(row, order))
}

/// The packed byte as a decimal number, as written in DATA statements.
pub fn encode_decimal(row: &PixelRow, order: PixelOrder) -> String {
    encode_byte(row, order).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(s: &str) -> PixelRow {
        PixelRow::from_symbols(s).unwrap()
    }

    fn reversed(r: &PixelRow) -> PixelRow {
        let mut pixels = *r.pixels();
        pixels.reverse();
        PixelRow::new(pixels)
    }

    #[test]
    fn packing_table() {
        assert_eq!(encode_byte(&row("...."), PixelOrder::LeftToRight), 0);
        assert_eq!(encode_byte(&row("0000"), PixelOrder::LeftToRight), 0);
        assert_eq!(encode_byte(&row("1111"), PixelOrder::LeftToRight), 0b01_01_01_01);
        assert_eq!(encode_byte(&row("2222"), PixelOrder::LeftToRight), 0b10_10_10_10);
        assert_eq!(encode_byte(&row("3333"), PixelOrder::LeftToRight), 0xFF);
        assert_eq!(encode_byte(&row("4444"), PixelOrder::LeftToRight), 0xFF);
    }

    #[test]
    fn position_zero_is_most_significant() {
        for (i, shift) in [(0, 6), (1, 4), (2, 2), (3, 0)] {
            for (c, bits) in [('1', 1u8), ('2', 2), ('3', 3), ('4', 3)] {
                let mut symbols = ['.'; 4];
                symbols[i] = c;
                let r = row(&symbols.iter().collect::<String>());
                assert_eq!(
                    encode_byte(&r, PixelOrder::LeftToRight),
                    bits << shift,
                    "symbol {c} at column {i}"
                );
            }
        }
    }

    #[test]
    fn worked_example_row() {
        let r = row("2103");
        assert_eq!(encode_byte(&r, PixelOrder::LeftToRight), 147);
        assert_eq!(encode_bit_string(&r, PixelOrder::LeftToRight), "10010011");
        assert_eq!(encode_decimal(&r, PixelOrder::LeftToRight), "147");
    }

    #[test]
    fn right_to_left_equals_reversed_row() {
        for s in ["2103", "1032", "0321", "3210", "2.14", ".132", "13..", "..00", "4.21"] {
            let r = row(s);
            assert_eq!(
                encode_byte(&r, PixelOrder::RightToLeft),
                encode_byte(&reversed(&r), PixelOrder::LeftToRight),
                "row {s}"
            );
        }
        assert_eq!(encode_byte(&row("2103"), PixelOrder::RightToLeft), 198);
    }

    #[test]
    fn bit_string_is_always_eight_chars() {
        let s = encode_bit_string(&row("..01"), PixelOrder::LeftToRight);
        assert_eq!(s, "00000001");
        let s = encode_bit_string(&row("..01"), PixelOrder::RightToLeft);
        assert_eq!(s, "01000000");
    }

    #[test]
    fn ordered_pixels_follow_order() {
        let r = row("2.14");
        assert_eq!(
            ordered_pixels(&r, PixelOrder::RightToLeft),
            [Pixel::Four, Pixel::One, Pixel::Blank, Pixel::Two]
        );
        assert_eq!(ordered_pixels(&r, PixelOrder::LeftToRight), *r.pixels());
    }
}
