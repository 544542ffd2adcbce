use std::fmt;

use crate::error::CsmError;

/// Pixels per glyph row.
pub const ROW_WIDTH: usize = 4;
/// Rows per character block.
pub const BLOCK_HEIGHT: usize = 8;
/// Rows in a full character set (128 characters).
pub const MAX_ROWS: usize = 1024;
/// Line number of the DATA statement for row 0.
pub const DATA_LINE_BASE: usize = 1000;

/// One pixel of a glyph row, as written in the pixel map.
///
/// `Blank` (`.`) and `Zero` (`0`) are the same background color; they are
/// kept apart so listings echo the map as it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    /// `.` background.
    Blank,
    /// `0` background.
    Zero,
    /// `1` COLPF0.
    One,
    /// `2` COLPF1.
    Two,
    /// `3` COLPF2.
    Three,
    /// `4` COLPF3, the inverse-video form of COLPF2.
    Four,
}

impl Pixel {
    /// Parse a pixel symbol. Returns `None` for anything outside `.01234`.
    pub fn from_symbol(c: char) -> Option<Pixel> {
        match c {
            '.' => Some(Pixel::Blank),
            '0' => Some(Pixel::Zero),
            '1' => Some(Pixel::One),
            '2' => Some(Pixel::Two),
            '3' => Some(Pixel::Three),
            '4' => Some(Pixel::Four),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Pixel::Blank => '.',
            Pixel::Zero => '0',
            Pixel::One => '1',
            Pixel::Two => '2',
            Pixel::Three => '3',
            Pixel::Four => '4',
        }
    }

    /// The 2-bit color code. `3` and `4` share `11`.
    pub fn bits(self) -> u8 {
        match self {
            Pixel::Blank | Pixel::Zero => 0b00,
            Pixel::One => 0b01,
            Pixel::Two => 0b10,
            Pixel::Three | Pixel::Four => 0b11,
        }
    }
}

/// One scanline of a glyph: exactly four pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRow([Pixel; ROW_WIDTH]);

impl PixelRow {
    pub fn new(pixels: [Pixel; ROW_WIDTH]) -> PixelRow {
        PixelRow(pixels)
    }

    /// Parse a row from exactly four symbols, e.g. `"2.14"`.
    pub fn from_symbols(symbols: &str) -> Result<PixelRow, CsmError> {
        let len = symbols.chars().count();
        if len != ROW_WIDTH {
            return Err(CsmError::InvalidRow(len));
        }

        let mut pixels = [Pixel::Blank; ROW_WIDTH];
        for (i, c) in symbols.chars().enumerate() {
            pixels[i] = Pixel::from_symbol(c).ok_or(CsmError::InvalidSymbol(c, i))?;
        }
        Ok(PixelRow(pixels))
    }

    pub fn pixels(&self) -> &[Pixel; ROW_WIDTH] {
        &self.0
    }

    /// Get the pixel at column `x` (0 = leftmost).
    pub fn pixel(&self, x: usize) -> Pixel {
        self.0[x]
    }

    pub fn contains(&self, pixel: Pixel) -> bool {
        self.0.contains(&pixel)
    }
}

impl fmt::Display for PixelRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.0 {
            write!(f, "{}", p.symbol())?;
        }
        Ok(())
    }
}

/// The full ordered list of glyph rows, at most [`MAX_ROWS`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    rows: Vec<PixelRow>,
}

impl CharacterSet {
    pub fn new(rows: Vec<PixelRow>) -> Result<CharacterSet, CsmError> {
        if rows.len() > MAX_ROWS {
            return Err(CsmError::TooManyRows(rows.len()));
        }
        Ok(CharacterSet { rows })
    }

    /// Build a set from already-clean four-symbol rows.
    pub fn from_symbol_rows<S: AsRef<str>>(rows: &[S]) -> Result<CharacterSet, CsmError> {
        let rows = rows
            .iter()
            .map(|s| PixelRow::from_symbols(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        CharacterSet::new(rows)
    }

    pub fn rows(&self) -> &[PixelRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &PixelRow {
        &self.rows[index]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of character blocks, counting a trailing partial block.
    pub fn block_count(&self) -> usize {
        self.rows.len().div_ceil(BLOCK_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_table_round_trips() {
        for c in ".01234".chars() {
            assert_eq!(Pixel::from_symbol(c).unwrap().symbol(), c);
        }
        assert_eq!(Pixel::from_symbol('5'), None);
        assert_eq!(Pixel::from_symbol(' '), None);
    }

    #[test]
    fn blank_and_zero_share_bits() {
        assert_eq!(Pixel::Blank.bits(), Pixel::Zero.bits());
        assert_eq!(Pixel::Three.bits(), Pixel::Four.bits());
        assert_eq!(Pixel::One.bits(), 0b01);
        assert_eq!(Pixel::Two.bits(), 0b10);
    }

    #[test]
    fn parse_row() {
        let row = PixelRow::from_symbols("2.14").unwrap();
        assert_eq!(row.pixel(0), Pixel::Two);
        assert_eq!(row.pixel(1), Pixel::Blank);
        assert_eq!(row.pixel(3), Pixel::Four);
        assert_eq!(row.to_string(), "2.14");
    }

    #[test]
    fn parse_row_wrong_length() {
        assert!(matches!(
            PixelRow::from_symbols("213"),
            Err(CsmError::InvalidRow(3))
        ));
        assert!(matches!(
            PixelRow::from_symbols("21034"),
            Err(CsmError::InvalidRow(5))
        ));
    }

    #[test]
    fn parse_row_invalid_symbol() {
        assert!(matches!(
            PixelRow::from_symbols("21x3"),
            Err(CsmError::InvalidSymbol('x', 2))
        ));
    }

    #[test]
    fn character_set_limits() {
        let rows = vec![PixelRow::new([Pixel::Zero; ROW_WIDTH]); MAX_ROWS];
        assert_eq!(CharacterSet::new(rows.clone()).unwrap().len(), MAX_ROWS);

        let mut too_many = rows;
        too_many.push(PixelRow::new([Pixel::One; ROW_WIDTH]));
        assert!(matches!(
            CharacterSet::new(too_many),
            Err(CsmError::TooManyRows(1025))
        ));
    }

    #[test]
    fn block_count_includes_partial_block() {
        let set = CharacterSet::from_symbol_rows(&["1111"; 10]).unwrap();
        assert_eq!(set.block_count(), 2);
        let set = CharacterSet::from_symbol_rows(&["1111"; 16]).unwrap();
        assert_eq!(set.block_count(), 2);
        assert_eq!(CharacterSet::default().block_count(), 0);
    }
}
