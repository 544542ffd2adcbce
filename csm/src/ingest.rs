use std::io::Write;

use crate::error::CsmError;
use crate::types::{CharacterSet, Pixel, PixelRow, MAX_ROWS, ROW_WIDTH};

/// A line starting with this character is skipped.
pub const COMMENT_MARKER: char = '#';

/// Clean one line of a pixel map into a row.
///
/// Characters outside `.01234` are dropped, the rest is truncated to four
/// pixels and right-padded with `.`. Returns `None` when nothing usable
/// remains.
pub fn clean_line(line: &str) -> Option<PixelRow> {
    let mut pixels = [Pixel::Blank; ROW_WIDTH];
    let mut count = 0;
    for p in line.chars().filter_map(Pixel::from_symbol) {
        if count == ROW_WIDTH {
            break;
        }
        pixels[count] = p;
        count += 1;
    }
    (count > 0).then(|| PixelRow::new(pixels))
}

/// Parse pixel map lines into a character set, reporting skipped lines to `diag`.
pub fn parse_lines<I, S, D>(lines: I, diag: &mut D) -> Result<CharacterSet, CsmError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    D: Write + ?Sized,
{
    let mut rows = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if line.starts_with(COMMENT_MARKER) {
            continue;
        }

        match clean_line(line) {
            Some(_) if rows.len() == MAX_ROWS => {
                writeln!(diag, "csm: Input exceeds {MAX_ROWS} rows; ignoring the rest.")?;
                break;
            }
            Some(row) => rows.push(row),
            None => writeln!(
                diag,
                "csm: No usable data read at line {}. Skipping...",
                rows.len()
            )?,
        }
    }
    CharacterSet::new(rows)
}

/// [`parse_lines`] over a whole text.
pub fn parse_str<D: Write + ?Sized>(text: &str, diag: &mut D) -> Result<CharacterSet, CsmError> {
    parse_lines(text.lines(), diag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_quiet(text: &str) -> CharacterSet {
        parse_str(text, &mut std::io::sink()).unwrap()
    }

    #[test]
    fn strips_invalid_characters() {
        let row = clean_line(" 2 . 1 4 ").unwrap();
        assert_eq!(row.to_string(), "2.14");
        let row = clean_line("a1b2c").unwrap();
        assert_eq!(row.to_string(), "12..");
    }

    #[test]
    fn pads_short_and_truncates_long() {
        assert_eq!(clean_line("1 3").unwrap().to_string(), "13..");
        assert_eq!(clean_line("1234321").unwrap().to_string(), "1234");
    }

    #[test]
    fn nothing_usable() {
        assert_eq!(clean_line(""), None);
        assert_eq!(clean_line("   xyz 567"), None);
    }

    #[test]
    fn comment_only_at_line_start() {
        let set = parse_quiet("# 1234\n 1#2\n");
        assert_eq!(set.len(), 1);
        assert_eq!(set.row(0).to_string(), "12..");
    }

    #[test]
    fn skipped_lines_are_reported() {
        let mut diag = Vec::new();
        let set = parse_str("1111\n\n2222\n  \n", &mut diag).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(
            String::from_utf8(diag).unwrap(),
            "csm: No usable data read at line 1. Skipping...\n\
             csm: No usable data read at line 2. Skipping...\n"
        );
    }

    #[test]
    fn comments_are_not_reported() {
        let mut diag = Vec::new();
        parse_str("# header\n1111\n", &mut diag).unwrap();
        assert!(diag.is_empty());
    }

    #[test]
    fn stops_at_max_rows() {
        let text = "1111\n".repeat(MAX_ROWS + 3);
        let mut diag = Vec::new();
        let set = parse_str(&text, &mut diag).unwrap();
        assert_eq!(set.len(), MAX_ROWS);
        assert_eq!(String::from_utf8(diag).unwrap().lines().count(), 1);
    }

    #[test]
    fn worked_example_header() {
        let text = "\
# worked example
 2 1 0 3
 1 0 3 2
 0 3 2 1
 3 2 1 0
 2 . 1 4
 . 1 3 2
 1 3
 . . 0 0
";
        let set = parse_quiet(text);
        let rows: Vec<String> = set.rows().iter().map(|r| r.to_string()).collect();
        assert_eq!(
            rows,
            vec!["2103", "1032", "0321", "3210", "2.14", ".132", "13..", "..00"]
        );
    }
}
