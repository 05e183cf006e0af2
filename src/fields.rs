//! Best-effort extraction of fixed-column fields from a raw line.
//!
//! None of these functions fail: missing or garbled content degrades to `0`
//! or an empty string.

use encoding_rs::WINDOWS_1252;
use std::ops::Range;

const MAX_HEX_DIGITS: usize = 8;
const MAX_DECIMAL_DIGITS: usize = 10;

/// Reads up to 8 hex digits starting at `offset`, stopping at the first
/// non-hex character.
pub fn parse_hex(line: &[u8], offset: usize) -> u32 {
    line.iter()
        .skip(offset)
        .take(MAX_HEX_DIGITS)
        .map_while(|&b| (b as char).to_digit(16))
        .fold(0, |value, digit| (value << 4) | digit)
}

/// Reads up to 10 decimal digits starting at `offset`, stopping at the first
/// non-digit.
pub fn parse_decimal(line: &[u8], offset: usize) -> u64 {
    line.iter()
        .skip(offset)
        .take(MAX_DECIMAL_DIGITS)
        .map_while(|&b| (b as char).to_digit(10))
        .fold(0, |value, digit| value * 10 + u64::from(digit))
}

/// Returns the bytes in `range` as a string with trailing whitespace removed.
///
/// Leading whitespace is kept. The range is clamped to the line, so a short
/// line yields whatever part of the field it has.
pub fn pickup(line: &[u8], range: Range<usize>) -> String {
    let end = range.end.min(line.len());
    let start = range.start.min(end);
    let field = &line[start..end];

    let len = field
        .iter()
        .rposition(|&b| !is_space(b))
        .map_or(0, |last| last + 1);

    let (text, _) = WINDOWS_1252.decode_without_bom_handling(&field[..len]);
    text.into_owned()
}

// same set as C `isspace`, which also covers vertical tab
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_digits() {
        assert_eq!(parse_hex(b"A1B2C3", 0), 0xA1B2C3);
        assert_eq!(parse_hex(b"a1b2c3", 0), 0xA1B2C3);
        assert_eq!(parse_hex(b"FFFFFFFF", 0), u32::MAX);
    }

    #[test]
    fn hex_stops_at_first_non_hex_character() {
        assert_eq!(parse_hex(b"1A2B,junk", 0), 0x1A2B);
        assert_eq!(parse_hex(b"12 34", 0), 0x12);
    }

    #[test]
    fn hex_reads_at_most_eight_digits() {
        assert_eq!(parse_hex(b"123456789", 0), 0x12345678);
    }

    #[test]
    fn hex_respects_offset() {
        assert_eq!(parse_hex(b"xxxA1B2C3 ", 3), 0xA1B2C3);
    }

    #[test]
    fn hex_without_digits_is_zero() {
        assert_eq!(parse_hex(b"", 0), 0);
        assert_eq!(parse_hex(b"zzz", 0), 0);
        assert_eq!(parse_hex(b"ABC", 10), 0);
    }

    #[test]
    fn decimal_parses_digits() {
        assert_eq!(parse_decimal(b"1200119", 0), 1200119);
        assert_eq!(parse_decimal(b"4,", 0), 4);
        assert_eq!(parse_decimal(b"  42", 2), 42);
    }

    #[test]
    fn decimal_reads_at_most_ten_digits() {
        assert_eq!(parse_decimal(b"12345678901", 0), 1234567890);
        assert_eq!(parse_decimal(b"9999999999", 0), 9_999_999_999);
    }

    #[test]
    fn decimal_without_digits_is_zero() {
        assert_eq!(parse_decimal(b"", 0), 0);
        assert_eq!(parse_decimal(b" 1", 0), 0);
        assert_eq!(parse_decimal(b"123", 3), 0);
        assert_eq!(parse_decimal(b"123", 100), 0);
    }

    #[test]
    fn pickup_trims_trailing_whitespace_only() {
        assert_eq!(pickup(b"  ABC   ", 0..8), "  ABC");
        assert_eq!(pickup(b"JOHN DOE\t\r\n", 0..11), "JOHN DOE");
    }

    #[test]
    fn pickup_of_whitespace_is_empty() {
        assert_eq!(pickup(b"    ", 0..4), "");
        assert_eq!(pickup(b"", 0..4), "");
    }

    #[test]
    fn pickup_uses_the_given_span() {
        assert_eq!(pickup(b"N12345CESSNA", 0..6), "N12345");
        assert_eq!(pickup(b"N12345CESSNA", 6..12), "CESSNA");
    }

    #[test]
    fn pickup_clamps_to_line_length() {
        assert_eq!(pickup(b"ABC", 1..10), "BC");
        assert_eq!(pickup(b"ABC", 5..10), "");
    }

    #[test]
    fn pickup_decodes_latin_characters() {
        assert_eq!(pickup(b"CAF\xc9 ", 0..5), "CAFÉ");
    }
}
