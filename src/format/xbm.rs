//! XBM (X BitMap) text extraction.
//!
//! XBM files are C source fragments: two `#define` constants carry the size
//! and a `<name>_bits[]` array carries the pixels, one row padded to whole
//! bytes, least-significant bit first. The declarations are located with
//! permissive patterns rather than a C grammar, so symbol prefixes, storage
//! and signedness qualifiers, element widths and literal bases may all vary.
//!
//! Element width is never read from the declaration. A literal above `0xFF`
//! is taken to be a 16-bit word (as written by `short`-based XBM) and is
//! emitted as two little-endian bytes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ParseError, ParseResult};

/// Largest accepted `width * height`; the packed data is embedded as a shader constant
pub const MAX_PIXELS: u64 = 1 << 28;

// Identifier and whitespace classes are ASCII-only, like the C preprocessor's
lazy_static! {
    static ref RE_WIDTH: Regex =
        Regex::new(r"(?m)#define[\t\n\f\r ]+[A-Za-z0-9_]+_width[\t\n\f\r ]+([0-9]+)").unwrap();
    static ref RE_HEIGHT: Regex =
        Regex::new(r"(?m)#define[\t\n\f\r ]+[A-Za-z0-9_]+_height[\t\n\f\r ]+([0-9]+)").unwrap();
    static ref RE_BITS_ARRAY: Regex =
        Regex::new(r"(?s)[A-Za-z_][A-Za-z0-9_]*_bits\[\][\t\n\f\r ]*=[\t\n\f\r ]*\{(.*?)\};").unwrap();
    static ref RE_LITERAL: Regex = Regex::new(r"0[xX][0-9A-Fa-f]+|[0-9]+").unwrap();
}

/// Width and height of a bitmap, both non-zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapDimensions {
    pub width: u32,
    pub height: u32,
}

impl BitmapDimensions {
    /// Total number of pixels (`width * height`)
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes per source row; rows are padded to a whole byte
    pub fn row_bytes(&self) -> usize {
        (self.width as usize + 7) / 8
    }
}

/// Parsed XBM: dimensions plus the raw row-padded byte stream in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XbmImage {
    pub dimensions: BitmapDimensions,
    pub bits: Vec<u8>,
}

/// Parse XBM text into dimensions and raw byte stream.
///
/// The first `_width`, `_height` and `_bits[]` declarations found win. Their
/// symbol prefixes are not required to agree.
pub fn parse_xbm(text: &str) -> ParseResult<XbmImage> {
    let dimensions = parse_dimensions(text)?;

    let body = first_group(&RE_BITS_ARRAY, text).ok_or(ParseError::MissingBitsArray)?;

    let tokens: Vec<&str> = RE_LITERAL.find_iter(body).map(|m| m.as_str()).collect();
    if tokens.is_empty() {
        return Err(ParseError::EmptyBitsArray);
    }

    let mut bits = Vec::with_capacity(tokens.len());
    for token in tokens {
        push_literal(&mut bits, decode_literal(token)?);
    }

    log::debug!(
        "xbm: {}x{}, {} bytes of bit data (expected {})",
        dimensions.width,
        dimensions.height,
        bits.len(),
        dimensions.row_bytes() * dimensions.height as usize
    );

    Ok(XbmImage { dimensions, bits })
}

/// Parse only the `#define <name>_width N` / `#define <name>_height N` pair.
pub fn parse_dimensions(text: &str) -> ParseResult<BitmapDimensions> {
    let (width_str, height_str) = match (first_group(&RE_WIDTH, text), first_group(&RE_HEIGHT, text)) {
        (Some(w), Some(h)) => (w, h),
        _ => return Err(ParseError::MissingDimensions),
    };

    let invalid = || ParseError::InvalidDimensions {
        width: width_str.to_string(),
        height: height_str.to_string(),
    };

    let width: u32 = width_str.parse().map_err(|_| invalid())?;
    let height: u32 = height_str.parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    if width as u64 * height as u64 > MAX_PIXELS {
        return Err(invalid());
    }

    Ok(BitmapDimensions { width, height })
}

fn first_group<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Decode one literal token: `0x`/`0X` prefix is hexadecimal, anything else decimal.
pub fn decode_literal(token: &str) -> ParseResult<i64> {
    let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => token.parse::<i64>(),
    };
    parsed.map_err(|e| ParseError::BadNumber {
        token: token.to_string(),
        reason: e.to_string(),
    })
}

/// Append a decoded literal to the byte stream.
///
/// Negative values clamp to zero. Values up to `0xFF` take one byte; larger
/// values take two bytes, low byte first. Bits above 16 are dropped.
pub fn push_literal(out: &mut Vec<u8>, value: i64) {
    let value = value.max(0);
    if value <= 0xFF {
        out.push(value as u8);
    } else {
        out.push((value & 0xFF) as u8);
        out.push(((value >> 8) & 0xFF) as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "#define square_width 4\n\
                          #define square_height 4\n\
                          static unsigned char square_bits[] = {\n\
                             0x07, 0x0d, 0x0b, 0x0e };\n";

    #[test]
    fn test_parse_basic() {
        let xbm = parse_xbm(SQUARE).unwrap();
        assert_eq!(xbm.dimensions, BitmapDimensions { width: 4, height: 4 });
        assert_eq!(xbm.bits, vec![0x07, 0x0d, 0x0b, 0x0e]);
    }

    #[test]
    fn test_hex_and_decimal_agree() {
        assert_eq!(decode_literal("0x07").unwrap(), 7);
        assert_eq!(decode_literal("0X07").unwrap(), 7);
        assert_eq!(decode_literal("7").unwrap(), 7);
        assert_eq!(decode_literal("0xFf").unwrap(), 255);

        let text = "#define a_width 8\n#define a_height 2\nchar a_bits[] = { 0x07, 7 };";
        assert_eq!(parse_xbm(text).unwrap().bits, vec![7, 7]);
    }

    #[test]
    fn test_wide_literal_is_little_endian() {
        let mut out = Vec::new();
        push_literal(&mut out, 300);
        assert_eq!(out, vec![0x2C, 0x01]);

        // 16-bit XBM: one short per row of 16 pixels
        let text = "#define w_width 16\n#define w_height 2\n\
                    static unsigned short w_bits[] = { 0x8001, 0x00ff };";
        let xbm = parse_xbm(text).unwrap();
        // 0x00ff fits in one byte, so magnitude alone decides width
        assert_eq!(xbm.bits, vec![0x01, 0x80, 0xff]);
    }

    #[test]
    fn test_push_literal_edges() {
        let mut out = Vec::new();
        push_literal(&mut out, -5);
        push_literal(&mut out, 255);
        push_literal(&mut out, 256);
        push_literal(&mut out, 0x12345);
        assert_eq!(out, vec![0x00, 0xFF, 0x00, 0x01, 0x45, 0x23]);
    }

    #[test]
    fn test_qualifiers_and_prefixes_are_ignored() {
        let text = "#define icon_width 8\n\
                    #define icon_height 1\n\
                    static const signed char other_name_bits[] = {0x5a};\n";
        let xbm = parse_xbm(text).unwrap();
        assert_eq!(xbm.dimensions.width, 8);
        assert_eq!(xbm.bits, vec![0x5a]);
    }

    #[test]
    fn test_first_bits_array_wins() {
        let text = "#define a_width 8\n#define a_height 1\n\
                    char a_bits[] = { 0x01 };\n\
                    char b_bits[] = { 0x02 };\n";
        assert_eq!(parse_xbm(text).unwrap().bits, vec![0x01]);
    }

    #[test]
    fn test_multiline_array_without_spaces() {
        let text = "#define m_width 8\n#define m_height 3\n\
                    static char m_bits[]={\n  0x01,\n  0x02,\n  0x03\n};";
        assert_eq!(parse_xbm(text).unwrap().bits, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_width_is_error() {
        let text = "#define x_height 4\nchar x_bits[] = { 0x01 };";
        assert_eq!(parse_xbm(text), Err(ParseError::MissingDimensions));
    }

    #[test]
    fn test_missing_height_is_error() {
        let text = "#define x_width 4\nchar x_bits[] = { 0x01 };";
        assert_eq!(parse_xbm(text), Err(ParseError::MissingDimensions));
    }

    #[test]
    fn test_missing_array_is_error() {
        let text = "#define x_width 4\n#define x_height 4\n";
        assert_eq!(parse_xbm(text), Err(ParseError::MissingBitsArray));
    }

    #[test]
    fn test_empty_array_is_distinct_error() {
        let text = "#define x_width 4\n#define x_height 4\nchar x_bits[] = {};";
        assert_eq!(parse_xbm(text), Err(ParseError::EmptyBitsArray));

        let text = "#define x_width 4\n#define x_height 4\nchar x_bits[] = { , };";
        assert_eq!(parse_xbm(text), Err(ParseError::EmptyBitsArray));
    }

    #[test]
    fn test_overflowing_literal_is_error() {
        let text = "#define x_width 8\n#define x_height 1\n\
                    char x_bits[] = { 0x1FFFFFFFFFFFFFFFF };";
        match parse_xbm(text) {
            Err(ParseError::BadNumber { token, .. }) => assert_eq!(token, "0x1FFFFFFFFFFFFFFFF"),
            other => panic!("expected BadNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_dimension_is_error() {
        let text = "#define x_width 0\n#define x_height 4\nchar x_bits[] = { 0x01 };";
        assert!(matches!(
            parse_xbm(text),
            Err(ParseError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_parse_dimensions_only() {
        let dims = parse_dimensions("#define icon_width 16\n#define icon_height 32\nstatic ...").unwrap();
        assert_eq!(dims, BitmapDimensions { width: 16, height: 32 });
        assert_eq!(dims.row_bytes(), 2);
        assert_eq!(dims.pixel_count(), 512);
    }

    #[test]
    fn test_oversized_dimensions_are_error() {
        let text = "#define a_width 4294967295\n#define a_height 4294967295\nchar a_bits[] = { 1 };";
        assert!(matches!(
            parse_xbm(text),
            Err(ParseError::InvalidDimensions { .. })
        ));

        // Exactly at the limit is fine, one row more is not
        assert!(parse_dimensions("#define a_width 16384\n#define a_height 16384\n").is_ok());
        assert!(parse_dimensions("#define a_width 16384\n#define a_height 16385\n").is_err());
    }

    #[test]
    fn test_non_ascii_identifier_is_rejected() {
        let text = "#define \u{e9}_width 4\n#define a_height 4\nchar a_bits[] = { 1 };";
        assert_eq!(parse_xbm(text), Err(ParseError::MissingDimensions));

        let text = "#define a_width 8\n#define a_height 1\nchar \u{e9}_bits[] = { 1 };";
        assert_eq!(parse_xbm(text), Err(ParseError::MissingBitsArray));
    }

    #[test]
    fn test_non_ascii_comment_is_ignored() {
        let text = "/* caf\u{e9} */\n#define a_width 8\n#define a_height 1\nchar a_bits[] = { 0x81 };";
        assert_eq!(parse_xbm(text).unwrap().bits, vec![0x81]);
    }
}
