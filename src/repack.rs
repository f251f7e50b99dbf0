//! Repacking of row-padded XBM bytes into a tight 32-bit word stream.
//!
//! XBM rows are padded to whole bytes and stored least-significant bit first.
//! The shader wants one bit per pixel with no row padding, addressed by the
//! linear index `y * width + x`, grouped into `u32` words. Bit `i` lives in
//! word `i / 32` at bit position `i % 32`, again LSB first.

use crate::format::BitmapDimensions;

/// Number of 32-bit words needed for `width * height` bits
pub fn word_count(dimensions: BitmapDimensions) -> usize {
    (dimensions.pixel_count() + 31) / 32
}

/// Repack XBM row-padded bytes into LSB-first 32-bit words.
///
/// The output always has `word_count(dimensions)` words. A byte stream shorter
/// than the dimensions imply is not an error: each row stops at the first
/// missing source byte and its remaining pixels stay 0.
pub fn repack_bits_to_u32(bits: &[u8], dimensions: BitmapDimensions) -> Vec<u32> {
    let width = dimensions.width as usize;
    let height = dimensions.height as usize;
    let row_bytes = dimensions.row_bytes();
    let mut words = vec![0u32; word_count(dimensions)];

    let expected = row_bytes * height;
    if bits.len() < expected {
        log::warn!(
            "bit data truncated: expected {} bytes for {}x{}, got {}; missing pixels are off",
            expected,
            width,
            height,
            bits.len()
        );
    }

    for y in 0..height {
        let row_start = y * row_bytes;
        for x in 0..width {
            let byte_idx = row_start + (x >> 3);
            if byte_idx >= bits.len() {
                break;
            }
            // LSB is the leftmost pixel of the byte
            if (bits[byte_idx] >> (x & 7)) & 1 == 1 {
                let i = y * width + x;
                words[i >> 5] |= 1 << (i & 31);
            }
        }
    }

    words
}

/// Read bit `index` from a packed word stream (LSB first within each word).
///
/// Indices past the end read as 0.
#[inline]
pub fn packed_bit(words: &[u32], index: usize) -> bool {
    words
        .get(index >> 5)
        .map(|&w| (w >> (index & 31)) & 1 == 1)
        .unwrap_or(false)
}
