//! Input format handling.
//!
//! This module contains:
//! - `xbm`: XBM (X BitMap) text extraction

pub mod xbm;

pub use xbm::{parse_dimensions, parse_xbm, BitmapDimensions, XbmImage};
