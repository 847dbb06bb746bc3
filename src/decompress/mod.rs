//! Optional decompression adapters that bracket `pagein`'s input.
//!
//! Neither variant is part of the core runtime engine; both are thin,
//! feature-gated wrappers following the same shape as the teacher's
//! `zstd_help.rs` — decompress into caller scratch, map the underlying
//! failure into [`crate::Error`]. A decompressed page is handed to
//! [`crate::pagein::pagein`]/[`crate::pagein::pagein_remap`] exactly like
//! an uncompressed one.

use crate::error::Result;

/// Decompresses a whole blob into caller-owned scratch.
pub trait Decompressor {
    /// Decompress `input` into `scratch`, returning the number of
    /// plaintext bytes written.
    ///
    /// `expected_len`, when `Some`, is the advertised decompressed size —
    /// typically read from a length prefix ahead of the compressed bytes
    /// by the caller (the file adapter, say). Implementations that need
    /// to know the output size up front (the LZ4 block format carries
    /// none itself) require it and fail with [`crate::Error::Bounds`] if
    /// it's absent or wider than `scratch`.
    fn decompress(&self, expected_len: Option<usize>, input: &[u8], scratch: &mut [u8]) -> Result<usize>;
}

#[cfg(feature = "lz4")]
pub mod lz4;
#[cfg(feature = "lzss")]
pub mod lzss;
