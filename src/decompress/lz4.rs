//! LZ4 block-format decompression, via `lz4_flex`'s safe (non-`unsafe`)
//! codec. The block format carries no size header of its own, so callers
//! must supply `expected_len` — typically from a length prefix the
//! surrounding container already has.

use lz4_flex::block::decompress_into;

use crate::error::{Error, Result};

use super::Decompressor;

/// An LZ4 block-format [`Decompressor`].
pub struct Lz4;

impl Decompressor for Lz4 {
    fn decompress(&self, expected_len: Option<usize>, input: &[u8], scratch: &mut [u8]) -> Result<usize> {
        let expected_len = expected_len.ok_or(Error::Bounds)?;
        if expected_len > scratch.len() {
            log::warn!(
                "lz4 decompressed size {} exceeds scratch capacity {}",
                expected_len,
                scratch.len()
            );
            return Err(Error::Bounds);
        }
        let out = &mut scratch[..expected_len];
        let n = decompress_into(input, out).map_err(|e| {
            log::warn!("lz4 decompress failed: {}", e);
            Error::Decode
        })?;
        log::debug!("lz4 decompressed {} bytes from {} compressed", n, input.len());
        Ok(n)
    }
}
