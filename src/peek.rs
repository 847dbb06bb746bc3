//! `peek_name`: read-only scanner that extracts a page's schema name
//! without populating a [`crate::store::Context`].

use crate::codec::{decode_key, decode_map_header, decode_str_any, skip_value, Key};
use crate::error::{Error, Result};

/// Scan `bytes` for the reserved key-0 schema name and copy it (plus a
/// trailing NUL) into `out_buf`. Returns the name as a `&str` borrowed
/// from `out_buf`, not including the NUL.
///
/// Fails with [`Error::Bounds`] if `out_buf` is too small to hold the name
/// plus its NUL terminator, [`Error::Missing`] if the blob has no key 0
/// (tolerated for legacy blobs produced before `pageout` always wrote
/// one), and [`Error::Decode`] on any malformed input.
pub fn peek_name<'a>(bytes: &[u8], out_buf: &'a mut [u8]) -> Result<&'a str> {
    let mut cursor = bytes;
    let count = decode_map_header(&mut cursor)?;

    for pair_index in 0..count {
        match decode_key(&mut cursor)? {
            Key::LegacyStr(_) => {
                if pair_index != 0 {
                    return Err(Error::Decode);
                }
                skip_value(&mut cursor)?;
            }
            Key::Index(0) => {
                let name = decode_str_any(&mut cursor)?;
                let len = name.len();
                if len + 1 > out_buf.len() {
                    return Err(Error::Bounds);
                }
                out_buf[..len].copy_from_slice(name);
                out_buf[len] = 0;
                return core::str::from_utf8(&out_buf[..len]).map_err(|_| Error::Decode);
            }
            Key::Index(_) => {
                skip_value(&mut cursor)?;
            }
        }
    }

    Err(Error::Missing)
}
