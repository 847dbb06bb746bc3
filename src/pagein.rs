//! `pagein` / `pagein_remap`: decode a wire page into a [`Context`],
//! optionally translating entry indices through a remap table first.
//!
//! Both entry points share one algorithm (`run`, below), parameterized by
//! an optional remap table — `pagein` is simply `pagein_remap` with no
//! table.

use crate::codec::{decode_key, decode_map_header, decode_scalar, skip_value, Key};
use crate::error::{Error, Result};
use crate::schema::RemapEntry;
use crate::store::Context;

fn resolve(k: u16, remap: Option<&[RemapEntry]>) -> u16 {
    if let Some(table) = remap {
        for &(old, new) in table {
            if old == k {
                return new;
            }
        }
    }
    k
}

fn run(ctx: &mut Context, bytes: &[u8], remap: Option<&[RemapEntry]>) -> Result<()> {
    ctx.clear_all_present();
    let mut cursor = bytes;
    let count = decode_map_header(&mut cursor)?;

    for pair_index in 0..count {
        match decode_key(&mut cursor)? {
            // Legacy top-level string key: tolerated only as the very
            // first pair, per spec.md §4.4 step 3a. Its value is
            // discarded either way.
            Key::LegacyStr(_) => {
                if pair_index != 0 {
                    return Err(Error::Decode);
                }
                skip_value(&mut cursor)?;
            }
            Key::Index(k) => {
                if k == 0 {
                    // Reserved name key; ignored here (pageout already
                    // wrote it, peek_name is the reader for it).
                    skip_value(&mut cursor)?;
                    continue;
                }
                if k > u16::MAX as u64 {
                    // No schema entry can ever claim an index this wide.
                    skip_value(&mut cursor)?;
                    continue;
                }
                let resolved = resolve(k as u16, remap);
                let slot = match ctx.schema().slot_for_index(resolved) {
                    Some(slot) => slot,
                    None => {
                        // Unknown key: forward-compatible skip.
                        skip_value(&mut cursor)?;
                        continue;
                    }
                };
                let kind = ctx.schema().entries[slot].kind;
                let scalar = decode_scalar(kind, &mut cursor)?;
                ctx.write_scalar(slot, scalar)?;
            }
        }
    }

    ctx.restore_missing_defaults()
}

/// Decode `bytes` into `ctx` with identity key mapping (wire indices are
/// looked up directly against `ctx`'s schema).
pub fn pagein(ctx: &mut Context, bytes: &[u8]) -> Result<()> {
    run(ctx, bytes, None)
}

/// Decode `bytes` into `ctx`, translating each wire key through
/// `remap_table` (an ordered `(old_index, new_index)` list) before schema
/// lookup. A key not mentioned in the table passes through unchanged. If
/// `remap_table` contains more than one entry for the same `old_index`,
/// the first one in table order wins.
pub fn pagein_remap(ctx: &mut Context, bytes: &[u8], remap_table: &[RemapEntry]) -> Result<()> {
    run(ctx, bytes, Some(remap_table))
}
