//! The fixed-capacity external string arena.
//!
//! A single contiguous byte region, sliced into per-entry regions at
//! `Context::init` time and never defragmented or moved afterward (see
//! `spec.md` §5). Each string-kind schema entry gets a disjoint region of
//! `kind.max_len() + 1` bytes, assigned in declaration order.

use crate::error::{Error, Result};

/// Borrowed backing storage for the string pool, plus bookkeeping over
/// where each string-kind slot's region begins.
pub struct Pool<'a> {
    bytes: &'a mut [u8],
}

impl<'a> Pool<'a> {
    /// Wrap caller-owned bytes as a pool. No scanning or validation is
    /// done here; regions are carved out later by `assign_regions`.
    pub fn new(bytes: &'a mut [u8]) -> Pool<'a> {
        Pool { bytes }
    }

    /// Total capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Copy `data` into the region starting at `offset`. Fails with
    /// [`Error::Bounds`] if the region would run past the end of the pool.
    pub fn write(&mut self, offset: u16, data: &[u8]) -> Result<()> {
        let start = offset as usize;
        let end = start
            .checked_add(data.len())
            .ok_or(Error::Bounds)?;
        if end > self.bytes.len() {
            return Err(Error::Bounds);
        }
        self.bytes[start..end].copy_from_slice(data);
        Ok(())
    }

    /// Read back the `len` bytes starting at `offset`. Fails with
    /// [`Error::Bounds`] if the region would run past the end of the pool.
    pub fn read(&self, offset: u16, len: usize) -> Result<&[u8]> {
        let start = offset as usize;
        let end = start.checked_add(len).ok_or(Error::Bounds)?;
        if end > self.bytes.len() {
            return Err(Error::Bounds);
        }
        Ok(&self.bytes[start..end])
    }
}

/// Assign each string-kind entry (in declaration order) a disjoint region
/// of size `max_len(kind) + 1`, writing the resulting offsets into
/// `slot_offsets`. `slot_offsets` must have at least as many entries as
/// there are string-kind schema entries; `pool` must have enough total
/// capacity to hold every region.
///
/// Returns the offsets in the same order the string entries were visited,
/// as a slice of `slot_offsets` (so callers without an allocator can index
/// back into it while walking the schema a second time).
pub fn assign_regions(
    pool_capacity: usize,
    kinds: impl Iterator<Item = crate::value::Kind>,
    slot_offsets: &mut [u16],
) -> Result<usize> {
    let mut next_offset: usize = 0;
    let mut count = 0usize;
    for kind in kinds {
        let Some(max_len) = kind.max_len() else {
            continue;
        };
        if count >= slot_offsets.len() {
            return Err(Error::Bounds);
        }
        let region_len = max_len + 1;
        let end = next_offset.checked_add(region_len).ok_or(Error::Bounds)?;
        if end > pool_capacity {
            return Err(Error::Bounds);
        }
        if next_offset > u16::MAX as usize {
            return Err(Error::Bounds);
        }
        slot_offsets[count] = next_offset as u16;
        next_offset = end;
        count += 1;
    }
    Ok(count)
}
