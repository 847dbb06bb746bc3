//! The typed, in-memory configuration store.
//!
//! `Context` is the live object the rest of the crate revolves around: a
//! schema pointer, a caller-owned values array, an inline presence bitmap,
//! and a string pool. Everything it borrows comes from the caller —
//! `Context` itself never allocates.

use crate::codec::Scalar;
use crate::config::MAX_ENTRIES;
use crate::error::{Error, Result};
use crate::pool::{self, Pool};
use crate::schema::Schema;
use crate::value::{Default, Kind, Value};

const BITMAP_WORDS: usize = (MAX_ENTRIES + 63) / 64;

/// A live configuration store bound to a particular [`Schema`].
///
/// `values` and the pool bytes are borrowed from the caller for the
/// lifetime of the `Context`; nothing here owns heap memory.
pub struct Context<'a> {
    schema: &'a Schema<'a>,
    values: &'a mut [Value],
    present: [u64; BITMAP_WORDS],
    pool: Pool<'a>,
}

impl<'a> Context<'a> {
    /// Build a store bound to `schema`.
    ///
    /// - `values` must have at least `schema.entries.len()` slots.
    /// - `pool_bytes` backs the string pool; `slot_offsets` is scratch space
    ///   used to record each string entry's assigned pool region (must have
    ///   at least as many slots as the schema has string-kind entries).
    ///
    /// Validates schema invariants: no duplicate entry index, no entry
    /// claiming the reserved index 0, entry count within [`MAX_ENTRIES`],
    /// and each default's kind (if present) matching its entry's kind.
    /// Entries are then reset to their defaults (or zero, for
    /// entries with no default), exactly as [`Context::reset_to_defaults`]
    /// does.
    pub fn init(
        schema: &'a Schema<'a>,
        values: &'a mut [Value],
        pool_bytes: &'a mut [u8],
        slot_offsets: &mut [u16],
    ) -> Result<Context<'a>> {
        let entries = schema.entries;
        if entries.len() > MAX_ENTRIES {
            return Err(Error::Bounds);
        }
        if values.len() < entries.len() {
            return Err(Error::Bounds);
        }
        if !schema.name_fits() {
            return Err(Error::InvalidType);
        }

        for (i, entry) in entries.iter().enumerate() {
            if entry.index == 0 {
                return Err(Error::ReservedIndex);
            }
            if entries[..i].iter().any(|e| e.index == entry.index) {
                return Err(Error::Duplicate);
            }
            if let Some(default) = entry.default {
                if default.kind() != entry.kind {
                    return Err(Error::InvalidType);
                }
            }
        }

        let pool_capacity = pool_bytes.len();
        let assigned = pool::assign_regions(pool_capacity, entries.iter().map(|e| e.kind), slot_offsets)?;

        let mut ctx = Context {
            schema,
            values,
            present: [0u64; BITMAP_WORDS],
            pool: Pool::new(pool_bytes),
        };

        let mut str_slot = 0usize;
        for (slot, entry) in entries.iter().enumerate() {
            let str_offset = if entry.kind.is_string() {
                let offset = slot_offsets
                    .get(str_slot)
                    .copied()
                    .ok_or(Error::Bounds)?;
                str_slot += 1;
                offset
            } else {
                0
            };
            ctx.values[slot] = Value::zeroed(entry.kind, str_offset);
        }
        debug_assert_eq!(str_slot, assigned);

        ctx.reset_to_defaults()?;
        Ok(ctx)
    }

    /// The bound schema.
    pub fn schema(&self) -> &Schema<'a> {
        self.schema
    }

    /// Number of slots currently present (set, restored from a default,
    /// or decoded from a page) — not the schema's total entry count.
    pub fn get_size(&self) -> usize {
        (0..self.schema.entries.len()).filter(|&slot| self.is_present(slot)).count()
    }

    /// Total number of entries the bound schema declares. Unlike
    /// [`Context::get_size`], this doesn't depend on presence.
    pub fn entry_count(&self) -> usize {
        self.schema.entries.len()
    }

    /// The schema's informational version number.
    pub fn get_version(&self) -> u32 {
        self.schema.version
    }

    /// `true` if the slot at `slot` has a value present.
    pub fn is_present(&self, slot: usize) -> bool {
        let word = slot / 64;
        let bit = slot % 64;
        word < self.present.len() && (self.present[word] & (1u64 << bit)) != 0
    }

    pub(crate) fn set_present(&mut self, slot: usize, present: bool) {
        let word = slot / 64;
        let bit = slot % 64;
        if present {
            self.present[word] |= 1u64 << bit;
        } else {
            self.present[word] &= !(1u64 << bit);
        }
    }

    pub(crate) fn clear_all_present(&mut self) {
        for word in self.present.iter_mut() {
            *word = 0;
        }
    }

    pub(crate) fn values_mut(&mut self) -> &mut [Value] {
        self.values
    }

    pub(crate) fn values(&self) -> &[Value] {
        self.values
    }

    pub(crate) fn pool(&self) -> &Pool<'a> {
        &self.pool
    }

    pub(crate) fn pool_mut(&mut self) -> &mut Pool<'a> {
        &mut self.pool
    }

    /// Restore every entry to its schema default (or zero, if it has none),
    /// and mark defaulted entries present — entries with no default become
    /// absent, matching `pagein`'s treatment of a schema entry that was
    /// never supplied a default and never appeared on the wire.
    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.clear_all_present();
        for slot in 0..self.schema.entries.len() {
            let entry = self.schema.entries[slot];
            match entry.default {
                Some(default) => {
                    self.write_default(slot, default)?;
                    self.set_present(slot, true);
                }
                None => {
                    let str_offset = match self.values[slot] {
                        Value::Str { offset, .. } => offset,
                        Value::FStr { offset, .. } => offset,
                        _ => 0,
                    };
                    self.values[slot] = Value::zeroed(entry.kind, str_offset);
                }
            }
        }
        Ok(())
    }

    fn write_default(&mut self, slot: usize, default: Default) -> Result<()> {
        match default {
            Default::U8(v) => self.values[slot] = Value::U8(v),
            Default::U16(v) => self.values[slot] = Value::U16(v),
            Default::U32(v) => self.values[slot] = Value::U32(v),
            Default::U64(v) => self.values[slot] = Value::U64(v),
            Default::I8(v) => self.values[slot] = Value::I8(v),
            Default::I16(v) => self.values[slot] = Value::I16(v),
            Default::I32(v) => self.values[slot] = Value::I32(v),
            Default::I64(v) => self.values[slot] = Value::I64(v),
            Default::F32(v) => self.values[slot] = Value::F32(v),
            Default::F64(v) => self.values[slot] = Value::F64(v),
            Default::Str(_, _) | Default::FStr(_, _) => {
                let bytes = default.str_bytes().ok_or(Error::InvalidType)?;
                let offset = match self.values[slot] {
                    Value::Str { offset, .. } => offset,
                    Value::FStr { offset, .. } => offset,
                    _ => return Err(Error::InvalidType),
                };
                self.pool.write(offset, bytes)?;
                self.values[slot] = match default {
                    Default::Str(_, _) => Value::Str {
                        offset,
                        len: bytes.len() as u16,
                    },
                    Default::FStr(_, _) => Value::FStr {
                        offset,
                        len: bytes.len() as u8,
                    },
                    _ => unreachable!(),
                };
            }
        }
        Ok(())
    }

    /// Write a decoded, already-coerced [`Scalar`] into `slot`, marking it
    /// present. Used by `pagein`/`pagein_remap`, which decode each wire
    /// entry against its schema-declared kind before calling this.
    pub(crate) fn write_scalar(&mut self, slot: usize, scalar: Scalar) -> Result<()> {
        match scalar {
            Scalar::U8(v) => self.values[slot] = Value::U8(v),
            Scalar::U16(v) => self.values[slot] = Value::U16(v),
            Scalar::U32(v) => self.values[slot] = Value::U32(v),
            Scalar::U64(v) => self.values[slot] = Value::U64(v),
            Scalar::I8(v) => self.values[slot] = Value::I8(v),
            Scalar::I16(v) => self.values[slot] = Value::I16(v),
            Scalar::I32(v) => self.values[slot] = Value::I32(v),
            Scalar::I64(v) => self.values[slot] = Value::I64(v),
            Scalar::F32(v) => self.values[slot] = Value::F32(v),
            Scalar::F64(v) => self.values[slot] = Value::F64(v),
            Scalar::Str(bytes) => {
                let (offset, is_fstr) = match self.values[slot] {
                    Value::Str { offset, .. } => (offset, false),
                    Value::FStr { offset, .. } => (offset, true),
                    _ => return Err(Error::TypeMismatch),
                };
                self.pool.write(offset, bytes)?;
                self.values[slot] = if is_fstr {
                    Value::FStr {
                        offset,
                        len: bytes.len() as u8,
                    }
                } else {
                    Value::Str {
                        offset,
                        len: bytes.len() as u16,
                    }
                };
            }
        }
        self.set_present(slot, true);
        Ok(())
    }

    /// Final step of `pagein`/`pagein_remap`: for every slot still absent
    /// after decoding the wire map, restore its schema default (if any)
    /// and mark it present. Slots with no default, and not present from
    /// the wire, stay absent.
    pub(crate) fn restore_missing_defaults(&mut self) -> Result<()> {
        for slot in 0..self.schema.entries.len() {
            if self.is_present(slot) {
                continue;
            }
            if let Some(default) = self.schema.entries[slot].default {
                self.write_default(slot, default)?;
                self.set_present(slot, true);
            }
        }
        Ok(())
    }

    fn slot_for_kind(&self, slot: usize, kind: Kind) -> Result<usize> {
        let entry = self.schema.entries.get(slot).ok_or(Error::Bounds)?;
        if entry.kind != kind {
            return Err(Error::TypeMismatch);
        }
        Ok(slot)
    }

    fn slot_for_name_and_kind(&self, name: &str, kind: Kind) -> Result<usize> {
        let slot = self.schema.slot_for_name(name).ok_or(Error::Missing)?;
        self.slot_for_kind(slot, kind)
    }

    // ---------------------------------------------------------- numerics

    /// Set a numeric entry by slot index. Returns [`Error::TypeMismatch`]
    /// if the schema's declared kind for that slot differs from `K`.
    pub fn set_u8(&mut self, slot: usize, v: u8) -> Result<()> {
        self.slot_for_kind(slot, Kind::U8)?;
        self.values[slot] = Value::U8(v);
        self.set_present(slot, true);
        Ok(())
    }

    pub fn get_u8(&self, slot: usize) -> Result<u8> {
        self.slot_for_kind(slot, Kind::U8)?;
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        match self.values[slot] {
            Value::U8(v) => Ok(v),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn set_u16(&mut self, slot: usize, v: u16) -> Result<()> {
        self.slot_for_kind(slot, Kind::U16)?;
        self.values[slot] = Value::U16(v);
        self.set_present(slot, true);
        Ok(())
    }

    pub fn get_u16(&self, slot: usize) -> Result<u16> {
        self.slot_for_kind(slot, Kind::U16)?;
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        match self.values[slot] {
            Value::U16(v) => Ok(v),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn set_u32(&mut self, slot: usize, v: u32) -> Result<()> {
        self.slot_for_kind(slot, Kind::U32)?;
        self.values[slot] = Value::U32(v);
        self.set_present(slot, true);
        Ok(())
    }

    pub fn get_u32(&self, slot: usize) -> Result<u32> {
        self.slot_for_kind(slot, Kind::U32)?;
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        match self.values[slot] {
            Value::U32(v) => Ok(v),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn set_u64(&mut self, slot: usize, v: u64) -> Result<()> {
        self.slot_for_kind(slot, Kind::U64)?;
        self.values[slot] = Value::U64(v);
        self.set_present(slot, true);
        Ok(())
    }

    pub fn get_u64(&self, slot: usize) -> Result<u64> {
        self.slot_for_kind(slot, Kind::U64)?;
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        match self.values[slot] {
            Value::U64(v) => Ok(v),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn set_i8(&mut self, slot: usize, v: i8) -> Result<()> {
        self.slot_for_kind(slot, Kind::I8)?;
        self.values[slot] = Value::I8(v);
        self.set_present(slot, true);
        Ok(())
    }

    pub fn get_i8(&self, slot: usize) -> Result<i8> {
        self.slot_for_kind(slot, Kind::I8)?;
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        match self.values[slot] {
            Value::I8(v) => Ok(v),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn set_i16(&mut self, slot: usize, v: i16) -> Result<()> {
        self.slot_for_kind(slot, Kind::I16)?;
        self.values[slot] = Value::I16(v);
        self.set_present(slot, true);
        Ok(())
    }

    pub fn get_i16(&self, slot: usize) -> Result<i16> {
        self.slot_for_kind(slot, Kind::I16)?;
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        match self.values[slot] {
            Value::I16(v) => Ok(v),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn set_i32(&mut self, slot: usize, v: i32) -> Result<()> {
        self.slot_for_kind(slot, Kind::I32)?;
        self.values[slot] = Value::I32(v);
        self.set_present(slot, true);
        Ok(())
    }

    pub fn get_i32(&self, slot: usize) -> Result<i32> {
        self.slot_for_kind(slot, Kind::I32)?;
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        match self.values[slot] {
            Value::I32(v) => Ok(v),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn set_i64(&mut self, slot: usize, v: i64) -> Result<()> {
        self.slot_for_kind(slot, Kind::I64)?;
        self.values[slot] = Value::I64(v);
        self.set_present(slot, true);
        Ok(())
    }

    pub fn get_i64(&self, slot: usize) -> Result<i64> {
        self.slot_for_kind(slot, Kind::I64)?;
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        match self.values[slot] {
            Value::I64(v) => Ok(v),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn set_f32(&mut self, slot: usize, v: f32) -> Result<()> {
        self.slot_for_kind(slot, Kind::F32)?;
        self.values[slot] = Value::F32(v);
        self.set_present(slot, true);
        Ok(())
    }

    pub fn get_f32(&self, slot: usize) -> Result<f32> {
        self.slot_for_kind(slot, Kind::F32)?;
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        match self.values[slot] {
            Value::F32(v) => Ok(v),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn set_f64(&mut self, slot: usize, v: f64) -> Result<()> {
        self.slot_for_kind(slot, Kind::F64)?;
        self.values[slot] = Value::F64(v);
        self.set_present(slot, true);
        Ok(())
    }

    pub fn get_f64(&self, slot: usize) -> Result<f64> {
        self.slot_for_kind(slot, Kind::F64)?;
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        match self.values[slot] {
            Value::F64(v) => Ok(v),
            _ => Err(Error::TypeMismatch),
        }
    }

    // ------------------------------------------------------------ strings

    /// Set a string entry (`Str` or `FStr`) by slot index. Fails with
    /// [`Error::StrTooLong`] if `bytes` exceeds the slot kind's maximum.
    pub fn set_str(&mut self, slot: usize, bytes: &[u8]) -> Result<()> {
        let entry = self.schema.entries.get(slot).ok_or(Error::Bounds)?;
        if !entry.kind.is_string() {
            return Err(Error::TypeMismatch);
        }
        let max_len = entry.kind.max_len().unwrap();
        if bytes.len() > max_len {
            return Err(Error::StrTooLong);
        }
        let offset = match self.values[slot] {
            Value::Str { offset, .. } => offset,
            Value::FStr { offset, .. } => offset,
            _ => return Err(Error::TypeMismatch),
        };
        self.pool.write(offset, bytes)?;
        self.values[slot] = match entry.kind {
            Kind::Str => Value::Str {
                offset,
                len: bytes.len() as u16,
            },
            Kind::FStr => Value::FStr {
                offset,
                len: bytes.len() as u8,
            },
            _ => unreachable!(),
        };
        self.set_present(slot, true);
        Ok(())
    }

    /// Read a string entry's current bytes.
    pub fn get_str(&self, slot: usize) -> Result<&[u8]> {
        let entry = self.schema.entries.get(slot).ok_or(Error::Bounds)?;
        if !entry.kind.is_string() {
            return Err(Error::TypeMismatch);
        }
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        let (offset, len) = match self.values[slot] {
            Value::Str { offset, len } => (offset, len as usize),
            Value::FStr { offset, len } => (offset, len as usize),
            _ => return Err(Error::TypeMismatch),
        };
        self.pool.read(offset, len)
    }

    /// Set a string entry by name. See [`Context::set_str`].
    pub fn set_str_by_name(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let slot = self.schema.slot_for_name(name).ok_or(Error::Missing)?;
        self.set_str(slot, bytes)
    }

    /// Read a string entry by name. See [`Context::get_str`].
    pub fn get_str_by_name(&self, name: &str) -> Result<&[u8]> {
        let slot = self.schema.slot_for_name(name).ok_or(Error::Missing)?;
        self.get_str(slot)
    }

    /// Set a numeric entry by name.
    pub fn set_u8_by_name(&mut self, name: &str, v: u8) -> Result<()> {
        let slot = self.slot_for_name_and_kind(name, Kind::U8)?;
        self.set_u8(slot, v)
    }

    /// Get a numeric entry by name.
    pub fn get_u8_by_name(&self, name: &str) -> Result<u8> {
        let slot = self.slot_for_name_and_kind(name, Kind::U8)?;
        self.get_u8(slot)
    }

    pub fn set_u16_by_name(&mut self, name: &str, v: u16) -> Result<()> {
        let slot = self.slot_for_name_and_kind(name, Kind::U16)?;
        self.set_u16(slot, v)
    }

    pub fn get_u16_by_name(&self, name: &str) -> Result<u16> {
        let slot = self.slot_for_name_and_kind(name, Kind::U16)?;
        self.get_u16(slot)
    }

    pub fn set_u32_by_name(&mut self, name: &str, v: u32) -> Result<()> {
        let slot = self.slot_for_name_and_kind(name, Kind::U32)?;
        self.set_u32(slot, v)
    }

    pub fn get_u32_by_name(&self, name: &str) -> Result<u32> {
        let slot = self.slot_for_name_and_kind(name, Kind::U32)?;
        self.get_u32(slot)
    }

    pub fn set_u64_by_name(&mut self, name: &str, v: u64) -> Result<()> {
        let slot = self.slot_for_name_and_kind(name, Kind::U64)?;
        self.set_u64(slot, v)
    }

    pub fn get_u64_by_name(&self, name: &str) -> Result<u64> {
        let slot = self.slot_for_name_and_kind(name, Kind::U64)?;
        self.get_u64(slot)
    }

    pub fn set_i8_by_name(&mut self, name: &str, v: i8) -> Result<()> {
        let slot = self.slot_for_name_and_kind(name, Kind::I8)?;
        self.set_i8(slot, v)
    }

    pub fn get_i8_by_name(&self, name: &str) -> Result<i8> {
        let slot = self.slot_for_name_and_kind(name, Kind::I8)?;
        self.get_i8(slot)
    }

    pub fn set_i16_by_name(&mut self, name: &str, v: i16) -> Result<()> {
        let slot = self.slot_for_name_and_kind(name, Kind::I16)?;
        self.set_i16(slot, v)
    }

    pub fn get_i16_by_name(&self, name: &str) -> Result<i16> {
        let slot = self.slot_for_name_and_kind(name, Kind::I16)?;
        self.get_i16(slot)
    }

    pub fn set_i32_by_name(&mut self, name: &str, v: i32) -> Result<()> {
        let slot = self.slot_for_name_and_kind(name, Kind::I32)?;
        self.set_i32(slot, v)
    }

    pub fn get_i32_by_name(&self, name: &str) -> Result<i32> {
        let slot = self.slot_for_name_and_kind(name, Kind::I32)?;
        self.get_i32(slot)
    }

    pub fn set_i64_by_name(&mut self, name: &str, v: i64) -> Result<()> {
        let slot = self.slot_for_name_and_kind(name, Kind::I64)?;
        self.set_i64(slot, v)
    }

    pub fn get_i64_by_name(&self, name: &str) -> Result<i64> {
        let slot = self.slot_for_name_and_kind(name, Kind::I64)?;
        self.get_i64(slot)
    }

    pub fn set_f32_by_name(&mut self, name: &str, v: f32) -> Result<()> {
        let slot = self.slot_for_name_and_kind(name, Kind::F32)?;
        self.set_f32(slot, v)
    }

    pub fn get_f32_by_name(&self, name: &str) -> Result<f32> {
        let slot = self.slot_for_name_and_kind(name, Kind::F32)?;
        self.get_f32(slot)
    }

    pub fn set_f64_by_name(&mut self, name: &str, v: f64) -> Result<()> {
        let slot = self.slot_for_name_and_kind(name, Kind::F64)?;
        self.set_f64(slot, v)
    }

    pub fn get_f64_by_name(&self, name: &str) -> Result<f64> {
        let slot = self.slot_for_name_and_kind(name, Kind::F64)?;
        self.get_f64(slot)
    }

    // -------------------------------------------------------------- generic

    /// Set a slot from a self-contained [`Default`] value, failing with
    /// [`Error::TypeMismatch`] if its kind disagrees with the schema's
    /// declared kind for that slot. `Default` (not the pool-indexed, slim
    /// [`Value`]) is the generic entry point here because it carries string
    /// bytes inline — a caller has no legitimate way to hand this `Context`
    /// a slim `Value`'s pool offset from outside, since that offset is only
    /// meaningful against this `Context`'s own pool.
    pub fn set_value(&mut self, slot: usize, value: &Default) -> Result<()> {
        self.slot_for_kind(slot, value.kind())?;
        match *value {
            Default::U8(v) => self.set_u8(slot, v),
            Default::U16(v) => self.set_u16(slot, v),
            Default::U32(v) => self.set_u32(slot, v),
            Default::U64(v) => self.set_u64(slot, v),
            Default::I8(v) => self.set_i8(slot, v),
            Default::I16(v) => self.set_i16(slot, v),
            Default::I32(v) => self.set_i32(slot, v),
            Default::I64(v) => self.set_i64(slot, v),
            Default::F32(v) => self.set_f32(slot, v),
            Default::F64(v) => self.set_f64(slot, v),
            Default::Str(_, _) | Default::FStr(_, _) => {
                let bytes = value.str_bytes().ok_or(Error::InvalidType)?;
                self.set_str(slot, bytes)
            }
        }
    }

    /// Read a slot's current value out as a self-contained [`Default`],
    /// copying string bytes out of the pool rather than returning a pool
    /// offset. Fails with [`Error::Missing`] if the slot isn't present.
    pub fn get_value(&self, slot: usize) -> Result<Default> {
        let entry = self.schema.entries.get(slot).ok_or(Error::Bounds)?;
        if !self.is_present(slot) {
            return Err(Error::Missing);
        }
        Ok(match self.values[slot] {
            Value::U8(v) => Default::U8(v),
            Value::U16(v) => Default::U16(v),
            Value::U32(v) => Default::U32(v),
            Value::U64(v) => Default::U64(v),
            Value::I8(v) => Default::I8(v),
            Value::I16(v) => Default::I16(v),
            Value::I32(v) => Default::I32(v),
            Value::I64(v) => Default::I64(v),
            Value::F32(v) => Default::F32(v),
            Value::F64(v) => Default::F64(v),
            Value::Str { offset, len } => {
                let bytes = self.pool.read(offset, len as usize)?;
                match entry.kind {
                    Kind::Str => Default::str(bytes).ok_or(Error::StrTooLong)?,
                    _ => return Err(Error::TypeMismatch),
                }
            }
            Value::FStr { offset, len } => {
                let bytes = self.pool.read(offset, len as usize)?;
                match entry.kind {
                    Kind::FStr => Default::fstr(bytes).ok_or(Error::StrTooLong)?,
                    _ => return Err(Error::TypeMismatch),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Entry, Schema};

    const ENTRIES: [Entry; 3] = [
        Entry::new(1, "count", Kind::U32),
        Entry::new(2, "label", Kind::FStr),
        Entry::with_default(3, "ratio", Kind::F32, Default::F32(1.0)),
    ];

    fn new_ctx<'a>(
        schema: &'a Schema<'a>,
        values: &'a mut [Value],
        pool: &'a mut [u8],
        offsets: &'a mut [u16],
    ) -> Context<'a> {
        Context::init(schema, values, pool, offsets).unwrap()
    }

    #[test]
    fn by_name_round_trip_every_numeric_kind() {
        let schema = Schema::new("t", 1, &ENTRIES);
        let mut values = [Value::U8(0); 3];
        let mut pool = [0u8; 32];
        let mut offsets = [0u16; 3];
        let mut ctx = new_ctx(&schema, &mut values, &mut pool, &mut offsets);

        ctx.set_u32_by_name("count", 42).unwrap();
        assert_eq!(ctx.get_u32_by_name("count").unwrap(), 42);

        ctx.set_str_by_name("label", b"eth0").unwrap();
        assert_eq!(ctx.get_str_by_name("label").unwrap(), b"eth0");

        ctx.set_f32_by_name("ratio", 2.5).unwrap();
        assert_eq!(ctx.get_f32_by_name("ratio").unwrap(), 2.5);

        assert_eq!(
            ctx.set_u32_by_name("nope", 1),
            Err(Error::Missing)
        );
        assert_eq!(
            ctx.set_u8_by_name("count", 1),
            Err(Error::TypeMismatch)
        );
    }

    #[test]
    fn generic_value_round_trip() {
        let schema = Schema::new("t", 1, &ENTRIES);
        let mut values = [Value::U8(0); 3];
        let mut pool = [0u8; 32];
        let mut offsets = [0u16; 3];
        let mut ctx = new_ctx(&schema, &mut values, &mut pool, &mut offsets);

        ctx.set_value(0, &Default::U32(7)).unwrap();
        assert_eq!(ctx.get_value(0).unwrap(), Default::U32(7));

        let name = Default::fstr(b"wlan0").unwrap();
        ctx.set_value(1, &name).unwrap();
        assert_eq!(ctx.get_value(1).unwrap(), name);

        assert_eq!(
            ctx.set_value(0, &Default::U8(1)),
            Err(Error::TypeMismatch)
        );
    }
}
