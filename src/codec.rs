//! Stateless encode/decode of the MessagePack subset against a caller-owned
//! append buffer ([`crate::buf::Buffer`]) and a read cursor (`&mut &[u8]`,
//! the same idiom the teacher crate uses throughout `decode.rs`: a
//! reference to a byte slice that each read call advances in place).

use byteorder::{BigEndian, ByteOrder};

use crate::buf::Buffer;
use crate::config::SKIP_MAX_DEPTH;
use crate::error::{Error, Result};
use crate::marker::Marker;
use crate::value::Kind;

// ---------------------------------------------------------------- encoders

/// Chooses fixint/u8/u16/u32/u64 by magnitude; always the shortest form.
pub fn encode_uint(buf: &mut Buffer, v: u64) -> Result<()> {
    if v <= 0x7f {
        buf.push(v as u8)
    } else if v <= u8::MAX as u64 {
        buf.push(Marker::UInt8.into())?;
        buf.push(v as u8)
    } else if v <= u16::MAX as u64 {
        buf.push(Marker::UInt16.into())?;
        let mut tmp = [0u8; 2];
        BigEndian::write_u16(&mut tmp, v as u16);
        buf.extend_from_slice(&tmp)
    } else if v <= u32::MAX as u64 {
        buf.push(Marker::UInt32.into())?;
        let mut tmp = [0u8; 4];
        BigEndian::write_u32(&mut tmp, v as u32);
        buf.extend_from_slice(&tmp)
    } else {
        buf.push(Marker::UInt64.into())?;
        let mut tmp = [0u8; 8];
        BigEndian::write_u64(&mut tmp, v);
        buf.extend_from_slice(&tmp)
    }
}

/// For `v >= 0` defers to [`encode_uint`]. Otherwise chooses
/// negative-fixint/i8/i16/i32/i64 by magnitude.
pub fn encode_int(buf: &mut Buffer, v: i64) -> Result<()> {
    if v >= 0 {
        return encode_uint(buf, v as u64);
    }
    if v >= -32 {
        buf.push(v as i8 as u8)
    } else if v >= i8::MIN as i64 {
        buf.push(Marker::Int8.into())?;
        buf.push(v as i8 as u8)
    } else if v >= i16::MIN as i64 {
        buf.push(Marker::Int16.into())?;
        let mut tmp = [0u8; 2];
        BigEndian::write_i16(&mut tmp, v as i16);
        buf.extend_from_slice(&tmp)
    } else if v >= i32::MIN as i64 {
        buf.push(Marker::Int32.into())?;
        let mut tmp = [0u8; 4];
        BigEndian::write_i32(&mut tmp, v as i32);
        buf.extend_from_slice(&tmp)
    } else {
        buf.push(Marker::Int64.into())?;
        let mut tmp = [0u8; 8];
        BigEndian::write_i64(&mut tmp, v);
        buf.extend_from_slice(&tmp)
    }
}

/// 5 bytes total: marker + big-endian IEEE-754 single.
pub fn encode_f32(buf: &mut Buffer, v: f32) -> Result<()> {
    buf.push(Marker::F32.into())?;
    let mut tmp = [0u8; 4];
    BigEndian::write_f32(&mut tmp, v);
    buf.extend_from_slice(&tmp)
}

/// 9 bytes total: marker + big-endian IEEE-754 double.
pub fn encode_f64(buf: &mut Buffer, v: f64) -> Result<()> {
    buf.push(Marker::F64.into())?;
    let mut tmp = [0u8; 8];
    BigEndian::write_f64(&mut tmp, v);
    buf.extend_from_slice(&tmp)
}

/// Chooses fixstr/str8/str16/str32 by length. The caller is responsible
/// for having already enforced domain length limits (`STR_MAX`/`FSTR_MAX`);
/// this function only picks the shortest MessagePack representation for
/// whatever length it's handed.
pub fn encode_str(buf: &mut Buffer, bytes: &[u8]) -> Result<()> {
    let len = bytes.len();
    if len <= 0x1f {
        buf.push(Marker::FixStr(len as u8).into())?;
    } else if len <= u8::MAX as usize {
        buf.push(Marker::Str8.into())?;
        buf.push(len as u8)?;
    } else if len <= u16::MAX as usize {
        buf.push(Marker::Str16.into())?;
        let mut tmp = [0u8; 2];
        BigEndian::write_u16(&mut tmp, len as u16);
        buf.extend_from_slice(&tmp)?;
    } else if len <= u32::MAX as usize {
        buf.push(Marker::Str32.into())?;
        let mut tmp = [0u8; 4];
        BigEndian::write_u32(&mut tmp, len as u32);
        buf.extend_from_slice(&tmp)?;
    } else {
        return Err(Error::Encode);
    }
    buf.extend_from_slice(bytes)
}

/// Chooses fixmap/map16/map32 by `n`.
pub fn encode_map_header(buf: &mut Buffer, n: u32) -> Result<()> {
    if n <= 0xf {
        buf.push(Marker::FixMap(n as u8).into())
    } else if n <= u16::MAX as u32 {
        buf.push(Marker::Map16.into())?;
        let mut tmp = [0u8; 2];
        BigEndian::write_u16(&mut tmp, n as u16);
        buf.extend_from_slice(&tmp)
    } else {
        buf.push(Marker::Map32.into())?;
        let mut tmp = [0u8; 4];
        BigEndian::write_u32(&mut tmp, n);
        buf.extend_from_slice(&tmp)
    }
}

/// Identical to [`encode_uint`] — a key is just an encoded value.
pub fn encode_uint_key(buf: &mut Buffer, v: u64) -> Result<()> {
    encode_uint(buf, v)
}

/// Identical to [`encode_str`].
pub fn encode_str_key(buf: &mut Buffer, bytes: &[u8]) -> Result<()> {
    encode_str(buf, bytes)
}

// ---------------------------------------------------------------- decoders

/// Advance past and return `n` bytes, or fail with [`Error::Decode`] if
/// fewer than `n` remain.
fn take<'a>(buf: &mut &'a [u8], n: usize) -> Result<&'a [u8]> {
    if buf.len() < n {
        return Err(Error::Decode);
    }
    let (data, rest) = buf.split_at(n);
    *buf = rest;
    Ok(data)
}

fn read_u8(buf: &mut &[u8]) -> Result<u8> {
    Ok(take(buf, 1)?[0])
}

fn read_i8(buf: &mut &[u8]) -> Result<i8> {
    Ok(take(buf, 1)?[0] as i8)
}

fn read_u16(buf: &mut &[u8]) -> Result<u16> {
    Ok(BigEndian::read_u16(take(buf, 2)?))
}

fn read_i16(buf: &mut &[u8]) -> Result<i16> {
    Ok(BigEndian::read_i16(take(buf, 2)?))
}

fn read_u32(buf: &mut &[u8]) -> Result<u32> {
    Ok(BigEndian::read_u32(take(buf, 4)?))
}

fn read_i32(buf: &mut &[u8]) -> Result<i32> {
    Ok(BigEndian::read_i32(take(buf, 4)?))
}

fn read_u64(buf: &mut &[u8]) -> Result<u64> {
    Ok(BigEndian::read_u64(take(buf, 8)?))
}

fn read_i64(buf: &mut &[u8]) -> Result<i64> {
    Ok(BigEndian::read_i64(take(buf, 8)?))
}

fn read_f32(buf: &mut &[u8]) -> Result<f32> {
    Ok(BigEndian::read_f32(take(buf, 4)?))
}

fn read_f64(buf: &mut &[u8]) -> Result<f64> {
    Ok(BigEndian::read_f64(take(buf, 8)?))
}

/// Read a single leading marker byte.
pub fn read_marker(buf: &mut &[u8]) -> Result<Marker> {
    Ok(Marker::from_u8(read_u8(buf)?))
}

/// Declared wire width of an integer, independent of its decoded value.
/// Drives the numeric widening table in [`decode_scalar`]: the table is
/// keyed on *which marker the encoder chose*, not on whether the decoded
/// value happens to also fit a narrower type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Width {
    W8,
    W16,
    W32,
    W64,
}

enum Wire<'a> {
    Uint(u64, Width),
    Int(i64, Width),
    F32(f32),
    F64(f64),
    Str(&'a [u8]),
    /// Recognized but never coercible to any scalar `Kind`: `nil`/`false`/
    /// `true`, or a nested map. `spec.md` §4.1 requires these be rejected
    /// with `TypeMismatch`, not the generic `Decode` a malformed/unknown
    /// marker gets.
    NotScalar,
}

fn read_wire<'a>(buf: &mut &'a [u8]) -> Result<Wire<'a>> {
    match read_marker(buf)? {
        Marker::PosFixInt(v) => Ok(Wire::Uint(v as u64, Width::W8)),
        Marker::UInt8 => Ok(Wire::Uint(read_u8(buf)? as u64, Width::W8)),
        Marker::UInt16 => Ok(Wire::Uint(read_u16(buf)? as u64, Width::W16)),
        Marker::UInt32 => Ok(Wire::Uint(read_u32(buf)? as u64, Width::W32)),
        Marker::UInt64 => Ok(Wire::Uint(read_u64(buf)?, Width::W64)),
        Marker::NegFixInt(v) => Ok(Wire::Int(v as i64, Width::W8)),
        Marker::Int8 => Ok(Wire::Int(read_i8(buf)? as i64, Width::W8)),
        Marker::Int16 => Ok(Wire::Int(read_i16(buf)? as i64, Width::W16)),
        Marker::Int32 => Ok(Wire::Int(read_i32(buf)? as i64, Width::W32)),
        Marker::Int64 => Ok(Wire::Int(read_i64(buf)?, Width::W64)),
        Marker::F32 => Ok(Wire::F32(read_f32(buf)?)),
        Marker::F64 => Ok(Wire::F64(read_f64(buf)?)),
        Marker::FixStr(len) => Ok(Wire::Str(take(buf, len as usize)?)),
        Marker::Str8 => {
            let len = read_u8(buf)? as usize;
            Ok(Wire::Str(take(buf, len)?))
        }
        Marker::Str16 => {
            let len = read_u16(buf)? as usize;
            Ok(Wire::Str(take(buf, len)?))
        }
        Marker::Str32 => {
            let len = read_u32(buf)? as usize;
            Ok(Wire::Str(take(buf, len)?))
        }
        Marker::Nil | Marker::False | Marker::True => Ok(Wire::NotScalar),
        Marker::FixMap(len) => {
            // Still a well-formed value on the wire, just never coercible
            // to a scalar `Kind` — skip it so the cursor ends up past it
            // like any other rejected-but-present entry value.
            skip_map_body(buf, len as u32)?;
            Ok(Wire::NotScalar)
        }
        Marker::Map16 => {
            let len = read_u16(buf)?;
            skip_map_body(buf, len as u32)?;
            Ok(Wire::NotScalar)
        }
        Marker::Map32 => {
            let len = read_u32(buf)?;
            skip_map_body(buf, len)?;
            Ok(Wire::NotScalar)
        }
        Marker::Unsupported(_) => Err(Error::Decode),
    }
}

/// Skip `pair_count` key/value pairs of an already-consumed map header,
/// so a rejected nested-map entry value still leaves the cursor positioned
/// correctly for whatever follows it on the wire.
fn skip_map_body(buf: &mut &[u8], pair_count: u32) -> Result<()> {
    for _ in 0..(2 * pair_count) {
        skip_value(buf)?;
    }
    Ok(())
}

/// A value decoded off the wire and coerced to a particular destination
/// [`Kind`]. String destinations (`Str`/`FStr`) both produce `Str`; the
/// destination-specific length bound was already enforced by
/// [`decode_scalar`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(&'a [u8]),
}

/// Decode the next MessagePack value and coerce it to `dest`, per the
/// widening table in `spec.md` §4.4:
///
/// - `u8→{u16,u32,u64}`, `u16→{u32,u64}`, `u32→u64` (always safe)
/// - `i8→{i16,i32,i64}`, `i16→{i32,i64}`, `i32→i64`
/// - `u8→{i16,i32,i64}`, `u16→{i32,i64}`, `u32→i64` (unsigned → signed, with headroom)
/// - `f32→f64`
///
/// Any wire value whose declared width is wider than `dest`, or whose kind
/// disagrees entirely (numeric vs. string, float vs. int), is rejected
/// with [`Error::TypeMismatch`]. Strings are accepted as long as their wire
/// length fits `dest`'s maximum, else [`Error::StrTooLong`].
pub fn decode_scalar<'a>(dest: Kind, buf: &mut &'a [u8]) -> Result<Scalar<'a>> {
    use Width::*;
    let wire = read_wire(buf)?;
    match (wire, dest) {
        (Wire::Str(bytes), Kind::Str) => {
            if bytes.len() > Kind::Str.max_len().unwrap() {
                return Err(Error::StrTooLong);
            }
            Ok(Scalar::Str(bytes))
        }
        (Wire::Str(bytes), Kind::FStr) => {
            if bytes.len() > Kind::FStr.max_len().unwrap() {
                return Err(Error::StrTooLong);
            }
            Ok(Scalar::Str(bytes))
        }
        (Wire::F32(v), Kind::F32) => Ok(Scalar::F32(v)),
        (Wire::F32(v), Kind::F64) => Ok(Scalar::F64(v as f64)),
        (Wire::F64(v), Kind::F64) => Ok(Scalar::F64(v)),

        (Wire::Uint(v, W8), Kind::U8) => Ok(Scalar::U8(v as u8)),
        (Wire::Uint(v, W8), Kind::U16) => Ok(Scalar::U16(v as u16)),
        (Wire::Uint(v, W8), Kind::U32) => Ok(Scalar::U32(v as u32)),
        (Wire::Uint(v, W8), Kind::U64) => Ok(Scalar::U64(v)),
        (Wire::Uint(v, W8), Kind::I16) => Ok(Scalar::I16(v as i16)),
        (Wire::Uint(v, W8), Kind::I32) => Ok(Scalar::I32(v as i32)),
        (Wire::Uint(v, W8), Kind::I64) => Ok(Scalar::I64(v as i64)),

        (Wire::Uint(v, W16), Kind::U16) => Ok(Scalar::U16(v as u16)),
        (Wire::Uint(v, W16), Kind::U32) => Ok(Scalar::U32(v as u32)),
        (Wire::Uint(v, W16), Kind::U64) => Ok(Scalar::U64(v)),
        (Wire::Uint(v, W16), Kind::I32) => Ok(Scalar::I32(v as i32)),
        (Wire::Uint(v, W16), Kind::I64) => Ok(Scalar::I64(v as i64)),

        (Wire::Uint(v, W32), Kind::U32) => Ok(Scalar::U32(v as u32)),
        (Wire::Uint(v, W32), Kind::U64) => Ok(Scalar::U64(v)),
        (Wire::Uint(v, W32), Kind::I64) => Ok(Scalar::I64(v as i64)),

        (Wire::Uint(v, W64), Kind::U64) => Ok(Scalar::U64(v)),

        (Wire::Int(v, W8), Kind::I8) => Ok(Scalar::I8(v as i8)),
        (Wire::Int(v, W8), Kind::I16) => Ok(Scalar::I16(v as i16)),
        (Wire::Int(v, W8), Kind::I32) => Ok(Scalar::I32(v as i32)),
        (Wire::Int(v, W8), Kind::I64) => Ok(Scalar::I64(v)),

        (Wire::Int(v, W16), Kind::I16) => Ok(Scalar::I16(v as i16)),
        (Wire::Int(v, W16), Kind::I32) => Ok(Scalar::I32(v as i32)),
        (Wire::Int(v, W16), Kind::I64) => Ok(Scalar::I64(v)),

        (Wire::Int(v, W32), Kind::I32) => Ok(Scalar::I32(v as i32)),
        (Wire::Int(v, W32), Kind::I64) => Ok(Scalar::I64(v)),

        (Wire::Int(v, W64), Kind::I64) => Ok(Scalar::I64(v)),

        _ => Err(Error::TypeMismatch),
    }
}

/// Read a map header (fixmap/map16/map32) and return its pair count.
pub fn decode_map_header(buf: &mut &[u8]) -> Result<usize> {
    match read_marker(buf)? {
        Marker::FixMap(len) => Ok(len as usize),
        Marker::Map16 => Ok(read_u16(buf)? as usize),
        Marker::Map32 => Ok(read_u32(buf)? as usize),
        _ => Err(Error::Decode),
    }
}

/// A decoded map key: either a normal entry index, or a bare string —
/// the legacy top-level form `pagein` tolerates only for the very first
/// pair in a page (`spec.md` §4.4 step 3a).
pub enum Key<'a> {
    Index(u64),
    LegacyStr(&'a [u8]),
}

/// Decode one map key, accepting either an unsigned integer or a string.
/// Any other wire type (signed int, float, map, nil, bool) is a decode
/// error — keys in this format are never anything else.
pub fn decode_key<'a>(buf: &mut &'a [u8]) -> Result<Key<'a>> {
    match read_wire(buf)? {
        Wire::Uint(v, _) => Ok(Key::Index(v)),
        Wire::Str(bytes) => Ok(Key::LegacyStr(bytes)),
        _ => Err(Error::Decode),
    }
}

/// Read a string value with no destination-kind length bound — used by
/// `peek_name`, which enforces its own caller-supplied output capacity
/// instead of `STR_MAX`/`FSTR_MAX`.
pub fn decode_str_any<'a>(buf: &mut &'a [u8]) -> Result<&'a [u8]> {
    match read_wire(buf)? {
        Wire::Str(bytes) => Ok(bytes),
        _ => Err(Error::Decode),
    }
}

/// Iteratively skip over one MessagePack value, including nested maps, up
/// to [`SKIP_MAX_DEPTH`] levels deep. Used for forward-compatible
/// unknown-key skipping in `pagein`, and to discard the reserved key-0
/// value when it isn't needed.
///
/// Implemented with a fixed-size counter array rather than native
/// recursion, so worst-case stack cost is exactly `4 * SKIP_MAX_DEPTH`
/// bytes regardless of input. Any map nested deeper than the budget
/// returns [`Error::Decode`].
pub fn skip_value(buf: &mut &[u8]) -> Result<()> {
    let mut remaining = [0u32; SKIP_MAX_DEPTH];
    let mut depth: usize = 0;

    consume_one(buf, &mut remaining, &mut depth)?;
    loop {
        while depth > 0 && remaining[depth - 1] == 0 {
            depth -= 1;
        }
        if depth == 0 {
            return Ok(());
        }
        consume_one(buf, &mut remaining, &mut depth)?;
    }
}

/// Consume exactly one value (decrementing the current map level's
/// remaining-item count first, if any level is open), pushing a new level
/// if the value is itself a non-empty map.
fn consume_one(buf: &mut &[u8], remaining: &mut [u32; SKIP_MAX_DEPTH], depth: &mut usize) -> Result<()> {
    if *depth > 0 {
        remaining[*depth - 1] -= 1;
    }
    match read_marker(buf)? {
        Marker::Nil | Marker::False | Marker::True => {}
        Marker::PosFixInt(_) | Marker::NegFixInt(_) => {}
        Marker::UInt8 | Marker::Int8 => {
            take(buf, 1)?;
        }
        Marker::UInt16 | Marker::Int16 => {
            take(buf, 2)?;
        }
        Marker::UInt32 | Marker::Int32 | Marker::F32 => {
            take(buf, 4)?;
        }
        Marker::UInt64 | Marker::Int64 | Marker::F64 => {
            take(buf, 8)?;
        }
        Marker::FixStr(len) => {
            take(buf, len as usize)?;
        }
        Marker::Str8 => {
            let len = read_u8(buf)? as usize;
            take(buf, len)?;
        }
        Marker::Str16 => {
            let len = read_u16(buf)? as usize;
            take(buf, len)?;
        }
        Marker::Str32 => {
            let len = read_u32(buf)? as usize;
            take(buf, len)?;
        }
        Marker::FixMap(len) => push_map_level(remaining, depth, 2 * len as u32)?,
        Marker::Map16 => {
            let len = read_u16(buf)?;
            push_map_level(remaining, depth, 2 * len as u32)?;
        }
        Marker::Map32 => {
            let len = read_u32(buf)?;
            push_map_level(remaining, depth, 2 * len)?;
        }
        Marker::Unsupported(_) => return Err(Error::Decode),
    }
    Ok(())
}

fn push_map_level(remaining: &mut [u32; SKIP_MAX_DEPTH], depth: &mut usize, item_units: u32) -> Result<()> {
    if item_units == 0 {
        return Ok(());
    }
    if *depth >= SKIP_MAX_DEPTH {
        return Err(Error::Decode);
    }
    remaining[*depth] = item_units;
    *depth += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(f: impl FnOnce(&mut Buffer)) -> [u8; 16] {
        let mut backing = [0u8; 16];
        let mut buf = Buffer::new(&mut backing);
        f(&mut buf);
        let mut out = [0u8; 16];
        out[..buf.len()].copy_from_slice(buf.as_slice());
        out
    }

    #[test]
    fn minimum_encoding_uint_s2() {
        let mut backing = [0u8; 16];
        let mut buf = Buffer::new(&mut backing);
        encode_uint(&mut buf, 127).unwrap();
        assert_eq!(buf.as_slice(), &[0x7f]);

        let mut backing = [0u8; 16];
        let mut buf = Buffer::new(&mut backing);
        encode_uint(&mut buf, 128).unwrap();
        assert_eq!(buf.as_slice(), &[0xcc, 0x80]);

        let mut backing = [0u8; 16];
        let mut buf = Buffer::new(&mut backing);
        encode_uint(&mut buf, 256).unwrap();
        assert_eq!(buf.as_slice(), &[0xcd, 0x01, 0x00]);

        let mut backing = [0u8; 16];
        let mut buf = Buffer::new(&mut backing);
        encode_uint(&mut buf, 65536).unwrap();
        assert_eq!(buf.as_slice(), &[0xce, 0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn minimum_encoding_int_s2() {
        let mut backing = [0u8; 16];
        let mut buf = Buffer::new(&mut backing);
        encode_int(&mut buf, -1).unwrap();
        assert_eq!(buf.as_slice(), &[0xff]);

        let mut backing = [0u8; 16];
        let mut buf = Buffer::new(&mut backing);
        encode_int(&mut buf, -33).unwrap();
        assert_eq!(buf.as_slice(), &[0xd0, 0xdf]);
    }

    #[test]
    fn widening_u8_to_u64() {
        let bytes = encoded(|b| encode_uint(b, 9).unwrap());
        let mut cursor: &[u8] = &bytes;
        match decode_scalar(Kind::U64, &mut cursor).unwrap() {
            Scalar::U64(9) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn narrowing_rejected() {
        let mut backing = [0u8; 16];
        let mut buf = Buffer::new(&mut backing);
        encode_uint(&mut buf, 1000).unwrap();
        let mut cursor: &[u8] = buf.as_slice();
        assert_eq!(decode_scalar(Kind::U8, &mut cursor), Err(Error::TypeMismatch));
    }

    #[test]
    fn unsigned_to_signed_headroom() {
        let mut backing = [0u8; 16];
        let mut buf = Buffer::new(&mut backing);
        encode_uint(&mut buf, 200).unwrap(); // encodes as UInt8 (200 > 127)
        let mut cursor: &[u8] = buf.as_slice();
        // u8 -> i8 is NOT in the widening table (no headroom), even though
        // 200 doesn't fit i8 anyway.
        assert_eq!(decode_scalar(Kind::I8, &mut cursor), Err(Error::TypeMismatch));

        let mut cursor: &[u8] = buf.as_slice();
        match decode_scalar(Kind::I16, &mut cursor).unwrap() {
            Scalar::I16(200) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn skip_all_types_s3() {
        let mut backing = [0u8; 256];
        let mut buf = Buffer::new(&mut backing);
        encode_uint(&mut buf, 5).unwrap();
        encode_int(&mut buf, -5).unwrap();
        encode_f32(&mut buf, 1.5).unwrap();
        encode_f64(&mut buf, 2.5).unwrap();
        encode_str(&mut buf, b"hi").unwrap();
        encode_map_header(&mut buf, 1).unwrap();
        encode_uint(&mut buf, 1).unwrap();
        encode_uint(&mut buf, 2).unwrap();
        buf.push(Marker::Nil.into()).unwrap();
        buf.push(Marker::False.into()).unwrap();
        buf.push(Marker::True.into()).unwrap();

        let total = buf.len();
        let mut cursor: &[u8] = buf.as_slice();
        for _ in 0..9 {
            skip_value(&mut cursor).unwrap();
        }
        assert_eq!(cursor.len(), 0);
        assert_eq!(total, buf.as_slice().len());
    }

    #[test]
    fn skip_depth_bound_s6() {
        // Build SKIP_MAX_DEPTH nested single-entry maps, with a scalar at
        // the bottom.
        let mut backing = [0u8; 1024];
        let mut buf = Buffer::new(&mut backing);
        for _ in 0..SKIP_MAX_DEPTH {
            encode_map_header(&mut buf, 1).unwrap();
            encode_uint(&mut buf, 0).unwrap();
        }
        encode_uint(&mut buf, 42).unwrap();

        let mut cursor: &[u8] = buf.as_slice();
        skip_value(&mut cursor).unwrap();
        assert_eq!(cursor.len(), 0);

        // One level deeper must fail.
        let mut backing2 = [0u8; 1024];
        let mut buf2 = Buffer::new(&mut backing2);
        for _ in 0..(SKIP_MAX_DEPTH + 1) {
            encode_map_header(&mut buf2, 1).unwrap();
            encode_uint(&mut buf2, 0).unwrap();
        }
        encode_uint(&mut buf2, 42).unwrap();
        let mut cursor2: &[u8] = buf2.as_slice();
        assert_eq!(skip_value(&mut cursor2), Err(Error::Decode));
    }

    #[test]
    fn random_uint_roundtrip_at_same_width() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let v: u64 = rng.gen();
            let mut backing = [0u8; 16];
            let mut buf = Buffer::new(&mut backing);
            encode_uint(&mut buf, v).unwrap();
            let mut cursor: &[u8] = buf.as_slice();
            match decode_scalar(Kind::U64, &mut cursor).unwrap() {
                Scalar::U64(decoded) => assert_eq!(decoded, v),
                other => panic!("unexpected {:?}", other),
            }
            assert!(cursor.is_empty());
        }
    }

    #[test]
    fn random_str_roundtrip_via_skip() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let len = rng.gen_range(0..=40);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let mut backing = [0u8; 64];
            let mut buf = Buffer::new(&mut backing);
            encode_str(&mut buf, &bytes).unwrap();
            let mut cursor: &[u8] = buf.as_slice();
            skip_value(&mut cursor).unwrap();
            assert!(cursor.is_empty());
        }
    }
}
