//! `pageout`: serialize a [`Context`]'s present entries to the wire.

use crate::buf::Buffer;
use crate::codec::{encode_f32, encode_f64, encode_int, encode_map_header, encode_str, encode_str_key, encode_uint, encode_uint_key};
use crate::error::Result;
use crate::store::Context;
use crate::value::Value;

/// Serialize `ctx` into `out`: key `0` holds the schema name, followed by
/// one key-value pair per present entry (in schema declaration order),
/// each using the shortest possible MessagePack encoding. Absent entries
/// are omitted entirely.
///
/// Returns the number of bytes written.
pub fn pageout(ctx: &Context, out: &mut Buffer) -> Result<usize> {
    let present_count = ctx.get_size();
    encode_map_header(out, present_count as u32 + 1)?;

    encode_uint_key(out, 0)?;
    encode_str_key(out, ctx.schema().map_name.as_bytes())?;

    for slot in 0..ctx.entry_count() {
        if !ctx.is_present(slot) {
            continue;
        }
        let entry = ctx.schema().entries[slot];
        encode_uint_key(out, entry.index as u64)?;
        match ctx.values()[slot] {
            Value::U8(v) => encode_uint(out, v as u64)?,
            Value::U16(v) => encode_uint(out, v as u64)?,
            Value::U32(v) => encode_uint(out, v as u64)?,
            Value::U64(v) => encode_uint(out, v)?,
            Value::I8(v) => encode_int(out, v as i64)?,
            Value::I16(v) => encode_int(out, v as i64)?,
            Value::I32(v) => encode_int(out, v as i64)?,
            Value::I64(v) => encode_int(out, v)?,
            Value::F32(v) => encode_f32(out, v)?,
            Value::F64(v) => encode_f64(out, v)?,
            Value::Str { offset, len } => {
                let bytes = ctx.pool().read(offset, len as usize)?;
                encode_str(out, bytes)?;
            }
            Value::FStr { offset, len } => {
                let bytes = ctx.pool().read(offset, len as usize)?;
                encode_str(out, bytes)?;
            }
        }
    }

    Ok(out.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Entry, Schema};
    use crate::value::{Default, Kind};

    #[test]
    fn smoke_s1() {
        const ENTRIES: [Entry; 2] = [
            Entry::with_default(1, "timeout", Kind::U16, Default::U16(30)),
            Entry::new(2, "label", Kind::FStr),
        ];
        let schema = Schema::new("net", 1, &ENTRIES);

        let mut values = [Value::U8(0); 2];
        let mut pool_bytes = [0u8; 32];
        let mut slot_offsets = [0u16; 2];
        let mut ctx = Context::init(&schema, &mut values, &mut pool_bytes, &mut slot_offsets).unwrap();
        ctx.set_str(1, b"eth0").unwrap();

        let mut backing = [0u8; 64];
        let mut buf = Buffer::new(&mut backing);
        let n = pageout(&ctx, &mut buf).unwrap();
        assert!(n > 0);
        // map header + key0/name + key1/timeout + key2/label = 4 pairs total
        assert_eq!(buf.as_slice()[0], 0x80 | 3);
    }
}
