//! Cross-cutting integration tests exercising the public API the way a
//! caller would: build a `Context` over a literal schema, `pageout` it,
//! and `pagein`/`pagein_remap`/`peek_name` the result back.

use cfgpack::{pagein, pagein_remap, peek_name, pageout};
use cfgpack::{Buffer, Context, Default, Entry, Error, Kind, Schema, Value};

fn net_schema() -> Schema<'static> {
    const ENTRIES: [Entry; 3] = [
        Entry::with_default(1, "timeout_ms", Kind::U32, Default::U32(5_000)),
        Entry::new(2, "retries", Kind::U8),
        Entry::new(3, "iface", Kind::FStr),
    ];
    Schema::new("net", 1, &ENTRIES)
}

#[test]
fn full_roundtrip_preserves_values() {
    let schema = net_schema();
    let mut values = [Value::U8(0); 3];
    let mut pool = [0u8; 64];
    let mut offsets = [0u16; 3];
    let mut ctx = Context::init(&schema, &mut values, &mut pool, &mut offsets).unwrap();

    ctx.set_u8(1, 3).unwrap();
    ctx.set_str(2, b"eth0").unwrap();

    let mut buf_backing = [0u8; 128];
    let mut buf = Buffer::new(&mut buf_backing);
    let n = pageout(&ctx, &mut buf).unwrap();
    assert!(n > 0);

    ctx.reset_to_defaults().unwrap();
    assert_eq!(ctx.get_u32(0).unwrap(), 5_000);
    assert!(!ctx.is_present(1));

    pagein(&mut ctx, buf.as_slice()).unwrap();
    assert_eq!(ctx.get_u32(0).unwrap(), 5_000);
    assert_eq!(ctx.get_u8(1).unwrap(), 3);
    assert_eq!(ctx.get_str(2).unwrap(), b"eth0");
}

#[test]
fn peek_name_reads_the_schema_name_without_touching_a_store() {
    let schema = net_schema();
    let mut values = [Value::U8(0); 3];
    let mut pool = [0u8; 64];
    let mut offsets = [0u16; 3];
    let ctx = Context::init(&schema, &mut values, &mut pool, &mut offsets).unwrap();

    let mut buf_backing = [0u8; 128];
    let mut buf = Buffer::new(&mut buf_backing);
    pageout(&ctx, &mut buf).unwrap();

    let mut out = [0u8; 8];
    assert_eq!(peek_name(buf.as_slice(), &mut out).unwrap(), "net");
}

#[test]
fn migration_via_pagein_remap_widens_and_restores_defaults() {
    // v1 only ever shipped one entry, under a different index and a
    // narrower width than v2 uses.
    const OLD_ENTRIES: [Entry; 1] = [Entry::new(9, "timeout_ms", Kind::U16)];
    let old_schema = Schema::new("net", 1, &OLD_ENTRIES);
    let mut old_values = [Value::U8(0); 1];
    let mut old_pool = [0u8; 8];
    let mut old_offsets = [0u16; 1];
    let mut old_ctx = Context::init(&old_schema, &mut old_values, &mut old_pool, &mut old_offsets).unwrap();
    old_ctx.set_u16(0, 1_500).unwrap();

    let mut page_backing = [0u8; 64];
    let mut page = Buffer::new(&mut page_backing);
    pageout(&old_ctx, &mut page).unwrap();

    // v2 renumbers "timeout_ms" 9 -> 1 and widens it to u32; "retries" was
    // never in v1's page at all, so it falls back to absent (no default).
    let new_schema = net_schema();
    let mut new_values = [Value::U8(0); 3];
    let mut new_pool = [0u8; 64];
    let mut new_offsets = [0u16; 3];
    let mut new_ctx = Context::init(&new_schema, &mut new_values, &mut new_pool, &mut new_offsets).unwrap();

    pagein_remap(&mut new_ctx, page.as_slice(), &[(9, 1)]).unwrap();
    assert_eq!(new_ctx.get_u32(0).unwrap(), 1_500);
    assert_eq!(new_ctx.get_u8(1), Err(Error::Missing));
    assert_eq!(new_ctx.get_size(), 1);
}

#[test]
fn unknown_keys_are_forward_compatible() {
    // map(2){0: "net", 2: 9} — key 0 (name) plus "retries" (index 2) set to
    // 9. Hand-built so a third, unknown key (42) can be spliced in between
    // the two real pairs without going through `pageout`.
    let without_extra: [u8; 8] = [0x82, 0x00, 0xa3, b'n', b'e', b't', 0x02, 0x09];
    // map(3){0: "net", 42: 1, 2: 9}
    let with_extra: [u8; 10] = [0x83, 0x00, 0xa3, b'n', b'e', b't', 0x2a, 0x01, 0x02, 0x09];

    let schema = net_schema();

    let mut values_a = [Value::U8(0); 3];
    let mut pool_a = [0u8; 64];
    let mut offsets_a = [0u16; 3];
    let mut ctx_a = Context::init(&schema, &mut values_a, &mut pool_a, &mut offsets_a).unwrap();
    pagein(&mut ctx_a, &without_extra).unwrap();

    let mut values_b = [Value::U8(0); 3];
    let mut pool_b = [0u8; 64];
    let mut offsets_b = [0u16; 3];
    let mut ctx_b = Context::init(&schema, &mut values_b, &mut pool_b, &mut offsets_b).unwrap();
    pagein(&mut ctx_b, &with_extra).unwrap();

    assert_eq!(ctx_a.get_size(), ctx_b.get_size());
    assert_eq!(ctx_a.get_u8(1).unwrap(), ctx_b.get_u8(1).unwrap());
    assert_eq!(ctx_a.get_u32(0).unwrap(), ctx_b.get_u32(0).unwrap());
}
