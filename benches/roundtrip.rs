//! Benchmarks the hot path any embedded caller actually takes repeatedly:
//! `pageout` on a live `Context`, and `pagein` back into a freshly reset
//! one. Mirrors the teacher's own `benches/log.rs`-shaped criterion setup
//! (one `Criterion::bench_function` per operation, `black_box` on the
//! moving parts) adapted to this crate's borrowed-storage `Context`.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cfgpack::{pagein, pageout, Buffer, Context, Default, Entry, Kind, Schema, Value};

const ENTRIES: [Entry; 5] = [
    Entry::with_default(1, "timeout_ms", Kind::U32, Default::U32(5_000)),
    Entry::new(2, "retries", Kind::U8),
    Entry::new(3, "iface", Kind::FStr),
    Entry::new(4, "label", Kind::Str),
    Entry::with_default(5, "ratio", Kind::F32, Default::F32(1.0)),
];

fn schema() -> Schema<'static> {
    Schema::new("bench", 1, &ENTRIES)
}

fn populated_ctx<'a>(
    schema: &'a Schema<'a>,
    values: &'a mut [Value],
    pool: &'a mut [u8],
    offsets: &'a mut [u16],
) -> Context<'a> {
    let mut ctx = Context::init(schema, values, pool, offsets).unwrap();
    ctx.set_u8(1, 3).unwrap();
    ctx.set_str(2, b"eth0").unwrap();
    ctx.set_str(3, b"a reasonably sized label string").unwrap();
    ctx.set_f32(4, 2.5).unwrap();
    ctx
}

fn bench_pageout(c: &mut Criterion) {
    let schema = schema();
    let mut values = [Value::U8(0); 5];
    let mut pool = [0u8; 128];
    let mut offsets = [0u16; 5];
    let ctx = populated_ctx(&schema, &mut values, &mut pool, &mut offsets);

    c.bench_function("pageout", |b| {
        b.iter(|| {
            let mut backing = [0u8; 256];
            let mut buf = Buffer::new(&mut backing);
            pageout(black_box(&ctx), &mut buf).unwrap();
            black_box(buf.len())
        })
    });
}

fn bench_pagein(c: &mut Criterion) {
    let schema = schema();
    let mut values = [Value::U8(0); 5];
    let mut pool = [0u8; 128];
    let mut offsets = [0u16; 5];
    let ctx = populated_ctx(&schema, &mut values, &mut pool, &mut offsets);

    let mut page_backing = [0u8; 256];
    let mut page = Buffer::new(&mut page_backing);
    pageout(&ctx, &mut page).unwrap();
    let page_bytes = page.as_slice();

    c.bench_function("pagein", |b| {
        b.iter(|| {
            let mut values = [Value::U8(0); 5];
            let mut pool = [0u8; 128];
            let mut offsets = [0u16; 5];
            let mut ctx = Context::init(&schema, &mut values, &mut pool, &mut offsets).unwrap();
            pagein(&mut ctx, black_box(page_bytes)).unwrap();
            black_box(ctx.get_size())
        })
    });
}

criterion_group!(benches, bench_pageout, bench_pagein);
criterion_main!(benches);
