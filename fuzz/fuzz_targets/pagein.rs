#![no_main]
use libfuzzer_sys::fuzz_target;

use cfgpack::{pagein, pagein_remap, Context, Default, Entry, Kind, RemapEntry, Schema, Value};

const ENTRIES: [Entry; 4] = [
    Entry::with_default(1, "timeout_ms", Kind::U32, Default::U32(5_000)),
    Entry::new(2, "retries", Kind::U8),
    Entry::new(3, "iface", Kind::FStr),
    Entry::new(4, "label", Kind::Str),
];

const REMAP: [RemapEntry; 2] = [(9, 1), (10, 2)];

fuzz_target!(|data: &[u8]| {
    let schema = Schema::new("fuzz", 1, &ENTRIES);

    let mut values = [Value::U8(0); 4];
    let mut pool = [0u8; 64];
    let mut offsets = [0u16; 4];
    if let Ok(mut ctx) = Context::init(&schema, &mut values, &mut pool, &mut offsets) {
        let _ = pagein(&mut ctx, data);
    }

    let mut values = [Value::U8(0); 4];
    let mut pool = [0u8; 64];
    let mut offsets = [0u16; 4];
    if let Ok(mut ctx) = Context::init(&schema, &mut values, &mut pool, &mut offsets) {
        let _ = pagein_remap(&mut ctx, data, &REMAP);
    }
});
