#![no_main]
use libfuzzer_sys::fuzz_target;

use cfgpack::peek_name;

fuzz_target!(|data: &[u8]| {
    let mut out = [0u8; 64];
    let _ = peek_name(data, &mut out);
});
