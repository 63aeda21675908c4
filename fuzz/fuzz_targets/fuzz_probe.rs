#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = metron::get_dimensions(std::io::Cursor::new(data));
});
