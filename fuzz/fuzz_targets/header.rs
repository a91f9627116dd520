#![no_main]
use libfuzzer_sys::fuzz_target;
use pcx_decode::low_level::Header;

fuzz_target!(|data: &[u8]| {
    // Check that it parses without a panic.
    if let Ok(header) = Header::parse(data) {
        assert!(header.width() >= 1 && header.height() >= 1);
    }
});
