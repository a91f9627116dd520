#![no_main]
use libfuzzer_sys::fuzz_target;
use pcx_decode::low_level::rle::Decompressor;

fuzz_target!(|data: &[u8]| {
    let mut decompressor = Decompressor::new(data);
    let mut count = 0;
    while decompressor.next().is_some() {
        count += 1;
        assert!(decompressor.position() <= data.len());
    }
    assert!(count <= data.len() * 63);
});
