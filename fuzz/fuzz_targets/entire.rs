#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(image) = pcx_decode::decode(data) else {
        return;
    };

    assert_eq!(image.pixels().len(), image.width() as usize * image.height() as usize);
    assert_eq!(Ok(&image), pcx_decode::decode(data).as_ref());
});
