use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::decode;

// Each `.pcx` file is compared against a `.png` with the same name.
fn test_file(path: &Path) {
    print!("{} ", path.display());

    let reference_image = image::open(path.with_extension("png")).unwrap().to_rgb8();

    let data = fs::read(path).unwrap();
    let pcx = decode(&data).unwrap();
    assert_eq!(pcx.dimensions(), reference_image.dimensions());

    for (x, y, reference_pixel) in reference_image.enumerate_pixels() {
        assert_eq!(pcx.pixel(x, y), Some(reference_pixel.0), "pixel ({}, {})", x, y);
    }

    println!("- Ok.");
}

fn test_files(path: &str) {
    println!("Testing samples at {}", path);
    for entry in WalkDir::new(path) {
        let entry = entry.unwrap();

        if let Some(ext) = entry.path().extension() {
            if ext.eq_ignore_ascii_case("pcx") {
                test_file(entry.path())
            }
        }
    }
}

#[test]
fn samples() {
    let samples_path = env!("CARGO_MANIFEST_DIR").to_string() + "/test-data";
    if Path::new(&samples_path).is_dir() {
        test_files(&samples_path);
    }
}

#[test]
fn samples_env() {
    if let Some(samples_path) = option_env!("PCX_DECODE_SAMPLES") {
        test_files(samples_path);
    }
}
