use bprom2gff::detect::{detect_compression, Compression};
use std::path::Path;

/// Plain text dumps are passed through untouched.
#[test]
fn detect_plain_text() {
    let compression = detect_compression(Path::new("bprom_output.txt"));
    assert_eq!(compression, Compression::None);
    assert!(!compression.is_compressed());
}

/// Gzipped dumps are recognized by their suffix.
#[test]
fn detect_gzip() {
    let compression = detect_compression(Path::new("bprom_output.txt.gz"));
    assert_eq!(compression, Compression::Gzip);
    assert!(compression.is_compressed());
}

/// Extension matching is case-insensitive.
#[test]
fn detect_gzip_uppercase() {
    assert_eq!(
        detect_compression(Path::new("bprom_output.txt.GZ")),
        Compression::Gzip
    );
}

/// Files without any extension are treated as plain text.
#[test]
fn detect_no_extension() {
    assert_eq!(
        detect_compression(Path::new("bprom_output")),
        Compression::None
    );
}
