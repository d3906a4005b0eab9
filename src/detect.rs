use std::path::Path;

/// Supported input compressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

impl Compression {
    /// Returns true when the input is compressed.
    pub fn is_compressed(self) -> bool {
        !matches!(self, Compression::None)
    }
}

/// Detects input compression from the file extension.
///
/// BPROM dumps carry no reliable extension of their own (Galaxy hands
/// them out as `.txt`, pipelines rename them freely), so anything that
/// is not a known compression suffix is treated as plain text.
///
/// # Example
///
/// ```rust, ignore
/// use bprom2gff::detect::{detect_compression, Compression};
/// use std::path::Path;
///
/// assert_eq!(detect_compression(Path::new("run.txt.gz")), Compression::Gzip);
/// assert_eq!(detect_compression(Path::new("run.txt")), Compression::None);
/// ```
pub fn detect_compression(path: &Path) -> Compression {
    match extension_lowercase(path).as_deref() {
        Some("gz") | Some("gzip") => Compression::Gzip,
        _ => Compression::None,
    }
}

/// Extracts the lowercase extension from a path.
fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
