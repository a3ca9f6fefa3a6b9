use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Write `lines` to a fresh temp file, one per line. The file is removed when
/// the handle is dropped.
pub fn write_log<S: AsRef<str>>(lines: &[S]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp log");
    for line in lines {
        writeln!(file, "{}", line.as_ref()).expect("failed to write temp log");
    }
    file.flush().expect("failed to flush temp log");
    file
}
