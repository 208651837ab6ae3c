//! Text I/O for source and document files

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// UTF-8 byte-order mark as it appears after decoding.
const BOM: char = '\u{feff}';

/// Write content atomically to a file with locking.
///
/// Writes to a sibling temp file under an exclusive advisory lock, then
/// renames it over the destination so readers never see a partial document.
/// The temp file is removed if any step fails.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = path.to_native();

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp = temp_sibling(&target);
    let result = fill_temp(&temp, &target, content)
        .and_then(|()| fs::rename(&temp, &target).map_err(|e| Error::io(&target, e)));

    if result.is_err() && temp.exists() {
        if let Err(e) = fs::remove_file(&temp) {
            tracing::warn!(path = %temp.display(), error = %e, "Failed to remove temp file");
        }
    }
    result
}

/// `.<name>.<pid>.tmp` next to `target`, so the rename stays on one filesystem.
fn temp_sibling(target: &Path) -> PathBuf {
    let name = target.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    target.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

fn fill_temp(temp: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp)
        .map_err(|e| Error::io(temp, e))?;

    let locked = || Error::LockFailed {
        path: target.to_path_buf(),
    };
    file.lock_exclusive().map_err(|_| locked())?;
    file.write_all(content).map_err(|e| Error::io(temp, e))?;
    file.sync_all().map_err(|e| Error::io(temp, e))?;
    file.unlock().map_err(|_| locked())
}

/// Read a UTF-8 text file, dropping a leading byte-order mark if present.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let mut content = fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))?;
    if content.starts_with(BOM) {
        content.drain(..BOM.len_utf8());
    }
    Ok(content)
}

/// Write text atomically as UTF-8 without a byte-order mark.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    write_atomic(path, content.as_bytes())
}

/// Resolve `path` to an absolute directory path.
///
/// Uses `dunce` so Windows paths stay free of the `\\?\` prefix in messages.
pub fn canonical_dir(path: impl AsRef<std::path::Path>) -> Result<NormalizedPath> {
    let path = path.as_ref();
    let resolved = dunce::canonicalize(path).map_err(|e| Error::io(path, e))?;
    if !resolved.is_dir() {
        return Err(Error::io(
            &resolved,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }
    Ok(NormalizedPath::new(resolved))
}
