use std::io::Write;
use std::path::Path;

/// Writes `data` to `path` through a temporary file of the same folder, renamed
/// over `path` once fully written and synced.
///
/// If anything fails, `path` is left untouched and the temporary file is removed.
pub(crate) fn write_atomically(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(folder)?;
    file.write_all(data)?;
    file.as_file().sync_all()?;
    let _ = file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
