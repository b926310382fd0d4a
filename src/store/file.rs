use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::app::{AppcastError, Result};
use crate::store::Store;

/// Filesystem store. Saves go through a temporary file next to the real
/// appcast (symlinks resolved) that is renamed over it, so an interrupted
/// write never leaves a truncated appcast behind. When the directory is
/// not writable, or the file's owner can't be kept, the file is
/// overwritten in place instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    fn replace(target: &Path, xml: &[u8]) -> io::Result<()> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(xml)?;
        tmp.as_file().sync_all()?;

        // Temp files are created owner-only; keep the appcast's own mode and owner.
        if let Ok(meta) = fs::metadata(target) {
            fs::set_permissions(tmp.path(), meta.permissions())?;
            #[cfg(unix)]
            keep_owner(tmp.path(), &meta)?;
        }

        tmp.persist(target).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(unix)]
fn keep_owner(path: &Path, original: &fs::Metadata) -> io::Result<()> {
    use std::os::unix::fs::{chown, MetadataExt};

    let current = fs::metadata(path)?;
    if current.uid() == original.uid() && current.gid() == original.gid() {
        return Ok(());
    }
    chown(path, Some(original.uid()), Some(original.gid()))
}

fn io_error(path: &Path, source: io::Error) -> AppcastError {
    AppcastError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl Store for FileStore {
    fn load(&self, path: &Path) -> Result<Vec<u8>> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppcastError::NotFound(path.to_path_buf()),
            _ => io_error(path, e),
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "Read appcast");
        Ok(bytes)
    }

    fn save(&self, path: &Path, xml: &[u8]) -> Result<()> {
        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        match Self::replace(&target, xml) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                debug!(path = %target.display(), error = %e, "Writing appcast in place");
                fs::write(&target, xml).map_err(|e| io_error(path, e))?;
            }
            Err(e) => return Err(io_error(path, e)),
        }

        debug!(path = %path.display(), bytes = xml.len(), "Wrote appcast");
        Ok(())
    }
}
