use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::LedgerError;

/// StagedFile holds new contents for `target` in a synced temporary file in
/// the same directory. Nothing at `target` changes until `commit`; dropping
/// an uncommitted StagedFile removes the temporary file.
#[derive(Debug)]
pub struct StagedFile {
    tmp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    /// Write `bytes` to a temporary file next to `target` and sync it.
    pub fn stage(target: &Path, bytes: &[u8]) -> Result<Self, LedgerError> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| io_error(target, e))?;
        tmp.write_all(bytes).map_err(|e| io_error(target, e))?;
        tmp.as_file().sync_all().map_err(|e| io_error(target, e))?;
        Ok(Self {
            tmp,
            target: target.to_path_buf(),
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Rename the staged file over the target.
    pub fn commit(self) -> Result<(), LedgerError> {
        let Self { tmp, target } = self;
        tmp.persist(&target).map_err(|e| io_error(&target, e.error))?;
        Ok(())
    }
}

/// Replace `path` with `bytes` via a synced temporary file and a rename.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), LedgerError> {
    StagedFile::stage(path, bytes)?.commit()
}

pub(crate) fn io_error(path: &Path, e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Io(format!("{}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_staged_file_is_invisible_until_commit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ledger.xlsx");
        std::fs::write(&path, b"old").unwrap();

        let staged = StagedFile::stage(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"old");
        assert_eq!(staged.target(), path.as_path());

        staged.commit().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_dropped_stage_leaves_target_alone() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ledger.xlsx");
        std::fs::write(&path, b"old").unwrap();

        drop(StagedFile::stage(&path, b"new").unwrap());
        assert_eq!(std::fs::read(&path).unwrap(), b"old");
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_stage_into_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("ledger.xlsx");

        let err = StagedFile::stage(&path, b"new").unwrap_err();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
