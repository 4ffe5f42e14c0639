use std::path::Path;

use crate::atomic::StagedFile;
use crate::error::LedgerError;
use crate::table::Table;

/// TableStore loads and saves single-sheet tables on disk.
///
/// The default implementation (`XlsxStore`) reads and writes `.xlsx`
/// workbooks. `persist` is split into `encode` + `stage` + commit so a caller
/// that owns several tables can encode and stage all of them before any file
/// is replaced.
pub trait TableStore {
    /// Load the table at `path`, or return a new table holding `headers`
    /// if nothing exists there yet. Fails with `LedgerError::Io` if the path
    /// exists but is not a readable table file.
    fn open_or_create(&self, path: &Path, headers: &[&str]) -> Result<Table, LedgerError>;

    /// Serialize a table to the bytes of a complete file.
    fn encode(&self, table: &Table) -> Result<Vec<u8>, LedgerError>;

    /// Prepare `bytes` as the next contents of `path` without touching it.
    /// `StagedFile::commit` replaces the file; either the old or the new
    /// contents survive an interrupted commit, never a mix.
    fn stage(&self, path: &Path, bytes: &[u8]) -> Result<StagedFile, LedgerError>;

    /// Encode and write a table, fully overwriting prior contents.
    fn persist(&self, table: &Table, path: &Path) -> Result<(), LedgerError> {
        let bytes = self.encode(table)?;
        self.stage(path, &bytes)?.commit()
    }
}
