use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Where the ledgers of one project live.
///
/// Ledger files sit next to the project file and are named after it:
/// `kitchen.blend` → `kitchen_ldsp.xlsx`, `kitchen_hdf.xlsx`,
/// `kitchen_edging.json`. Each path can be overridden explicitly.
#[derive(Debug, Clone, Default)]
pub struct LedgerConfig {
    /// The project file the ledgers belong to. `None` until the project
    /// has been saved somewhere.
    pub project: Option<PathBuf>,

    /// Particle-board ledger. Defaults to `{dir}/{stem}_ldsp.xlsx`.
    pub ldsp_path: Option<PathBuf>,

    /// Fiberboard ledger. Defaults to `{dir}/{stem}_hdf.xlsx`.
    pub hdf_path: Option<PathBuf>,

    /// Edge-banding marks. Defaults to `{dir}/{stem}_edging.json`.
    pub edging_path: Option<PathBuf>,
}

impl LedgerConfig {
    pub fn for_project(project: impl Into<PathBuf>) -> Self {
        Self {
            project: Some(project.into()),
            ..Default::default()
        }
    }

    /// Resolve the particle-board ledger path.
    pub fn resolve_ldsp_path(&self) -> Result<PathBuf, LedgerError> {
        match &self.ldsp_path {
            Some(path) => Ok(path.clone()),
            None => self.resolve_sibling("_ldsp.xlsx"),
        }
    }

    /// Resolve the fiberboard ledger path.
    pub fn resolve_hdf_path(&self) -> Result<PathBuf, LedgerError> {
        match &self.hdf_path {
            Some(path) => Ok(path.clone()),
            None => self.resolve_sibling("_hdf.xlsx"),
        }
    }

    /// Resolve the edge-banding marks path.
    pub fn resolve_edging_path(&self) -> Result<PathBuf, LedgerError> {
        match &self.edging_path {
            Some(path) => Ok(path.clone()),
            None => self.resolve_sibling("_edging.json"),
        }
    }

    /// `{dir}/{stem}{suffix}` next to the project file.
    fn resolve_sibling(&self, suffix: &str) -> Result<PathBuf, LedgerError> {
        let project = self
            .project
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(LedgerError::NoProjectPath)?;

        let stem = project
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or(LedgerError::NoProjectPath)?;
        let dir = project.parent().unwrap_or_else(|| Path::new(""));

        Ok(dir.join(format!("{}{}", stem, suffix)))
    }
}
