use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::LedgerConfig;
use crate::edging::EdgingMap;
use crate::error::LedgerError;
use crate::panel::{classify, MaterialKind, PanelRecord, HDF_HEADERS, LDSP_HEADERS};
use crate::scene::SceneObject;
use crate::table::UpsertOutcome;
use crate::traits::TableStore;

/// Only objects whose name starts with this prefix are tracked panels.
const PANEL_NAME_PREFIX: &str = "Cube";

/// A panel written during a save.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenPanel {
    pub name: String,
    pub material: MaterialKind,
    pub outcome: UpsertOutcome,
}

/// Outcome of one save batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveReport {
    pub ldsp_path: PathBuf,
    pub hdf_path: PathBuf,
    /// Panels written, in selection order.
    pub written: Vec<WrittenPanel>,
    /// Non-fatal problems, one per skipped object.
    pub warnings: Vec<LedgerError>,
}

impl SaveReport {
    /// Human-readable lines for the user: warnings first, then where the
    /// ledgers were saved.
    pub fn messages(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.warnings.iter().map(|w| w.to_string()).collect();
        lines.push(format!(
            "Saved edge banding data to {}.",
            self.ldsp_path.display()
        ));
        lines.push(format!("Saved hdf data to {}.", self.hdf_path.display()));
        lines
    }
}

/// Merge the selected panels into the two ledgers of a project.
///
/// The batch is all-or-nothing with respect to validation: a missing project
/// path or overlapping objects abort before any ledger is read or written.
/// Objects that are not meshes are ignored; meshes whose name lacks the panel
/// prefix are skipped with a warning. Both ledgers are encoded and staged
/// before either file is replaced.
pub fn save_batch(
    config: &LedgerConfig,
    selection: &[SceneObject],
    edging: &EdgingMap,
    store: &dyn TableStore,
) -> Result<SaveReport, LedgerError> {
    let ldsp_path = config.resolve_ldsp_path()?;
    let hdf_path = config.resolve_hdf_path()?;

    check_overlaps(selection)?;

    let mut ldsp = store.open_or_create(&ldsp_path, &LDSP_HEADERS)?;
    let mut hdf = store.open_or_create(&hdf_path, &HDF_HEADERS)?;

    let mut written = Vec::new();
    let mut warnings = Vec::new();

    for obj in selection {
        if !obj.is_mesh() {
            debug!("save: ignoring non-mesh object {}", obj.name);
            continue;
        }

        if !obj.name.starts_with(PANEL_NAME_PREFIX) {
            warn!("save: skipping {}, not a tracked panel", obj.name);
            warnings.push(LedgerError::UnrecognizedObject(obj.name.clone()));
            continue;
        }

        let dims = obj.measure();
        let material = classify(dims.thickness_mm);

        let record = PanelRecord {
            name: obj.name.clone(),
            material_kind: material,
            length_mm: dims.length_mm,
            width_mm: dims.width_mm,
            quantity: 1,
            edge_flags: edging.flags(&obj.name),
        };

        // Unknown thickness shares the particle-board ledger.
        let table = match material {
            MaterialKind::Hdf => &mut hdf,
            MaterialKind::Ldsp | MaterialKind::Unknown => &mut ldsp,
        };
        let outcome = table.upsert(record.to_row());
        debug!("save: {} {} -> {:?}", material, obj.name, outcome);

        written.push(WrittenPanel {
            name: obj.name.clone(),
            material,
            outcome,
        });
    }

    // Both ledgers are encoded and staged before either one is renamed into
    // place; a failure up to here leaves both files untouched.
    let hdf_staged = store.stage(&hdf_path, &store.encode(&hdf)?)?;
    let ldsp_staged = store.stage(&ldsp_path, &store.encode(&ldsp)?)?;
    hdf_staged.commit()?;
    ldsp_staged.commit()?;

    info!(
        "save: wrote {} panels ({} ldsp rows, {} hdf rows), skipped {}",
        written.len(),
        ldsp.len(),
        hdf.len(),
        warnings.len()
    );

    Ok(SaveReport {
        ldsp_path,
        hdf_path,
        written,
        warnings,
    })
}

/// Reject the batch if two objects share both location and dimensions.
/// The error names the later of the two.
fn check_overlaps(selection: &[SceneObject]) -> Result<(), LedgerError> {
    let mut seen: Vec<([f64; 3], [f64; 3])> = Vec::with_capacity(selection.len());
    for obj in selection {
        let key = (obj.location, obj.dimensions);
        if seen.contains(&key) {
            warn!("save: {} overlaps another selected object", obj.name);
            return Err(LedgerError::OverlappingSelection {
                name: obj.name.clone(),
            });
        }
        seen.push(key);
    }
    Ok(())
}
