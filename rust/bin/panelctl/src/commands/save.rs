//! `panelctl save` — merge the selection into both ledgers.

use std::path::Path;

use anyhow::{Context, Result};
use panel_ledger::{save_batch, EdgingMap, LedgerConfig, SceneSnapshot, XlsxStore};
use tracing::info;

pub fn run(config: &LedgerConfig, scene_path: &Path) -> Result<()> {
    let scene = SceneSnapshot::load(scene_path)?;
    info!("Loaded {} selected objects from {}", scene.objects.len(), scene_path.display());

    // No project and no --edging: nothing has been marked.
    let edging = match config.resolve_edging_path() {
        Ok(path) => EdgingMap::load(&path).context("failed to load edge-banding marks")?,
        Err(_) => EdgingMap::new(),
    };

    let report = save_batch(config, &scene.objects, &edging, &XlsxStore::new())?;
    for line in report.messages() {
        println!("{}", line);
    }
    Ok(())
}
