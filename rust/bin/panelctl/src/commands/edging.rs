//! `panelctl edging` — mass mark, unmark and list edge banding.

use std::path::Path;

use anyhow::Result;
use panel_ledger::edging::candidates;
use panel_ledger::{EdgeSide, EdgingMap, LedgerConfig, SceneSnapshot};
use tracing::info;

/// Set or clear `side` on every candidate in the selection and save the marks.
pub fn mark(config: &LedgerConfig, scene_path: &Path, side: EdgeSide, value: bool) -> Result<()> {
    let scene = SceneSnapshot::load(scene_path)?;
    let path = config.resolve_edging_path()?;

    let mut map = EdgingMap::load(&path)?;
    let count = map.set_mass(&scene.objects, side, value);
    map.save(&path)?;
    info!("Saved edge-banding marks to {}", path.display());

    if value {
        println!("Set {} edge banding for {} objects.", side, count);
    } else {
        println!("Unset {} edge banding for {} objects.", side, count);
    }
    Ok(())
}

/// Print every selected object with its size and marks.
pub fn list(config: &LedgerConfig, scene_path: &Path) -> Result<()> {
    let scene = SceneSnapshot::load(scene_path)?;
    let map = EdgingMap::load(&config.resolve_edging_path()?)?;

    for entry in candidates(&scene.objects, &map) {
        println!("{}", entry);
    }
    Ok(())
}
