//! Edge-banding marks.
//!
//! Which sides of a panel get a banding strip is chosen by the user per
//! object. Marks live in an `EdgingMap` keyed by object name and are stored
//! as a JSON sidecar next to the project:
//!
//! ```text
//! { "Cube.001": { "top": true, "right": false, "bottom": false, "left": true } }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::atomic::write_atomic;
use crate::error::LedgerError;
use crate::scene::SceneObject;

/// Thinnest dimension (mm, exclusive) a panel needs to be offered for banding.
const CANDIDATE_MIN_THICKNESS_MM: i64 = 9;
/// Thickest dimension (mm, exclusive) a panel may have to be offered for banding.
const CANDIDATE_MAX_THICKNESS_MM: i64 = 33;

/// One side of a panel. Top is the longest side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl EdgeSide {
    pub const ALL: [EdgeSide; 4] = [EdgeSide::Top, EdgeSide::Right, EdgeSide::Bottom, EdgeSide::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeSide::Top => "top",
            EdgeSide::Right => "right",
            EdgeSide::Bottom => "bottom",
            EdgeSide::Left => "left",
        }
    }
}

impl fmt::Display for EdgeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(EdgeSide::Top),
            "right" => Ok(EdgeSide::Right),
            "bottom" => Ok(EdgeSide::Bottom),
            "left" => Ok(EdgeSide::Left),
            other => Err(format!("unknown edge side: {}", other)),
        }
    }
}

/// Banding marks for the four sides of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeFlags {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl EdgeFlags {
    pub fn get(&self, side: EdgeSide) -> bool {
        match side {
            EdgeSide::Top => self.top,
            EdgeSide::Right => self.right,
            EdgeSide::Bottom => self.bottom,
            EdgeSide::Left => self.left,
        }
    }

    pub fn set(&mut self, side: EdgeSide, value: bool) {
        match side {
            EdgeSide::Top => self.top = value,
            EdgeSide::Right => self.right = value,
            EdgeSide::Bottom => self.bottom = value,
            EdgeSide::Left => self.left = value,
        }
    }
}

/// Banding marks for every object, keyed by object name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgingMap {
    flags: BTreeMap<String, EdgeFlags>,
}

impl EdgingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks for `name`; objects never marked have no banding.
    pub fn flags(&self, name: &str) -> EdgeFlags {
        self.flags.get(name).copied().unwrap_or_default()
    }

    pub fn insert(&mut self, name: impl Into<String>, flags: EdgeFlags) {
        self.flags.insert(name.into(), flags);
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Load marks from disk, or return an empty map if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        if !path.exists() {
            debug!("EdgingMap: {:?} does not exist, starting empty", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| LedgerError::Io(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| LedgerError::Io(format!("{}: invalid edging marks: {}", path.display(), e)))
    }

    /// Save marks to disk, replacing the file atomically.
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Io(format!("failed to encode edging marks: {}", e)))?;
        write_atomic(path, content.as_bytes())
    }

    /// Set or clear one side on every banding candidate in `selection`.
    /// Returns the number of objects touched.
    pub fn set_mass(&mut self, selection: &[SceneObject], side: EdgeSide, value: bool) -> usize {
        let mut count = 0;
        for obj in selection.iter().filter(|o| is_edging_candidate(o)) {
            self.flags
                .entry(obj.name.clone())
                .or_default()
                .set(side, value);
            count += 1;
        }
        debug!("EdgingMap: set {}={} on {} objects", side, value, count);
        count
    }
}

/// Whether an object is offered for edge banding: a mesh whose thinnest
/// dimension lies strictly between 9 and 33 mm.
pub fn is_edging_candidate(obj: &SceneObject) -> bool {
    if !obj.is_mesh() {
        return false;
    }
    let thickness = obj.measure().thickness_mm;
    CANDIDATE_MIN_THICKNESS_MM < thickness && thickness < CANDIDATE_MAX_THICKNESS_MM
}

/// One line of the banding overview for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgingEntry {
    Candidate {
        name: String,
        /// "length x width" in millimeters.
        size: String,
        flags: EdgeFlags,
    },
    Rejected {
        name: String,
    },
}

impl fmt::Display for EdgingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgingEntry::Candidate { name, size, flags } => {
                write!(f, "{}: {}", name, size)?;
                let marked: Vec<&str> = EdgeSide::ALL
                    .iter()
                    .filter(|side| flags.get(**side))
                    .map(EdgeSide::as_str)
                    .collect();
                if marked.is_empty() {
                    Ok(())
                } else {
                    write!(f, " [{}]", marked.join(", "))
                }
            }
            EdgingEntry::Rejected { name } => {
                write!(f, "object {} is not a part for edge banding", name)
            }
        }
    }
}

/// Banding overview of `selection`, one entry per object in selection order.
pub fn candidates(selection: &[SceneObject], map: &EdgingMap) -> Vec<EdgingEntry> {
    selection
        .iter()
        .map(|obj| {
            if is_edging_candidate(obj) {
                EdgingEntry::Candidate {
                    name: obj.name.clone(),
                    size: obj.measure().label(),
                    flags: map.flags(&obj.name),
                }
            } else {
                EdgingEntry::Rejected {
                    name: obj.name.clone(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ObjectKind;
    use tempfile::TempDir;

    fn mesh(name: &str, dimensions: [f64; 3]) -> SceneObject {
        SceneObject {
            name: name.to_string(),
            kind: ObjectKind::Mesh,
            dimensions,
            location: [0.0; 3],
        }
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("TOP".parse::<EdgeSide>().unwrap(), EdgeSide::Top);
        assert_eq!("left".parse::<EdgeSide>().unwrap(), EdgeSide::Left);
        assert!("front".parse::<EdgeSide>().is_err());
    }

    #[test]
    fn test_candidate_thickness_window() {
        assert!(is_edging_candidate(&mesh("Cube", [0.6, 0.4, 0.016])));
        assert!(is_edging_candidate(&mesh("Cube", [0.6, 0.4, 0.032])));
        assert!(!is_edging_candidate(&mesh("Cube", [0.6, 0.4, 0.009])));
        assert!(!is_edging_candidate(&mesh("Cube", [0.6, 0.4, 0.033])));
        assert!(!is_edging_candidate(&mesh("Cube", [0.6, 0.4, 0.003])));

        let mut lamp = mesh("Lamp", [0.6, 0.4, 0.016]);
        lamp.kind = ObjectKind::Other("LIGHT".to_string());
        assert!(!is_edging_candidate(&lamp));
    }

    #[test]
    fn test_set_mass_only_touches_candidates() {
        let selection = vec![
            mesh("Cube", [0.6, 0.4, 0.016]),
            mesh("Cube.001", [0.6, 0.4, 0.003]),
            mesh("Cube.002", [0.018, 0.7, 0.5]),
        ];
        let mut map = EdgingMap::new();

        assert_eq!(map.set_mass(&selection, EdgeSide::Top, true), 2);
        assert!(map.flags("Cube").top);
        assert!(map.flags("Cube.002").top);
        assert_eq!(map.flags("Cube.001"), EdgeFlags::default());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_unset_clears_only_named_side() {
        let selection = vec![mesh("Cube", [0.6, 0.4, 0.016])];
        let mut map = EdgingMap::new();
        map.set_mass(&selection, EdgeSide::Top, true);
        map.set_mass(&selection, EdgeSide::Left, true);

        map.set_mass(&selection, EdgeSide::Top, false);
        let flags = map.flags("Cube");
        assert!(!flags.top);
        assert!(flags.left);
    }

    #[test]
    fn test_candidates_listing() {
        let selection = vec![
            mesh("Cube", [0.4, 0.016, 0.6]),
            mesh("Plane", [1.0, 1.0, 0.0]),
        ];
        let mut map = EdgingMap::new();
        map.insert(
            "Cube",
            EdgeFlags {
                top: true,
                right: true,
                ..Default::default()
            },
        );

        let entries = candidates(&selection, &map);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].to_string(), "Cube: 600x400 [top, right]");
        assert_eq!(
            entries[1].to_string(),
            "object Plane is not a part for edge banding"
        );
    }

    #[test]
    fn test_load_missing_and_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("project_edging.json");

        let map = EdgingMap::load(&path).unwrap();
        assert!(map.is_empty());

        let mut map = EdgingMap::new();
        map.insert(
            "Cube",
            EdgeFlags {
                bottom: true,
                ..Default::default()
            },
        );
        map.save(&path).unwrap();

        let back = EdgingMap::load(&path).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_load_partial_flags() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("edging.json");
        std::fs::write(&path, r#"{"Cube": {"left": true}}"#).unwrap();

        let map = EdgingMap::load(&path).unwrap();
        assert_eq!(
            map.flags("Cube"),
            EdgeFlags {
                left: true,
                ..Default::default()
            }
        );
    }
}
