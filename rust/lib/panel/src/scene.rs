//! Scene snapshot — the selected objects handed over by the 3-D tool.
//!
//! The modelling tool exports its current selection as JSON:
//!
//! ```text
//! { "objects": [ { "name": "Cube.001", "type": "MESH",
//!                  "dimensions": [0.6, 0.4, 0.016],
//!                  "location": [0.0, 0.0, 0.0] } ] }
//! ```
//!
//! Dimensions and locations are in scene units (meters).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Object type tag. Only meshes are panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObjectKind {
    Mesh,
    Other(String),
}

impl From<String> for ObjectKind {
    fn from(s: String) -> Self {
        if s.eq_ignore_ascii_case("mesh") {
            ObjectKind::Mesh
        } else {
            ObjectKind::Other(s)
        }
    }
}

impl From<ObjectKind> for String {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Mesh => "MESH".to_string(),
            ObjectKind::Other(s) => s,
        }
    }
}

/// One selected object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ObjectKind,

    /// Bounding-box extents in meters, in no particular order.
    pub dimensions: [f64; 3],

    /// World-space location in meters.
    #[serde(default)]
    pub location: [f64; 3],
}

impl SceneObject {
    pub fn is_mesh(&self) -> bool {
        self.kind == ObjectKind::Mesh
    }

    /// Panel measurements in whole millimeters.
    pub fn measure(&self) -> Dimensions {
        Dimensions::from_meters(self.dimensions)
    }
}

/// Panel measurements, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub length_mm: i64,
    pub width_mm: i64,
    pub thickness_mm: i64,
}

impl Dimensions {
    /// Convert meter extents to millimeters and sort them descending.
    ///
    /// Halves round to the nearest even millimeter so that existing ledgers
    /// keep matching.
    pub fn from_meters(extents: [f64; 3]) -> Self {
        let mut mm = extents.map(|m| (m * 1000.0).round_ties_even() as i64);
        mm.sort_unstable_by(|a, b| b.cmp(a));
        Self {
            length_mm: mm[0],
            width_mm: mm[1],
            thickness_mm: mm[2],
        }
    }

    /// "length x width" label used in listings.
    pub fn label(&self) -> String {
        format!("{}x{}", self.length_mm, self.width_mm)
    }
}

/// The exported selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl SceneSnapshot {
    pub fn from_json(json: &str) -> Result<Self, LedgerError> {
        serde_json::from_str(json)
            .map_err(|e| LedgerError::Io(format!("invalid scene snapshot: {}", e)))
    }

    /// Load a snapshot file.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LedgerError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }
}
