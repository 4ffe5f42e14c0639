use std::fmt;

use crate::edging::EdgeFlags;
use crate::table::Cell;

/// Column labels of the particle-board ledger.
pub const LDSP_HEADERS: [&str; 9] = [
    "Name", "Type", "Length", "Width", "Quantity", "Top", "Right", "Bottom", "Left",
];

/// Column labels of the fiberboard ledger. Rows carry one extra, unlabeled
/// column with the top-side banding.
pub const HDF_HEADERS: [&str; 5] = ["Name", "Type", "Length", "Width", "Quantity"];

/// Edge-banding strip thickness in millimeters, written for every banded side.
pub const BANDING_THICKNESS_MM: f64 = 0.5;

/// Board material, derived from panel thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Laminated particle board, the thick structural material.
    Ldsp,
    /// High-density fiberboard, the thin backing material.
    Hdf,
    /// Thickness matched neither range.
    Unknown,
}

impl MaterialKind {
    /// Label written into the Type column.
    pub fn label(&self) -> &'static str {
        match self {
            MaterialKind::Ldsp => "LDSP",
            MaterialKind::Hdf => "HDF",
            MaterialKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a panel by thickness. Both ranges are open intervals.
pub fn classify(thickness_mm: i64) -> MaterialKind {
    if 9 < thickness_mm && thickness_mm < 21 {
        MaterialKind::Ldsp
    } else if 2 < thickness_mm && thickness_mm < 5 {
        MaterialKind::Hdf
    } else {
        MaterialKind::Unknown
    }
}

/// Encode one side flag: banded sides carry the strip thickness, others stay blank.
pub fn encode_flag(banded: bool) -> Cell {
    if banded {
        Cell::Float(BANDING_THICKNESS_MM)
    } else {
        Cell::Empty
    }
}

/// PanelRecord — one ledger row for a tracked panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRecord {
    /// Object name; unique key within its ledger.
    pub name: String,
    pub material_kind: MaterialKind,
    pub length_mm: i64,
    pub width_mm: i64,
    /// Always 1: every object is one physical panel.
    pub quantity: i64,
    pub edge_flags: EdgeFlags,
}

impl PanelRecord {
    /// Render the record as ledger cells.
    ///
    /// Fiberboard rows only carry the top side; everything else (including
    /// `Unknown`) uses the full four-side layout.
    pub fn to_row(&self) -> Vec<Cell> {
        let mut row = vec![
            Cell::from(self.name.as_str()),
            Cell::from(self.material_kind.label()),
            Cell::Int(self.length_mm),
            Cell::Int(self.width_mm),
            Cell::Int(self.quantity),
            encode_flag(self.edge_flags.top),
        ];
        if self.material_kind != MaterialKind::Hdf {
            row.push(encode_flag(self.edge_flags.right));
            row.push(encode_flag(self.edge_flags.bottom));
            row.push(encode_flag(self.edge_flags.left));
        }
        row
    }
}
