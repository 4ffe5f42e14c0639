use std::fmt;

/// A dynamically-typed spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Build a numeric cell, folding integral values into `Int`.
    ///
    /// Spreadsheets store every number as a float, so a length written as
    /// `600` reads back as `600.0`. Folding keeps reloaded rows comparable
    /// to freshly built ones.
    pub fn number(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            Cell::Int(value as i64)
        } else {
            Cell::Float(value)
        }
    }

    /// Get the text content, if this is a text cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// Result of a single `Table::upsert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// An existing row at this data-row index was overwritten.
    Updated(usize),
    /// A new row was appended at this data-row index.
    Appended(usize),
}

/// Table is one worksheet held in memory: a header row followed by data rows.
///
/// Rows are keyed by the text in their first cell. The table does not keep an
/// index; lookups scan the rows, which is fine for the tens of panels a
/// project has.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given column labels.
    pub fn with_headers(headers: &[&str]) -> Self {
        Self {
            header: headers.iter().map(|h| Cell::from(*h)).collect(),
            rows: Vec::new(),
        }
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the data-row index whose first cell is the text `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.first().and_then(Cell::as_str) == Some(name))
    }

    /// Get a data row by key.
    pub fn get(&self, name: &str) -> Option<&[Cell]> {
        self.position(name).map(|i| self.rows[i].as_slice())
    }

    /// Insert or update a row keyed by its first cell.
    ///
    /// On a match, the leading cells of the existing row are replaced by
    /// `row`; any cells past `row.len()` keep their old values. Without a
    /// match the row is appended.
    pub fn upsert(&mut self, row: Vec<Cell>) -> UpsertOutcome {
        let existing = row
            .first()
            .and_then(Cell::as_str)
            .and_then(|name| self.position(name));

        match existing {
            Some(index) => {
                let target = &mut self.rows[index];
                if target.len() < row.len() {
                    target.resize(row.len(), Cell::Empty);
                }
                for (slot, value) in target.iter_mut().zip(row) {
                    *slot = value;
                }
                UpsertOutcome::Updated(index)
            }
            None => {
                self.rows.push(row);
                UpsertOutcome::Appended(self.rows.len() - 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, length: i64) -> Vec<Cell> {
        vec![Cell::from(name), Cell::from("LDSP"), Cell::Int(length)]
    }

    #[test]
    fn test_upsert_appends_new_name() {
        let mut table = Table::with_headers(&["Name", "Type", "Length"]);
        assert_eq!(table.upsert(row("Cube", 600)), UpsertOutcome::Appended(0));
        assert_eq!(table.upsert(row("Cube.001", 400)), UpsertOutcome::Appended(1));
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1][0], Cell::from("Cube.001"));
    }

    #[test]
    fn test_upsert_updates_in_place() {
        let mut table = Table::with_headers(&["Name", "Type", "Length"]);
        table.upsert(row("Cube", 600));
        table.upsert(row("Cube.001", 400));
        table.upsert(row("Cube.002", 300));

        let outcome = table.upsert(row("Cube.001", 450));
        assert_eq!(outcome, UpsertOutcome::Updated(1));
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0], row("Cube", 600));
        assert_eq!(table.rows[1], row("Cube.001", 450));
        assert_eq!(table.rows[2], row("Cube.002", 300));
    }

    #[test]
    fn test_upsert_keeps_trailing_cells() {
        let mut table = Table::with_headers(&["Name", "Type", "Length"]);
        table.rows.push(vec![
            Cell::from("Cube"),
            Cell::from("HDF"),
            Cell::Int(1),
            Cell::from("note"),
        ]);

        table.upsert(row("Cube", 700));
        assert_eq!(
            table.rows[0],
            vec![
                Cell::from("Cube"),
                Cell::from("LDSP"),
                Cell::Int(700),
                Cell::from("note"),
            ]
        );
    }

    #[test]
    fn test_upsert_widens_short_row() {
        let mut table = Table::default();
        table.rows.push(vec![Cell::from("Cube")]);
        table.upsert(row("Cube", 500));
        assert_eq!(table.rows[0], row("Cube", 500));
    }

    #[test]
    fn test_numeric_first_cell_is_not_a_key() {
        let mut table = Table::default();
        table.rows.push(vec![Cell::Int(42), Cell::Empty]);
        assert_eq!(table.position("42"), None);
        assert_eq!(table.upsert(row("42", 1)), UpsertOutcome::Appended(1));
    }

    #[test]
    fn test_number_folds_integral_values() {
        assert_eq!(Cell::number(600.0), Cell::Int(600));
        assert_eq!(Cell::number(0.5), Cell::Float(0.5));
        assert_eq!(Cell::number(-3.0), Cell::Int(-3));
    }
}
