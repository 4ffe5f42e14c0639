use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::atomic::{io_error, StagedFile};
use crate::error::LedgerError;
use crate::table::{Cell, Table};
use crate::traits::TableStore;

/// Name given to the single worksheet of every workbook we write.
const SHEET_NAME: &str = "Sheet";

/// XlsxStore is a TableStore implementation backed by `.xlsx` workbooks.
///
/// Only the first worksheet is read; it is expected to carry one header row
/// followed by data rows. Writes go through a temporary file in the target
/// directory that is renamed over the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxStore;

impl XlsxStore {
    pub fn new() -> Self {
        Self
    }
}

impl TableStore for XlsxStore {
    fn open_or_create(&self, path: &Path, headers: &[&str]) -> Result<Table, LedgerError> {
        if !path.exists() {
            debug!("XlsxStore: {:?} does not exist, starting a new table", path);
            return Ok(Table::with_headers(headers));
        }

        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| io_error(path, e))?;

        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(|e| io_error(path, e))?,
            None => {
                debug!("XlsxStore: {:?} has no worksheets, starting a new table", path);
                return Ok(Table::with_headers(headers));
            }
        };

        // The range starts at the first non-empty cell; pad back to A1 so
        // row 0 is always the header row.
        let (start_row, start_col) = match range.start() {
            Some(start) => start,
            None => {
                debug!("XlsxStore: {:?} is empty, starting a new table", path);
                return Ok(Table::with_headers(headers));
            }
        };

        let mut grid: Vec<Vec<Cell>> = vec![Vec::new(); start_row as usize];
        for row in range.rows() {
            let mut cells = vec![Cell::Empty; start_col as usize];
            cells.extend(row.iter().map(cell_from_data));
            trim_trailing_empty(&mut cells);
            grid.push(cells);
        }

        let mut rows = grid.into_iter();
        let header = rows.next().unwrap_or_default();
        let table = Table {
            header,
            rows: rows.collect(),
        };
        debug!("XlsxStore: loaded {} rows from {:?}", table.len(), path);
        Ok(table)
    }

    fn encode(&self, table: &Table) -> Result<Vec<u8>, LedgerError> {
        let mut workbook = Workbook::new();
        {
            let sheet = workbook.add_worksheet();
            sheet.set_name(SHEET_NAME).map_err(encode_error)?;

            let all_rows = std::iter::once(&table.header).chain(table.rows.iter());
            for (r, row) in all_rows.enumerate() {
                let r = u32::try_from(r)
                    .map_err(|_| LedgerError::Io(format!("too many rows: {}", r)))?;
                for (c, cell) in row.iter().enumerate() {
                    let c = u16::try_from(c)
                        .map_err(|_| LedgerError::Io(format!("too many columns: {}", c)))?;
                    match cell {
                        Cell::Empty => {}
                        Cell::Bool(b) => {
                            sheet.write_boolean(r, c, *b).map_err(encode_error)?;
                        }
                        Cell::Int(i) => {
                            sheet.write_number(r, c, *i as f64).map_err(encode_error)?;
                        }
                        Cell::Float(v) => {
                            sheet.write_number(r, c, *v).map_err(encode_error)?;
                        }
                        Cell::Text(s) => {
                            sheet.write_string(r, c, s.as_str()).map_err(encode_error)?;
                        }
                    }
                }
            }
        }
        workbook.save_to_buffer().map_err(encode_error)
    }

    fn stage(&self, path: &Path, bytes: &[u8]) -> Result<StagedFile, LedgerError> {
        let staged = StagedFile::stage(path, bytes)?;
        debug!("XlsxStore: staged {} bytes for {:?}", bytes.len(), path);
        Ok(staged)
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Bool(b) => Cell::Bool(*b),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

fn trim_trailing_empty(cells: &mut Vec<Cell>) {
    while cells.last().is_some_and(Cell::is_empty) {
        cells.pop();
    }
}

fn encode_error(e: rust_xlsxwriter::XlsxError) -> LedgerError {
    LedgerError::Io(format!("failed to encode workbook: {}", e))
}
