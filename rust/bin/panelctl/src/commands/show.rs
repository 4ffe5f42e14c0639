//! `panelctl show` — print a ledger as a plain table.

use anyhow::Result;
use panel_ledger::panel::{HDF_HEADERS, LDSP_HEADERS};
use panel_ledger::{Cell, LedgerConfig, TableStore, XlsxStore};

pub fn run(config: &LedgerConfig, hdf: bool) -> Result<()> {
    let (path, headers) = if hdf {
        (config.resolve_hdf_path()?, &HDF_HEADERS[..])
    } else {
        (config.resolve_ldsp_path()?, &LDSP_HEADERS[..])
    };

    if !path.exists() {
        println!("No ledger at {} yet.", path.display());
        return Ok(());
    }

    let table = XlsxStore::new().open_or_create(&path, headers)?;
    println!("{}", format_row(&table.header));
    for row in &table.rows {
        println!("{}", format_row(row));
    }
    println!();
    println!("{} rows in {}", table.len(), path.display());
    Ok(())
}

fn format_row(row: &[Cell]) -> String {
    row.iter()
        .map(|cell| format!("{:<12}", cell.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}
