//! Writing tables to `.xlsx` spreadsheets.
//!
//! Each table becomes one worksheet: a header row with the column names, then one row per table
//! row. `Null` cells are left blank.

use crate::{Cell, Error, Table};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

/// The file extension spreadsheets must be written with.
pub const EXTENSION: &str = "xlsx";

/// The name of the sheet [`write_table`] writes to.
pub const DEFAULT_SHEET: &str = "Sheet1";

/// Writes the table to a spreadsheet with one sheet.
///
/// # Errors
///
/// If `path` doesn't end in `.xlsx`, or the spreadsheet couldn't be written.
pub fn write_table(table: &Table, path: &Path) -> Result<(), Error> {
  write_tables(&[(DEFAULT_SHEET, table)], path)
}

/// Writes each table to its own sheet in one spreadsheet, in order.
///
/// # Errors
///
/// If `path` doesn't end in `.xlsx`, a sheet name is invalid, or the spreadsheet couldn't be
/// written.
pub fn write_tables(sheets: &[(&str, &Table)], path: &Path) -> Result<(), Error> {
  check_extension(path)?;
  let mut workbook = Workbook::new();
  for &(name, table) in sheets {
    log::debug!("writing sheet {name:?} with {} rows", table.len());
    let sheet = workbook.add_worksheet();
    sheet.set_name(name)?;
    write_sheet(sheet, table)?;
  }
  workbook.save(path)?;
  log::info!("wrote {} sheets to {}", sheets.len(), path.display());
  Ok(())
}

fn check_extension(path: &Path) -> Result<(), Error> {
  let ok = path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| ext.eq_ignore_ascii_case(EXTENSION));
  if ok {
    Ok(())
  } else {
    Err(Error::InvalidExtension(path.to_owned()))
  }
}

fn write_sheet(sheet: &mut Worksheet, table: &Table) -> Result<(), Error> {
  for (col, name) in table.columns().iter().enumerate() {
    sheet.write_string(0, col_num(col)?, name.as_str())?;
  }
  for (row, cells) in table.rows().iter().enumerate() {
    // the header is row 0.
    let row = row_num(row + 1)?;
    for (col, cell) in cells.iter().enumerate() {
      let col = col_num(col)?;
      write_cell(sheet, row, col, cell)?;
    }
  }
  Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<(), Error> {
  match cell {
    Cell::Null => {}
    Cell::Bool(b) => {
      sheet.write_boolean(row, col, *b)?;
    }
    Cell::Int(n) => {
      sheet.write_number(row, col, *n as f64)?;
    }
    Cell::Float(x) => {
      sheet.write_number(row, col, *x)?;
    }
    Cell::Str(s) => {
      sheet.write_string(row, col, s.as_str())?;
    }
  }
  Ok(())
}

fn row_num(n: usize) -> Result<u32, Error> {
  u32::try_from(n).map_err(|_| Error::TooLarge)
}

fn col_num(n: usize) -> Result<u16, Error> {
  u16::try_from(n).map_err(|_| Error::TooLarge)
}
