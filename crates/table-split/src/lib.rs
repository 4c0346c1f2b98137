//! Small in-memory tables, splitting them up by the values in a column, and writing them out as
//! spreadsheets.


pub mod xlsx;

pub use smol_str::SmolStr;

use std::fmt;
use std::path::PathBuf;

/// A single value in a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
  /// Missing. Never equal to anything when splitting, not even another `Null`.
  Null,
  /// A boolean. Compares as `1` or `0` when splitting.
  Bool(bool),
  /// An integer.
  Int(i64),
  /// A float.
  Float(f64),
  /// A string.
  Str(SmolStr),
}

impl Cell {
  /// Returns whether the two cells hold the same value, comparing numbers by value across
  /// variants. So `Int(1)`, `Float(1.0)`, and `Bool(true)` all match one another.
  #[must_use]
  #[allow(clippy::float_cmp)]
  pub fn matches(&self, other: &Cell) -> bool {
    match (self, other) {
      (Cell::Str(a), Cell::Str(b)) => a == b,
      _ => match (self.as_f64(), other.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
      },
    }
  }

  #[allow(clippy::cast_precision_loss)]
  fn as_f64(&self) -> Option<f64> {
    match self {
      Cell::Bool(b) => Some(f64::from(u8::from(*b))),
      Cell::Int(n) => Some(*n as f64),
      Cell::Float(x) => Some(*x),
      Cell::Null | Cell::Str(_) => None,
    }
  }
}

impl From<bool> for Cell {
  fn from(b: bool) -> Self {
    Cell::Bool(b)
  }
}

impl From<i64> for Cell {
  fn from(n: i64) -> Self {
    Cell::Int(n)
  }
}

impl From<f64> for Cell {
  fn from(x: f64) -> Self {
    Cell::Float(x)
  }
}

impl From<&str> for Cell {
  fn from(s: &str) -> Self {
    Cell::Str(SmolStr::new(s))
  }
}

impl<T> From<Option<T>> for Cell
where
  T: Into<Cell>,
{
  fn from(opt: Option<T>) -> Self {
    opt.map_or(Cell::Null, Into::into)
  }
}

/// A table with named columns. Every row has exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
  columns: Vec<SmolStr>,
  rows: Vec<Vec<Cell>>,
}

impl Table {
  /// Returns a new table with these columns and no rows.
  #[must_use]
  pub fn new<I, S>(columns: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<SmolStr>,
  {
    Self { columns: columns.into_iter().map(Into::into).collect(), rows: Vec::new() }
  }

  /// Appends a row.
  ///
  /// # Errors
  ///
  /// If the row doesn't have one cell per column.
  pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), Error> {
    if row.len() != self.columns.len() {
      return Err(Error::RowWidth { want: self.columns.len(), got: row.len() });
    }
    self.rows.push(row);
    Ok(())
  }

  /// Returns the column names.
  #[must_use]
  pub fn columns(&self) -> &[SmolStr] {
    &self.columns
  }

  /// Returns the rows.
  #[must_use]
  pub fn rows(&self) -> &[Vec<Cell>] {
    &self.rows
  }

  /// Returns the number of rows.
  #[must_use]
  pub fn len(&self) -> usize {
    self.rows.len()
  }

  /// Returns whether there are no rows.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  /// Returns the index of the column.
  ///
  /// # Errors
  ///
  /// If there is no such column.
  pub fn column_index(&self, name: &str) -> Result<usize, Error> {
    self.columns.iter().position(|c| c == name).ok_or_else(|| Error::UnknownColumn(name.into()))
  }

  /// Returns the cells in the column, top to bottom.
  ///
  /// # Errors
  ///
  /// If there is no such column.
  pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Cell>, Error> {
    let idx = self.column_index(name)?;
    Ok(self.rows.iter().map(move |row| &row[idx]))
  }

  /// Removes the column.
  ///
  /// # Errors
  ///
  /// If there is no such column.
  pub fn drop_column(&mut self, name: &str) -> Result<(), Error> {
    let idx = self.column_index(name)?;
    self.remove_column(idx);
    Ok(())
  }

  fn remove_column(&mut self, idx: usize) {
    self.columns.remove(idx);
    for row in &mut self.rows {
      row.remove(idx);
    }
  }

  /// Returns a table with the same columns, keeping only the rows whose cell at `idx` matches.
  fn rows_matching(&self, idx: usize, value: &Cell) -> Table {
    let rows = self.rows.iter().filter(|row| row[idx].matches(value)).cloned().collect();
    Table { columns: self.columns.clone(), rows }
  }
}

/// Splits the table into one table per value, in order, each holding the rows whose `column`
/// matches that value (see [`Cell::matches`]).
///
/// The values are given explicitly rather than collected from the column, so the tables come
/// back in a known order.
///
/// # Errors
///
/// If there is no such column.
pub fn split_by_column_values(
  table: &Table,
  column: &str,
  values: &[Cell],
) -> Result<Vec<Table>, Error> {
  let idx = table.column_index(column)?;
  Ok(values.iter().map(|value| table.rows_matching(idx, value)).collect())
}

/// Splits the table into the rows whose `flag_column` is 1, and those whose `flag_column` is 0.
/// Rows with any other value are in neither.
///
/// If `drop_flag`, the flag column is removed from both.
///
/// # Errors
///
/// If there is no such column.
pub fn split_by_flag(
  table: &Table,
  flag_column: &str,
  drop_flag: bool,
) -> Result<(Table, Table), Error> {
  let idx = table.column_index(flag_column)?;
  let mut on = table.rows_matching(idx, &Cell::Int(1));
  let mut off = table.rows_matching(idx, &Cell::Int(0));
  if drop_flag {
    on.remove_column(idx);
    off.remove_column(idx);
  }
  Ok((on, off))
}

/// An error when working with tables.
#[derive(Debug)]
pub enum Error {
  /// There was no column with this name.
  UnknownColumn(SmolStr),
  /// A row had the wrong number of cells.
  RowWidth {
    /// The number of columns.
    want: usize,
    /// The number of cells in the row.
    got: usize,
  },
  /// The path to write a spreadsheet to didn't have the `.xlsx` extension.
  InvalidExtension(PathBuf),
  /// The table had too many rows or columns for a spreadsheet.
  TooLarge,
  /// The spreadsheet couldn't be written.
  Xlsx(rust_xlsxwriter::XlsxError),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::UnknownColumn(name) => write!(f, "no column named {name:?}"),
      Error::RowWidth { want, got } => write!(f, "row has {got} cells, but there are {want} columns"),
      Error::InvalidExtension(path) => {
        write!(f, "{} is not an .{} file", path.display(), xlsx::EXTENSION)
      }
      Error::TooLarge => f.write_str("table too large for a spreadsheet"),
      Error::Xlsx(e) => write!(f, "couldn't write spreadsheet: {e}"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Xlsx(e) => Some(e),
      _ => None,
    }
  }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
  fn from(e: rust_xlsxwriter::XlsxError) -> Self {
    Error::Xlsx(e)
  }
}
