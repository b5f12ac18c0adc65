//! Spreadsheet export
//!
//! Turns email records into a downloadable `.xlsx` workbook. Row assembly
//! and workbook layout live in [`workbook`]; the browser decides which
//! records participate.

pub mod workbook;

pub use workbook::{build_workbook, export_filename, ExportRow};

/// A fully serialized export, ready to be written to disk
#[derive(Debug)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}
