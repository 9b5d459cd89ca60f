use thiserror::Error;

/// Data-quality problems found in the input files.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("duplicate short_name {short_name:?} for country {country:?}")]
    DuplicateShortName { country: String, short_name: String },

    #[error("banks_data is empty")]
    NoBanks,
}

/// Failures while shaping filtered rows for display.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("duplicate table key {0:?}: rows must be unique per short_name")]
    DuplicateKey(String),
}

/// Failures while encoding a spreadsheet.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("spreadsheet encoding error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
