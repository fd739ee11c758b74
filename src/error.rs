use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read scan file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse scan file: {0}")]
    Parse(#[from] roxmltree::Error),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to write host list: {0}")]
    HostList(std::io::Error),
}
