use crate::error::OutputError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Side file consumed by reporting tools, written next to the workbook.
pub const HOST_LIST_FILE: &str = "Host Information.txt";

/// Append-mode writer for the `ip hostname os` host list. Lines accumulate
/// across runs against the same destination; callers wanting a fresh list
/// must remove the file first.
pub struct HostList {
    file: File,
}

impl HostList {
    pub fn append_to(path: &Path) -> Result<Self, OutputError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(OutputError::HostList)?;
        Ok(Self { file })
    }

    pub fn append(&mut self, ip: &str, hostname: &str, os: &str) -> Result<(), OutputError> {
        writeln!(self.file, "{} {} {}", ip, hostname, os).map_err(OutputError::HostList)
    }
}
