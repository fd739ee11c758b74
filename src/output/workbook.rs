use crate::error::OutputError;
use crate::output::HostList;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::PathBuf;

// Filter range mirrors the reporting tools fed from these sheets.
const AUTOFILTER_LAST_ROW: u32 = 999_999;

/// Column schema for one category worksheet. Widths are cosmetic hints;
/// the format has no autofit.
#[derive(Debug, Clone, Copy)]
pub struct SheetSpec {
    pub name: &'static str,
    pub columns: &'static [Column],
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width: f64,
}

/// A worksheet being filled for one category. Header row and autofilter are
/// in place from the start; data rows follow.
pub struct SheetWriter {
    worksheet: Worksheet,
    next_row: u32,
}

impl SheetWriter {
    pub fn new(spec: SheetSpec) -> Result<Self, OutputError> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(spec.name)?;

        for (idx, column) in spec.columns.iter().enumerate() {
            let col = idx as u16;
            worksheet.set_column_width(col, column.width)?;
            worksheet.write(0, col, column.header)?;
        }
        if !spec.columns.is_empty() {
            worksheet.autofilter(0, 0, AUTOFILTER_LAST_ROW, (spec.columns.len() - 1) as u16)?;
        }

        Ok(Self {
            worksheet,
            next_row: 1,
        })
    }

    pub fn append_row(&mut self, row: &[String]) -> Result<(), OutputError> {
        for (idx, value) in row.iter().enumerate() {
            self.worksheet.write(self.next_row, idx as u16, value)?;
        }
        self.next_row += 1;
        Ok(())
    }

    /// Data rows written so far, excluding the header row.
    pub fn data_rows(&self) -> usize {
        (self.next_row - 1) as usize
    }
}

/// One extraction run's output: the workbook under construction plus the
/// destination paths. Owns every worksheet until [`finish`](Self::finish)
/// saves the file.
pub struct Session {
    workbook: Workbook,
    workbook_path: PathBuf,
    host_list_path: PathBuf,
}

impl Session {
    pub fn create(workbook_path: PathBuf, host_list_path: PathBuf) -> Self {
        Self {
            workbook: Workbook::new(),
            workbook_path,
            host_list_path,
        }
    }

    /// Open the plain-text host list for appending.
    pub fn host_list(&self) -> Result<HostList, OutputError> {
        HostList::append_to(&self.host_list_path)
    }

    /// Take ownership of a finished sheet. Sheets that collected no data
    /// rows are hidden; the format has no way to delete them.
    pub fn attach(&mut self, mut sheet: SheetWriter) {
        if sheet.data_rows() == 0 {
            sheet.worksheet.set_hidden(true);
        }
        self.workbook.push_worksheet(sheet.worksheet);
    }

    /// Save the workbook and hand back its path.
    pub fn finish(mut self) -> Result<PathBuf, OutputError> {
        self.workbook.save(&self.workbook_path)?;
        Ok(self.workbook_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: SheetSpec = SheetSpec {
        name: "Test Sheet",
        columns: &[
            Column {
                header: "Hostname",
                width: 40.0,
            },
            Column {
                header: "IP Address",
                width: 15.0,
            },
        ],
    };

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_data_rows_excludes_header() {
        let mut sheet = SheetWriter::new(SPEC).unwrap();
        assert_eq!(sheet.data_rows(), 0);

        sheet.append_row(&row(&["a.example.test", "10.0.0.1"])).unwrap();
        sheet.append_row(&row(&["b.example.test", "10.0.0.2"])).unwrap();
        assert_eq!(sheet.data_rows(), 2);
    }

    #[test]
    fn test_session_saves_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let workbook_path = dir.path().join("out.xlsx");
        let mut session =
            Session::create(workbook_path.clone(), dir.path().join("hosts.txt"));

        let mut filled = SheetWriter::new(SPEC).unwrap();
        filled.append_row(&row(&["a.example.test", "10.0.0.1"])).unwrap();
        session.attach(filled);

        let empty = SheetWriter::new(SheetSpec {
            name: "Empty Sheet",
            columns: SPEC.columns,
        })
        .unwrap();
        session.attach(empty);

        let saved = session.finish().unwrap();
        assert_eq!(saved, workbook_path);
        assert!(workbook_path.is_file());
    }

    #[test]
    fn test_host_list_path_used() {
        let dir = tempfile::tempdir().unwrap();
        let list_path = dir.path().join("hosts.txt");
        let session = Session::create(dir.path().join("out.xlsx"), list_path.clone());

        let mut list = session.host_list().unwrap();
        list.append("10.0.0.1", "a.example.test", "Linux").unwrap();
        drop(list);

        let content = std::fs::read_to_string(&list_path).unwrap();
        assert_eq!(content, "10.0.0.1 a.example.test Linux\n");
    }
}
