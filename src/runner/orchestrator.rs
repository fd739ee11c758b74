use crate::error::OutputError;
use crate::extract::{Category, REGISTRY};
use crate::output::{Session, SheetWriter};
use crate::report::ScanReport;
use std::time::Duration;
use tracing::debug;

/// Runs the selected category parsers over one scan report, forwarding
/// their rows into the session's worksheets.
pub struct Orchestrator {
    categories: Vec<Category>,
}

#[derive(Debug)]
pub struct RunReport {
    pub category_results: Vec<CategoryResult>,
    pub total_duration: Duration,
}

impl RunReport {
    pub fn total_rows(&self) -> usize {
        self.category_results.iter().map(|r| r.rows).sum()
    }
}

#[derive(Debug)]
pub struct CategoryResult {
    pub sheet: &'static str,
    pub rows: usize,
    pub duration: Duration,
}

impl Orchestrator {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Walk the registry in canonical order, skipping unselected categories.
    /// Categories are independent; each gets its own worksheet, and the
    /// hosts category additionally feeds the plain-text host list.
    pub fn run(
        &self,
        report: &ScanReport,
        session: &mut Session,
    ) -> Result<RunReport, OutputError> {
        let start = std::time::Instant::now();
        let mut category_results = Vec::new();

        for spec in &REGISTRY {
            if !self.categories.contains(&spec.category) {
                continue;
            }

            let category_start = std::time::Instant::now();
            let mut sheet = SheetWriter::new(spec.sheet)?;

            let mut host_list = if spec.category == Category::Hosts {
                Some(session.host_list()?)
            } else {
                None
            };

            for row in (spec.rows)(report) {
                if let Some(list) = host_list.as_mut() {
                    // Reporter format wants ip first.
                    list.append(&row[1], &row[0], &row[2])?;
                }
                sheet.append_row(&row)?;
            }

            let result = CategoryResult {
                sheet: spec.sheet.name,
                rows: sheet.data_rows(),
                duration: category_start.elapsed(),
            };
            if result.rows == 0 {
                debug!("No {} rows found, hiding worksheet", result.sheet);
            } else {
                debug!(
                    "Completed {}: {} rows in {:.4} seconds",
                    result.sheet,
                    result.rows,
                    result.duration.as_secs_f64()
                );
            }
            session.attach(sheet);
            category_results.push(result);
        }

        Ok(RunReport {
            category_results,
            total_duration: start.elapsed(),
        })
    }
}
