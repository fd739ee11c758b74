use crate::cli::Cli;
use crate::extract;
use crate::output::{Session, HOST_LIST_FILE};
use crate::report::ScanReport;
use crate::runner::Orchestrator;
use std::time::Instant;
use tracing::debug;

pub fn execute(args: Cli) -> anyhow::Result<()> {
    let start = Instant::now();

    let out = ensure_xlsx_extension(args.out);

    if !args.file.is_file() {
        anyhow::bail!("Scan file not found: {}", args.file.display());
    }

    let categories = extract::resolve_selection(&args.module);
    if categories.is_empty() {
        anyhow::bail!("No recognized categories in {:?}", args.module);
    }
    debug!(
        "Categories selected: {}",
        categories
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let report = ScanReport::load(&args.file)?;
    debug!(
        "Parsed {} hosts from {}",
        report.hosts.len(),
        args.file.display()
    );

    // Outputs land in the working directory, as reporting tools expect.
    let cwd = std::env::current_dir()?;
    let workbook_path = cwd.join(&out);
    let host_list_path = cwd.join(HOST_LIST_FILE);
    debug!("Using Excel output file: {}", workbook_path.display());

    let mut session = Session::create(workbook_path, host_list_path);
    let run = Orchestrator::new(categories).run(&report, &mut session)?;
    let saved = session.finish()?;

    debug!(
        "Extracted {} rows across {} categories in {:.4} seconds",
        run.total_rows(),
        run.category_results.len(),
        run.total_duration.as_secs_f64()
    );
    println!(
        "COMPLETED! Output can be found in {}. Total time taken: {:.4} seconds",
        saved.display(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn ensure_xlsx_extension(out: String) -> String {
    if out.contains(".xlsx") {
        return out;
    }
    let out = format!("{}.xlsx", out);
    debug!("Output file does not contain extension, new value: {}", out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_appended_when_missing() {
        assert_eq!(ensure_xlsx_extension("report".to_string()), "report.xlsx");
    }

    #[test]
    fn test_extension_kept_when_present() {
        assert_eq!(
            ensure_xlsx_extension("report.xlsx".to_string()),
            "report.xlsx"
        );
        assert_eq!(
            ensure_xlsx_extension("client.xlsx.bak".to_string()),
            "client.xlsx.bak"
        );
    }
}
