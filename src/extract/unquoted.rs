use super::{fqdn_or, RowIter};
use crate::output::{Column, SheetSpec};
use crate::report::{ScanReport, AUDIT_TRAIL};
use tracing::warn;

const PLUGIN_ID: u32 = 63155;
const HEADER_LINE: &str = "Nessus found the following";

pub const SHEET: SheetSpec = SheetSpec {
    name: "Unquoted Service Paths",
    columns: &[
        Column {
            header: "Hostname",
            width: 40.0,
        },
        Column {
            header: "IP Address",
            width: 15.0,
        },
        Column {
            header: "Service Name",
            width: 40.0,
        },
        Column {
            header: "Service Path",
            width: 140.0,
        },
    ],
};

/// Rows from the unquoted-service-path finding. A useful line reads like
/// `"BadService : C:\Program Files\Bad App\app.exe"` and is split on its
/// first colon.
pub fn rows(report: &ScanReport) -> RowIter<'_> {
    Box::new(report.hosts.iter().flat_map(|host| {
        let output = host.plugin_output(PLUGIN_ID);
        if output.contains(AUDIT_TRAIL) {
            return Vec::new();
        }

        let hostname = fqdn_or(host, "N/A");
        let ip = host.resolved_ip();

        let mut rows = Vec::new();
        for line in output.lines() {
            if line.chars().count() > 2 && !line.contains(HEADER_LINE) {
                match line.split_once(':') {
                    Some((service, path)) => rows.push(vec![
                        hostname.to_string(),
                        ip.to_string(),
                        service.trim().to_string(),
                        path.trim().to_string(),
                    ]),
                    None => warn!("Skipping service line without path: '{}'", line),
                }
            }
        }
        rows
    }))
}
