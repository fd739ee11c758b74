use super::{fqdn_or, RowIter};
use crate::output::{Column, SheetSpec};
use crate::report::{ScanReport, AUDIT_TRAIL};

const PLUGIN_ID: u32 = 66334;
const ACTION_MARKER: &str = "+ Action to take :";
// Stripped prefix includes the trailing space after the colon.
const ACTION_PREFIX: &str = "+ Action to take : ";

/// Generic fixes already covered by the patch categories.
const BOILERPLATE: [&str; 3] = [
    "Microsoft has released",
    "advisory",
    "Apply the workaround",
];

pub const SHEET: SheetSpec = SheetSpec {
    name: "Remediations",
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
            header: "Remediation Action",
            width: 190.0,
        },
    ],
};

/// Rows from the patch-report summary finding: one row per concrete
/// "+ Action to take :" line, with boilerplate fixes dropped.
pub fn rows(report: &ScanReport) -> RowIter<'_> {
    Box::new(report.hosts.iter().flat_map(|host| {
        let output = host.plugin_output(PLUGIN_ID);
        if output.contains(AUDIT_TRAIL) {
            return Vec::new();
        }

        let hostname = fqdn_or(host, "N/A");
        let ip = host.resolved_ip();

        let mut rows = Vec::new();
        for line in output.split('\n') {
            if !line.contains(ACTION_MARKER) {
                continue;
            }
            let fix = line.replace(ACTION_PREFIX, "");
            if BOILERPLATE.iter().any(|phrase| fix.contains(phrase)) {
                continue;
            }
            rows.push(vec![hostname.to_string(), ip.to_string(), fix]);
        }
        rows
    }))
}
