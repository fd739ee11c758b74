use super::{fqdn_or, RowIter};
use crate::output::{Column, SheetSpec};
use crate::report::{ScanReport, AUDIT_TRAIL};
use regex::Regex;

const PLUGIN_ID: u32 = 20811;

const PREAMBLES: [&str; 2] = [
    "The following software are installed on the remote host :\n\n",
    "The following updates are installed :\n\n",
];

pub const SHEET: SheetSpec = SheetSpec {
    name: "Installed Third Party Software",
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
            header: "Installed Software",
            width: 170.0,
        },
    ],
};

/// Rows from the installed-software enumeration. Lines are kept verbatim
/// apart from dropping blanks and Windows update entries like
/// `"  KB4056894"`, which belong in the patch categories.
pub fn rows(report: &ScanReport) -> RowIter<'_> {
    let kb_line = Regex::new(r"^  KB\d[0-9]{5,8}").ok();

    Box::new(report.hosts.iter().flat_map(move |host| {
        let output = host.plugin_output(PLUGIN_ID);
        if output.contains(AUDIT_TRAIL) {
            return Vec::new();
        }

        let mut listing = output;
        for preamble in PREAMBLES {
            listing = listing.replace(preamble, "");
        }

        let hostname = fqdn_or(host, "");
        let ip = host.resolved_ip();

        let mut rows = Vec::new();
        for installed in listing.split('\n') {
            if installed.is_empty()
                || kb_line.as_ref().is_some_and(|re| re.is_match(installed))
            {
                continue;
            }
            rows.push(vec![
                hostname.to_string(),
                ip.to_string(),
                installed.to_string(),
            ]);
        }
        rows
    }))
}
