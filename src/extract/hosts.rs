use super::{normalized_os, RowIter};
use crate::output::{Column, SheetSpec};
use crate::report::ScanReport;

pub const SHEET: SheetSpec = SheetSpec {
    name: "Host Information",
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
            header: "Operating System",
            width: 60.0,
        },
    ],
};

/// One row per scanned host, unconditionally. Hosts the scanner could not
/// name show "NA" when an OS was still detected, empty otherwise.
pub fn rows(report: &ScanReport) -> RowIter<'_> {
    Box::new(report.hosts.iter().map(|host| {
        let os = normalized_os(host);
        let hostname = match host.resolved_fqdn() {
            Some(fqdn) => fqdn,
            None if !os.is_empty() => "NA",
            None => "",
        };

        vec![
            hostname.to_string(),
            host.resolved_ip().to_string(),
            os.to_string(),
        ]
    }))
}
