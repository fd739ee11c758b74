use super::{eol, fqdn_or, normalized_os, RowIter};
use crate::output::{Column, SheetSpec};
use crate::report::ScanReport;

pub const SHEET: SheetSpec = SheetSpec {
    name: "Unsupported Operating Systems",
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
            width: 55.0,
        },
        Column {
            header: "End of Mainstream Support Date",
            width: 31.0,
        },
        Column {
            header: "End of Extended Support Date",
            width: 29.0,
        },
        Column {
            header: "End of Extended Security Update (ESU) Program Date",
            width: 50.0,
        },
    ],
};

/// One row per end-of-life product named in the detected OS description,
/// matched by substring. An OS naming several products yields several rows.
pub fn rows(report: &ScanReport) -> RowIter<'_> {
    Box::new(report.hosts.iter().flat_map(|host| {
        let os = normalized_os(host);
        let hostname = fqdn_or(host, "N/A");
        let ip = host.resolved_ip();

        eol::ENTRIES
            .iter()
            .filter(move |entry| os.contains(entry.product))
            .map(move |entry| {
                vec![
                    hostname.to_string(),
                    ip.to_string(),
                    os.to_string(),
                    eol::support_date(entry.mainstream_end),
                    eol::support_date(entry.extended_end),
                    entry.esu_end.map(eol::support_date).unwrap_or_default(),
                ]
            })
    }))
}
