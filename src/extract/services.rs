use super::{fqdn_or, RowIter};
use crate::output::{Column, SheetSpec};
use crate::report::{ScanReport, AUDIT_TRAIL};

const PLUGIN_ID: u32 = 65057;

pub const SHEET: SheetSpec = SheetSpec {
    name: "Insecure Service Permissions",
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
            width: 50.0,
        },
        Column {
            header: "Service Path",
            width: 85.0,
        },
        Column {
            header: "User / Group with Write permissions",
            width: 35.0,
        },
        Column {
            header: "User / Group with Full Control",
            width: 30.0,
        },
    ],
};

/// Rows from the weak-service-permissions finding. The output describes one
/// service per paragraph, one labelled field per line.
///
/// Field state is carried across paragraphs and hosts: a paragraph that
/// omits a field inherits the last seen value. Pinned by regression tests
/// below until confirmed against scanner output either way.
pub fn rows(report: &ScanReport) -> RowIter<'_> {
    let mut path = String::new();
    let mut services = String::new();
    let mut write_groups = String::new();
    let mut full_control = String::new();

    let mut rows = Vec::new();
    for host in &report.hosts {
        let output = host.plugin_output(PLUGIN_ID);
        if output.contains(AUDIT_TRAIL) {
            continue;
        }

        let hostname = fqdn_or(host, "");
        let ip = host.resolved_ip();

        for paragraph in output.split("\n\n") {
            for line in paragraph.lines() {
                // Commas would read as column breaks downstream.
                let line = line.replace(',', " &");

                if line.contains("Path") {
                    path = line.replace("Path : ", "");
                }
                if line.contains("Used by services") {
                    services = line.replace("Used by services : ", "");
                }
                if line.contains("File write allowed") {
                    write_groups = line.replace("File write allowed for groups : ", "");
                }
                if line.contains("Full control of directory") {
                    full_control = line.replace("Full control of directory allowed for groups : ", "");
                }
            }

            rows.push(vec![
                hostname.to_string(),
                ip.to_string(),
                services.clone(),
                path.clone(),
                write_groups.clone(),
                full_control.clone(),
            ]);
        }
    }

    Box::new(rows.into_iter())
}
