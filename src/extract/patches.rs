use super::{drop_last_chars, fqdn_or, skip_chars, RowIter};
use crate::output::{Column, SheetSpec};
use crate::report::{ScanReport, AUDIT_TRAIL};
use tracing::warn;

const PLUGIN_ID: u32 = 38153;
const HEADER_LINE: &str = "The patches for the following bulletins";

pub const SHEET: SheetSpec = SheetSpec {
    name: "Missing Microsoft Patches",
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
            header: "Missing Security Patch",
            width: 22.0,
        },
        Column {
            header: "Vendor Advisory",
            width: 60.0,
        },
    ],
};

/// Rows from the missing-patches summary finding. A useful line reads like
/// `"  - MS17-010 ( https://technet.microsoft.com/... )."` and is split on
/// its first parenthesis into bulletin and advisory link.
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
                match line.split_once('(') {
                    Some((patch, advisory)) => rows.push(vec![
                        hostname.to_string(),
                        ip.to_string(),
                        skip_chars(patch, 3).trim().to_string(),
                        drop_last_chars(advisory, 3).trim().to_string(),
                    ]),
                    None => warn!("Skipping patch line without advisory: '{}'", line),
                }
            }
        }
        rows
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;

    const OUTPUT: &str = "The patches for the following bulletins or KBs are missing on the remote host :\n\n  - MS17-010 ( https://technet.microsoft.com/library/security/MS17-010 ).\n  - MS16-120 ( https://technet.microsoft.com/library/security/MS16-120 ).";

    #[test]
    fn test_splits_bulletin_and_advisory() {
        let report = fixtures::scan(&[fixtures::host(
            "10.0.0.5",
            &[("host-fqdn", "dc01.example.test")],
            &[fixtures::output_item(PLUGIN_ID, OUTPUT)],
        )]);

        let rows: Vec<_> = rows(&report).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec![
                "dc01.example.test".to_string(),
                "10.0.0.5".to_string(),
                "MS17-010".to_string(),
                "https://technet.microsoft.com/library/security/MS17-010".to_string(),
            ]
        );
        assert_eq!(rows[1][2], "MS16-120");
    }

    #[test]
    fn test_header_and_blank_lines_dropped() {
        let report = fixtures::scan(&[fixtures::host(
            "10.0.0.5",
            &[],
            &[fixtures::output_item(
                PLUGIN_ID,
                "The patches for the following bulletins are missing :\n\n  - MS12-034 ( http://example.test/a ).",
            )],
        )]);

        assert_eq!(rows(&report).count(), 1);
    }

    #[test]
    fn test_audit_trail_host_skipped() {
        let report = fixtures::scan(&[fixtures::host("10.0.0.5", &[], &[])]);

        assert_eq!(rows(&report).count(), 0);
    }

    #[test]
    fn test_malformed_line_skipped_not_fatal() {
        let report = fixtures::scan(&[fixtures::host(
            "10.0.0.5",
            &[],
            &[fixtures::output_item(
                PLUGIN_ID,
                "  - MS17-010 ( http://example.test/a ).\n  - stray line with no advisory",
            )],
        )]);

        let rows: Vec<_> = rows(&report).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][2], "MS17-010");
    }

    #[test]
    fn test_missing_fqdn_falls_back() {
        let report = fixtures::scan(&[fixtures::host(
            "10.0.0.5",
            &[],
            &[fixtures::output_item(
                PLUGIN_ID,
                "  - MS17-010 ( http://example.test/a ).",
            )],
        )]);

        let rows: Vec<_> = rows(&report).collect();
        assert_eq!(rows[0][0], "N/A");
    }
}
