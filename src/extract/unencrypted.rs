use super::{fqdn_or, RowIter};
use crate::output::{Column, SheetSpec};
use crate::report::ScanReport;

/// Detection findings for services that speak a cleartext protocol: FTP,
/// various web servers over plain HTTP, Telnet, POP3, IMAP, SMTP, rlogin,
/// rsh and VNC.
const CLEARTEXT_PLUGINS: [u32; 12] = [
    10092, 10281, 54582, 11819, 35296, 87733, 10203, 10205, 10061, 10198, 10891, 65792,
];

pub const SHEET: SheetSpec = SheetSpec {
    name: "Unencrypted Protocols",
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
            header: "Protocol",
            width: 10.0,
        },
        Column {
            header: "Port",
            width: 6.0,
        },
        Column {
            header: "Description",
            width: 50.0,
        },
    ],
};

/// One row per finding entry whose identifier is on the cleartext
/// allow-list. Membership is the whole filter; the output text is unused.
pub fn rows(report: &ScanReport) -> RowIter<'_> {
    Box::new(report.hosts.iter().flat_map(|host| {
        let hostname = fqdn_or(host, "");
        let ip = host.resolved_ip();

        host.items()
            .iter()
            .filter(|item| CLEARTEXT_PLUGINS.contains(&item.plugin_id))
            .map(move |item| {
                vec![
                    hostname.to_string(),
                    ip.to_string(),
                    item.protocol.clone(),
                    item.port.clone(),
                    item.plugin_name.clone(),
                ]
            })
    }))
}
