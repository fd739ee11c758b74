use crate::error::ReportError;
use roxmltree::{Document, Node};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Sentinel text standing in for a plugin that produced no output on a host.
/// Parsers treat any block containing this phrase as "check skipped".
pub const AUDIT_TRAIL: &str = "Check Audit Trail";

/// A fully parsed `.nessus` scan export.
#[derive(Debug)]
pub struct ScanReport {
    pub hosts: Vec<ReportHost>,
}

/// One `<ReportHost>` element: its name attribute, `<HostProperties>` tags
/// and the per-plugin finding entries.
#[derive(Debug)]
pub struct ReportHost {
    name: String,
    properties: HashMap<String, String>,
    items: Vec<ReportItem>,
}

/// One `<ReportItem>` finding entry on a host.
#[derive(Debug)]
pub struct ReportItem {
    pub plugin_id: u32,
    pub plugin_name: String,
    pub protocol: String,
    pub port: String,
    pub output: Option<String>,
}

impl ScanReport {
    /// Read and parse a `.nessus` file.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content = fs::read_to_string(path).map_err(|e| ReportError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse `.nessus` XML into an owned report.
    pub fn parse(xml: &str) -> Result<Self, ReportError> {
        let doc = Document::parse(xml)?;

        let hosts = doc
            .descendants()
            .filter(|n| n.has_tag_name("ReportHost"))
            .map(parse_host)
            .collect();

        Ok(Self { hosts })
    }
}

impl ReportHost {
    /// The host's IP address: the `host-ip` property, falling back to the
    /// `name` attribute of the `<ReportHost>` element.
    pub fn resolved_ip(&self) -> &str {
        self.properties
            .get("host-ip")
            .map(String::as_str)
            .unwrap_or(&self.name)
    }

    /// The host's fully qualified domain name, when the scanner resolved one.
    pub fn resolved_fqdn(&self) -> Option<&str> {
        self.properties.get("host-fqdn").map(String::as_str)
    }

    /// The OS description the scanner detected, when present.
    pub fn detected_os(&self) -> Option<&str> {
        self.properties.get("operating-system").map(String::as_str)
    }

    /// All output text recorded for a plugin on this host, joined with a
    /// blank line. Returns the [`AUDIT_TRAIL`] sentinel when the plugin left
    /// no output.
    pub fn plugin_output(&self, plugin_id: u32) -> String {
        let outputs: Vec<&str> = self
            .items
            .iter()
            .filter(|item| item.plugin_id == plugin_id)
            .filter_map(|item| item.output.as_deref())
            .collect();

        if outputs.is_empty() {
            AUDIT_TRAIL.to_string()
        } else {
            outputs.join("\n\n")
        }
    }

    /// The raw finding entries for this host.
    pub fn items(&self) -> &[ReportItem] {
        &self.items
    }
}

fn parse_host(node: Node) -> ReportHost {
    let name = node.attribute("name").unwrap_or_default().to_string();
    let mut properties = HashMap::new();
    let mut items = Vec::new();

    for child in node.children() {
        if child.has_tag_name("HostProperties") {
            for tag in child.children().filter(|c| c.has_tag_name("tag")) {
                if let (Some(key), Some(value)) = (tag.attribute("name"), tag.text()) {
                    properties.insert(key.to_string(), value.to_string());
                }
            }
        } else if child.has_tag_name("ReportItem") {
            match parse_item(child) {
                Some(item) => items.push(item),
                None => warn!(
                    "Skipping ReportItem without a numeric pluginID on host '{}'",
                    name
                ),
            }
        }
    }

    ReportHost {
        name,
        properties,
        items,
    }
}

fn parse_item(node: Node) -> Option<ReportItem> {
    let plugin_id = node.attribute("pluginID")?.parse().ok()?;

    let output = node
        .children()
        .find(|c| c.has_tag_name("plugin_output"))
        .map(node_text);

    Some(ReportItem {
        plugin_id,
        plugin_name: node.attribute("pluginName").unwrap_or_default().to_string(),
        protocol: node.attribute("protocol").unwrap_or_default().to_string(),
        port: node.attribute("port").unwrap_or_default().to_string(),
        output,
    })
}

/// Concatenated text content of a node, covering text split across entity
/// references and CDATA sections.
fn node_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::ScanReport;

    /// Build a minimal `.nessus` document from host fragments and parse it.
    pub fn scan(hosts: &[String]) -> ScanReport {
        let xml = format!(
            "<?xml version=\"1.0\"?><NessusClientData_v2><Report name=\"test\">{}</Report></NessusClientData_v2>",
            hosts.concat()
        );
        ScanReport::parse(&xml).expect("fixture scan parses")
    }

    /// One `<ReportHost>` fragment with the given properties and items.
    pub fn host(name: &str, props: &[(&str, &str)], items: &[String]) -> String {
        let mut xml = format!("<ReportHost name=\"{}\"><HostProperties>", name);
        for (key, value) in props {
            xml.push_str(&format!(
                "<tag name=\"{}\">{}</tag>",
                key,
                escape(value)
            ));
        }
        xml.push_str("</HostProperties>");
        for item in items {
            xml.push_str(item);
        }
        xml.push_str("</ReportHost>");
        xml
    }

    /// One `<ReportItem>` fragment.
    pub fn item(
        plugin_id: u32,
        plugin_name: &str,
        protocol: &str,
        port: &str,
        output: Option<&str>,
    ) -> String {
        let mut xml = format!(
            "<ReportItem pluginID=\"{}\" pluginName=\"{}\" protocol=\"{}\" port=\"{}\">",
            plugin_id, plugin_name, protocol, port
        );
        if let Some(text) = output {
            xml.push_str(&format!("<plugin_output>{}</plugin_output>", escape(text)));
        }
        xml.push_str("</ReportItem>");
        xml
    }

    /// Shorthand for an item where only the plugin output matters.
    pub fn output_item(plugin_id: u32, output: &str) -> String {
        item(plugin_id, "", "tcp", "0", Some(output))
    }

    fn escape(s: &str) -> String {
        s.replace('&', "&amp;").replace('<', "&lt;")
    }
}
