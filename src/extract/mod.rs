mod eol;
mod hosts;
mod patches;
mod remediations;
mod services;
mod software;
mod unencrypted;
mod unquoted;
mod unsupported;

use crate::output::SheetSpec;
use crate::report::{ReportHost, ScanReport};
use std::collections::HashSet;
use tracing::warn;

/// One normalized output row, always (hostname, ip, ...category fields).
pub type Row = Vec<String>;

/// Lazy sequence of rows produced by one category parser.
pub type RowIter<'a> = Box<dyn Iterator<Item = Row> + 'a>;

type RowsFn = for<'a> fn(&'a ScanReport) -> RowIter<'a>;

/// The eight extraction categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Hosts,
    Patches,
    Remediations,
    Services,
    Software,
    Unencrypted,
    Unquoted,
    Unsupported,
}

/// Every category, in canonical execution order.
pub const ALL: [Category; 8] = [
    Category::Hosts,
    Category::Patches,
    Category::Remediations,
    Category::Services,
    Category::Software,
    Category::Unencrypted,
    Category::Unquoted,
    Category::Unsupported,
];

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Hosts => write!(f, "hosts"),
            Category::Patches => write!(f, "patches"),
            Category::Remediations => write!(f, "remediations"),
            Category::Services => write!(f, "services"),
            Category::Software => write!(f, "software"),
            Category::Unencrypted => write!(f, "unencrypted"),
            Category::Unquoted => write!(f, "unquoted"),
            Category::Unsupported => write!(f, "unsupported"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hosts" => Ok(Category::Hosts),
            "patches" => Ok(Category::Patches),
            "remediations" => Ok(Category::Remediations),
            "services" => Ok(Category::Services),
            "software" => Ok(Category::Software),
            "unencrypted" => Ok(Category::Unencrypted),
            "unquoted" => Ok(Category::Unquoted),
            "unsupported" => Ok(Category::Unsupported),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Everything the orchestrator needs to run one category: its identity, the
/// worksheet schema and the parsing function.
pub struct CategorySpec {
    pub category: Category,
    pub sheet: SheetSpec,
    pub rows: RowsFn,
}

/// Category descriptors in canonical execution order.
pub const REGISTRY: [CategorySpec; 8] = [
    CategorySpec {
        category: Category::Hosts,
        sheet: hosts::SHEET,
        rows: hosts::rows,
    },
    CategorySpec {
        category: Category::Patches,
        sheet: patches::SHEET,
        rows: patches::rows,
    },
    CategorySpec {
        category: Category::Remediations,
        sheet: remediations::SHEET,
        rows: remediations::rows,
    },
    CategorySpec {
        category: Category::Services,
        sheet: services::SHEET,
        rows: services::rows,
    },
    CategorySpec {
        category: Category::Software,
        sheet: software::SHEET,
        rows: software::rows,
    },
    CategorySpec {
        category: Category::Unencrypted,
        sheet: unencrypted::SHEET,
        rows: unencrypted::rows,
    },
    CategorySpec {
        category: Category::Unquoted,
        sheet: unquoted::SHEET,
        rows: unquoted::rows,
    },
    CategorySpec {
        category: Category::Unsupported,
        sheet: unsupported::SHEET,
        rows: unsupported::rows,
    },
];

/// Resolve requested category names into categories to run.
///
/// "all" selects every category. Unrecognized names are logged and dropped
/// so the recognized ones still run. The result is deduplicated and kept in
/// canonical order regardless of request order.
pub fn resolve_selection(names: &[String]) -> Vec<Category> {
    let trimmed: Vec<&str> = names.iter().map(|n| n.trim()).collect();

    if trimmed.iter().any(|name| *name == "all") {
        return ALL.to_vec();
    }

    let mut selected = HashSet::new();
    for name in trimmed {
        match name.parse::<Category>() {
            Ok(category) => {
                selected.insert(category);
            }
            Err(err) => warn!("{}, omitting", err),
        }
    }

    ALL.into_iter().filter(|c| selected.contains(c)).collect()
}

/// Preferred display name for a host, with a category-specific fallback for
/// hosts the scanner could not resolve.
fn fqdn_or<'a>(host: &'a ReportHost, fallback: &'a str) -> &'a str {
    host.resolved_fqdn().unwrap_or(fallback)
}

/// Detected OS, discarded to empty when absent or multi-line. Multi-line
/// values mean the scanner could not settle on one OS.
fn normalized_os(host: &ReportHost) -> &str {
    match host.detected_os() {
        Some(os) if !os.contains('\n') => os,
        _ => "",
    }
}

/// The string minus its first `n` characters, empty when shorter.
fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

/// The string minus its last `n` characters, empty when shorter.
fn drop_last_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    match s.char_indices().nth_back(n - 1) {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}
