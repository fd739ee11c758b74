pub mod run;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nessex")]
#[command(
    author,
    version,
    about = "Extract useful information out of Nessus scan files into an Excel workbook"
)]
pub struct Cli {
    /// .nessus file to extract from
    #[arg(short, long)]
    pub file: PathBuf,

    /// Name of the resulting workbook (extension optional)
    #[arg(short, long, default_value = "ExtractedData.xlsx")]
    pub out: String,

    /// Categories to extract, comma separated: hosts, patches, remediations,
    /// services, software, unencrypted, unquoted, unsupported or all
    #[arg(short, long, default_value = "all", value_delimiter = ',')]
    pub module: Vec<String>,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
