//! Defines the command-line interface for the application.

use crate::table::DEFAULT_COLUMNS;
use crate::{
    ExtractConfig, DEFAULT_DEST_DIR, DEFAULT_LINK_BASE, DEFAULT_MANIFEST, DEFAULT_OUTPUT,
    DEFAULT_PREFIX, DEFAULT_SOURCE_DIR,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "icon-extract",
    version,
    about = "Copy one subset of a vendor icon set into a local folder and render a markdown table of it."
)]
pub struct Cli {
    /// JSON manifest listing every icon as {"name", "path"}.
    #[arg(short, long, value_name = "MANIFEST_PATH", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Directory holding the vendor's `<identifier>.png` files.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Directory the selected icons are copied into.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_DEST_DIR)]
    pub dest_dir: PathBuf,

    /// Markdown file the table is written to.
    #[arg(short, long, value_name = "OUTPUT_PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of icons per table row.
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_COLUMNS, value_parser = parse_columns)]
    pub columns: usize,

    /// Keep only manifest entries whose path starts with this prefix.
    #[arg(short, long, value_name = "PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// URL prefix for each icon's link; the identifier and '/' are appended.
    #[arg(long, value_name = "URL", default_value = DEFAULT_LINK_BASE)]
    pub link_base: String,

    /// Create the destination directory if it does not exist.
    #[arg(long)]
    pub create_dest: bool,

    /// Print progress and the table to stdout without copying or writing files.
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_columns(value: &str) -> Result<usize, String> {
    let columns: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a whole number"))?;
    if columns == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(columns)
}

impl From<Cli> for ExtractConfig {
    fn from(cli: Cli) -> Self {
        ExtractConfig {
            manifest: cli.manifest,
            source_dir: cli.source_dir,
            dest_dir: cli.dest_dir,
            output: cli.output,
            columns: cli.columns,
            prefix: cli.prefix,
            link_base: cli.link_base,
            create_dest: cli.create_dest,
            dry_run: cli.dry_run,
        }
    }
}
