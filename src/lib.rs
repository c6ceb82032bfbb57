//! Core library for icon-extract: curates one subset of a vendor icon set
//! into a local folder and renders a markdown reference table for it.
//!
//! A run has three phases, each in its own module:
//!
//! 1. [`manifest`] decodes the JSON icon list.
//! 2. [`extract`] keeps the records of one subset, copies their images and
//!    builds the ordered [`IconMap`](extract::IconMap).
//! 3. [`table`] renders that map as a fixed-width markdown table.
//!
//! [`run_pipeline`] chains the three over an [`ExtractConfig`].

pub mod cli;
pub mod error;
pub mod extract;
pub mod manifest;
pub mod table;

use crate::error::ExtractError;
use crate::extract::{extract_icons, ExtractOptions};
use crate::manifest::load_manifest;
use crate::table::{render_table, write_table, RenderOptions, DEFAULT_COLUMNS};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST: &str = "icons.json";
pub const DEFAULT_SOURCE_DIR: &str = "openmoji-72x72-color";
pub const DEFAULT_DEST_DIR: &str = "icons/openmoji";
pub const DEFAULT_OUTPUT: &str = "icons_table.md";
pub const DEFAULT_PREFIX: &str = "openmoji";
pub const DEFAULT_LINK_BASE: &str = "https://openmoji.org/library/emoji-";

/// Everything a run needs. `Default` yields the stock OpenMoji layout
/// relative to the working directory.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub manifest: PathBuf,
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub output: PathBuf,
    pub columns: usize,
    pub prefix: String,
    pub link_base: String,
    pub create_dest: bool,
    pub dry_run: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            dest_dir: PathBuf::from(DEFAULT_DEST_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            columns: DEFAULT_COLUMNS,
            prefix: DEFAULT_PREFIX.to_string(),
            link_base: DEFAULT_LINK_BASE.to_string(),
            create_dest: false,
            dry_run: false,
        }
    }
}

impl ExtractConfig {
    fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            source_dir: self.source_dir.clone(),
            dest_dir: self.dest_dir.clone(),
            prefix: self.prefix.clone(),
            create_dest: self.create_dest,
            dry_run: self.dry_run,
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            columns: self.columns,
            image_dir: image_dir(&self.dest_dir),
            link_base: self.link_base.clone(),
        }
    }
}

/// The destination directory as it appears in `<img src>`: `/`-separated,
/// without a trailing separator.
fn image_dir(dest_dir: &Path) -> String {
    let dir = dest_dir.to_string_lossy().replace('\\', "/");
    dir.trim_end_matches('/').to_string()
}

/// Loads the manifest, extracts the icon subset and renders the table.
///
/// Progress lines go to `out`. On a dry run the rendered table follows them
/// on `out` as well, and nothing is written to disk. Returns the number of
/// icons in the table.
pub fn run_pipeline<W: Write>(config: &ExtractConfig, out: &mut W) -> Result<usize, ExtractError> {
    let render_options = config.render_options();
    if render_options.columns == 0 {
        return Err(ExtractError::InvalidColumns(render_options.columns));
    }

    let records = load_manifest(&config.manifest)?;
    let icons = extract_icons(records, &config.extract_options(), out)?;
    let count = icons.len();
    if icons.is_empty() {
        log::warn!(
            "No manifest entries start with '{}'; the table will have no icons",
            config.prefix
        );
    }

    if config.dry_run {
        let table = render_table(&icons, &render_options)?;
        out.write_all(table.as_bytes())
            .map_err(ExtractError::Progress)?;
    } else {
        write_table(&config.output, icons, &render_options)?;
    }

    Ok(count)
}
