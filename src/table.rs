//! Rendering the icon map as a fixed-width markdown table.

use crate::error::ExtractError;
use crate::extract::IconMap;
use crate::{DEFAULT_DEST_DIR, DEFAULT_LINK_BASE};
use std::fs;
use std::path::Path;

pub const DEFAULT_COLUMNS: usize = 10;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub columns: usize,
    /// Directory the `<img>` source points into, with `/` separators.
    pub image_dir: String,
    /// Link target prefix; the identifier and a trailing `/` are appended.
    pub link_base: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            image_dir: DEFAULT_DEST_DIR.to_string(),
            link_base: DEFAULT_LINK_BASE.to_string(),
        }
    }
}

/// Renders the header, separator and body rows for `icons`.
///
/// Cells appear in map order, `columns` per row. A partially filled last row
/// is padded with empty cells.
pub fn render_table(icons: &IconMap, options: &RenderOptions) -> Result<String, ExtractError> {
    let columns = options.columns;
    if columns == 0 {
        return Err(ExtractError::InvalidColumns(columns));
    }

    let mut table = String::new();
    table.push_str(&"| ".repeat(columns));
    table.push_str("|\n");
    table.push_str(&"| ---  ".repeat(columns));
    table.push_str("|\n");

    let mut place = 0;
    for (name, identifier) in icons.iter() {
        table.push('|');
        table.push_str(&render_cell(name, identifier, options));

        place += 1;
        if place == columns {
            table.push_str("|\n");
            place = 0;
        }
    }

    if place > 0 {
        table.push_str(&"| ".repeat(columns - place));
        table.push_str("|\n");
    }

    Ok(table)
}

fn render_cell(name: &str, identifier: &str, options: &RenderOptions) -> String {
    format!(
        "{name}<br>[<img alt='{name}' src='{dir}/{identifier}.png'>]({base}{identifier}/)",
        dir = options.image_dir,
        base = options.link_base,
    )
}

/// Renders `icons` and writes the table to `path`, replacing any existing file.
pub fn write_table(
    path: &Path,
    icons: IconMap,
    options: &RenderOptions,
) -> Result<(), ExtractError> {
    let table = render_table(&icons, options)?;
    fs::write(path, table).map_err(|source| ExtractError::TableWrite {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote {} icon(s) to {}", icons.len(), path.display());
    Ok(())
}
