//! Filtering manifest records down to one icon subset and copying their
//! image files into the curated folder.

use crate::error::ExtractError;
use crate::manifest::IconRecord;
use indexmap::IndexMap;
use std::fs::{self, File, FileTimes};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Ordered `name -> identifier` lookup. Iteration follows first insertion of
/// each name; re-inserting a name replaces its identifier in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IconMap {
    entries: IndexMap<String, String>,
}

impl IconMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name -> identifier`, returning the identifier it replaced.
    pub fn insert(&mut self, name: String, identifier: String) -> Option<String> {
        self.entries.insert(name, identifier)
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, identifier)| (name.as_str(), identifier.as_str()))
    }
}

impl<N: Into<String>, I: Into<String>> FromIterator<(N, I)> for IconMap {
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut map = IconMap::new();
        for (name, identifier) in iter {
            map.insert(name.into(), identifier.into());
        }
        map
    }
}

/// Settings for the filter & copy stage.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    /// Records are kept when their `path` starts with this prefix.
    pub prefix: String,
    pub create_dest: bool,
    /// Build the map and report progress without touching the filesystem.
    pub dry_run: bool,
}

/// Returns the identifier for `path`, or `None` when the record lies outside
/// the icon subset named by `prefix`. Every `"<prefix>/"` in the path is
/// removed, not only the leading one.
pub fn derive_identifier(path: &str, prefix: &str) -> Option<String> {
    if !path.starts_with(prefix) {
        return None;
    }
    Some(path.replace(&format!("{prefix}/"), ""))
}

/// Destination for the icon read from `source`: always directly inside
/// `dest_dir`, even when the identifier names a nested source file.
fn flat_destination(source: &Path, dest_dir: &Path) -> PathBuf {
    match source.file_name() {
        Some(file_name) => dest_dir.join(file_name),
        None => dest_dir.to_path_buf(),
    }
}

/// Runs the filter & copy stage over `records` in order, writing one
/// `Extracting: <identifier>: <name>` line per kept record to `progress`.
///
/// The first failing copy aborts the run; files copied before it stay in place.
pub fn extract_icons<W: Write>(
    records: Vec<IconRecord>,
    options: &ExtractOptions,
    progress: &mut W,
) -> Result<IconMap, ExtractError> {
    if !options.dry_run {
        prepare_destination(&options.dest_dir, options.create_dest)?;
    }

    let mut icons = IconMap::new();
    let mut skipped = 0usize;

    for IconRecord { name, path } in records {
        let Some(identifier) = derive_identifier(&path, &options.prefix) else {
            log::debug!("Skipping '{name}': path '{path}' is outside the icon subset");
            skipped += 1;
            continue;
        };

        writeln!(progress, "Extracting: {identifier}: {name}").map_err(ExtractError::Progress)?;

        if !options.dry_run {
            let source = options.source_dir.join(format!("{identifier}.png"));
            let destination = flat_destination(&source, &options.dest_dir);
            copy_icon(&source, &destination)?;
        }

        if let Some(previous) = icons.insert(name.clone(), identifier.clone()) {
            log::warn!(
                "Icon name '{name}' appears more than once; '{identifier}' replaces '{previous}'"
            );
        }
    }

    log::info!(
        "Extracted {} icon(s), skipped {} record(s) outside '{}'",
        icons.len(),
        skipped,
        options.prefix
    );
    Ok(icons)
}

fn prepare_destination(dest_dir: &Path, create: bool) -> Result<(), ExtractError> {
    if dest_dir.is_dir() {
        return Ok(());
    }
    if !create {
        return Err(ExtractError::DestinationMissing(dest_dir.to_path_buf()));
    }

    log::info!("Creating destination directory {}", dest_dir.display());
    fs::create_dir_all(dest_dir).map_err(|source| ExtractError::CreateDestination {
        path: dest_dir.to_path_buf(),
        source,
    })
}

/// Copies `from` over `to`, carrying permissions and file times along.
fn copy_icon(from: &Path, to: &Path) -> Result<(), ExtractError> {
    if !from.is_file() {
        return Err(ExtractError::SourceMissing(from.to_path_buf()));
    }

    log::debug!("Copying {} -> {}", from.display(), to.display());
    fs::copy(from, to).map_err(|source| ExtractError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;

    preserve_times(from, to).map_err(|source| ExtractError::PreserveMetadata {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

fn preserve_times(from: &Path, to: &Path) -> std::io::Result<()> {
    let metadata = fs::metadata(from)?;
    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    // Access time is not tracked on every platform.
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    File::options().write(true).open(to)?.set_times(times)
}
