use crate::config::ScanConfig;
use anyhow::{Context, Result};
use std::fs;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct MotlEntry {
    /// Base name of the tomogram folder, e.g. "T4SS_0".
    pub folder: String,
    /// Full path of the matched motl file, or empty if the folder has none.
    pub motl_path: String,
    /// One-based tomogram number derived from the folder name.
    pub tomo_number: i64,
    /// How many files in the folder matched the suffix.
    pub matches: usize,
}

/// List the base names of the tomogram folders directly under the project
/// directory, in lexicographic order. The base name has any extension
/// stripped before the prefix test, so an entry like `T4SS_0.bak` still
/// qualifies (and is later read as `T4SS_0`).
pub fn candidate_folders(config: &ScanConfig) -> Result<Vec<String>> {
    let mut folders = Vec::new();

    for entry in WalkDir::new(&config.root_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("reading project directory {}", config.root_dir.display()))?;
        let base = match entry.path().file_stem().and_then(|s| s.to_str()) {
            Some(base) => base,
            None => continue,
        };
        if base.starts_with(&config.prefix) {
            folders.push(base.to_string());
        }
    }

    Ok(folders)
}

/// Locate the motl file in one tomogram folder and derive its tomogram
/// number. Keeps the last matching filename in lexicographic order; zero
/// matches leave the path empty. An unreadable folder or a folder name
/// without a trailing number aborts the scan.
pub fn scan_folder(config: &ScanConfig, base: &str) -> Result<MotlEntry> {
    let folder = config.root_dir.join(base);

    let mut names = Vec::new();
    let dir = fs::read_dir(&folder)
        .with_context(|| format!("reading tomogram folder {}", folder.display()))?;
    for entry in dir {
        let entry =
            entry.with_context(|| format!("reading tomogram folder {}", folder.display()))?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();

    let mut motl_name = String::new();
    let mut matches = 0;
    for name in &names {
        if name.ends_with(&config.suffix) {
            motl_name = name.clone();
            matches += 1;
        }
    }

    if matches > 1 {
        eprintln!(
            "Warning: {} files end in {} under {}; keeping {}",
            matches,
            config.suffix,
            folder.display(),
            motl_name
        );
    }

    let motl_path = if motl_name.is_empty() {
        String::new()
    } else {
        folder.join(&motl_name).to_string_lossy().into_owned()
    };

    Ok(MotlEntry {
        folder: base.to_string(),
        motl_path,
        tomo_number: tomo_number(base)?,
        matches,
    })
}

pub fn find_motls(config: &ScanConfig) -> Result<Vec<MotlEntry>> {
    let mut entries = Vec::new();
    for base in candidate_folders(config)? {
        entries.push(scan_folder(config, &base)?);
    }
    Ok(entries)
}

/// The folders follow a zero-based numbering convention (`T4SS_0`,
/// `T4SS_1`, ...); tomogram numbers are one-based.
fn tomo_number(base: &str) -> Result<i64> {
    let last = base.rsplit('_').next().unwrap_or(base);
    let number: i64 = last.parse().with_context(|| {
        format!("folder {base}: trailing segment {last:?} is not a tomogram number")
    })?;
    Ok(number + 1)
}
