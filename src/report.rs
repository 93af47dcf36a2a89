use crate::scan::MotlEntry;
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub folder: String,
    pub tomo_number: i64,
    pub motl_file: String,
    pub matches: usize,
}

/// Write a CSV report with one row per tomogram folder. Unlike the space
/// joined manifests this keeps the match count, so folders with zero or
/// several result files can be audited after the run.
pub fn write_report(entries: &[MotlEntry], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    for entry in entries {
        writer.serialize(ReportRow {
            folder: entry.folder.clone(),
            tomo_number: entry.tomo_number,
            motl_file: entry.motl_path.clone(),
            matches: entry.matches,
        })?;
    }
    writer.flush()?;
    Ok(())
}
