use crate::scan::MotlEntry;
use anyhow::{Context, Result};
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Split the scan result into the two aligned sequences the downstream
/// loader expects: motl paths and tomogram numbers, same order, same length.
pub fn split_entries(entries: &[MotlEntry]) -> (Vec<String>, Vec<i64>) {
    let paths = entries.iter().map(|e| e.motl_path.clone()).collect();
    let numbers = entries.iter().map(|e| e.tomo_number).collect();
    (paths, numbers)
}

/// Overwrite the two manifest files. Each is a single line of entries joined
/// by one space, no trailing newline; a folder without a motl file
/// contributes an empty string to the paths manifest.
pub fn write_manifests(
    entries: &[MotlEntry],
    motls_out: &Path,
    tomonums_out: &Path,
) -> Result<()> {
    let (paths, numbers) = split_entries(entries);
    write_line(motls_out, &paths)?;
    write_line(tomonums_out, &numbers)?;
    Ok(())
}

fn write_line<T: Display>(path: &Path, items: &[T]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating manifest {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(writer, " ")?;
        }
        write!(writer, "{item}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a manifest back into its entries by splitting on single spaces.
/// Empty entries are preserved so the paths and numbers files stay aligned.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let line = fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;
    if line.is_empty() {
        return Ok(Vec::new());
    }
    Ok(line.split(' ').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry(folder: &str, motl_path: &str, tomo_number: i64) -> MotlEntry {
        MotlEntry {
            folder: folder.to_string(),
            motl_path: motl_path.to_string(),
            tomo_number,
            matches: if motl_path.is_empty() { 0 } else { 1 },
        }
    }

    #[test]
    fn split_keeps_sequences_aligned() {
        let entries = vec![
            entry("T4SS_0", "/data/T4SS_0/tomo0_motl.em", 1),
            entry("T4SS_1", "", 2),
        ];
        let (paths, numbers) = split_entries(&entries);
        assert_eq!(paths.len(), numbers.len());
        assert_eq!(paths[1], "");
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn manifests_are_single_space_joined_lines() {
        let tmp = TempDir::new().unwrap();
        let motls = tmp.path().join("motls.txt");
        let tomonums = tmp.path().join("tomonums.txt");

        let entries = vec![
            entry("T4SS_0", "/a/b_motl.em", 1),
            entry("T4SS_1", "/c/d_motl.em", 2),
        ];
        write_manifests(&entries, &motls, &tomonums).unwrap();

        assert_eq!(
            fs::read_to_string(&motls).unwrap(),
            "/a/b_motl.em /c/d_motl.em"
        );
        assert_eq!(fs::read_to_string(&tomonums).unwrap(), "1 2");
    }

    #[test]
    fn round_trip_preserves_entries() {
        let tmp = TempDir::new().unwrap();
        let motls = tmp.path().join("motls.txt");
        let tomonums = tmp.path().join("tomonums.txt");

        let entries = vec![
            entry("T4SS_0", "/a/b.em", 1),
            entry("T4SS_1", "/c/d.em", 2),
        ];
        write_manifests(&entries, &motls, &tomonums).unwrap();

        assert_eq!(read_manifest(&motls).unwrap(), vec!["/a/b.em", "/c/d.em"]);
        assert_eq!(read_manifest(&tomonums).unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn empty_paths_survive_the_round_trip() {
        let tmp = TempDir::new().unwrap();
        let motls = tmp.path().join("motls.txt");
        let tomonums = tmp.path().join("tomonums.txt");

        let entries = vec![entry("T4SS_0", "", 1), entry("T4SS_1", "/c/d_motl.em", 2)];
        write_manifests(&entries, &motls, &tomonums).unwrap();

        let paths = read_manifest(&motls).unwrap();
        let numbers = read_manifest(&tomonums).unwrap();
        assert_eq!(paths, vec!["", "/c/d_motl.em"]);
        assert_eq!(paths.len(), numbers.len());
    }

    #[test]
    fn writes_fully_overwrite_previous_manifests() {
        let tmp = TempDir::new().unwrap();
        let motls = tmp.path().join("motls.txt");
        let tomonums = tmp.path().join("tomonums.txt");

        let first = vec![
            entry("T4SS_0", "/a/b_motl.em", 1),
            entry("T4SS_1", "/c/d_motl.em", 2),
        ];
        write_manifests(&first, &motls, &tomonums).unwrap();

        let second = vec![entry("T4SS_5", "/e/f_motl.em", 6)];
        write_manifests(&second, &motls, &tomonums).unwrap();

        assert_eq!(fs::read_to_string(&motls).unwrap(), "/e/f_motl.em");
        assert_eq!(fs::read_to_string(&tomonums).unwrap(), "6");
    }

    #[test]
    fn empty_manifest_reads_back_empty() {
        let tmp = TempDir::new().unwrap();
        let motls = tmp.path().join("motls.txt");
        let tomonums = tmp.path().join("tomonums.txt");

        write_manifests(&[], &motls, &tomonums).unwrap();
        assert!(read_manifest(&motls).unwrap().is_empty());
        assert!(read_manifest(&tomonums).unwrap().is_empty());
    }
}
