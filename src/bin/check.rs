use anyhow::{bail, Result};
use motl_manifest::manifest;
use std::env;
use std::path::Path;

/// Verify a manifest pair: equal lengths, integer tomogram numbers, and a
/// listing of folders that ended up without a motl file.
fn main() -> Result<()> {
    // Manifest files can be passed as arguments, otherwise use the defaults
    let args: Vec<String> = env::args().collect();
    let (motls_file, tomonums_file) = if args.len() > 2 {
        (args[1].as_str(), args[2].as_str())
    } else {
        ("motls.txt", "tomonums.txt")
    };

    let paths = manifest::read_manifest(Path::new(motls_file))?;
    let numbers = manifest::read_manifest(Path::new(tomonums_file))?;

    if paths.len() != numbers.len() {
        bail!(
            "manifest length mismatch: {} has {} entries, {} has {}",
            motls_file,
            paths.len(),
            tomonums_file,
            numbers.len()
        );
    }

    for number in &numbers {
        if number.parse::<i64>().is_err() {
            bail!("{}: {:?} is not a tomogram number", tomonums_file, number);
        }
    }

    let mut missing = 0;
    for (path, number) in paths.iter().zip(&numbers) {
        if path.is_empty() {
            println!("tomogram {}: no motl file", number);
            missing += 1;
        }
    }

    println!("{} entries, {} without a motl file.", paths.len(), missing);
    Ok(())
}
