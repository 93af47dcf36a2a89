use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use motl_manifest::{config::ScanConfig, manifest, report, scan};
use std::path::PathBuf;

/// Scan an IMOD project directory for per-tomogram motl files and write the
/// motl path and tomogram number manifests.
#[derive(Parser, Debug)]
#[command(name = "motl_manifest", version)]
struct Opts {
    /// IMOD project directory containing the tomogram folders
    root_dir: PathBuf,

    /// Only folders whose name starts with this are scanned
    #[arg(long, default_value = "T4SS")]
    prefix: String,

    /// Result files must end with this
    #[arg(long, default_value = motl_manifest::config::MOTL_SUFFIX)]
    suffix: String,

    /// Output file for the space-separated motl paths
    #[arg(long, default_value = "motls.txt")]
    motls_out: PathBuf,

    /// Output file for the space-separated tomogram numbers
    #[arg(long, default_value = "tomonums.txt")]
    tomonums_out: PathBuf,

    /// Also write a CSV report with one row per tomogram folder
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let config = ScanConfig {
        root_dir: opts.root_dir,
        prefix: opts.prefix,
        suffix: opts.suffix,
    };

    // 1. Find the candidate tomogram folders
    println!("Scanning {}...", config.root_dir.display());
    let folders = scan::candidate_folders(&config)?;

    // 2. Locate the motl file in each folder
    let pb = ProgressBar::new(folders.len() as u64);
    let mut entries = Vec::with_capacity(folders.len());
    for base in &folders {
        entries.push(scan::scan_folder(&config, base)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    // 3. Write the manifests (only after the full scan succeeded)
    manifest::write_manifests(&entries, &opts.motls_out, &opts.tomonums_out)?;

    // 4. Optional per-folder report
    if let Some(report_path) = &opts.report {
        report::write_report(&entries, report_path)?;
        println!("Report saved to {}.", report_path.display());
    }

    println!("Number of folders detected: {}", entries.len());
    println!(
        "Manifests saved to {} and {}.",
        opts.motls_out.display(),
        opts.tomonums_out.display()
    );

    Ok(())
}
