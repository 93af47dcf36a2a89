use std::path::PathBuf;

/// Suffix of the template matching result file inside each tomogram folder.
pub const MOTL_SUFFIX: &str = "_motl.em";

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// IMOD project directory containing the per-tomogram folders.
    pub root_dir: PathBuf,
    /// Only folders whose base name starts with this are scanned. Case-sensitive.
    pub prefix: String,
    /// Result files must end with this. Case-sensitive.
    pub suffix: String,
}
