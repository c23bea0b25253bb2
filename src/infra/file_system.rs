use crate::domain::models::Fragment;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Checks every input path up front so the user sees all missing files in
/// one run instead of one per rerun.
pub fn validate_input_files(paths: &[PathBuf]) -> anyhow::Result<()> {
    debug!("Validating {} input files", paths.len());

    let missing: Vec<&PathBuf> = paths.iter().filter(|path| !path.exists()).collect();

    if missing.is_empty() {
        debug!("All input files exist");
        return Ok(());
    }

    let mut message = String::from("The following files do not exist:");
    for path in &missing {
        message.push_str(&format!("\n  - {}", path.display()));
    }

    anyhow::bail!(message)
}

pub fn read_file_contents(path: &Path) -> anyhow::Result<String> {
    debug!("Reading file contents: {}", path.display());
    let contents = fs::read_to_string(path)?;
    debug!("Read {} bytes from file", contents.len());
    Ok(contents)
}

pub fn load_fragments(paths: &[PathBuf]) -> anyhow::Result<Vec<Fragment>> {
    let mut fragments = Vec::with_capacity(paths.len());

    for path in paths {
        let content = read_file_contents(path)?;
        fragments.push(Fragment {
            path: path.clone(),
            content,
        });
    }

    info!("Loaded {} fragments", fragments.len());
    Ok(fragments)
}
