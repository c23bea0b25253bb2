use log::{debug, info};
use std::path::Path;

/// Returns true when writing the output file may proceed. The confirmation
/// prompt is injected so tests can answer deterministically.
pub fn confirm_overwrite(
    output: &Path,
    force: bool,
    ask: impl Fn(&str) -> anyhow::Result<bool>,
) -> anyhow::Result<bool> {
    if force {
        debug!("Force flag set, skipping overwrite confirmation");
        return Ok(true);
    }

    if !output.exists() {
        debug!("Output file {} does not exist yet", output.display());
        return Ok(true);
    }

    info!(
        "Output file {} already exists, asking for confirmation",
        output.display()
    );
    let prompt = format!(
        "File '{}' already exists. Overwrite? (y/N): ",
        output.display()
    );
    ask(&prompt)
}
