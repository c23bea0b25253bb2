use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn write_document(path: &Path, content: &str) -> anyhow::Result<()> {
    debug!("Writing document to file: {}", path.display());
    fs::write(path, content)?;
    info!("Output written to file: {}", path.display());
    Ok(())
}

pub fn report_success(output: &Path, inputs: &[PathBuf]) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    stdout.execute(SetForegroundColor(Color::Green))?;
    writeln!(
        stdout,
        "Successfully created '{}' by concatenating {} file(s):",
        output.display(),
        inputs.len()
    )?;
    stdout.execute(ResetColor)?;

    for input in inputs {
        writeln!(stdout, "  - {}", input.display())?;
    }

    Ok(())
}

pub fn report_cancelled() -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    stdout.execute(SetForegroundColor(Color::Yellow))?;
    writeln!(stdout, "Operation cancelled.")?;
    stdout.execute(ResetColor)?;

    Ok(())
}
