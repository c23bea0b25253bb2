use crate::core::concatenator::build_document;
use crate::core::overwrite_guard::confirm_overwrite;
use crate::domain::models::ConcatConfig;
use crate::infra::file_system::{load_fragments, validate_input_files};
use crate::infra::logger::setup_logger;
use crate::infra::output::{report_cancelled, report_success, write_document};
use crate::infra::prompt::ask_user;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitignore-concat")]
#[command(about = "Concatenate multiple gitignore files into a single .gitignore file", long_about = None)]
#[command(after_help = "Examples:
  gitignore-concat generic.gitignore python.gitignore
  gitignore-concat -o my-gitignore generic.gitignore python.gitignore")]
pub struct Cli {
    /// One or more gitignore files to concatenate
    #[arg(required = true)]
    pub gitignore_files: Vec<PathBuf>,

    /// Output file name
    #[arg(short, long, default_value = ".gitignore")]
    pub output: PathBuf,

    /// Overwrite output file if it exists
    #[arg(long)]
    pub force: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    info!("Starting gitignore concatenation");
    debug!(
        "Command parameters: inputs={:?}, output={}, force={}",
        cli.gitignore_files,
        cli.output.display(),
        cli.force
    );

    let config = ConcatConfig {
        input_files: cli.gitignore_files,
        output_path: cli.output,
        force: cli.force,
    };

    concatenate(&config, ask_user)
}

fn concatenate(
    config: &ConcatConfig,
    ask: impl Fn(&str) -> anyhow::Result<bool>,
) -> anyhow::Result<()> {
    // Overwrite confirmation runs before input validation, matching the
    // tool's long-standing ordering.
    if !confirm_overwrite(&config.output_path, config.force, ask)? {
        info!("User declined overwrite, nothing written");
        return report_cancelled();
    }

    validate_input_files(&config.input_files)?;

    info!("Loading {} input files", config.input_files.len());
    let fragments = load_fragments(&config.input_files)?;

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    info!("Building output document");
    let document = build_document(&fragments, &timestamp);

    info!("Writing output to {}", config.output_path.display());
    write_document(&config.output_path, &document)?;

    report_success(&config.output_path, &config.input_files)
}
