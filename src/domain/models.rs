use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Fragment {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct ConcatConfig {
    pub input_files: Vec<PathBuf>,
    pub output_path: PathBuf,
    pub force: bool,
}
