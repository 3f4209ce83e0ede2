use std::path::PathBuf;

use tagcloud_core::SelectionError;

use crate::input::InputError;
use crate::persist::PersistError;

/// What to produce from an already counted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRequest {
    pub output: PathBuf,
    pub count: usize,
    pub write_manifest: bool,
    pub generated_utc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output_path: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub words_rendered: usize,
    pub distinct_words: usize,
    pub total_words: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("invalid word count: {0}")]
    Selection(#[from] SelectionError),
    #[error("failed to write output: {0}")]
    Persist(#[from] PersistError),
    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
