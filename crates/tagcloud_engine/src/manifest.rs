use std::path::{Path, PathBuf};

use serde::Serialize;
use tagcloud_core::TagCloud;

use crate::input::InputText;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub source: String,
    pub encoding: String,
    pub input_bytes: u64,
    pub requested: usize,
    pub distinct_words: usize,
    pub total_words: u64,
    pub generated_utc: String,
    pub words: Vec<ManifestWord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestWord {
    pub word: String,
    pub count: u32,
    pub font_size: u32,
}

impl Manifest {
    pub fn new(input: &InputText, cloud: &TagCloud, generated_utc: &str) -> Self {
        Self {
            source: input.source_name(),
            encoding: input.encoding_label.clone(),
            input_bytes: input.byte_len,
            requested: cloud.requested,
            distinct_words: input.distinct_words(),
            total_words: input.counts.total_words(),
            generated_utc: generated_utc.to_string(),
            words: cloud
                .words
                .iter()
                .map(|w| ManifestWord {
                    word: w.word.clone(),
                    count: w.count,
                    font_size: w.font_size,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// `cloud.html` -> `cloud.manifest.json`, next to the page.
pub fn manifest_path_for(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tagcloud".to_string());
    output.with_file_name(format!("{stem}.manifest.json"))
}
