use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use cloud_logging::{cloud_debug, cloud_info};
use tagcloud_core::{count_words, CountError, WordCounts};
use thiserror::Error;

use crate::decode::{decode_text, DecodeError};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("unable to open input file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading input file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot decode input file {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("error counting words in {path:?}: {source}")]
    Count {
        path: PathBuf,
        #[source]
        source: CountError,
    },
}

/// Word counts of one input file, with what is known about where they came from.
#[derive(Debug, Clone)]
pub struct InputText {
    pub path: PathBuf,
    pub encoding_label: String,
    pub byte_len: u64,
    pub counts: WordCounts,
}

impl InputText {
    /// Name shown in the page title: the path as the user gave it.
    pub fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }
}

/// Reads, decodes and counts the words of `path`.
///
/// Any failure aborts with no counts; nothing is written.
pub fn read_input(path: &Path) -> Result<InputText, InputError> {
    let mut file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = decode_text(&bytes).map_err(|source| InputError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    cloud_debug!(
        "Decoded {:?}: {} bytes as {}",
        path,
        bytes.len(),
        decoded.encoding_label
    );

    let counts = count_words(Cursor::new(decoded.text.as_bytes())).map_err(|source| {
        InputError::Count {
            path: path.to_path_buf(),
            source,
        }
    })?;
    cloud_info!(
        "Counted {} words ({} distinct) in {:?}",
        counts.total_words(),
        counts.len(),
        path
    );

    Ok(InputText {
        path: path.to_path_buf(),
        encoding_label: decoded.encoding_label,
        byte_len: bytes.len() as u64,
        counts,
    })
}
