//! Configuration for question answering.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Files kept after the TF-IDF pass
pub const FILE_MATCHES: usize = 1;
/// Sentences reported as answers
pub const SENTENCE_MATCHES: usize = 1;

/// How many files and sentences survive each ranking stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub file_matches: usize,
    pub sentence_matches: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            file_matches: FILE_MATCHES,
            sentence_matches: SENTENCE_MATCHES,
        }
    }
}

impl RetrievalConfig {
    pub fn with_file_matches(mut self, n: usize) -> Self {
        self.file_matches = n;
        self
    }

    pub fn with_sentence_matches(mut self, n: usize) -> Self {
        self.sentence_matches = n;
        self
    }

    /// Load a JSON config; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, crate::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::io(format!("read config {}", path.display()), e))?;
        Ok(serde_json::from_str(&text)?)
    }
}
