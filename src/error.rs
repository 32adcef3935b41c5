//! Error types for the Quest Mapper
//!
//! Startup is the only place that can fail: the built-in dataset is validated
//! and the initial filter configuration is resolved before the first render.

use std::io;
use std::path::PathBuf;

/// Structural problem in the built-in dataset
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("dataset declares no domains")]
    NoDomains,

    #[error("dataset declares no patterns")]
    NoPatterns,

    #[error("domain key `{0}` is declared more than once")]
    DuplicateDomainKey(&'static str),

    #[error("pattern id `{0}` is declared more than once")]
    DuplicatePatternId(&'static str),

    #[error("pattern `{pattern}` references unknown domain `{key}`")]
    UnknownDomainInPattern {
        pattern: &'static str,
        key: &'static str,
    },

    #[error("pattern `{pattern}` has {steps} steps but {labels} label tokens")]
    LabelMismatch {
        pattern: &'static str,
        steps: usize,
        labels: usize,
    },
}

/// Problem reading or resolving the initial filter configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown stage `{0}` (expected 0-1, 2-3 or 4+)")]
    UnknownStage(String),

    #[error("unknown role `{0}` (expected one of UL, GR, SU, RW, CH, CD)")]
    UnknownRole(String),

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
}

/// Crate-level error
#[derive(Debug, thiserror::Error)]
pub enum QuestMapperError {
    #[error("invalid dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuestMapperError>;
