pub mod cli;
pub mod color;
pub mod config;
pub mod model;
pub mod query;
pub mod resolve;
pub mod store;
pub mod view;

pub use crate::resolve::{resolve, ArtifactKey, SequenceDigest};
pub use crate::view::{build_view, EnrichedTaxon};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NereisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Load error: {0}")]
    Load(String),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NereisError>;
