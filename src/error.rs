//! Error type shared by the simulation engine and the subcommands.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Reading or writing a file failed.
    #[error("i/o error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to write metrics row: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// An edge refers to a node index that holds no airport.
    #[error("node {0} has no infection status")]
    MissingNode(usize),

    #[error("unknown airport `{0}`")]
    UnknownAirport(String),

    #[error("line {line_number} is not a `from to` pair: `{line}`")]
    MalformedEdgeLine { line_number: usize, line: String },

    #[error("cannot infect {requested} nodes, graph only has {available}")]
    TooManyInitialInfected { requested: usize, available: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl SimError {
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
