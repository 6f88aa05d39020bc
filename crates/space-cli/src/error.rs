//! CLI-local error type — composes every lower error into one `Display`-able
//! value for `main`'s top-level `Result`, exactly as `space-sim::SimError`
//! composes `space-behavior::BehaviorError`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unrecognized --strategy '{0}' (expected one of CBAA, CBBA, GRAPE, FirstClaimGreedy)")]
    UnknownStrategy(String),

    #[error("could not read config file {path}: {source}")]
    ReadConfig { path: PathBuf, source: std::io::Error },

    #[error("could not parse config file {path} as TOML: {source}")]
    ParseConfig { path: PathBuf, source: Box<toml::de::Error> },

    #[error("could not read behavior tree file {path}: {source}")]
    ReadBehaviorTree { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Sim(#[from] space_sim::SimError),
}

pub type CliResult<T> = Result<T, CliError>;
