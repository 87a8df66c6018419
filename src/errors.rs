use std::path::PathBuf;

use thiserror::Error;

// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // ---- Loading ------------------------------------------------------------
    /// The roster file does not exist. Fatal: the menu loop never starts.
    #[error("Roster file '{}' was not found.", path.display())]
    RosterNotFound { path: PathBuf },

    /// Any other read/shape problem while loading the roster. Also fatal.
    #[error("Load error: {0}")]
    Load(String),

    // ---- Validation ---------------------------------------------------------
    /// Type coercion and interactive input validation. Fatal during load,
    /// recovered (re-prompt) when raised interactively.
    #[error("{0}")]
    Parse(String),

    // ---- Export -------------------------------------------------------------
    /// Output write failure. Recovered: reported and the menu loop continues.
    #[error("Export error: {0}")]
    Export(String),

    // ---- Config -------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn load<S: Into<String>>(msg: S) -> Self {
        Error::Load(msg.into())
    }
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn export<S: Into<String>>(msg: S) -> Self {
        Error::Export(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// True for the failures that must abort startup before the menu loop.
    pub fn is_fatal_at_startup(&self) -> bool {
        matches!(
            self,
            Error::RosterNotFound { .. } | Error::Load(_) | Error::Parse(_) | Error::Config(_)
        )
    }
}
