//! CLI-level errors: I/O, JSON parsing, and core contract violations.

use derive_more::From;

#[derive(Debug, From)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    Core(trobust_core::Error<String>),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Core(e) => write!(f, "{e:?}"),
        }
    }
}

impl std::error::Error for Error {}
