use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LempError {
    /// A required input file (settings document, template) is absent.
    NotFound(PathBuf),
    /// A local file declared in Server.json does not exist on the host,
    /// or a declared list (authorize, keys, tokens) holds no entries.
    MissingLocalFile {
        what: String,
        path: Option<PathBuf>,
    },
    Io(#[from] std::io::Error),
    Serialization(String),
}

impl LempError {
    /// A declared path that does not exist on the host.
    pub fn missing_path(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        LempError::MissingLocalFile {
            what: what.into(),
            path: Some(path.into()),
        }
    }

    /// A list that was declared in Server.json but holds no entries.
    pub fn empty_list(what: impl Into<String>) -> Self {
        LempError::MissingLocalFile {
            what: what.into(),
            path: None,
        }
    }
}

impl Display for LempError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LempError::NotFound(path) => {
                write!(f, "File not found: {}", path.display())
            }
            LempError::MissingLocalFile {
                what,
                path: Some(path),
            } => {
                write!(
                    f,
                    "Check your Server.json file, the path to your {} does not exist. ({})",
                    what,
                    path.display()
                )
            }
            LempError::MissingLocalFile { what, path: None } => {
                write!(f, "Check your Server.json file, you have no {} specified.", what)
            }
            LempError::Io(e) => write!(f, "I/O error: {}", e),
            LempError::Serialization(s) => write!(f, "Serialization error: {}", s),
        }
    }
}

impl From<serde_json::Error> for LempError {
    fn from(err: serde_json::Error) -> Self {
        LempError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LempError>;
