//! Resolving the positional argument into input bytes.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::CliError;

/// Where the input bytes came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    File(PathBuf),
    Text,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::File(path) => write!(f, "{}", path.display()),
            Origin::Text => f.write_str("command-line text"),
        }
    }
}

#[derive(Debug)]
pub struct Input {
    origin: Origin,
    bytes: Vec<u8>,
}

impl Input {
    /// Reads `arg` as a file when a file system entry by that name exists,
    /// and otherwise takes the argument text itself as the document.
    pub fn resolve(arg: &str) -> Result<Self, CliError> {
        let path = Path::new(arg);
        if path.exists() {
            debug!(path = %path.display(), "reading input file");
            let bytes = fs::read(path).map_err(|source| CliError::Io {
                path: path.display().to_string(),
                source,
            })?;
            return Ok(Self {
                origin: Origin::File(path.to_path_buf()),
                bytes,
            });
        }
        debug!("no file named by the argument, decoding it as text");
        Ok(Self {
            origin: Origin::Text,
            bytes: arg.as_bytes().to_vec(),
        })
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
