use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use crate::length::LengthError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("File already exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error("IO error for file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Bad length {input:?}: {source}")]
    Length { input: String, source: LengthError },

    #[error("Could not run {}: {source}", program.display())]
    CompilerNotFound { program: PathBuf, source: io::Error },

    #[error("{} failed ({status}): {stderr}", program.display())]
    CompilerFailed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error(transparent)]
    Font(#[from] spacedfont::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}
