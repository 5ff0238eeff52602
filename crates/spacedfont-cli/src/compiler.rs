//! Converting between binary fonts and TTX.
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Environment variable naming the `ttx` program to run.
pub const TTX_ENV: &str = "SPACEDFONT_TTX";

/// Something which can turn a font file into TTX and back.
pub trait FontCompiler {
    fn decompile(&self, font: &Path) -> Result<String>;
    fn compile(&self, ttx: &str, output: &Path) -> Result<()>;
}

/// The fontTools `ttx` command line tool.
#[derive(Clone, Debug)]
pub struct Ttx {
    program: PathBuf,
}

impl Ttx {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Ttx {
            program: program.into(),
        }
    }

    /// Use `$SPACEDFONT_TTX` if set, otherwise `ttx` from the path.
    pub fn from_env() -> Self {
        let program = std::env::var_os(TTX_ENV).unwrap_or_else(|| OsString::from("ttx"));
        Ttx::new(program)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, input: &Path, output: &Path) -> Result<()> {
        log::debug!(
            "Running {} on {} -> {}",
            self.program.display(),
            input.display(),
            output.display()
        );
        let result = Command::new(&self.program)
            .arg("-q")
            .arg("-f")
            .arg("-o")
            .arg(output)
            .arg(input)
            .output()
            .map_err(|source| Error::CompilerNotFound {
                program: self.program.clone(),
                source,
            })?;
        if !result.status.success() {
            return Err(Error::CompilerFailed {
                program: self.program.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Ttx {
    fn default() -> Self {
        Ttx::from_env()
    }
}

impl FontCompiler for Ttx {
    fn decompile(&self, font: &Path) -> Result<String> {
        let dir = tempfile::tempdir().map_err(Error::io(std::env::temp_dir()))?;
        let ttx_path = dir.path().join("font.ttx");
        self.run(font, &ttx_path)?;
        fs::read_to_string(&ttx_path).map_err(Error::io(&ttx_path))
    }

    fn compile(&self, ttx: &str, output: &Path) -> Result<()> {
        let dir = tempfile::tempdir().map_err(Error::io(std::env::temp_dir()))?;
        let ttx_path = dir.path().join("font.ttx");
        fs::write(&ttx_path, ttx).map_err(Error::io(&ttx_path))?;
        self.run(&ttx_path, output)
    }
}
