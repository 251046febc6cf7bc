//! Shared helpers for command implementations.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

/// Where a command reads its text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Source {
    /// Maps a positional path argument, treating `-` as stdin.
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Maps a list of positional arguments; no arguments means stdin.
    pub fn from_args(paths: &[PathBuf]) -> Vec<Self> {
        if paths.is_empty() {
            return vec![Self::Stdin];
        }
        paths.iter().map(|p| Self::from_arg(p)).collect()
    }

    /// Display name used in headers and JSON output.
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => String::from("-"),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Reads the whole source as UTF-8 text.
    pub fn read(&self) -> Result<String, ExitCode> {
        let result = match self {
            Self::Stdin => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text).map(|_| text)
            }
            Self::File(path) => fs::read_to_string(path),
        };
        result.map_err(|e| {
            eprintln!("error: failed to read {}: {e}", self.label());
            ExitCode::FAILURE
        })
    }
}
