// Symtab - A symbol table and scope simulator for a C-like compiler front end
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Runner module for feeding source lines into the analyzer.
//!
//! This module provides functionality to:
//! - Analyze a file line by line
//! - Drive an interactive console session
//! - Watch source files and re-run the analysis on changes

mod console;
mod file;
mod watcher;

pub use console::{run_console, CONSOLE_EXIT};
pub use file::analyze_file;
pub use watcher::SourceWatcher;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a run without a report.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The input file could not be opened.
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an opened input file failed.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Console input or output failed.
    #[error("Console I/O failed: {0}")]
    Console(#[from] io::Error),

    /// Error watching files.
    #[error("File watch error: {0}")]
    Watch(String),

    /// The report could not be written.
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RunnerError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunnerError::Watch(_) => 6,
            _ => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let open = RunnerError::Open {
            path: PathBuf::from("missing.c"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(open.exit_code(), 3);
        assert_eq!(RunnerError::Watch("closed".into()).exit_code(), 6);
    }

    #[test]
    fn test_messages_name_the_path() {
        let error = RunnerError::Read {
            path: PathBuf::from("input.c"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert_eq!(
            error.to_string(),
            "Cannot read input.c: stream did not contain valid UTF-8"
        );
    }
}
