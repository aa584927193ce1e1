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

//! Re-analysis on save.
//!
//! [`SourceWatcher`] reports which of the input files changed so the CLI
//! can re-run exactly those. Saves that go through a temporary file and a
//! rename only show up as events on the directory, so every parent
//! directory is observed and events are mapped back to input files.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, trace};

use super::RunnerError;

/// Quiet period that ends a burst of events from one save.
const SETTLE_TIME: Duration = Duration::from_millis(100);

type EventResult = Result<Event, notify::Error>;

/// An input file under observation.
#[derive(Debug, Clone)]
struct Input {
    /// Path as given on the command line; reported back to the caller.
    given: PathBuf,
    /// Canonical form used to match events.
    canonical: PathBuf,
}

/// Watches input files and reports which ones changed.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use symtab::runner::SourceWatcher;
///
/// let watcher = SourceWatcher::new(&[PathBuf::from("input.c")])?;
/// for path in watcher.wait_for_change()? {
///     println!("{} changed", path.display());
/// }
/// # Ok::<(), symtab::runner::RunnerError>(())
/// ```
pub struct SourceWatcher {
    _backend: RecommendedWatcher,
    events: Receiver<EventResult>,
    inputs: Vec<Input>,
}

impl SourceWatcher {
    /// Start observing `paths`.
    ///
    /// Every path must exist. Fails with [`RunnerError::Watch`] otherwise,
    /// or if the platform backend refuses a directory.
    pub fn new(paths: &[PathBuf]) -> Result<Self, RunnerError> {
        let (tx, events) = mpsc::channel();
        let mut backend = notify::recommended_watcher(tx)
            .map_err(|e| RunnerError::Watch(format!("Failed to create watcher: {}", e)))?;

        let inputs = paths
            .iter()
            .map(|given| {
                let canonical = given.canonicalize().map_err(|e| {
                    RunnerError::Watch(format!("Cannot resolve {}: {}", given.display(), e))
                })?;
                Ok(Input {
                    given: given.clone(),
                    canonical,
                })
            })
            .collect::<Result<Vec<_>, RunnerError>>()?;

        let directories: BTreeSet<&Path> = inputs
            .iter()
            .filter_map(|input| input.canonical.parent())
            .collect();
        for dir in directories {
            backend
                .watch(dir, RecursiveMode::NonRecursive)
                .map_err(|e| RunnerError::Watch(format!("Cannot watch {}: {}", dir.display(), e)))?;
            debug!(dir = %dir.display(), "watching directory");
        }

        Ok(Self {
            _backend: backend,
            events,
            inputs,
        })
    }

    /// Number of observed input files.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Check if no input file is observed.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Block until at least one input file changes.
    ///
    /// Returns the changed files as given to [`SourceWatcher::new`], in
    /// their original order.
    pub fn wait_for_change(&self) -> Result<Vec<PathBuf>, RunnerError> {
        loop {
            let event = self
                .events
                .recv()
                .map_err(|_| RunnerError::Watch("Watch channel closed".to_string()))?;
            let mut changed = vec![false; self.inputs.len()];
            if self.mark(event?, &mut changed) {
                return Ok(self.settle(changed));
            }
        }
    }

    /// Like [`SourceWatcher::wait_for_change`], but gives up after
    /// `timeout` and returns `None`.
    pub fn wait_for_change_timeout(
        &self,
        timeout: Duration,
    ) -> Result<Option<Vec<PathBuf>>, RunnerError> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let event = match self.events.recv_timeout(remaining) {
                Ok(event) => event?,
                Err(RecvTimeoutError::Timeout) => return Ok(None),
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(RunnerError::Watch("Watch channel closed".to_string()))
                }
            };
            let mut changed = vec![false; self.inputs.len()];
            if self.mark(event, &mut changed) {
                return Ok(Some(self.settle(changed)));
            }
        }
    }

    /// Flag the inputs an event touches. Returns `true` if any was flagged.
    fn mark(&self, event: Event, changed: &mut [bool]) -> bool {
        if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
            return false;
        }

        let mut hit = false;
        for path in &event.paths {
            if let Some(index) = self.input_index(path) {
                changed[index] = true;
                hit = true;
            }
        }
        trace!(kind = ?event.kind, hit, "watch event");
        hit
    }

    fn input_index(&self, path: &Path) -> Option<usize> {
        let watched: Vec<&Path> = self.inputs.iter().map(|i| i.canonical.as_path()).collect();
        position_of(path, &watched)
    }

    /// Collect everything that arrives until the burst is over.
    fn settle(&self, mut changed: Vec<bool>) -> Vec<PathBuf> {
        while let Ok(event) = self.events.recv_timeout(SETTLE_TIME) {
            if let Ok(event) = event {
                self.mark(event, &mut changed);
            }
        }

        self.inputs
            .iter()
            .zip(changed)
            .filter(|(_, hit)| *hit)
            .map(|(input, _)| input.given.clone())
            .collect()
    }
}

impl From<notify::Error> for RunnerError {
    fn from(error: notify::Error) -> Self {
        RunnerError::Watch(error.to_string())
    }
}

/// Index of the canonical input that `path` refers to.
///
/// A path that cannot be resolved (it is mid-rename or already gone) is
/// matched by its parent directory and file name.
fn position_of(path: &Path, watched: &[&Path]) -> Option<usize> {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    watched.iter().position(|candidate| {
        resolved == *candidate
            || (resolved.file_name().is_some()
                && resolved.file_name() == candidate.file_name()
                && resolved.parent() == candidate.parent())
    })
}
