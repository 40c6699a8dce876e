//! Trait and common types for workload dataset readers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::task::WorkloadTask;

/// Errors produced while loading a workload dataset.
///
/// The first error encountered aborts the whole load; a failed load never
/// yields a partial task list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Path does not exist or cannot be opened for reading.
    #[error("cannot read {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A required line is missing, empty or not parseable as an integer.
    #[error("bad trace file {}: {reason}", path.display())]
    Format { path: PathBuf, reason: String },
    /// The input directory contains no trace files.
    #[error("no trace files found in {}", path.display())]
    EmptyInput { path: PathBuf },
}

pub trait DatasetReader {
    /// Returns the next task from dataset (if any).
    ///
    /// Tasks are returned in non-increasing order of their QoS scores.
    fn get_next_task(&mut self) -> Option<WorkloadTask>;
}
