use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::handle_table::RawHandle;

/// Resource acquisition failed; no guard is ever constructed for a resource
/// that was never acquired.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    #[error("can't open file: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Work performed while the resource is held failed.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("handle {0:?} is not open")]
    StaleHandle(RawHandle),

    #[error("processing failed: {0}")]
    Failed(String),
}

/// Releasing a held resource failed.
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("handle {0:?} was already released")]
    Stale(RawHandle),
}

/// Surface error of the guarded-read pipeline.
///
/// A `Cleanup` variant can only come from the normal-exit release; a release
/// failure on the error path is logged and discarded so the original failure
/// stays observable.
#[derive(Debug, Error)]
pub enum ReadBinError {
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),

    #[error(transparent)]
    Cleanup(#[from] CleanupError),
}
