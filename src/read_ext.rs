use std::path::Path;

use log::warn;

use crate::errors::{ProcessingError, ReadBinError};
use crate::guard::ScopedAction;
use crate::handle_table::{HandleTable, RawHandle};

/// Reads the file at `path`, runs `processor` over the bytes, and returns
/// them. The backing handle is released on every exit path.
///
/// The release obligation is pinned to a [`ScopedAction`] the moment the
/// handle exists, so a failing read or processor can just `?` out and the
/// guard closes the handle on the way. A release failure on that error path
/// is logged and discarded, keeping the original failure observable. On the
/// success path the guard is dismissed and the handle is released explicitly,
/// so a [`CleanupError`](crate::errors::CleanupError) there becomes the
/// operation's failure.
pub fn read_bin<F>(table: &HandleTable, path: &Path, processor: F) -> Result<Vec<u8>, ReadBinError>
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), ProcessingError>,
{
    let handle = table.acquire(path)?;
    let mut close_guard = ScopedAction::new(|| {
        if let Err(err) = table.release(handle) {
            warn!("release of {handle:?} failed on error path: {err}");
        }
    });

    let mut bin = table.read_all(handle)?;
    processor(&mut bin)?;

    close_guard.dismiss();
    table.release(handle)?;
    Ok(bin)
}

/// Like [`read_bin`], but on success hands the still-open handle to the
/// caller along with the bytes.
///
/// The guard is dismissed right before returning, transferring the release
/// obligation; on any failure the handle is released here as usual and only
/// the error escapes.
pub fn read_bin_keep_open<F>(
    table: &HandleTable,
    path: &Path,
    processor: F,
) -> Result<(Vec<u8>, RawHandle), ReadBinError>
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), ProcessingError>,
{
    let handle = table.acquire(path)?;
    let mut close_guard = ScopedAction::new(|| {
        if let Err(err) = table.release(handle) {
            warn!("release of {handle:?} failed on error path: {err}");
        }
    });

    let mut bin = table.read_all(handle)?;
    processor(&mut bin)?;

    close_guard.dismiss();
    Ok((bin, handle))
}
