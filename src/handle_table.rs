use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::{AcquisitionError, CleanupError, ProcessingError};

/// Opaque identifier for an open resource in a [`HandleTable`].
///
/// A `RawHandle` does not release anything on drop; the scope that acquired
/// it owns the release obligation, usually through a
/// [`ScopedAction`](crate::guard::ScopedAction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawHandle(u32);

/// In-process table of open files addressed by opaque handles.
///
/// Replaces the hidden process-wide handle variable this kind of code tends
/// to grow: every handle is returned from [`acquire`](HandleTable::acquire)
/// and owned by the calling scope, and tests observe leaks through
/// [`open_count`](HandleTable::open_count) instead of a global.
#[derive(Debug)]
pub struct HandleTable {
    slots: RefCell<HashMap<u32, File>>,
    next_id: Cell<u32>,
}

impl HandleTable {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
            next_id: Cell::new(1),
        }
    }

    /// Opens `path` for reading and returns a handle to it.
    pub fn acquire(&self, path: &Path) -> Result<RawHandle, AcquisitionError> {
        if !path.exists() {
            return Err(AcquisitionError::NotFound(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|source| AcquisitionError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.slots.borrow_mut().insert(id, file);
        Ok(RawHandle(id))
    }

    /// Closes the resource behind `handle`.
    ///
    /// Releasing a handle that is not open (never acquired, or released
    /// already) fails with [`CleanupError::Stale`]; the table itself is left
    /// untouched, so a stale release is harmless.
    pub fn release(&self, handle: RawHandle) -> Result<(), CleanupError> {
        match self.slots.borrow_mut().remove(&handle.0) {
            Some(file) => {
                drop(file);
                Ok(())
            }
            None => Err(CleanupError::Stale(handle)),
        }
    }

    /// Reads the remaining contents of the resource behind `handle`.
    pub fn read_all(&self, handle: RawHandle) -> Result<Vec<u8>, ProcessingError> {
        let mut slots = self.slots.borrow_mut();
        let file = slots
            .get_mut(&handle.0)
            .ok_or(ProcessingError::StaleHandle(handle))?;

        let mut bin = Vec::new();
        file.read_to_end(&mut bin)?;
        Ok(bin)
    }

    pub fn is_open(&self, handle: RawHandle) -> bool {
        self.slots.borrow().contains_key(&handle.0)
    }

    /// Number of handles currently open. Zero means nothing leaked.
    pub fn open_count(&self) -> usize {
        self.slots.borrow().len()
    }
}

impl Default for HandleTable {
    fn default() -> Self {
        Self::new()
    }
}
