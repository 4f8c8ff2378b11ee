//! Backing file handle
//!
//! The file is opened once per invocation in read/write mode and is
//! created if missing. Writes replace the whole content and are synced
//! before returning. The handle is released when `BackingFile` drops.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};

/// Permission bits for a newly created backing file
#[cfg(unix)]
const CREATE_MODE: u32 = 0o644;

/// An open backing file
#[derive(Debug)]
pub struct BackingFile {
    path: PathBuf,
    file: File,
}

impl BackingFile {
    /// Opens the file at `path`, creating it empty if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Open` if the file cannot be opened or created.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(CREATE_MODE);
        }

        let file = options.open(path).map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full content from the start of the file
    pub fn read_all(&mut self) -> StoreResult<Vec<u8>> {
        let mut data = Vec::new();
        self.file
            .seek(SeekFrom::Start(0))
            .and_then(|_| self.file.read_to_end(&mut data))
            .map_err(|e| self.read_error(e))?;
        Ok(data)
    }

    /// Replace the file content with `data` and sync it to disk
    pub fn replace(&mut self, data: &[u8]) -> StoreResult<()> {
        self.file
            .set_len(0)
            .and_then(|_| self.file.seek(SeekFrom::Start(0)))
            .and_then(|_| self.file.write_all(data))
            .and_then(|_| self.file.sync_all())
            .map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })
    }

    fn read_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Read {
            path: self.path.clone(),
            source,
        }
    }
}
