//! User record store
//!
//! Each operation is a single pass over the backing file:
//!
//! ```text
//! read all -> empty? -> decode -> scan / mutate -> encode -> persist -> write output
//! ```
//!
//! Results go to the caller's output sink. "Already exists" and "not
//! found" are output content, never errors. A read or decode error
//! aborts before anything is written to the sink or the backing file.

mod collection;
mod errors;
mod file;
mod record;

pub use collection::{InsertOutcome, UserCollection};
pub use errors::{StoreError, StoreResult};
pub use file::BackingFile;
pub use record::User;

use std::io::Write;
use std::path::Path;

use crate::observability::{log_event_with_fields, Event};

/// Message written when an add collides with an existing id
pub fn duplicate_message(id: &str) -> String {
    format!("Item with id {} already exists", id)
}

/// Message written when a removal finds no match
pub fn not_found_message(id: &str) -> String {
    format!("Item with id {} not found", id)
}

/// A user store bound to one backing file
pub struct UserStore {
    file: BackingFile,
}

impl UserStore {
    /// Opens the store, creating an empty backing file if needed.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let file = BackingFile::open(path)?;
        let shown = path.display().to_string();
        log_event_with_fields(Event::StoreOpened, &[("path", shown.as_str())]);
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Raw file content, `None` when the file is empty
    fn read_content(&mut self) -> StoreResult<Option<Vec<u8>>> {
        let data = self.file.read_all()?;
        Ok(if data.is_empty() { None } else { Some(data) })
    }

    fn decode(&self, data: &[u8]) -> StoreResult<UserCollection> {
        let collection = UserCollection::decode(data).map_err(|e| StoreError::CorruptFile {
            path: self.file.path().to_path_buf(),
            source: e,
        })?;
        let count = collection.len().to_string();
        log_event_with_fields(Event::RecordsLoaded, &[("count", count.as_str())]);
        Ok(collection)
    }

    /// Load the current collection; an empty file is an empty collection
    pub fn load(&mut self) -> StoreResult<UserCollection> {
        match self.read_content()? {
            Some(data) => self.decode(&data),
            None => Ok(UserCollection::new()),
        }
    }

    fn persist(&mut self, encoded: &[u8]) -> StoreResult<()> {
        self.file.replace(encoded)?;
        let bytes = encoded.len().to_string();
        log_event_with_fields(Event::StorePersisted, &[("bytes", bytes.as_str())]);
        Ok(())
    }

    /// Append the user described by `item`.
    ///
    /// Writes the full updated array on success, or the collision
    /// message if the id is taken. An empty file is treated as an empty
    /// array, so the output is always a well-formed array.
    pub fn add<W: Write>(&mut self, item: &str, out: &mut W) -> StoreResult<()> {
        let mut collection = self.load()?;
        let user = User::parse_item(item)?;
        let id = user.id.clone();

        match collection.insert(user) {
            InsertOutcome::Duplicate(id) => {
                log_event_with_fields(Event::RecordDuplicate, &[("id", id.as_str())]);
                write_output(out, duplicate_message(&id).as_bytes())
            }
            InsertOutcome::Inserted => {
                let encoded = collection.encode().map_err(StoreError::Encode)?;
                self.persist(&encoded)?;
                let count = collection.len().to_string();
                log_event_with_fields(
                    Event::RecordAdded,
                    &[("id", id.as_str()), ("count", count.as_str())],
                );
                write_output(out, &encoded)
            }
        }
    }

    /// Write the normalized array. An empty file writes nothing.
    pub fn list<W: Write>(&mut self, out: &mut W) -> StoreResult<()> {
        let Some(data) = self.read_content()? else {
            return Ok(());
        };
        let collection = self.decode(&data)?;
        let encoded = collection.encode().map_err(StoreError::Encode)?;
        let count = collection.len().to_string();
        log_event_with_fields(Event::RecordsListed, &[("count", count.as_str())]);
        write_output(out, &encoded)
    }

    /// Write the first user with `id`, or nothing if there is none.
    pub fn find_by_id<W: Write>(&mut self, id: &str, out: &mut W) -> StoreResult<()> {
        let Some(data) = self.read_content()? else {
            log_event_with_fields(Event::RecordNotFound, &[("id", id)]);
            return Ok(());
        };
        let collection = self.decode(&data)?;

        match collection.find(id) {
            Some(user) => {
                let encoded = user.to_json()?;
                log_event_with_fields(Event::RecordFound, &[("id", id)]);
                write_output(out, &encoded)
            }
            None => {
                log_event_with_fields(Event::RecordNotFound, &[("id", id)]);
                Ok(())
            }
        }
    }

    /// Remove the first user with `id`.
    ///
    /// Writes the remaining array on success. If there is no match,
    /// including when the file is empty, writes the not-found message
    /// and leaves the file untouched.
    pub fn remove<W: Write>(&mut self, id: &str, out: &mut W) -> StoreResult<()> {
        let mut collection = self.load()?;

        if collection.remove(id).is_none() {
            log_event_with_fields(Event::RecordNotFound, &[("id", id)]);
            return write_output(out, not_found_message(id).as_bytes());
        }

        let encoded = collection.encode().map_err(StoreError::Encode)?;
        self.persist(&encoded)?;
        let count = collection.len().to_string();
        log_event_with_fields(Event::RecordRemoved, &[("id", id), ("count", count.as_str())]);
        write_output(out, &encoded)
    }
}

fn write_output<W: Write>(out: &mut W, bytes: &[u8]) -> StoreResult<()> {
    out.write_all(bytes).map_err(StoreError::Output)
}
