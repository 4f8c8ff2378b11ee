//! Ordered in-memory view of the backing file
//!
//! The collection is decoded from the raw file bytes, mutated, and
//! encoded back as a whole. Insertion order is preserved; id
//! uniqueness is only checked on insert.

use super::record::User;

/// Result of inserting a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// User appended to the end of the collection
    Inserted,
    /// A user with this id is already present; collection unchanged
    Duplicate(String),
}

/// Users in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCollection {
    users: Vec<User>,
}

impl UserCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode file content. Zero bytes is an empty collection.
    pub fn decode(bytes: &[u8]) -> serde_json::Result<Self> {
        if bytes.is_empty() {
            return Ok(Self::new());
        }
        let users: Vec<User> = serde_json::from_slice(bytes)?;
        Ok(Self { users })
    }

    /// Compact JSON array encoding
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.users)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// First user with the given id
    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Append `user` unless its id is taken
    pub fn insert(&mut self, user: User) -> InsertOutcome {
        if self.find(&user.id).is_some() {
            return InsertOutcome::Duplicate(user.id);
        }
        self.users.push(user);
        InsertOutcome::Inserted
    }

    /// Remove the first user with the given id.
    ///
    /// The remaining users are collected into a new sequence; later
    /// duplicates of the same id (possible in hand-edited files) stay.
    pub fn remove(&mut self, id: &str) -> Option<User> {
        let position = self.users.iter().position(|u| u.id == id)?;

        let mut removed = None;
        let remaining = std::mem::take(&mut self.users)
            .into_iter()
            .enumerate()
            .filter_map(|(i, user)| {
                if i == position {
                    removed = Some(user);
                    None
                } else {
                    Some(user)
                }
            })
            .collect();
        self.users = remaining;

        removed
    }
}

impl FromIterator<User> for UserCollection {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().collect(),
        }
    }
}
