//! User record type
//!
//! Serialized form is a compact JSON object with fields in the order
//! `id`, `email`, `age`:
//!
//! ```text
//! {"id":"1","email":"a@b.com","age":34}
//! ```

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};

/// A single user entry in the backing file.
///
/// `id` is the unique key. Missing `email` and `age` decode to their
/// zero values; unknown fields are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: i64,
}

impl User {
    /// Create a new user
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }

    /// Decode caller-supplied item text into a user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidItem` if `text` is not a JSON object
    /// with a string `id`.
    pub fn parse_item(text: &str) -> StoreResult<Self> {
        serde_json::from_str(text).map_err(StoreError::InvalidItem)
    }

    /// Compact JSON encoding of this user
    pub fn to_json(&self) -> StoreResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(StoreError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let user = User::parse_item(r#"{"id":"1","email":"a@b.com","age":34}"#).unwrap();
        assert_eq!(user, User::new("1", "a@b.com", 34));
    }

    #[test]
    fn test_field_order_on_encode() {
        let user = User::new("7", "x@y.org", 21);
        let encoded = String::from_utf8(user.to_json().unwrap()).unwrap();
        assert_eq!(encoded, r#"{"id":"7","email":"x@y.org","age":21}"#);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let user = User::parse_item(r#"{"id":"9"}"#).unwrap();
        assert_eq!(user.email, "");
        assert_eq!(user.age, 0);
    }

    #[test]
    fn test_unknown_fields_dropped() {
        let user = User::parse_item(r#"{"age":3,"nick":"z","id":"2"}"#).unwrap();
        let encoded = String::from_utf8(user.to_json().unwrap()).unwrap();
        assert_eq!(encoded, r#"{"id":"2","email":"","age":3}"#);
    }

    #[test]
    fn test_missing_id_rejected() {
        let err = User::parse_item(r#"{"email":"a@b.com","age":1}"#).unwrap_err();
        assert!(matches!(err, StoreError::InvalidItem(_)));
    }

    #[test]
    fn test_malformed_item_rejected() {
        assert!(User::parse_item("{not json").is_err());
        assert!(User::parse_item(r#"[{"id":"1"}]"#).is_err());
        assert!(User::parse_item(r#"{"id":"1","age":"old"}"#).is_err());
    }
}
