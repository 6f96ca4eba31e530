//! Opaque JSON documents and their column codec.
//!
//! A [`Document`] holds the raw bytes of a JSON value. Stores never look
//! inside it; they only need the two capabilities defined here:
//!
//! - the codec ([`Document::decode`] / [`Document::encode`]), which
//!   guarantees that `decode(encode(d))` is structurally equal to `d`
//! - the storage declaration ([`StorageType`]), consulted once when the
//!   table schema is built
//!
//! With the `rusqlite` feature the codec is also exposed as `ToSql` /
//! `FromSql`, so a `Document` can be bound and read like any other column.

use crate::error::CoreError;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::fmt;

/// Storage declaration for values kept in a typed column.
pub trait StorageType {
    /// Generic type tag, used when the column carries no explicit override.
    fn data_type() -> &'static str;

    /// Concrete column type for schema creation.
    fn db_data_type() -> &'static str;
}

/// Raw JSON document bytes.
///
/// Constructors only accept syntactically valid JSON, so a non-empty
/// `Document` is always a complete document. Equality is structural: two
/// documents are equal when they parse to the same JSON value, regardless of
/// whitespace or key order.
#[derive(Debug, Clone, Default)]
pub struct Document(Vec<u8>);

impl Document {
    /// An empty document, stored as SQL `NULL`.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Decode payload bytes into a document.
    ///
    /// Fails with [`CoreError::Decode`] if `bytes` is not a single
    /// syntactically valid JSON value (empty input included).
    pub fn decode(bytes: &[u8]) -> Result<Self, CoreError> {
        serde_json::from_slice::<IgnoredAny>(bytes).map_err(CoreError::decode)?;
        Ok(Self(bytes.to_vec()))
    }

    /// Encode the document into its canonical byte form.
    ///
    /// The canonical form is compact JSON with object keys sorted. Returns
    /// `None` for an empty document rather than an empty payload.
    pub fn encode(&self) -> Result<Option<Vec<u8>>, CoreError> {
        Ok(self.encode_text()?.map(String::into_bytes))
    }

    /// Serialize a structured value into a canonical document.
    pub fn from_value<T: Serialize + ?Sized>(value: &T) -> Result<Self, CoreError> {
        let value = serde_json::to_value(value).map_err(CoreError::Encode)?;
        let bytes = serde_json::to_vec(&value).map_err(CoreError::Encode)?;
        Ok(Self(bytes))
    }

    /// Deserialize the document into a structured value.
    pub fn to_value<T: DeserializeOwned>(&self) -> Result<T, CoreError> {
        serde_json::from_slice(&self.0).map_err(CoreError::decode)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    fn encode_text(&self) -> Result<Option<String>, CoreError> {
        if self.0.is_empty() {
            return Ok(None);
        }
        let value: serde_json::Value =
            serde_json::from_slice(&self.0).map_err(CoreError::Encode)?;
        serde_json::to_string(&value)
            .map(Some)
            .map_err(CoreError::Encode)
    }

    fn structure(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.0).ok()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => self.structure() == other.structure(),
            _ => false,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl StorageType for Document {
    fn data_type() -> &'static str {
        "json"
    }

    fn db_data_type() -> &'static str {
        "JSON"
    }
}

#[cfg(feature = "rusqlite")]
mod sql {
    use super::Document;
    use crate::error::CoreError;
    use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

    impl Document {
        /// Decode a document from a raw column value.
        ///
        /// Only text values are accepted; integers, reals, blobs and `NULL`
        /// are rejected with [`CoreError::Decode`].
        pub fn scan(value: ValueRef<'_>) -> Result<Self, CoreError> {
            match value {
                ValueRef::Text(bytes) => Self::decode(bytes),
                other => Err(CoreError::Decode(format!(
                    "expected a text column value, got {}",
                    other.data_type()
                ))),
            }
        }
    }

    impl ToSql for Document {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            match self.encode_text() {
                Ok(Some(text)) => Ok(ToSqlOutput::from(text)),
                Ok(None) => Ok(ToSqlOutput::from(rusqlite::types::Null)),
                Err(e) => Err(rusqlite::Error::ToSqlConversionFailure(Box::new(e))),
            }
        }
    }

    impl FromSql for Document {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            Document::scan(value).map_err(|e| FromSqlError::Other(Box::new(e)))
        }
    }
}
