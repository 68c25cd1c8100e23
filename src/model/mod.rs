//! Typed records for the shapes Deezer returns.
//!
//! Every entity kind comes in up to three shapes depending on the endpoint
//! that produced it:
//!
//! * `Base`: the minimal object embedded inside a parent entity
//! * `Search`: the abbreviated object returned by `search/{kind}`
//! * `Full`: the complete object returned by `{kind}/{id}`
//!
//! Embedded children are always decoded with the `Base` shape, which keeps
//! nested decoding finite.

pub mod album;
pub mod artist;
pub mod chart;
pub mod de;
pub mod genre;
pub mod playlist;
pub mod track;
pub mod user;

// Use 3rd party
use log::error;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Use built-in library
use std::fmt;

// Use local
use crate::client::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Track,
    Artist,
    Album,
    Playlist,
    User,
    Genre,
    Chart,
}

impl EntityKind {
    /// Path segment and query field name used by the API for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Playlist => "playlist",
            Self::User => "user",
            Self::Genre => "genre",
            Self::Chart => "chart",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record decodable from a Deezer response.
pub trait Entity: DeserializeOwned {
    const KIND: EntityKind;

    fn id(&self) -> u64;
}

/// The `{data: [...]}` envelope wrapping every multi-result response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DeezerList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Default for DeezerList<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: None,
            next: None,
        }
    }
}

/// Decodes a single entity, reporting missing required fields as a
/// [`ClientError::SchemaViolation`].
pub fn decode<T: Entity>(value: Value) -> ClientResult<T> {
    serde_json::from_value(value).map_err(|err| schema_violation(T::KIND, &err))
}

/// Decodes a `{data: [...]}` envelope of entities.
pub fn decode_list<T: Entity>(value: Value) -> ClientResult<DeezerList<T>> {
    serde_json::from_value(value).map_err(|err| schema_violation(T::KIND, &err))
}

fn schema_violation(kind: EntityKind, err: &serde_json::Error) -> ClientError {
    let message = err.to_string();
    let field = offending_field(&message).unwrap_or("<body>").to_owned();
    error!("{} response no longer matches its schema: {}", kind, message);
    ClientError::SchemaViolation {
        kind,
        field,
        message,
    }
}

// serde reports field problems as "missing field `name`" or
// "unknown variant `x`, expected ..."; the first backticked token names it.
fn offending_field(message: &str) -> Option<&str> {
    let start = message.find('`')? + 1;
    let len = message[start..].find('`')?;
    Some(&message[start..start + len])
}
