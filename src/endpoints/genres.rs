//! Endpoint functions related to genres

use crate::client::{ClientResult, Deezer};
use crate::endpoints::{lookup, relation};
use crate::model::genre::Genre;

pub struct Genres<'a>(pub &'a Deezer);

impl Genres<'_> {
    pub async fn list(&self) -> ClientResult<Vec<Genre>> {
        Ok(relation(self.0, "genre", None).await?.unwrap_or_default())
    }

    pub async fn get(&self, id: u64) -> ClientResult<Option<Genre>> {
        lookup(self.0, &format!("genre/{}", id)).await
    }
}
