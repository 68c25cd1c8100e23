//! Endpoint functions relateed to artists

use crate::client::{ClientResult, Deezer};
use crate::endpoints::{lookup, relation, Order, Search, SearchOptions};
use crate::model::album::AlbumBase;
use crate::model::artist::{ArtistFull, ArtistSearch};
use crate::model::track::TrackSearch;

pub struct Artists<'a>(pub &'a Deezer);

impl Artists<'_> {
    pub async fn get(&self, id: u64) -> ClientResult<Option<ArtistFull>> {
        lookup(self.0, &format!("artist/{}", id)).await
    }

    pub async fn search(&self, name: &str, options: &SearchOptions) -> ClientResult<Vec<ArtistSearch>> {
        Search(self.0).find(name, options).await
    }

    pub async fn best_match(&self, name: &str, strict: bool, order: Option<Order>) -> ClientResult<Option<ArtistFull>> {
        match Search(self.0).first_match::<ArtistSearch>(name, 1, strict, order).await? {
            Some(hit) => self.get(hit.id).await,
            None => Ok(None),
        }
    }

    /// The artist's most popular tracks; `None` when the artist is unknown.
    pub async fn top(&self, id: u64, limit: Option<u32>) -> ClientResult<Option<Vec<TrackSearch>>> {
        relation(self.0, &format!("artist/{}/top", id), limit).await
    }

    pub async fn albums(&self, id: u64, limit: Option<u32>) -> ClientResult<Option<Vec<AlbumBase>>> {
        relation(self.0, &format!("artist/{}/albums", id), limit).await
    }
}
