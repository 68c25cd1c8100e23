//! Endpoint functions related to tracks

use crate::client::*;
use crate::endpoints::{lookup, Search, SearchOptions, Order};
use crate::model::track::*;
use crate::model::EntityKind;

pub struct Tracks<'a>(pub &'a Deezer);

impl Tracks<'_> {
    pub async fn get(&self, id: u64) -> ClientResult<Option<TrackFull>> {
        lookup(self.0, &format!("track/{}", id)).await
    }

    pub async fn search(&self, name: &str, options: &SearchOptions) -> ClientResult<Vec<TrackSearch>> {
        Search(self.0).find(name, options).await
    }

    pub async fn best_match(&self, name: &str, strict: bool, order: Option<Order>) -> ClientResult<Option<TrackFull>> {
        match Search(self.0).first_match::<TrackSearch>(name, 1, strict, order).await? {
            Some(hit) => self.get(hit.id).await,
            None => Ok(None),
        }
    }

    /// The track named `name` as performed by `artist`.
    pub async fn by_artist(
        &self,
        name: &str,
        artist: &str,
        limit: u32,
        order: Option<Order>,
    ) -> ClientResult<Option<TrackFull>> {
        let clauses = [(EntityKind::Track, name), (EntityKind::Artist, artist)];
        match Search(self.0).first_compound::<TrackSearch>(&clauses, limit, order).await? {
            Some(hit) => self.get(hit.id).await,
            None => Ok(None),
        }
    }
}
