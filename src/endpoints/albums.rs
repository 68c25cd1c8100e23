//! Endpoint functions relating to albums

use crate::client::{ClientResult, Deezer};
use crate::endpoints::{lookup, relation, Order, Search, SearchOptions};
use crate::model::album::{AlbumFull, AlbumSearch};
use crate::model::track::TrackBase;
use crate::model::EntityKind;

pub struct Albums<'a>(pub &'a Deezer);

impl Albums<'_> {
    pub async fn get(&self, id: u64) -> ClientResult<Option<AlbumFull>> {
        lookup(self.0, &format!("album/{}", id)).await
    }

    pub async fn search(&self, name: &str, options: &SearchOptions) -> ClientResult<Vec<AlbumSearch>> {
        Search(self.0).find(name, options).await
    }

    pub async fn best_match(&self, name: &str, strict: bool, order: Option<Order>) -> ClientResult<Option<AlbumFull>> {
        match Search(self.0).first_match::<AlbumSearch>(name, 1, strict, order).await? {
            Some(hit) => self.get(hit.id).await,
            None => Ok(None),
        }
    }

    pub async fn by_artist(
        &self,
        name: &str,
        artist: &str,
        limit: u32,
        order: Option<Order>,
    ) -> ClientResult<Option<AlbumFull>> {
        let clauses = [(EntityKind::Album, name), (EntityKind::Artist, artist)];
        match Search(self.0).first_compound::<AlbumSearch>(&clauses, limit, order).await? {
            Some(hit) => self.get(hit.id).await,
            None => Ok(None),
        }
    }

    pub async fn tracks(&self, id: u64) -> ClientResult<Option<Vec<TrackBase>>> {
        relation(self.0, &format!("album/{}/tracks", id), None).await
    }
}
