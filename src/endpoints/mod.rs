pub mod albums;
pub mod artists;
pub mod charts;
pub mod genres;
pub mod playlists;
pub mod search;
pub mod tracks;
pub mod users;

pub use crate::endpoints::search::{Order, Search, SearchOptions, DEFAULT_LIMIT};

use crate::client::{ClientResult, Deezer};
use crate::endpoints::albums::*;
use crate::endpoints::artists::*;
use crate::endpoints::charts::*;
use crate::endpoints::genres::*;
use crate::endpoints::playlists::*;
use crate::endpoints::tracks::*;
use crate::endpoints::users::*;
use crate::model::{decode, decode_list, Entity};

// Endpoint function namespaces

impl Deezer {
    pub const fn albums(&self) -> Albums<'_> {
        Albums(self)
    }

    pub const fn artists(&self) -> Artists<'_> {
        Artists(self)
    }

    pub const fn charts(&self) -> Charts<'_> {
        Charts(self)
    }

    pub const fn genres(&self) -> Genres<'_> {
        Genres(self)
    }

    pub const fn playlists(&self) -> Playlists<'_> {
        Playlists(self)
    }

    pub const fn searches(&self) -> Search<'_> {
        Search(self)
    }

    pub const fn tracks(&self) -> Tracks<'_> {
        Tracks(self)
    }

    pub const fn users(&self) -> Users<'_> {
        Users(self)
    }
}

/// Fetches a single entity, mapping upstream's not-found answer to `None`.
pub(crate) async fn lookup<T: Entity>(deezer: &Deezer, path: &str) -> ClientResult<Option<T>> {
    match deezer.get(path, &[]).await {
        Ok(result) => decode(result).map(Some),
        Err(err) if err.is_not_found() => {
            log::debug!("{} not found at {}", T::KIND, path);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Fetches a `{data: [...]}` relation such as `artist/{id}/top`.
pub(crate) async fn relation<T: Entity>(
    deezer: &Deezer,
    path: &str,
    limit: Option<u32>,
) -> ClientResult<Option<Vec<T>>> {
    let params = [("limit", limit.map(|limit| limit.to_string()))];
    match deezer.get(path, &params).await {
        Ok(result) => Ok(Some(decode_list::<T>(result)?.data)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}
