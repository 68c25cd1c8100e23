//! Endpoint functions related to playlists

use crate::client::*;
use crate::endpoints::{lookup, relation, Order, Search, SearchOptions};
use crate::model::playlist::*;
use crate::model::track::TrackBase;
use crate::model::EntityKind;

pub struct Playlists<'a>(pub &'a Deezer);

impl Playlists<'_> {
    pub async fn get(&self, id: u64) -> ClientResult<Option<PlaylistFull>> {
        lookup(self.0, &format!("playlist/{}", id)).await
    }

    pub async fn search(&self, name: &str, options: &SearchOptions) -> ClientResult<Vec<PlaylistSearch>> {
        Search(self.0).find(name, options).await
    }

    /// Like [`search`](Self::search) but keeps public playlists only.
    ///
    /// The search endpoint cannot filter on visibility, so twice the limit
    /// is requested and the private ones are dropped afterwards.
    pub async fn search_public(&self, name: &str, options: &SearchOptions) -> ClientResult<Vec<PlaylistSearch>> {
        let limit = options.effective_limit() as usize;
        let widened = options.clone().limit(options.effective_limit().saturating_mul(2));

        let mut playlists = self.search(name, &widened).await?;
        playlists.retain(|playlist| playlist.public);
        playlists.truncate(limit);
        Ok(playlists)
    }

    pub async fn best_match(&self, name: &str, strict: bool, order: Option<Order>) -> ClientResult<Option<PlaylistFull>> {
        match Search(self.0).first_match::<PlaylistSearch>(name, 1, strict, order).await? {
            Some(hit) => self.get(hit.id).await,
            None => Ok(None),
        }
    }

    /// The playlist named `name` created by the user named `creator`.
    pub async fn by_creator(
        &self,
        name: &str,
        creator: &str,
        limit: u32,
        order: Option<Order>,
    ) -> ClientResult<Option<PlaylistFull>> {
        let clauses = [(EntityKind::Playlist, name), (EntityKind::User, creator)];
        match Search(self.0).first_compound::<PlaylistSearch>(&clauses, limit, order).await? {
            Some(hit) => self.get(hit.id).await,
            None => Ok(None),
        }
    }

    pub async fn tracks(&self, id: u64) -> ClientResult<Option<Vec<TrackBase>>> {
        relation(self.0, &format!("playlist/{}/tracks", id), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{client, expect_request_from_file, mock_request_success_from_file, server};
    use mockito::Matcher;

    #[tokio::test]
    async fn get() {
        let mut server = server().await;
        let _mock = mock_request_success_from_file(
            &mut server,
            "/playlist/1479458365",
            Matcher::Any,
            "tests/files/playlist.json",
        )
        .await;

        let result = client(&server).playlists().get(1479458365).await.unwrap().unwrap();
        assert_eq!(result.title, "Pop Hits");
        assert_eq!(result.creator.unwrap().name, "Deezer Pop Editor");
        assert_eq!(result.tracks.len(), 2);
        assert_eq!(result.checksum.as_deref(), Some("c2b3b3f5a1c7e8d9f0a1b2c3d4e5f6a7"));
    }

    #[tokio::test]
    async fn search_public_filters_and_truncates() {
        let mut server = server().await;
        let mock = expect_request_from_file(
            &mut server,
            "/search/playlist",
            Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Pop".into()),
                Matcher::UrlEncoded("limit".into(), "4".into()),
            ]),
            "tests/files/search_playlist.json",
            1,
        )
        .await;

        let options = SearchOptions::new().limit(2);
        let result = client(&server).playlists().search_public("Pop", &options).await.unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|playlist| playlist.public));
        assert_eq!(result[0].title, "Pop Hits");
        assert_eq!(result[1].title, "Pop Rising");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn search_public_may_return_fewer_than_limit() {
        let mut server = server().await;
        let _mock = mock_request_success_from_file(
            &mut server,
            "/search/playlist",
            Matcher::UrlEncoded("limit".into(), "20".into()),
            "tests/files/search_playlist.json",
        )
        .await;

        let result = client(&server)
            .playlists()
            .search_public("Pop", &SearchOptions::new())
            .await
            .unwrap();

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|playlist| playlist.public));
    }

    #[tokio::test]
    async fn by_creator() {
        let mut server = server().await;
        let search = mock_request_success_from_file(
            &mut server,
            "/search/playlist",
            Matcher::UrlEncoded("q".into(), r#"playlist:"Pop Hits" user:"Deezer Pop Editor""#.into()),
            "tests/files/search_playlist.json",
        )
        .await;
        let full = mock_request_success_from_file(
            &mut server,
            "/playlist/1479458365",
            Matcher::Any,
            "tests/files/playlist.json",
        )
        .await;

        let result = client(&server)
            .playlists()
            .by_creator("Pop Hits", "Deezer Pop Editor", 1, Some(Order::Ranking))
            .await
            .unwrap();

        assert_eq!(result.unwrap().id, 1479458365);
        search.assert_async().await;
        full.assert_async().await;
    }

    #[tokio::test]
    async fn tracks() {
        let mut server = server().await;
        let _mock = mock_request_success_from_file(
            &mut server,
            "/playlist/1479458365/tracks",
            Matcher::Any,
            "tests/files/album_tracks.json",
        )
        .await;

        let result = client(&server).playlists().tracks(1479458365).await.unwrap().unwrap();
        assert_eq!(result.len(), 2);
    }
}
