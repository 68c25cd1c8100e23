//! Search plumbing shared by every entity namespace

// Use 3rd party
use log::debug;
use serde::{Deserialize, Serialize};

// Use built-in library
use std::fmt;
use std::str::FromStr;

use crate::client::*;
use crate::model::{decode_list, Entity, EntityKind};

pub const DEFAULT_LIMIT: u32 = 10;

/// Sort orders accepted by `search/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Order {
    Ranking,
    TrackAsc,
    TrackDesc,
    ArtistAsc,
    ArtistDesc,
    AlbumAsc,
    AlbumDesc,
    RatingAsc,
    RatingDesc,
    DurationAsc,
    DurationDesc,
}

impl Order {
    pub const ALL: [Order; 11] = [
        Order::Ranking,
        Order::TrackAsc,
        Order::TrackDesc,
        Order::ArtistAsc,
        Order::ArtistDesc,
        Order::AlbumAsc,
        Order::AlbumDesc,
        Order::RatingAsc,
        Order::RatingDesc,
        Order::DurationAsc,
        Order::DurationDesc,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ranking => "RANKING",
            Self::TrackAsc => "TRACK_ASC",
            Self::TrackDesc => "TRACK_DESC",
            Self::ArtistAsc => "ARTIST_ASC",
            Self::ArtistDesc => "ARTIST_DESC",
            Self::AlbumAsc => "ALBUM_ASC",
            Self::AlbumDesc => "ALBUM_DESC",
            Self::RatingAsc => "RATING_ASC",
            Self::RatingDesc => "RATING_DESC",
            Self::DurationAsc => "DURATION_ASC",
            Self::DurationDesc => "DURATION_DESC",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| format!("unknown sort order {:?}", s))
    }
}

/// Options for a `search/{kind}` call.
///
/// `strict: None` leaves the parameter off entirely, which is not the same
/// as sending `strict=off`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub limit: Option<u32>,
    pub strict: Option<bool>,
    pub order: Option<Order>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn strict(mut self, strict: Option<bool>) -> Self {
        self.strict = strict;
        self
    }

    pub fn order(mut self, order: Option<Order>) -> Self {
        self.order = order;
        self
    }

    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    fn params(&self, query: &str) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("q", Some(query.to_owned())),
            ("limit", Some(self.effective_limit().to_string())),
            ("strict", self.strict.map(|strict| if strict { "on" } else { "off" }.to_owned())),
            ("order", self.order.map(|order| order.as_str().to_owned())),
        ]
    }
}

/// `{field}:"{value}"`, the advanced-search form matching an exact phrase.
pub fn scoped(field: &str, value: &str) -> String {
    format!("{}:\"{}\"", field, value.replace('"', ""))
}

pub struct Search<'a>(pub &'a Deezer);

impl Search<'_> {
    /// Runs `search/{kind}` for the record type `T` and returns its hits.
    pub async fn find<T: Entity>(&self, query: &str, options: &SearchOptions) -> ClientResult<Vec<T>> {
        let path = format!("search/{}", T::KIND);
        let result = self.0.get(&path, &options.params(query)).await?;
        Ok(decode_list::<T>(result)?.data)
    }

    /// First hit for `name`, trying an exact phrase first when `strict` is
    /// set and widening to a free-text query exactly once if that is empty.
    pub async fn first_match<T: Entity>(
        &self,
        name: &str,
        limit: u32,
        strict: bool,
        order: Option<Order>,
    ) -> ClientResult<Option<T>> {
        let options = SearchOptions::new().limit(limit).strict(Some(strict)).order(order);
        let query = if strict {
            scoped(T::KIND.as_str(), name)
        } else {
            name.to_owned()
        };

        let mut hits = self.find::<T>(&query, &options).await?;
        if hits.is_empty() && strict {
            debug!("no exact {} match for {:?}, retrying fuzzy", T::KIND, name);
            let options = options.strict(Some(false));
            hits = self.find::<T>(name, &options).await?;
        }

        Ok(hits.into_iter().next())
    }

    /// First hit for a query made of several scoped clauses. No fuzzy
    /// fallback: widening a compound query loses what made it precise.
    pub async fn first_compound<T: Entity>(
        &self,
        clauses: &[(EntityKind, &str)],
        limit: u32,
        order: Option<Order>,
    ) -> ClientResult<Option<T>> {
        let query = clauses
            .iter()
            .map(|(field, value)| scoped(field.as_str(), value))
            .collect::<Vec<_>>()
            .join(" ");
        let options = SearchOptions::new().limit(limit).order(order);
        Ok(self.find::<T>(&query, &options).await?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{client, mock_request_success_from_file, server};
    use crate::model::track::TrackSearch;
    use mockito::Matcher;

    #[test]
    fn strict_is_omitted_unless_given() {
        let params = SearchOptions::new().params("x");
        assert_eq!(params[2], ("strict", None));
        assert_eq!(params[1], ("limit", Some("10".to_owned())));

        let params = SearchOptions::new().strict(Some(false)).params("x");
        assert_eq!(params[2], ("strict", Some("off".to_owned())));
    }

    #[test]
    fn order_round_trips_through_its_name() {
        for order in Order::ALL.iter() {
            assert_eq!(order.as_str().parse::<Order>(), Ok(*order));
        }
        assert!("NEWEST".parse::<Order>().is_err());
    }

    #[test]
    fn scoped_quotes_and_strips_inner_quotes() {
        assert_eq!(scoped("track", "Blinding Lights"), r#"track:"Blinding Lights""#);
        assert_eq!(scoped("artist", r#"The "Weeknd""#), r#"artist:"The Weeknd""#);
    }

    #[tokio::test]
    async fn find() {
        let mut server = server().await;
        let _mock = mock_request_success_from_file(
            &mut server,
            "/search/track",
            Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Blinding Lights".into()),
                Matcher::UrlEncoded("limit".into(), "1".into()),
                Matcher::UrlEncoded("strict".into(), "on".into()),
            ]),
            "tests/files/search_track.json",
        )
        .await;

        let options = SearchOptions::new().limit(1).strict(Some(true));
        let result: Vec<TrackSearch> = Search(&client(&server))
            .find("Blinding Lights", &options)
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Blinding Lights");
        assert_eq!(result[0].artist.name, "The Weeknd");
    }

    #[tokio::test]
    async fn first_compound_joins_clauses() {
        let mut server = server().await;
        let mock = mock_request_success_from_file(
            &mut server,
            "/search/track",
            Matcher::UrlEncoded("q".into(), r#"track:"Starboy" artist:"The Weeknd""#.into()),
            "tests/files/search_track_starboy.json",
        )
        .await;

        let hit: Option<TrackSearch> = Search(&client(&server))
            .first_compound(
                &[(EntityKind::Track, "Starboy"), (EntityKind::Artist, "The Weeknd")],
                1,
                Some(Order::Ranking),
            )
            .await
            .unwrap();

        assert_eq!(hit.unwrap().id, 134794932);
        mock.assert_async().await;
    }
}
