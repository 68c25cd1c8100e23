// Use 3rd party
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Use local
use crate::model::artist::{ArtistBase, Contributor};
use crate::model::de;
use crate::model::genre::Genre;
use crate::model::track::TrackBase;
use crate::model::{Entity, EntityKind};

/// An album embedded in a track, or referenced as another album's alternative.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumBase {
    pub id: u64,
    pub title: String,
    pub link: Option<String>,
    pub cover: Option<String>,
    pub cover_small: Option<String>,
    pub cover_medium: Option<String>,
    pub cover_big: Option<String>,
    pub cover_xl: Option<String>,
    pub md5_image: Option<String>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub release_date: Option<NaiveDate>,
    pub tracklist: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumSearch {
    pub id: u64,
    pub title: String,
    pub link: String,
    pub cover: Option<String>,
    pub cover_small: Option<String>,
    pub cover_medium: Option<String>,
    pub cover_big: Option<String>,
    pub cover_xl: Option<String>,
    pub md5_image: Option<String>,
    pub genre_id: Option<i64>,
    pub nb_tracks: u32,
    pub record_type: Option<String>,
    pub tracklist: Option<String>,
    pub explicit_lyrics: Option<bool>,
    pub artist: ArtistBase,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumFull {
    pub id: u64,
    pub title: String,
    pub upc: Option<String>,
    pub link: String,
    pub share: Option<String>,
    pub cover: Option<String>,
    pub cover_small: Option<String>,
    pub cover_medium: Option<String>,
    pub cover_big: Option<String>,
    pub cover_xl: Option<String>,
    pub md5_image: Option<String>,
    pub genre_id: Option<i64>,
    #[serde(default, deserialize_with = "de::enveloped")]
    pub genres: Vec<Genre>,
    pub label: Option<String>,
    pub nb_tracks: u32,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    pub fans: Option<u64>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub release_date: Option<NaiveDate>,
    pub record_type: Option<String>,
    pub available: Option<bool>,
    /// Only one level deep: the alternative's own alternative is dropped.
    pub alternative: Option<AlbumBase>,
    pub tracklist: Option<String>,
    pub explicit_lyrics: Option<bool>,
    pub explicit_content_lyrics: Option<i32>,
    pub explicit_content_cover: Option<i32>,
    #[serde(default, deserialize_with = "de::enveloped")]
    pub contributors: Vec<Contributor>,
    pub artist: ArtistBase,
    #[serde(default, deserialize_with = "de::enveloped")]
    pub tracks: Vec<TrackBase>,
}

impl From<&AlbumSearch> for AlbumBase {
    fn from(album: &AlbumSearch) -> Self {
        Self {
            id: album.id,
            title: album.title.clone(),
            link: Some(album.link.clone()),
            cover: album.cover.clone(),
            cover_small: album.cover_small.clone(),
            cover_medium: album.cover_medium.clone(),
            cover_big: album.cover_big.clone(),
            cover_xl: album.cover_xl.clone(),
            md5_image: album.md5_image.clone(),
            release_date: None,
            tracklist: album.tracklist.clone(),
        }
    }
}

impl From<&AlbumFull> for AlbumBase {
    fn from(album: &AlbumFull) -> Self {
        Self {
            id: album.id,
            title: album.title.clone(),
            link: Some(album.link.clone()),
            cover: album.cover.clone(),
            cover_small: album.cover_small.clone(),
            cover_medium: album.cover_medium.clone(),
            cover_big: album.cover_big.clone(),
            cover_xl: album.cover_xl.clone(),
            md5_image: album.md5_image.clone(),
            release_date: album.release_date,
            tracklist: album.tracklist.clone(),
        }
    }
}

impl Entity for AlbumBase {
    const KIND: EntityKind = EntityKind::Album;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for AlbumSearch {
    const KIND: EntityKind = EntityKind::Album;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for AlbumFull {
    const KIND: EntityKind = EntityKind::Album;

    fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::model::decode;
    use serde_json::json;

    fn album_json() -> serde_json::Value {
        json!({
            "id": 302127,
            "title": "Discovery",
            "link": "https://www.deezer.com/album/302127",
            "genre_id": 113,
            "genres": { "data": [{ "id": 113, "name": "Dance", "type": "genre" }] },
            "nb_tracks": 14,
            "duration": 3660,
            "fans": 301544,
            "release_date": "2001-03-07",
            "record_type": "album",
            "alternative": {
                "id": 7311,
                "title": "Discovery (Remastered)",
                "alternative": { "id": 1, "title": "never decoded" }
            },
            "artist": { "id": 27, "name": "Daft Punk", "type": "artist" },
            "tracks": {
                "data": [{
                    "id": 3135553,
                    "readable": true,
                    "title": "One More Time",
                    "link": "https://www.deezer.com/track/3135553",
                    "duration": 320,
                    "artist": { "id": 27, "name": "Daft Punk" }
                }]
            }
        })
    }

    #[test]
    fn full_unwraps_nested_envelopes() {
        let album: AlbumFull = decode(album_json()).unwrap();
        assert_eq!(album.genres.len(), 1);
        assert_eq!(album.genres[0].name, "Dance");
        assert_eq!(album.tracks[0].title, "One More Time");
        assert_eq!(album.release_date, NaiveDate::from_ymd_opt(2001, 3, 7));
    }

    #[test]
    fn alternative_stops_after_one_level() {
        let album: AlbumFull = decode(album_json()).unwrap();
        let alternative = album.alternative.unwrap();
        assert_eq!(alternative.id, 7311);
        assert_eq!(alternative.title, "Discovery (Remastered)");
    }

    #[test]
    fn bare_track_list_is_accepted() {
        let mut value = album_json();
        value["tracks"] = value["tracks"]["data"].clone();
        let album: AlbumFull = decode(value).unwrap();
        assert_eq!(album.tracks.len(), 1);
    }

    fn violated_field(value: serde_json::Value) -> String {
        match decode::<AlbumFull>(value).unwrap_err() {
            ClientError::SchemaViolation { kind, field, .. } => {
                assert_eq!(kind, EntityKind::Album);
                field
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn nested_track_without_title_names_the_field() {
        let mut value = album_json();
        value["tracks"]["data"][0].as_object_mut().unwrap().remove("title");
        assert_eq!(violated_field(value), "title");
    }

    #[test]
    fn bare_contributor_without_name_names_the_field() {
        let mut value = album_json();
        value["contributors"] = json!([{ "id": 2, "role": "Main" }]);
        assert_eq!(violated_field(value), "name");
    }

    #[test]
    fn decoding_is_idempotent() {
        let first: AlbumFull = decode(album_json()).unwrap();
        let second: AlbumFull = decode(album_json()).unwrap();
        assert_eq!(first, second);
    }
}
