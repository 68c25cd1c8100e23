// Use 3rd party
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Use local
use crate::model::album::AlbumBase;
use crate::model::artist::{ArtistBase, Contributor};
use crate::model::de;
use crate::model::{Entity, EntityKind};

/// A track embedded in an album or playlist track list.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackBase {
    pub id: u64,
    pub readable: bool,
    pub title: String,
    pub title_short: Option<String>,
    pub title_version: Option<String>,
    pub isrc: Option<String>,
    pub link: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    pub track_position: Option<u32>,
    pub disk_number: Option<u32>,
    #[serde(default, deserialize_with = "de::lenient_u64_opt")]
    pub rank: Option<u64>,
    pub explicit_lyrics: Option<bool>,
    pub explicit_content_lyrics: Option<i32>,
    pub explicit_content_cover: Option<i32>,
    pub preview: Option<String>,
    pub md5_image: Option<String>,
    pub artist: Option<ArtistBase>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSearch {
    pub id: u64,
    pub readable: bool,
    pub title: String,
    pub title_short: Option<String>,
    pub title_version: Option<String>,
    pub link: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub rank: u64,
    pub explicit_lyrics: bool,
    pub explicit_content_lyrics: Option<i32>,
    pub explicit_content_cover: Option<i32>,
    pub preview: Option<String>,
    pub md5_image: Option<String>,
    pub artist: ArtistBase,
    pub album: AlbumBase,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackFull {
    pub id: u64,
    pub readable: bool,
    pub title: String,
    pub title_short: Option<String>,
    pub title_version: Option<String>,
    pub isrc: Option<String>,
    pub link: String,
    pub share: Option<String>,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    pub track_position: Option<u32>,
    pub disk_number: Option<u32>,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub rank: u64,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub release_date: Option<NaiveDate>,
    pub explicit_lyrics: bool,
    pub explicit_content_lyrics: Option<i32>,
    pub explicit_content_cover: Option<i32>,
    pub preview: Option<String>,
    pub bpm: Option<f64>,
    pub gain: Option<f64>,
    #[serde(default)]
    pub available_countries: Vec<String>,
    #[serde(default, deserialize_with = "de::enveloped")]
    pub contributors: Vec<Contributor>,
    pub md5_image: Option<String>,
    pub artist: ArtistBase,
    pub album: AlbumBase,
}

impl From<&TrackSearch> for TrackBase {
    fn from(track: &TrackSearch) -> Self {
        Self {
            id: track.id,
            readable: track.readable,
            title: track.title.clone(),
            title_short: track.title_short.clone(),
            title_version: track.title_version.clone(),
            isrc: None,
            link: track.link.clone(),
            duration: track.duration,
            track_position: None,
            disk_number: None,
            rank: Some(track.rank),
            explicit_lyrics: Some(track.explicit_lyrics),
            explicit_content_lyrics: track.explicit_content_lyrics,
            explicit_content_cover: track.explicit_content_cover,
            preview: track.preview.clone(),
            md5_image: track.md5_image.clone(),
            artist: Some(track.artist.clone()),
        }
    }
}

impl From<&TrackFull> for TrackBase {
    fn from(track: &TrackFull) -> Self {
        Self {
            id: track.id,
            readable: track.readable,
            title: track.title.clone(),
            title_short: track.title_short.clone(),
            title_version: track.title_version.clone(),
            isrc: track.isrc.clone(),
            link: track.link.clone(),
            duration: track.duration,
            track_position: track.track_position,
            disk_number: track.disk_number,
            rank: Some(track.rank),
            explicit_lyrics: Some(track.explicit_lyrics),
            explicit_content_lyrics: track.explicit_content_lyrics,
            explicit_content_cover: track.explicit_content_cover,
            preview: track.preview.clone(),
            md5_image: track.md5_image.clone(),
            artist: Some(track.artist.clone()),
        }
    }
}

impl Entity for TrackBase {
    const KIND: EntityKind = EntityKind::Track;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for TrackSearch {
    const KIND: EntityKind = EntityKind::Track;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for TrackFull {
    const KIND: EntityKind = EntityKind::Track;

    fn id(&self) -> u64 {
        self.id
    }
}
