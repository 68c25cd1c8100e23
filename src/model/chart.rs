//! Chart entries carry a `position` next to a cut-down entity, so each
//! section gets its own record rather than reusing the search shapes.

// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::album::AlbumBase;
use crate::model::artist::ArtistBase;
use crate::model::playlist::PlaylistBase;
use crate::model::{de, DeezerList, Entity, EntityKind};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTrack {
    pub id: u64,
    pub title: String,
    pub link: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    #[serde(default, deserialize_with = "de::lenient_u64_opt")]
    pub rank: Option<u64>,
    pub explicit_lyrics: Option<bool>,
    pub preview: Option<String>,
    pub position: Option<u32>,
    pub artist: ArtistBase,
    pub album: AlbumBase,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAlbum {
    #[serde(flatten)]
    pub album: AlbumBase,
    pub position: Option<u32>,
    pub artist: Option<ArtistBase>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartArtist {
    #[serde(flatten)]
    pub artist: ArtistBase,
    pub position: Option<u32>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPlaylist {
    #[serde(flatten)]
    pub playlist: PlaylistBase,
    pub position: Option<u32>,
}

/// `chart/{genre_id}`: the current top entries per kind. Genre `0` is the
/// chart across all genres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(skip)]
    pub genre_id: u64,
    #[serde(default)]
    pub tracks: DeezerList<ChartTrack>,
    #[serde(default)]
    pub albums: DeezerList<ChartAlbum>,
    #[serde(default)]
    pub artists: DeezerList<ChartArtist>,
    #[serde(default)]
    pub playlists: DeezerList<ChartPlaylist>,
}

impl Chart {
    pub fn is_empty(&self) -> bool {
        self.tracks.data.is_empty()
            && self.albums.data.is_empty()
            && self.artists.data.is_empty()
            && self.playlists.data.is_empty()
    }
}

impl Entity for Chart {
    const KIND: EntityKind = EntityKind::Chart;

    fn id(&self) -> u64 {
        self.genre_id
    }
}
