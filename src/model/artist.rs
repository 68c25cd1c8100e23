// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::{Entity, EntityKind};

/// An artist embedded in a track, album or contributor list.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistBase {
    pub id: u64,
    pub name: String,
    pub link: Option<String>,
    pub share: Option<String>,
    pub picture: Option<String>,
    pub picture_small: Option<String>,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
    pub radio: Option<bool>,
    pub tracklist: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistSearch {
    pub id: u64,
    pub name: String,
    pub link: String,
    pub picture: Option<String>,
    pub picture_small: Option<String>,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
    pub nb_album: u32,
    pub nb_fan: u64,
    pub radio: bool,
    pub tracklist: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistFull {
    pub id: u64,
    pub name: String,
    pub link: String,
    pub share: Option<String>,
    pub picture: Option<String>,
    pub picture_small: Option<String>,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
    pub nb_album: u32,
    pub nb_fan: u64,
    pub radio: bool,
    pub tracklist: String,
}

/// An artist credited on a track or album, with the role they played.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(flatten)]
    pub artist: ArtistBase,
    pub role: Option<String>,
}

impl From<&ArtistSearch> for ArtistBase {
    fn from(artist: &ArtistSearch) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
            link: Some(artist.link.clone()),
            share: None,
            picture: artist.picture.clone(),
            picture_small: artist.picture_small.clone(),
            picture_medium: artist.picture_medium.clone(),
            picture_big: artist.picture_big.clone(),
            picture_xl: artist.picture_xl.clone(),
            radio: Some(artist.radio),
            tracklist: Some(artist.tracklist.clone()),
        }
    }
}

impl From<&ArtistFull> for ArtistBase {
    fn from(artist: &ArtistFull) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
            link: Some(artist.link.clone()),
            share: artist.share.clone(),
            picture: artist.picture.clone(),
            picture_small: artist.picture_small.clone(),
            picture_medium: artist.picture_medium.clone(),
            picture_big: artist.picture_big.clone(),
            picture_xl: artist.picture_xl.clone(),
            radio: Some(artist.radio),
            tracklist: Some(artist.tracklist.clone()),
        }
    }
}

impl Entity for ArtistBase {
    const KIND: EntityKind = EntityKind::Artist;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for ArtistSearch {
    const KIND: EntityKind = EntityKind::Artist;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for ArtistFull {
    const KIND: EntityKind = EntityKind::Artist;

    fn id(&self) -> u64 {
        self.id
    }
}
