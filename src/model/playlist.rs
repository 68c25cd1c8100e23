// Use 3rd party
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// Use local
use crate::model::de;
use crate::model::track::TrackBase;
use crate::model::user::UserBase;
use crate::model::{Entity, EntityKind};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistBase {
    pub id: u64,
    pub title: String,
    pub public: Option<bool>,
    pub nb_tracks: Option<u32>,
    pub link: Option<String>,
    pub picture: Option<String>,
    pub picture_small: Option<String>,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
    pub checksum: Option<String>,
    pub tracklist: Option<String>,
    #[serde(default, deserialize_with = "de::datetime_opt")]
    pub creation_date: Option<NaiveDateTime>,
    pub md5_image: Option<String>,
    pub picture_type: Option<String>,
    #[serde(alias = "creator")]
    pub user: Option<UserBase>,
}

/// Search hits name their owner `user` where the full shape says `creator`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSearch {
    pub id: u64,
    pub title: String,
    pub public: bool,
    pub nb_tracks: u32,
    pub link: String,
    pub picture: Option<String>,
    pub picture_small: Option<String>,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
    pub checksum: Option<String>,
    pub tracklist: Option<String>,
    #[serde(default, deserialize_with = "de::datetime_opt")]
    pub creation_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "de::datetime_opt")]
    pub add_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "de::datetime_opt")]
    pub mod_date: Option<NaiveDateTime>,
    pub md5_image: Option<String>,
    pub picture_type: Option<String>,
    pub fans: Option<u64>,
    #[serde(alias = "creator")]
    pub user: Option<UserBase>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistFull {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    pub public: bool,
    pub is_loved_track: Option<bool>,
    pub collaborative: Option<bool>,
    pub nb_tracks: u32,
    pub fans: Option<u64>,
    pub link: String,
    pub share: Option<String>,
    pub picture: Option<String>,
    pub picture_small: Option<String>,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
    pub checksum: Option<String>,
    pub tracklist: Option<String>,
    #[serde(default, deserialize_with = "de::datetime_opt")]
    pub creation_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "de::datetime_opt")]
    pub mod_date: Option<NaiveDateTime>,
    pub md5_image: Option<String>,
    pub picture_type: Option<String>,
    pub creator: Option<UserBase>,
    #[serde(default, deserialize_with = "de::enveloped")]
    pub tracks: Vec<TrackBase>,
}

impl PlaylistSearch {
    pub fn creator(&self) -> Option<&UserBase> {
        self.user.as_ref()
    }
}

impl From<&PlaylistSearch> for PlaylistBase {
    fn from(playlist: &PlaylistSearch) -> Self {
        Self {
            id: playlist.id,
            title: playlist.title.clone(),
            public: Some(playlist.public),
            nb_tracks: Some(playlist.nb_tracks),
            link: Some(playlist.link.clone()),
            picture: playlist.picture.clone(),
            picture_small: playlist.picture_small.clone(),
            picture_medium: playlist.picture_medium.clone(),
            picture_big: playlist.picture_big.clone(),
            picture_xl: playlist.picture_xl.clone(),
            checksum: playlist.checksum.clone(),
            tracklist: playlist.tracklist.clone(),
            creation_date: playlist.creation_date,
            md5_image: playlist.md5_image.clone(),
            picture_type: playlist.picture_type.clone(),
            user: playlist.user.clone(),
        }
    }
}

impl From<&PlaylistFull> for PlaylistBase {
    fn from(playlist: &PlaylistFull) -> Self {
        Self {
            id: playlist.id,
            title: playlist.title.clone(),
            public: Some(playlist.public),
            nb_tracks: Some(playlist.nb_tracks),
            link: Some(playlist.link.clone()),
            picture: playlist.picture.clone(),
            picture_small: playlist.picture_small.clone(),
            picture_medium: playlist.picture_medium.clone(),
            picture_big: playlist.picture_big.clone(),
            picture_xl: playlist.picture_xl.clone(),
            checksum: playlist.checksum.clone(),
            tracklist: playlist.tracklist.clone(),
            creation_date: playlist.creation_date,
            md5_image: playlist.md5_image.clone(),
            picture_type: playlist.picture_type.clone(),
            user: playlist.creator.clone(),
        }
    }
}

impl Entity for PlaylistBase {
    const KIND: EntityKind = EntityKind::Playlist;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for PlaylistSearch {
    const KIND: EntityKind = EntityKind::Playlist;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for PlaylistFull {
    const KIND: EntityKind = EntityKind::Playlist;

    fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::decode;
    use serde_json::json;

    #[test]
    fn search_hit_exposes_owner_as_creator() {
        let playlist: PlaylistSearch = decode(json!({
            "id": 1479458365,
            "title": "Pop Hits",
            "public": true,
            "nb_tracks": 60,
            "link": "https://www.deezer.com/playlist/1479458365",
            "creation_date": "2015-12-03 14:20:45",
            "mod_date": "2024-05-01 09:00:00",
            "user": { "id": 753546365, "name": "Deezer Pop Editor", "type": "user" }
        }))
        .unwrap();
        assert_eq!(playlist.creator().map(|u| u.name.as_str()), Some("Deezer Pop Editor"));
        assert!(playlist.mod_date.is_some());
    }

    #[test]
    fn full_without_tracks_or_description() {
        let playlist: PlaylistFull = decode(json!({
            "id": 908622995,
            "title": "Rap",
            "duration": "21600",
            "public": true,
            "nb_tracks": 80,
            "link": "https://www.deezer.com/playlist/908622995",
            "creator": { "id": 2, "name": "editor" }
        }))
        .unwrap();
        assert_eq!(playlist.duration, 21600);
        assert_eq!(playlist.description, None);
        assert!(playlist.tracks.is_empty());
        assert_eq!(PlaylistBase::from(&playlist).user.unwrap().id, 2);
    }
}
