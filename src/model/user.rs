// Use 3rd party
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Use local
use crate::model::de;
use crate::model::{Entity, EntityKind};

/// A user embedded in a parent, e.g. a playlist's creator.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBase {
    pub id: u64,
    pub name: String,
    pub link: Option<String>,
    pub picture: Option<String>,
    pub picture_small: Option<String>,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
    pub country: Option<String>,
    pub tracklist: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSearch {
    pub id: u64,
    pub name: String,
    pub link: Option<String>,
    pub picture: Option<String>,
    pub picture_small: Option<String>,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
    pub tracklist: String,
}

/// `user/{id}`; the personal fields are only filled for `user/me`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFull {
    pub id: u64,
    pub name: String,
    pub link: Option<String>,
    pub picture: Option<String>,
    pub picture_small: Option<String>,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
    pub country: Option<String>,
    pub tracklist: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub status: Option<u8>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::date_opt")]
    pub inscription_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub lang: Option<String>,
    pub is_kid: Option<bool>,
    pub explicit_content_level: Option<String>,
    #[serde(default)]
    pub explicit_content_levels_available: Vec<String>,
}

impl From<&UserSearch> for UserBase {
    fn from(user: &UserSearch) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            link: user.link.clone(),
            picture: user.picture.clone(),
            picture_small: user.picture_small.clone(),
            picture_medium: user.picture_medium.clone(),
            picture_big: user.picture_big.clone(),
            picture_xl: user.picture_xl.clone(),
            country: None,
            tracklist: Some(user.tracklist.clone()),
        }
    }
}

impl From<&UserFull> for UserBase {
    fn from(user: &UserFull) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            link: user.link.clone(),
            picture: user.picture.clone(),
            picture_small: user.picture_small.clone(),
            picture_medium: user.picture_medium.clone(),
            picture_big: user.picture_big.clone(),
            picture_xl: user.picture_xl.clone(),
            country: user.country.clone(),
            tracklist: Some(user.tracklist.clone()),
        }
    }
}

impl Entity for UserBase {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for UserSearch {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for UserFull {
    const KIND: EntityKind = EntityKind::User;

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
    fn base_without_country_decodes() {
        let user: UserBase = decode(json!({
            "id": 2529,
            "name": "dadbod",
            "tracklist": "https://api.deezer.com/user/2529/flow",
            "type": "user"
        }))
        .unwrap();
        assert_eq!(user.name, "dadbod");
        assert_eq!(user.country, None);
        assert_eq!(user.picture, None);
    }

    #[test]
    fn null_country_is_absent() {
        let user: UserBase = decode(json!({ "id": 1, "name": "x", "country": null })).unwrap();
        assert_eq!(user.country, None);
    }

    #[test]
    fn full_shape_leaves_personal_fields_absent() {
        let user: UserFull = decode(json!({
            "id": 2529,
            "name": "dadbod",
            "country": "FR",
            "tracklist": "https://api.deezer.com/user/2529/flow"
        }))
        .unwrap();
        assert_eq!(user.country.as_deref(), Some("FR"));
        assert_eq!(user.birthday, None);
        assert!(user.explicit_content_levels_available.is_empty());

        let base = UserBase::from(&user);
        assert_eq!(base.id, 2529);
        assert_eq!(base.country.as_deref(), Some("FR"));
    }
}
