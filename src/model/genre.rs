// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::{Entity, EntityKind};

/// Genres come back in one shape whether embedded in an album or listed.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
    pub picture: Option<String>,
    pub picture_small: Option<String>,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
}

impl Entity for Genre {
    const KIND: EntityKind = EntityKind::Genre;

    fn id(&self) -> u64 {
        self.id
    }
}
