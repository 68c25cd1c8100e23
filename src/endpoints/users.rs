//! Endpoint functions related to users

use crate::client::{ClientResult, Deezer};
use crate::endpoints::{lookup, Order, Search, SearchOptions};
use crate::model::user::{UserFull, UserSearch};

pub struct Users<'a>(pub &'a Deezer);

impl Users<'_> {
    pub async fn get(&self, id: u64) -> ClientResult<Option<UserFull>> {
        lookup(self.0, &format!("user/{}", id)).await
    }

    /// The user owning the configured access token.
    pub async fn me(&self) -> ClientResult<Option<UserFull>> {
        lookup(self.0, "user/me").await
    }

    pub async fn search(&self, name: &str, options: &SearchOptions) -> ClientResult<Vec<UserSearch>> {
        Search(self.0).find(name, options).await
    }

    pub async fn best_match(&self, name: &str, strict: bool, order: Option<Order>) -> ClientResult<Option<UserFull>> {
        match Search(self.0).first_match::<UserSearch>(name, 1, strict, order).await? {
            Some(hit) => self.get(hit.id).await,
            None => Ok(None),
        }
    }
}
