//! Endpoint functions related to charts

use crate::client::{ClientResult, Deezer};
use crate::endpoints::lookup;
use crate::model::chart::Chart;

/// Genre id of the chart spanning every genre.
pub const ALL_GENRES: u64 = 0;

pub struct Charts<'a>(pub &'a Deezer);

impl Charts<'_> {
    /// The current chart for a genre; `None` when the genre is unknown.
    pub async fn get(&self, genre_id: u64) -> ClientResult<Option<Chart>> {
        let chart: Option<Chart> = lookup(self.0, &format!("chart/{}", genre_id)).await?;
        Ok(chart.map(|chart| Chart { genre_id, ..chart }))
    }
}
