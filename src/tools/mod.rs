//! The tool-call boundary: a static catalog of named tools and a dispatcher
//! that turns `(name, arguments)` into rendered text.
//!
//! [`Toolbox::call`] never fails. Missing matches render as a short "not
//! found" text, while bad arguments and upstream failures render as an
//! error text with the `is_error` flag set.

pub mod args;
mod catalog;
pub mod render;

pub use crate::tools::catalog::catalog;

// Use 3rd party
use log::{debug, error, warn};
use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::Value;
use thiserror::Error;

// Use local
use crate::client::{ClientError, Deezer};
use crate::endpoints::{Order, SearchOptions, DEFAULT_LIMIT};
use crate::tools::render::MISSING;

// Compound searches ask for a single ranked hit unless told otherwise.
pub(crate) const COMPOUND_LIMIT: u32 = 1;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("missing required argument `{0}`")]
    MissingArgument(String),
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },
    #[error(transparent)]
    Client(#[from] ClientError),
}

pub type ToolResult = Result<String, ToolError>;

/// Dispatches tool calls onto a [`Deezer`] client.
pub struct Toolbox {
    deezer: Deezer,
}

impl Toolbox {
    pub fn new(deezer: Deezer) -> Self {
        Self { deezer }
    }

    pub fn catalog(&self) -> Vec<Tool> {
        catalog()
    }

    pub async fn call(&self, name: &str, arguments: &Value) -> CallToolResult {
        debug!("calling tool {} with {}", name, arguments);
        match self.dispatch(name, arguments).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(ToolError::UnknownTool(name)) => {
                warn!("unknown tool requested: {}", name);
                CallToolResult::error(vec![Content::text(format!("{} Unknown tool: {}", MISSING, name))])
            }
            Err(err) => {
                error!("error in tool '{}': {}", name, err);
                CallToolResult::error(vec![Content::text(format!("{} Error: {}", MISSING, err))])
            }
        }
    }

    async fn dispatch(&self, name: &str, arguments: &Value) -> ToolResult {
        match name {
            "search_track" => self.search_track(arguments).await,
            "get_track" => self.get_track(arguments).await,
            "find_track" => self.find_track(arguments).await,
            "search_track_by_artist" => self.search_track_by_artist(arguments).await,
            "search_artist" => self.search_artist(arguments).await,
            "get_artist" => self.get_artist(arguments).await,
            "find_artist" => self.find_artist(arguments).await,
            "get_artist_top_tracks" => self.get_artist_top_tracks(arguments).await,
            "search_album" => self.search_album(arguments).await,
            "get_album" => self.get_album(arguments).await,
            "find_album" => self.find_album(arguments).await,
            "search_album_by_artist" => self.search_album_by_artist(arguments).await,
            "search_playlist" => self.search_playlist(arguments).await,
            "get_playlist" => self.get_playlist(arguments).await,
            "find_playlist" => self.find_playlist(arguments).await,
            "search_playlist_by_creator" => self.search_playlist_by_creator(arguments).await,
            "search_user" => self.search_user(arguments).await,
            "get_user" => self.get_user(arguments).await,
            "find_user" => self.find_user(arguments).await,
            "get_genre" => self.get_genre(arguments).await,
            "list_genres" => self.list_genres().await,
            "get_chart" => self.get_chart(arguments).await,
            _ => Err(ToolError::UnknownTool(name.to_owned())),
        }
    }

    async fn search_track(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "track_name")?;
        let options = search_options(arguments)?;

        let tracks = self.deezer.tracks().search(name, &options).await?;
        if tracks.is_empty() {
            return Ok(render::not_found(format!("tracks found for '{}'", name)));
        }
        Ok(render::tracks(name, &tracks))
    }

    async fn get_track(&self, arguments: &Value) -> ToolResult {
        let id = args::id(arguments, "track_id")?;
        match self.deezer.tracks().get(id).await? {
            Some(track) => Ok(render::track(&track)),
            None => Ok(render::not_found(format!("track found with ID {}", id))),
        }
    }

    async fn find_track(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "track_name")?;
        let (strict, order) = best_match_options(arguments)?;
        match self.deezer.tracks().best_match(name, strict, order).await? {
            Some(track) => Ok(render::track(&track)),
            None => Ok(render::not_found(format!("track found matching '{}'", name))),
        }
    }

    async fn search_track_by_artist(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "track_name")?;
        let artist = args::required_str(arguments, "artist_name")?;
        let (limit, order) = compound_options(arguments)?;

        match self.deezer.tracks().by_artist(name, artist, limit, Some(order)).await? {
            Some(track) => Ok(render::track(&track)),
            None => Ok(render::not_found(format!("track found for '{}' by '{}'", name, artist))),
        }
    }

    async fn search_artist(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "artist_name")?;
        let options = search_options(arguments)?;

        let artists = self.deezer.artists().search(name, &options).await?;
        if artists.is_empty() {
            return Ok(render::not_found(format!("artists found for '{}'", name)));
        }
        Ok(render::artists(name, &artists))
    }

    async fn get_artist(&self, arguments: &Value) -> ToolResult {
        let id = args::id(arguments, "artist_id")?;
        match self.deezer.artists().get(id).await? {
            Some(artist) => Ok(render::artist(&artist)),
            None => Ok(render::not_found(format!("artist found with ID {}", id))),
        }
    }

    async fn find_artist(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "artist_name")?;
        let (strict, order) = best_match_options(arguments)?;
        match self.deezer.artists().best_match(name, strict, order).await? {
            Some(artist) => Ok(render::artist(&artist)),
            None => Ok(render::not_found(format!("artist found matching '{}'", name))),
        }
    }

    async fn get_artist_top_tracks(&self, arguments: &Value) -> ToolResult {
        let id = args::id(arguments, "artist_id")?;
        let limit = args::limit(arguments, DEFAULT_LIMIT)?;
        match self.deezer.artists().top(id, Some(limit)).await? {
            Some(tracks) if !tracks.is_empty() => Ok(render::top_tracks(id, &tracks)),
            _ => Ok(render::not_found(format!("top tracks found for artist {}", id))),
        }
    }

    async fn search_album(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "album_name")?;
        let options = search_options(arguments)?;

        let albums = self.deezer.albums().search(name, &options).await?;
        if albums.is_empty() {
            return Ok(render::not_found(format!("albums found for '{}'", name)));
        }
        Ok(render::albums(name, &albums))
    }

    async fn get_album(&self, arguments: &Value) -> ToolResult {
        let id = args::id(arguments, "album_id")?;
        match self.deezer.albums().get(id).await? {
            Some(album) => Ok(render::album(&album)),
            None => Ok(render::not_found(format!("album found with ID {}", id))),
        }
    }

    async fn find_album(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "album_name")?;
        let (strict, order) = best_match_options(arguments)?;
        match self.deezer.albums().best_match(name, strict, order).await? {
            Some(album) => Ok(render::album(&album)),
            None => Ok(render::not_found(format!("album found matching '{}'", name))),
        }
    }

    async fn search_album_by_artist(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "album_name")?;
        let artist = args::required_str(arguments, "artist_name")?;
        let (limit, order) = compound_options(arguments)?;

        match self.deezer.albums().by_artist(name, artist, limit, Some(order)).await? {
            Some(album) => Ok(render::album(&album)),
            None => Ok(render::not_found(format!("album found for '{}' by '{}'", name, artist))),
        }
    }

    async fn search_playlist(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "playlist_name")?;
        let options = search_options(arguments)?;
        let public_only = args::opt_bool(arguments, "public_only")?.unwrap_or(false);

        let playlists = if public_only {
            self.deezer.playlists().search_public(name, &options).await?
        } else {
            self.deezer.playlists().search(name, &options).await?
        };

        if playlists.is_empty() {
            let noun = if public_only { "public playlists" } else { "playlists" };
            return Ok(render::not_found(format!("{} found for '{}'", noun, name)));
        }
        Ok(render::playlists(name, &playlists, public_only))
    }

    async fn get_playlist(&self, arguments: &Value) -> ToolResult {
        let id = args::id(arguments, "playlist_id")?;
        match self.deezer.playlists().get(id).await? {
            Some(playlist) => Ok(render::playlist(&playlist)),
            None => Ok(render::not_found(format!("playlist found with ID {}", id))),
        }
    }

    async fn find_playlist(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "playlist_name")?;
        let (strict, order) = best_match_options(arguments)?;
        match self.deezer.playlists().best_match(name, strict, order).await? {
            Some(playlist) => Ok(render::playlist(&playlist)),
            None => Ok(render::not_found(format!("playlist found matching '{}'", name))),
        }
    }

    async fn search_playlist_by_creator(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "playlist_name")?;
        let creator = args::required_str(arguments, "creator_name")?;
        let (limit, order) = compound_options(arguments)?;

        match self.deezer.playlists().by_creator(name, creator, limit, Some(order)).await? {
            Some(playlist) => Ok(render::playlist(&playlist)),
            None => Ok(render::not_found(format!("playlist found for '{}' by '{}'", name, creator))),
        }
    }

    async fn search_user(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "user_name")?;
        let options = search_options(arguments)?;

        let users = self.deezer.users().search(name, &options).await?;
        if users.is_empty() {
            return Ok(render::not_found(format!("users found for '{}'", name)));
        }
        Ok(render::users(name, &users))
    }

    async fn get_user(&self, arguments: &Value) -> ToolResult {
        let id = args::id(arguments, "user_id")?;
        match self.deezer.users().get(id).await? {
            Some(user) => Ok(render::user(&user)),
            None => Ok(render::not_found(format!("user found with ID {}", id))),
        }
    }

    async fn find_user(&self, arguments: &Value) -> ToolResult {
        let name = args::required_str(arguments, "user_name")?;
        let (strict, order) = best_match_options(arguments)?;
        match self.deezer.users().best_match(name, strict, order).await? {
            Some(user) => Ok(render::user(&user)),
            None => Ok(render::not_found(format!("user found matching '{}'", name))),
        }
    }

    async fn get_genre(&self, arguments: &Value) -> ToolResult {
        let id = args::id(arguments, "genre_id")?;
        match self.deezer.genres().get(id).await? {
            Some(genre) => Ok(render::genre(&genre)),
            None => Ok(render::not_found(format!("genre found with ID {}", id))),
        }
    }

    async fn list_genres(&self) -> ToolResult {
        let genres = self.deezer.genres().list().await?;
        if genres.is_empty() {
            return Ok(render::not_found("genres found"));
        }
        Ok(render::genres(&genres))
    }

    async fn get_chart(&self, arguments: &Value) -> ToolResult {
        let genre_id = args::genre_or_all(arguments, "genre_id")?;
        match self.deezer.charts().get(genre_id).await? {
            Some(chart) if !chart.is_empty() => Ok(render::chart(&chart)),
            _ => Ok(render::not_found(format!("chart found for genre {}", genre_id))),
        }
    }
}

fn search_options(arguments: &Value) -> Result<SearchOptions, ToolError> {
    Ok(SearchOptions::new()
        .limit(args::limit(arguments, DEFAULT_LIMIT)?)
        .strict(args::opt_bool(arguments, "strict")?)
        .order(args::order(arguments)?))
}

// Best-match lookups search strictly unless told not to.
fn best_match_options(arguments: &Value) -> Result<(bool, Option<Order>), ToolError> {
    let strict = args::opt_bool(arguments, "strict")?.unwrap_or(true);
    Ok((strict, args::order(arguments)?))
}

fn compound_options(arguments: &Value) -> Result<(u32, Order), ToolError> {
    let limit = args::limit(arguments, COMPOUND_LIMIT)?;
    let order = args::order(arguments)?.unwrap_or(Order::Ranking);
    Ok((limit, order))
}
