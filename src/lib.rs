//! Rsdeezer is a wrapper for the public Deezer catalog API, plus a small
//! MCP tool server on top of it.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rsdeezer = "0.1.0"
//! ```
//!
//! Rsdeezer is asynchronous, every call is `async` and has to be awaited.
//!
//! ## Getting Started
//!
//! The public catalog needs no credentials. An OAuth access token is only
//! needed for `users().me()`; pass it through [`Config::access_token`](config::Config::access_token).
//!
//! Lookups return `Ok(None)` when Deezer has no such entity, so "nothing
//! matched" and "Deezer is down" stay distinguishable.
//!
//! ### Examples
//!
//! ```toml
//! [dependencies]
//! rsdeezer = { version = "0.1.0" }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```rust,no_run
//! use rsdeezer::client::Deezer;
//! use rsdeezer::config::Config;
//! use rsdeezer::endpoints::SearchOptions;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Deezer::new(Config::default()).unwrap();
//!
//!     // Exact phrase first, then one fuzzy retry.
//!     let track = client.tracks().best_match("Blinding Lights", true, None).await;
//!     println!("{:?}", track.unwrap());
//!
//!     let options = SearchOptions::new().limit(5);
//!     let artists = client.artists().search("daft punk", &options).await;
//!     println!("{:?}", artists.unwrap());
//! }
//! ```
//!
//! ## Tool server
//!
//! The `rsdeezer-mcp` binary serves the catalog as MCP tools over stdio,
//! see [`tools`] and [`server`].

#![warn(elided_lifetimes_in_paths)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod model;
pub mod server;
pub mod tools;
