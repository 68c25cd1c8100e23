//! Plain-text rendering of resolved entities.
//!
//! Single entities render as a header followed by one `**Label:** value`
//! line per field; lists render as numbered items with indented fields.
//! Absent optional values render as `N/A`.

// Use built-in library
use std::fmt::Display;

// Use local
use crate::model::album::{AlbumFull, AlbumSearch};
use crate::model::artist::{ArtistFull, ArtistSearch};
use crate::model::chart::Chart;
use crate::model::genre::Genre;
use crate::model::playlist::{PlaylistFull, PlaylistSearch};
use crate::model::track::{TrackBase, TrackFull, TrackSearch};
use crate::model::user::{UserFull, UserSearch};

const NOT_AVAILABLE: &str = "N/A";

pub const TRACK: &str = "🎵";
pub const ARTIST: &str = "🎤";
pub const ALBUM: &str = "💿";
pub const PLAYLIST: &str = "🎼";
pub const USER: &str = "👤";
pub const GENRE: &str = "🎶";
pub const CHART: &str = "📈";
pub const MISSING: &str = "❌";

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), |value| value.to_string())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// `4563298` -> `4,563,298`
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

struct Card {
    text: String,
}

impl Card {
    fn new(icon: &str, title: &str) -> Self {
        Self {
            text: format!("{} **{}**\n", icon, title),
        }
    }

    fn field(mut self, label: &str, value: impl Display) -> Self {
        self.text.push_str(&format!("\n**{}:** {}", label, value));
        self
    }

    fn finish(self) -> String {
        self.text
    }
}

struct Listing {
    text: String,
}

impl Listing {
    fn new(icon: &str, count: usize, noun: &str, query: &str) -> Self {
        Self::titled(icon, &format!("{} {} Found for '{}'", count, noun, query))
    }

    fn titled(icon: &str, title: &str) -> Self {
        Self {
            text: format!("{} **{}**\n", icon, title),
        }
    }

    fn item(&mut self, index: usize, heading: impl Display) -> &mut Self {
        self.text.push_str(&format!("\n**{}.** {}\n", index, heading));
        self
    }

    fn field(&mut self, label: &str, value: impl Display) -> &mut Self {
        self.text.push_str(&format!("   {}: {}\n", label, value));
        self
    }

    fn finish(self) -> String {
        self.text.trim_end().to_owned()
    }
}

pub fn not_found(what: impl Display) -> String {
    format!("{} No {}", MISSING, what)
}

pub fn track(track: &TrackFull) -> String {
    Card::new(TRACK, "Track Found")
        .field("ID", track.id)
        .field("Title", &track.title)
        .field("Artist", &track.artist.name)
        .field("Album", &track.album.title)
        .field("Duration", format!("{}s", track.duration))
        .field("Release Date", or_na(track.release_date))
        .field("Rank", thousands(track.rank))
        .field("Explicit", yes_no(track.explicit_lyrics))
        .field("Link", &track.link)
        .field("Preview", or_na(track.preview.as_deref().filter(|url| !url.is_empty())))
        .finish()
}

pub fn tracks(query: &str, tracks: &[TrackSearch]) -> String {
    let mut listing = Listing::new(TRACK, tracks.len(), "Tracks", query);
    for (i, track) in tracks.iter().enumerate() {
        listing
            .item(i + 1, format!("{} by {}", track.title, track.artist.name))
            .field("ID", track.id)
            .field("Album", &track.album.title)
            .field("Duration", format!("{}s", track.duration))
            .field("Link", &track.link);
    }
    listing.finish()
}

pub fn top_tracks(artist_id: u64, tracks: &[TrackSearch]) -> String {
    let mut listing = Listing::new(TRACK, tracks.len(), "Top Tracks", &format!("artist {}", artist_id));
    for (i, track) in tracks.iter().enumerate() {
        listing
            .item(i + 1, &track.title)
            .field("ID", track.id)
            .field("Album", &track.album.title)
            .field("Rank", thousands(track.rank))
            .field("Link", &track.link);
    }
    listing.finish()
}

fn track_lines(listing: &mut Listing, tracks: &[TrackBase]) {
    for (i, track) in tracks.iter().enumerate() {
        let artist = track.artist.as_ref().map(|artist| artist.name.as_str());
        listing
            .item(i + 1, format!("{} by {}", track.title, or_na(artist)))
            .field("ID", track.id)
            .field("Duration", format!("{}s", track.duration));
    }
}

pub fn artist(artist: &ArtistFull) -> String {
    Card::new(ARTIST, "Artist Found")
        .field("ID", artist.id)
        .field("Name", &artist.name)
        .field("Fans", thousands(artist.nb_fan))
        .field("Albums", artist.nb_album)
        .field("Radio", yes_no(artist.radio))
        .field("Link", &artist.link)
        .field("Picture", or_na(artist.picture_medium.as_deref()))
        .finish()
}

pub fn artists(query: &str, artists: &[ArtistSearch]) -> String {
    let mut listing = Listing::new(ARTIST, artists.len(), "Artists", query);
    for (i, artist) in artists.iter().enumerate() {
        listing
            .item(i + 1, &artist.name)
            .field("ID", artist.id)
            .field("Fans", thousands(artist.nb_fan))
            .field("Albums", artist.nb_album)
            .field("Link", &artist.link);
    }
    listing.finish()
}

pub fn album(album: &AlbumFull) -> String {
    let genres: Vec<&str> = album.genres.iter().map(|genre| genre.name.as_str()).collect();
    let card = Card::new(ALBUM, "Album Found")
        .field("ID", album.id)
        .field("Title", &album.title)
        .field("Artist", &album.artist.name)
        .field("Genres", if genres.is_empty() { NOT_AVAILABLE.to_owned() } else { genres.join(", ") })
        .field("Label", or_na(album.label.as_deref()))
        .field("Tracks", album.nb_tracks)
        .field("Duration", format!("{}s", album.duration))
        .field("Fans", or_na(album.fans.map(thousands)))
        .field("Release Date", or_na(album.release_date))
        .field("Link", &album.link)
        .field("Cover", or_na(album.cover_medium.as_deref()));

    if album.tracks.is_empty() {
        return card.finish();
    }
    let mut listing = Listing {
        text: format!("{}\n\n**Track List:**\n", card.finish()),
    };
    track_lines(&mut listing, &album.tracks);
    listing.finish()
}

pub fn albums(query: &str, albums: &[AlbumSearch]) -> String {
    let mut listing = Listing::new(ALBUM, albums.len(), "Albums", query);
    for (i, album) in albums.iter().enumerate() {
        listing
            .item(i + 1, format!("{} by {}", album.title, album.artist.name))
            .field("ID", album.id)
            .field("Tracks", album.nb_tracks)
            .field("Type", or_na(album.record_type.as_deref()))
            .field("Link", &album.link);
    }
    listing.finish()
}

pub fn playlist(playlist: &PlaylistFull) -> String {
    let creator = playlist.creator.as_ref().map(|user| user.name.as_str());
    Card::new(PLAYLIST, "Playlist Found")
        .field("ID", playlist.id)
        .field("Title", &playlist.title)
        .field("Creator", creator.unwrap_or("Unknown"))
        .field("Description", or_na(playlist.description.as_deref().filter(|d| !d.is_empty())))
        .field("Tracks", playlist.nb_tracks)
        .field("Duration", format!("{}s", playlist.duration))
        .field("Fans", or_na(playlist.fans.map(thousands)))
        .field("Public", yes_no(playlist.public))
        .field("Link", &playlist.link)
        .field("Picture", or_na(playlist.picture_medium.as_deref()))
        .finish()
}

pub fn playlists(query: &str, playlists: &[PlaylistSearch], public_only: bool) -> String {
    let noun = if public_only { "Public Playlists" } else { "Playlists" };
    let mut listing = Listing::new(PLAYLIST, playlists.len(), noun, query);
    for (i, playlist) in playlists.iter().enumerate() {
        let creator = playlist.creator().map(|user| user.name.as_str());
        listing
            .item(i + 1, format!("{} by {}", playlist.title, creator.unwrap_or("Unknown")))
            .field("ID", playlist.id)
            .field("Tracks", playlist.nb_tracks)
            .field("Fans", or_na(playlist.fans.map(thousands)))
            .field("Public", yes_no(playlist.public))
            .field("Link", &playlist.link);
    }
    listing.finish()
}

pub fn user(user: &UserFull) -> String {
    Card::new(USER, "User Found")
        .field("ID", user.id)
        .field("Name", &user.name)
        .field("Country", or_na(user.country.as_deref()))
        .field("Link", or_na(user.link.as_deref()))
        .field("Picture", or_na(user.picture_medium.as_deref()))
        .field("Tracklist", &user.tracklist)
        .finish()
}

pub fn users(query: &str, users: &[UserSearch]) -> String {
    let mut listing = Listing::new(USER, users.len(), "Users", query);
    for (i, user) in users.iter().enumerate() {
        listing
            .item(i + 1, &user.name)
            .field("ID", user.id)
            .field("Link", or_na(user.link.as_deref()));
    }
    listing.finish()
}

pub fn genre(genre: &Genre) -> String {
    Card::new(GENRE, "Genre Found")
        .field("ID", genre.id)
        .field("Name", &genre.name)
        .field("Picture", or_na(genre.picture_medium.as_deref().or(genre.picture.as_deref())))
        .finish()
}

pub fn genres(genres: &[Genre]) -> String {
    let mut listing = Listing::titled(GENRE, &format!("{} Genres", genres.len()));
    for (i, genre) in genres.iter().enumerate() {
        listing.item(i + 1, &genre.name).field("ID", genre.id);
    }
    listing.finish()
}

fn section(text: &mut String, heading: &str, lines: Vec<String>) {
    text.push_str(&format!("\n**{}:**\n", heading));
    if lines.is_empty() {
        text.push_str(NOT_AVAILABLE);
        text.push('\n');
    }
    for (i, line) in lines.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, line));
    }
}

pub fn chart(chart: &Chart) -> String {
    let title = match chart.genre_id {
        0 => "Deezer Charts".to_owned(),
        genre_id => format!("Deezer Charts for Genre {}", genre_id),
    };
    let mut text = format!("{} **{}**\n", CHART, title);

    section(
        &mut text,
        "Top Tracks",
        chart
            .tracks
            .data
            .iter()
            .map(|track| format!("{} by {} (ID {})", track.title, track.artist.name, track.id))
            .collect(),
    );
    section(
        &mut text,
        "Top Albums",
        chart
            .albums
            .data
            .iter()
            .map(|entry| match &entry.artist {
                Some(artist) => format!("{} by {} (ID {})", entry.album.title, artist.name, entry.album.id),
                None => format!("{} (ID {})", entry.album.title, entry.album.id),
            })
            .collect(),
    );
    section(
        &mut text,
        "Top Artists",
        chart
            .artists
            .data
            .iter()
            .map(|entry| format!("{} (ID {})", entry.artist.name, entry.artist.id))
            .collect(),
    );
    section(
        &mut text,
        "Top Playlists",
        chart
            .playlists
            .data
            .iter()
            .map(|entry| format!("{} (ID {})", entry.playlist.title, entry.playlist.id))
            .collect(),
    );

    text.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::album::AlbumBase;
    use crate::model::artist::ArtistBase;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(4563298), "4,563,298");
    }

    #[test]
    fn absent_fields_render_as_na() {
        let record = TrackFull {
            id: 3135556,
            title: "Harder, Better, Faster, Stronger".to_owned(),
            link: "https://www.deezer.com/track/3135556".to_owned(),
            duration: 224,
            artist: ArtistBase {
                name: "Daft Punk".to_owned(),
                ..Default::default()
            },
            album: AlbumBase {
                title: "Discovery".to_owned(),
                ..Default::default()
            },
            ..Default::default()
        };

        let text = track(&record);
        assert!(text.starts_with("🎵 **Track Found**\n"));
        assert!(text.contains("\n**Artist:** Daft Punk"));
        assert!(text.contains("\n**Release Date:** N/A"));
        assert!(text.contains("\n**Preview:** N/A"));
        assert!(text.contains("\n**Duration:** 224s"));
    }

    #[test]
    fn genre_card_falls_back_to_na() {
        let record = Genre {
            id: 132,
            name: "Pop".to_owned(),
            ..Default::default()
        };

        let text = genre(&record);
        assert!(text.starts_with("🎶 **Genre Found**\n"));
        assert!(text.contains("\n**Name:** Pop"));
        assert!(text.contains("\n**Picture:** N/A"));
    }

    #[test]
    fn genre_listing_has_no_query() {
        let all = vec![
            Genre {
                id: 0,
                name: "All".to_owned(),
                ..Default::default()
            },
            Genre {
                id: 132,
                name: "Pop".to_owned(),
                ..Default::default()
            },
        ];

        let text = genres(&all);
        assert!(text.starts_with("🎶 **2 Genres**\n"));
        assert!(text.contains("\n**2.** Pop\n   ID: 132"));
    }

    #[test]
    fn empty_chart_sections_render_as_na() {
        let record = Chart {
            genre_id: 132,
            tracks: Default::default(),
            albums: Default::default(),
            artists: Default::default(),
            playlists: Default::default(),
        };

        let text = chart(&record);
        assert!(text.starts_with("📈 **Deezer Charts for Genre 132**\n"));
        assert!(text.contains("\n**Top Artists:**\nN/A\n"));
        assert!(text.ends_with("**Top Playlists:**\nN/A"));
    }

    #[test]
    fn listing_numbers_items() {
        let hits = vec![
            ArtistSearch {
                id: 27,
                name: "Daft Punk".to_owned(),
                link: "https://www.deezer.com/artist/27".to_owned(),
                nb_fan: 4563298,
                nb_album: 36,
                ..Default::default()
            },
            ArtistSearch {
                id: 4050205,
                name: "The Weeknd".to_owned(),
                ..Default::default()
            },
        ];

        let text = artists("daft", &hits);
        assert!(text.starts_with("🎤 **2 Artists Found for 'daft'**"));
        assert!(text.contains("**1.** Daft Punk\n   ID: 27\n   Fans: 4,563,298\n"));
        assert!(text.contains("**2.** The Weeknd"));
    }

    #[test]
    fn playlist_without_creator_or_fans() {
        let record = PlaylistFull {
            id: 1,
            title: "untitled".to_owned(),
            public: false,
            ..Default::default()
        };

        let text = playlist(&record);
        assert!(text.contains("**Creator:** Unknown"));
        assert!(text.contains("**Fans:** N/A"));
        assert!(text.contains("**Public:** No"));
    }
}
