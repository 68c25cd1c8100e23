//! The static tool table advertised through `tools/list`.

// Use 3rd party
use rmcp::model::Tool;
use serde_json::{json, Map, Value};

// Use local
use crate::endpoints::charts::ALL_GENRES;
use crate::endpoints::{Order, DEFAULT_LIMIT};
use crate::tools::args::{MAX_LIMIT, MIN_LIMIT};
use crate::tools::COMPOUND_LIMIT;

fn string(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn id(description: &str) -> Value {
    json!({ "type": "integer", "description": description, "minimum": 1 })
}

fn limit(description: &str, default: u32) -> Value {
    json!({
        "type": "integer",
        "description": format!("{} (default: {})", description, default),
        "default": default,
        "minimum": MIN_LIMIT,
        "maximum": MAX_LIMIT,
    })
}

fn strict(default: Option<bool>) -> Value {
    let mut schema = json!({
        "type": "boolean",
        "description": "If true, match the exact phrase only instead of fuzzy matching",
    });
    if let Some(default) = default {
        schema["default"] = json!(default);
    }
    schema
}

fn order(default: Option<Order>) -> Value {
    let names: Vec<&str> = Order::ALL.iter().map(|order| order.as_str()).collect();
    let mut schema = json!({
        "type": "string",
        "description": format!("Sort order: {}", names.join(", ")),
        "enum": names,
    });
    if let Some(default) = default {
        schema["default"] = json!(default.as_str());
    }
    schema
}

const RESULTS: &str = "Number of results to return";

fn tool(name: &str, description: &str, properties: Vec<(&str, Value)>, required: &[&str]) -> Tool {
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(key, schema)| (key.to_owned(), schema))
        .collect();

    let mut schema = Map::new();
    schema.insert("type".to_owned(), json!("object"));
    schema.insert("properties".to_owned(), Value::Object(properties));
    schema.insert("required".to_owned(), json!(required));

    Tool::new(name.to_owned(), description.to_owned(), schema)
}

fn search(kind: &str, plural: &str, extra: Vec<(&str, Value)>) -> Tool {
    let key = format!("{}_name", kind);
    let mut properties = vec![
        (key.as_str(), string(&format!("The name of the {} to search for", kind))),
        ("limit", limit(RESULTS, DEFAULT_LIMIT)),
        ("strict", strict(None)),
        ("order", order(None)),
    ];
    properties.extend(extra);

    tool(
        &format!("search_{}", kind),
        &format!("Search for {} by name on Deezer with optional parameters", plural),
        properties,
        &[key.as_str()],
    )
}

fn get(kind: &str, article: &str) -> Tool {
    let key = format!("{}_id", kind);
    tool(
        &format!("get_{}", kind),
        &format!("Get {} {} by its Deezer ID", article, kind),
        vec![(key.as_str(), id(&format!("The Deezer {} ID", kind)))],
        &[key.as_str()],
    )
}

fn find(kind: &str) -> Tool {
    let key = format!("{}_name", kind);
    tool(
        &format!("find_{}", kind),
        &format!(
            "Resolve the single best matching {} by name and return its full details, \
             retrying with a fuzzy search when the exact phrase finds nothing",
            kind
        ),
        vec![
            (key.as_str(), string(&format!("The name of the {} to resolve", kind))),
            ("strict", strict(Some(true))),
            ("order", order(None)),
        ],
        &[key.as_str()],
    )
}

fn compound(name: &str, description: &str, kind: &str, other: &str, other_description: &str) -> Tool {
    let key = format!("{}_name", kind);
    tool(
        name,
        description,
        vec![
            (key.as_str(), string(&format!("The name of the {} to search for", kind))),
            (other, string(other_description)),
            (
                "limit",
                limit(
                    "Number of candidates to rank before taking the first; only that one is returned",
                    COMPOUND_LIMIT,
                ),
            ),
            ("order", order(Some(Order::Ranking))),
        ],
        &[key.as_str(), other],
    )
}

/// Every tool the server answers to, in a stable order.
pub fn catalog() -> Vec<Tool> {
    let public_only = json!({
        "type": "boolean",
        "description": "Search only public playlists (default: false)",
        "default": false,
    });

    vec![
        search("track", "tracks", Vec::new()),
        get("track", "a"),
        find("track"),
        compound(
            "search_track_by_artist",
            "Search for a track by name and artist on Deezer",
            "track",
            "artist_name",
            "The name of the artist",
        ),
        search("artist", "artists", Vec::new()),
        get("artist", "an"),
        find("artist"),
        tool(
            "get_artist_top_tracks",
            "Get the most popular tracks of an artist by its Deezer ID",
            vec![
                ("artist_id", id("The Deezer artist ID")),
                ("limit", limit(RESULTS, DEFAULT_LIMIT)),
            ],
            &["artist_id"],
        ),
        search("album", "albums", Vec::new()),
        get("album", "an"),
        find("album"),
        compound(
            "search_album_by_artist",
            "Search for an album by name and artist on Deezer",
            "album",
            "artist_name",
            "The name of the artist",
        ),
        search("playlist", "playlists", vec![("public_only", public_only)]),
        get("playlist", "a"),
        find("playlist"),
        compound(
            "search_playlist_by_creator",
            "Search for a playlist by name and creator for more precise results",
            "playlist",
            "creator_name",
            "The creator/user name to narrow the search",
        ),
        search("user", "users", Vec::new()),
        get("user", "a"),
        find("user"),
        get("genre", "a"),
        tool("list_genres", "List every music genre known to Deezer", Vec::new(), &[]),
        tool(
            "get_chart",
            "Get the current Deezer charts (top tracks, albums, artists and playlists)",
            vec![(
                "genre_id",
                json!({
                    "type": "integer",
                    "description": "Deezer genre ID to chart (default: 0, every genre)",
                    "default": ALL_GENRES,
                    "minimum": 0,
                }),
            )],
            &[],
        ),
    ]
}
