/// One row of the catalog: a playable unit grouped under a title `name`,
/// placed either on the season/episode axis or the part axis (never both).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub season: Option<i64>,
    pub episode: Option<i64>,
    pub part: Option<i64>,
    pub link: String,
}

/// What a request path identifies. The five-way dispatch over optional path
/// parameters is modeled as one tagged variant so every branch's
/// precondition is explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Home,
    Title { name: String },
    Season { name: String, season: i64 },
    Episode { name: String, season: i64, episode: i64 },
    Part { name: String, part: i64 },
}

/// A resolved response: either an index listing the distinct values at a
/// navigation level, or a playback page with sibling links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home {
        names: Vec<String>,
    },
    Seasons {
        name: String,
        seasons: Vec<i64>,
    },
    Parts {
        name: String,
        parts: Vec<i64>,
    },
    Episodes {
        name: String,
        season: i64,
        episodes: Vec<i64>,
    },
    Playback(Playback),
}

/// Data for the playback page: the playable link plus positional
/// previous/next navigation. Empty strings mean "no neighbor".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    pub name: String,
    pub season: Option<i64>,
    pub episode: Option<i64>,
    pub part: Option<i64>,
    pub url: String,
    pub prev_url: String,
    pub next_url: String,
}
