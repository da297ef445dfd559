use serde::{Deserialize, Serialize};

/// One image hosted by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Path relative to the catalog's image base URL.
    pub path: String,
    pub width: i32,
    pub height: i32,
}

impl Image {
    /// Join the relative path onto an image base URL.
    pub fn url(&self, base: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

/// Which side of the box a boxart image shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxartSide {
    Front,
    Back,
}

impl BoxartSide {
    /// Only the exact value `front` is the front; anything else, including a
    /// missing attribute, is the back.
    pub fn from_attribute(side: Option<&str>) -> Self {
        match side {
            Some("front") => BoxartSide::Front,
            _ => BoxartSide::Back,
        }
    }
}

/// All images attached to a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameImages {
    pub boxart_front: Option<Image>,
    pub boxart_back: Option<Image>,
    pub clear_logo: Option<Image>,
    pub fanart: Vec<Image>,
    pub banners: Vec<Image>,
    pub screenshots: Vec<Image>,
}

/// All images attached to a platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformImages {
    pub boxart: Option<Image>,
    /// Relative path, no dimensions are published for console art.
    pub console_art: Option<String>,
    /// Relative path, no dimensions are published for controller art.
    pub controller_art: Option<String>,
    pub fanart: Vec<Image>,
    pub banners: Vec<Image>,
}

/// Reference to a related game by id. Fetch the game separately to resolve it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarTitle {
    pub game_id: i32,
    pub platform_id: i32,
}

/// Full record for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub platform: String,
    pub release_date: String,
    pub overview: String,
    pub esrb: String,
    /// "1", "2", "3" or "4+".
    pub players: String,
    pub co_op: String,
    pub youtube: String,
    pub publisher: String,
    pub developer: String,
    /// Community rating as sent by the server, empty when unrated.
    pub rating: String,
    pub alternate_titles: Vec<String>,
    pub genres: Vec<String>,
    pub images: GameImages,
    pub similar_titles: Vec<SimilarTitle>,
}

/// Full record for one platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: i32,
    pub name: String,
    pub overview: String,
    pub developer: String,
    pub manufacturer: String,
    pub cpu: String,
    pub memory: String,
    pub graphics: String,
    pub sound: String,
    /// Resolution as `<width>x<height>`.
    pub display: String,
    pub media: String,
    pub max_controllers: i32,
    pub rating: f32,
    pub images: PlatformImages,
}

/// One hit from a game search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSearchResult {
    pub id: i32,
    pub title: String,
    pub release_date: String,
    pub platform: String,
}

/// One entry of the platform list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSearchResult {
    pub id: i32,
    pub name: String,
    pub alias: String,
}

/// One game from a platform's game listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesByPlatformResult {
    pub id: i32,
    pub title: String,
    pub release_date: String,
}
