use url::Url;

use gamesdb_core::types::{
    Game, GameSearchResult, GamesByPlatformResult, Image, Platform, PlatformSearchResult,
};
use gamesdb_core::{XmlElement, parse_document};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{HttpTransport, Transport};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 10;

/// Parameters for a loose game search. Unset filters are sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub name: String,
    pub platform: Option<String>,
    pub genre: Option<String>,
}

impl SearchQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}

/// Client for the catalog's XML API.
///
/// Every call is a single GET: no caching, no retries. Two calls for the same
/// id return two independent values.
#[derive(Debug)]
pub struct GamesDbClient<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
}

impl GamesDbClient<HttpTransport> {
    /// Create a client that talks HTTP using `config`.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { transport, config })
    }
}

impl<T: Transport> GamesDbClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL for an image returned by the catalog.
    pub fn image_url(&self, image: &Image) -> String {
        image.url(&self.config.image_url)
    }

    /// Search games by name, optionally filtered by platform and genre.
    pub fn search_games(&self, query: &SearchQuery) -> Result<Vec<GameSearchResult>, ClientError> {
        let root = self.fetch(
            "GetGamesList.php",
            &[
                ("name", query.name.clone()),
                ("platform", query.platform.clone().unwrap_or_default()),
                ("genre", query.genre.clone().unwrap_or_default()),
            ],
        )?;
        Ok(gamesdb_core::game_search_results(&root))
    }

    /// Fetch the full record for one game.
    pub fn game(&self, id: i32) -> Result<Game, ClientError> {
        let root = self.fetch("GetGame.php", &[("id", id.to_string())])?;
        gamesdb_core::game_from_document(&root).ok_or_else(|| {
            log::warn!("GetGame.php response for id {id} has no game element");
            ClientError::NotFound { kind: "game", id }
        })
    }

    /// Fetch the full record behind a search hit.
    pub fn game_for(&self, result: &GameSearchResult) -> Result<Game, ClientError> {
        self.game(result.id)
    }

    /// List every platform known to the catalog.
    pub fn platforms(&self) -> Result<Vec<PlatformSearchResult>, ClientError> {
        let root = self.fetch("GetPlatformsList.php", &[])?;
        Ok(gamesdb_core::platform_list_from_document(&root))
    }

    /// Fetch the full record for one platform.
    pub fn platform(&self, id: i32) -> Result<Platform, ClientError> {
        let root = self.fetch("GetPlatform.php", &[("id", id.to_string())])?;
        gamesdb_core::platform_from_document(&root).ok_or_else(|| {
            log::warn!("GetPlatform.php response for id {id} has no platform element");
            ClientError::NotFound {
                kind: "platform",
                id,
            }
        })
    }

    /// Fetch the full record behind a platform list entry.
    pub fn platform_for(&self, result: &PlatformSearchResult) -> Result<Platform, ClientError> {
        self.platform(result.id)
    }

    /// List the games released on a platform.
    pub fn platform_games(
        &self,
        platform_id: i32,
    ) -> Result<Vec<GamesByPlatformResult>, ClientError> {
        let root = self.fetch(
            "GetPlatformGames.php",
            &[("platform", platform_id.to_string())],
        )?;
        Ok(gamesdb_core::platform_games_from_document(&root))
    }

    /// Game ids on a user's favorites list.
    ///
    /// `account` is the account identifier shown on the user's info page.
    pub fn user_favorites(&self, account: &str) -> Result<Vec<i32>, ClientError> {
        let root = self.fetch("User_Favorites.php", &[("accountid", account.to_string())])?;
        Ok(gamesdb_core::favorites_from_document(&root))
    }

    pub fn add_user_favorite(&self, account: &str, game_id: i32) -> Result<(), ClientError> {
        self.update_favorites(account, "add", game_id)
    }

    pub fn remove_user_favorite(&self, account: &str, game_id: i32) -> Result<(), ClientError> {
        self.update_favorites(account, "remove", game_id)
    }

    /// A user's rating of a game, 1 to 10, or 0 if they haven't rated it.
    pub fn user_rating(&self, account: &str, game_id: i32) -> Result<i32, ClientError> {
        let root = self.fetch(
            "User_Rating.php",
            &[
                ("accountid", account.to_string()),
                ("itemid", game_id.to_string()),
            ],
        )?;
        Ok(gamesdb_core::rating_from_document(&root))
    }

    /// Rate a game. Ratings outside 1..=10 are rejected without a request.
    pub fn set_user_rating(
        &self,
        account: &str,
        game_id: i32,
        rating: i32,
    ) -> Result<(), ClientError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ClientError::InvalidRating(rating));
        }
        self.send_rating(account, game_id, rating)
    }

    pub fn remove_user_rating(&self, account: &str, game_id: i32) -> Result<(), ClientError> {
        // The server treats a rating of 0 as "no rating".
        self.send_rating(account, game_id, 0)
    }

    fn update_favorites(&self, account: &str, action: &str, game_id: i32) -> Result<(), ClientError> {
        self.fetch(
            "User_Favorites.php",
            &[
                ("accountid", account.to_string()),
                ("type", action.to_string()),
                ("gameid", game_id.to_string()),
            ],
        )?;
        Ok(())
    }

    fn send_rating(&self, account: &str, game_id: i32, rating: i32) -> Result<(), ClientError> {
        self.fetch(
            "User_Rating.php",
            &[
                ("accountid", account.to_string()),
                ("itemid", game_id.to_string()),
                ("rating", rating.to_string()),
            ],
        )?;
        Ok(())
    }

    /// GET an endpoint and parse the body into its root element.
    fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<XmlElement, ClientError> {
        let url = self.endpoint_url(endpoint, params)?;
        log::debug!("GET {url}");
        let body = self.transport.get(url.as_str())?;
        Ok(parse_document(&body)?)
    }

    fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url, ClientError> {
        let base = format!("{}/{endpoint}", self.config.api_url.trim_end_matches('/'));
        if params.is_empty() {
            return Ok(Url::parse(&base)?);
        }
        Ok(Url::parse_with_params(&base, params)?)
    }
}
