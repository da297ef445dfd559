pub mod error;
pub mod game;
pub mod image;
pub mod platform;
pub mod types;
pub mod user;
pub mod util;
pub mod xml;

pub use error::XmlError;
pub use game::{
    game_from_document, game_search_results, map_game, map_game_search_result,
    map_games_by_platform_result, map_similar_title, platform_games_from_document,
};
pub use image::{map_game_images, map_image, map_platform_images};
pub use platform::{
    map_platform, map_platform_search_result, platform_from_document, platform_list_from_document,
};
pub use types::{
    BoxartSide, Game, GameImages, GameSearchResult, GamesByPlatformResult, Image, Platform,
    PlatformImages, PlatformSearchResult, SimilarTitle,
};
pub use user::{favorites_from_document, rating_from_document};
pub use xml::{MAX_DEPTH, XmlElement, parse_document};
