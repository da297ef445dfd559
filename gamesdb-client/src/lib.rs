pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{GamesDbClient, MAX_RATING, MIN_RATING, SearchQuery};
pub use config::{ClientConfig, config_path, save_to_file};
pub use error::ClientError;
pub use transport::{HttpTransport, Transport};

pub use gamesdb_core::types::*;
