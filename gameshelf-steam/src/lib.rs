//! Steam Web API client.
//!
//! Fetches a user's owned-games library via `IPlayerService` and maps
//! it into the shared [`gameshelf_core::LibraryEntry`] shape, plus the
//! heuristics for skipping non-game entries (dedicated servers, DLC,
//! soundtracks) that Steam lists alongside real games.

mod client;
mod credentials;
mod error;
mod filter;
mod types;

pub use client::SteamClient;
pub use credentials::{steam_api_key, steam_key_source};
pub use error::SteamError;
pub use filter::is_non_game;
