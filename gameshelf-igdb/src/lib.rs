//! IGDB catalog client for GameShelf.
//!
//! Wraps the IGDB v4 API: Twitch app-token authentication, game search
//! with a fixed field projection, and mapping of the raw response
//! shapes into [`gameshelf_core::CatalogCandidate`] records.

pub mod client;
pub mod credentials;
pub mod error;
pub mod types;

pub use client::{IgdbClient, SEARCH_LIMIT};
pub use credentials::{
    CredentialSource, CredentialSources, Credentials, config_path, credential_sources,
    save_to_file,
};
pub use error::CatalogError;
pub use types::{IgdbGame, normalize_cover_url};
