//! Trait implementations binding the real API clients to the pipeline.

use gameshelf_core::{CatalogCandidate, LibraryEntry};
use gameshelf_igdb::{CatalogError, IgdbClient};
use gameshelf_steam::{SteamClient, SteamError};

use crate::pipeline::{CatalogSearch, LibraryProvider};

/// A Steam client bound to one user's library.
pub struct SteamLibrary {
    client: SteamClient,
    steam_id: String,
}

impl SteamLibrary {
    pub fn new(client: SteamClient, steam_id: String) -> Self {
        Self { client, steam_id }
    }
}

impl LibraryProvider for SteamLibrary {
    async fn fetch_library(&self) -> Result<Vec<LibraryEntry>, SteamError> {
        self.client.owned_games(&self.steam_id).await
    }
}

impl CatalogSearch for IgdbClient {
    async fn search(&self, query: &str) -> Result<Vec<CatalogCandidate>, CatalogError> {
        IgdbClient::search(self, query).await
    }
}
