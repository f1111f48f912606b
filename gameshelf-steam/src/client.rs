use std::time::Duration;

use gameshelf_core::LibraryEntry;

use crate::error::SteamError;
use crate::types::OwnedGamesResponse;

const OWNED_GAMES_URL: &str =
    "https://api.steampowered.com/IPlayerService/GetOwnedGames/v1/";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Steam Web API.
pub struct SteamClient {
    client: reqwest::Client,
    api_key: String,
}

impl SteamClient {
    pub fn new(api_key: String) -> Result<Self, SteamError> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    /// Fetch the full owned-games library for a Steam user id.
    ///
    /// Includes app names and free games in the response. A private
    /// profile returns an empty envelope from Steam, mapped here to
    /// [`SteamError::PrivateProfile`].
    pub async fn owned_games(&self, steam_id: &str) -> Result<Vec<LibraryEntry>, SteamError> {
        let resp = self
            .client
            .get(OWNED_GAMES_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("steamid", steam_id),
                ("include_appinfo", "1"),
                ("include_played_free_games", "1"),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SteamError::InvalidKey(format!(
                "HTTP {} from Steam",
                status.as_u16()
            )));
        }
        if !status.is_success() {
            return Err(SteamError::Api(format!(
                "Steam returned HTTP {}",
                status.as_u16()
            )));
        }

        let text = resp.text().await?;
        let parsed: OwnedGamesResponse = serde_json::from_str(&text).map_err(|e| {
            let snippet: String = text.chars().take(200).collect();
            SteamError::Api(format!("Failed to parse Steam response: {} ({})", e, snippet))
        })?;

        let games = parsed.response.games.ok_or(SteamError::PrivateProfile)?;
        log::debug!("Steam returned {} owned games", games.len());

        Ok(games.into_iter().map(|g| g.into_entry()).collect())
    }
}
