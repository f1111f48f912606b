use std::time::Duration;

use gameshelf_core::CatalogCandidate;

use crate::credentials::Credentials;
use crate::error::CatalogError;
use crate::types::{IgdbGame, TwitchTokenResponse};

const GAMES_URL: &str = "https://api.igdb.com/v4/games";
const TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum candidates requested per search query.
pub const SEARCH_LIMIT: u32 = 5;

const SEARCH_FIELDS: &str = "name,cover.url,first_release_date,rating,summary,\
     genres.name,platforms.name,involved_companies.company.name";

/// IGDB category ids considered real games: main game, remake,
/// remaster, and port. Filters out DLC, bundles, mods, and episodes.
const GAME_CATEGORIES: &str = "(0,8,9,11)";

/// Client for the IGDB v4 API.
///
/// Holds the Twitch app token obtained at construction. App tokens
/// last around 60 days, well past any single session, so no refresh
/// logic is needed here.
pub struct IgdbClient {
    client: reqwest::Client,
    client_id: String,
    app_token: String,
}

impl IgdbClient {
    /// Create a client by exchanging the credentials for an app token.
    ///
    /// Performs a network call; a bad id or secret surfaces here as
    /// `InvalidCredentials` rather than on the first search.
    pub async fn new(creds: &Credentials) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        let app_token = fetch_app_token(&client, creds).await?;

        Ok(Self {
            client,
            client_id: creds.client_id.clone(),
            app_token,
        })
    }

    /// Create a client from an already-issued app token. Used by tests
    /// and by callers that manage the token lifecycle themselves.
    pub fn with_token(client_id: String, app_token: String) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            client,
            client_id,
            app_token,
        })
    }

    /// Search the catalog for games matching `query`.
    ///
    /// Returns up to [`SEARCH_LIMIT`] candidates in IGDB's relevance
    /// order. Transient API failures (server errors, rate limiting)
    /// return an empty list so one flaky query does not abort a whole
    /// import; auth failures are surfaced as `InvalidCredentials`.
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogCandidate>, CatalogError> {
        let resp = self
            .client
            .post(GAMES_URL)
            .header("Client-ID", &self.client_id)
            .header("Authorization", format!("Bearer {}", self.app_token))
            .body(search_body(query))
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(CatalogError::InvalidCredentials(format!(
                "IGDB rejected the app token (HTTP {})",
                status.as_u16()
            )));
        }
        if !status.is_success() {
            log::debug!("IGDB search for {:?} failed with HTTP {}", query, status);
            return Ok(Vec::new());
        }

        let text = resp.text().await?;
        let games: Vec<IgdbGame> = serde_json::from_str(&text).map_err(|e| {
            let snippet: String = text.chars().take(200).collect();
            CatalogError::Api(format!("Failed to parse IGDB response: {} ({})", e, snippet))
        })?;

        Ok(games
            .into_iter()
            .filter_map(IgdbGame::into_candidate)
            .collect())
    }
}

/// Build an Apicalypse query body for a name search.
fn search_body(query: &str) -> String {
    // Quotes inside the search term would terminate the string early.
    let escaped = query.replace('\\', "\\\\").replace('"', "\\\"");
    format!(
        "search \"{}\"; fields {}; where category = {}; limit {};",
        escaped, SEARCH_FIELDS, GAME_CATEGORIES, SEARCH_LIMIT
    )
}

/// Exchange a client id and secret for a Twitch app token.
async fn fetch_app_token(
    client: &reqwest::Client,
    creds: &Credentials,
) -> Result<String, CatalogError> {
    let resp = client
        .post(TOKEN_URL)
        .query(&[
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ])
        .send()
        .await?;

    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(CatalogError::InvalidCredentials(
            "Twitch rejected the client id/secret".to_string(),
        ));
    }
    if !status.is_success() {
        return Err(CatalogError::Api(format!(
            "Twitch token exchange failed with HTTP {}",
            status.as_u16()
        )));
    }

    let text = resp.text().await?;
    let token: TwitchTokenResponse = serde_json::from_str(&text).map_err(|e| {
        let snippet: String = text.chars().take(200).collect();
        CatalogError::Api(format!(
            "Failed to parse Twitch token response: {} ({})",
            e, snippet
        ))
    })?;

    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_body_includes_query_and_limit() {
        let body = search_body("the witcher 3 wild hunt");
        assert!(body.starts_with("search \"the witcher 3 wild hunt\";"));
        assert!(body.contains("limit 5;"));
        assert!(body.contains("where category = (0,8,9,11);"));
    }

    #[test]
    fn search_body_escapes_quotes() {
        let body = search_body("say \"hello\"");
        assert!(body.contains("search \"say \\\"hello\\\"\";"));
    }
}
