use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Steam rejected the API key: {0}")]
    InvalidKey(String),

    #[error("Steam profile is private or the game list is hidden")]
    PrivateProfile,

    #[error("Steam API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
