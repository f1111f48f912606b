use crate::error::SteamError;

/// TOML config file format, shared with the IGDB crate. Only the
/// `[steam]` section is read here.
#[derive(Debug, serde::Deserialize)]
struct ConfigFile {
    steam: Option<SteamConfig>,
}

#[derive(Debug, serde::Deserialize)]
struct SteamConfig {
    api_key: Option<String>,
}

/// Load the Steam Web API key.
///
/// Priority: `GAMESHELF_STEAM_API_KEY` env var, then the `[steam]`
/// section of the shared config file.
pub fn steam_api_key() -> Result<String, SteamError> {
    std::env::var("GAMESHELF_STEAM_API_KEY")
        .ok()
        .or_else(|| load_config_file().and_then(|c| c.api_key))
        .ok_or_else(|| {
            SteamError::Config(
                "Missing Steam API key. Set GAMESHELF_STEAM_API_KEY or add to config file"
                    .to_string(),
            )
        })
}

/// Human-readable provenance of the Steam API key, for `config show`.
pub fn steam_key_source() -> &'static str {
    if std::env::var("GAMESHELF_STEAM_API_KEY").is_ok() {
        "env $GAMESHELF_STEAM_API_KEY"
    } else if load_config_file().and_then(|c| c.api_key).is_some() {
        "config file"
    } else {
        "not set"
    }
}

fn load_config_file() -> Option<SteamConfig> {
    let path = dirs::config_dir()?.join("gameshelf").join("credentials.toml");
    let content = std::fs::read_to_string(&path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config.steam
}
