use std::path::PathBuf;

use crate::error::CatalogError;

/// Credentials for authenticating with IGDB via Twitch.
///
/// IGDB issues app tokens through the Twitch client-credentials grant,
/// so a client id and secret from the Twitch developer console are the
/// only inputs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Where a credential field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each credential field.
#[derive(Debug)]
pub struct CredentialSources {
    pub client_id: CredentialSource,
    pub client_secret: CredentialSource,
}

/// TOML config file format. The Steam section lives in the same file
/// but belongs to the steam crate; unknown sections are ignored here.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    igdb: Option<IgdbConfig>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct IgdbConfig {
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl Credentials {
    /// Load credentials from environment variables or the config file.
    ///
    /// Priority: env vars > config file. Both fields are required.
    pub fn load() -> Result<Self, CatalogError> {
        let config = load_config_file();

        let client_id = std::env::var("GAMESHELF_IGDB_CLIENT_ID")
            .ok()
            .or_else(|| config.as_ref().and_then(|c| c.client_id.clone()))
            .ok_or_else(|| {
                CatalogError::Config(
                    "Missing IGDB client id. Set GAMESHELF_IGDB_CLIENT_ID or add to config file"
                        .to_string(),
                )
            })?;

        let client_secret = std::env::var("GAMESHELF_IGDB_CLIENT_SECRET")
            .ok()
            .or_else(|| config.as_ref().and_then(|c| c.client_secret.clone()))
            .ok_or_else(|| {
                CatalogError::Config(
                    "Missing IGDB client secret. Set GAMESHELF_IGDB_CLIENT_SECRET or add to config file"
                        .to_string(),
                )
            })?;

        Ok(Self {
            client_id,
            client_secret,
        })
    }
}

/// Return the path to the shared credentials config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gameshelf").join("credentials.toml"))
}

/// Save IGDB credentials to the config file, creating parent
/// directories as needed. Other sections of the file are preserved by
/// round-tripping the existing document. Returns the path written to.
pub fn save_to_file(creds: &Credentials) -> Result<PathBuf, CatalogError> {
    let path = config_path()
        .ok_or_else(|| CatalogError::Config("Could not determine config directory".to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Re-read the whole document so sections owned by other crates
    // (e.g. [steam]) survive the write.
    let mut doc: toml::Table = std::fs::read_to_string(&path)
        .ok()
        .and_then(|content| content.parse().ok())
        .unwrap_or_default();

    let mut igdb = toml::Table::new();
    igdb.insert(
        "client_id".to_string(),
        toml::Value::String(creds.client_id.clone()),
    );
    igdb.insert(
        "client_secret".to_string(),
        toml::Value::String(creds.client_secret.clone()),
    );
    doc.insert("igdb".to_string(), toml::Value::Table(igdb));

    let toml_str = toml::to_string_pretty(&doc)
        .map_err(|e| CatalogError::Config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(&path, toml_str)?;
    Ok(path)
}

/// Determine where each credential field is coming from.
pub fn credential_sources() -> CredentialSources {
    let config = load_config_file();

    let client_id = if std::env::var("GAMESHELF_IGDB_CLIENT_ID").is_ok() {
        CredentialSource::EnvVar("GAMESHELF_IGDB_CLIENT_ID")
    } else if config.as_ref().and_then(|c| c.client_id.as_ref()).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    };

    let client_secret = if std::env::var("GAMESHELF_IGDB_CLIENT_SECRET").is_ok() {
        CredentialSource::EnvVar("GAMESHELF_IGDB_CLIENT_SECRET")
    } else if config
        .as_ref()
        .and_then(|c| c.client_secret.as_ref())
        .is_some()
    {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    };

    CredentialSources {
        client_id,
        client_secret,
    }
}

fn load_config_file() -> Option<IgdbConfig> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config.igdb
}
