use chrono::{DateTime, Utc};
use gameshelf_core::LibraryEntry;

/// Envelope around the `GetOwnedGames` payload.
#[derive(Debug, serde::Deserialize)]
pub struct OwnedGamesResponse {
    pub response: OwnedGamesPayload,
}

/// Steam omits `games` entirely (an empty object) when the profile or
/// its game list is private, hence the `Option`.
#[derive(Debug, serde::Deserialize)]
pub struct OwnedGamesPayload {
    pub games: Option<Vec<OwnedGame>>,
}

#[derive(Debug, serde::Deserialize)]
pub struct OwnedGame {
    pub appid: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub playtime_forever: u32,
    /// Unix timestamp of last launch; 0 means never played.
    #[serde(default)]
    pub rtime_last_played: i64,
}

impl OwnedGame {
    pub fn into_entry(self) -> LibraryEntry {
        let last_played = (self.rtime_last_played > 0)
            .then(|| DateTime::<Utc>::from_timestamp(self.rtime_last_played, 0))
            .flatten();

        LibraryEntry {
            app_id: self.appid,
            title: self.name,
            playtime_minutes: self.playtime_forever,
            last_played,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn into_entry_maps_fields() {
        let game: OwnedGame = serde_json::from_str(
            r#"{
                "appid": 292030,
                "name": "The Witcher 3: Wild Hunt",
                "playtime_forever": 5400,
                "rtime_last_played": 1700000000
            }"#,
        )
        .unwrap();

        let entry = game.into_entry();
        assert_eq!(entry.app_id, 292030);
        assert_eq!(entry.title, "The Witcher 3: Wild Hunt");
        assert_eq!(entry.playtime_minutes, 5400);
        assert_eq!(entry.last_played.unwrap().year(), 2023);
    }

    #[test]
    fn never_played_maps_to_none() {
        let game: OwnedGame = serde_json::from_str(
            r#"{"appid": 400, "name": "Portal", "playtime_forever": 0}"#,
        )
        .unwrap();
        assert!(game.into_entry().last_played.is_none());
    }
}
