use chrono::DateTime;
use serde::Deserialize;

use gameshelf_core::CatalogCandidate;

/// One game record from the /v4/games search endpoint. IGDB nests
/// referenced entities (covers, genres, companies) as partial objects
/// selected by the field projection.
#[derive(Debug, Deserialize, Clone)]
pub struct IgdbGame {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    /// Unix timestamp (seconds) of the first release, any platform.
    #[serde(default)]
    pub first_release_date: Option<i64>,
    #[serde(default)]
    pub cover: Option<IgdbCover>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub genres: Vec<IgdbNamed>,
    #[serde(default)]
    pub platforms: Vec<IgdbNamed>,
    #[serde(default)]
    pub involved_companies: Vec<IgdbInvolvedCompany>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IgdbCover {
    #[serde(default)]
    pub url: Option<String>,
}

/// A referenced entity projected down to its display name.
#[derive(Debug, Deserialize, Clone)]
pub struct IgdbNamed {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IgdbInvolvedCompany {
    #[serde(default)]
    pub company: Option<IgdbNamed>,
}

/// Token grant from the Twitch client-credentials exchange.
#[derive(Debug, Deserialize)]
pub struct TwitchTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// Normalize an IGDB image URL to a display-ready form: force the
/// https scheme (IGDB returns protocol-relative URLs) and swap the
/// thumbnail size for the large cover size.
pub fn normalize_cover_url(url: &str) -> String {
    let with_scheme = if let Some(rest) = url.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        url.to_string()
    };
    with_scheme.replace("t_thumb", "t_cover_big")
}

impl IgdbGame {
    /// Convert into the domain candidate shape. Records without a name
    /// cannot be scored and are dropped.
    pub fn into_candidate(self) -> Option<CatalogCandidate> {
        let name = self.name?;
        Some(CatalogCandidate {
            id: self.id,
            name,
            first_release_date: self
                .first_release_date
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
            cover_url: self
                .cover
                .and_then(|c| c.url)
                .map(|url| normalize_cover_url(&url)),
            rating: self.rating,
            summary: self.summary,
            genres: self.genres.into_iter().filter_map(|g| g.name).collect(),
            platforms: self.platforms.into_iter().filter_map(|p| p.name).collect(),
            companies: self
                .involved_companies
                .into_iter()
                .filter_map(|ic| ic.company.and_then(|c| c.name))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn cover_url_gets_scheme_and_size() {
        assert_eq!(
            normalize_cover_url("//images.igdb.com/igdb/image/upload/t_thumb/co1wyy.jpg"),
            "https://images.igdb.com/igdb/image/upload/t_cover_big/co1wyy.jpg"
        );
        // Already-absolute URLs keep their scheme.
        assert_eq!(
            normalize_cover_url("https://images.igdb.com/t_thumb/x.jpg"),
            "https://images.igdb.com/t_cover_big/x.jpg"
        );
    }

    #[test]
    fn into_candidate_maps_nested_fields() {
        let game: IgdbGame = serde_json::from_str(
            r#"{
                "id": 1942,
                "name": "The Witcher 3: Wild Hunt",
                "first_release_date": 1431993600,
                "cover": {"url": "//images.igdb.com/t_thumb/co1wyy.jpg"},
                "rating": 93.4,
                "summary": "Geralt hunts a wild hunt.",
                "genres": [{"name": "Role-playing (RPG)"}],
                "platforms": [{"name": "PC (Microsoft Windows)"}],
                "involved_companies": [{"company": {"name": "CD Projekt RED"}}]
            }"#,
        )
        .unwrap();

        let candidate = game.into_candidate().unwrap();
        assert_eq!(candidate.id, 1942);
        assert_eq!(candidate.name, "The Witcher 3: Wild Hunt");
        assert_eq!(candidate.first_release_date.unwrap().year(), 2015);
        assert_eq!(
            candidate.cover_url.as_deref(),
            Some("https://images.igdb.com/t_cover_big/co1wyy.jpg")
        );
        assert_eq!(candidate.genres, vec!["Role-playing (RPG)"]);
        assert_eq!(candidate.companies, vec!["CD Projekt RED"]);
    }

    #[test]
    fn nameless_records_are_dropped() {
        let game: IgdbGame = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert!(game.into_candidate().is_none());
    }
}
