use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// One item from a user's external game library (a Steam account's
/// owned-games list). Immutable input to the import pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// Stable identifier in the source library (Steam appid).
    pub app_id: u64,
    /// Display title as the library reports it, unnormalized.
    pub title: String,
    /// Cumulative playtime in minutes.
    pub playtime_minutes: u32,
    /// When the entry was last played, if the library knows.
    #[serde(default)]
    pub last_played: Option<DateTime<Utc>>,
}

/// A record returned by a catalog search, considered as a possible
/// match for a library entry. Lives for one search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCandidate {
    /// External catalog id (IGDB game id).
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub first_release_date: Option<DateTime<Utc>>,
    /// Display-ready cover URL; the catalog client normalizes the
    /// scheme and image size before this struct is built.
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub companies: Vec<String>,
}

impl CatalogCandidate {
    /// Calendar year of the first release, if known.
    pub fn release_year(&self) -> Option<i32> {
        self.first_release_date.map(|d| d.year())
    }
}

/// The resolved outcome for one library entry. Unmatched is a normal
/// result, not an error: the entry is still reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchResult {
    Matched(MatchedGame),
    Unmatched,
}

impl MatchResult {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    pub fn matched(&self) -> Option<&MatchedGame> {
        match self {
            MatchResult::Matched(game) => Some(game),
            MatchResult::Unmatched => None,
        }
    }
}

/// A successful catalog resolution for one library entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedGame {
    pub candidate: CatalogCandidate,
    /// Copied from the candidate for callers that only render covers.
    pub cover_url: Option<String>,
    pub release_year: Option<i32>,
    /// Total heuristic score the candidate won with.
    pub score: u32,
}

impl MatchedGame {
    /// Build the resolution record from a winning candidate.
    pub fn from_scored(candidate: CatalogCandidate, score: u32) -> Self {
        let cover_url = candidate.cover_url.clone();
        let release_year = candidate.release_year();
        Self {
            candidate,
            cover_url,
            release_year,
            score,
        }
    }
}

/// A library entry merged with its resolved (or absent) catalog match,
/// the shape the import pipeline hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedEntry {
    pub entry: LibraryEntry,
    pub result: MatchResult,
}

impl EnrichedEntry {
    pub fn is_matched(&self) -> bool {
        self.result.is_matched()
    }

    /// External catalog id of the resolved game, if matched.
    pub fn catalog_id(&self) -> Option<u64> {
        self.result.matched().map(|m| m.candidate.id)
    }
}
