//! Heuristic scoring of catalog candidates against a library entry.
//!
//! Scoring is additive over independent contributions; the weights are
//! load-bearing behavior and any rebalancing needs new golden-output
//! tests. Everything here is a pure function of its inputs.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Utc};

use crate::normalize::clean_title;
use crate::types::CatalogCandidate;

/// Candidate name equals one of the entry's name variants.
pub const SCORE_EXACT_NAME: u32 = 100;
/// Candidate name contains (or is contained in) one of the variants.
/// Only checked when no exact match fired.
pub const SCORE_NAME_OVERLAP: u32 = 50;
/// Known release dates within 7 days of each other.
pub const SCORE_RELEASE_WITHIN_WEEK: u32 = 100;
/// Known release dates within 30 days of each other.
pub const SCORE_RELEASE_WITHIN_MONTH: u32 = 50;
/// Known release dates in the same calendar year.
pub const SCORE_RELEASE_SAME_YEAR: u32 = 25;
/// Candidate has cover art.
pub const SCORE_HAS_COVER: u32 = 10;
/// Candidate has a non-empty summary.
pub const SCORE_HAS_SUMMARY: u32 = 5;
/// Candidate has a rating value.
pub const SCORE_HAS_RATING: u32 = 5;
/// Candidate has at least one genre.
pub const SCORE_HAS_GENRE: u32 = 5;
/// Release-recency bonus tiers.
pub const SCORE_RELEASED_2020S: u32 = 20;
pub const SCORE_RELEASED_2010S: u32 = 15;
pub const SCORE_RELEASED_2000S: u32 = 10;

/// Minimum total score for a candidate to count as a match. Anything
/// below is reported unmatched.
pub const MIN_MATCH_SCORE: u32 = 40;

/// A candidate paired with its total score. Transient: lives only while
/// one entry's candidate set is being ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: CatalogCandidate,
    pub score: u32,
}

/// Score one candidate against an entry's name variants and, when both
/// sides know one, the entry's release date.
///
/// Name comparison is case-insensitive and also tries the cleaned form
/// of the candidate name, so "The Witcher 3: Wild Hunt" matches the
/// variant "the witcher 3 wild hunt" exactly rather than merely
/// overlapping.
pub fn score_candidate(
    candidate: &CatalogCandidate,
    variants: &[String],
    source_release: Option<DateTime<Utc>>,
) -> u32 {
    let mut score = 0;

    let lowered = candidate.name.to_lowercase();
    let cleaned = clean_title(&candidate.name);
    let exact = variants
        .iter()
        .any(|v| *v == lowered || (!cleaned.is_empty() && *v == cleaned));
    if exact {
        score += SCORE_EXACT_NAME;
    } else if variants
        .iter()
        .any(|v| lowered.contains(v.as_str()) || v.contains(&lowered))
    {
        score += SCORE_NAME_OVERLAP;
    }

    if let (Some(source), Some(release)) = (source_release, candidate.first_release_date) {
        let days = (release - source).num_days().abs();
        if days <= 7 {
            score += SCORE_RELEASE_WITHIN_WEEK;
        } else if days <= 30 {
            score += SCORE_RELEASE_WITHIN_MONTH;
        } else if release.year() == source.year() {
            score += SCORE_RELEASE_SAME_YEAR;
        }
    }

    if candidate.cover_url.is_some() {
        score += SCORE_HAS_COVER;
    }
    if candidate.summary.as_deref().is_some_and(|s| !s.is_empty()) {
        score += SCORE_HAS_SUMMARY;
    }
    if candidate.rating.is_some() {
        score += SCORE_HAS_RATING;
    }
    if !candidate.genres.is_empty() {
        score += SCORE_HAS_GENRE;
    }

    score += match candidate.release_year() {
        Some(year) if year >= 2020 => SCORE_RELEASED_2020S,
        Some(year) if year >= 2010 => SCORE_RELEASED_2010S,
        Some(year) if year >= 2000 => SCORE_RELEASED_2000S,
        _ => 0,
    };

    score
}

/// Rank a combined candidate list and pick the winner.
///
/// Candidates are de-duplicated by catalog id (first occurrence wins),
/// ties resolve to the earlier candidate in input order, and the winner
/// must clear [`MIN_MATCH_SCORE`] or the whole entry is unmatched.
pub fn best_match(
    variants: &[String],
    candidates: &[CatalogCandidate],
    source_release: Option<DateTime<Utc>>,
) -> Option<ScoredCandidate> {
    let mut seen: HashSet<u64> = HashSet::new();
    let mut best: Option<(usize, u32)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        if !seen.insert(candidate.id) {
            continue;
        }
        let score = score_candidate(candidate, variants, source_release);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }

    best.filter(|&(_, score)| score >= MIN_MATCH_SCORE)
        .map(|(index, score)| ScoredCandidate {
            candidate: candidates[index].clone(),
            score,
        })
}
