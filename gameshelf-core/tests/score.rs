use chrono::{DateTime, TimeZone, Utc};
use gameshelf_core::{
    CatalogCandidate, MIN_MATCH_SCORE, best_match, name_variants, score_candidate,
};

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn bare_candidate(id: u64, name: &str) -> CatalogCandidate {
    CatalogCandidate {
        id,
        name: name.to_string(),
        first_release_date: None,
        cover_url: None,
        rating: None,
        summary: None,
        genres: Vec::new(),
        platforms: Vec::new(),
        companies: Vec::new(),
    }
}

#[test]
fn exact_name_and_close_release_scores_at_least_200() {
    let variants = vec!["hollow knight".to_string()];
    let candidate = CatalogCandidate {
        first_release_date: Some(date(2017, 2, 26)),
        ..bare_candidate(1030, "Hollow Knight")
    };
    let score = score_candidate(&candidate, &variants, Some(date(2017, 2, 24)));
    assert!(score >= 200, "got {score}");

    // An exact match with a close release date always beats a weaker
    // competitor, regardless of the competitor's feature bonuses.
    let competitor = CatalogCandidate {
        first_release_date: Some(date(2021, 6, 1)),
        cover_url: Some("https://example/cover.jpg".to_string()),
        rating: Some(88.0),
        summary: Some("A different game.".to_string()),
        genres: vec!["Platform".to_string()],
        ..bare_candidate(2000, "Hollow Depths")
    };
    let winner = best_match(
        &variants,
        &[competitor, candidate.clone()],
        Some(date(2017, 2, 24)),
    )
    .expect("should match");
    assert_eq!(winner.candidate.id, 1030);
}

#[test]
fn below_threshold_is_unmatched() {
    // Cover + summary + rating + genre + 2000s recency = 35 < 40.
    let candidate = CatalogCandidate {
        first_release_date: Some(date(2005, 6, 1)),
        cover_url: Some("https://example/cover.jpg".to_string()),
        rating: Some(70.0),
        summary: Some("Unrelated.".to_string()),
        genres: vec!["Strategy".to_string()],
        ..bare_candidate(7, "Completely Different Name")
    };
    let variants = vec!["some other title".to_string()];
    assert_eq!(score_candidate(&candidate, &variants, None), 35);
    assert!(best_match(&variants, &[candidate], None).is_none());
}

#[test]
fn threshold_is_inclusive_at_40() {
    // Cover + summary + rating + genre + 2010s recency = 40, exactly
    // the acceptance threshold.
    let candidate = CatalogCandidate {
        first_release_date: Some(date(2015, 6, 1)),
        cover_url: Some("https://example/cover.jpg".to_string()),
        rating: Some(70.0),
        summary: Some("Unrelated.".to_string()),
        genres: vec!["Strategy".to_string()],
        ..bare_candidate(7, "Completely Different Name")
    };
    let variants = vec!["some other title".to_string()];
    assert_eq!(score_candidate(&candidate, &variants, None), MIN_MATCH_SCORE);
    let winner = best_match(&variants, &[candidate], None).expect("40 must pass");
    assert_eq!(winner.score, MIN_MATCH_SCORE);
}

#[test]
fn substring_overlap_scores_50() {
    let candidate = bare_candidate(9, "The Witcher 3: Wild Hunt");
    let variants = vec!["the witcher".to_string()];
    assert_eq!(score_candidate(&candidate, &variants, None), 50);
}

#[test]
fn cleaned_candidate_name_counts_as_exact() {
    // The raw candidate name differs by punctuation only; that is an
    // exact match, not a substring overlap.
    let candidate = bare_candidate(1942, "The Witcher 3: Wild Hunt");
    let variants = name_variants("The Witcher 3: Wild Hunt - Complete Edition");
    assert_eq!(score_candidate(&candidate, &variants, None), 100);
}

#[test]
fn exact_match_suppresses_overlap_bonus() {
    let candidate = bare_candidate(4, "Doom");
    let variants = vec!["doom".to_string(), "doo".to_string()];
    assert_eq!(score_candidate(&candidate, &variants, None), 100);
}

#[test]
fn release_proximity_tiers() {
    let variants = vec!["nothing alike".to_string()];
    let mk = |release| CatalogCandidate {
        first_release_date: Some(release),
        ..bare_candidate(1, "Unrelated")
    };
    let source = Some(date(1999, 6, 15));

    // Within a week: +100 (1990s, so no recency bonus muddies the sum).
    assert_eq!(score_candidate(&mk(date(1999, 6, 20)), &variants, source), 100);
    // Within a month: +50.
    assert_eq!(score_candidate(&mk(date(1999, 7, 10)), &variants, source), 50);
    // Same calendar year: +25.
    assert_eq!(score_candidate(&mk(date(1999, 12, 1)), &variants, source), 25);
    // Different year, far apart, but 2000s recency tier: +10.
    assert_eq!(score_candidate(&mk(date(2003, 1, 1)), &variants, source), 10);
}

#[test]
fn recency_tiers() {
    let variants = vec!["nothing alike".to_string()];
    let mk = |y| CatalogCandidate {
        first_release_date: Some(date(y, 6, 1)),
        ..bare_candidate(1, "Unrelated")
    };
    assert_eq!(score_candidate(&mk(2023), &variants, None), 20);
    assert_eq!(score_candidate(&mk(2012), &variants, None), 15);
    assert_eq!(score_candidate(&mk(2004), &variants, None), 10);
    assert_eq!(score_candidate(&mk(1996), &variants, None), 0);
}

#[test]
fn ties_resolve_to_input_order() {
    let a = CatalogCandidate {
        cover_url: Some("https://example/a.jpg".to_string()),
        rating: Some(80.0),
        summary: Some("First.".to_string()),
        genres: vec!["RPG".to_string()],
        first_release_date: Some(date(2015, 1, 1)),
        ..bare_candidate(1, "Same Name")
    };
    let b = CatalogCandidate {
        cover_url: a.cover_url.clone(),
        rating: a.rating,
        summary: Some("Second.".to_string()),
        genres: a.genres.clone(),
        first_release_date: a.first_release_date,
        ..bare_candidate(2, "Same Name")
    };
    let variants = vec!["same name".to_string()];
    let winner = best_match(&variants, &[a, b], None).expect("both clear the bar");
    assert_eq!(winner.candidate.id, 1);
}

#[test]
fn duplicate_ids_are_ranked_once() {
    let first = bare_candidate(5, "Stardew Valley");
    let duplicate = CatalogCandidate {
        cover_url: Some("https://example/cover.jpg".to_string()),
        ..bare_candidate(5, "Stardew Valley")
    };
    let variants = vec!["stardew valley".to_string()];
    let winner = best_match(&variants, &[first, duplicate], None).expect("exact name matches");
    // The second occurrence of id 5 is ignored, so its cover bonus
    // never lands.
    assert_eq!(winner.score, 100);
}
