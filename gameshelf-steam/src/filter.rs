use gameshelf_core::contains_word;

/// Phrases that mark a library entry as something other than a game.
/// Matched as substrings of the lowercased title.
const NON_GAME_PHRASES: &[&str] = &[
    "dedicated server",
    "season pass",
    "test server",
    "public test",
    "art book",
    "bonus content",
    "pre-order",
    "level editor",
    "mod tools",
    "companion app",
];

/// Short tokens that only disqualify a title when they appear as whole
/// words; "demo" as a substring would wrongly catch "Demon's Souls".
const NON_GAME_WORDS: &[&str] = &[
    "dlc",
    "demo",
    "sdk",
    "beta",
    "soundtrack",
    "artbook",
    "trailer",
    "ost",
];

/// Whether a Steam library title looks like a non-game entry that
/// should be skipped during import.
pub fn is_non_game(title: &str) -> bool {
    let lowered = title.to_lowercase();
    NON_GAME_PHRASES.iter().any(|p| lowered.contains(p))
        || NON_GAME_WORDS.iter().any(|w| contains_word(&lowered, w))
}
