use gameshelf_core::{clean_title, name_variants};

#[test]
fn always_at_least_one_nonempty_variant() {
    for title in [
        "Half-Life 2",
        "DOOM (2016)",
        "\u{2122}\u{ae}",
        "STAR WARS\u{2122} Jedi: Fallen Order\u{2122}",
        "a",
    ] {
        let variants = name_variants(title);
        assert!(!variants.is_empty(), "no variants for {title:?}");
        assert!(
            variants.iter().all(|v| !v.is_empty()),
            "empty variant for {title:?}: {variants:?}"
        );
    }
}

#[test]
fn cleaning_is_idempotent() {
    for title in [
        "The Witcher 3: Wild Hunt - Complete Edition",
        "Grand Theft Auto IV",
        "NieR:Automata\u{2122}",
        "Mass Effect\u{2122} Legendary Edition",
        "Resident Evil 4 (2023)",
        "Game Complete Remastered Edition",
    ] {
        let once = clean_title(title);
        assert_eq!(clean_title(&once), once, "not idempotent for {title:?}");
    }
}

#[test]
fn variants_are_deduplicated_and_ordered() {
    let variants = name_variants("The Witcher 3: Wild Hunt");
    assert_eq!(variants[0], "the witcher 3 wild hunt");
    assert!(variants.contains(&"the witcher wild hunt".to_string()));
    assert!(variants.contains(&"the".to_string()));
    let unique: std::collections::HashSet<_> = variants.iter().collect();
    assert_eq!(unique.len(), variants.len(), "duplicates in {variants:?}");
}

#[test]
fn roman_numerals_become_digits() {
    assert!(name_variants("Game IV").contains(&"game 4".to_string()));
    assert_eq!(clean_title("Part Ii"), "part 2");
    assert_eq!(clean_title("Grand Theft Auto III"), "grand theft auto 3");
}

#[test]
fn roman_numerals_only_as_whole_words() {
    // "wii" and "ivy" must not be rewritten.
    assert_eq!(clean_title("Wii Party"), "wii party");
    assert_eq!(clean_title("Ivy the Kiwi"), "ivy the kiwi");
}

#[test]
fn edition_qualifiers_are_stripped() {
    assert!(name_variants("Foo: Ultimate Edition").contains(&"foo".to_string()));
    assert_eq!(clean_title("Skyrim Special Edition"), "skyrim");
    assert_eq!(
        clean_title("Dark Souls\u{2122}: Remastered"),
        "dark souls"
    );
}

#[test]
fn stacked_qualifiers_strip_to_a_fixpoint() {
    // Removing "remastered" leaves "complete edition" contiguous; the
    // whole stack must come off in one cleaning.
    assert_eq!(clean_title("Game Complete Remastered Edition"), "game");
    assert_eq!(clean_title("Half-Life 2 GOTY Remastered (PC)"), "half life 2");
}

#[test]
fn platform_qualifiers_are_stripped() {
    assert_eq!(clean_title("DOOM (PC)"), "doom");
    assert_eq!(clean_title("Shadow of the Tomb Raider (Windows)"), "shadow of the tomb raider");
}

#[test]
fn parenthetical_year_is_removed() {
    assert_eq!(clean_title("Prey (2017)"), "prey");
    // A bare sequel number is not a year tag.
    assert_eq!(clean_title("Left 4 Dead 2"), "left 4 dead 2");
}

#[test]
fn dashes_and_underscores_become_spaces() {
    assert_eq!(clean_title("Half-Life 2"), "half life 2");
    assert_eq!(clean_title("super_meat_boy"), "super meat boy");
}

#[test]
fn trailing_sequel_number_variant() {
    let variants = name_variants("Portal 2");
    assert_eq!(variants[0], "portal 2");
    assert!(variants.contains(&"portal".to_string()));
}

#[test]
fn glyph_only_title_falls_back_to_original() {
    let variants = name_variants("\u{2122}");
    assert_eq!(variants, vec!["\u{2122}".to_string()]);
}
