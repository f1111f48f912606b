//! Title normalization for catalog search.
//!
//! Library titles arrive full of storefront noise ("Deluxe Edition",
//! platform tags, trademark glyphs, roman-numeral sequels) that the
//! catalog's search endpoint handles badly. [`clean_title`] strips that
//! noise down to a canonical lowercase form, and [`name_variants`]
//! expands the cleaned form into an ordered list of fallback queries.
//!
//! All transforms are hand-rolled character/token scans; the whole
//! module is deterministic and does no I/O.

/// Edition qualifiers removed from titles as whole words/phrases.
/// Longer phrases are listed first so "game of the year edition" is
/// consumed before "goty" could fire inside it.
const EDITION_QUALIFIERS: &[&str] = &[
    "game of the year edition",
    "collectors edition",
    "anniversary edition",
    "legendary edition",
    "definitive edition",
    "complete edition",
    "enhanced edition",
    "ultimate edition",
    "premium edition",
    "special edition",
    "deluxe edition",
    "goty edition",
    "gold edition",
    "directors cut",
    "remastered",
    "remaster",
    "redux",
    "goty",
];

/// Platform qualifiers removed from titles as whole words.
const PLATFORM_QUALIFIERS: &[&str] = &["pc", "mac", "linux", "windows"];

/// Roman numerals converted to digits when they stand as whole words.
/// Whole-word matching makes the order irrelevant ("iii" never matches
/// inside "ii"), but longest-first keeps intent obvious.
const ROMAN_NUMERALS: &[(&str, &str)] = &[("iv", "4"), ("iii", "3"), ("ii", "2"), ("i", "1")];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Replace whole-word occurrences of `from` with `to`.
///
/// "Whole word" means the match is not touching an alphanumeric
/// character on either side, so `from` may itself contain spaces
/// ("ultimate edition") and still match as a unit.
fn replace_word(s: &str, from: &str, to: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        if s[i..].starts_with(from) {
            let before_ok = !s[..i].chars().next_back().is_some_and(is_word_char);
            let after = i + from.len();
            let after_ok = !s[after..].chars().next().is_some_and(is_word_char);
            if before_ok && after_ok {
                out.push_str(to);
                i = after;
                continue;
            }
        }
        let ch = s[i..].chars().next().expect("index is on a char boundary");
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}

/// Whether `needle` occurs in `haystack` as a whole word.
///
/// Both sides are expected to be lowercase already; no case folding
/// happens here.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let i = start + pos;
        let before_ok = !haystack[..i].chars().next_back().is_some_and(is_word_char);
        let after = i + needle.len();
        let after_ok = !haystack[after..].chars().next().is_some_and(is_word_char);
        if before_ok && after_ok {
            return true;
        }
        start = i + needle.len();
    }
    false
}

/// Remove `(NNNN)` parenthetical years. Runs while parentheses are
/// still present; the later punctuation strip would otherwise leave the
/// bare digits behind as a fake sequel number.
fn strip_paren_year(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('(') {
        let tail = &rest[open + 1..];
        let digits: String = tail.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.len() == 4 && tail[digits.len()..].starts_with(')') {
            out.push_str(&rest[..open]);
            rest = &tail[digits.len() + 1..];
        } else {
            out.push_str(&rest[..open + 1]);
            rest = tail;
        }
    }
    out.push_str(rest);
    out
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean a raw library title into its canonical lowercase search form.
///
/// Pipeline, in order: lowercase and strip trademark glyphs; convert
/// roman numerals I through IV to digits as whole words; turn dash
/// variants into spaces; drop `(NNNN)` year tags; strip what is not a
/// word character or space; remove edition and platform qualifiers as
/// whole words until none remain; collapse whitespace. Idempotent on
/// its own output.
///
/// # Examples
///
/// ```
/// use gameshelf_core::normalize::clean_title;
///
/// assert_eq!(clean_title("The Witcher® 3: Wild Hunt - Complete Edition"),
///            "the witcher 3 wild hunt");
/// assert_eq!(clean_title("Final Fantasy IV (PC)"), "final fantasy 4");
/// ```
pub fn clean_title(raw: &str) -> String {
    let mut s = raw.to_lowercase();
    s.retain(|c| !matches!(c, '\u{2122}' | '\u{a9}' | '\u{ae}' | '\u{2120}'));

    for &(roman, digit) in ROMAN_NUMERALS {
        s = replace_word(&s, roman, digit);
    }

    let s: String = s
        .chars()
        .map(|c| {
            if matches!(c, '-' | '_' | '\u{2012}' | '\u{2013}' | '\u{2014}') {
                ' '
            } else {
                c
            }
        })
        .collect();

    let s = strip_paren_year(&s);

    let s: String = s
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect();

    // Removing one qualifier can make another contiguous ("complete
    // remastered edition"), so strip until nothing changes.
    let mut s = collapse_whitespace(&s);
    loop {
        let mut next = s.clone();
        for q in EDITION_QUALIFIERS {
            next = replace_word(&next, q, "");
        }
        for q in PLATFORM_QUALIFIERS {
            next = replace_word(&next, q, "");
        }
        let next = collapse_whitespace(&next);
        if next == s {
            break;
        }
        s = next;
    }
    s
}

fn push_unique(variants: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !variants.contains(&candidate) {
        variants.push(candidate);
    }
}

/// Generate the ordered, de-duplicated list of search strings for a raw
/// title. The cleaned title always comes first; the fallbacks get more
/// aggressive the further down the list they sit:
///
/// 1. the cleaned title;
/// 2. the cleaned title with all digits removed;
/// 3. the leading word of the cleaned title;
/// 4. the cleaned title with a trailing sequel number removed.
///
/// Always yields at least one variant: if cleaning strips the title to
/// nothing, the lowercased trimmed original stands in.
pub fn name_variants(raw: &str) -> Vec<String> {
    let mut cleaned = clean_title(raw);
    if cleaned.is_empty() {
        cleaned = raw.trim().to_lowercase();
    }

    let mut variants = Vec::with_capacity(4);
    push_unique(&mut variants, cleaned.clone());

    let without_digits: String = cleaned.chars().filter(|c| !c.is_ascii_digit()).collect();
    push_unique(&mut variants, collapse_whitespace(&without_digits));

    if let Some(prefix) = cleaned.split([' ', '-', ':']).next() {
        push_unique(&mut variants, prefix.to_string());
    }

    if let Some((head, tail)) = cleaned.rsplit_once(' ')
        && !tail.is_empty()
        && tail.chars().all(|c| c.is_ascii_digit())
    {
        push_unique(&mut variants, head.to_string());
    }

    if variants.is_empty() {
        variants.push(cleaned);
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_word_respects_boundaries() {
        assert_eq!(replace_word("ii wii ii", "ii", "2"), "2 wii 2");
        assert_eq!(replace_word("part iv: end", "iv", "4"), "part 4: end");
    }

    #[test]
    fn replace_word_matches_phrases() {
        assert_eq!(
            replace_word("foo ultimate edition bar", "ultimate edition", ""),
            "foo  bar"
        );
    }

    #[test]
    fn contains_word_needs_boundaries() {
        assert!(contains_word("half life 2 beta", "beta"));
        assert!(!contains_word("betamax tapes", "beta"));
        assert!(!contains_word("anything", ""));
    }

    #[test]
    fn strip_paren_year_only_four_digits() {
        assert_eq!(strip_paren_year("prey (2017)"), "prey ");
        assert_eq!(strip_paren_year("payday (3) heist"), "payday (3) heist");
        assert_eq!(strip_paren_year("doom (12345)"), "doom (12345)");
    }
}
