use regex::Regex;
use std::sync::LazyLock;

static VOICE_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*\)").expect("voice annotation pattern"));

/// Normalize a character cue into a stats key.
///
/// Uppercases the cue and strips the parenthetical voice annotation, so
/// `John (O.S.)` and `JOHN` share one entry. Only the first parenthesized span
/// is removed; the match is greedy, so `A (X) B (Y)` collapses to `A`.
pub fn normalize_character_name(cue: &str) -> String {
    let upper = cue.trim().to_uppercase();
    VOICE_ANNOTATION.replacen(&upper, 1, "").trim().to_string()
}

/// Whitespace-separated word count
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_voice_annotations() {
        assert_eq!(normalize_character_name("John (O.S.)"), "JOHN");
        assert_eq!(normalize_character_name("  mary (V.O.) "), "MARY");
        assert_eq!(normalize_character_name("DR. ALI"), "DR. ALI");
    }

    #[test]
    fn test_greedy_strip_on_multiple_annotations() {
        assert_eq!(normalize_character_name("A (X) B (Y)"), "A");
    }

    #[test]
    fn test_unclosed_parenthesis_is_kept() {
        assert_eq!(normalize_character_name("BOB (CONT'D"), "BOB (CONT'D");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("  Hello   there\nfriend "), 3);
        assert_eq!(count_words(""), 0);
    }
}
