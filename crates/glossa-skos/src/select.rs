//! Literal selection by language.
//!
//! Given the literal candidates for one subject and predicate, pick the
//! single best value for a requested language.

use glossa_core::Literal;

/// Picks the best literal for a language.
///
/// Priority, in order:
/// 1. the FIRST candidate whose language tag equals the requested
///    language (the scan stops on this match);
/// 2. else the LAST language-less candidate seen (the scan runs past
///    non-matches, and each language-less literal overwrites the
///    remembered fallback);
/// 3. else the first candidate of any language;
/// 4. else nothing.
///
/// The first-exact/last-langless asymmetry is intentional and pinned by
/// tests; callers depend on it being stable.
pub fn select_literal<'a>(candidates: &[&'a Literal], language: &str) -> Option<&'a Literal> {
    let mut langless: Option<&Literal> = None;
    for lit in candidates {
        match lit.language.as_deref() {
            Some(tag) if tag == language => return Some(lit),
            None => langless = Some(lit),
            _ => {}
        }
    }
    langless.or_else(|| candidates.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(value: &str, language: Option<&str>) -> Literal {
        match language {
            Some(tag) => Literal::new(value).with_language(tag),
            None => Literal::new(value),
        }
    }

    #[test]
    fn test_exact_match_wins() {
        let a = lit("plain", None);
        let b = lit("english", Some("en"));
        let c = lit("french", Some("fr"));
        let candidates = vec![&a, &b, &c];

        let best = select_literal(&candidates, "fr").unwrap();
        assert_eq!(best.value, "french");
    }

    #[test]
    fn test_first_exact_match_short_circuits() {
        let a = lit("first english", Some("en"));
        let b = lit("second english", Some("en"));
        let candidates = vec![&a, &b];

        let best = select_literal(&candidates, "en").unwrap();
        assert_eq!(best.value, "first english");
    }

    #[test]
    fn test_last_langless_wins_as_fallback() {
        let a = lit("first plain", None);
        let b = lit("german", Some("de"));
        let c = lit("second plain", None);
        let candidates = vec![&a, &b, &c];

        // No "fr" candidate: the LAST language-less literal is kept.
        let best = select_literal(&candidates, "fr").unwrap();
        assert_eq!(best.value, "second plain");
    }

    #[test]
    fn test_first_candidate_when_no_exact_or_langless() {
        let a = lit("english", Some("en"));
        let b = lit("german", Some("de"));
        let candidates = vec![&a, &b];

        let best = select_literal(&candidates, "fr").unwrap();
        assert_eq!(best.value, "english");
    }

    #[test]
    fn test_empty_candidates() {
        assert!(select_literal(&[], "en").is_none());
    }

    #[test]
    fn test_exact_match_beats_earlier_langless() {
        let a = lit("plain", None);
        let b = lit("french", Some("fr"));
        let candidates = vec![&a, &b];

        let best = select_literal(&candidates, "fr").unwrap();
        assert_eq!(best.value, "french");
    }
}
