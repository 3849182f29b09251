//! Phrase containment strategies

use serde::{Deserialize, Serialize};

/// Decides whether a phrase occurs in a query.
///
/// Both arguments are already normalized by the caller. Implementations
/// only answer containment; scoring stays in [`super::Matcher`].
pub trait MatchStrategy {
    fn contains(&self, query: &str, phrase: &str) -> bool;

    fn name(&self) -> &'static str;
}

/// Raw substring containment, no word boundary checks
#[derive(Debug, Clone, Copy, Default)]
pub struct Substring;

impl MatchStrategy for Substring {
    fn contains(&self, query: &str, phrase: &str) -> bool {
        query.contains(phrase)
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// The phrase must be delimited by non-word characters or the ends of the query
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeWord;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl MatchStrategy for WholeWord {
    fn contains(&self, query: &str, phrase: &str) -> bool {
        if phrase.is_empty() {
            return true;
        }

        // Occurrences may overlap ("a a" in "xa a a"), so restart one char
        // after each hit instead of after the whole phrase
        let mut from = 0;
        while let Some(offset) = query[from..].find(phrase) {
            let start = from + offset;
            let end = start + phrase.len();

            let open = !matches!(query[..start].chars().next_back(), Some(c) if is_word_char(c));
            let close = !matches!(query[end..].chars().next(), Some(c) if is_word_char(c));
            if open && close {
                return true;
            }

            from = start + query[start..].chars().next().map_or(1, char::len_utf8);
        }
        false
    }

    fn name(&self) -> &'static str {
        "whole-word"
    }
}

/// Strategy selector used by configuration files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    Substring,
    WholeWord,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Substring => write!(f, "substring"),
            StrategyKind::WholeWord => write!(f, "whole-word"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_contains() {
        assert!(Substring.contains("ma batterie est morte", "batterie"));
        assert!(Substring.contains("kickstarter", "starter"));
        assert!(!Substring.contains("pneu crevé", "batterie"));
    }

    #[test]
    fn test_whole_word_requires_boundaries() {
        assert!(WholeWord.contains("starter", "starter"));
        assert!(WholeWord.contains("le starter grince", "starter"));
        assert!(WholeWord.contains("starter, puis rien", "starter"));
        assert!(!WholeWord.contains("kickstarter", "starter"));
        assert!(!WholeWord.contains("starters", "starter"));
    }

    #[test]
    fn test_whole_word_handles_accents_and_phrases() {
        assert!(WholeWord.contains("voyant moteur allumé ce matin", "voyant moteur allumé"));
        assert!(!WholeWord.contains("allumés", "allumé"));
    }

    #[test]
    fn test_whole_word_escapes_metacharacters() {
        assert!(WholeWord.contains("problème de a/c (clim)", "a/c"));
        assert!(!WholeWord.contains("abc", "a.c"));
    }

    #[test]
    fn test_whole_word_finds_overlapping_occurrence() {
        // First hit at "xa a" is glued to 'x', the second one is free
        assert!(WholeWord.contains("xa a a", "a a"));
        assert!(!WholeWord.contains("xa ax", "a a"));
    }

    #[test]
    fn test_whole_word_underscore_is_a_word_char() {
        assert!(!WholeWord.contains("code_erreur", "erreur"));
        assert!(WholeWord.contains("code-erreur", "erreur"));
    }

    #[test]
    fn test_strategy_kind_from_toml_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: StrategyKind,
        }
        let parsed: Wrapper = toml::from_str(r#"strategy = "whole-word""#).unwrap();
        assert_eq!(parsed.strategy, StrategyKind::WholeWord);
    }
}
