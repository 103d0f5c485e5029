// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the parser's laws over arbitrary keys, values and
//! comments rather than a handful of hand-picked lines.

use kvcfg::adapters::{KeyValueParser, StrLineSource};
use kvcfg::domain::{BooleanLexicon, ConfigKey, LineError};
use kvcfg::ports::LineParser;
use kvcfg::service::StoreBuilder;
use proptest::prelude::*;

// Keys and values contain neither the delimiter nor the comment character
fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_./:-]{1,16}"
}

fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

// A valid line `k = v` yields the folded key and the trimmed value
proptest! {
    #[test]
    fn test_valid_line_yields_trimmed_pair(
        key in token(),
        value in token(),
        pad in (padding(), padding(), padding(), padding()),
    ) {
        let line = format!("{}{}{}={}{}{}", pad.0, key, pad.1, pad.2, value, pad.3);
        let (k, v) = KeyValueParser::default().parse_line(&line).unwrap().unwrap();

        prop_assert_eq!(k.as_str(), key.to_lowercase());
        prop_assert_eq!(v.as_str(), value.as_str());
    }
}

// Everything from the first '#' onward is ignored
proptest! {
    #[test]
    fn test_comment_is_discarded(
        key in token(),
        value in token(),
        comment in "[^\n]*",
    ) {
        let parser = KeyValueParser::default();
        let plain = format!("{} = {}", key, value);
        let commented = format!("{} # {}", plain, comment);

        prop_assert_eq!(parser.parse_line(&commented), parser.parse_line(&plain));
    }
}

// Re-parsing a normalized line gives the same result as the raw line
proptest! {
    #[test]
    fn test_normalize_is_idempotent(raw in "[^\n]*") {
        let parser = KeyValueParser::default();
        let normalized = parser.normalize(&raw);

        prop_assert_eq!(parser.normalize(normalized), normalized);
        prop_assert_eq!(parser.parse_line(normalized), parser.parse_line(&raw));
    }
}

// Lines with two or more delimiters are always rejected
proptest! {
    #[test]
    fn test_extra_delimiters_rejected(parts in prop::collection::vec(token(), 3..6)) {
        let line = parts.join(" = ");
        prop_assert_eq!(
            KeyValueParser::default().parse_line(&line),
            Some(Err(LineError::DelimiterCount))
        );
    }
}

// The first definition of a key wins and each repeat is reported once
proptest! {
    #[test]
    fn test_first_write_wins(
        key in token(),
        values in prop::collection::vec(token(), 1..6),
    ) {
        let text: String = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let spelled = if i % 2 == 0 { key.to_uppercase() } else { key.clone() };
                format!("{} = {}\n", spelled, v)
            })
            .collect();

        let report = StoreBuilder::default().parse(StrLineSource::new(&text)).unwrap();

        prop_assert_eq!(report.store.len(), 1);
        prop_assert_eq!(report.store.get(&key).unwrap().as_str(), values[0].as_str());
        prop_assert_eq!(report.duplicates().count(), values.len() - 1);
    }
}

// Boolean spellings resolve regardless of case
proptest! {
    #[test]
    fn test_lexicon_ignores_case(
        (token, expected) in prop::sample::select(vec![
            ("yes", true), ("on", true), ("true", true), ("yep", true),
            ("no", false), ("off", false), ("false", false), ("nope", false),
        ]),
        mask in prop::collection::vec(any::<bool>(), 5),
    ) {
        let mixed: String = token
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();

        prop_assert_eq!(BooleanLexicon::standard().resolve(&mixed), Some(expected));
    }
}

// Every lexicon token is shorter than six letters
proptest! {
    #[test]
    fn test_lexicon_rejects_unknown(token in "[a-zA-Z]{6,12}") {
        prop_assert_eq!(BooleanLexicon::standard().resolve(&token), None);
    }
}

// Folding is idempotent
proptest! {
    #[test]
    fn test_key_fold_idempotent(s in "[ \t]{0,2}[A-Za-z0-9_ ]*[ \t]{0,2}") {
        let once = ConfigKey::from(s.as_str());
        let twice = ConfigKey::from(once.as_str());
        prop_assert_eq!(once, twice);
    }
}
