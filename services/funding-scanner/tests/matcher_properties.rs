//! Fundtrace Property-Based Tests
//!
//! Properties of funding detection over arbitrary surrounding text.

use fundtrace_scanner::FundingMatcher;
use proptest::prelude::*;

/// Filler text that cannot itself contain a funding mention or a period.
fn filler() -> impl Strategy<Value = String> {
    "[qxz ]{0,40}"
}

/// Every case variant of an agency abbreviation.
fn cased(word: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect()
    })
}

// ===== Property 1: Case-preserving keyword capture =====

mod keyword_capture_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Whatever the case of "NSF" in the text, the literal substring is returned.
        #[test]
        fn prop_nsf_literal_is_captured(
            before in filler(),
            after in filler(),
            nsf in cased("nsf"),
        ) {
            let text = format!("{} {} {}", before, nsf, after);
            let found = FundingMatcher::default().find_all(&text);

            prop_assert!(found.contains(&nsf));
        }

        /// Text with no trigger and no agency name yields nothing.
        #[test]
        fn prop_filler_yields_nothing(text in "[qxz .]{0,80}") {
            prop_assert!(FundingMatcher::default().find_all(&text).is_empty());
        }
    }
}

// ===== Property 2: Sentence capture and exact deduplication =====

mod sentence_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// A trigger sentence is captured trimmed, with its period, once no
        /// matter how often it repeats.
        #[test]
        fn prop_repeated_sentence_captured_once(
            lead in "[qxz]{1,10}( [qxz]{1,10}){0,3}",
            repeats in 1usize..5,
        ) {
            let sentence = format!("{} funded by DARPA.", lead);
            let text = vec![sentence.clone(); repeats].join("  ");
            let found = FundingMatcher::default().find_all(&text);

            prop_assert!(found.contains(&sentence));
            let sentences = found.iter().filter(|s| s.ends_with('.')).count();
            prop_assert_eq!(sentences, 1);
        }

        /// Results are a pure function of the text.
        #[test]
        fn prop_matching_is_deterministic(text in "[A-Za-z .]{0,120}") {
            let matcher = FundingMatcher::default();
            prop_assert_eq!(matcher.find_all(&text), matcher.find_all(&text));
        }
    }
}
