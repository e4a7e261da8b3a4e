use backtrack_regex_rs::matcher::{SearchOptions, match_offsets};
use backtrack_regex_rs::{Matcher, contains, count_matches};
use regex::Regex;

#[test]
fn contains_when_literal_occurs_then_true() {
    assert!(contains("hello world", "wor", true).unwrap());
    assert!(!contains("hello world", "xyz", true).unwrap());
}

#[test]
fn contains_when_pattern_empty_then_true_even_for_empty_text() {
    assert!(contains("", "", true).unwrap());
    assert!(contains("abc", "", true).unwrap());
}

#[test]
fn contains_when_case_insensitive_literal_then_uses_folded_text() {
    assert!(contains("Hello World", "WORLD", false).unwrap());
    assert!(!contains("Hello World", "WORLD", true).unwrap());
}

#[test]
fn contains_when_end_anchor_then_requires_text_end() {
    assert!(contains("abc", "c$", true).unwrap());
    assert!(!contains("abc", "b$", true).unwrap());
    assert!(contains("abc", "b.$", true).unwrap());
}

#[test]
fn contains_when_anchor_free_then_agrees_with_regex_crate() {
    let patterns = ["b+", "a.c", "[^a]c?", "ca*b", "x?"];
    let texts = ["", "abc", "aabbcc", "cab", "caaab", "bbbb", "xyz"];

    for pattern in patterns {
        let reference = Regex::new(pattern).expect("reference should compile");
        for text in texts {
            assert_eq!(
                contains(text, pattern, true).unwrap(),
                reference.is_match(text),
                "text {text:?} pattern {pattern:?}"
            );
        }
    }
}

#[test]
fn count_when_single_literal_then_counts_each_offset() {
    assert_eq!(count_matches("aaa", "a", true).unwrap(), 3);
}

#[test]
fn count_when_pattern_can_match_at_several_lengths_then_counts_offset_once() {
    // "a*" matches at every offset with several lengths; each offset counts once.
    assert_eq!(count_matches("aab", "a*", true).unwrap(), 3);
    assert_eq!(count_matches("abab", "ab", true).unwrap(), 2);
    assert_eq!(count_matches("", "a*", true).unwrap(), 0);
}

#[test]
fn count_when_pattern_empty_then_every_offset_matches() {
    assert_eq!(count_matches("abcd", "", true).unwrap(), 4);
}

#[test]
fn count_when_anchor_free_then_agrees_with_anchored_regex_per_offset() {
    let patterns = ["a+", "b.", "[ab]c?", "c*a"];
    let texts = ["abcabc", "aaaa", "cbacba", "ccca"];

    for pattern in patterns {
        let reference = Regex::new(&format!("^(?:{pattern})")).expect("reference should compile");
        for text in texts {
            let expected = (0..text.len())
                .filter(|&i| reference.is_match(&text[i..]))
                .count();
            assert_eq!(
                count_matches(text, pattern, true).unwrap(),
                expected,
                "text {text:?} pattern {pattern:?}"
            );
        }
    }
}

#[test]
fn offsets_when_overlapping_occurrences_then_all_reported() {
    let offsets = match_offsets("aaaa", "aa", SearchOptions::default());
    assert_eq!(offsets, vec![0, 1, 2]);
}

#[test]
fn offsets_through_matcher_match_count() {
    let matcher = Matcher::default();
    let offsets = matcher
        .match_offsets("Ab aB", "[a]b", false)
        .expect("pattern should validate");

    assert_eq!(offsets, vec![0, 3]);
    assert_eq!(
        matcher.count_matches("Ab aB", "[a]b", false).unwrap(),
        offsets.len()
    );
}
