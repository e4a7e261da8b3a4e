use backtrack_regex_rs::matcher::{SearchOptions, whole_matches as raw_whole_matches};
use backtrack_regex_rs::{contains, count_matches, whole_matches};
use regex::Regex;

fn matches(text: &str, pattern: &str) -> bool {
    whole_matches(text, pattern, true).expect("pattern should validate")
}

fn texts_over(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for &c in alphabet {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

#[test]
fn whole_match_when_star_absorbs_prefix_then_matches() {
    assert!(matches("abb", "a*bb"));
}

#[test]
fn whole_match_when_pattern_demands_extra_char_then_fails() {
    assert!(!matches("abb", "a*bbb"));
}

#[test]
fn whole_match_when_case_insensitive_then_ignores_case() {
    assert!(whole_matches("Cat", "cat", false).unwrap());
    assert!(!whole_matches("Cat", "cat", true).unwrap());
    assert!(whole_matches("cAT", "[A-C]at", false).unwrap());
}

#[test]
fn whole_match_when_class_range_then_checks_membership() {
    assert!(!matches("d", "[a-c]"));
    assert!(matches("b", "[a-c]"));
    assert!(matches("d", "[^a-c]"));
    assert!(!matches("", "[^a-c]"));
    assert!(matches("x-y", "[xy][-][a-z]"));
}

#[test]
fn whole_match_when_pattern_empty_then_only_empty_text() {
    assert!(matches("", ""));
    assert!(!matches("a", ""));
}

#[test]
fn whole_match_when_text_empty_then_only_zero_width_tokens() {
    for pattern in ["", "a*", "a*b?", "[xyz]*.?", ".*"] {
        assert!(matches("", pattern), "pattern {pattern:?}");
    }
    for pattern in ["a", "a+", "a*b", ".", "[a]"] {
        assert!(!matches("", pattern), "pattern {pattern:?}");
    }
}

#[test]
fn whole_match_when_plus_then_equivalent_to_token_then_star() {
    let texts = texts_over(&['a', 'b', 'c'], 5);
    for token in ["a", ".", "[ab]", "[^c]"] {
        let plus = format!("{token}+");
        let doubled = format!("{token}{token}*");
        for text in &texts {
            assert_eq!(
                matches(text, &plus),
                matches(text, &doubled),
                "text {text:?} token {token:?}"
            );
        }
    }
}

#[test]
fn whole_match_when_anchor_free_then_agrees_with_regex_crate() {
    let patterns = [
        "a*bb",
        "a+b?c*",
        ".*c",
        "[a-c]+",
        "[^ab]*c",
        "a?a?a?aaa",
        "b.a*",
        "[ab]?c+[bc]",
        "abc",
    ];
    let texts = texts_over(&['a', 'b', 'c'], 6);

    for pattern in patterns {
        let reference = Regex::new(&format!("^(?:{pattern})$")).expect("reference should compile");
        for text in &texts {
            assert_eq!(
                matches(text, pattern),
                reference.is_match(text),
                "text {text:?} pattern {pattern:?}"
            );
        }
    }
}

#[test]
fn whole_match_when_memoization_disabled_then_results_agree() {
    let patterns = ["a*b*a*", "a+b+", "[ab]?a*.", "^a.b$", "c?[^a]+"];
    let texts = texts_over(&['a', 'b', 'c'], 5);
    let memoized = SearchOptions::default();
    let plain = SearchOptions::default().with_memoize(false);

    for pattern in patterns {
        for text in &texts {
            assert_eq!(
                raw_whole_matches(text, pattern, memoized),
                raw_whole_matches(text, pattern, plain),
                "text {text:?} pattern {pattern:?}"
            );
        }
    }
}

#[test]
fn whole_match_when_case_insensitive_then_equals_lowercased_case_sensitive() {
    let cases = [
        ("HeLLo", "h[a-z]*O"),
        ("ABC", "[A-C]+"),
        ("abc", "[A-C]+"),
        ("Straße", "STRA.SE"),
        ("x", "[^X]"),
        ("İ", "i."),
        ("İ", "İ"),
        ("İ", "."),
        ("aİb", "A..B"),
    ];

    for (text, pattern) in cases {
        assert_eq!(
            whole_matches(text, pattern, false).unwrap(),
            whole_matches(&text.to_lowercase(), &pattern.to_lowercase(), true).unwrap(),
            "text {text:?} pattern {pattern:?}"
        );
    }
}

#[test]
fn whole_match_when_many_adjacent_stars_then_finishes() {
    let text = "a".repeat(200);
    let pattern = format!("{}c", "a*".repeat(40));

    assert!(!matches(&text, &pattern));
    assert!(matches(&text, &"a*".repeat(40)));
}

#[test]
fn whole_match_when_text_is_very_long_then_completes() {
    let text = "a".repeat(100_000);

    assert!(matches(&text, "a*"));
    assert!(matches(&text, "a+b?"));
    assert!(!matches(&text, "a*b"));
    assert!(raw_whole_matches(&text, "a+b?", SearchOptions::default().with_memoize(false)));
}

#[test]
fn search_when_text_is_very_long_then_completes() {
    let text = format!("{}b", "a".repeat(100_000));

    assert!(contains(&text, "a+b", true).unwrap());
    assert_eq!(count_matches(&text, "a*b", true).unwrap(), 100_001);
}

#[test]
fn whole_match_when_anchors_present_then_honored() {
    assert!(matches("abc", "^abc$"));
    assert!(matches("abc", "^a.*"));
    assert!(!matches("", "^a*"));
    assert!(matches("", "a*$"));
    assert!(!matches("ab", "a$b"));
    assert!(matches("a$b", "a$b"));
    assert!(matches("$", "$"));
}

#[test]
fn whole_match_when_quantifier_has_no_operand_then_never_matches() {
    assert!(!matches("a", "a*?"));
    assert!(!matches("", "a*?"));
    assert!(!matches("x", "^*x"));
}
