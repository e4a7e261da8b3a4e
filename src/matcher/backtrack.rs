use crate::pattern::{Quantifier, Token, match_class, parse_class, quantifier_at, read_token};

use super::memo::MemoTable;

/// Bytes left on the current stack before the recursion moves to a new segment.
const STACK_RED_ZONE: usize = 64 << 10;
/// Size of each stack segment allocated for deep recursion.
const STACK_SEGMENT_SIZE: usize = 4 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchoring {
    /// Reaching the end of the pattern succeeds only at the end of the text.
    Full,
    /// Reaching the end of the pattern succeeds wherever the text stands.
    Prefix,
}

/// Case-insensitive buffers are built from the lowercased string, so a
/// character may expand to several (`İ` lowers to `i` + U+0307).
pub(crate) fn load_chars(input: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        input.chars().collect()
    } else {
        input.to_lowercase().chars().collect()
    }
}

/// Matcher over index views into immutable text and pattern buffers.
///
/// With memoization the table is filled bottom-up when the matcher is built,
/// from the end of the text toward the start, so every lookup afterwards is
/// a table read and the stack depth stays constant regardless of input size.
#[derive(Debug)]
pub(crate) struct Backtracker<'a> {
    text: &'a [char],
    pattern: &'a [char],
    anchoring: Anchoring,
    memo: Option<MemoTable>,
}

impl<'a> Backtracker<'a> {
    pub(crate) fn new(
        text: &'a [char],
        pattern: &'a [char],
        anchoring: Anchoring,
        memoize: bool,
    ) -> Self {
        let memo = memoize.then(|| MemoTable::new(text.len(), pattern.len()));
        let mut backtracker = Self {
            text,
            pattern,
            anchoring,
            memo,
        };

        if backtracker.memo.is_some() {
            backtracker.fill();
        }

        backtracker
    }

    /// Every subproblem at (ti, pi) depends only on (ti, pi' > pi) or
    /// (ti + 1, _), so walking text indices downward and token starts
    /// backward finds each dependency already stored.
    fn fill(&mut self) {
        let starts = self.token_starts();

        for ti in (0..=self.text.len()).rev() {
            for &(pi, repeats) in starts.iter().rev() {
                if repeats {
                    self.step(ti, pi, true);
                }
                self.step(ti, pi, false);
            }
        }
    }

    /// Pattern indices where a token begins, plus the pattern end, each
    /// flagged when the token carries `+`.
    fn token_starts(&self) -> Vec<(usize, bool)> {
        let mut starts = Vec::new();
        let mut pi = 0usize;

        while let Some(token) = read_token(self.pattern, pi) {
            let next = match token {
                Token::Class => match parse_class(self.pattern, pi) {
                    Ok(class) => class.end,
                    // Cells past a broken class are computed lazily by `step`.
                    Err(_) => return starts,
                },
                _ => pi + 1,
            };

            if matches!(token, Token::StartAnchor | Token::EndAnchor) {
                starts.push((pi, false));
                pi = next;
                continue;
            }

            match quantifier_at(self.pattern, next) {
                Some(quantifier) => {
                    starts.push((pi, quantifier == Quantifier::OneOrMore));
                    pi = next + 1;
                }
                None => {
                    starts.push((pi, false));
                    pi = next;
                }
            }
        }

        starts.push((self.pattern.len(), false));
        starts
    }

    /// Whether the whole pattern matches starting at text index `start`.
    pub(crate) fn matches_from(&mut self, start: usize) -> bool {
        self.step(start, 0, false)
    }

    #[cfg(test)]
    pub(crate) fn memo_entries(&self) -> usize {
        self.memo.as_ref().map_or(0, MemoTable::filled)
    }

    fn step(&mut self, ti: usize, pi: usize, satisfied: bool) -> bool {
        if let Some(memo) = &self.memo
            && let Some(known) = memo.get(ti, pi, satisfied)
        {
            return known;
        }

        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, || {
            self.evaluate(ti, pi, satisfied)
        });

        if let Some(memo) = &mut self.memo {
            memo.set(ti, pi, satisfied, result);
        }

        result
    }

    /// `satisfied` is set once a `+` token at `pi` has consumed a character,
    /// after which it behaves like `*`.
    fn evaluate(&mut self, ti: usize, pi: usize, satisfied: bool) -> bool {
        let Some(token) = read_token(self.pattern, pi) else {
            return match self.anchoring {
                Anchoring::Full => ti == self.text.len(),
                Anchoring::Prefix => true,
            };
        };

        let current = self.text.get(ti).copied();

        let (first_match, next) = match token {
            Token::StartAnchor => return current.is_some() && self.step(ti, pi + 1, false),
            Token::EndAnchor => return current.is_none(),
            Token::StrayQuantifier(_) => return false,
            Token::Literal(c) => (current == Some(c), pi + 1),
            Token::Wildcard => (current.is_some(), pi + 1),
            Token::Class => match match_class(self.pattern, pi, current) {
                Ok(class) => (class.accepted, class.end),
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        pattern_index = pi,
                        "unvalidated pattern reached the matcher"
                    );
                    return false;
                }
            },
        };

        match quantifier_at(self.pattern, next) {
            Some(Quantifier::ZeroOrMore) => {
                self.step(ti, next + 1, false) || (first_match && self.step(ti + 1, pi, false))
            }
            Some(Quantifier::OneOrMore) => {
                (satisfied && self.step(ti, next + 1, false))
                    || (first_match && self.step(ti + 1, pi, true))
            }
            Some(Quantifier::ZeroOrOne) => {
                self.step(ti, next + 1, false)
                    || (first_match && self.step(ti + 1, next + 1, false))
            }
            None => first_match && self.step(ti + 1, next, false),
        }
    }
}
