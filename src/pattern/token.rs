use super::class::CLASS_OPEN;

pub const WILDCARD: char = '.';
pub const START_ANCHOR: char = '^';
pub const END_ANCHOR: char = '$';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    ZeroOrMore,
    OneOrMore,
    ZeroOrOne,
}

impl Quantifier {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Quantifier::ZeroOrMore),
            '+' => Some(Quantifier::OneOrMore),
            '?' => Some(Quantifier::ZeroOrOne),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Quantifier::ZeroOrMore => '*',
            Quantifier::OneOrMore => '+',
            Quantifier::ZeroOrOne => '?',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(char),
    Wildcard,
    /// Opening `[` of a class; width is only known after the class is parsed.
    Class,
    StartAnchor,
    EndAnchor,
    /// A quantifier with nothing to repeat. Accepts no character.
    StrayQuantifier(Quantifier),
}

/// Classifies the character at `pos`. Anchors are positional: `^` only at
/// index 0 and `$` only as the last character of a pattern longer than one.
#[inline]
pub fn read_token(pattern: &[char], pos: usize) -> Option<Token> {
    let c = *pattern.get(pos)?;

    let token = match c {
        START_ANCHOR if pos == 0 => Token::StartAnchor,
        END_ANCHOR if pattern.len() > 1 && pos == pattern.len() - 1 => Token::EndAnchor,
        WILDCARD => Token::Wildcard,
        CLASS_OPEN => Token::Class,
        other => match Quantifier::from_char(other) {
            Some(q) => Token::StrayQuantifier(q),
            None => Token::Literal(other),
        },
    };

    Some(token)
}

#[inline]
pub fn quantifier_at(pattern: &[char], pos: usize) -> Option<Quantifier> {
    pattern.get(pos).copied().and_then(Quantifier::from_char)
}

/// True when the pattern has no character with special meaning, so it can
/// only ever match itself.
pub fn is_plain_literal(pattern: &str) -> bool {
    !pattern.chars().any(|c| {
        matches!(
            c,
            WILDCARD | START_ANCHOR | END_ANCHOR | '*' | '+' | '?' | '[' | ']'
        )
    })
}
