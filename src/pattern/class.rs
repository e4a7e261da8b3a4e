use smallvec::SmallVec;

use super::ClassError;

pub const CLASS_OPEN: char = '[';
pub const CLASS_CLOSE: char = ']';
pub const CLASS_NEGATE: char = '^';
const RANGE_SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassItem {
    Single(char),
    /// Inclusive by code point; a reversed range contains nothing.
    Range(char, char),
}

impl ClassItem {
    #[inline]
    fn contains(&self, ch: char) -> bool {
        match *self {
            ClassItem::Single(c) => c == ch,
            ClassItem::Range(lo, hi) => lo <= ch && ch <= hi,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    pub negated: bool,
    pub items: SmallVec<[ClassItem; 8]>,
    /// Pattern index immediately after the closing `]`.
    pub end: usize,
}

impl CharClass {
    pub fn accepts(&self, ch: Option<char>) -> bool {
        // An exhausted text is never a member, negated or not.
        let Some(ch) = ch else {
            return false;
        };

        let member = self.items.iter().any(|item| item.contains(ch));
        member != self.negated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassMatch {
    pub accepted: bool,
    pub end: usize,
}

pub fn parse_class(pattern: &[char], start: usize) -> Result<CharClass, ClassError> {
    if pattern.get(start) != Some(&CLASS_OPEN) {
        return Err(ClassError::NotAClass { start });
    }

    let mut body = start + 1;
    let negated = pattern.get(body) == Some(&CLASS_NEGATE);
    if negated {
        body += 1;
    }

    let close = pattern
        .get(body..)
        .and_then(|rest| rest.iter().position(|&c| c == CLASS_CLOSE))
        .map(|offset| body + offset)
        .ok_or(ClassError::MalformedClass { start })?;

    let mut items: SmallVec<[ClassItem; 8]> = SmallVec::new();
    let mut k = body;

    while k < close {
        if k + 2 < close && pattern[k + 1] == RANGE_SEPARATOR {
            items.push(ClassItem::Range(pattern[k], pattern[k + 2]));
            k += 3;
        } else {
            items.push(ClassItem::Single(pattern[k]));
            k += 1;
        }
    }

    Ok(CharClass {
        negated,
        items,
        end: close + 1,
    })
}

#[inline]
pub fn match_class(
    pattern: &[char],
    start: usize,
    ch: Option<char>,
) -> Result<ClassMatch, ClassError> {
    let class = parse_class(pattern, start)?;

    Ok(ClassMatch {
        accepted: class.accepts(ch),
        end: class.end,
    })
}
