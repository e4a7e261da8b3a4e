#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Slot {
    #[default]
    Unknown,
    Matched,
    Failed,
}

/// Results of the recursion for one call, indexed by
/// (text index, pattern index, plus-satisfied flag).
#[derive(Debug)]
pub(crate) struct MemoTable {
    pattern_stride: usize,
    slots: Vec<Slot>,
}

impl MemoTable {
    pub(crate) fn new(text_len: usize, pattern_len: usize) -> Self {
        let pattern_stride = (pattern_len + 1) * 2;
        Self {
            pattern_stride,
            slots: vec![Slot::Unknown; (text_len + 1) * pattern_stride],
        }
    }

    #[inline]
    fn index(&self, ti: usize, pi: usize, satisfied: bool) -> usize {
        ti * self.pattern_stride + pi * 2 + usize::from(satisfied)
    }

    #[inline]
    pub(crate) fn get(&self, ti: usize, pi: usize, satisfied: bool) -> Option<bool> {
        match self.slots[self.index(ti, pi, satisfied)] {
            Slot::Unknown => None,
            Slot::Matched => Some(true),
            Slot::Failed => Some(false),
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, ti: usize, pi: usize, satisfied: bool, value: bool) {
        let idx = self.index(ti, pi, satisfied);
        self.slots[idx] = if value { Slot::Matched } else { Slot::Failed };
    }

    #[cfg(test)]
    pub(crate) fn filled(&self) -> usize {
        self.slots.iter().filter(|s| **s != Slot::Unknown).count()
    }
}
