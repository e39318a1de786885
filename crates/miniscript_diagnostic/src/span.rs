use std::ops::Range;

/// A byte range into a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn empty(at: usize) -> Self {
        Self::new(at, at)
    }

    pub fn union(self, other: Span) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn union_covers_both() {
        let a = Span::new(4, 6);
        let b = Span::new(0, 2);
        assert_eq!(a.union(b), Span::new(0, 6));
        assert_eq!(b.union(a), Span::new(0, 6));
    }

    #[test]
    fn empty_span() {
        assert!(Span::empty(3).is_empty());
        assert_eq!(Span::from(1..4).len(), 3);
    }
}
