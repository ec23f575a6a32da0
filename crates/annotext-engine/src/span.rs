use serde::Serialize;

/// A byte range `[start, end)` into the annotated text.
///
/// Spans always fall on UTF-8 character boundaries, so slicing the source
/// with any span the engine produces is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if `offset` lies inside the half-open range.
    #[must_use]
    pub fn contains(self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Slices `text` with this span, or `None` if it is out of bounds or
    /// splits a character.
    pub fn slice(self, text: &str) -> Option<&str> {
        text.get(self.start..self.end)
    }

    /// Converts byte offsets to UTF-16 code unit offsets within `text`.
    ///
    /// Hosts on the JVM or in a browser index strings by UTF-16 code units.
    pub fn to_utf16(self, text: &str) -> (usize, usize) {
        let units = |upto: usize| -> usize {
            text.get(..upto.min(text.len()))
                .map_or(0, |s| s.chars().map(char::len_utf16).sum())
        };
        let start = units(self.start);
        let end = start + text.get(self.start..self.end).map_or(0, |s| {
            s.chars().map(char::len_utf16).sum::<usize>()
        });
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(3, 3).is_empty());
        assert!(Span::new(5, 3).is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let sp = Span::new(2, 4);
        assert!(!sp.contains(1));
        assert!(sp.contains(2));
        assert!(sp.contains(3));
        assert!(!sp.contains(4));
    }

    #[test]
    fn slice_rejects_split_characters() {
        let text = "안녕 @bob";
        assert_eq!(Span::new(0, 3).slice(text), Some("안"));
        assert_eq!(Span::new(0, 2).slice(text), None);
        assert_eq!(Span::new(8, 20).slice(text), None);
    }

    #[test]
    fn utf16_offsets_for_ascii_match_bytes() {
        assert_eq!(Span::new(6, 12).to_utf16("hello @alice"), (6, 12));
    }

    #[test]
    fn utf16_offsets_for_hangul_and_astral() {
        // 안녕 is 6 bytes / 2 units, the emoji is 4 bytes / 2 units
        let text = "안녕🙂 @bob";
        let at = text.find('@').unwrap();
        assert_eq!(Span::new(at, text.len()).to_utf16(text), (5, 9));
    }
}
