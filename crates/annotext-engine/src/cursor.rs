use crate::span::Span;

/// A forward-only cursor over a string slice.
///
/// The index always sits on a UTF-8 character boundary: [`Cursor::bump`]
/// steps a whole character and [`Cursor::eat_while`] only consumes ASCII
/// bytes, which never occur inside a multi-byte sequence.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.s.get(self.i..)?.chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Consumes ASCII bytes while `pred` holds and returns the consumed span.
    ///
    /// Non-ASCII bytes always stop the run.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> Span {
        let start = self.i;
        while let Some(b) = self.peek() {
            if !b.is_ascii() || !pred(b) {
                break;
            }
            self.i += 1;
        }
        Span::new(start, self.i)
    }
}
