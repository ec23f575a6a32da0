/// Mention annotation type with owned delimiter and handle class.
pub struct Mention;

impl Mention {
    /// The character that introduces a mention.
    pub const SIGIL: u8 = b'@';

    /// Returns true for bytes allowed in a handle: `[a-zA-Z0-9_-]`.
    pub fn is_handle_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
    }
}
