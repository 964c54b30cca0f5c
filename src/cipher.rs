/// Mirror lowercase ASCII letters (`a <-> z`, `b <-> y`, ...).
///
/// Anything that is not `a..=z` is copied through untouched. The mapping is its
/// own inverse.
pub fn decode_cipher(text: &str) -> String {
    text.chars().map(mirror).collect()
}

#[inline]
fn mirror(c: char) -> char {
    if c.is_ascii_lowercase() {
        (b'z' - (c as u8 - b'a')) as char
    } else {
        c
    }
}
