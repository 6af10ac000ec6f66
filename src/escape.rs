//! Manage xml character escapes

use memchr::memchr3_iter;
use std::borrow::Cow;

/// Escapes the characters that cannot appear literally in XML character
/// content, replacing `<`, `>` and `&` with `&lt;`, `&gt;` and `&amp;`.
///
/// Borrows the input unchanged when nothing needs escaping. Quote characters
/// are left alone, so the result is suitable for text content but not for
/// attribute values.
pub fn escape(raw: &[u8]) -> Cow<'_, [u8]> {
    let mut escaped = None;
    let mut last = 0;
    for i in memchr3_iter(b'<', b'>', b'&', raw) {
        let buf = escaped.get_or_insert_with(|| Vec::with_capacity(raw.len() + 4));
        buf.extend_from_slice(&raw[last..i]);
        match raw[i] {
            b'<' => buf.extend_from_slice(b"&lt;"),
            b'>' => buf.extend_from_slice(b"&gt;"),
            _ => buf.extend_from_slice(b"&amp;"),
        }
        last = i + 1;
    }
    match escaped {
        Some(mut buf) => {
            buf.extend_from_slice(&raw[last..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(raw),
    }
}
