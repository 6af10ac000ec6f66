//! Qualified names of elements and attributes: `prefix:local-name` or just
//! `local-name`.

use memchr::memchr;
use std::fmt;

/// A qualified name over a borrowed byte slice, such as `ns:unit` or `unit`.
///
/// The slice borrows from the parser's refill buffer and is valid only for
/// the duration of the handler call that received it; copy the bytes out if
/// they must be retained.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct QName<'a>(pub &'a [u8]);

impl<'a> QName<'a> {
    /// The whole qualified name, prefix included.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// The part of the name after the first `:`, or the whole name when there
    /// is no prefix.
    pub fn local_name(&self) -> LocalName<'a> {
        LocalName(self.index().map_or(self.0, |i| &self.0[i + 1..]))
    }

    /// The part of the name before the first `:`, if any.
    ///
    /// `QName(b"xsi:type").prefix()` is `Some(Prefix(b"xsi"))`;
    /// `QName(b"type").prefix()` is `None`.
    pub fn prefix(&self) -> Option<Prefix<'a>> {
        self.index().map(|i| Prefix(&self.0[..i]))
    }

    #[inline]
    fn index(&self) -> Option<usize> {
        memchr(b':', self.0)
    }
}

impl<'a> fmt::Debug for QName<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "QName({:?})", String::from_utf8_lossy(self.0))
    }
}

/// The local part of a [`QName`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocalName<'a>(&'a [u8]);

impl<'a> LocalName<'a> {
    /// The raw bytes of the local name.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }
}

impl<'a> AsRef<[u8]> for LocalName<'a> {
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl<'a> fmt::Debug for LocalName<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalName({:?})", String::from_utf8_lossy(self.0))
    }
}

/// The namespace prefix of a [`QName`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Prefix<'a>(&'a [u8]);

impl<'a> Prefix<'a> {
    /// The raw bytes of the prefix.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }
}

impl<'a> AsRef<[u8]> for Prefix<'a> {
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl<'a> fmt::Debug for Prefix<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Prefix({:?})", String::from_utf8_lossy(self.0))
    }
}
