//! The event interface between the parser and its consumers.

use crate::name::QName;

/// Receiver of parse events, in strict document order.
///
/// Every method has a no-op default, so a handler implements only the events
/// it cares about. All byte-slice parameters (including the slice inside
/// [`QName`]) borrow from the parser's refill buffer and are valid **only for
/// the duration of the call**: the next production may refill the buffer and
/// overwrite them. Copy the bytes out before returning if they must be
/// retained.
///
/// Within one start tag, [`attribute`](Self::attribute) and
/// [`namespace`](Self::namespace) events arrive in lexical order between the
/// [`start_tag`](Self::start_tag) event and whatever follows the tag.
#[allow(unused_variables)]
pub trait XmlHandler {
    /// The first bytes of the document were read.
    fn start_document(&mut self) {}

    /// An XML declaration `<?xml version=".." encoding=".." standalone=".."?>`.
    ///
    /// `version` is always non-empty; `encoding` and `standalone` are present
    /// only when declared, and non-empty when present.
    fn xml_declaration(
        &mut self,
        version: &[u8],
        encoding: Option<&[u8]>,
        standalone: Option<&[u8]>,
    ) {
    }

    /// A start tag `<name …>` or the start-tag half of an empty element
    /// `<name …/>`.
    fn start_tag(&mut self, name: QName<'_>) {}

    /// An end tag `</name>` or the end-tag half of an empty element. Empty
    /// elements emit [`start_tag`](Self::start_tag) and `end_tag` with the
    /// same name and any attribute events in between.
    fn end_tag(&mut self, name: QName<'_>) {}

    /// Character content. Long text runs may arrive as several consecutive
    /// events; each decoded entity reference arrives as its own one-byte
    /// event.
    fn characters(&mut self, text: &[u8]) {}

    /// An attribute `name="value"` of the current start tag. The value is the
    /// raw bytes between the delimiters, without entity decoding.
    fn attribute(&mut self, name: QName<'_>, value: &[u8]) {}

    /// A namespace declaration `xmlns="uri"` (empty `prefix`) or
    /// `xmlns:prefix="uri"` of the current start tag.
    fn namespace(&mut self, prefix: &[u8], uri: &[u8]) {}

    /// A comment `<!--text-->`.
    fn comment(&mut self, text: &[u8]) {}

    /// A CDATA section `<![CDATA[text]]>`. The content is raw, with no
    /// entity decoding.
    fn cdata(&mut self, text: &[u8]) {}

    /// A processing instruction `<?target data?>`.
    fn processing_instruction(&mut self, target: &[u8], data: &[u8]) {}

    /// The epilog was consumed and the document is complete.
    fn end_document(&mut self) {}
}
