//! Re-serialization of parse events back into XML.

use crate::escape::escape;
use crate::handler::XmlHandler;
use crate::name::QName;
use std::io::{self, Write};

/// A handler that writes the events it receives back out as XML, producing a
/// document equivalent to the one being parsed.
///
/// Start tags are held open until the next event so attribute and namespace
/// events can be appended; an end tag arriving while its start tag is still
/// open collapses the element to the `<name/>` form. Character content is
/// re-escaped with [`escape`]; attribute values, comments and CDATA content
/// are written back verbatim, matching what the parser delivered.
///
/// Handler methods cannot fail, so the first write error is remembered,
/// further output is suppressed, and the error is reported by
/// [`finish`](Self::finish).
pub struct IdentityWriter<W: Write> {
    inner: W,
    open_tag: bool,
    error: Option<io::Error>,
}

impl<W: Write> IdentityWriter<W> {
    /// Creates a writer over any output sink. Wrap slow sinks in a
    /// [`BufWriter`](io::BufWriter): the writer emits many small pieces.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            open_tag: false,
            error: None,
        }
    }

    /// Flushes and returns the underlying sink, or the first error that
    /// occurred while writing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.error.is_none() {
            if let Err(e) = self.inner.write_all(bytes) {
                self.error = Some(e);
            }
        }
    }

    fn close_open_tag(&mut self) {
        if self.open_tag {
            self.open_tag = false;
            self.write(b">");
        }
    }
}

impl<W: Write> XmlHandler for IdentityWriter<W> {
    fn xml_declaration(
        &mut self,
        version: &[u8],
        encoding: Option<&[u8]>,
        standalone: Option<&[u8]>,
    ) {
        self.write(b"<?xml version=\"");
        self.write(version);
        self.write(b"\"");
        if let Some(encoding) = encoding {
            self.write(b" encoding=\"");
            self.write(encoding);
            self.write(b"\"");
        }
        if let Some(standalone) = standalone {
            self.write(b" standalone=\"");
            self.write(standalone);
            self.write(b"\"");
        }
        self.write(b"?>\n");
    }

    fn start_tag(&mut self, name: QName<'_>) {
        self.close_open_tag();
        self.write(b"<");
        self.write(name.as_bytes());
        self.open_tag = true;
    }

    fn end_tag(&mut self, name: QName<'_>) {
        if self.open_tag {
            self.open_tag = false;
            self.write(b"/>");
        } else {
            self.write(b"</");
            self.write(name.as_bytes());
            self.write(b">");
        }
    }

    fn characters(&mut self, text: &[u8]) {
        self.close_open_tag();
        let escaped = escape(text);
        self.write(&escaped);
    }

    fn attribute(&mut self, name: QName<'_>, value: &[u8]) {
        self.write(b" ");
        self.write(name.as_bytes());
        self.write(b"=\"");
        self.write(value);
        self.write(b"\"");
    }

    fn namespace(&mut self, prefix: &[u8], uri: &[u8]) {
        self.write(b" xmlns");
        if !prefix.is_empty() {
            self.write(b":");
            self.write(prefix);
        }
        self.write(b"=\"");
        self.write(uri);
        self.write(b"\"");
    }

    fn comment(&mut self, text: &[u8]) {
        self.close_open_tag();
        self.write(b"<!--");
        self.write(text);
        self.write(b"-->");
    }

    fn cdata(&mut self, text: &[u8]) {
        self.close_open_tag();
        self.write(b"<![CDATA[");
        self.write(text);
        self.write(b"]]>");
    }

    fn processing_instruction(&mut self, target: &[u8], data: &[u8]) {
        self.close_open_tag();
        self.write(b"<?");
        self.write(target);
        if !data.is_empty() {
            self.write(b" ");
            self.write(data);
        }
        self.write(b"?>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::XmlParser;
    use pretty_assertions::assert_eq;

    fn transform(xml: &str) -> String {
        let mut parser = XmlParser::new(xml.as_bytes(), IdentityWriter::new(Vec::new()));
        parser.parse().unwrap();
        String::from_utf8(parser.into_handler().finish().unwrap()).unwrap()
    }

    #[test]
    fn plain_element() {
        assert_eq!(transform("<a>text</a>"), "<a>text</a>");
    }

    #[test]
    fn empty_element_collapses() {
        assert_eq!(transform("<a></a>"), "<a/>");
        assert_eq!(transform("<a/>"), "<a/>");
    }

    #[test]
    fn attributes_and_namespaces() {
        assert_eq!(
            transform(r#"<n:a xmlns:n="u" n:x="1"/>"#),
            r#"<n:a xmlns:n="u" n:x="1"/>"#
        );
    }

    #[test]
    fn declaration() {
        assert_eq!(
            transform("<?xml version=\"1.0\" encoding=\"UTF-8\"?><a/>"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a/>"
        );
    }

    #[test]
    fn text_is_reescaped() {
        assert_eq!(transform("<a>&lt;b&gt;&amp;</a>"), "<a>&lt;b&gt;&amp;</a>");
    }

    #[test]
    fn decoded_quote_entities_stay_literal() {
        assert_eq!(transform("<a>&apos;&quot;</a>"), "<a>'\"</a>");
    }

    #[test]
    fn comment_and_cdata_verbatim() {
        assert_eq!(
            transform("<a><!--c--><![CDATA[x<y]]></a>"),
            "<a><!--c--><![CDATA[x<y]]></a>"
        );
    }

    #[test]
    fn processing_instruction_roundtrip() {
        assert_eq!(
            transform("<a><?php echo 1; ?></a>"),
            "<a><?php echo 1; ?></a>"
        );
    }
}
