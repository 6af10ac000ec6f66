//! The parser facade and its driving state machine.
//!
//! [`XmlParser`] binds an input source to a handler and walks the document in
//! three phases: the prolog (optional XML declaration and DOCTYPE), the body
//! (the document element and everything inside it), and the epilog (trailing
//! whitespace and comments). The body loop keeps at least one block (4 KiB)
//! in view before dispatching, so any production shorter than a block never
//! straddles a refill; comments, CDATA sections, processing instructions and
//! DOCTYPEs that do straddle one get a single refill retry.

pub(crate) mod scan;

use crate::buffer::{RefillBuffer, BLOCK_SIZE};
use crate::errors::{Error, Result, SyntaxError};
use crate::handler::XmlHandler;
use crate::name::QName;
use memchr::{memchr2, memmem};
use std::io::Read;

/// What the body loop decided to parse next, resolved from the first bytes
/// of the view before any mutation.
enum Production {
    Entity,
    Characters,
    Comment,
    CData,
    Pi,
    EndTag,
    StartTag,
    Invalid,
}

/// A streaming XML parser bound to an input source and a handler.
///
/// Created with [`new`](Self::new), driven to completion with
/// [`parse`](Self::parse). Any [`Read`] works as a source: a locked stdin, a
/// [`File`](std::fs::File), or an in-memory `&[u8]`. The handler receives
/// every event in document order with payloads borrowed from the internal
/// refill buffer; see [`XmlHandler`] for the borrowing contract.
pub struct XmlParser<R, H> {
    reader: R,
    handler: H,
    buffer: RefillBuffer,
    depth: usize,
    done_reading: bool,
    total_bytes: u64,
}

impl<R, H> XmlParser<R, H> {
    /// Shared access to the handler, e.g. to read collected results after
    /// [`parse`](Self::parse).
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Exclusive access to the handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consumes the parser, returning the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Cumulative number of bytes read from the input source.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

impl<R: Read, H: XmlHandler> XmlParser<R, H> {
    /// Creates a parser over `reader` dispatching to `handler`.
    pub fn new(reader: R, handler: H) -> Self {
        Self {
            reader,
            handler,
            buffer: RefillBuffer::new(),
            depth: 0,
            done_reading: false,
            total_bytes: 0,
        }
    }

    /// Parses the document to completion, dispatching events to the handler.
    ///
    /// Returns [`Error::EmptyInput`] when the source yields no bytes at all,
    /// [`Error::Io`] when a read fails, and [`Error::Syntax`] on any grammar
    /// violation. All errors are fatal; there is no recovery.
    pub fn parse(&mut self) -> Result<()> {
        self.depth = 0;
        self.done_reading = false;
        self.total_bytes = 0;
        self.buffer.reset();

        let read = self.buffer.refill(&mut self.reader)?;
        if read == 0 {
            return Err(Error::EmptyInput);
        }
        self.total_bytes = read as u64;
        self.handler.start_document();

        self.skip_whitespace();
        if scan::is_xml_decl(self.buffer.view()) {
            self.xml_declaration()?;
        }
        if scan::is_doctype(self.buffer.view()) {
            self.doctype()?;
        }

        loop {
            if self.done_reading {
                if self.buffer.view().is_empty() {
                    return Err(if self.depth > 0 {
                        Error::Syntax(SyntaxError::UnexpectedEof)
                    } else {
                        // input exhausted without a document element
                        Error::Syntax(SyntaxError::InvalidDocument)
                    });
                }
            } else if self.buffer.view().len() < BLOCK_SIZE {
                self.refill()?;
                if self.buffer.view().is_empty() {
                    continue;
                }
            }

            let next = {
                let view = self.buffer.view();
                match view[0] {
                    b'&' => Production::Entity,
                    b if b != b'<' => Production::Characters,
                    _ if scan::is_comment(view) => Production::Comment,
                    _ if scan::is_cdata(view) => Production::CData,
                    _ => match view.get(1) {
                        Some(&b'?') => Production::Pi,
                        Some(&b'/') => Production::EndTag,
                        Some(&b) if scan::is_name_start(b) => Production::StartTag,
                        _ => Production::Invalid,
                    },
                }
            };
            match next {
                Production::Entity => self.entity_reference(),
                Production::Characters => self.characters(),
                Production::Comment => self.comment()?,
                Production::CData => self.cdata()?,
                Production::Pi => self.processing_instruction()?,
                Production::EndTag => {
                    self.end_tag()?;
                    if self.depth == 0 {
                        break;
                    }
                }
                Production::StartTag => {
                    if self.element()? {
                        break;
                    }
                }
                Production::Invalid => {
                    return Err(Error::Syntax(SyntaxError::InvalidDocument));
                }
            }
        }

        self.skip_whitespace();
        while scan::is_comment(self.buffer.view()) {
            self.comment()?;
        }
        if !self.buffer.view().is_empty() {
            return Err(Error::Syntax(SyntaxError::TrailingContent));
        }
        self.handler.end_document();
        Ok(())
    }

    /// One prefix-preserving read. A 0-byte read marks the end of input.
    fn refill(&mut self) -> Result<()> {
        let read = self.buffer.refill(&mut self.reader)?;
        if read == 0 {
            self.done_reading = true;
        }
        self.total_bytes += read as u64;
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        let n = scan::skip_whitespace(self.buffer.view(), 0);
        self.buffer.advance(n);
    }

    fn xml_declaration(&mut self) -> Result<()> {
        let view = self.buffer.view();
        let (decl, used) = scan::scan_xml_declaration(view)?;
        self.handler
            .xml_declaration(decl.version, decl.encoding, decl.standalone);
        self.buffer.advance(used);
        self.skip_whitespace();
        Ok(())
    }

    /// Skips `<!DOCTYPE …>` opaquely. No event is emitted.
    fn doctype(&mut self) -> Result<()> {
        self.buffer.advance(9);
        let mut end = scan::find_doctype_end(self.buffer.view());
        if end.is_none() && !self.done_reading {
            self.refill()?;
            end = scan::find_doctype_end(self.buffer.view());
        }
        let end = match end {
            Some(e) => e,
            None => return Err(Error::Syntax(SyntaxError::UnclosedDoctype)),
        };
        self.buffer.advance(end + 1);
        self.skip_whitespace();
        Ok(())
    }

    fn entity_reference(&mut self) {
        let (unescaped, used) = scan::scan_entity(self.buffer.view());
        self.handler.characters(unescaped);
        self.buffer.advance(used);
    }

    fn characters(&mut self) {
        let view = self.buffer.view();
        let end = memchr2(b'<', b'&', view).unwrap_or(view.len());
        self.handler.characters(&view[..end]);
        self.buffer.advance(end);
    }

    fn comment(&mut self) -> Result<()> {
        self.buffer.advance(4);
        let mut end = memmem::find(self.buffer.view(), b"-->");
        if end.is_none() && !self.done_reading {
            self.refill()?;
            end = memmem::find(self.buffer.view(), b"-->");
        }
        let end = match end {
            Some(e) => e,
            None => return Err(Error::Syntax(SyntaxError::UnclosedComment)),
        };
        let view = self.buffer.view();
        self.handler.comment(&view[..end]);
        self.buffer.advance(end + 3);
        self.skip_whitespace();
        Ok(())
    }

    fn cdata(&mut self) -> Result<()> {
        self.buffer.advance(9);
        let mut end = memmem::find(self.buffer.view(), b"]]>");
        if end.is_none() && !self.done_reading {
            self.refill()?;
            end = memmem::find(self.buffer.view(), b"]]>");
        }
        let end = match end {
            Some(e) => e,
            None => return Err(Error::Syntax(SyntaxError::UnclosedCData)),
        };
        let view = self.buffer.view();
        self.handler.cdata(&view[..end]);
        self.buffer.advance(end + 3);
        Ok(())
    }

    fn processing_instruction(&mut self) -> Result<()> {
        self.buffer.advance(2);
        let mut end = memmem::find(self.buffer.view(), b"?>");
        if end.is_none() && !self.done_reading {
            self.refill()?;
            end = memmem::find(self.buffer.view(), b"?>");
        }
        let end = match end {
            Some(e) => e,
            None => return Err(Error::Syntax(SyntaxError::UnclosedPI)),
        };
        let view = self.buffer.view();
        let (target, data) = scan::split_pi(&view[..end]);
        self.handler.processing_instruction(target, data);
        self.buffer.advance(end + 2);
        Ok(())
    }

    /// Parses a start tag with its attribute loop and terminator. Returns
    /// `true` when a self-closed document element ended the document.
    fn element(&mut self) -> Result<bool> {
        // Nothing below refills, so the absolute name range stays valid
        // through the attribute loop for the empty-element end event.
        let name_start = self.buffer.offset() + 1;
        let view = self.buffer.view();
        let (qname, used) = scan::scan_name(&view[1..])?;
        let name_len = qname.len();
        self.handler.start_tag(QName(qname));
        self.buffer.advance(1 + used);
        self.skip_whitespace();

        loop {
            let view = self.buffer.view();
            match view.first() {
                Some(&b) if scan::is_name_start(b) => {
                    if scan::is_namespace(view) {
                        let (prefix, uri, used) = scan::scan_namespace(view)?;
                        self.handler.namespace(prefix, uri);
                        self.buffer.advance(used);
                    } else {
                        let (qname, value, used) = scan::scan_attribute(view)?;
                        self.handler.attribute(QName(qname), value);
                        self.buffer.advance(used);
                    }
                    self.skip_whitespace();
                }
                _ => break,
            }
        }

        let view = self.buffer.view();
        if view.first() == Some(&b'>') {
            self.buffer.advance(1);
            self.depth += 1;
            Ok(false)
        } else if view.starts_with(b"/>") {
            let name = self.buffer.slice(name_start, name_len);
            self.handler.end_tag(QName(name));
            self.buffer.advance(2);
            Ok(self.depth == 0)
        } else {
            let name = self.buffer.slice(name_start, name_len);
            Err(Error::Syntax(SyntaxError::UnclosedTag(
                String::from_utf8_lossy(name).into_owned(),
            )))
        }
    }

    fn end_tag(&mut self) -> Result<()> {
        let view = self.buffer.view();
        let (qname, used) = scan::scan_name(&view[2..])?;
        let i = scan::skip_whitespace(view, 2 + used);
        if view.get(i) != Some(&b'>') {
            return Err(Error::Syntax(SyntaxError::UnclosedTag(
                String::from_utf8_lossy(qname).into_owned(),
            )));
        }
        if self.depth == 0 {
            return Err(Error::Syntax(SyntaxError::UnmatchedEndTag(
                String::from_utf8_lossy(qname).into_owned(),
            )));
        }
        self.handler.end_tag(QName(qname));
        self.buffer.advance(i + 1);
        self.depth -= 1;
        Ok(())
    }
}
