//! Utility functions for integration tests

#![allow(dead_code)]

use srcfax::name::QName;
use srcfax::{Result, XmlHandler, XmlParser};
use std::io::Read;

/// An owned copy of one parse event, for comparing whole event sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ev {
    StartDocument,
    Decl(String, Option<String>, Option<String>),
    /// qname, prefix, local name
    Start(String, String, String),
    End(String, String, String),
    Text(String),
    /// qname, prefix, local name, value
    Attr(String, String, String, String),
    Ns(String, String),
    Comment(String),
    CData(String),
    Pi(String, String),
    EndDocument,
}

fn s(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn split(name: QName) -> (String, String, String) {
    (
        s(name.as_bytes()),
        name.prefix().map_or_else(String::new, |p| s(p.as_bytes())),
        s(name.local_name().as_bytes()),
    )
}

/// Records every event it receives, copying the borrowed payloads.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<Ev>,
}

impl XmlHandler for Recorder {
    fn start_document(&mut self) {
        self.events.push(Ev::StartDocument);
    }

    fn xml_declaration(&mut self, version: &[u8], encoding: Option<&[u8]>, standalone: Option<&[u8]>) {
        self.events.push(Ev::Decl(
            s(version),
            encoding.map(s),
            standalone.map(s),
        ));
    }

    fn start_tag(&mut self, name: QName) {
        let (qname, prefix, local) = split(name);
        self.events.push(Ev::Start(qname, prefix, local));
    }

    fn end_tag(&mut self, name: QName) {
        let (qname, prefix, local) = split(name);
        self.events.push(Ev::End(qname, prefix, local));
    }

    fn characters(&mut self, text: &[u8]) {
        self.events.push(Ev::Text(s(text)));
    }

    fn attribute(&mut self, name: QName, value: &[u8]) {
        let (qname, prefix, local) = split(name);
        self.events.push(Ev::Attr(qname, prefix, local, s(value)));
    }

    fn namespace(&mut self, prefix: &[u8], uri: &[u8]) {
        self.events.push(Ev::Ns(s(prefix), s(uri)));
    }

    fn comment(&mut self, text: &[u8]) {
        self.events.push(Ev::Comment(s(text)));
    }

    fn cdata(&mut self, text: &[u8]) {
        self.events.push(Ev::CData(s(text)));
    }

    fn processing_instruction(&mut self, target: &[u8], data: &[u8]) {
        self.events.push(Ev::Pi(s(target), s(data)));
    }

    fn end_document(&mut self) {
        self.events.push(Ev::EndDocument);
    }
}

/// Parses `input` and returns the recorded event sequence.
pub fn record<R: Read>(input: R) -> Result<Vec<Ev>> {
    let mut parser = XmlParser::new(input, Recorder::default());
    parser.parse()?;
    Ok(parser.into_handler().events)
}

/// Shorthand for [`record`] over a string.
pub fn record_str(xml: &str) -> Result<Vec<Ev>> {
    record(xml.as_bytes())
}

/// A reader that returns at most `chunk` bytes per `read` call, exercising
/// the parser over arbitrarily small refills.
pub struct Trickle<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl<'a> Trickle<'a> {
    pub fn new(data: &'a [u8], chunk: usize) -> Self {
        assert!(chunk > 0);
        Self { data, chunk }
    }
}

impl<'a> Read for Trickle<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Convenience constructors for expected events.
pub fn start(qname: &str) -> Ev {
    let name = QName(qname.as_bytes());
    let (qname, prefix, local) = split(name);
    Ev::Start(qname, prefix, local)
}

pub fn end(qname: &str) -> Ev {
    let name = QName(qname.as_bytes());
    let (qname, prefix, local) = split(name);
    Ev::End(qname, prefix, local)
}

pub fn attr(qname: &str, value: &str) -> Ev {
    let name = QName(qname.as_bytes());
    let (qname, prefix, local) = split(name);
    Ev::Attr(qname, prefix, local, value.to_string())
}

pub fn text(content: &str) -> Ev {
    Ev::Text(content.to_string())
}
