//! Refill behavior: productions that straddle buffer boundaries, inputs much
//! larger than the buffer, and sources that deliver bytes a few at a time.

mod helpers;

use helpers::{record, Ev, Recorder, Trickle};
use pretty_assertions::assert_eq;
use srcfax::{Error, SyntaxError, XmlParser};

const BLOCK_SIZE: usize = 4096;
const BUFFER_SIZE: usize = 16 * 16 * BLOCK_SIZE;

fn total_text(events: &[Ev]) -> usize {
    events
        .iter()
        .filter_map(|e| match e {
            Ev::Text(t) => Some(t.len()),
            _ => None,
        })
        .sum()
}

#[test]
fn comment_terminator_straddles_refill() {
    let run = "x".repeat(BUFFER_SIZE);
    let comment = "c".repeat(5000);
    let xml = format!("<a>{}<!--{}--></a>", run, comment);
    let events = record(xml.as_bytes()).unwrap();
    assert_eq!(total_text(&events), BUFFER_SIZE);
    assert!(events.contains(&Ev::Comment(comment)));
    assert_eq!(events.last(), Some(&Ev::EndDocument));
}

#[test]
fn cdata_terminator_straddles_refill() {
    let run = "x".repeat(BUFFER_SIZE);
    let cdata = "y".repeat(5000);
    let xml = format!("<a>{}<![CDATA[{}]]></a>", run, cdata);
    let events = record(xml.as_bytes()).unwrap();
    assert_eq!(total_text(&events), BUFFER_SIZE);
    assert!(events.contains(&Ev::CData(cdata)));
}

#[test]
fn tags_across_many_refills() {
    // more than a buffer's worth of elements, so tags land on every
    // alignment relative to the refill boundaries
    let mut xml = String::from("<a>");
    let inner = 100_000;
    for _ in 0..inner {
        xml.push_str("<b>yyyy</b>");
    }
    xml.push_str("</a>");
    let events = record(xml.as_bytes()).unwrap();
    let starts = events.iter().filter(|e| matches!(e, Ev::Start(..))).count();
    let ends = events.iter().filter(|e| matches!(e, Ev::End(..))).count();
    assert_eq!(starts, inner + 1);
    assert_eq!(ends, inner + 1);
    assert_eq!(total_text(&events), 4 * inner);
}

#[test]
fn comment_larger_than_buffer_window_is_unterminated() {
    let comment = "c".repeat(2 * BUFFER_SIZE);
    let xml = format!("<a><!--{}--></a>", comment);
    assert!(matches!(
        record(xml.as_bytes()),
        Err(Error::Syntax(SyntaxError::UnclosedComment))
    ));
}

#[test]
fn trickling_reads_produce_the_same_events() {
    // no XML declaration: the prolog is parsed from the first read alone
    let xml = b"<a x=\"1\"><b>hi</b>&amp;<!--c--><![CDATA[z]]></a>";
    let baseline = record(&xml[..]).unwrap();
    for chunk in [8, 16, 64, 1024] {
        let events = record(Trickle::new(xml, chunk)).unwrap();
        assert_eq!(events, baseline, "chunk size {}", chunk);
    }
}

#[test]
fn total_bytes_counts_every_byte_read() {
    let xml = format!("<a>{}</a>", "x".repeat(3 * BUFFER_SIZE));
    let mut parser = XmlParser::new(xml.as_bytes(), Recorder::default());
    parser.parse().unwrap();
    assert_eq!(parser.total_bytes(), xml.len() as u64);
}

#[test]
fn long_text_arrives_in_multiple_character_events() {
    let run = "x".repeat(2 * BUFFER_SIZE);
    let xml = format!("<a>{}</a>", run);
    let events = record(xml.as_bytes()).unwrap();
    let pieces = events
        .iter()
        .filter(|e| matches!(e, Ev::Text(_)))
        .count();
    assert!(pieces > 1);
    assert_eq!(total_text(&events), 2 * BUFFER_SIZE);
}
