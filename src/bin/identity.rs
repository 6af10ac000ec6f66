//! An identity transformation: parses the XML document on standard input and
//! re-serializes it to standard output. The output is equivalent XML — empty
//! elements are collapsed to the `<name/>` form, decoded character entities
//! are re-escaped, and insignificant whitespace after comments is dropped.

use std::io::{self, BufWriter};
use std::process::exit;
use std::time::Instant;

use srcfax::{IdentityWriter, XmlParser};

fn main() {
    let start_time = Instant::now();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let writer = IdentityWriter::new(BufWriter::new(stdout.lock()));
    let mut parser = XmlParser::new(stdin.lock(), writer);
    if let Err(e) = parser.parse() {
        eprintln!("parser error : {}", e);
        exit(1);
    }
    let total_bytes = parser.total_bytes();
    if let Err(e) = parser.into_handler().finish() {
        eprintln!("output error : {}", e);
        exit(1);
    }
    let elapsed = start_time.elapsed().as_secs_f64();
    eprintln!();
    eprintln!("{} bytes", total_bytes);
    eprintln!("{:.3} sec", elapsed);
}
