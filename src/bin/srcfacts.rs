//! Produces a report with various measures of source code.
//!
//! Input is an XML file in the srcML format on standard input; output is a
//! Markdown table with the measures. Performance statistics go to standard
//! error.

use std::cmp::max;
use std::io;
use std::process::exit;
use std::time::Instant;

use srcfax::name::QName;
use srcfax::{XmlHandler, XmlParser};

#[derive(Default)]
struct SrcFacts {
    url: String,
    text_size: usize,
    loc: usize,
    expr_count: usize,
    function_count: usize,
    class_count: usize,
    unit_count: usize,
    decl_count: usize,
    comment_count: usize,
    return_count: usize,
    line_comment_count: usize,
    string_count: usize,
}

fn count_newlines(text: &[u8]) -> usize {
    text.iter().filter(|&&b| b == b'\n').count()
}

impl XmlHandler for SrcFacts {
    fn start_tag(&mut self, name: QName) {
        match name.local_name().as_bytes() {
            b"expr" => self.expr_count += 1,
            b"decl" => self.decl_count += 1,
            b"comment" => self.comment_count += 1,
            b"function" => self.function_count += 1,
            b"unit" => self.unit_count += 1,
            b"class" => self.class_count += 1,
            b"return" => self.return_count += 1,
            _ => (),
        }
    }

    fn characters(&mut self, text: &[u8]) {
        self.loc += count_newlines(text);
        self.text_size += text.len();
    }

    fn cdata(&mut self, text: &[u8]) {
        self.loc += count_newlines(text);
        self.text_size += text.len();
    }

    fn attribute(&mut self, name: QName, value: &[u8]) {
        let local = name.local_name();
        if local.as_bytes() == b"url" {
            self.url = String::from_utf8_lossy(value).into_owned();
        } else if local.as_bytes() == b"type" && value == b"string" {
            self.string_count += 1;
        } else if local.as_bytes() == b"type" && value == b"line" {
            self.line_comment_count += 1;
        }
    }
}

fn main() {
    let start_time = Instant::now();
    let stdin = io::stdin();
    let mut parser = XmlParser::new(stdin.lock(), SrcFacts::default());
    if let Err(e) = parser.parse() {
        eprintln!("parser error : {}", e);
        exit(1);
    }
    let elapsed = start_time.elapsed().as_secs_f64();
    let total_bytes = parser.total_bytes();
    let facts = parser.into_handler();

    let files = max(facts.unit_count.saturating_sub(1), 1);
    let mloc_per_sec = facts.loc as f64 / elapsed / 1_000_000.0;
    let width = max(5, total_bytes.to_string().len());

    println!("# srcFacts: {}", facts.url);
    println!("| Measure      | {:>width$} |", "Value");
    println!("|:-------------|-{:->width$}:|", "");
    println!("| Characters   | {:>width$} |", facts.text_size);
    println!("| LOC          | {:>width$} |", facts.loc);
    println!("| Files        | {:>width$} |", files);
    println!("| Classes      | {:>width$} |", facts.class_count);
    println!("| Functions    | {:>width$} |", facts.function_count);
    println!("| Declarations | {:>width$} |", facts.decl_count);
    println!("| Expressions  | {:>width$} |", facts.expr_count);
    println!("| Comments     | {:>width$} |", facts.comment_count);
    println!("| Returns      | {:>width$} |", facts.return_count);
    println!("| Line Comments| {:>width$} |", facts.line_comment_count);
    println!("| Strings      | {:>width$} |", facts.string_count);
    eprintln!();
    eprintln!("{} bytes", total_bytes);
    eprintln!("{:.3} sec", elapsed);
    eprintln!("{:.3} MLOC/sec", mloc_per_sec);
}
