//! Produces a Markdown report tallying every kind of XML construct — start
//! tags, end tags, attributes, character sections, and so on — for a
//! document on standard input. Performance statistics go to standard error.

use std::cmp::max;
use std::io;
use std::process::exit;
use std::time::Instant;

use srcfax::name::QName;
use srcfax::{XmlHandler, XmlParser};

#[derive(Default)]
struct XmlStats {
    xml_declaration_count: usize,
    start_tag_count: usize,
    end_tag_count: usize,
    characters_count: usize,
    attribute_count: usize,
    namespace_count: usize,
    comment_count: usize,
    cdata_count: usize,
    processing_instruction_count: usize,
    unit_count: usize,
    loc: usize,
}

fn count_newlines(text: &[u8]) -> usize {
    text.iter().filter(|&&b| b == b'\n').count()
}

impl XmlHandler for XmlStats {
    fn xml_declaration(&mut self, _: &[u8], _: Option<&[u8]>, _: Option<&[u8]>) {
        self.xml_declaration_count += 1;
    }

    fn start_tag(&mut self, name: QName) {
        self.start_tag_count += 1;
        if name.local_name().as_bytes() == b"unit" {
            self.unit_count += 1;
        }
    }

    fn end_tag(&mut self, _: QName) {
        self.end_tag_count += 1;
    }

    fn characters(&mut self, text: &[u8]) {
        self.characters_count += 1;
        self.loc += count_newlines(text);
    }

    fn attribute(&mut self, _: QName, _: &[u8]) {
        self.attribute_count += 1;
    }

    fn namespace(&mut self, _: &[u8], _: &[u8]) {
        self.namespace_count += 1;
    }

    fn comment(&mut self, _: &[u8]) {
        self.comment_count += 1;
    }

    fn cdata(&mut self, text: &[u8]) {
        self.cdata_count += 1;
        self.loc += count_newlines(text);
    }

    fn processing_instruction(&mut self, _: &[u8], _: &[u8]) {
        self.processing_instruction_count += 1;
    }
}

fn main() {
    let start_time = Instant::now();
    let stdin = io::stdin();
    let mut parser = XmlParser::new(stdin.lock(), XmlStats::default());
    if let Err(e) = parser.parse() {
        eprintln!("parser error : {}", e);
        exit(1);
    }
    let elapsed = start_time.elapsed().as_secs_f64();
    let total_bytes = parser.total_bytes();
    let stats = parser.into_handler();

    let mloc_per_sec = stats.loc as f64 / elapsed / 1_000_000.0;
    let width = max(5, total_bytes.to_string().len());

    println!("# xmlstats");
    println!("| Measure                  | {:>width$} |", "Value");
    println!("|:-------------------------|-{:->width$}:|", "");
    println!("| XML declarations         | {:>width$} |", stats.xml_declaration_count);
    println!("| Start tags               | {:>width$} |", stats.start_tag_count);
    println!("| End tags                 | {:>width$} |", stats.end_tag_count);
    println!("| Attributes               | {:>width$} |", stats.attribute_count);
    println!("| Namespaces               | {:>width$} |", stats.namespace_count);
    println!("| Character sections       | {:>width$} |", stats.characters_count);
    println!("| CDATA sections           | {:>width$} |", stats.cdata_count);
    println!("| Comments                 | {:>width$} |", stats.comment_count);
    println!("| Processing instructions  | {:>width$} |", stats.processing_instruction_count);
    println!("| Units                    | {:>width$} |", stats.unit_count);
    println!("| LOC                      | {:>width$} |", stats.loc);
    eprintln!();
    eprintln!("{} bytes", total_bytes);
    eprintln!("{:.3} sec", elapsed);
    eprintln!("{:.3} MLOC/sec", mloc_per_sec);
}
