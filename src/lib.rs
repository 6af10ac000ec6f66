//! High throughput streaming parser for large XML documents, built for the
//! srcML code-as-XML format.
//!
//! ## Description
//!
//! - [`XmlParser`]: a push parser that reads its source incrementally through
//!   a fixed refill buffer and dispatches every XML event to a handler
//! - [`XmlHandler`]: the event interface, eleven events with no-op defaults
//! - [`IdentityWriter`]: a handler that re-serializes the events, turning the
//!   parser into an identity transformation
//!
//! Event payloads are borrowed slices into the refill buffer — nothing is
//! copied on the way to the handler, and a slice is only valid during the
//! handler call that receives it.
//!
//! ## Example
//!
//! Count srcML constructs from an in-memory document:
//!
//! ```rust
//! use srcfax::name::QName;
//! use srcfax::{XmlHandler, XmlParser};
//!
//! #[derive(Default)]
//! struct Facts {
//!     functions: usize,
//!     expressions: usize,
//! }
//!
//! impl XmlHandler for Facts {
//!     fn start_tag(&mut self, name: QName) {
//!         match name.local_name().as_bytes() {
//!             b"function" => self.functions += 1,
//!             b"expr" => self.expressions += 1,
//!             _ => (),
//!         }
//!     }
//! }
//!
//! let xml = br#"<unit><function><expr>a</expr><expr>b</expr></function></unit>"#;
//! let mut parser = XmlParser::new(&xml[..], Facts::default());
//! parser.parse().unwrap();
//!
//! assert_eq!(parser.handler().functions, 1);
//! assert_eq!(parser.handler().expressions, 2);
//! assert_eq!(parser.total_bytes(), xml.len() as u64);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod buffer;

pub mod errors;
pub mod escape;
pub mod handler;
pub mod name;
pub mod parser;
pub mod writer;

// reexports
pub use errors::{Error, Result, SyntaxError};
pub use handler::XmlHandler;
pub use parser::XmlParser;
pub use writer::IdentityWriter;
