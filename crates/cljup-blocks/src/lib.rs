//! Marker-delimited blocks for shell run-commands files.
//!
//! Every edit cljup makes to a shell startup file is wrapped in a pair of
//! comment lines tagged with a block id:
//!
//! ```text
//! # cljup:block:clojure-path
//! export PATH="$HOME/.clojure/bin:$PATH"
//! # /cljup:block:clojure-path
//! ```
//!
//! The opening marker is what makes an edit idempotent: once it is present
//! the block is never written again. Blocks are only ever appended; content
//! outside them is never touched.

pub mod error;
pub mod file;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use file::{append_block_to_file, file_has_block};
pub use parser::has_block;
pub use writer::append_text;
