//! Layout primitives for the CodeMosaic template assembler.
//!
//! This crate provides the language-neutral building blocks used by the
//! fragment types to emit indentation-correct text:
//!
//! - [`Indent`] - Indentation configuration
//! - [`Chunk`] - Intermediate representation for pieces of output
//! - [`CodeBuilder`] - Fluent API for building indented text
//! - [`normalize_block`] - Body-template normalization (dedent, trim edges)

mod chunk;
mod code_builder;
mod indent;
mod text;

pub use chunk::Chunk;
pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use text::normalize_block;
