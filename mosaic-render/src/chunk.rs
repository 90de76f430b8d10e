//! Intermediate representation for pieces of rendered output.

/// A piece of rendered output.
///
/// Chunks form an intermediate representation between fragment types and
/// the final string, so that nesting and indentation can be decided by the
/// container rather than by the fragment that produced the text.
#[derive(Debug, Clone, PartialEq)]
pub enum Chunk {
    /// A single line (will have a newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A header line followed by an indented body and an optional closing line.
    Block {
        header: String,
        body: Vec<Chunk>,
        close: Option<String>,
    },
}

impl Chunk {
    /// Create a line chunk.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line chunk.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block chunk.
    pub fn block(header: impl Into<String>, body: Vec<Chunk>, close: Option<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

}
