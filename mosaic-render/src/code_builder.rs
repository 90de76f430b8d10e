//! Code builder utility for emitting properly indented text.

use crate::{Chunk, Indent};

/// Fluent API for building indented text.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for incremental assembly.
///
/// # Example (Consuming API)
///
/// ```
/// use codemosaic_render::CodeBuilder;
///
/// let code = CodeBuilder::default()
///     .line("def main():")
///     .indent()
///     .line("print('hello')")
///     .dedent()
///     .build();
///
/// assert_eq!(code, "def main():\n    print('hello')\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use codemosaic_render::CodeBuilder;
///
/// let mut builder = CodeBuilder::python();
/// builder
///     .push_line("def main():")
///     .push_indent()
///     .push_line("pass")
///     .push_dedent();
/// let code = builder.build();
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Python default).
    pub fn python() -> Self {
        Self::new(Indent::PYTHON)
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Apply a single chunk at the current indentation level.
    pub fn apply(&mut self, chunk: Chunk) -> &mut Self {
        match chunk {
            Chunk::Line(s) => {
                self.push_line(&s);
            }
            Chunk::Blank => {
                self.push_blank();
            }
            Chunk::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for c in body {
                    self.apply(c);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
        self
    }

    // =========================================================================
    // Consuming API - for chained construction
    // =========================================================================

    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with automatic indentation.
    ///
    /// # Example
    ///
    /// ```
    /// use codemosaic_render::CodeBuilder;
    ///
    /// let code = CodeBuilder::python()
    ///     .block("class Foo:", |b: CodeBuilder| b.line("pass"))
    ///     .build();
    /// ```
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent()
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::python()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::python().line("x = 1").build();
        assert_eq!(code, "x = 1\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::python()
            .line("def main():")
            .indent()
            .line("print('hello')")
            .dedent()
            .build();

        assert_eq!(code, "def main():\n    print('hello')\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::python()
            .block("class Foo:", |b| b.line("pass"))
            .build();

        assert_eq!(code, "class Foo:\n    pass\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::python()
            .line("import os")
            .blank()
            .line("def main():")
            .build();

        assert_eq!(code, "import os\n\ndef main():\n");
    }

    #[test]
    fn test_conditional() {
        let with_base = CodeBuilder::python()
            .when(true, |b| b.line("class Foo(Base):"))
            .build();

        let without_base = CodeBuilder::python()
            .when(false, |b| b.line("class Foo(Base):"))
            .build();

        assert_eq!(with_base, "class Foo(Base):\n");
        assert_eq!(without_base, "");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::python()
            .line("class Color:")
            .indent()
            .each(["RED", "GREEN", "BLUE"], |b, color| {
                b.line(&format!("{} = auto()", color))
            })
            .dedent()
            .build();

        assert_eq!(
            code,
            "class Color:\n    RED = auto()\n    GREEN = auto()\n    BLUE = auto()\n"
        );
    }

    #[test]
    fn test_tab_indent() {
        let code = CodeBuilder::new(Indent::TAB)
            .line("def f():")
            .indent()
            .line("pass")
            .dedent()
            .build();
        assert_eq!(code, "def f():\n\tpass\n");
    }

    #[test]
    fn test_typescript_indent() {
        let code = CodeBuilder::typescript()
            .line("function foo() {")
            .indent()
            .line("return 1;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_mutable_api_basic() {
        let mut builder = CodeBuilder::python();
        builder.push_line("x = 1").push_blank().push_line("y = 2");
        assert_eq!(builder.build(), "x = 1\n\ny = 2\n");
    }

    #[test]
    fn test_apply_line_and_blank() {
        let mut builder = CodeBuilder::python();
        builder.apply(Chunk::line("a = 1"));
        builder.apply(Chunk::blank());
        builder.apply(Chunk::line("b = 2"));
        assert_eq!(builder.build(), "a = 1\n\nb = 2\n");
    }

    #[test]
    fn test_apply_block() {
        let mut builder = CodeBuilder::python();
        builder.apply(Chunk::block(
            "def main():",
            vec![Chunk::line("print('hello')")],
            None,
        ));
        assert_eq!(builder.build(), "def main():\n    print('hello')\n");
    }

    #[test]
    fn test_apply_nested_blocks() {
        let mut builder = CodeBuilder::python();
        builder.apply(Chunk::block(
            "class Foo:",
            vec![Chunk::block(
                "def bar(self):",
                vec![Chunk::line("return 1")],
                None,
            )],
            None,
        ));
        assert_eq!(
            builder.build(),
            "class Foo:\n    def bar(self):\n        return 1\n"
        );
    }

    #[test]
    fn test_apply_block_with_close() {
        let mut builder = CodeBuilder::typescript();
        builder.apply(Chunk::block(
            "function foo() {",
            vec![Chunk::line("return 1;")],
            Some("}".to_string()),
        ));
        assert_eq!(builder.build(), "function foo() {\n  return 1;\n}\n");
    }

}
