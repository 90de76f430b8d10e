//! Indentation configuration for rendered output.

/// The whitespace written once per nesting level of rendered output.
///
/// Templates pick an indent unit up front; fragments stay
/// indentation-agnostic and the builder applies the unit when it emits
/// lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Four spaces (Python-style targets, the default).
    pub const PYTHON: Self = Self("    ");

    /// Two spaces (JavaScript/TypeScript-style targets).
    pub const TYPESCRIPT: Self = Self("  ");

    /// A tab character.
    pub const TAB: Self = Self("\t");

    /// The string written per indent level.
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PYTHON
    }
}
