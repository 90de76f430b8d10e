//! Top-level template container and assembly.

use codemosaic_fragments::{Context, Fragment, Result};
use codemosaic_render::{CodeBuilder, Indent};

/// Top-level container for an ordered sequence of fragments.
///
/// Fragment insertion order determines emission order. The
/// `optimization_level` and `language` fields are opaque tags stored for
/// introspection by surrounding tooling; they never alter rendering.
///
/// Rendering is a pure computation over the fragment list and the supplied
/// context, so a template may be rendered concurrently from several threads
/// as long as callers serialize `add_fragment`/`add_fragments` against
/// in-flight renders.
#[derive(Debug, Clone, Default)]
pub struct MosaicTemplate {
    name: String,
    optimization_level: Option<String>,
    language: Option<String>,
    indent: Indent,
    fragments: Vec<Fragment>,
}

impl MosaicTemplate {
    /// Create a template with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the optimization tag (opaque; passed through, never interpreted).
    pub fn optimization_level(mut self, level: impl Into<String>) -> Self {
        self.optimization_level = Some(level.into());
        self
    }

    /// Set the target-language tag (opaque; documentation/output hinting only).
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the indentation used when rendering.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// The template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The optimization tag, if set.
    pub fn optimization_tag(&self) -> Option<&str> {
        self.optimization_level.as_deref()
    }

    /// The target-language tag, if set.
    pub fn language_tag(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The attached fragments, in emission order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Append a fragment. No validation happens at add time; structural
    /// errors surface when rendering (or from [`Self::validate`]).
    pub fn add_fragment(&mut self, fragment: impl Into<Fragment>) -> &mut Self {
        self.fragments.push(fragment.into());
        self
    }

    /// Append fragments, preserving their order.
    pub fn add_fragments(
        &mut self,
        fragments: impl IntoIterator<Item = impl Into<Fragment>>,
    ) -> &mut Self {
        self.fragments.extend(fragments.into_iter().map(Into::into));
        self
    }

    /// Check the structure of every attached fragment.
    pub fn validate(&self) -> Result<()> {
        for fragment in &self.fragments {
            fragment.validate()?;
        }
        Ok(())
    }

    /// Assemble the final document.
    ///
    /// Renders each top-level fragment in insertion order and joins the
    /// results with exactly one blank line. A template with no fragments
    /// renders to the empty string. If any fragment fails, the whole call
    /// fails and no partial document is returned.
    pub fn render(&self, context: &Context) -> Result<String> {
        self.validate()?;

        let mut builder = CodeBuilder::new(self.indent);
        for (i, fragment) in self.fragments.iter().enumerate() {
            let chunks = fragment.chunks(context, false)?;
            if i > 0 {
                builder.push_blank();
            }
            for chunk in chunks {
                builder.apply(chunk);
            }
        }
        Ok(builder.build())
    }
}
