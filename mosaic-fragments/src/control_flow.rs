//! Control-flow fragment.

use codemosaic_render::{Chunk, CodeBuilder, normalize_block};

use crate::resolver::{resolve, resolve_words};
use crate::{Context, Error, Result};

/// Default body template: a guard with a raise.
const DEFAULT_BODY: &str = "if ${guard_condition}:\n    raise ${error_type}(${error_message})";

/// A renderable guard/raise block.
///
/// Resolution is two-phase. Phase one makes the `guard_condition`,
/// `error_type`, and `error_message` fields concrete against the caller
/// context: a context key equal to the field name overrides the field
/// wholesale for this render, and `${..}` tokens resolve as usual; in the
/// guard condition, bare identifier words matching context keys are also
/// substituted. Phase two resolves the body template with the now-concrete
/// values as local bindings layered over the same context, `error_message`
/// bound as a double-quoted string literal.
///
/// The fragment is indentation-agnostic; the enclosing template or class
/// applies the final indent.
///
/// # Example
///
/// ```
/// use codemosaic_fragments::{Context, ControlFlowFragment};
///
/// let fragment = ControlFlowFragment::new(
///     "len(batch) > LIMIT",
///     "ValueError",
///     "batch too large",
/// );
/// let ctx = Context::from([("LIMIT", "self.MAX")]);
/// let code = fragment.render(&ctx).unwrap();
/// assert_eq!(
///     code,
///     "if len(batch) > self.MAX:\n    raise ValueError(\"batch too large\")\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ControlFlowFragment {
    guard_condition: String,
    error_type: String,
    error_message: String,
    body: String,
}

impl ControlFlowFragment {
    /// Create a control-flow fragment with the canonical guard/raise body.
    pub fn new(
        guard_condition: impl Into<String>,
        error_type: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            guard_condition: guard_condition.into(),
            error_type: error_type.into(),
            error_message: error_message.into(),
            body: DEFAULT_BODY.to_string(),
        }
    }

    /// Override the body template. The template may reference the
    /// `guard_condition`, `error_type`, and `error_message` local bindings
    /// as well as any context key.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// The declared guard condition, unresolved.
    pub fn guard_condition(&self) -> &str {
        &self.guard_condition
    }

    /// The declared error type, unresolved.
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// The declared error message, unresolved.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Diagnostic label identifying this fragment.
    pub(crate) fn label(&self) -> String {
        format!("control-flow fragment '{}'", self.guard_condition)
    }

    /// Check structural fields.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.guard_condition.trim().is_empty() {
            return Err(Error::malformed(
                "control-flow fragment",
                "guard condition must not be empty",
            ));
        }
        if self.error_type.trim().is_empty() {
            return Err(Error::malformed(
                self.label(),
                "error type must not be empty",
            ));
        }
        Ok(())
    }

    /// Phase-one resolution of one declared field. The bare-word pass
    /// applies only when `words` is set; it is reserved for the guard
    /// condition, never for natural-language fields.
    fn concretize(&self, field: &str, raw: &str, words: bool, context: &Context) -> Result<String> {
        let base = context.get(field).unwrap_or(raw);
        if words {
            let substituted = resolve_words(base, context);
            resolve(&substituted, &self.label(), &[], context)
        } else {
            resolve(base, &self.label(), &[], context)
        }
    }

    /// Lower to layout chunks.
    pub(crate) fn chunks(&self, context: &Context) -> Result<Vec<Chunk>> {
        let label = self.label();

        let guard = self.concretize("guard_condition", &self.guard_condition, true, context)?;
        let error_type = self.concretize("error_type", &self.error_type, false, context)?;
        let message = self.concretize("error_message", &self.error_message, false, context)?;
        let quoted = format!("\"{}\"", message.replace('\\', "\\\\").replace('"', "\\\""));

        let locals = [
            ("guard_condition", guard.as_str()),
            ("error_type", error_type.as_str()),
            ("error_message", quoted.as_str()),
        ];

        let mut chunks = Vec::new();
        for line in normalize_block(&self.body) {
            if line.is_empty() {
                chunks.push(Chunk::Blank);
            } else {
                chunks.push(Chunk::Line(resolve(&line, &label, &locals, context)?));
            }
        }
        Ok(chunks)
    }

    /// Render this fragment on its own, at top level.
    pub fn render(&self, context: &Context) -> Result<String> {
        self.validate()?;
        let mut builder = CodeBuilder::default();
        for chunk in self.chunks(context)? {
            builder.apply(chunk);
        }
        Ok(builder.build())
    }
}
