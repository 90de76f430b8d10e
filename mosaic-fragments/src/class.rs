//! Class fragment.

use codemosaic_render::{Chunk, CodeBuilder};
use indexmap::IndexMap;

use crate::fragment::is_identifier;
use crate::{AttrValue, Context, Error, Fragment, Result};

/// A renderable class: header, attribute literals, and member fragments.
///
/// Attribute and member emission order is exactly insertion order - never
/// sorted, never deduplicated (re-adding an attribute key overwrites its
/// value in place). Members are owned by the class and rendered in member
/// mode, one blank line apart.
///
/// # Example
///
/// ```
/// use codemosaic_fragments::{ClassFragment, Context, FunctionFragment};
///
/// let fragment = ClassFragment::new("DataProcessor")
///     .base("BaseTransformer")
///     .attr("MAX_BATCH_SIZE", 1000)
///     .method(FunctionFragment::new("reset").body("self.seen = 0"));
///
/// let code = fragment.render(&Context::new()).unwrap();
/// assert!(code.starts_with("class DataProcessor(BaseTransformer):\n"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClassFragment {
    name: String,
    bases: Vec<String>,
    attrs: IndexMap<String, AttrValue>,
    methods: Vec<Fragment>,
}

impl ClassFragment {
    /// Create a class fragment with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            attrs: IndexMap::new(),
            methods: Vec::new(),
        }
    }

    /// Add a base-class name.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    /// Add base-class names in order.
    pub fn bases(mut self, bases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.bases.extend(bases.into_iter().map(Into::into));
        self
    }

    /// Add a class-level attribute. Re-adding a key overwrites its value
    /// without changing its position.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Add a member fragment, rendered in member mode.
    pub fn method(mut self, method: impl Into<Fragment>) -> Self {
        self.methods.push(method.into());
        self
    }

    /// Add member fragments in order.
    pub fn methods(mut self, methods: impl IntoIterator<Item = impl Into<Fragment>>) -> Self {
        self.methods.extend(methods.into_iter().map(Into::into));
        self
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base-class names, in declared order.
    pub fn base_names(&self) -> &[String] {
        &self.bases
    }

    /// The class-level attributes, in insertion order.
    pub fn attrs(&self) -> &IndexMap<String, AttrValue> {
        &self.attrs
    }

    /// Diagnostic label identifying this fragment.
    pub(crate) fn label(&self) -> String {
        format!("class '{}'", self.name)
    }

    /// Check structural fields, including members.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::malformed(
                "class ''",
                "fragment name must not be empty",
            ));
        }
        if !is_identifier(&self.name) {
            return Err(Error::malformed(
                self.label(),
                "fragment name must be a valid identifier",
            ));
        }
        for method in &self.methods {
            method.validate()?;
        }
        Ok(())
    }

    /// Lower to layout chunks.
    pub(crate) fn chunks(&self, context: &Context) -> Result<Vec<Chunk>> {
        let header = if self.bases.is_empty() {
            format!("class {}:", self.name)
        } else {
            format!("class {}({}):", self.name, self.bases.join(", "))
        };

        let mut body = Vec::new();
        for (key, value) in &self.attrs {
            body.push(Chunk::Line(format!("{} = {}", key, value.to_literal())));
        }
        for method in &self.methods {
            if !body.is_empty() {
                body.push(Chunk::Blank);
            }
            body.extend(method.chunks(context, true)?);
        }
        if body.is_empty() {
            body.push(Chunk::line("pass"));
        }

        Ok(vec![Chunk::block(header, body, None)])
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::FunctionFragment;

    #[test]
    fn test_header_without_bases_has_no_parentheses() {
        let code = ClassFragment::new("Plain").render(&Context::new()).unwrap();
        assert_eq!(code, "class Plain:\n    pass\n");
    }

    #[test]
    fn test_header_joins_bases() {
        let code = ClassFragment::new("Multi")
            .bases(["A", "B"])
            .render(&Context::new())
            .unwrap();
        assert_eq!(code, "class Multi(A, B):\n    pass\n");
    }

    #[test]
    fn test_attrs_in_insertion_order() {
        let code = ClassFragment::new("Config")
            .attr("ZULU", 1)
            .attr("ALPHA", 2)
            .render(&Context::new())
            .unwrap();
        assert_eq!(code, "class Config:\n    ZULU = 1\n    ALPHA = 2\n");
    }

    #[test]
    fn test_duplicate_attr_overwrites_in_place() {
        let code = ClassFragment::new("Config")
            .attr("A", 1)
            .attr("B", 2)
            .attr("A", 3)
            .render(&Context::new())
            .unwrap();
        assert_eq!(code, "class Config:\n    A = 3\n    B = 2\n");
    }

    #[test]
    fn test_methods_rendered_in_member_mode() {
        let code = ClassFragment::new("Worker")
            .method(FunctionFragment::new("run").body("return self.step()"))
            .render(&Context::new())
            .unwrap();
        assert_eq!(
            code,
            "class Worker:\n    def run(self):\n        return self.step()\n"
        );
    }

    #[test]
    fn test_blank_line_between_attrs_and_methods() {
        let code = ClassFragment::new("Worker")
            .attr("LIMIT", 10)
            .method(FunctionFragment::new("run").body("pass"))
            .method(FunctionFragment::new("stop").body("pass"))
            .render(&Context::new())
            .unwrap();
        assert_eq!(
            code,
            "class Worker:\n    LIMIT = 10\n\n    def run(self):\n        pass\n\n    def stop(self):\n        pass\n"
        );
    }

    #[test]
    fn test_member_placeholder_error_names_method() {
        let err = ClassFragment::new("Worker")
            .method(FunctionFragment::new("run").body("return ${op}()"))
            .render(&Context::new())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unresolved placeholder '${op}' in function 'run'"
        );
    }

    #[test]
    fn test_invalid_member_name_detected() {
        let err = ClassFragment::new("Worker")
            .method(FunctionFragment::new(""))
            .render(&Context::new())
            .unwrap_err();
        assert!(matches!(err, Error::MalformedFragment { .. }));
    }
}
