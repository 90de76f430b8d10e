//! Function fragment.

use codemosaic_render::{Chunk, CodeBuilder, normalize_block};

use crate::fragment::is_identifier;
use crate::resolver::resolve;
use crate::{Context, Error, Result};

/// A renderable function: a signature plus a placeholder-bearing body.
///
/// Parameters are raw `"name: type"` strings emitted exactly as provided,
/// in declared order; the fragment never re-parses or type-checks them.
/// When rendered as a class member, an implicit `self` is injected as the
/// first signature parameter.
///
/// # Example
///
/// ```
/// use codemosaic_fragments::{Context, FunctionFragment};
///
/// let fragment = FunctionFragment::new("transform_data")
///     .param("input_data: list")
///     .returns("pd.DataFrame")
///     .body("return ${op}(input_data)");
///
/// let ctx = Context::from([("op", "normalize")]);
/// let code = fragment.render(&ctx).unwrap();
/// assert_eq!(
///     code,
///     "def transform_data(input_data: list) -> pd.DataFrame:\n    return normalize(input_data)\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionFragment {
    name: String,
    parameters: Vec<String>,
    return_type: Option<String>,
    body: String,
}

impl FunctionFragment {
    /// Create a function fragment with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
            body: String::new(),
        }
    }

    /// Add a parameter declaration (a raw `"name: type"` string).
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.parameters.push(param.into());
        self
    }

    /// Add parameter declarations in order.
    pub fn params(mut self, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.parameters.extend(params.into_iter().map(Into::into));
        self
    }

    /// Set the return-type annotation.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Set the body template. May contain `${name}` placeholders.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// The function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared parameters, in signature order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// The return-type annotation, if any.
    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    /// Diagnostic label identifying this fragment.
    pub(crate) fn label(&self) -> String {
        format!("function '{}'", self.name)
    }

    /// Check structural fields.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::malformed(
                "function ''",
                "fragment name must not be empty",
            ));
        }
        if !is_identifier(&self.name) {
            return Err(Error::malformed(
                self.label(),
                "fragment name must be a valid identifier",
            ));
        }
        Ok(())
    }

    /// Lower to layout chunks. `member` injects `self` into the signature.
    pub(crate) fn chunks(&self, context: &Context, member: bool) -> Result<Vec<Chunk>> {
        let label = self.label();

        let mut params: Vec<&str> = Vec::with_capacity(self.parameters.len() + 1);
        if member {
            params.push("self");
        }
        params.extend(self.parameters.iter().map(String::as_str));

        let signature = match &self.return_type {
            Some(ret) => format!("def {}({}) -> {}:", self.name, params.join(", "), ret),
            None => format!("def {}({}):", self.name, params.join(", ")),
        };

        let mut body = Vec::new();
        for line in normalize_block(&self.body) {
            if line.is_empty() {
                body.push(Chunk::Blank);
            } else {
                body.push(Chunk::Line(resolve(&line, &label, &[], context)?));
            }
        }
        if body.is_empty() {
            body.push(Chunk::line("pass"));
        }

        Ok(vec![Chunk::block(signature, body, None)])
    }

    /// Render this fragment on its own, at top level.
    pub fn render(&self, context: &Context) -> Result<String> {
        self.validate()?;
        let mut builder = CodeBuilder::default();
        for chunk in self.chunks(context, false)? {
            builder.apply(chunk);
        }
        Ok(builder.build())
    }
}
