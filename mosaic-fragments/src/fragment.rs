//! The closed set of fragment kinds.

use codemosaic_render::{Chunk, CodeBuilder};

use crate::{ClassFragment, Context, ControlFlowFragment, FunctionFragment, Result};

/// A self-contained renderable unit of code structure.
///
/// The variant set is fixed and exhaustive: functions, classes, and
/// control-flow blocks. Each variant renders itself to indented text given
/// a [`Context`]; containers compose variants by lowering them to
/// [`Chunk`]s and deciding the final indentation themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Function(FunctionFragment),
    Class(ClassFragment),
    ControlFlow(ControlFlowFragment),
}

impl Fragment {
    /// The fragment kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Function(_) => "function",
            Self::Class(_) => "class",
            Self::ControlFlow(_) => "control_flow",
        }
    }

    /// The fragment name, when the kind carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Function(f) => Some(f.name()),
            Self::Class(c) => Some(c.name()),
            Self::ControlFlow(_) => None,
        }
    }

    /// Check structural fields without rendering.
    ///
    /// Rendering performs the same checks; this entry point lets callers
    /// fail eagerly, e.g. right after loading a template definition.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Function(f) => f.validate(),
            Self::Class(c) => c.validate(),
            Self::ControlFlow(c) => c.validate(),
        }
    }

    /// Lower this fragment to layout chunks.
    ///
    /// `member` renders the fragment as a class member: functions gain an
    /// implicit `self` parameter; other kinds are unaffected (the owning
    /// class applies the member indent).
    pub fn chunks(&self, context: &Context, member: bool) -> Result<Vec<Chunk>> {
        match self {
            Self::Function(f) => f.chunks(context, member),
            Self::Class(c) => c.chunks(context),
            Self::ControlFlow(c) => c.chunks(context),
        }
    }

    /// Render this fragment to text at top level.
    pub fn render(&self, context: &Context) -> Result<String> {
        self.validate()?;
        let mut builder = CodeBuilder::default();
        for chunk in self.chunks(context, false)? {
            builder.apply(chunk);
        }
        Ok(builder.build())
    }
}

impl From<FunctionFragment> for Fragment {
    fn from(fragment: FunctionFragment) -> Self {
        Self::Function(fragment)
    }
}

impl From<ClassFragment> for Fragment {
    fn from(fragment: ClassFragment) -> Self {
        Self::Class(fragment)
    }
}

impl From<ControlFlowFragment> for Fragment {
    fn from(fragment: ControlFlowFragment) -> Self {
        Self::ControlFlow(fragment)
    }
}

/// Whether `s` is a valid identifier: starts with a letter or underscore,
/// continues with letters, digits, or underscores.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_name() {
        let f: Fragment = FunctionFragment::new("f").into();
        assert_eq!(f.kind(), "function");
        assert_eq!(f.name(), Some("f"));

        let c: Fragment = ClassFragment::new("C").into();
        assert_eq!(c.kind(), "class");
        assert_eq!(c.name(), Some("C"));

        let g: Fragment = ControlFlowFragment::new("x", "E", "m").into();
        assert_eq!(g.kind(), "control_flow");
        assert_eq!(g.name(), None);
    }

    #[test]
    fn test_render_dispatches_per_kind() {
        let ctx = Context::new();
        let f: Fragment = FunctionFragment::new("f").body("pass").into();
        assert_eq!(f.render(&ctx).unwrap(), "def f():\n    pass\n");

        let g: Fragment = ControlFlowFragment::new("x", "E", "m").into();
        assert_eq!(g.render(&ctx).unwrap(), "if x:\n    raise E(\"m\")\n");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("transform_data"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("T2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("with space"));
        assert!(!is_identifier("dot.ted"));
    }
}
