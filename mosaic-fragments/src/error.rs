use miette::Diagnostic;
use thiserror::Error;

/// Result type for fragment construction and rendering.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unresolved placeholder '${{{placeholder}}}' in {fragment}")]
    #[diagnostic(
        code(mosaic::unresolved_placeholder),
        help(
            "supply '{placeholder}' in the render context, or define it on the fragment that references it"
        )
    )]
    UnresolvedPlaceholder {
        placeholder: String,
        fragment: String,
    },

    #[error("malformed {fragment}: {reason}")]
    #[diagnostic(code(mosaic::malformed_fragment))]
    MalformedFragment { fragment: String, reason: String },
}

impl Error {
    /// Create an unresolved placeholder error.
    pub fn unresolved(placeholder: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self::UnresolvedPlaceholder {
            placeholder: placeholder.into(),
            fragment: fragment.into(),
        }
    }

    /// Create a malformed fragment error.
    pub fn malformed(fragment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedFragment {
            fragment: fragment.into(),
            reason: reason.into(),
        }
    }
}
