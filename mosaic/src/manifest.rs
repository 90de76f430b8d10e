//! Declarative template definitions in TOML.
//!
//! A template manifest describes a [`MosaicTemplate`] and its fragments as
//! data, so templates can be registered from configuration instead of
//! built in code:
//!
//! ```toml
//! [template]
//! name = "DataProcessor"
//! optimization_level = "O3"
//! language = "python"
//!
//! [[fragments]]
//! kind = "function"
//! name = "transform_data"
//! parameters = ["input_data: list"]
//! body = "return ${processing_operation}(input_data)"
//! ```

use std::str::FromStr;

use codemosaic_fragments::{
    AttrValue, ClassFragment, ControlFlowFragment, Fragment, FunctionFragment,
};
use indexmap::IndexMap;
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

use crate::MosaicTemplate;

/// Result type for manifest operations (boxed to reduce size on stack).
pub type ManifestResult<T> = std::result::Result<T, Box<ManifestError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("failed to parse template manifest")]
    #[diagnostic(code(mosaic::manifest::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(mosaic::manifest::validation_error))]
    Validation { message: String },
}

impl ManifestError {
    /// Create a parse error from a toml error with source context.
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Self::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Box<Self> {
        Box::new(Self::Validation {
            message: message.into(),
        })
    }
}

/// A parsed template manifest.
#[derive(Debug, Deserialize)]
pub struct TemplateManifest {
    template: TemplateSection,
    #[serde(default)]
    fragments: Vec<FragmentSpec>,
}

#[derive(Debug, Deserialize)]
struct TemplateSection {
    name: String,
    optimization_level: Option<String>,
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum FragmentSpec {
    Function {
        name: String,
        #[serde(default)]
        parameters: Vec<String>,
        return_type: Option<String>,
        #[serde(default)]
        body: String,
    },
    Class {
        name: String,
        #[serde(default)]
        bases: Vec<String>,
        #[serde(default)]
        attrs: IndexMap<String, AttrValue>,
        #[serde(default)]
        methods: Vec<FragmentSpec>,
    },
    ControlFlow {
        guard_condition: String,
        error_type: String,
        error_message: String,
        body: Option<String>,
    },
}

impl FragmentSpec {
    fn into_fragment(self) -> Fragment {
        match self {
            Self::Function {
                name,
                parameters,
                return_type,
                body,
            } => {
                let mut fragment = FunctionFragment::new(name).params(parameters);
                if let Some(ret) = return_type {
                    fragment = fragment.returns(ret);
                }
                fragment.body(body).into()
            }
            Self::Class {
                name,
                bases,
                attrs,
                methods,
            } => {
                let mut fragment = ClassFragment::new(name).bases(bases);
                for (key, value) in attrs {
                    fragment = fragment.attr(key, value);
                }
                fragment
                    .methods(methods.into_iter().map(FragmentSpec::into_fragment))
                    .into()
            }
            Self::ControlFlow {
                guard_condition,
                error_type,
                error_message,
                body,
            } => {
                let mut fragment =
                    ControlFlowFragment::new(guard_condition, error_type, error_message);
                if let Some(body) = body {
                    fragment = fragment.body(body);
                }
                fragment.into()
            }
        }
    }
}

impl TemplateManifest {
    /// Parse a manifest, attributing errors to `filename`.
    pub fn parse_named(src: &str, filename: &str) -> ManifestResult<Self> {
        toml::from_str(src).map_err(|err| ManifestError::parse(err, src, filename))
    }

    /// The template name.
    pub fn template_name(&self) -> &str {
        &self.template.name
    }

    /// Convert into a ready-to-render template, validating every fragment.
    pub fn into_template(self) -> ManifestResult<MosaicTemplate> {
        if self.template.name.trim().is_empty() {
            return Err(ManifestError::validation("template name must not be empty"));
        }

        let mut template = MosaicTemplate::new(self.template.name);
        if let Some(level) = self.template.optimization_level {
            template = template.optimization_level(level);
        }
        if let Some(language) = self.template.language {
            template = template.language(language);
        }
        for spec in self.fragments {
            template.add_fragment(spec.into_fragment());
        }
        template
            .validate()
            .map_err(|err| ManifestError::validation(err.to_string()))?;
        Ok(template)
    }
}

impl FromStr for TemplateManifest {
    type Err = Box<ManifestError>;

    fn from_str(src: &str) -> ManifestResult<Self> {
        Self::parse_named(src, "mosaic.toml")
    }
}
