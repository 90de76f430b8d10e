//! CodeMosaic: a fragment-based code-template assembler.
//!
//! Typed source-code fragments - functions, classes, control-flow blocks -
//! are attached to a [`MosaicTemplate`] and assembled into a rendered
//! program by resolving `${name}` placeholders against a caller-supplied
//! [`Context`].
//!
//! # Example
//!
//! ```
//! use codemosaic::{Context, FunctionFragment, MosaicTemplate};
//!
//! let mut template = MosaicTemplate::new("Greeter").language("python");
//! template.add_fragment(
//!     FunctionFragment::new("greet")
//!         .param("name: str")
//!         .body("return ${greeting} + name"),
//! );
//!
//! let ctx = Context::from([("greeting", "'hello, '")]);
//! let code = template.render(&ctx).unwrap();
//! assert_eq!(code, "def greet(name: str):\n    return 'hello, ' + name\n");
//! ```
//!
//! Templates can also be loaded from declarative TOML definitions via
//! [`TemplateManifest`].

pub mod manifest;
mod template;

pub use codemosaic_fragments::{
    AttrValue, ClassFragment, Context, ControlFlowFragment, Error, Fragment, FunctionFragment,
    Result,
};
pub use codemosaic_render::{Chunk, CodeBuilder, Indent};
pub use manifest::{ManifestError, ManifestResult, TemplateManifest};
pub use template::MosaicTemplate;
