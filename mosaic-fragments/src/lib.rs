//! Typed code fragments and placeholder resolution for CodeMosaic.
//!
//! A fragment is a self-contained renderable unit of code structure. The
//! closed set of fragment kinds is:
//!
//! - [`FunctionFragment`] - a function signature plus a body template
//! - [`ClassFragment`] - a class header, attribute literals, and member fragments
//! - [`ControlFlowFragment`] - a guard/raise block with two-phase resolution
//!
//! Fragment bodies are free-form text carrying `${name}` placeholders,
//! resolved at render time against a caller-supplied [`Context`] layered
//! under fragment-local bindings. Rendering is all-or-nothing: an
//! unresolved placeholder fails the whole render with
//! [`Error::UnresolvedPlaceholder`].

mod class;
mod context;
mod control_flow;
mod error;
mod fragment;
mod function;
pub mod resolver;
mod value;

pub use class::ClassFragment;
pub use context::Context;
pub use control_flow::ControlFlowFragment;
pub use error::{Error, Result};
pub use fragment::Fragment;
pub use function::FunctionFragment;
pub use value::AttrValue;
