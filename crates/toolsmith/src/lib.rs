//! Toolsmith: turn functions, schema objects and tool wrappers into the
//! descriptors LLM chat-completion APIs accept for function calling.
//!
//! This facade re-exports the workspace crates and adds the file-facing
//! pieces: layered [`ToolsmithConfig`] and TOML declaration [`Manifest`]s.
//!
//! # Example
//!
//! ```
//! use toolsmith::{Manifest, Normalizer};
//!
//! let manifest = Manifest::parse(r#"
//!     [[function]]
//!     name = "multiply"
//!     doc = """Multiply two integers together.
//!
//!     Args:
//!         a: First integer
//!         b: Second integer
//!     """
//!     params = [{ name = "a", type = "int" }, { name = "b", type = "int" }]
//! "#).unwrap();
//!
//! let descriptors = manifest.descriptors(&Normalizer::default()).unwrap();
//! assert_eq!(descriptors[0].serialize(false)["function"]["name"], "multiply");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod manifest;
mod settings;

pub use manifest::{FieldEntry, FunctionDecl, Manifest, ParamEntry, SchemaDecl, ToolDecl};
pub use settings::ToolsmithConfig;

pub use toolsmith_core::*;
pub use toolsmith_error::*;
pub use toolsmith_interface::*;
pub use toolsmith_normalize::*;
