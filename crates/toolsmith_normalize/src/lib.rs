//! Normalization of callable capabilities into tool descriptors.
//!
//! Three source shapes are supported, all producing the same
//! [`ToolDescriptor`](toolsmith_core::ToolDescriptor):
//!
//! - [`CallableSource`]: a plain function with typed parameters and a docstring
//! - [`SchemaObject`]: a class-like declaration of typed, optionally described fields
//! - [`ToolWrapper`]: an explicit name and description plus an argument schema object
//!
//! # Usage
//!
//! ```
//! use toolsmith_normalize::{CallableSource, ParamDecl, Source, TypeRef, normalize};
//!
//! let multiply = CallableSource::new(
//!     "multiply",
//!     "Multiply two integers together.\n\nArgs:\n    a: First integer\n    b: Second integer",
//! )
//! .with_param(ParamDecl::new("a", TypeRef::Integer))
//! .with_param(ParamDecl::new("b", TypeRef::Integer));
//!
//! let descriptor = normalize(&Source::from(multiply)).unwrap();
//! assert_eq!(descriptor.serialize(false)["function"]["parameters"]["required"][1], "b");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod docs;
mod json_schema;
mod normalizer;
mod source;
mod type_ref;

pub use docs::{DocExtractor, DocStyle, DocSummary, GoogleDocs, PlainDocs, RustDocs};
pub use normalizer::{Normalize, Normalizer, normalize};
pub use source::{CallableSource, FieldDecl, ParamDecl, SchemaObject, Source, ToolWrapper};
pub use type_ref::TypeRef;
