//! TOML declaration manifests.
//!
//! A manifest declares sources without code:
//!
//! ```toml
//! [[schema]]
//! name = "Point"
//! doc = "A point on the plane."
//! fields = [
//!     { name = "x", type = "float", description = "Horizontal position" },
//!     { name = "y", type = "float", description = "Vertical position" },
//! ]
//!
//! [[function]]
//! name = "distance"
//! doc = "Distance between two points."
//! params = [{ name = "a", type = "Point" }, { name = "b", type = "Point" }]
//!
//! [[tool]]
//! name = "plot"
//! description = "Plot a point."
//! args_schema = "Point"
//! ```
//!
//! Type strings go through [`TypeRef::parse`]. Names that are not builtin
//! types resolve against the manifest's schemas; anything still unknown is
//! left for normalization to reject.

use derive_getters::Getters;
use serde::Deserialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use toolsmith_core::ToolDescriptor;
use toolsmith_error::{
    ConfigError, SchemaError, SchemaErrorKind, SchemaResult, ToolsmithError, ToolsmithResult,
};
use toolsmith_normalize::{
    CallableSource, FieldDecl, Normalizer, ParamDecl, SchemaObject, Source, ToolWrapper, TypeRef,
};
use tracing::{debug, instrument};

/// A field of a declared schema object.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
pub struct FieldEntry {
    /// Field name
    name: String,
    /// Type annotation
    #[serde(rename = "type")]
    type_name: String,
    /// Field-level description
    #[serde(default)]
    description: Option<String>,
    /// Default value
    #[serde(default)]
    default: Option<Value>,
    /// Whether the field may be omitted without a known default
    #[serde(default)]
    optional: bool,
}

/// A parameter of a declared function.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
pub struct ParamEntry {
    /// Parameter name
    name: String,
    /// Type annotation
    #[serde(rename = "type")]
    type_name: String,
    /// Default value
    #[serde(default)]
    default: Option<Value>,
    /// Whether the parameter may be omitted without a known default
    #[serde(default)]
    optional: bool,
}

/// A `[[schema]]` table.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
pub struct SchemaDecl {
    /// Schema name
    name: String,
    /// Documentation block
    #[serde(default)]
    doc: String,
    /// Offer this schema as a tool in its own right
    #[serde(default)]
    expose: bool,
    /// Fields in declaration order
    #[serde(default)]
    fields: Vec<FieldEntry>,
}

/// A `[[function]]` table.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
pub struct FunctionDecl {
    /// Function name
    name: String,
    /// Documentation block
    #[serde(default)]
    doc: String,
    /// Parameters in declaration order
    #[serde(default)]
    params: Vec<ParamEntry>,
}

/// A `[[tool]]` table.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
pub struct ToolDecl {
    /// Name offered to the model
    name: String,
    /// Description offered to the model
    description: String,
    /// Name of the schema describing the arguments
    args_schema: String,
}

/// Declarations loaded from a TOML manifest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Getters)]
pub struct Manifest {
    /// `[[schema]]` tables
    #[serde(default, rename = "schema")]
    schemas: Vec<SchemaDecl>,
    /// `[[function]]` tables
    #[serde(default, rename = "function")]
    functions: Vec<FunctionDecl>,
    /// `[[tool]]` tables
    #[serde(default, rename = "tool")]
    tools: Vec<ToolDecl>,
}

impl Manifest {
    /// Load a manifest from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ToolsmithResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ToolsmithError::from(ConfigError::new(format!(
                "Failed to read manifest: {}",
                e
            )))
        })?;
        Self::parse(&content)
    }

    /// Parse a manifest from TOML text.
    pub fn parse(content: &str) -> ToolsmithResult<Self> {
        let manifest: Self = toml::from_str(content).map_err(|e| {
            ToolsmithError::from(ConfigError::new(format!(
                "Failed to parse manifest: {}",
                e
            )))
        })?;
        debug!(
            schemas = manifest.schemas.len(),
            functions = manifest.functions.len(),
            tools = manifest.tools.len(),
            "Parsed manifest"
        );
        Ok(manifest)
    }

    /// Resolves every offered declaration on its own.
    ///
    /// Yields exposed schemas, then functions, then tools, each in
    /// declaration order, paired with the declared name.
    pub fn resolve_each(&self) -> Vec<(&str, SchemaResult<Source>)> {
        let catalog = Catalog::new(&self.schemas);
        let schemas = self
            .schemas
            .iter()
            .filter(|schema| schema.expose)
            .map(|schema| {
                let source = catalog.resolve(&schema.name).map(Source::from);
                (schema.name.as_str(), source)
            });
        let functions = self
            .functions
            .iter()
            .map(|function| (function.name.as_str(), catalog.callable(function).map(Source::from)));
        let tools = self
            .tools
            .iter()
            .map(|tool| (tool.name.as_str(), catalog.wrapper(tool).map(Source::from)));

        schemas.chain(functions).chain(tools).collect()
    }

    /// Resolves every offered declaration, stopping at the first failure.
    pub fn sources(&self) -> SchemaResult<Vec<Source>> {
        self.resolve_each()
            .into_iter()
            .map(|(_, source)| source)
            .collect()
    }

    /// Normalizes every offered declaration.
    #[instrument(skip_all)]
    pub fn descriptors(&self, normalizer: &Normalizer) -> SchemaResult<Vec<ToolDescriptor>> {
        let sources = self.sources()?;
        normalizer.normalize_all(&sources)
    }
}

/// Schema lookup with cycle detection.
///
/// Each schema is expanded once; later references reuse the expansion.
struct Catalog<'a> {
    schemas: HashMap<&'a str, &'a SchemaDecl>,
    expanded: RefCell<HashMap<&'a str, SchemaObject>>,
}

impl<'a> Catalog<'a> {
    fn new(schemas: &'a [SchemaDecl]) -> Self {
        Self {
            schemas: schemas.iter().map(|s| (s.name.as_str(), s)).collect(),
            expanded: RefCell::new(HashMap::new()),
        }
    }

    fn resolve(&self, name: &str) -> SchemaResult<SchemaObject> {
        self.expand(name, &mut Vec::new())
    }

    fn expand(&self, name: &str, path: &mut Vec<&'a str>) -> SchemaResult<SchemaObject> {
        let (&key, decl) = self
            .schemas
            .get_key_value(name)
            .ok_or_else(|| SchemaError::new(SchemaErrorKind::UnresolvedSchema(name.to_string())))?;
        if path.contains(&key) {
            return Err(SchemaError::new(SchemaErrorKind::RecursiveSchema(
                key.to_string(),
            )));
        }
        if let Some(object) = self.expanded.borrow().get(key) {
            return Ok(object.clone());
        }

        path.push(key);
        let mut object = SchemaObject::new(&decl.name, &decl.doc);
        for field in &decl.fields {
            let type_ref = self.link(TypeRef::parse(&field.type_name), path)?;
            let mut declared = FieldDecl::new(&field.name, type_ref);
            if let Some(description) = &field.description {
                declared = declared.with_description(description);
            }
            declared = match (&field.default, field.optional) {
                (Some(default), _) => declared.with_default(default.clone()),
                (None, true) => declared.defaulted(),
                (None, false) => declared,
            };
            object = object.with_field(declared);
        }
        path.pop();
        self.expanded.borrow_mut().insert(key, object.clone());
        Ok(object)
    }

    /// Replaces custom names that match a schema with the expanded schema.
    fn link(&self, type_ref: TypeRef, path: &mut Vec<&'a str>) -> SchemaResult<TypeRef> {
        Ok(match type_ref {
            TypeRef::Custom(name) if self.schemas.contains_key(name.as_str()) => {
                TypeRef::schema(self.expand(&name, path)?)
            }
            TypeRef::Sequence(Some(items)) => TypeRef::sequence_of(self.link(*items, path)?),
            TypeRef::Optional(inner) => TypeRef::optional(self.link(*inner, path)?),
            other => other,
        })
    }

    fn callable(&self, decl: &FunctionDecl) -> SchemaResult<CallableSource> {
        let mut source = CallableSource::new(&decl.name, &decl.doc);
        for param in &decl.params {
            let type_ref = self.link(TypeRef::parse(&param.type_name), &mut Vec::new())?;
            let mut declared = ParamDecl::new(&param.name, type_ref);
            declared = match (&param.default, param.optional) {
                (Some(default), _) => declared.with_default(default.clone()),
                (None, true) => declared.defaulted(),
                (None, false) => declared,
            };
            source = source.with_param(declared);
        }
        Ok(source)
    }

    fn wrapper(&self, decl: &ToolDecl) -> SchemaResult<ToolWrapper> {
        let args = self.resolve(&decl.args_schema)?;
        Ok(ToolWrapper::new(&decl.name, &decl.description, args))
    }
}
