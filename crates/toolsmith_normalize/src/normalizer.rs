//! Source to descriptor normalization.

use crate::{
    CallableSource, DocExtractor, DocStyle, DocSummary, GoogleDocs, SchemaObject, Source,
    ToolWrapper, TypeRef,
};
use serde_json::Value;
use toolsmith_core::{ObjectSchema, ParameterSpec, ToolDescriptor, ValueSchema};
use toolsmith_error::{SchemaError, SchemaErrorKind, SchemaResult};
use tracing::{debug, instrument};

/// Shared contract of every source variant.
pub trait Normalize {
    /// Builds the descriptor for this source, reading documentation through `docs`.
    fn normalize_with(&self, docs: &dyn DocExtractor) -> SchemaResult<ToolDescriptor>;
}

impl Normalize for CallableSource {
    fn normalize_with(&self, docs: &dyn DocExtractor) -> SchemaResult<ToolDescriptor> {
        let summary = docs.extract(self.doc());
        let mut params = Vec::with_capacity(self.params().len());

        for param in self.params() {
            let declared = Declared {
                name: param.name(),
                type_ref: param.type_ref(),
                explicit_description: None,
                default: param.default().as_ref(),
                has_default: *param.has_default(),
            };
            params.push(declared.to_spec(self.name(), "", &summary, docs)?);
        }

        let parameters = ObjectSchema::try_new(self.name(), params)?;
        ToolDescriptor::new(self.name(), summary.summary().clone(), parameters)
    }
}

impl Normalize for SchemaObject {
    fn normalize_with(&self, docs: &dyn DocExtractor) -> SchemaResult<ToolDescriptor> {
        let (description, parameters) = object_schema(self, self.name(), "", docs)?;
        ToolDescriptor::new(self.name(), description, parameters)
    }
}

impl Normalize for ToolWrapper {
    fn normalize_with(&self, docs: &dyn DocExtractor) -> SchemaResult<ToolDescriptor> {
        let (_, parameters) = object_schema(self.args_schema(), self.name(), "", docs)?;
        ToolDescriptor::new(self.name(), self.description().clone(), parameters)
    }
}

impl Normalize for Source {
    fn normalize_with(&self, docs: &dyn DocExtractor) -> SchemaResult<ToolDescriptor> {
        match self {
            Self::Callable(source) => source.normalize_with(docs),
            Self::SchemaObject(source) => source.normalize_with(docs),
            Self::ToolWrapper(source) => source.normalize_with(docs),
        }
    }
}

/// Converts sources into descriptors using one documentation extractor.
pub struct Normalizer {
    docs: Box<dyn DocExtractor>,
}

impl Normalizer {
    /// Normalizer reading documentation in `style`.
    pub fn new(style: DocStyle) -> Self {
        Self {
            docs: style.extractor(),
        }
    }

    /// Normalizer using a custom extractor.
    pub fn with_extractor(docs: impl DocExtractor + 'static) -> Self {
        Self {
            docs: Box::new(docs),
        }
    }

    /// Builds the descriptor for `source`.
    ///
    /// Fails without producing a partial descriptor when any parameter type
    /// has no JSON Schema mapping.
    #[instrument(skip_all, fields(source = source.name(), kind = source.kind()))]
    pub fn normalize(&self, source: &Source) -> SchemaResult<ToolDescriptor> {
        let descriptor = source.normalize_with(self.docs.as_ref())?;
        debug!(
            parameters = descriptor.parameters().len(),
            "Normalized source"
        );
        Ok(descriptor)
    }

    /// Builds descriptors for every source, stopping at the first failure.
    pub fn normalize_all<'a>(
        &self,
        sources: impl IntoIterator<Item = &'a Source>,
    ) -> SchemaResult<Vec<ToolDescriptor>> {
        sources
            .into_iter()
            .map(|source| self.normalize(source))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::with_extractor(GoogleDocs)
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer").finish_non_exhaustive()
    }
}

/// Normalizes `source` with Google-style documentation.
pub fn normalize(source: &Source) -> SchemaResult<ToolDescriptor> {
    Normalizer::default().normalize(source)
}

/// A parameter or field, viewed uniformly.
struct Declared<'a> {
    name: &'a str,
    type_ref: &'a TypeRef,
    explicit_description: Option<&'a String>,
    default: Option<&'a Value>,
    has_default: bool,
}

impl Declared<'_> {
    /// Maps the declaration onto a parameter spec.
    ///
    /// Description precedence: explicit annotation, then the documented
    /// parameter line, then the summary of a nested schema object.
    fn to_spec(
        &self,
        tool: &str,
        prefix: &str,
        summary: &DocSummary,
        docs: &dyn DocExtractor,
    ) -> SchemaResult<ParameterSpec> {
        let path = format!("{prefix}{}", self.name);
        let (schema, optional, nested_summary) = map_type(tool, &path, self.type_ref, docs)?;

        let description = self
            .explicit_description
            .cloned()
            .or_else(|| summary.param(self.name).map(str::to_string))
            .or(nested_summary.filter(|s| !s.is_empty()));

        let mut spec = ParameterSpec::new(self.name, schema).with_description_opt(description);
        if let Some(default) = self.default {
            spec = spec.with_default(default.clone());
        } else if self.has_default || optional {
            spec = spec.optional();
        }

        debug!(
            parameter = %path,
            json_type = %spec.json_type(),
            required = *spec.required(),
            "Mapped parameter"
        );
        Ok(spec)
    }
}

/// Builds the object schema for `object`, returning its documentation summary too.
fn object_schema(
    object: &SchemaObject,
    tool: &str,
    prefix: &str,
    docs: &dyn DocExtractor,
) -> SchemaResult<(String, ObjectSchema)> {
    let summary = docs.extract(object.doc());
    let mut params = Vec::with_capacity(object.fields().len());

    for field in object.fields() {
        let declared = Declared {
            name: field.name(),
            type_ref: field.type_ref(),
            explicit_description: field.description().as_ref(),
            default: field.default().as_ref(),
            has_default: *field.has_default(),
        };
        params.push(declared.to_spec(tool, prefix, &summary, docs)?);
    }

    let parameters = ObjectSchema::try_new(object.name(), params)?;
    Ok((summary.summary().clone(), parameters))
}

/// Maps a declared type to a value schema.
///
/// Returns the schema, whether the type itself marks the value optional, and
/// the documentation summary of a nested schema object.
fn map_type(
    tool: &str,
    path: &str,
    type_ref: &TypeRef,
    docs: &dyn DocExtractor,
) -> SchemaResult<(ValueSchema, bool, Option<String>)> {
    let schema = match type_ref {
        TypeRef::Integer => ValueSchema::Integer,
        TypeRef::Float => ValueSchema::Number,
        TypeRef::Text => ValueSchema::String,
        TypeRef::Boolean => ValueSchema::Boolean,
        TypeRef::Mapping => ValueSchema::Map,
        TypeRef::Sequence(None) => ValueSchema::Array(None),
        TypeRef::Sequence(Some(items)) => {
            let (items, _, _) = map_type(tool, &format!("{path}[]"), items, docs)?;
            ValueSchema::array_of(items)
        }
        TypeRef::Optional(inner) => {
            let (schema, _, nested) = map_type(tool, path, inner, docs)?;
            return Ok((schema, true, nested));
        }
        TypeRef::Schema(object) => {
            let (summary, parameters) =
                object_schema(object, tool, &format!("{path}."), docs)?;
            return Ok((ValueSchema::Object(parameters), false, Some(summary)));
        }
        TypeRef::Custom(name) => {
            return Err(SchemaError::new(SchemaErrorKind::UnmappableType {
                tool: tool.to_string(),
                parameter: path.to_string(),
                type_name: name.clone(),
            }));
        }
    };
    Ok((schema, false, None))
}
