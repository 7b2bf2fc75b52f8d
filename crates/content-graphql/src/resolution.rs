use content_schema::schema_definition::{FieldType, FieldWalker};
use query_registry::{
    resolvers::{Resolver, Transformer},
    MetaFieldType,
};

/// The resolved leaf type of a field, together with the resolver producing
/// the field's stored value for one partition.
///
/// A field without a leaf type has no representation in the client API and
/// is omitted from the projection. That is a valid outcome, not an error.
#[derive(Debug, Clone)]
pub struct FieldTypeResolution {
    pub leaf_type: Option<MetaFieldType>,
    pub resolver: Resolver,
}

impl FieldTypeResolution {
    pub fn leaf(leaf_type: impl Into<MetaFieldType>, resolver: impl Into<Resolver>) -> Self {
        Self {
            leaf_type: Some(leaf_type.into()),
            resolver: resolver.into(),
        }
    }

    pub fn unresolved() -> Self {
        Self {
            leaf_type: None,
            resolver: Resolver::Parent,
        }
    }
}

/// Resolves the leaf query type of a field.
pub trait TypeResolver {
    fn resolve_field(&self, field: FieldWalker<'_>) -> FieldTypeResolution;
}

/// Maps the built-in field types to their scalar leaf types.
///
/// Structured json fields have no leaf type and stay out of the rendered
/// registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScalarTypeResolver;

impl TypeResolver for ScalarTypeResolver {
    fn resolve_field(&self, field: FieldWalker<'_>) -> FieldTypeResolution {
        let leaf_type = match field.field_type() {
            FieldType::String => "String",
            FieldType::Number => "Float",
            FieldType::Boolean => "Boolean",
            FieldType::DateTime => "DateTime",
            FieldType::Tags => "[String]",
            FieldType::Json => return FieldTypeResolution::unresolved(),
        };

        FieldTypeResolution::leaf(leaf_type, Transformer::select(field.name()))
    }
}
