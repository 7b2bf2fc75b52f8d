mod field;
mod ids;
mod walkers;

use serde::{Deserialize, Serialize};

pub use field::{Field, FieldProperties, FieldType, SchemaProperties};
pub use ids::FieldId;
pub use walkers::{FieldWalker, Walker};

/// Definition of a content type. An ordered list of fields together with
/// the presentation metadata needed to render the type in client APIs.
///
/// Created by schema storage and read-only everywhere else. The structure
/// is serialized together with the app configuration, so any changes here
/// must be backwards-compatible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDefinition {
    name: String,
    properties: SchemaProperties,
    /// Ordered by declaration position.
    fields: Vec<Field>,
}

impl SchemaDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: SchemaProperties::default(),
            fields: Vec::new(),
        }
    }

    pub fn with_properties(mut self, properties: SchemaProperties) -> Self {
        self.properties = properties;
        self
    }

    /// The name of the content type, as stored.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &SchemaProperties {
        &self.properties
    }

    /// The label of the content type, falling back to its name.
    pub fn display_name(&self) -> &str {
        self.properties.label.as_deref().unwrap_or(&self.name)
    }

    /// Adds a field at the end of the declaration order.
    pub fn push_field(&mut self, field: Field) -> FieldId {
        let id = FieldId(self.fields.len() as u32);
        self.fields.push(field);

        id
    }

    /// Iterates over the fields of the content type in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = FieldWalker<'_>> + '_ {
        (0..self.fields.len()).map(move |id| self.walk(FieldId(id as u32)))
    }

    /// Find a field with the specified name.
    pub fn find_field(&self, name: &str) -> Option<FieldWalker<'_>> {
        self.fields().find(|field| field.name() == name)
    }

    /// Walk an item in the definition by its id.
    pub fn walk<Id: Copy>(&self, id: Id) -> Walker<'_, Id> {
        Walker::new(id, self)
    }

    pub(crate) fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use crate::partitioning::Partitioning;

    use super::*;

    fn definition() -> SchemaDefinition {
        let mut schema = SchemaDefinition::new("blog_post").with_properties(SchemaProperties {
            label: Some("Blog Post".to_string()),
            ..Default::default()
        });

        schema.push_field(Field::new("title", FieldType::String).with_partitioning(Partitioning::Language));
        schema.push_field(Field::new("slug", FieldType::String));
        schema.push_field(Field::new("internal_notes", FieldType::String).hidden());

        schema
    }

    #[test]
    fn fields_keep_declaration_order() {
        let schema = definition();
        let names: Vec<_> = schema.fields().map(|field| field.name()).collect();

        assert_eq!(names, vec!["title", "slug", "internal_notes"]);
    }

    #[test]
    fn display_name_falls_back_to_the_stored_name() {
        let schema = definition();
        assert_eq!(schema.display_name(), "Blog Post");

        let unlabeled = SchemaDefinition::new("blog_post");
        assert_eq!(unlabeled.display_name(), "blog_post");
    }

    #[test]
    fn find_field_walks_the_matching_field() {
        let schema = definition();
        let field = schema.find_field("slug").unwrap();

        assert_eq!(field.name(), "slug");
        assert_eq!(field.partitioning(), Partitioning::Invariant);
        assert!(!field.is_hidden());

        assert!(schema.find_field("missing").is_none());
    }

    #[test]
    fn definitions_round_trip_through_serde() {
        let schema = definition();

        let json = serde_json::to_string(&schema).unwrap();
        let decoded: SchemaDefinition = serde_json::from_str(&json).unwrap();

        let names: Vec<_> = decoded.fields().map(|field| field.name()).collect();
        assert_eq!(names, vec!["title", "slug", "internal_notes"]);
        assert!(decoded.find_field("internal_notes").unwrap().is_hidden());
    }
}
