use content_schema::schema_definition::SchemaDefinition;
use inflector::Inflector;

pub(crate) struct InputContext<'a> {
    schema: &'a SchemaDefinition,
}

impl<'a> InputContext<'a> {
    pub(crate) fn new(schema: &'a SchemaDefinition) -> Self {
        Self { schema }
    }

    pub(crate) fn schema(&self) -> &'a SchemaDefinition {
        self.schema
    }

    /// Name of the object type holding the data of one content item.
    pub(crate) fn data_type_name(&self) -> String {
        format!("{}DataDto", self.schema.name().to_pascal_case())
    }

    /// Name of the object type holding the partitioned values of one field.
    pub(crate) fn field_type_name(&self, field_name: &str) -> String {
        format!(
            "{}Data{}Dto",
            self.schema.name().to_pascal_case(),
            field_name.to_pascal_case()
        )
    }

    /// The client-facing name of a field.
    pub(crate) fn client_field_name(&self, field_name: &str) -> String {
        field_name.to_camel_case()
    }
}
