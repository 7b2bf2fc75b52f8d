use super::Walker;
use crate::{
    partitioning::Partitioning,
    schema_definition::{Field, FieldId, FieldType},
};

/// Definition of a field.
pub type FieldWalker<'a> = Walker<'a, FieldId>;

impl<'a> FieldWalker<'a> {
    /// The name of the field, as stored.
    pub fn name(self) -> &'a str {
        &self.get().name
    }

    /// The raw value type of the field.
    pub fn field_type(self) -> FieldType {
        self.get().field_type
    }

    /// How the values of the field vary by locale.
    pub fn partitioning(self) -> Partitioning {
        self.get().partitioning
    }

    /// Hidden fields are not rendered in client APIs.
    pub fn is_hidden(self) -> bool {
        self.get().is_hidden
    }

    pub fn label(self) -> Option<&'a str> {
        self.get().properties.label.as_deref()
    }

    pub fn hints(self) -> Option<&'a str> {
        self.get().properties.hints.as_deref()
    }

    /// The label of the field, falling back to its name.
    pub fn display_name(self) -> &'a str {
        self.label().unwrap_or_else(|| self.name())
    }

    fn get(self) -> &'a Field {
        self.schema_definition.field(self.id)
    }
}
