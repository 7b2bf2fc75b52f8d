mod field;

pub use field::FieldWalker;

use crate::schema_definition::SchemaDefinition;

/// An abstraction to iterate over the contents of a schema definition.
///
/// The `Id` must be something that points to an object in the definition.
#[derive(Clone, Copy)]
pub struct Walker<'a, Id> {
    pub(super) id: Id,
    pub(super) schema_definition: &'a SchemaDefinition,
}

impl<'a, Id> PartialEq for Walker<'a, Id>
where
    Id: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<'a, Id> Walker<'a, Id>
where
    Id: Copy,
{
    pub fn new(id: Id, schema_definition: &'a SchemaDefinition) -> Self {
        Self {
            id,
            schema_definition,
        }
    }

    pub fn id(self) -> Id {
        self.id
    }
}
