use query_registry::{MetaField, ObjectType};

#[derive(Debug)]
pub(crate) struct ObjectTypeBuilder {
    pub(super) object_type: ObjectType,
}

impl ObjectTypeBuilder {
    pub(super) fn new(name: &str) -> Self {
        Self {
            object_type: ObjectType::new(name, []),
        }
    }

    pub(crate) fn description(&mut self, description: impl Into<String>) {
        self.object_type.description = Some(description.into());
    }

    pub(crate) fn push_field(&mut self, field: MetaField) {
        self.object_type.fields.insert(field.name.clone(), field);
    }
}
