mod builders;

use query_registry::{MetaField, ObjectType, Registry, ScalarType};

pub(crate) use self::builders::ObjectTypeBuilder;

use super::InputContext;

#[derive(Debug)]
pub(crate) struct OutputContext {
    registry: Registry,
}

impl OutputContext {
    pub(crate) fn new(input_ctx: &InputContext<'_>) -> Self {
        let data_type_name = input_ctx.data_type_name();
        let mut registry = Registry::new(data_type_name.clone());

        let mut data_type = ObjectType::new(data_type_name, []);
        data_type.description = Some(format!(
            "The structure of a {} content type.",
            input_ctx.schema().display_name()
        ));

        registry.create_type(data_type);

        Self { registry }
    }

    pub(crate) fn with_object_type<F>(&mut self, name: &str, f: F)
    where
        F: FnOnce(&mut ObjectTypeBuilder),
    {
        let mut builder = ObjectTypeBuilder::new(name);

        f(&mut builder);

        self.create_object_type(builder.object_type);
    }

    pub(crate) fn create_object_type(&mut self, object: ObjectType) {
        self.registry.create_type(object);
    }

    /// Registers the scalar once per distinct type name.
    pub(crate) fn create_scalar_type(&mut self, name: &str) {
        if self.registry.lookup_type(name).is_none() {
            self.registry.create_type(ScalarType::new(name));
        }
    }

    /// Appends a field to the data type of the content type.
    pub(crate) fn push_data_field(&mut self, field: MetaField) {
        let data_type_name = self.registry.root_type.clone();

        let fields = self
            .registry
            .types
            .get_mut(&data_type_name)
            .and_then(|r#type| r#type.fields_mut())
            .expect("Data type not registered.");

        fields.insert(field.name.to_string(), field);
    }

    pub(crate) fn finalize(self) -> Registry {
        self.registry
    }
}
