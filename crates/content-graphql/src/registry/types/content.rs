use content_schema::partitioning::PartitionResolver;
use query_registry::{
    resolvers::{Resolver, Transformer},
    MetaField,
};

use crate::{
    registry::context::{InputContext, ObjectTypeBuilder, OutputContext},
    resolution::TypeResolver,
};

pub(in crate::registry) fn generate(
    input_ctx: &InputContext<'_>,
    types: &dyn TypeResolver,
    partitions: &dyn PartitionResolver,
    output_ctx: &mut OutputContext,
) {
    let schema = input_ctx.schema();

    for field in schema.fields().filter(|field| !field.is_hidden()) {
        let resolution = types.resolve_field(field);

        // A field without a resolvable leaf type has no representation in
        // the client API.
        let Some(leaf_type) = resolution.leaf_type else {
            continue;
        };

        let field_type_name = input_ctx.field_type_name(field.name());

        output_ctx.create_scalar_type(leaf_type.named_type());

        // The container with one entry per partition key, e.g. `iv` or one
        // entry per configured language.
        output_ctx.with_object_type(&field_type_name, |builder: &mut ObjectTypeBuilder| {
            builder.description(format!(
                "The structure of the {} of a {} content type.",
                field.display_name(),
                schema.display_name(),
            ));

            for partition in partitions.resolve(field.partitioning()) {
                let mut entry = MetaField::new(partition.as_str(), leaf_type.clone());
                entry.description = field.hints().map(ToString::to_string);
                entry.resolver = resolution.resolver.clone();

                builder.push_field(entry);
            }
        });

        let mut data_field = MetaField::new(input_ctx.client_field_name(field.name()), field_type_name.as_str());
        data_field.resolver = Resolver::Transformer(Transformer::select(field.name()));

        output_ctx.push_data_field(data_field);
    }
}
