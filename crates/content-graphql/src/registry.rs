mod context;
mod types;

use content_schema::{partitioning::PartitionResolver, schema_definition::SchemaDefinition};
use query_registry::Registry;

use self::context::{InputContext, OutputContext};
use crate::resolution::TypeResolver;

pub(crate) fn generate(
    schema: &SchemaDefinition,
    types: &dyn TypeResolver,
    partitions: &dyn PartitionResolver,
) -> Registry {
    let input_ctx = InputContext::new(schema);
    let mut output_ctx = OutputContext::new(&input_ctx);

    types::content::generate(&input_ctx, types, partitions, &mut output_ctx);

    output_ctx.finalize()
}
