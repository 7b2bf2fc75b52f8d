//! Renders the query types of content-type definitions.
//!
//! The projection is a pure, synchronous mapping: a schema definition goes
//! in, a [`Registry`] of object types comes out. Execution of the produced
//! registry is the consumer's concern.

use content_schema::{partitioning::PartitionResolver, schema_definition::SchemaDefinition};
use query_registry::Registry;

mod registry;
mod resolution;

#[cfg(test)]
mod tests;

pub use resolution::{FieldTypeResolution, ScalarTypeResolver, TypeResolver};

/// Render the query types of one content type.
///
/// Every non-hidden field with a resolvable leaf type becomes a field of
/// the root data type, holding one entry per partition key of the field.
/// Fields without a resolvable leaf type are left out, with no
/// placeholder. Field and partition order follow the declaration order of
/// the definition.
///
/// Client names are not reconciled: when two fields render to the same
/// client name, the last one wins.
pub fn project(
    schema: &SchemaDefinition,
    types: &dyn TypeResolver,
    partitions: &dyn PartitionResolver,
) -> Registry {
    registry::generate(schema, types, partitions)
}
