use content_schema::{
    partitioning::{LanguageSet, Partitioning},
    schema_definition::{Field, FieldType, FieldWalker, SchemaDefinition, SchemaProperties},
};
use query_registry::{
    resolvers::{Resolver, Transformer},
    MetaType, ObjectType, Registry,
};
use serde_json::json;

use super::*;

fn blog_schema() -> SchemaDefinition {
    let mut schema = SchemaDefinition::new("blog_post").with_properties(SchemaProperties {
        label: Some("Blog Post".to_string()),
        ..Default::default()
    });

    schema.push_field(
        Field::new("title", FieldType::String)
            .with_partitioning(Partitioning::Language)
            .with_hints("The headline shown in listings."),
    );
    schema.push_field(Field::new("slug", FieldType::String));
    schema.push_field(Field::new("published_at", FieldType::DateTime).with_label("Published at"));
    schema.push_field(Field::new("internal_notes", FieldType::String).hidden());
    schema.push_field(Field::new("metadata", FieldType::Json));

    schema
}

fn render(schema: &SchemaDefinition) -> Registry {
    let languages = LanguageSet::new(["en", "de"]);

    project(schema, &ScalarTypeResolver, &languages)
}

fn object<'a>(registry: &'a Registry, name: &str) -> &'a ObjectType {
    registry
        .lookup_type(name)
        .and_then(MetaType::object)
        .expect("object type not registered")
}

#[test]
fn data_type_is_named_after_the_schema() {
    let registry = render(&blog_schema());

    assert_eq!(registry.root_type, "BlogPostDataDto");

    let root = object(&registry, "BlogPostDataDto");
    assert_eq!(
        root.description.as_deref(),
        Some("The structure of a Blog Post content type.")
    );
}

#[test]
fn data_fields_follow_declaration_order_with_client_names() {
    let registry = render(&blog_schema());
    let root = object(&registry, "BlogPostDataDto");

    let names: Vec<_> = root.fields.keys().collect();
    assert_eq!(names, vec!["title", "slug", "publishedAt"]);
}

#[test]
fn hidden_fields_are_not_rendered() {
    let registry = render(&blog_schema());
    let root = object(&registry, "BlogPostDataDto");

    assert!(root.field_by_name("internalNotes").is_none());
    assert!(registry.lookup_type("BlogPostDataInternalNotesDto").is_none());
}

#[test]
fn fields_without_a_leaf_type_are_left_out_entirely() {
    let registry = render(&blog_schema());
    let root = object(&registry, "BlogPostDataDto");

    assert!(root.field_by_name("metadata").is_none());
    assert!(registry.lookup_type("BlogPostDataMetadataDto").is_none());
}

#[test]
fn partition_entries_follow_the_configured_language_order() {
    let registry = render(&blog_schema());

    let title = object(&registry, "BlogPostDataTitleDto");
    let keys: Vec<_> = title.fields.keys().collect();
    assert_eq!(keys, vec!["en", "de"]);

    let slug = object(&registry, "BlogPostDataSlugDto");
    let keys: Vec<_> = slug.fields.keys().collect();
    assert_eq!(keys, vec!["iv"]);
}

#[test]
fn partition_entries_share_the_leaf_type_and_resolver() {
    let registry = render(&blog_schema());
    let title = object(&registry, "BlogPostDataTitleDto");

    for entry in title.fields.values() {
        assert_eq!(entry.ty.as_str(), "String");
        assert!(matches!(
            &entry.resolver,
            Resolver::Transformer(Transformer::Select { key }) if key == "title"
        ));
        assert_eq!(entry.description.as_deref(), Some("The headline shown in listings."));
    }
}

#[test]
fn descriptions_fall_back_from_label_to_name() {
    let registry = render(&blog_schema());

    let slug = object(&registry, "BlogPostDataSlugDto");
    assert_eq!(
        slug.description.as_deref(),
        Some("The structure of the slug of a Blog Post content type.")
    );

    let published_at = object(&registry, "BlogPostDataPublishedAtDto");
    assert_eq!(
        published_at.description.as_deref(),
        Some("The structure of the Published at of a Blog Post content type.")
    );
}

#[test]
fn data_fields_select_the_stored_field_value() {
    let registry = render(&blog_schema());
    let root = object(&registry, "BlogPostDataDto");

    let title = root.field_by_name("title").unwrap();
    assert_eq!(title.ty.as_str(), "BlogPostDataTitleDto");

    let record = json!({
        "title": { "en": "Hello", "de": "Hallo" },
        "slug": { "iv": "hello" },
    });

    assert_eq!(
        title.resolver.resolve(record),
        json!({ "en": "Hello", "de": "Hallo" })
    );
}

#[test]
fn leaf_scalars_are_registered_once() {
    let mut schema = SchemaDefinition::new("product");
    schema.push_field(Field::new("name", FieldType::String));
    schema.push_field(Field::new("description", FieldType::String));
    schema.push_field(Field::new("price", FieldType::Number));
    schema.push_field(Field::new("keywords", FieldType::Tags));

    let registry = render(&schema);

    assert!(matches!(registry.lookup_type("String"), Some(MetaType::Scalar(_))));
    assert!(matches!(registry.lookup_type("Float"), Some(MetaType::Scalar(_))));

    let keywords = object(&registry, "ProductDataKeywordsDto");
    assert_eq!(keywords.field_by_name("iv").unwrap().ty.as_str(), "[String]");
}

#[test]
fn a_schema_without_fields_renders_an_empty_data_type() {
    let schema = SchemaDefinition::new("empty");
    let registry = render(&schema);

    let root = object(&registry, "EmptyDataDto");
    assert!(root.fields.is_empty());
    assert_eq!(
        root.description.as_deref(),
        Some("The structure of a empty content type.")
    );
}

#[test]
fn a_resolver_without_leaf_types_renders_only_the_data_type() {
    struct Unresolved;

    impl TypeResolver for Unresolved {
        fn resolve_field(&self, _field: FieldWalker<'_>) -> FieldTypeResolution {
            FieldTypeResolution::unresolved()
        }
    }

    let schema = blog_schema();
    let languages = LanguageSet::new(["en", "de"]);
    let registry = project(&schema, &Unresolved, &languages);

    assert_eq!(registry.types.len(), 1);
    assert!(object(&registry, "BlogPostDataDto").fields.is_empty());
}
