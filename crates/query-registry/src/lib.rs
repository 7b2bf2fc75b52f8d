//! Data structures for the query type system rendered out of content-type
//! definitions.
//!
//! Types in here are plain data. Execution lives with the consumer of the
//! registry; the only logic shipped here is the synchronous evaluation of
//! [`resolvers::Resolver`] over JSON values.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod resolvers;

use resolvers::Resolver;

/// A set of named types, keyed by type name, with a designated root type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Registry {
    pub types: BTreeMap<String, MetaType>,
    pub root_type: String,
}

impl Registry {
    pub fn new(root_type: impl Into<String>) -> Self {
        Self {
            types: BTreeMap::new(),
            root_type: root_type.into(),
        }
    }

    pub fn create_type(&mut self, ty: impl Into<MetaType>) {
        let ty = ty.into();
        self.types.insert(ty.name().to_string(), ty);
    }

    pub fn lookup_type(&self, name: &str) -> Option<&MetaType> {
        self.types.get(name)
    }

    /// The root object of the registry, if one has been registered.
    pub fn root_object(&self) -> Option<&ObjectType> {
        self.lookup_type(&self.root_type).and_then(MetaType::object)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MetaType {
    Scalar(ScalarType),
    Object(ObjectType),
}

impl MetaType {
    pub fn name(&self) -> &str {
        match self {
            MetaType::Scalar(inner) => &inner.name,
            MetaType::Object(inner) => &inner.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            MetaType::Scalar(inner) => inner.description.as_deref(),
            MetaType::Object(inner) => inner.description.as_deref(),
        }
    }

    pub fn object(&self) -> Option<&ObjectType> {
        match self {
            MetaType::Object(inner) => Some(inner),
            MetaType::Scalar(_) => None,
        }
    }

    pub fn fields_mut(&mut self) -> Option<&mut IndexMap<String, MetaField>> {
        match self {
            MetaType::Object(inner) => Some(&mut inner.fields),
            MetaType::Scalar(_) => None,
        }
    }
}

impl From<ObjectType> for MetaType {
    fn from(value: ObjectType) -> Self {
        MetaType::Object(value)
    }
}

impl From<ScalarType> for MetaType {
    fn from(value: ScalarType) -> Self {
        MetaType::Scalar(value)
    }
}

/// An object type. Fields keep their insertion order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, MetaField>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>, fields: impl IntoIterator<Item = MetaField>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: fields
                .into_iter()
                .map(|field| (field.name.clone(), field))
                .collect(),
        }
    }

    pub fn field_by_name(&self, name: &str) -> Option<&MetaField> {
        self.fields.get(name)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct MetaField {
    pub name: String,
    pub description: Option<String>,
    pub ty: MetaFieldType,
    #[serde(skip_serializing_if = "Resolver::is_parent", default)]
    pub resolver: Resolver,
}

impl MetaField {
    pub fn new(name: impl Into<String>, ty: impl Into<MetaFieldType>) -> MetaField {
        MetaField {
            name: name.into(),
            ty: ty.into(),
            ..Default::default()
        }
    }
}

/// A reference to a type in the registry, e.g. `String` or `[String]`.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaFieldType(String);

impl MetaFieldType {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name of the referenced type, with any list or required wrappers
    /// stripped.
    pub fn named_type(&self) -> &str {
        self.0.trim_start_matches('[').trim_end_matches([']', '!'])
    }
}

impl From<&str> for MetaFieldType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MetaFieldType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for MetaFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
