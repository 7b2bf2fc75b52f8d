use serde::{Deserialize, Serialize};

use crate::partitioning::Partitioning;

/// Definition of one field of a content type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) field_type: FieldType,
    pub(crate) partitioning: Partitioning,
    pub(crate) is_hidden: bool,
    pub(crate) properties: FieldProperties,
}

impl Field {
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            partitioning: Partitioning::default(),
            is_hidden: false,
            properties: FieldProperties::default(),
        }
    }

    pub fn with_partitioning(mut self, partitioning: Partitioning) -> Self {
        self.partitioning = partitioning;
        self
    }

    /// Hidden fields stay in storage but are not rendered in client APIs.
    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.properties.label = Some(label.to_string());
        self
    }

    pub fn with_hints(mut self, hints: &str) -> Self {
        self.properties.hints = Some(hints.to_string());
        self
    }
}

/// The raw value type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    DateTime,
    Tags,
    Json,
}

/// Presentation metadata of a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldProperties {
    pub label: Option<String>,
    pub hints: Option<String>,
}

/// Presentation metadata of a content type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaProperties {
    pub label: Option<String>,
    pub hints: Option<String>,
}
