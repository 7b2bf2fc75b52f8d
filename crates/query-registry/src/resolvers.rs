//! Data structures for resolvers.
//!
//! Resolvers describe where a field's value comes from; they carry no
//! behavior beyond a synchronous `serde_json::Value -> serde_json::Value`
//! evaluation step applied by the consumer after the parent value has been
//! resolved.

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub enum Resolver {
    // By default a resolver will just return its parent value
    #[default]
    Parent,
    Transformer(Transformer),
    Composition(Vec<Resolver>),
}

impl Resolver {
    pub fn and_then(mut self, resolver: impl Into<Resolver>) -> Self {
        let resolver = resolver.into();
        match &mut self {
            Resolver::Composition(resolvers) => {
                resolvers.push(resolver);
                self
            }
            _ => Resolver::Composition(vec![self, resolver]),
        }
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, Self::Parent)
    }

    /// Evaluate the resolver against the parent value.
    pub fn resolve(&self, value: serde_json::Value) -> serde_json::Value {
        match self {
            Resolver::Parent => value,
            Resolver::Transformer(transformer) => transformer.transform(value),
            Resolver::Composition(resolvers) => resolvers
                .iter()
                .fold(value, |value, resolver| resolver.resolve(value)),
        }
    }
}

impl From<Transformer> for Resolver {
    fn from(value: Transformer) -> Self {
        Resolver::Transformer(value)
    }
}

/// A synchronous transformation applied to an already resolved value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Transformer {
    /// Key selection on an object value. Anything without the key resolves
    /// to null.
    Select { key: String },
}

impl Transformer {
    pub fn select(key: impl Into<String>) -> Transformer {
        Transformer::Select { key: key.into() }
    }

    pub fn transform(&self, value: serde_json::Value) -> serde_json::Value {
        match self {
            Transformer::Select { key } => match value {
                serde_json::Value::Object(mut object) => {
                    object.remove(key).unwrap_or(serde_json::Value::Null)
                }
                _ => serde_json::Value::Null,
            },
        }
    }
}
