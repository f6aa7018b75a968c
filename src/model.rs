//! Lightweight model host for embedding and testing.
//!
//! A [`Schema`] collects before-define hooks and finalized models; it is the
//! in-crate stand-in for a full ORM's definition machinery. [`Model::build`]
//! drives the assignment path: each incoming value goes through the
//! attribute's setter when one is declared, otherwise it is committed as-is.

use crate::attribute::ModelAttributes;
use crate::hooks::{BeforeDefineHook, DefineHooks};
use crate::record::Record;
use crate::value::FieldValue;
use indexmap::IndexMap;

/// A finalized model definition.
#[derive(Debug, Clone)]
pub struct Model {
    pub name: String,
    pub attributes: ModelAttributes,
}

impl Model {
    /// Build a record from raw values.
    ///
    /// Values for attributes with a setter go through it; values for
    /// setter-less attributes are committed directly. Values for undeclared
    /// fields are dropped.
    pub fn build(&self, values: IndexMap<String, FieldValue>) -> Record {
        let mut record = Record::new();
        for (field, value) in values {
            match self.attributes.get(&field) {
                Some(attribute) => match &attribute.set {
                    Some(set) => set(value, &mut record),
                    None => record.set_field(field.as_str(), value),
                },
                None => {
                    tracing::debug!(
                        "ignoring value for undeclared field '{}' on model '{}'",
                        field,
                        self.name
                    );
                }
            }
        }
        record
    }
}

/// Collection of model definitions plus the hooks that run before each
/// definition is finalized.
#[derive(Default)]
pub struct Schema {
    hooks: Vec<BeforeDefineHook>,
    models: IndexMap<String, Model>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a model.
    ///
    /// Runs every registered before-define hook over the attribute map, in
    /// registration order, then stores the finalized model. Defining a second
    /// model under the same name replaces the first.
    pub fn define(&mut self, name: impl Into<String>, mut attributes: ModelAttributes) -> &Model {
        let name = name.into();
        for hook in &self.hooks {
            hook(&mut attributes);
        }
        tracing::debug!(
            "defined model '{}' with {} attribute(s)",
            name,
            attributes.len()
        );
        let model = Model {
            name: name.clone(),
            attributes,
        };
        let (index, _) = self.models.insert_full(name, model);
        &self.models[index]
    }

    /// Get a defined model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Check if a model is defined.
    pub fn has_model(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Get all defined model names.
    pub fn model_names(&self) -> Vec<&String> {
        self.models.keys().collect()
    }
}

impl DefineHooks for Schema {
    fn before_define(&mut self, hook: BeforeDefineHook) {
        self.hooks.push(hook);
    }
}
