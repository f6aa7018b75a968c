//! Attribute declaration types for model definitions.
//!
//! A declaration carries a column type tag, arbitrary ordered options
//! (transformation flags and any configuration a custom transform reads), and
//! an optional assignment function invoked when the field is set.

use crate::record::Record;
use crate::value::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Assignment function for one attribute.
///
/// Receives the incoming value and the record under construction; commits the
/// value (or a derived one) via [`Record::set_field`].
pub type Setter = Arc<dyn Fn(FieldValue, &mut Record) + Send + Sync>;

/// Raw attribute map handed to definition-time hooks: attribute name -> declaration.
pub type ModelAttributes = IndexMap<String, AttributeDef>;

/// Declaration-level column type tag.
///
/// Passed through untouched by the rewrite hook; consumed by whatever the
/// host does with finalized definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    Json,
}

/// Declaration for one model attribute.
#[derive(Clone, Serialize, Deserialize)]
pub struct AttributeDef {
    /// Column type tag
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// Arbitrary declared properties: transformation flags (`trim: true`) and
    /// configuration read by custom transforms (`append: "(postfix)"`)
    #[serde(flatten)]
    pub options: IndexMap<String, FieldValue>,

    /// Optional assignment function; not part of the serialized form
    #[serde(skip)]
    pub set: Option<Setter>,
}

impl AttributeDef {
    pub fn new(column_type: ColumnType) -> Self {
        Self {
            column_type,
            options: IndexMap::new(),
            set: None,
        }
    }

    /// Set a declaration option.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Enable a transformation flag (shorthand for a `true` option).
    pub fn with_flag(self, name: impl Into<String>) -> Self {
        self.with_option(name, true)
    }

    /// Install an assignment function.
    pub fn with_setter<F>(mut self, set: F) -> Self
    where
        F: Fn(FieldValue, &mut Record) + Send + Sync + 'static,
    {
        self.set = Some(Arc::new(set));
        self
    }

    /// Get a declaration option by name.
    pub fn option(&self, name: &str) -> Option<&FieldValue> {
        self.options.get(name)
    }

    /// Check whether an option enables the named transformation.
    pub fn flag_enabled(&self, name: &str) -> bool {
        self.options.get(name).is_some_and(FieldValue::is_truthy)
    }

    /// Copy of the declaration without its assignment function.
    ///
    /// Transform functions read declaration configuration through this copy;
    /// declarations are static once the model is defined, so the copy stays
    /// faithful for the lifetime of the composed setter.
    pub(crate) fn config_copy(&self) -> Self {
        Self {
            column_type: self.column_type,
            options: self.options.clone(),
            set: None,
        }
    }
}

impl fmt::Debug for AttributeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDef")
            .field("column_type", &self.column_type)
            .field("options", &self.options)
            .field("set", &self.set.as_ref().map(|_| "<setter>"))
            .finish()
    }
}
