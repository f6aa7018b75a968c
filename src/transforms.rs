//! Transformation functions applied to attribute values on assignment.
//!
//! A transformation is a pure function from an incoming value (plus the
//! attribute's declaration, for reading sibling configuration) to a
//! normalized value. Built-ins cover whitespace trimming and case folding.

use crate::attribute::AttributeDef;
use crate::value::FieldValue;
use std::sync::Arc;

/// Trait for transformation functions
pub trait Transform: Send + Sync {
    /// Apply the transformation to an incoming value.
    ///
    /// `attribute` is the declaration the transformation was enabled on, so an
    /// implementation can read sibling configuration (e.g. a suffix stored
    /// under its own flag name).
    fn apply(&self, value: FieldValue, attribute: &AttributeDef) -> FieldValue;
}

/// Simple function-based implementation of Transform
impl<F> Transform for F
where
    F: Fn(FieldValue, &AttributeDef) -> FieldValue + Send + Sync,
{
    fn apply(&self, value: FieldValue, attribute: &AttributeDef) -> FieldValue {
        self(value, attribute)
    }
}

/// Wrap a closure as a shareable transformation.
pub fn transform<F>(f: F) -> Arc<dyn Transform>
where
    F: Fn(FieldValue, &AttributeDef) -> FieldValue + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Built-in `trim`: strip leading/trailing whitespace from string values.
///
/// Null and non-string values pass through unchanged.
pub fn trim(value: FieldValue, _attribute: &AttributeDef) -> FieldValue {
    match value {
        FieldValue::String(s) => FieldValue::String(s.trim().to_string()),
        other => other,
    }
}

/// Built-in `lowercase`: lower-case string values.
///
/// Null and non-string values pass through unchanged.
pub fn lowercase(value: FieldValue, _attribute: &AttributeDef) -> FieldValue {
    match value {
        FieldValue::String(s) => FieldValue::String(s.to_lowercase()),
        other => other,
    }
}

/// Built-in `uppercase`: upper-case string values.
///
/// Null and non-string values pass through unchanged.
pub fn uppercase(value: FieldValue, _attribute: &AttributeDef) -> FieldValue {
    match value {
        FieldValue::String(s) => FieldValue::String(s.to_uppercase()),
        other => other,
    }
}
