//! Attribute rewriter: composes transformation chains into assignment functions.
//!
//! Runs once per model definition, before the host finalizes the model. For
//! each attribute whose declaration enables at least one registered
//! transformation, the declaration's assignment function is replaced with a
//! composed one that pipes the incoming value through the enabled
//! transformations (in registry order) and then delegates to the previous
//! assignment function, or commits the value directly when none was declared.

use crate::attribute::ModelAttributes;
use crate::record::Record;
use crate::registry::TransformRegistry;
use crate::transforms::Transform;
use crate::value::FieldValue;
use std::sync::Arc;

/// Rewrite attribute declarations in place.
///
/// Declarations with no enabled transformation are left untouched. For the
/// rest, only the `set` slot changes; column type and options are preserved.
/// Each registry entry is considered once per attribute, so a transformation
/// never runs twice on one assignment.
///
/// Transformation functions and any wrapped previous setter run unguarded: a
/// panic inside either propagates to whoever invoked the assignment.
pub fn rewrite(attributes: &mut ModelAttributes, registry: &TransformRegistry) {
    for (name, attribute) in attributes.iter_mut() {
        let chain: Vec<Arc<dyn Transform>> = registry
            .iter()
            .filter(|(flag, _)| attribute.flag_enabled(flag))
            .map(|(_, transform)| Arc::clone(transform))
            .collect();

        if chain.is_empty() {
            continue;
        }

        tracing::debug!(
            "composing {} transformation(s) for attribute '{}'",
            chain.len(),
            name
        );

        let previous = attribute.set.take();
        let declaration = Arc::new(attribute.config_copy());
        let field = name.clone();

        attribute.set = Some(Arc::new(
            move |mut value: FieldValue, record: &mut Record| {
                for transform in &chain {
                    value = transform.apply(value, &declaration);
                }
                match &previous {
                    Some(set) => set(value, record),
                    None => record.set_field(field.as_str(), value),
                }
            },
        ));
    }
}
