//! Host integration: definition-time hook registration.
//!
//! The host framework owns model definition; this crate only asks for one
//! extension point, a "before define" callback invoked with the raw attribute
//! map before the model is finalized. [`configure`] resolves the
//! transformation registry for one setup and registers the rewrite as such a
//! callback.

use crate::attribute::ModelAttributes;
use crate::registry::TransformRegistry;
use crate::rewriter::rewrite;
use crate::transforms::Transform;
use std::sync::Arc;

/// Callback invoked with the raw attribute map before a model is finalized.
pub type BeforeDefineHook = Box<dyn Fn(&mut ModelAttributes) + Send + Sync>;

/// Definition-time extension point a host exposes.
pub trait DefineHooks {
    /// Register a callback to run on every model's raw attribute map, before
    /// the definition is finalized.
    fn before_define(&mut self, hook: BeforeDefineHook);
}

/// Register attribute normalization with a host.
///
/// Builds the transformation registry for this setup (built-ins overlaid with
/// `custom`, in pair order) and registers a before-define hook that rewrites
/// every attribute map the host hands it. The registry is scoped to this
/// call: repeated setups never share custom transformations.
pub fn configure<H>(host: &mut H, custom: Vec<(String, Arc<dyn Transform>)>)
where
    H: DefineHooks + ?Sized,
{
    let registry = TransformRegistry::with_custom(custom);
    tracing::debug!(
        "registering attribute rewrite hook with {} transformation(s)",
        registry.len()
    );
    host.before_define(Box::new(move |attributes: &mut ModelAttributes| {
        rewrite(attributes, &registry)
    }));
}
