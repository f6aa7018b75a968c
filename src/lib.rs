//! # Preen: Declarative Attribute Value Normalization
//!
//! Preen lets a model schema declare lightweight per-field transformations
//! (trim, case folding, custom functions) that run automatically whenever the
//! field is assigned. At definition time it rewrites attribute declarations so
//! that each flagged attribute's assignment path pipes the incoming value
//! through an ordered chain of transformations before committing it.
//!
//! ## Features
//!
//! - **Transformation registry**: built-in `trim`, `lowercase`, and
//!   `uppercase`, extendable and overridable with caller-supplied functions
//! - **Setter-chain composition**: enabled transformations wrap any
//!   pre-existing assignment function instead of replacing its behavior
//! - **Host hooks**: integrates with any host exposing a "before model
//!   definition" extension point; a lightweight [`Schema`] host is included
//! - **YAML declarations**: attribute declarations can be loaded from YAML
//!
//! ## Example
//!
//! ```
//! use indexmap::IndexMap;
//! use preen::{configure, AttributeDef, ColumnType, FieldValue, Schema};
//!
//! let mut schema = Schema::new();
//! configure(&mut schema, Vec::new());
//!
//! let mut attributes = IndexMap::new();
//! attributes.insert(
//!     "email".to_string(),
//!     AttributeDef::new(ColumnType::Text)
//!         .with_flag("trim")
//!         .with_flag("lowercase"),
//! );
//! let model = schema.define("User", attributes);
//!
//! let mut values = IndexMap::new();
//! values.insert("email".to_string(), FieldValue::from("  Alice@Example.COM  "));
//! let record = model.build(values);
//!
//! assert_eq!(record.get("email"), Some(&FieldValue::from("alice@example.com")));
//! ```
//!
//! ## Declaration surface
//!
//! Any declaration option whose name matches a registered transformation and
//! whose value is truthy enables that transformation for the attribute:
//!
//! ```yaml
//! model:
//!   name: User
//!   attributes:
//!     email:
//!       type: text
//!       trim: true
//!       lowercase: true
//! ```

// Core modules
pub mod attribute;
pub mod record;
pub mod registry;
pub mod rewriter;
pub mod transforms;
pub mod value;

// Host integration
pub mod hooks;
pub mod model;

// YAML declaration loading
pub mod loader;

// Re-export key types
pub use attribute::{AttributeDef, ColumnType, ModelAttributes, Setter};
pub use record::Record;
pub use registry::TransformRegistry;
pub use rewriter::rewrite;
pub use transforms::{transform, Transform};
pub use value::FieldValue;

// Re-export host integration
pub use hooks::{configure, BeforeDefineHook, DefineHooks};
pub use model::{Model, Schema};

// Re-export loader types
pub use loader::{load_model, load_models_from_dir, ModelDef, ModelLoader};
