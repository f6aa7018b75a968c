//! Model declaration YAML definitions and loader.
//!
//! Lets attribute declarations (type tag, transformation flags, custom
//! transform configuration) live in YAML next to the rest of a project's
//! configuration. Setters cannot be declared in YAML; they are attached in
//! code after loading, or installed by the rewrite hook at definition time.

use crate::attribute::ModelAttributes;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Model definition from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDef {
    /// Model name (unique identifier)
    pub name: String,

    /// Attribute declarations: attribute name -> declaration
    #[serde(default)]
    pub attributes: ModelAttributes,
}

/// Loader for model declaration YAMLs.
#[derive(Debug, Clone, Default)]
pub struct ModelLoader {
    /// Loaded models: name -> definition
    models: IndexMap<String, ModelDef>,
}

impl ModelLoader {
    /// Create a new empty model loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a model declaration from a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to model YAML file
    ///
    /// # Returns
    /// Loaded model definition
    ///
    /// # Errors
    /// Returns error if file doesn't exist or has invalid format
    pub fn load_model<P: AsRef<Path>>(&mut self, path: P) -> Result<ModelDef, String> {
        let path = path.as_ref();

        // Read file
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read model file {}: {}", path.display(), e))?;

        // Parse YAML
        let yaml: serde_yaml::Value = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML: {}", e))?;

        // Extract model definition
        let model_yaml = yaml
            .get("model")
            .ok_or_else(|| "Model YAML missing 'model' field".to_string())?;

        // Deserialize model
        let model: ModelDef = serde_yaml::from_value(model_yaml.clone())
            .map_err(|e| format!("Failed to parse model definition: {}", e))?;

        // Validate
        self.validate_model(&model)?;

        // Register
        self.models.insert(model.name.clone(), model.clone());

        Ok(model)
    }

    /// Load all model declarations from a directory.
    ///
    /// # Arguments
    /// * `dir_path` - Path to directory containing model YAMLs
    ///
    /// # Returns
    /// Number of models loaded
    pub fn load_models_from_dir<P: AsRef<Path>>(&mut self, dir_path: P) -> Result<usize, String> {
        let dir_path = dir_path.as_ref();

        if !dir_path.exists() {
            return Err(format!("Model directory does not exist: {}", dir_path.display()));
        }

        if !dir_path.is_dir() {
            return Err(format!("Path is not a directory: {}", dir_path.display()));
        }

        let mut count = 0;

        // Read directory entries
        let entries = fs::read_dir(dir_path)
            .map_err(|e| format!("Failed to read directory {}: {}", dir_path.display(), e))?;

        for entry in entries {
            let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
            let path = entry.path();

            // Only process .yaml and .yml files
            if let Some(ext) = path.extension() {
                if ext == "yaml" || ext == "yml" {
                    match self.load_model(&path) {
                        Ok(_) => count += 1,
                        Err(e) => {
                            // Log error but continue loading other models
                            eprintln!("Warning: Failed to load model from {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Ok(count)
    }

    /// Validate a model definition.
    ///
    /// Checks:
    /// - Name is not empty
    /// - Attribute names are not empty
    fn validate_model(&self, model: &ModelDef) -> Result<(), String> {
        if model.name.is_empty() {
            return Err("Model name cannot be empty".to_string());
        }

        for attribute in model.attributes.keys() {
            if attribute.is_empty() {
                return Err(format!(
                    "Model '{}' contains an attribute with an empty name",
                    model.name
                ));
            }
        }

        Ok(())
    }

    /// Check if a model is loaded.
    pub fn has_model(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Get a model definition by name.
    pub fn get_model(&self, name: &str) -> Option<&ModelDef> {
        self.models.get(name)
    }

    /// Get all loaded model names.
    pub fn model_names(&self) -> Vec<&String> {
        self.models.keys().collect()
    }

    /// Get number of loaded models.
    pub fn count(&self) -> usize {
        self.models.len()
    }
}

/// Convenience function to load a single model declaration from a YAML file
///
/// # Arguments
/// * `path` - Path to model YAML file
///
/// # Returns
/// ModelDef on success
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<ModelDef, String> {
    let mut loader = ModelLoader::new();
    loader.load_model(path)
}

/// Convenience function to load all model declarations from a directory
///
/// # Arguments
/// * `dir_path` - Path to directory containing model YAML files
///
/// # Returns
/// Vector of ModelDef structures
pub fn load_models_from_dir<P: AsRef<Path>>(dir_path: P) -> Result<Vec<ModelDef>, String> {
    let mut loader = ModelLoader::new();
    loader.load_models_from_dir(dir_path)?;

    Ok(loader.models.into_values().collect())
}
